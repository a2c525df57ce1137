use crate::BatchDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BatchResponse {
    pub batch: BatchDto,
}
