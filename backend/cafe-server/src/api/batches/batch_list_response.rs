use crate::BatchDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BatchListResponse {
    pub batches: Vec<BatchDto>,
}
