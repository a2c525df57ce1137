use crate::FarmDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FarmResponse {
    pub farm: FarmDto,
}
