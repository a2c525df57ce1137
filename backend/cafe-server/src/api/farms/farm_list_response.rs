use crate::FarmDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FarmListResponse {
    pub farms: Vec<FarmDto>,
}
