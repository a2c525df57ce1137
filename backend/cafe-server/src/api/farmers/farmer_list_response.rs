use crate::FarmerDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FarmerListResponse {
    pub farmers: Vec<FarmerDto>,
}
