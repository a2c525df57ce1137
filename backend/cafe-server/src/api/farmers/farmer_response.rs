use crate::FarmerDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct FarmerResponse {
    pub farmer: FarmerDto,
}
