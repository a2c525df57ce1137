use crate::ProductDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub product: ProductDto,
}
