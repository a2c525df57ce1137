use crate::ProductDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub products: Vec<ProductDto>,
}
