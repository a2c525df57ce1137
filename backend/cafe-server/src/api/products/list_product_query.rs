use serde::Deserialize;

/// Query parameters for listing products
#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    /// When true, only products currently offered in the shop
    #[serde(default)]
    pub active_only: bool,
}
