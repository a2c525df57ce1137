pub mod admin;
pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;


pub use api::{
    batches::{
        batch_dto::BatchDto,
        batch_list_response::BatchListResponse,
        batch_response::BatchResponse,
        batches::{
            create_batch, delete_batch, get_batch, get_batch_by_code, list_batches, update_batch,
        },
        create_batch_request::CreateBatchRequest,
        list_batch_query::ListBatchesQuery,
        update_batch_request::UpdateBatchRequest,
    },
    delete_response::DeleteResponse,
    error::ApiError,
    error::Result as ApiResult,
    farmers::{
        create_farmer_request::CreateFarmerRequest,
        farmer_dto::FarmerDto,
        farmer_list_response::FarmerListResponse,
        farmer_response::FarmerResponse,
        farmers::{
            create_farmer, delete_farmer, get_farmer, list_farmer_farms, list_farmers,
            update_farmer,
        },
        update_farmer_request::UpdateFarmerRequest,
    },
    farms::{
        create_farm_request::CreateFarmRequest,
        farm_dto::FarmDto,
        farm_list_response::FarmListResponse,
        farm_response::FarmResponse,
        farms::{create_farm, delete_farm, get_farm, list_farms, update_farm},
        update_farm_request::UpdateFarmRequest,
    },
    products::{
        create_product_request::CreateProductRequest,
        list_product_query::ListProductsQuery,
        product_dto::ProductDto,
        product_list_response::ProductListResponse,
        product_response::ProductResponse,
        products::{create_product, delete_product, get_product, list_products, update_product},
        update_product_request::UpdateProductRequest,
    },
    traceability::{
        origin_dto::OriginDto,
        timeline_query::TimelineQuery,
        trace_response::TraceResponse,
        traceability::{get_batch_timeline, trace_batch},
    },
};
pub use app_state::AppState;
pub use metrics::Metrics;

pub use crate::routes::build_router;
