pub mod create_farmer_request;
pub mod farmer_dto;
pub mod farmer_list_response;
pub mod farmer_response;
pub mod farmers;
pub mod update_farmer_request;
