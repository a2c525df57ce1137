pub mod create_farm_request;
pub mod farm_dto;
pub mod farm_list_response;
pub mod farm_response;
pub mod farms;
pub mod update_farm_request;
