pub mod batch_dto;
pub mod batch_list_response;
pub mod batch_response;
pub mod batches;
pub mod create_batch_request;
pub mod list_batch_query;
pub mod update_batch_request;
