pub mod origin_dto;
pub mod timeline_query;
pub mod trace_response;
pub mod traceability;
