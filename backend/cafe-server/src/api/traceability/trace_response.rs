use crate::OriginDto;

use cafe_core::Timeline;

use serde::Serialize;

/// Public traceability payload: the derived timeline plus origin details.
#[derive(Debug, Serialize)]
pub struct TraceResponse {
    #[serde(flatten)]
    pub timeline: Timeline,
    pub origin: OriginDto,
}
