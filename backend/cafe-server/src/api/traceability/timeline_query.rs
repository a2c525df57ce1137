use serde::Deserialize;

/// Query parameters shared by the timeline and trace endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TimelineQuery {
    /// "es" or "en"; the site default when omitted
    pub lang: Option<String>,
    /// RFC 3339 instant to classify against instead of the wall clock
    pub now: Option<String>,
}
