use serde::Deserialize;

/// Limit/offset pagination used by the admin list endpoints.
///
/// Axum's `Query` extractor cannot flatten nested structs, so the list
/// endpoints embed these fields directly and share the default through
/// `PaginationParam::default_limit`.
#[derive(Deserialize)]
pub struct PaginationParam {
    #[serde(default = "PaginationParam::default_limit")]
    pub limit: u64,
    #[serde(default)]
    pub offset: u64,
}

impl PaginationParam {
    pub fn default_limit() -> u64 {
        50
    }
}

/// Optional month/year pair used by the count and revenue filters.
#[derive(Deserialize)]
pub struct MonthYearParam {
    pub month: Option<u32>,
    pub year: Option<i32>,
}
