use serde::Deserialize;

/// `?limit=` on history endpoints.
///
/// Kept as a raw string so an unparseable value falls back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<String>,
}
