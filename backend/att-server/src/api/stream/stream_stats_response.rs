use att_hub::HubStats;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StreamStatsResponse {
    pub success: bool,
    pub stats: HubStats,
}
