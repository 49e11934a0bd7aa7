pub mod display;
pub mod mock;

use serde::Serialize;
use std::str::FromStr;

use crate::query::QueryError;

/// Display-only counters computed for one wallpaper. Produced either by
/// the mock deriver (purely from the id) or by formatting persisted
/// counters; the two paths are selectable via [`StatsMode`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    pub downloads: String,
    pub likes: String,
    pub views: String,
    pub featured: bool,
}

/// Which stats source the detail page merges in. Mock stats are kept as
/// an independently selectable mode rather than a retired fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsMode {
    #[default]
    Mock,
    Persisted,
}

impl FromStr for StatsMode {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mock" => Ok(StatsMode::Mock),
            "persisted" => Ok(StatsMode::Persisted),
            _ => Err(QueryError::InvalidParameter(format!(
                "unknown stats mode: {}",
                s
            ))),
        }
    }
}
