//! Usage, sending limits and account diagnostics.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;

use rw_core::error::RwResult;

use crate::client::ApiClient;

/// Date range for daily usage, inclusive on both ends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DailyUsageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
}

impl DailyUsageQuery {
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        Self {
            from: Some(from),
            to: Some(to),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Usage<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn usage(&self) -> Usage<'_> {
        Usage { client: self }
    }
}

impl Usage<'_> {
    /// Per-day send and delivery counts.
    pub async fn get_daily<Q: Serialize + ?Sized>(&self, filters: &Q) -> RwResult<Value> {
        self.client.get("/usage/daily", filters).await
    }

    pub async fn get_limits(&self) -> RwResult<Value> {
        self.client.get("/limits", &()).await
    }

    pub async fn get_diagnostics(&self) -> RwResult<Value> {
        self.client.get("/diagnostics", &()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::query_pairs;

    #[test]
    fn test_daily_usage_query_dates() {
        let query = DailyUsageQuery::between(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 10, 18).unwrap(),
        );
        let pairs = query_pairs(&query).unwrap();
        assert_eq!(
            pairs,
            vec![
                ("from".to_string(), "2026-10-01".to_string()),
                ("to".to_string(), "2026-10-18".to_string()),
            ]
        );
    }

    #[test]
    fn test_open_ended_range() {
        let query = DailyUsageQuery {
            from: NaiveDate::from_ymd_opt(2026, 1, 1),
            to: None,
        };
        assert_eq!(query_pairs(&query).unwrap().len(), 1);
    }
}
