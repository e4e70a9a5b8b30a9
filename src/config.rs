//! Balancer configuration passed in from JavaScript

use serde::{Deserialize, Serialize};

/// Which elements to balance and when
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct BalancerConfig {
    /// Id of the element whose height is grown
    pub container_id: String,

    /// Ids of the columns to cover, in measurement order
    pub column_ids: Vec<String>,

    /// Re-run on window resize as well as on load
    pub refresh_on_resize: bool,
}

impl Default for BalancerConfig {
    fn default() -> Self {
        Self {
            container_id: "homeColumns".to_string(),
            column_ids: vec![
                "training".to_string(),
                "who_uses".to_string(),
                "news".to_string(),
            ],
            refresh_on_resize: false,
        }
    }
}

impl BalancerConfig {
    /// Events that should trigger a re-balance
    pub fn trigger_events(&self) -> Vec<&'static str> {
        let mut events = vec!["load"];
        if self.refresh_on_resize {
            events.push("resize");
        }
        events
    }
}
