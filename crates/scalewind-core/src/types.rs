//! Controller-facing value types shared by all scaler backends.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Declaration of the metric a scaler exposes and the target value the
/// hosting controller scales against.
///
/// The target is a raw quantity, not an average across replicas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetricSpec {
    /// Name the metric is registered under.
    pub metric_name: String,
    /// Target value for the metric.
    pub target_value: i64,
}

/// A single named, timestamped observation reported to the controller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExternalMetricValue {
    /// Name the caller requested the metric under.
    pub metric_name: String,
    /// Observed sample.
    pub value: f64,
    /// Unix timestamp (seconds) when the sample was wrapped.
    pub timestamp: u64,
}

impl ExternalMetricValue {
    /// Wrap a fresh sample under `metric_name`, stamped with the current time.
    pub fn now(metric_name: impl Into<String>, value: f64) -> Self {
        Self {
            metric_name: metric_name.into(),
            value,
            timestamp: epoch_secs(),
        }
    }
}

fn epoch_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_carries_caller_name_and_timestamp() {
        let value = ExternalMetricValue::now("queue-depth", 42.0);
        assert_eq!(value.metric_name, "queue-depth");
        assert_eq!(value.value, 42.0);
        assert!(value.timestamp > 0);
    }

    #[test]
    fn metric_spec_equality() {
        let a = MetricSpec {
            metric_name: "m".to_string(),
            target_value: 5,
        };
        assert_eq!(a, a.clone());
    }
}
