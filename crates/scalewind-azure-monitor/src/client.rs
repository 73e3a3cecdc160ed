//! Remote metric query seam.

use async_trait::async_trait;

use crate::metadata::MonitorQuery;

/// Executes one Azure Monitor metric query.
///
/// Implementations own transport, authentication flow, and timeout policy;
/// the scaler only supplies the validated query parameters and consumes a
/// single aggregated sample. A non-error result is intended to be
/// non-negative — a backend that reports negative values is broken at the
/// client layer, not modeled here.
#[async_trait]
pub trait MetricsClient: Send + Sync {
    /// Fetch the current aggregated value for `query.metric_name` on the
    /// target resource.
    async fn metric_value(&self, query: &MonitorQuery) -> anyhow::Result<f64>;
}
