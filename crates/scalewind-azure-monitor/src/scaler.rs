//! Azure Monitor scaler — one validated query behind the scaler contract.
//!
//! Holds an immutable [`MonitorQuery`] for its whole lifetime; every
//! contract call is an independent remote fetch through the injected
//! [`MetricsClient`]. No caching, no retry, no internal timeout.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use scalewind_core::{ExternalMetricValue, MetricSpec, Scaler, ScalerError, ScalerResult};

use crate::client::MetricsClient;
use crate::metadata::MonitorQuery;

/// Scaler backed by a single Azure Monitor metric.
pub struct MonitorScaler {
    query: MonitorQuery,
    client: Arc<dyn MetricsClient>,
}

impl std::fmt::Debug for MonitorScaler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorScaler")
            .field("query", &self.query)
            .finish_non_exhaustive()
    }
}

impl MonitorScaler {
    /// Build a scaler from raw trigger metadata.
    ///
    /// Validation failures are terminal: no scaler is produced and the
    /// error names the offending field.
    pub fn new(
        config: &HashMap<String, String>,
        secrets: &HashMap<String, String>,
        client: Arc<dyn MetricsClient>,
    ) -> ScalerResult<Self> {
        let query = MonitorQuery::parse(config, secrets)?;
        Ok(Self { query, client })
    }

    /// Build a scaler from an already-validated query.
    pub fn from_query(query: MonitorQuery, client: Arc<dyn MetricsClient>) -> Self {
        Self { query, client }
    }

    /// The validated query this scaler polls.
    pub fn query(&self) -> &MonitorQuery {
        &self.query
    }

    /// One remote fetch, raced against the caller's cancellation token.
    ///
    /// Biased toward cancellation so an already-fired token never reaches
    /// the client.
    async fn fetch(&self, cancel: &CancellationToken) -> ScalerResult<f64> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ScalerError::Cancelled),
            result = self.client.metric_value(&self.query) => {
                result.map_err(ScalerError::RemoteQuery)
            }
        }
    }
}

#[async_trait]
impl Scaler for MonitorScaler {
    async fn is_active(&self, cancel: &CancellationToken) -> ScalerResult<bool> {
        match self.fetch(cancel).await {
            Ok(value) => {
                debug!(metric = %self.query.metric_name, value, "activity check");
                Ok(value > 0.0)
            }
            Err(e) => {
                error!(
                    metric = %self.query.metric_name,
                    error = %e,
                    "activity check failed"
                );
                Err(e)
            }
        }
    }

    fn metric_spec(&self) -> MetricSpec {
        MetricSpec {
            metric_name: self.query.metric_name.clone(),
            target_value: self.query.target_value,
        }
    }

    async fn get_metrics(
        &self,
        metric_name: &str,
        cancel: &CancellationToken,
    ) -> ScalerResult<Vec<ExternalMetricValue>> {
        let value = match self.fetch(cancel).await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    metric = %self.query.metric_name,
                    requested = metric_name,
                    error = %e,
                    "metric fetch failed"
                );
                return Err(e);
            }
        };

        // Wrapped under the caller's name: the controller may poll the
        // same scaler under an aliased metric name.
        Ok(vec![ExternalMetricValue::now(metric_name, value)])
    }

    async fn close(&mut self) -> ScalerResult<()> {
        // The query client owns its connection lifecycle; nothing held here.
        Ok(())
    }
}
