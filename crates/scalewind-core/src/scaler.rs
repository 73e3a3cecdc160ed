//! The uniform scaler contract.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ScalerResult;
use crate::types::{ExternalMetricValue, MetricSpec};

/// Contract every pluggable metric source implements for the hosting
/// autoscaling controller.
///
/// Implementations hold only immutable, validated configuration plus a
/// handle to their remote query collaborator, so overlapping calls from
/// multiple tasks are safe without locking. Each fetching call is an
/// independent remote query: the scaler never caches, never retries, and
/// imposes no timeout of its own. Retry, backoff, and timeout policy belong
/// to the caller and the collaborator respectively.
///
/// Lifecycle is `constructed → usable → closed`; no operation may be called
/// after [`close`](Scaler::close).
#[async_trait]
pub trait Scaler: Send + Sync {
    /// Whether the backend currently reports load, i.e. the latest sample
    /// is greater than zero.
    ///
    /// Remote failures propagate unchanged. A fired `cancel` token aborts
    /// the in-flight query with [`ScalerError::Cancelled`].
    ///
    /// [`ScalerError::Cancelled`]: crate::error::ScalerError::Cancelled
    async fn is_active(&self, cancel: &CancellationToken) -> ScalerResult<bool>;

    /// The metric this scaler exposes and its scaling target.
    ///
    /// Pure projection of validated state: never fails, performs no I/O,
    /// and returns the same spec on every call.
    fn metric_spec(&self) -> MetricSpec;

    /// Fetch a fresh sample, wrapped under the caller-supplied
    /// `metric_name` (the controller may poll under an aliased name) and
    /// the current timestamp. Always a single-element result on success.
    async fn get_metrics(
        &self,
        metric_name: &str,
        cancel: &CancellationToken,
    ) -> ScalerResult<Vec<ExternalMetricValue>>;

    /// Release held resources. Idempotent; a no-op for scalers whose
    /// collaborator owns its own connection lifecycle.
    async fn close(&mut self) -> ScalerResult<()>;
}
