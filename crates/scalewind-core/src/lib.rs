//! scalewind-core — the uniform scaler contract for external metrics.
//!
//! An autoscaling controller polls pluggable "scalers": metric sources that
//! declare one metric, report whether the backend currently shows load, and
//! produce fresh named samples on demand. This crate defines that contract
//! and the value types that cross it; backend crates (one per monitoring
//! system) implement it.
//!
//! # Architecture
//!
//! ```text
//! hosting controller
//!   ├── metric_spec()   → once, at scaler registration
//!   ├── is_active()     → every polling tick
//!   ├── get_metrics()   → every polling tick
//!   └── close()         → at teardown
//! ```
//!
//! Scalers are stateless across calls apart from their validated
//! configuration, so the controller may poll them concurrently without
//! coordination.

pub mod error;
pub mod scaler;
pub mod types;

pub use error::{ScalerError, ScalerResult};
pub use scaler::Scaler;
pub use types::{ExternalMetricValue, MetricSpec};
