//! scalewind-azure-monitor — Azure Monitor external-metric scaler.
//!
//! Validates the loosely-typed trigger metadata the hosting controller
//! hands out into a typed [`MonitorQuery`], then adapts a single Azure
//! Monitor metric into the uniform [`Scaler`] contract from
//! `scalewind-core`.
//!
//! # Architecture
//!
//! ```text
//! trigger metadata + secrets
//!   │
//!   │  MonitorQuery::parse()            (once, at construction)
//!   ▼
//! MonitorScaler ── Scaler contract ───▶ hosting controller
//!   │
//!   └── MetricsClient::metric_value()   (every activity/metric poll)
//! ```
//!
//! The wire client that authenticates against the Azure Monitor API is
//! injected behind the [`MetricsClient`] trait; this crate never opens a
//! connection itself.
//!
//! [`Scaler`]: scalewind_core::Scaler

pub mod client;
pub mod metadata;
pub mod scaler;

pub use client::MetricsClient;
pub use metadata::MonitorQuery;
pub use scaler::MonitorScaler;
