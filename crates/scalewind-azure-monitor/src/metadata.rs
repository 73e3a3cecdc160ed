//! Trigger metadata validation.
//!
//! The hosting controller hands each scaler a flat string bag of trigger
//! metadata plus a separate secret bag. [`MonitorQuery::parse`] normalizes
//! those into the typed, immutable parameters one Azure Monitor query
//! needs, failing on the first missing or malformed field.

use std::collections::HashMap;

use tracing::warn;

use scalewind_core::{ScalerError, ScalerResult};

const TARGET_VALUE: &str = "targetValue";
const RESOURCE_URI: &str = "resourceURI";
const TENANT_ID: &str = "tenantId";
const SUBSCRIPTION_ID: &str = "subscriptionId";
const RESOURCE_GROUP: &str = "resourceGroupName";
const METRIC_NAME: &str = "metricName";
const METRIC_FILTER: &str = "metricFilter";
const AGGREGATION_INTERVAL: &str = "metricAggregationInterval";
const AGGREGATION_TYPE: &str = "metricAggregationType";
const CLIENT_ID: &str = "activeDirectoryClientId";
const CLIENT_SECRET: &str = "activeDirectoryClientPassword";

/// Validated, immutable parameters for one Azure Monitor metric query.
///
/// Built once at scaler construction and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorQuery {
    pub resource_uri: String,
    pub tenant_id: String,
    pub subscription_id: String,
    pub resource_group: String,
    pub metric_name: String,
    /// Dimension filter; empty means "no filter".
    pub filter: String,
    /// Aggregation time span, passed through verbatim. The `H:MM:SS`
    /// grammar is checked by the query layer, not here.
    pub aggregation_interval: String,
    /// Aggregation kind (e.g. "Average", "Total"); informational, not
    /// validated against an enum.
    pub aggregation_type: String,
    /// Service principal identity used by the query client.
    pub client_id: String,
    /// Service principal secret; the key must be configured but the value
    /// may be empty.
    pub client_secret: String,
    /// Scaling target. Defaults to 0 when absent from the metadata.
    pub target_value: i64,
}

impl MonitorQuery {
    /// Validate the trigger metadata and secret bags into a query.
    ///
    /// A field counts as present only when its key exists and the value is
    /// non-empty. Validation stops at the first missing or malformed field
    /// and names it in the error. Credential keys are read from `config`
    /// first, falling back to `secrets` when the config key is absent or
    /// empty.
    ///
    /// Pure and deterministic: no I/O, same bags always yield the same
    /// result.
    pub fn parse(
        config: &HashMap<String, String>,
        secrets: &HashMap<String, String>,
    ) -> ScalerResult<Self> {
        let target_value = match non_empty(config, TARGET_VALUE) {
            Some(raw) => raw.parse::<i64>().map_err(|_| ScalerError::InvalidNumericField {
                field: TARGET_VALUE,
                raw: raw.to_string(),
            })?,
            None => {
                warn!(
                    key = TARGET_VALUE,
                    "targetValue absent, defaulting to 0; any positive sample will read as active"
                );
                0
            }
        };

        Ok(Self {
            resource_uri: required(config, RESOURCE_URI)?,
            tenant_id: required(config, TENANT_ID)?,
            subscription_id: required(config, SUBSCRIPTION_ID)?,
            resource_group: required(config, RESOURCE_GROUP)?,
            metric_name: required(config, METRIC_NAME)?,
            filter: optional(config, METRIC_FILTER),
            aggregation_interval: optional(config, AGGREGATION_INTERVAL),
            aggregation_type: optional(config, AGGREGATION_TYPE),
            client_id: credential(config, secrets, CLIENT_ID)?,
            client_secret: credential_allow_empty(config, secrets, CLIENT_SECRET)?,
            target_value,
        })
    }
}

/// Look up `key`, treating an empty value the same as an absent key.
fn non_empty<'a>(bag: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    bag.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

fn required(bag: &HashMap<String, String>, key: &'static str) -> ScalerResult<String> {
    non_empty(bag, key)
        .map(str::to_string)
        .ok_or(ScalerError::MissingField(key))
}

fn optional(bag: &HashMap<String, String>, key: &str) -> String {
    non_empty(bag, key).unwrap_or_default().to_string()
}

/// Credential lookup: the metadata bag is primary, the secret bag is
/// consulted only when the metadata key is absent or empty.
fn credential(
    config: &HashMap<String, String>,
    secrets: &HashMap<String, String>,
    key: &'static str,
) -> ScalerResult<String> {
    non_empty(config, key)
        .or_else(|| non_empty(secrets, key))
        .map(str::to_string)
        .ok_or(ScalerError::MissingField(key))
}

/// Like [`credential`], but an existing key with an empty value is
/// accepted: the backend distinguishes "no password" from "not configured".
fn credential_allow_empty(
    config: &HashMap<String, String>,
    secrets: &HashMap<String, String>,
    key: &'static str,
) -> ScalerResult<String> {
    config
        .get(key)
        .or_else(|| secrets.get(key))
        .cloned()
        .ok_or(ScalerError::MissingField(key))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> HashMap<String, String> {
        [
            (RESOURCE_URI, "Microsoft.ContainerInstance/containerGroups/mygroup"),
            (TENANT_ID, "tenant-abc"),
            (SUBSCRIPTION_ID, "sub-123"),
            (RESOURCE_GROUP, "my-rg"),
            (METRIC_NAME, "CpuUsage"),
            (METRIC_FILTER, "containerName eq 'web'"),
            (AGGREGATION_INTERVAL, "0:5:0"),
            (AGGREGATION_TYPE, "Average"),
            (CLIENT_ID, "principal-id"),
            (CLIENT_SECRET, "principal-pass"),
            (TARGET_VALUE, "5"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
    }

    fn no_secrets() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn full_config_parses() {
        let query = MonitorQuery::parse(&full_config(), &no_secrets()).unwrap();
        assert_eq!(
            query.resource_uri,
            "Microsoft.ContainerInstance/containerGroups/mygroup"
        );
        assert_eq!(query.tenant_id, "tenant-abc");
        assert_eq!(query.subscription_id, "sub-123");
        assert_eq!(query.resource_group, "my-rg");
        assert_eq!(query.metric_name, "CpuUsage");
        assert_eq!(query.filter, "containerName eq 'web'");
        assert_eq!(query.aggregation_interval, "0:5:0");
        assert_eq!(query.aggregation_type, "Average");
        assert_eq!(query.client_id, "principal-id");
        assert_eq!(query.client_secret, "principal-pass");
        assert_eq!(query.target_value, 5);
    }

    #[test]
    fn each_required_key_is_enforced() {
        let required_keys = [
            RESOURCE_URI,
            TENANT_ID,
            SUBSCRIPTION_ID,
            RESOURCE_GROUP,
            METRIC_NAME,
            CLIENT_ID,
            CLIENT_SECRET,
        ];

        for key in required_keys {
            let mut config = full_config();
            config.remove(key);

            let err = MonitorQuery::parse(&config, &no_secrets()).unwrap_err();
            match err {
                ScalerError::MissingField(field) => {
                    assert_eq!(field, key, "wrong field named for missing {key}")
                }
                other => panic!("expected MissingField for {key}, got {other:?}"),
            }
        }
    }

    #[test]
    fn empty_value_counts_as_missing() {
        let mut config = full_config();
        config.insert(METRIC_NAME.to_string(), String::new());

        let err = MonitorQuery::parse(&config, &no_secrets()).unwrap_err();
        assert!(matches!(err, ScalerError::MissingField(METRIC_NAME)));
    }

    #[test]
    fn optional_fields_default_to_empty() {
        let mut config = full_config();
        config.remove(METRIC_FILTER);
        config.remove(AGGREGATION_INTERVAL);
        config.remove(AGGREGATION_TYPE);

        let query = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        assert_eq!(query.filter, "");
        assert_eq!(query.aggregation_interval, "");
        assert_eq!(query.aggregation_type, "");
    }

    #[test]
    fn target_value_defaults_to_zero() {
        let mut config = full_config();
        config.remove(TARGET_VALUE);

        let query = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        assert_eq!(query.target_value, 0);
    }

    #[test]
    fn target_value_must_be_numeric() {
        let mut config = full_config();
        config.insert(TARGET_VALUE.to_string(), "AA".to_string());

        let err = MonitorQuery::parse(&config, &no_secrets()).unwrap_err();
        match err {
            ScalerError::InvalidNumericField { field, raw } => {
                assert_eq!(field, TARGET_VALUE);
                assert_eq!(raw, "AA");
            }
            other => panic!("expected InvalidNumericField, got {other:?}"),
        }
    }

    #[test]
    fn malformed_aggregation_interval_passes_through() {
        // Time-span grammar checking belongs to the query layer, so "0:1"
        // must survive validation untouched.
        let mut config = full_config();
        config.insert(AGGREGATION_INTERVAL.to_string(), "0:1".to_string());

        let query = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        assert_eq!(query.aggregation_interval, "0:1");
    }

    #[test]
    fn credentials_fall_back_to_secret_bag() {
        let mut config = full_config();
        config.remove(CLIENT_ID);
        config.remove(CLIENT_SECRET);

        let secrets: HashMap<String, String> = [
            (CLIENT_ID.to_string(), "secret-principal".to_string()),
            (CLIENT_SECRET.to_string(), "secret-pass".to_string()),
        ]
        .into_iter()
        .collect();

        let query = MonitorQuery::parse(&config, &secrets).unwrap();
        assert_eq!(query.client_id, "secret-principal");
        assert_eq!(query.client_secret, "secret-pass");
    }

    #[test]
    fn config_credentials_win_over_secret_bag() {
        let secrets: HashMap<String, String> =
            [(CLIENT_ID.to_string(), "secret-principal".to_string())]
                .into_iter()
                .collect();

        let query = MonitorQuery::parse(&full_config(), &secrets).unwrap();
        assert_eq!(query.client_id, "principal-id");
    }

    #[test]
    fn client_secret_may_be_empty_but_must_exist() {
        let mut config = full_config();
        config.insert(CLIENT_SECRET.to_string(), String::new());

        let query = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        assert_eq!(query.client_secret, "");

        config.remove(CLIENT_SECRET);
        let err = MonitorQuery::parse(&config, &no_secrets()).unwrap_err();
        assert!(matches!(err, ScalerError::MissingField(CLIENT_SECRET)));
    }

    #[test]
    fn empty_bags_fail_on_first_required_field() {
        let err = MonitorQuery::parse(&no_secrets(), &no_secrets()).unwrap_err();
        assert!(matches!(err, ScalerError::MissingField(RESOURCE_URI)));
    }

    #[test]
    fn parse_is_deterministic() {
        let config = full_config();
        let a = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        let b = MonitorQuery::parse(&config, &no_secrets()).unwrap();
        assert_eq!(a, b);
    }
}
