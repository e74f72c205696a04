//! Service endpoint resolution
//!
//! Maps service aliases to canonical endpoint keys and loads per-service
//! endpoint overrides from `AWS_ENDPOINT_URL_*` environment variables.
//! Overrides are loaded once at client construction time and are immutable
//! for the rest of the process's life.

use std::collections::HashMap;

/// Canonical service key -> endpoint URL
pub type EndpointOverrideMap = HashMap<String, String>;

// Declared order decides which alias wins when several alias variables
// target the same canonical key and no canonical variable is set.
const SERVICE_ENDPOINT_KEY_ALIASES: &[(&str, &str)] = &[
    ("cloudwatch", "monitoring"),
    ("monitoring", "monitoring"),
    ("sts", "sts"),
    ("iam", "iam"),
    ("tagging", "tagging"),
    ("resourcegroupstaggingapi", "tagging"),
    ("autoscaling", "autoscaling"),
    ("apigateway", "apigateway"),
    ("apigatewayv2", "apigateway"),
    ("ec2", "ec2"),
    ("dms", "dms"),
    ("databasemigrationservice", "dms"),
    ("aps", "aps"),
    ("amp", "aps"),
    ("prometheus", "aps"),
    ("prometheusservice", "aps"),
    ("storagegateway", "storagegateway"),
    ("shield", "shield"),
];

// Sorted; every value in the alias table appears here.
const CANONICAL_SERVICE_ENDPOINT_KEYS: &[&str] = &[
    "apigateway",
    "aps",
    "autoscaling",
    "dms",
    "ec2",
    "iam",
    "monitoring",
    "shield",
    "storagegateway",
    "sts",
    "tagging",
];

/// Canonical service key for an alias, case-insensitive. `None` signals an
/// unsupported service; the caller decides whether that is fatal.
pub fn canonical_key(alias: &str) -> Option<&'static str> {
    let alias = alias.to_ascii_lowercase();
    SERVICE_ENDPOINT_KEY_ALIASES
        .iter()
        .find_map(|&(a, canonical)| (a == alias).then_some(canonical))
}

/// The fixed, sorted set of supported canonical service keys
pub fn canonical_keys() -> &'static [&'static str] {
    CANONICAL_SERVICE_ENDPOINT_KEYS
}

/// Defensive copy of the alias table; mutating it never touches resolver
/// state.
pub fn alias_table() -> HashMap<String, String> {
    SERVICE_ENDPOINT_KEY_ALIASES
        .iter()
        .map(|&(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect()
}

/// Load endpoint overrides from the process environment.
pub fn load_endpoint_overrides_from_env() -> EndpointOverrideMap {
    load_endpoint_overrides(|name| std::env::var(name).ok())
}

/// Load endpoint overrides through an injected variable lookup.
///
/// Canonical-named variables always win over alias-named ones; among
/// competing alias variables the first alias in declared table order wins.
/// Empty values are treated as unset.
pub fn load_endpoint_overrides<F>(lookup: F) -> EndpointOverrideMap
where
    F: Fn(&str) -> Option<String>,
{
    let mut endpoints = EndpointOverrideMap::new();

    for &key in CANONICAL_SERVICE_ENDPOINT_KEYS {
        if let Some(url) = lookup(&endpoint_env_var_name(key)) {
            if !url.is_empty() {
                endpoints.insert(key.to_string(), url);
            }
        }
    }

    for &(alias, canonical) in SERVICE_ENDPOINT_KEY_ALIASES {
        if endpoints.contains_key(canonical) {
            continue;
        }
        if let Some(url) = lookup(&endpoint_env_var_name(alias)) {
            if !url.is_empty() {
                endpoints.insert(canonical.to_string(), url);
            }
        }
    }

    endpoints
}

fn endpoint_env_var_name(key: &str) -> String {
    format!("AWS_ENDPOINT_URL_{}", key.to_ascii_uppercase().replace('-', "_"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find_map(|&(k, v)| (k == name).then(|| v.to_string()))
        }
    }

    #[test]
    fn test_every_alias_maps_to_a_listed_canonical_key() {
        for &(alias, canonical) in SERVICE_ENDPOINT_KEY_ALIASES {
            assert_eq!(canonical_key(alias), Some(canonical));
            assert!(
                CANONICAL_SERVICE_ENDPOINT_KEYS.contains(&canonical),
                "alias {alias} maps to unlisted key {canonical}"
            );
        }
    }

    #[test]
    fn test_every_canonical_key_is_its_own_alias() {
        for &key in CANONICAL_SERVICE_ENDPOINT_KEYS {
            assert_eq!(canonical_key(key), Some(key));
        }
    }

    #[test]
    fn test_canonical_keys_are_sorted_and_unique() {
        let keys = canonical_keys();
        assert!(keys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(canonical_key("CloudWatch"), Some("monitoring"));
        assert_eq!(canonical_key("cloudwatch"), Some("monitoring"));
        assert_eq!(canonical_key("STS"), Some("sts"));
    }

    #[test]
    fn test_unknown_alias_is_not_an_error() {
        assert_eq!(canonical_key("dynamodb"), None);
    }

    #[test]
    fn test_alias_table_is_a_copy() {
        let mut table = alias_table();
        table.insert("cloudwatch".to_string(), "tampered".to_string());
        assert_eq!(canonical_key("cloudwatch"), Some("monitoring"));
    }

    #[test]
    fn test_canonical_variable_beats_alias_variable() {
        let vars = [
            ("AWS_ENDPOINT_URL_CLOUDWATCH", "http://alias:4566"),
            ("AWS_ENDPOINT_URL_MONITORING", "http://canonical:4566"),
        ];
        let overrides = load_endpoint_overrides(lookup_from(&vars));
        assert_eq!(
            overrides.get("monitoring").map(String::as_str),
            Some("http://canonical:4566")
        );
    }

    #[test]
    fn test_first_declared_alias_wins_among_aliases() {
        // "amp" precedes "prometheus" in the alias table.
        let vars = [
            ("AWS_ENDPOINT_URL_PROMETHEUS", "http://second:4566"),
            ("AWS_ENDPOINT_URL_AMP", "http://first:4566"),
        ];
        let overrides = load_endpoint_overrides(lookup_from(&vars));
        assert_eq!(
            overrides.get("aps").map(String::as_str),
            Some("http://first:4566")
        );
    }

    #[test]
    fn test_alias_variable_used_when_no_canonical_variable() {
        let vars = [("AWS_ENDPOINT_URL_RESOURCEGROUPSTAGGINGAPI", "http://tags:4566")];
        let overrides = load_endpoint_overrides(lookup_from(&vars));
        assert_eq!(
            overrides.get("tagging").map(String::as_str),
            Some("http://tags:4566")
        );
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let vars = [
            ("AWS_ENDPOINT_URL_MONITORING", ""),
            ("AWS_ENDPOINT_URL_CLOUDWATCH", "http://alias:4566"),
        ];
        let overrides = load_endpoint_overrides(lookup_from(&vars));
        assert_eq!(
            overrides.get("monitoring").map(String::as_str),
            Some("http://alias:4566")
        );
    }

    #[test]
    fn test_unset_environment_yields_empty_map() {
        let overrides = load_endpoint_overrides(|_| None);
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_load_from_process_environment() {
        std::env::set_var("AWS_ENDPOINT_URL_STORAGEGATEWAY", "http://sg:4566");
        let overrides = load_endpoint_overrides_from_env();
        assert_eq!(
            overrides.get("storagegateway").map(String::as_str),
            Some("http://sg:4566")
        );
        std::env::remove_var("AWS_ENDPOINT_URL_STORAGEGATEWAY");
    }
}
