//! OpenStack provider spec (`OpenstackProviderSpec`).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider spec of a machine running on OpenStack.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenstackProviderSpec {
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub cloud_name: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub flavor: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub image: String,

    /// Nova availability zone the server is scheduled in.
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub key_name: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub server_group_name: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Fields not modelled above (networks, securityGroups, rootVolume, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_provider_spec_deserialize() {
        let config: OpenstackProviderSpec = serde_json::from_value(json!({
            "kind": "OpenstackProviderSpec",
            "flavor": "m1.xlarge",
            "availabilityZone": "az-2",
            "networks": [{ "filter": {}, "subnets": [] }]
        }))
        .unwrap();
        assert_eq!(config.availability_zone, "az-2");
        assert_eq!(config.flavor, "m1.xlarge");
        assert!(config.extra.contains_key("networks"));
    }
}
