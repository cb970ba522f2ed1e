//! GCP provider spec (`GCPMachineProviderSpec`).

use super::LocalObjectReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider spec of a machine running on GCP.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GcpMachineProviderSpec {
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub machine_type: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub region: String,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub zone: String,

    #[serde(default, deserialize_with = "super::null_as_default", rename = "projectID", skip_serializing_if = "String::is_empty")]
    pub project_id: String,

    #[serde(default, deserialize_with = "super::null_as_default", rename = "canIPForward")]
    pub can_ip_forward: bool,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub deletion_protection: bool,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_secret: Option<LocalObjectReference>,

    /// Fields not modelled above (disks, networkInterfaces, serviceAccounts, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
