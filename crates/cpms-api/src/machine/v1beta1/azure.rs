//! Azure provider spec (`AzureMachineProviderSpec`).

use super::LocalObjectReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider spec of a machine running on Azure.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AzureMachineProviderSpec {
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub location: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub vm_size: String,

    /// Availability zone. Absent for machines without zonal placement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zone: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub vnet: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub subnet: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub resource_group: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub network_resource_group: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_secret: Option<LocalObjectReference>,

    /// Fields not modelled above (image, osDisk, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
