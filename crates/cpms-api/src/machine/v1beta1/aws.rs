//! AWS provider spec (`AWSMachineProviderConfig`).

use super::LocalObjectReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Provider spec of a machine running on AWS.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AwsMachineProviderConfig {
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub api_version: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub kind: String,

    /// Machine image to boot from.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub ami: AwsResourceReference,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub instance_type: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagSpecification>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<AwsResourceReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_data_secret: Option<LocalObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials_secret: Option<LocalObjectReference>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub device_index: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<bool>,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub security_groups: Vec<AwsResourceReference>,

    /// Subnet the primary network interface is placed in.
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub subnet: AwsResourceReference,

    #[serde(default, deserialize_with = "super::null_as_default")]
    pub placement: Placement,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub load_balancers: Vec<LoadBalancerReference>,

    /// Fields not modelled above (block devices, spot options, ...).
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// Reference to an AWS resource.
///
/// Unlike the `v1` reference there is no discriminator; whichever field is
/// set identifies the resource.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AwsResourceReference {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<Filter>>,
}

/// Filter used to look up AWS resources.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Filter {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

/// Where the instance is launched.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Placement {
    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub region: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub availability_zone: String,

    #[serde(default, deserialize_with = "super::null_as_default", skip_serializing_if = "String::is_empty")]
    pub tenancy: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TagSpecification {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub value: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerReference {
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "super::null_as_default", rename = "type")]
    pub load_balancer_type: String,
}
