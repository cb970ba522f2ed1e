//! Failure domain declarations
//!
//! The per-platform placement payloads a `ControlPlaneMachineSet` spreads its
//! machines across.

use crate::config::v1::PlatformType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum::Display;

/// Failure domains available to a control plane machine set.
///
/// Exactly one of the platform lists is expected to be populated, selected
/// by `platform`. An unset platform means no failure domains are declared.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FailureDomains {
    /// Platform the failure domains are declared for.
    #[serde(default)]
    #[schemars(with = "String")]
    pub platform: PlatformType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<Vec<AwsFailureDomain>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<Vec<AzureFailureDomain>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gcp: Option<Vec<GcpFailureDomain>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openstack: Option<Vec<OpenStackFailureDomain>>,
}

/// Placement of a machine on AWS.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsFailureDomain {
    /// Subnet the machine's network interface is attached to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subnet: Option<AwsResourceReference>,

    #[serde(default)]
    pub placement: AwsFailureDomainPlacement,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsFailureDomainPlacement {
    #[serde(default)]
    pub availability_zone: String,
}

/// Reference to an AWS resource by ID, ARN, or a set of filters.
///
/// Only the field named by `reference_type` is meaningful.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsResourceReference {
    #[serde(rename = "type")]
    pub reference_type: AwsResourceReferenceType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Vec<AwsResourceFilter>>,
}

impl AwsResourceReference {
    /// Reference a resource by its ID.
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            reference_type: AwsResourceReferenceType::Id,
            id: Some(id.into()),
            arn: None,
            filters: None,
        }
    }

    /// Reference a resource by its ARN.
    pub fn arn(arn: impl Into<String>) -> Self {
        Self {
            reference_type: AwsResourceReferenceType::Arn,
            id: None,
            arn: Some(arn.into()),
            filters: None,
        }
    }

    /// Reference the resources matching every filter.
    pub fn filters(filters: Vec<AwsResourceFilter>) -> Self {
        Self {
            reference_type: AwsResourceReferenceType::Filters,
            id: None,
            arn: None,
            filters: Some(filters),
        }
    }
}

/// How an [`AwsResourceReference`] identifies its resource.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash, Display)]
pub enum AwsResourceReferenceType {
    #[serde(rename = "ID")]
    #[strum(serialize = "ID")]
    Id,
    #[serde(rename = "ARN")]
    #[strum(serialize = "ARN")]
    Arn,
    #[serde(rename = "Filters")]
    #[strum(serialize = "Filters")]
    Filters,
}

/// A single AWS describe filter: a key and the values it may match.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AwsResourceFilter {
    pub name: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

impl AwsResourceFilter {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }
}

/// Placement of a machine on Azure.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct AzureFailureDomain {
    /// Availability zone, e.g. `"1"`.
    pub zone: String,
}

/// Placement of a machine on GCP.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct GcpFailureDomain {
    /// Zone, e.g. `"us-central1-a"`.
    pub zone: String,
}

/// Placement of a machine on OpenStack.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct OpenStackFailureDomain {
    /// Nova availability zone.
    #[serde(default)]
    pub availability_zone: String,
}
