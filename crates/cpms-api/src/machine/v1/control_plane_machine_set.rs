//! ControlPlaneMachineSet CRD
//!
//! Defines the singleton custom resource that manages the control plane
//! machines of a cluster and the failure domains they are spread across.

use super::FailureDomains;
use crate::machine::v1beta1::MachineSpec;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{Condition, LabelSelector};
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strum::{Display, EnumString};

/// ControlPlaneMachineSet describes the desired set of control plane machines.
///
/// The template carries both the machine spec used to create replacements and
/// the failure domains those replacements are balanced across.
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "machine.openshift.io",
    version = "v1",
    kind = "ControlPlaneMachineSet",
    namespaced,
    status = "ControlPlaneMachineSetStatus",
    printcolumn = r#"{"name":"Desired", "type":"integer", "jsonPath":".spec.replicas"}"#,
    printcolumn = r#"{"name":"Current", "type":"integer", "jsonPath":".status.replicas"}"#,
    printcolumn = r#"{"name":"Ready", "type":"integer", "jsonPath":".status.readyReplicas"}"#,
    printcolumn = r#"{"name":"Updated", "type":"integer", "jsonPath":".status.updatedReplicas"}"#,
    printcolumn = r#"{"name":"Unavailable", "type":"integer", "jsonPath":".status.unavailableReplicas"}"#,
    printcolumn = r#"{"name":"State", "type":"string", "jsonPath":".spec.state"}"#,
    printcolumn = r#"{"name":"Age", "type":"date", "jsonPath":".metadata.creationTimestamp"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneMachineSetSpec {
    /// Number of control plane machines. Only 3 and 5 are supported.
    #[serde(default = "default_replicas")]
    pub replicas: i32,

    /// Whether the operator acts on this resource.
    #[serde(default)]
    pub state: ControlPlaneMachineSetState,

    /// How out of date machines are replaced.
    #[serde(default)]
    pub strategy: ControlPlaneMachineSetStrategy,

    /// Label selector matching the control plane machines.
    pub selector: LabelSelector,

    /// Template used to create new control plane machines.
    pub template: ControlPlaneMachineSetTemplate,
}

fn default_replicas() -> i32 {
    3
}

/// Activation state of the control plane machine set.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Display, EnumString,
)]
pub enum ControlPlaneMachineSetState {
    Active,
    #[default]
    Inactive,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneMachineSetStrategy {
    #[serde(default, rename = "type")]
    pub strategy_type: ControlPlaneMachineSetStrategyType,
}

/// Replacement strategy for out of date machines.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Display, EnumString,
)]
pub enum ControlPlaneMachineSetStrategyType {
    /// Create the replacement first, then remove the old machine.
    #[default]
    RollingUpdate,
    /// Remove the old machine first, then create the replacement.
    Recreate,
    /// Only replace machines once they are deleted by a user.
    OnDelete,
}

/// Machine template, discriminated by `machineType`.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneMachineSetTemplate {
    pub machine_type: ControlPlaneMachineSetMachineType,

    #[serde(
        default,
        rename = "machines_v1beta1_machine_openshift_io",
        skip_serializing_if = "Option::is_none"
    )]
    pub openshift_machine_v1beta1_machine: Option<OpenShiftMachineV1Beta1MachineTemplate>,
}

/// Kind of machine the template creates.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq, Display, EnumString,
)]
pub enum ControlPlaneMachineSetMachineType {
    #[default]
    #[serde(rename = "machines_v1beta1_machine_openshift_io")]
    #[strum(serialize = "machines_v1beta1_machine_openshift_io")]
    OpenShiftMachineV1Beta1Machine,
}

/// Template for `machine.openshift.io/v1beta1` machines.
#[derive(Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OpenShiftMachineV1Beta1MachineTemplate {
    /// Failure domains new machines are balanced across.
    #[serde(default)]
    pub failure_domains: FailureDomains,

    /// Labels and annotations copied onto created machines.
    pub metadata: ControlPlaneMachineSetTemplateObjectMeta,

    /// Machine spec whose provider spec is stamped with a failure domain.
    pub spec: MachineSpec,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneMachineSetTemplateObjectMeta {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

/// Observed state of the control plane machine set.
#[derive(Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ControlPlaneMachineSetStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    #[serde(default)]
    pub replicas: i32,

    #[serde(default)]
    pub ready_replicas: i32,

    #[serde(default)]
    pub updated_replicas: i32,

    #[serde(default)]
    pub unavailable_replicas: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::v1::PlatformType;

    const CPMS_YAML: &str = r#"
apiVersion: machine.openshift.io/v1
kind: ControlPlaneMachineSet
metadata:
  name: cluster
  namespace: openshift-machine-api
spec:
  replicas: 3
  state: Active
  strategy:
    type: RollingUpdate
  selector:
    matchLabels:
      machine.openshift.io/cluster-api-machine-role: master
  template:
    machineType: machines_v1beta1_machine_openshift_io
    machines_v1beta1_machine_openshift_io:
      failureDomains:
        platform: GCP
        gcp:
          - zone: us-central1-a
          - zone: us-central1-b
      metadata:
        labels:
          machine.openshift.io/cluster-api-machine-role: master
      spec:
        providerSpec:
          value:
            apiVersion: machine.openshift.io/v1beta1
            kind: GCPMachineProviderSpec
            machineType: n1-standard-4
            zone: us-central1-a
"#;

    #[test]
    fn test_control_plane_machine_set_deserialize() {
        let cpms: ControlPlaneMachineSet = serde_yaml::from_str(CPMS_YAML).unwrap();
        assert_eq!(cpms.spec.replicas, 3);
        assert_eq!(cpms.spec.state, ControlPlaneMachineSetState::Active);
        assert_eq!(
            cpms.spec.strategy.strategy_type,
            ControlPlaneMachineSetStrategyType::RollingUpdate
        );

        let template = cpms
            .spec
            .template
            .openshift_machine_v1beta1_machine
            .unwrap();
        assert_eq!(template.failure_domains.platform, PlatformType::Gcp);
        assert_eq!(template.failure_domains.gcp.unwrap().len(), 2);
        assert!(template.spec.provider_spec.value.is_some());
    }

    #[test]
    fn test_spec_defaults() {
        let yaml = r#"
selector: {}
template:
  machineType: machines_v1beta1_machine_openshift_io
"#;
        let spec: ControlPlaneMachineSetSpec = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(spec.replicas, 3);
        assert_eq!(spec.state, ControlPlaneMachineSetState::Inactive);
        assert!(spec.template.openshift_machine_v1beta1_machine.is_none());
    }

    #[test]
    fn test_strategy_type_parse() {
        assert_eq!(
            "OnDelete".parse::<ControlPlaneMachineSetStrategyType>().unwrap(),
            ControlPlaneMachineSetStrategyType::OnDelete
        );
        assert!("Sideways".parse::<ControlPlaneMachineSetStrategyType>().is_err());
    }
}
