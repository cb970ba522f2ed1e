//! `machine.openshift.io/v1`

mod control_plane_machine_set;
mod failure_domain;

pub use control_plane_machine_set::{
    ControlPlaneMachineSet, ControlPlaneMachineSetMachineType, ControlPlaneMachineSetSpec,
    ControlPlaneMachineSetState, ControlPlaneMachineSetStatus, ControlPlaneMachineSetStrategy,
    ControlPlaneMachineSetStrategyType, ControlPlaneMachineSetTemplate,
    ControlPlaneMachineSetTemplateObjectMeta, OpenShiftMachineV1Beta1MachineTemplate,
};
pub use failure_domain::{
    AwsFailureDomain, AwsFailureDomainPlacement, AwsResourceFilter, AwsResourceReference,
    AwsResourceReferenceType, AzureFailureDomain, FailureDomains, GcpFailureDomain,
    OpenStackFailureDomain,
};
