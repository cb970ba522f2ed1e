//! `machine.openshift.io` API group
//!
//! Two versions of the group are in play: [`v1`] holds the stable failure
//! domain schema used by the `ControlPlaneMachineSet`, [`v1beta1`] holds the
//! `Machine` resource and the provider specs embedded in it.

pub mod v1;
pub mod v1beta1;
