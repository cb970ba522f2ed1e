//! `machine.openshift.io/v1beta1`
//!
//! The `Machine` resource and the provider specs it embeds as opaque JSON.
//! Provider specs keep any keys they do not model in a flattened map so that
//! re-serialising a decoded spec does not drop platform settings.

mod aws;
mod azure;
mod gcp;
mod machine;
mod openstack;

pub use aws::{
    AwsMachineProviderConfig, AwsResourceReference, Filter, LoadBalancerReference, Placement,
    TagSpecification,
};
pub use azure::AzureMachineProviderSpec;
pub use gcp::GcpMachineProviderSpec;
pub use machine::{LocalObjectReference, Machine, MachineSpec, ProviderSpec};
pub use openstack::OpenstackProviderSpec;

use serde::{Deserialize, Deserializer};

/// Reads an explicit `null` as the field's default, the same as a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
