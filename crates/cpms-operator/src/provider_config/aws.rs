//! AWS provider config

use super::{decode, encode};
use crate::error::Result;
use crate::failure_domain::{aws_resource_reference_to_v1, aws_resource_reference_to_v1beta1};
use cpms_api::machine::v1::{AwsFailureDomain, AwsFailureDomainPlacement};
use cpms_api::machine::v1beta1::AwsMachineProviderConfig;
use cpms_api::PlatformType;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;

/// Provider spec of an AWS machine.
///
/// Placement is the availability zone plus the subnet reference; the subnet
/// is translated between the `v1beta1` and `v1` reference shapes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AwsProviderConfig {
    provider_config: AwsMachineProviderConfig,
}

impl AwsProviderConfig {
    pub(super) fn from_raw(raw: &RawExtension) -> Result<Self> {
        decode(raw, PlatformType::Aws).map(Self::new)
    }

    pub fn new(provider_config: AwsMachineProviderConfig) -> Self {
        Self { provider_config }
    }

    /// Returns a copy of this config placed in `fd`.
    pub fn inject_failure_domain(&self, fd: &AwsFailureDomain) -> Self {
        let mut config = self.clone();
        config.provider_config.placement.availability_zone =
            fd.placement.availability_zone.clone();
        config.provider_config.subnet = aws_resource_reference_to_v1beta1(fd.subnet.as_ref());
        config
    }

    pub fn extract_failure_domain(&self) -> AwsFailureDomain {
        AwsFailureDomain {
            subnet: aws_resource_reference_to_v1(&self.provider_config.subnet),
            placement: AwsFailureDomainPlacement {
                availability_zone: self.provider_config.placement.availability_zone.clone(),
            },
        }
    }

    /// The stored `AWSMachineProviderConfig`.
    pub fn config(&self) -> &AwsMachineProviderConfig {
        &self.provider_config
    }

    pub fn raw_config(&self) -> Result<RawExtension> {
        encode(&self.provider_config, PlatformType::Aws)
    }
}
