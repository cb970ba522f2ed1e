//! Azure provider config

use super::{decode, encode};
use crate::error::Result;
use cpms_api::machine::v1::AzureFailureDomain;
use cpms_api::machine::v1beta1::AzureMachineProviderSpec;
use cpms_api::PlatformType;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;

/// Provider spec of an Azure machine. Placement is the availability zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AzureProviderConfig {
    provider_config: AzureMachineProviderSpec,
}

impl AzureProviderConfig {
    pub(super) fn from_raw(raw: &RawExtension) -> Result<Self> {
        decode(raw, PlatformType::Azure).map(Self::new)
    }

    pub fn new(provider_config: AzureMachineProviderSpec) -> Self {
        Self { provider_config }
    }

    /// Returns a copy of this config placed in `fd`. An empty zone removes
    /// the zone from the spec.
    pub fn inject_failure_domain(&self, fd: &AzureFailureDomain) -> Self {
        let mut config = self.clone();
        config.provider_config.zone = (!fd.zone.is_empty()).then(|| fd.zone.clone());
        config
    }

    pub fn extract_failure_domain(&self) -> AzureFailureDomain {
        AzureFailureDomain {
            zone: self.provider_config.zone.clone().unwrap_or_default(),
        }
    }

    pub fn config(&self) -> &AzureMachineProviderSpec {
        &self.provider_config
    }

    pub fn raw_config(&self) -> Result<RawExtension> {
        encode(&self.provider_config, PlatformType::Azure)
    }
}
