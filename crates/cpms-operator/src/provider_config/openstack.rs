//! OpenStack provider config

use super::{decode, encode};
use crate::error::Result;
use cpms_api::machine::v1::OpenStackFailureDomain;
use cpms_api::machine::v1beta1::OpenstackProviderSpec;
use cpms_api::PlatformType;
use k8s_openapi::apimachinery::pkg::runtime::RawExtension;

/// Provider spec of an OpenStack machine. Placement is the Nova
/// availability zone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OpenStackProviderConfig {
    provider_config: OpenstackProviderSpec,
}

impl OpenStackProviderConfig {
    pub(super) fn from_raw(raw: &RawExtension) -> Result<Self> {
        decode(raw, PlatformType::OpenStack).map(Self::new)
    }

    pub fn new(provider_config: OpenstackProviderSpec) -> Self {
        Self { provider_config }
    }

    pub fn inject_failure_domain(&self, fd: &OpenStackFailureDomain) -> Self {
        let mut config = self.clone();
        config.provider_config.availability_zone = fd.availability_zone.clone();
        config
    }

    pub fn extract_failure_domain(&self) -> OpenStackFailureDomain {
        OpenStackFailureDomain {
            availability_zone: self.provider_config.availability_zone.clone(),
        }
    }

    pub fn config(&self) -> &OpenstackProviderSpec {
        &self.provider_config
    }

    pub fn raw_config(&self) -> Result<RawExtension> {
        encode(&self.provider_config, PlatformType::OpenStack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_round_trip_through_raw() {
        let raw = RawExtension(json!({
            "flavor": "m1.xlarge",
            "availabilityZone": "az-1",
            "networks": [{ "subnets": [{ "filter": { "name": "private" } }] }]
        }));
        let config = OpenStackProviderConfig::from_raw(&raw).unwrap();
        let fd = OpenStackFailureDomain {
            availability_zone: "az-3".to_string(),
        };

        let out = config.inject_failure_domain(&fd).raw_config().unwrap();
        assert_eq!(out.0["availabilityZone"], "az-3");
        assert_eq!(out.0["networks"][0]["subnets"][0]["filter"]["name"], "private");
        assert_eq!(
            OpenStackProviderConfig::from_raw(&out)
                .unwrap()
                .extract_failure_domain(),
            fd
        );
    }
}
