//! Platform identification for `config.openshift.io/v1`.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The infrastructure platform a cluster runs on.
///
/// Only the platforms that support control plane failure domains get their
/// own variant. Any other tag is kept verbatim in [`PlatformType::Other`] so
/// it can be reported back to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum PlatformType {
    /// No platform set (empty string).
    #[default]
    Unset,
    Aws,
    Azure,
    Gcp,
    OpenStack,
    /// Any platform tag without failure domain support.
    Other(String),
}

impl PlatformType {
    pub fn as_str(&self) -> &str {
        match self {
            PlatformType::Unset => "",
            PlatformType::Aws => "AWS",
            PlatformType::Azure => "Azure",
            PlatformType::Gcp => "GCP",
            PlatformType::OpenStack => "OpenStack",
            PlatformType::Other(tag) => tag,
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, PlatformType::Unset)
    }
}

impl From<&str> for PlatformType {
    fn from(tag: &str) -> Self {
        match tag {
            "" => PlatformType::Unset,
            "AWS" => PlatformType::Aws,
            "Azure" => PlatformType::Azure,
            "GCP" => PlatformType::Gcp,
            "OpenStack" => PlatformType::OpenStack,
            other => PlatformType::Other(other.to_string()),
        }
    }
}

impl From<String> for PlatformType {
    fn from(tag: String) -> Self {
        match PlatformType::from(tag.as_str()) {
            PlatformType::Other(_) => PlatformType::Other(tag),
            known => known,
        }
    }
}

impl From<PlatformType> for String {
    fn from(platform: PlatformType) -> Self {
        match platform {
            PlatformType::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for PlatformType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(PlatformType::from(s))
    }
}

impl fmt::Display for PlatformType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platforms_parse() {
        assert_eq!("AWS".parse::<PlatformType>().unwrap(), PlatformType::Aws);
        assert_eq!("Azure".parse::<PlatformType>().unwrap(), PlatformType::Azure);
        assert_eq!("GCP".parse::<PlatformType>().unwrap(), PlatformType::Gcp);
        assert_eq!(
            "OpenStack".parse::<PlatformType>().unwrap(),
            PlatformType::OpenStack
        );
        assert!("".parse::<PlatformType>().unwrap().is_unset());
    }

    #[test]
    fn test_unknown_platform_is_preserved() {
        let platform: PlatformType = "BareMetal".parse().unwrap();
        assert_eq!(platform, PlatformType::Other("BareMetal".to_string()));
        assert_eq!(platform.to_string(), "BareMetal");
    }

    #[test]
    fn test_platform_type_json() {
        let platform: PlatformType = serde_json::from_str(r#""GCP""#).unwrap();
        assert_eq!(platform, PlatformType::Gcp);
        assert_eq!(serde_json::to_string(&PlatformType::Aws).unwrap(), r#""AWS""#);
        assert_eq!(serde_json::to_string(&PlatformType::Unset).unwrap(), r#""""#);
    }
}
