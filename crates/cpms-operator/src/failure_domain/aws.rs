//! AWS failure domain rendering and resource reference conversion
//!
//! The subnet reference has a different shape in each API version: `v1`
//! carries an explicit type discriminator, `v1beta1` infers it from which
//! field is set. Conversion in either direction picks the first populated
//! field in the order ID, Filters, ARN.

use cpms_api::machine::{v1, v1beta1};

/// Rendering used when a failure domain has nothing printable.
pub(super) const UNKNOWN_FAILURE_DOMAIN: &str = "<unknown>";

/// Converts a `v1beta1` reference into its `v1` form.
///
/// Returns `None` when no field is populated.
pub fn aws_resource_reference_to_v1(
    reference: &v1beta1::AwsResourceReference,
) -> Option<v1::AwsResourceReference> {
    if let Some(id) = &reference.id {
        return Some(v1::AwsResourceReference::id(id.clone()));
    }

    if let Some(filters) = &reference.filters {
        return Some(v1::AwsResourceReference::filters(
            filters
                .iter()
                .map(|filter| v1::AwsResourceFilter {
                    name: filter.name.clone(),
                    values: filter.values.clone(),
                })
                .collect(),
        ));
    }

    reference.arn.as_ref().map(|arn| v1::AwsResourceReference::arn(arn.clone()))
}

/// Converts an optional `v1` reference into its `v1beta1` form.
///
/// An absent reference, or one with no populated field, becomes an empty
/// `v1beta1` reference.
pub fn aws_resource_reference_to_v1beta1(
    reference: Option<&v1::AwsResourceReference>,
) -> v1beta1::AwsResourceReference {
    let Some(reference) = reference else {
        return v1beta1::AwsResourceReference::default();
    };

    if let Some(id) = &reference.id {
        return v1beta1::AwsResourceReference {
            id: Some(id.clone()),
            ..Default::default()
        };
    }

    if let Some(filters) = &reference.filters {
        return v1beta1::AwsResourceReference {
            filters: Some(
                filters
                    .iter()
                    .map(|filter| v1beta1::Filter {
                        name: filter.name.clone(),
                        values: filter.values.clone(),
                    })
                    .collect(),
            ),
            ..Default::default()
        };
    }

    v1beta1::AwsResourceReference {
        arn: reference.arn.clone(),
        ..Default::default()
    }
}

/// Renders an AWS failure domain, omitting empty parts.
pub(super) fn render(fd: &v1::AwsFailureDomain) -> String {
    let zone = &fd.placement.availability_zone;

    let Some(subnet) = &fd.subnet else {
        if zone.is_empty() {
            return UNKNOWN_FAILURE_DOMAIN.to_string();
        }
        return format!("AWSFailureDomain{{AvailabilityZone:{zone}}}");
    };

    let value = match subnet.reference_type {
        v1::AwsResourceReferenceType::Id => subnet.id.clone(),
        v1::AwsResourceReferenceType::Arn => subnet.arn.clone(),
        v1::AwsResourceReferenceType::Filters => subnet.filters.as_deref().map(render_filters),
    };

    match value {
        Some(value) => format!(
            "AWSFailureDomain{{{}Subnet:{{Type:{}, Value:{}}}}}",
            zone_prefix(zone),
            subnet.reference_type,
            value
        ),
        None => UNKNOWN_FAILURE_DOMAIN.to_string(),
    }
}

fn zone_prefix(zone: &str) -> String {
    if zone.is_empty() {
        String::new()
    } else {
        format!("AvailabilityZone:{zone}, ")
    }
}

/// Filters render as a pointer to a list, `&[{Name:<n> Values:[<v> <v>]} ...]`.
fn render_filters(filters: &[v1::AwsResourceFilter]) -> String {
    let filters = filters
        .iter()
        .map(|filter| format!("{{Name:{} Values:[{}]}}", filter.name, filter.values.join(" ")))
        .collect::<Vec<_>>()
        .join(" ");
    format!("&[{filters}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cpms_api::machine::v1::{
        AwsFailureDomain, AwsFailureDomainPlacement, AwsResourceFilter, AwsResourceReference,
        AwsResourceReferenceType,
    };

    fn aws_fd(zone: &str, subnet: Option<AwsResourceReference>) -> AwsFailureDomain {
        AwsFailureDomain {
            subnet,
            placement: AwsFailureDomainPlacement {
                availability_zone: zone.to_string(),
            },
        }
    }

    #[test]
    fn test_to_v1_prefers_id() {
        let reference = v1beta1::AwsResourceReference {
            id: Some("i-1".to_string()),
            arn: Some("arn:x".to_string()),
            filters: Some(vec![v1beta1::Filter {
                name: "tag:Name".to_string(),
                values: vec!["a".to_string()],
            }]),
        };
        assert_eq!(
            aws_resource_reference_to_v1(&reference),
            Some(AwsResourceReference::id("i-1"))
        );
    }

    #[test]
    fn test_to_v1_prefers_filters_over_arn() {
        let reference = v1beta1::AwsResourceReference {
            id: None,
            arn: Some("arn:x".to_string()),
            filters: Some(vec![
                v1beta1::Filter {
                    name: "tag:Name".to_string(),
                    values: vec!["a".to_string(), "b".to_string()],
                },
                v1beta1::Filter {
                    name: "vpc-id".to_string(),
                    values: vec!["vpc-1".to_string()],
                },
            ]),
        };
        assert_eq!(
            aws_resource_reference_to_v1(&reference),
            Some(AwsResourceReference::filters(vec![
                AwsResourceFilter::new("tag:Name", ["a", "b"]),
                AwsResourceFilter::new("vpc-id", ["vpc-1"]),
            ]))
        );
    }

    #[test]
    fn test_to_v1_empty_filters_are_a_reference() {
        let reference = v1beta1::AwsResourceReference {
            filters: Some(vec![]),
            ..Default::default()
        };
        let converted = aws_resource_reference_to_v1(&reference).unwrap();
        assert_eq!(converted.reference_type, AwsResourceReferenceType::Filters);
        assert_eq!(converted.filters, Some(vec![]));
    }

    #[test]
    fn test_to_v1_arn_and_empty() {
        let reference = v1beta1::AwsResourceReference {
            arn: Some("arn:aws:ec2:us-east-1:1:subnet/subnet-1".to_string()),
            ..Default::default()
        };
        assert_eq!(
            aws_resource_reference_to_v1(&reference),
            Some(AwsResourceReference::arn(
                "arn:aws:ec2:us-east-1:1:subnet/subnet-1"
            ))
        );
        assert_eq!(
            aws_resource_reference_to_v1(&v1beta1::AwsResourceReference::default()),
            None
        );
    }

    #[test]
    fn test_to_v1beta1_follows_the_same_priority() {
        let reference = AwsResourceReference {
            reference_type: AwsResourceReferenceType::Arn,
            id: Some("subnet-1".to_string()),
            arn: Some("arn:x".to_string()),
            filters: None,
        };
        assert_eq!(
            aws_resource_reference_to_v1beta1(Some(&reference)),
            v1beta1::AwsResourceReference {
                id: Some("subnet-1".to_string()),
                ..Default::default()
            }
        );

        assert_eq!(
            aws_resource_reference_to_v1beta1(None),
            v1beta1::AwsResourceReference::default()
        );
    }

    #[test]
    fn test_reference_round_trip() {
        let references = [
            AwsResourceReference::id("subnet-1"),
            AwsResourceReference::arn("arn:x"),
            AwsResourceReference::filters(vec![AwsResourceFilter::new("tag:Name", ["a"])]),
            AwsResourceReference::filters(vec![]),
        ];
        for reference in references {
            let beta1 = aws_resource_reference_to_v1beta1(Some(&reference));
            assert_eq!(aws_resource_reference_to_v1(&beta1), Some(reference));
        }
    }

    #[test]
    fn test_render_zone_and_id() {
        let fd = aws_fd("us-east-1a", Some(AwsResourceReference::id("subnet-123")));
        assert_eq!(
            render(&fd),
            "AWSFailureDomain{AvailabilityZone:us-east-1a, Subnet:{Type:ID, Value:subnet-123}}"
        );
    }

    #[test]
    fn test_render_zone_only() {
        assert_eq!(
            render(&aws_fd("us-east-1b", None)),
            "AWSFailureDomain{AvailabilityZone:us-east-1b}"
        );
    }

    #[test]
    fn test_render_subnet_without_zone() {
        let fd = aws_fd("", Some(AwsResourceReference::arn("arn:x")));
        assert_eq!(render(&fd), "AWSFailureDomain{Subnet:{Type:ARN, Value:arn:x}}");
    }

    #[test]
    fn test_render_filters() {
        let fd = aws_fd(
            "us-east-1c",
            Some(AwsResourceReference::filters(vec![
                AwsResourceFilter::new("tag:Name", ["a", "b"]),
                AwsResourceFilter::new("vpc-id", ["vpc-1"]),
            ])),
        );
        assert_eq!(
            render(&fd),
            "AWSFailureDomain{AvailabilityZone:us-east-1c, Subnet:{Type:Filters, Value:&[{Name:tag:Name Values:[a b]} {Name:vpc-id Values:[vpc-1]}]}}"
        );
    }

    #[test]
    fn test_render_empty_filters() {
        let fd = aws_fd("", Some(AwsResourceReference::filters(vec![])));
        assert_eq!(render(&fd), "AWSFailureDomain{Subnet:{Type:Filters, Value:&[]}}");
    }

    #[test]
    fn test_render_unknown() {
        assert_eq!(render(&aws_fd("", None)), UNKNOWN_FAILURE_DOMAIN);

        let malformed = AwsResourceReference {
            reference_type: AwsResourceReferenceType::Id,
            id: None,
            arn: Some("arn:x".to_string()),
            filters: None,
        };
        assert_eq!(
            render(&aws_fd("us-east-1a", Some(malformed))),
            UNKNOWN_FAILURE_DOMAIN
        );
    }
}
