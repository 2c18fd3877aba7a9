//! Cart fulfillment constraint decision function.
//!
//! Evaluated by Shopify's checkout/fulfillment pipeline once per cart
//! evaluation. Given the customer's preferred-location name, the store's
//! location list, and the cart's deliverable lines, decides whether to
//! restrict fulfillment of the cart to a single location.
//!
//! The function is pure: no I/O, no clock, no randomness, no mutation of its
//! input. The pipeline may re-evaluate the same cart several times (retries,
//! re-quotes) and must get identical routing every time. It also runs inside
//! a time- and memory-bounded sandbox, so evaluation stays linear in the
//! input size.

use serde::{Deserialize, Serialize};

use crate::types::{DeliveryLineId, LocationId};

/// A store location known to the fulfillment pipeline.
///
/// Location names are merchant-chosen and not guaranteed unique; ids are.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Shopify location GID.
    pub id: LocationId,
    /// Merchant-chosen location name.
    pub name: String,
}

/// A cart line eligible for a fulfillment-location constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverableLine {
    /// Shopify deliverable line GID.
    pub id: DeliveryLineId,
}

/// Input for one constraint evaluation.
///
/// Constructed by the calling pipeline for the duration of a single
/// evaluation and discarded afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateInput {
    /// The customer's stored preference. Absent when no customer is attached
    /// or the customer has no preference. Opaque text; never normalized.
    #[serde(default)]
    pub preferred_location_name: Option<String>,
    /// The store's full location set known to the pipeline.
    pub locations: Vec<Location>,
    /// Lines requiring a fulfillment-location assignment.
    pub deliverable_lines: Vec<DeliverableLine>,
}

/// Restriction of a set of deliverable lines to a set of locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestrictTo {
    /// Locations the lines may be fulfilled from.
    pub location_ids: Vec<LocationId>,
    /// Lines the restriction applies to.
    pub line_ids: Vec<DeliveryLineId>,
}

/// A single fulfillment constraint operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintOperation {
    /// Restrict the referenced lines to the referenced locations.
    pub restrict_to: RestrictTo,
}

/// Result of one constraint evaluation.
///
/// Contains either no operations or exactly one operation covering every
/// deliverable line in the cart. Lines are never split across locations and
/// multiple preferences are never combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOutput {
    /// Operations for the pipeline to apply.
    pub operations: Vec<ConstraintOperation>,
}

/// Decide whether to constrain the cart to the customer's preferred location.
///
/// Every recoverable condition folds into the empty-operations result:
///
/// - No preference stored: the absence of a preference must never block
///   normal fulfillment routing.
/// - Preference matches no location name (exact ordinal comparison, no
///   case-folding or trimming): a stale or unmapped preference fails open
///   rather than failing the cart.
/// - No deliverable lines: nothing to constrain.
///
/// Otherwise the result is one operation restricting all deliverable lines
/// to the first location whose name equals the preference.
#[must_use]
pub fn generate(input: &GenerateInput) -> GenerateOutput {
    let Some(preferred) = input
        .preferred_location_name
        .as_deref()
        .filter(|name| !name.is_empty())
    else {
        return GenerateOutput::default();
    };

    // Single linear scan; first match wins when names collide.
    let Some(matched) = input.locations.iter().find(|l| l.name == preferred) else {
        return GenerateOutput::default();
    };

    if input.deliverable_lines.is_empty() {
        return GenerateOutput::default();
    }

    let line_ids = input
        .deliverable_lines
        .iter()
        .map(|line| line.id.clone())
        .collect();

    GenerateOutput {
        operations: vec![ConstraintOperation {
            restrict_to: RestrictTo {
                location_ids: vec![matched.id.clone()],
                line_ids,
            },
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, name: &str) -> Location {
        Location {
            id: LocationId::new(id),
            name: name.to_string(),
        }
    }

    fn line(id: &str) -> DeliverableLine {
        DeliverableLine {
            id: DeliveryLineId::new(id),
        }
    }

    fn input(
        preferred: Option<&str>,
        locations: Vec<Location>,
        lines: Vec<DeliverableLine>,
    ) -> GenerateInput {
        GenerateInput {
            preferred_location_name: preferred.map(String::from),
            locations,
            deliverable_lines: lines,
        }
    }

    #[test]
    fn test_no_preference_is_noop() {
        let out = generate(&input(
            None,
            vec![location("L1", "Downtown Store")],
            vec![line("D1")],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_empty_preference_is_noop() {
        let out = generate(&input(
            Some(""),
            vec![location("L1", "Downtown Store")],
            vec![line("D1")],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_unmatched_preference_fails_open() {
        let out = generate(&input(
            Some("Nonexistent"),
            vec![location("L1", "Downtown Store")],
            vec![line("D1")],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_match_restricts_all_lines_to_one_location() {
        let out = generate(&input(
            Some("Downtown Store"),
            vec![
                location("L1", "Downtown Store"),
                location("L2", "Warehouse"),
            ],
            vec![line("D1"), line("D2")],
        ));

        assert_eq!(out.operations.len(), 1);
        let restrict = &out.operations[0].restrict_to;
        assert_eq!(restrict.location_ids, vec![LocationId::new("L1")]);
        assert_eq!(
            restrict.line_ids,
            vec![DeliveryLineId::new("D1"), DeliveryLineId::new("D2")]
        );
    }

    #[test]
    fn test_match_with_no_lines_is_noop() {
        let out = generate(&input(
            Some("Downtown Store"),
            vec![location("L1", "Downtown Store")],
            vec![],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        let out = generate(&input(
            Some("Main Warehouse"),
            vec![location("L1", "main warehouse")],
            vec![line("D1")],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_matching_is_whitespace_sensitive() {
        let out = generate(&input(
            Some("Downtown Store "),
            vec![location("L1", "Downtown Store")],
            vec![line("D1")],
        ));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_first_match_wins_on_duplicate_names() {
        let out = generate(&input(
            Some("Outlet"),
            vec![location("L1", "Outlet"), location("L2", "Outlet")],
            vec![line("D1")],
        ));

        assert_eq!(out.operations.len(), 1);
        assert_eq!(
            out.operations[0].restrict_to.location_ids,
            vec![LocationId::new("L1")]
        );
    }

    #[test]
    fn test_deterministic_and_input_unchanged() {
        let before = input(
            Some("Downtown Store"),
            vec![
                location("L1", "Downtown Store"),
                location("L2", "Warehouse"),
            ],
            vec![line("D1"), line("D2")],
        );
        let snapshot = before.clone();

        let first = generate(&before);
        let second = generate(&before);

        assert_eq!(first, second);
        assert_eq!(before, snapshot);

        let first_json = serde_json::to_string(&first).expect("serialize");
        let second_json = serde_json::to_string(&second).expect("serialize");
        assert_eq!(first_json, second_json);
    }

    #[test]
    fn test_all_empty_input_is_noop() {
        let out = generate(&input(None, vec![], vec![]));
        assert!(out.operations.is_empty());
    }

    #[test]
    fn test_wire_format_camel_case() {
        let json = r#"{
            "preferredLocationName": "Downtown Store",
            "locations": [
                {"id": "L1", "name": "Downtown Store"},
                {"id": "L2", "name": "Warehouse"}
            ],
            "deliverableLines": [{"id": "D1"}, {"id": "D2"}]
        }"#;

        let parsed: GenerateInput = serde_json::from_str(json).expect("parse input");
        let out = generate(&parsed);

        let encoded = serde_json::to_value(&out).expect("encode output");
        assert_eq!(
            encoded,
            serde_json::json!({
                "operations": [{
                    "restrictTo": {
                        "locationIds": ["L1"],
                        "lineIds": ["D1", "D2"]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_missing_preference_field_deserializes_as_absent() {
        let json = r#"{"locations": [], "deliverableLines": []}"#;
        let parsed: GenerateInput = serde_json::from_str(json).expect("parse input");
        assert!(parsed.preferred_location_name.is_none());
        assert!(generate(&parsed).operations.is_empty());
    }
}
