//! Rule-table validator
//!
//! Validation semantics:
//! - The document is projected onto a JSON tree whose keys are the UDDF
//!   tag names, in field declaration order
//! - Every field of every record is visited exactly once, depth first
//! - Sequences are visited element by element; the element index is part
//!   of the reported path
//! - A violation never stops the walk; the report lists everything found
//!
//! The validator does not mutate documents and its result is a pure
//! function of the document and the rule table.

use std::collections::HashMap;

use log::{error, info};
use serde_json::{Map, Value};

use super::errors::{RuleKind, ValidationReport, Violation};
use super::rules::{FieldRule, Rule, UDDF_RULES};
use crate::model::Uddf;
use crate::observability::Event;

/// Name of the root segment of every reported path.
pub const ROOT: &str = "uddf";

struct CompiledRule {
    segments: Vec<&'static str>,
    rule: Rule,
}

impl CompiledRule {
    /// True when the pattern is a segment-aligned suffix of `path`.
    fn matches(&self, path: &[&str]) -> bool {
        self.segments.len() <= path.len()
            && self
                .segments
                .iter()
                .rev()
                .zip(path.iter().rev())
                .all(|(want, got)| want == got)
    }
}

/// Validator that evaluates a static rule table against documents.
pub struct Validator {
    compiled: Vec<CompiledRule>,
    /// Last path segment -> indices into `compiled`, ascending
    by_field: HashMap<&'static str, Vec<usize>>,
}

impl Validator {
    /// Creates a validator for the given rule table.
    pub fn new(rules: &'static [FieldRule]) -> Self {
        let compiled: Vec<CompiledRule> = rules
            .iter()
            .map(|r| CompiledRule {
                segments: r.path.split('.').collect(),
                rule: r.rule,
            })
            .collect();

        let mut by_field: HashMap<&'static str, Vec<usize>> = HashMap::new();
        for (i, rule) in compiled.iter().enumerate() {
            if let Some(last) = rule.segments.last() {
                by_field.entry(*last).or_default().push(i);
            }
        }

        Self { compiled, by_field }
    }

    /// Validates a document.
    ///
    /// An absent document yields exactly one violation at the root and no
    /// further traversal.
    pub fn validate_document(&self, document: Option<&Uddf>) -> ValidationReport {
        let Some(document) = document else {
            return self.finish(vec![Violation::missing_document()]);
        };

        let tree = match serde_json::to_value(document) {
            Ok(tree) => tree,
            Err(e) => {
                error!(
                    target: Event::ValidationComplete.as_str(),
                    "cannot project document for validation: {}", e
                );
                return self.finish(vec![Violation::new(
                    ROOT,
                    RuleKind::Document,
                    format!("a document that can be projected for validation ({})", e),
                )]);
            }
        };

        self.finish(self.validate_tree(&tree))
    }

    /// Validates an already projected document tree rooted at [`ROOT`].
    pub fn validate_tree(&self, tree: &Value) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut segments: Vec<&str> = vec![ROOT];
        self.descend(tree, ROOT, &mut segments, &mut violations);
        violations
    }

    fn finish(&self, violations: Vec<Violation>) -> ValidationReport {
        info!(
            target: Event::ValidationComplete.as_str(),
            "validation finished with {} violation(s)", violations.len()
        );
        ValidationReport::new(violations)
    }

    fn descend<'v>(
        &self,
        value: &'v Value,
        path: &str,
        segments: &mut Vec<&'v str>,
        out: &mut Vec<Violation>,
    ) {
        match value {
            Value::Object(obj) => self.validate_object(obj, path, segments, out),
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if let Value::Object(obj) = item {
                        let elem_path = format!("{}[{}]", path, i);
                        self.validate_object(obj, &elem_path, segments, out);
                    }
                }
            }
            _ => {}
        }
    }

    fn validate_object<'v>(
        &self,
        obj: &'v Map<String, Value>,
        path_prefix: &str,
        segments: &mut Vec<&'v str>,
        out: &mut Vec<Violation>,
    ) {
        for (key, value) in obj {
            let field_path = make_path(path_prefix, key);
            segments.push(key.as_str());

            if let Some(indices) = self.by_field.get(key.as_str()) {
                for &i in indices {
                    let rule = &self.compiled[i];
                    if rule.matches(&segments[..]) {
                        check(rule.rule, value, &field_path, out);
                    }
                }
            }

            self.descend(value, &field_path, segments, out);
            segments.pop();
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(UDDF_RULES)
    }
}

/// Applies one rule to one field value.
fn check(rule: Rule, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match rule {
        Rule::Required => {
            if is_absent(value) {
                out.push(Violation::missing_field(path));
            }
        }
        Rule::Range { min, max } => each_element(value, path, |v, p| {
            if let Some(n) = v.as_f64() {
                if n < min || n > max {
                    out.push(Violation::out_of_range(p, min, max, n));
                }
            }
        }),
        Rule::OneOf(enumeration) => each_element(value, path, |v, p| {
            if let Some(s) = v.as_str() {
                let s = s.trim();
                if !s.is_empty() && !enumeration.contains(s) {
                    out.push(Violation::not_a_member(p, &enumeration.to_string(), s));
                }
            }
        }),
    }
}

/// Calls `f` on a scalar, or on each element of a sequence of scalars.
fn each_element<F>(value: &Value, path: &str, mut f: F)
where
    F: FnMut(&Value, String),
{
    match value {
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                f(item, format!("{}[{}]", path, i));
            }
        }
        other => f(other, path.to_string()),
    }
}

fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Creates a field path from prefix and field name.
fn make_path(prefix: &str, field: &str) -> String {
    if prefix.is_empty() {
        field.to_string()
    } else {
        format!("{}.{}", prefix, field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GasDefinitions, Mix, ProfileData};
    use crate::validation::rules::Enumeration;
    use serde_json::json;

    static COLOURS: Enumeration = Enumeration {
        name: "colour",
        members: &["red", "green"],
    };

    static TEST_RULES: &[FieldRule] = &[
        FieldRule {
            path: "a.b",
            rule: Rule::Required,
        },
        FieldRule {
            path: "item.level",
            rule: Rule::Range { min: 0.0, max: 1.0 },
        },
        FieldRule {
            path: "item.colour",
            rule: Rule::OneOf(&COLOURS),
        },
    ];

    fn minimal_valid() -> Uddf {
        Uddf {
            version: "3.2.3".into(),
            diver: Some(Default::default()),
            profile_data: Some(ProfileData::default()),
            ..Default::default()
        }
    }

    fn with_mix(mix: Mix) -> Uddf {
        Uddf {
            gas_definitions: Some(GasDefinitions { mixes: vec![mix] }),
            ..minimal_valid()
        }
    }

    // ==================== Engine ====================

    #[test]
    fn test_absent_document_single_violation() {
        let report = Validator::default().validate_document(None);
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "uddf");
        assert_eq!(report.violations()[0].rule, RuleKind::Document);
    }

    #[test]
    fn test_minimal_document_is_valid() {
        let report = Validator::default().validate_document(Some(&minimal_valid()));
        assert!(report.is_valid(), "{}", report);
    }

    #[test]
    fn test_missing_sections_reported() {
        let report = Validator::default().validate_document(Some(&Uddf::default()));
        let paths: Vec<_> = report.violations().iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["uddf.diver", "uddf.profiledata"]);
    }

    #[test]
    fn test_suffix_matches_on_segment_boundary() {
        let validator = Validator::new(TEST_RULES);
        // "xa.b" must not match the pattern "a.b"
        let tree = json!({ "xa": { "b": null }, "a": { "b": null } });
        let violations = validator.validate_tree(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "uddf.a.b");
    }

    #[test]
    fn test_sequence_index_in_path() {
        let validator = Validator::new(TEST_RULES);
        let tree = json!({
            "item": [
                { "level": 0.5, "colour": "red" },
                { "level": 2.0, "colour": "blue" }
            ]
        });
        let violations = validator.validate_tree(&tree);
        let paths: Vec<_> = violations.iter().map(|v| v.path.as_str()).collect();
        assert_eq!(paths, vec!["uddf.item[1].level", "uddf.item[1].colour"]);
    }

    #[test]
    fn test_absent_values_exempt_from_range_and_enumeration() {
        let validator = Validator::new(TEST_RULES);
        let tree = json!({ "item": { "level": null, "colour": null } });
        assert!(validator.validate_tree(&tree).is_empty());
    }

    #[test]
    fn test_range_bounds_inclusive() {
        let validator = Validator::new(TEST_RULES);
        let tree = json!({ "item": [{ "level": 0.0 }, { "level": 1.0 }] });
        assert!(validator.validate_tree(&tree).is_empty());
    }

    #[test]
    fn test_enumeration_over_sequence_elements() {
        let validator = Validator::new(TEST_RULES);
        let tree = json!({ "item": { "colour": ["red", " green ", "Red"] } });
        let violations = validator.validate_tree(&tree);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].path, "uddf.item.colour[2]");
    }

    #[test]
    fn test_required_treats_blank_and_empty_as_absent() {
        let validator = Validator::new(TEST_RULES);
        assert_eq!(validator.validate_tree(&json!({ "a": { "b": "  " } })).len(), 1);
        assert_eq!(validator.validate_tree(&json!({ "a": { "b": [] } })).len(), 1);
        assert!(validator.validate_tree(&json!({ "a": { "b": 0 } })).is_empty());
    }

    // ==================== UDDF rules ====================

    #[test]
    fn test_oxygen_fraction_out_of_range() {
        let doc = with_mix(Mix {
            name: Some("hyperoxic".into()),
            o2: Some(1.5),
            ..Default::default()
        });
        let report = Validator::default().validate_document(Some(&doc));
        assert_eq!(report.len(), 1);
        let v = &report.violations()[0];
        assert_eq!(v.path, "uddf.gasdefinitions.mix[0].o2");
        assert_eq!(v.rule, RuleKind::Range);
    }

    #[test]
    fn test_zero_helium_is_present_and_valid() {
        let doc = with_mix(Mix {
            name: Some("air".into()),
            o2: Some(0.21),
            he: Some(0.0),
            ..Default::default()
        });
        assert!(Validator::default().validate_document(Some(&doc)).is_valid());
    }

    #[test]
    fn test_mix_name_required() {
        let doc = with_mix(Mix {
            o2: Some(0.21),
            ..Default::default()
        });
        let report = Validator::default().validate_document(Some(&doc));
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].path, "uddf.gasdefinitions.mix[0].name");
        assert_eq!(report.violations()[0].rule, RuleKind::Required);
    }

    #[test]
    fn test_non_finite_fraction_projects_as_absent() {
        let doc = with_mix(Mix {
            name: Some("odd".into()),
            o2: Some(f64::NAN),
            ..Default::default()
        });
        assert!(Validator::default().validate_document(Some(&doc)).is_valid());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let doc = with_mix(Mix {
            o2: Some(2.0),
            he: Some(-0.1),
            ..Default::default()
        });
        let validator = Validator::default();
        let first = validator.validate_document(Some(&doc));
        for _ in 0..10 {
            assert_eq!(validator.validate_document(Some(&doc)), first);
        }
        assert_eq!(first.len(), 3);
    }
}
