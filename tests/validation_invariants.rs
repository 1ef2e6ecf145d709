//! Validation Invariant Tests
//!
//! - A valid document produces no violations
//! - Range, required and enumeration rules report the offending path
//! - An absent document is one violation, never a panic
//! - Validation is deterministic

use std::fs;
use std::path::PathBuf;

use uddf::decode::{decode_from_path, decode_str};
use uddf::validation::rules::{PROBLEMS, PROGRAM};
use uddf::validation::{validate, RuleKind, ValidationReport, Validator};
use uddf::Uddf;

// =============================================================================
// Helper Functions
// =============================================================================

fn testdata(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("testdata")
        .join(name)
}

fn load(name: &str) -> Uddf {
    decode_from_path(testdata(name)).unwrap()
}

/// Decodes the valid fixture with one fragment replaced.
fn variant(from: &str, to: &str) -> Uddf {
    let text = fs::read_to_string(testdata("valid.uddf")).unwrap();
    assert!(text.contains(from), "fixture lacks {:?}", from);
    decode_str(&text.replacen(from, to, 1)).unwrap()
}

fn violation_paths(doc: &Uddf) -> Vec<String> {
    validate(Some(doc))
        .violations()
        .iter()
        .map(|v| v.path.clone())
        .collect()
}

const DIVE1: &str = "uddf.profiledata.repetitiongroup[0].dive[0]";
const DIVE2: &str = "uddf.profiledata.repetitiongroup[0].dive[1]";

fn paths(report: &ValidationReport) -> Vec<&str> {
    report.violations().iter().map(|v| v.path.as_str()).collect()
}

// =============================================================================
// Fixture Tests
// =============================================================================

#[test]
fn test_valid_file_passes() {
    let report = validate(Some(&load("valid.uddf")));
    assert!(report.is_valid(), "{}", report);
}

#[test]
fn test_absent_document_is_single_violation() {
    let report = validate(None);
    assert_eq!(report.len(), 1);
    assert_eq!(report.violations()[0].rule, RuleKind::Document);
}

#[test]
fn test_invalid_gas_fraction_fails() {
    let report = validate(Some(&load("invalid_gas_fraction.uddf")));
    assert_eq!(paths(&report), vec!["uddf.gasdefinitions.mix[1].o2"]);
    assert_eq!(report.violations()[0].rule, RuleKind::Range);
}

#[test]
fn test_fixing_gas_fraction_clears_violation() {
    let mut doc = load("invalid_gas_fraction.uddf");
    if let Some(gas) = doc.gas_definitions.as_mut() {
        gas.mixes[1].o2 = Some(0.21);
    }
    assert!(validate(Some(&doc)).is_valid());
}

#[test]
fn test_missing_mix_name_fails() {
    let report = validate(Some(&load("missing_mix_name.uddf")));
    assert_eq!(paths(&report), vec!["uddf.gasdefinitions.mix[1].name"]);
    assert_eq!(report.violations()[0].rule, RuleKind::Required);
}

#[test]
fn test_supplying_mix_name_clears_violation() {
    let mut doc = load("missing_mix_name.uddf");
    if let Some(gas) = doc.gas_definitions.as_mut() {
        gas.mixes[1].name = Some("Nitrox".into());
    }
    assert!(validate(Some(&doc)).is_valid());
}

#[test]
fn test_invalid_problems_fails() {
    let report = validate(Some(&load("invalid_problems.uddf")));
    assert_eq!(report.len(), 1);
    let violation = &report.violations()[0];
    assert_eq!(violation.rule, RuleKind::Enumeration);
    assert!(violation.path.ends_with("dive[1].informationafterdive.problems[1]"));
    assert!(violation.message.contains("shark-attack"));
}

#[test]
fn test_invalid_program_fails() {
    let report = validate(Some(&load("invalid_program.uddf")));
    assert_eq!(report.len(), 1);
    assert!(report.violations()[0]
        .path
        .ends_with("dive[0].informationafterdive.program"));
}

#[test]
fn test_malformed_numbers_do_not_invalidate() {
    let report = validate(Some(&load("malformed_numbers.uddf")));
    assert!(report.is_valid(), "{}", report);
}

// =============================================================================
// Enumeration Membership Tests
// =============================================================================

#[test]
fn test_every_problems_keyword_passes() {
    let base = load("valid.uddf");
    for keyword in PROBLEMS.members {
        let mut doc = base.clone();
        if let Some(after) = doc
            .profile_data
            .as_mut()
            .and_then(|p| p.repetition_groups[0].dives[1].information_after_dive.as_mut())
        {
            after.problems = vec![keyword.to_string()];
        }
        assert!(validate(Some(&doc)).is_valid(), "{}", keyword);
    }
}

#[test]
fn test_every_program_keyword_passes() {
    let base = load("valid.uddf");
    for keyword in PROGRAM.members {
        let mut doc = base.clone();
        if let Some(after) = doc
            .profile_data
            .as_mut()
            .and_then(|p| p.repetition_groups[0].dives[0].information_after_dive.as_mut())
        {
            after.program = Some(keyword.to_string());
        }
        assert!(validate(Some(&doc)).is_valid(), "{}", keyword);
    }
}

// =============================================================================
// Completeness and Determinism Tests
// =============================================================================

#[test]
fn test_all_violations_reported_in_one_pass() {
    let mut doc = load("valid.uddf");
    doc.diver = None;
    if let Some(gas) = doc.gas_definitions.as_mut() {
        gas.mixes[0].o2 = Some(-0.1);
        gas.mixes[1].name = None;
    }
    let report = validate(Some(&doc));
    assert_eq!(
        paths(&report),
        vec![
            "uddf.diver",
            "uddf.gasdefinitions.mix[0].o2",
            "uddf.gasdefinitions.mix[1].name",
        ]
    );
}

#[test]
fn test_validation_is_deterministic() {
    let doc = load("invalid_problems.uddf");
    let validator = Validator::default();
    let first = validator.validate_document(Some(&doc));
    for _ in 0..100 {
        assert_eq!(validator.validate_document(Some(&doc)), first);
    }
}

#[test]
fn test_into_result_propagates_report() {
    let err = validate(Some(&load("invalid_program.uddf")))
        .into_result()
        .unwrap_err();
    assert!(err.to_string().contains("holiday"));
}

// =============================================================================
// Attribute Rule Tests
// =============================================================================

#[test]
fn test_unknown_tissue_gas_fails() {
    let doc = variant(r#"gas="he""#, r#"gas="o2""#);
    assert_eq!(
        violation_paths(&doc),
        vec!["uddf.decomodel.buehlmann[0].tissue[1].@gas"]
    );
}

#[test]
fn test_unknown_dive_mode_fails() {
    let doc = variant(r#"type="opencircuit""#, r#"type="scuba""#);
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.samples.waypoint[0].divemode.@type", DIVE1)]
    );
}

#[test]
fn test_switchmix_without_reference_fails() {
    let doc = variant(r#"<switchmix ref="ean32"/>"#, "<switchmix/>");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.samples.waypoint[0].switchmix.@ref", DIVE2)]
    );
}

#[test]
fn test_link_without_reference_fails() {
    let doc = variant(r#"<link ref="site1"/>"#, "<link/>");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.informationbeforedive.link[0].@ref", DIVE1)]
    );
}

// =============================================================================
// Required Leaf Tests
// =============================================================================

#[test]
fn test_dive_without_datetime_fails() {
    let doc = variant("<datetime>2023-06-21T14:30</datetime>", "");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.informationbeforedive.datetime", DIVE2)]
    );
}

#[test]
fn test_waypoint_without_depth_fails() {
    let doc = variant("<depth>12.0</depth>", "");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.samples.waypoint[1].depth", DIVE2)]
    );
}

#[test]
fn test_waypoint_without_divetime_fails() {
    let doc = variant("<divetime>300</divetime>", "");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.samples.waypoint[1].divetime", DIVE2)]
    );
}

// =============================================================================
// Range Rule Tests
// =============================================================================

#[test]
fn test_site_difficulty_above_ten_fails() {
    let doc = variant("<difficulty>7</difficulty>", "<difficulty>11</difficulty>");
    assert_eq!(
        violation_paths(&doc),
        vec!["uddf.divesite.site[0].sitedata.difficulty"]
    );
}

#[test]
fn test_rating_below_one_fails() {
    let doc = variant("<ratingvalue>8</ratingvalue>", "<ratingvalue>0</ratingvalue>");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.informationafterdive.rating[0].ratingvalue", DIVE1)]
    );
}

#[test]
fn test_hargikas_levels_outside_zero_to_seven_fail() {
    let doc = variant(
        r#"<dive id="dive2">"#,
        r#"<dive id="dive2">
        <applicationdata>
          <hargikas>
            <arterialmicrobubblelevel>9</arterialmicrobubblelevel>
            <estimatedskincoollevel>-1</estimatedskincoollevel>
          </hargikas>
        </applicationdata>"#,
    );
    assert_eq!(
        violation_paths(&doc),
        vec![
            format!("{}.applicationdata.hargikas.arterialmicrobubblelevel", DIVE2),
            format!("{}.applicationdata.hargikas.estimatedskincoollevel", DIVE2),
        ]
    );
}

#[test]
fn test_hargikas_levels_at_bounds_pass() {
    let doc = variant(
        r#"<dive id="dive2">"#,
        r#"<dive id="dive2">
        <applicationdata>
          <hargikas>
            <arterialmicrobubblelevel>0</arterialmicrobubblelevel>
            <estimatedskincoollevel>7</estimatedskincoollevel>
          </hargikas>
        </applicationdata>"#,
    );
    assert!(validate(Some(&doc)).is_valid());
}

// =============================================================================
// Further Enumeration Tests
// =============================================================================

#[test]
fn test_unknown_current_fails() {
    let doc = variant("<current>mild-current</current>", "<current>strong</current>");
    assert_eq!(
        violation_paths(&doc),
        vec![format!("{}.informationafterdive.current", DIVE1)]
    );
}

#[test]
fn test_unknown_tank_material_fails() {
    let doc = variant(
        "<tankmaterial>steel</tankmaterial>",
        "<tankmaterial>titanium</tankmaterial>",
    );
    assert_eq!(
        violation_paths(&doc),
        vec!["uddf.diver.owner.equipment.tank[0].tankmaterial"]
    );
}

#[test]
fn test_unknown_generator_type_fails() {
    let doc = variant("<type>logbook</type>", "<type>spreadsheet</type>");
    assert_eq!(violation_paths(&doc), vec!["uddf.generator.type"]);
}

#[test]
fn test_unknown_environment_fails() {
    let doc = variant(
        "<environment>ocean-sea</environment>",
        "<environment>puddle</environment>",
    );
    assert_eq!(violation_paths(&doc), vec!["uddf.divesite.site[0].environment"]);
}

#[test]
fn test_enumeration_is_case_sensitive() {
    let doc = variant(
        "<globallightintensity>sunny</globallightintensity>",
        "<globallightintensity>Sunny</globallightintensity>",
    );
    assert_eq!(
        violation_paths(&doc),
        vec!["uddf.divesite.site[0].sitedata.globallightintensity"]
    );
}
