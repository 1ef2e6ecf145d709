//! Decode Invariant Tests
//!
//! - Well-formed documents bind completely, source values preserved
//! - Malformed numbers degrade to absent, the document still decodes
//! - Unparseable timestamps abort the decode with the offending text
//! - Resource failures are distinct from structural failures

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;
use uddf::decode::{decode, decode_from_path, decode_reader, decode_str, DecodeErrorKind};
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

// =============================================================================
// Structural Round-Trip Tests
// =============================================================================

#[test]
fn test_valid_file_top_level_fields() {
    let doc = load("valid.uddf");

    assert_eq!(doc.version, "3.2.3");
    assert!(doc.has_gas_definitions());
    assert_eq!(doc.mixes().len(), 2);
    let groups = &doc.profile_data.as_ref().unwrap().repetition_groups;
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id.as_deref(), Some("rg1"));
}

#[test]
fn test_dives_and_waypoints_keep_source_order() {
    let doc = load("valid.uddf");

    let ids: Vec<_> = doc.dives().map(|d| d.id.as_deref().unwrap()).collect();
    assert_eq!(ids, vec!["dive1", "dive2"]);

    let times: Vec<_> = doc
        .dives()
        .next()
        .unwrap()
        .waypoints()
        .iter()
        .map(|w| w.dive_time.unwrap())
        .collect();
    assert_eq!(times, vec![0.0, 120.0, 600.0, 2400.0]);
}

#[test]
fn test_switchmix_resolves_to_mix() {
    let doc = load("valid.uddf");
    let dive = doc.dives().nth(1).unwrap();
    let reference = dive.waypoints()[0]
        .switch_mix
        .as_ref()
        .and_then(|s| s.reference.as_deref())
        .unwrap();
    let mix = doc.mix(reference).unwrap();
    assert_eq!(mix.name.as_deref(), Some("EAN32"));
    assert_eq!(mix.o2, Some(0.32));
}

#[test]
fn test_zero_is_present_not_absent() {
    let doc = load("valid.uddf");
    let air = doc.mix("air").unwrap();
    assert_eq!(air.he, Some(0.0));
    assert_eq!(air.ar, None);
}

#[test]
fn test_interleaved_equipment_binds_every_tank() {
    let doc = load("valid.uddf");
    let owner = doc.diver.as_ref().unwrap().owner.as_ref().unwrap();
    let equipment = owner.equipment.as_ref().unwrap();
    let tanks: Vec<_> = equipment.tanks.iter().map(|t| t.id.as_deref().unwrap()).collect();
    assert_eq!(tanks, vec!["tank1", "tank2"]);
    assert_eq!(equipment.fins.len(), 1);
    assert_eq!(equipment.tanks[0].tank_volume, Some(0.012));
}

#[test]
fn test_flags_and_temporal_leaves() {
    let doc = load("valid.uddf");

    let buddy = &doc.diver.as_ref().unwrap().buddies[0];
    assert!(buddy.student);

    let first = doc.dives().next().unwrap();
    let before = first.information_before_dive.as_ref().unwrap();
    assert!(before.surface_interval_before_dive.as_ref().unwrap().infinity);
    assert_eq!(before.dive_number, Some(101));
    assert_eq!(
        first.datetime().unwrap().to_string(),
        "2023-06-21T10:15:00+03:00"
    );

    let second = doc.dives().nth(1).unwrap();
    assert_eq!(
        second.datetime().unwrap().to_string(),
        "2023-06-21T14:30:00+00:00"
    );
    assert!(!second
        .information_before_dive
        .as_ref()
        .unwrap()
        .surface_interval_before_dive
        .as_ref()
        .unwrap()
        .infinity);
}

#[test]
fn test_attributes_and_text_content() {
    let doc = load("valid.uddf");
    let waypoint = &doc.dives().next().unwrap().waypoints()[1];
    let pressure = &waypoint.tank_pressures[0];
    assert_eq!(pressure.reference.as_deref(), Some("tank1"));
    assert_eq!(pressure.value, Some(18_500_000.0));

    let tissue = &doc.deco_model.as_ref().unwrap().buehlmann[0].tissues[0];
    assert_eq!(tissue.gas.as_deref(), Some("n2"));
    assert_eq!(tissue.number, Some(1));
}

// =============================================================================
// Lenient Numeric Tests
// =============================================================================

#[test]
fn test_malformed_numbers_become_absent() {
    let doc = load("malformed_numbers.uddf");

    let first = doc.dives().next().unwrap();
    let before = first.information_before_dive.as_ref().unwrap();
    let after = first.information_after_dive.as_ref().unwrap();
    assert_eq!(before.air_temperature, None);
    assert_eq!(after.visibility, None);
    // siblings are untouched
    assert_eq!(after.greatest_depth, Some(24.0));
}

#[test]
fn test_blank_number_is_absent() {
    let doc = decode_str(
        r#"<uddf version="3.2.3">
             <gasdefinitions><mix id="m"><name>x</name><o2>   </o2></mix></gasdefinitions>
             <profiledata/>
           </uddf>"#,
    )
    .unwrap();
    assert_eq!(doc.mix("m").unwrap().o2, None);
}

// =============================================================================
// Hard Failure Tests
// =============================================================================

#[test]
fn test_unparseable_datetime_fails_decode() {
    let err = decode_from_path(testdata("invalid_datetime.uddf")).unwrap_err();

    assert_eq!(err.kind(), DecodeErrorKind::Structural);
    assert!(err.to_string().contains("21/06/2023"), "{}", err);
    assert!(err.path().unwrap().contains("datetime"), "{:?}", err.path());
}

#[test]
fn test_blank_datetime_fails_decode() {
    let err = decode_str(
        r#"<uddf version="3.2.3">
             <generator><name>x</name><datetime>  </datetime></generator>
           </uddf>"#,
    )
    .unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_mismatched_nesting_fails_decode() {
    let err = decode(b"<uddf version=\"3.2.3\"><diver><owner></diver></owner></uddf>").unwrap_err();
    assert!(err.is_structural());
}

#[test]
fn test_missing_file_is_resource_access() {
    let err = decode_from_path(testdata("non_existent.uddf")).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::ResourceAccess);
    assert_eq!(err.code(), "UDDF_RESOURCE_ACCESS");
}

#[test]
fn test_directory_is_resource_access() {
    let tmp = TempDir::new().unwrap();
    let err = decode_from_path(tmp.path()).unwrap_err();
    assert!(err.is_resource_access());
}

// =============================================================================
// Entry Point Equivalence Tests
// =============================================================================

#[test]
fn test_entry_points_agree() {
    let bytes = fs::read(testdata("valid.uddf")).unwrap();
    let from_bytes = decode(&bytes).unwrap();
    let from_reader = decode_reader(bytes.as_slice()).unwrap();
    let from_path = load("valid.uddf");

    assert_eq!(from_bytes, from_reader);
    assert_eq!(from_bytes, from_path);
}

#[test]
fn test_decode_is_deterministic() {
    let bytes = fs::read(testdata("valid.uddf")).unwrap();
    let first = decode(&bytes).unwrap();
    for _ in 0..20 {
        assert_eq!(decode(&bytes).unwrap(), first);
    }
}
