mod common;

use common::utils::fixture;
use rockin_forms::document::element::FormElement;
use rockin_forms::document::registry::{FormDocument, SnapshotDocument};
use rockin_forms::form::error::FormError;
use rockin_forms::form::populate::{set_form_values, MissingFieldPolicy, SkipReason};
use rockin_forms::form::resolve::resolve_elements;
use rockin_forms::form::values::InitialValues;
use rockin_forms::populate_form;
use rockin_forms::trace::logger::TraceLogger;
use rockin_forms::trace::trace::TraceEvent;

fn fields(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn values(pairs: &[(&str, &str)]) -> InitialValues {
    pairs
        .iter()
        .map(|(f, v)| (f.to_string(), v.to_string()))
        .collect()
}

fn well_core_document() -> SnapshotDocument {
    SnapshotDocument::new(
        "edit",
        vec![
            FormElement::input("well_id"),
            FormElement::input("core_id"),
            FormElement::input("remarks").with_value("unchanged"),
        ],
    )
}

fn displayed(doc: &SnapshotDocument, field: &str) -> String {
    let handle = doc.find_by_id(field).expect("element exists");
    doc.value(handle).expect("handle is live").to_string()
}

// =========================================================================
// Populating present fields
// =========================================================================

#[test]
fn populates_each_field_from_its_initial_value() {
    let mut doc = well_core_document();
    let field_names = fields(&["well_id", "core_id"]);
    let initial = values(&[("well_id", "W-1"), ("core_id", "C-9")]);

    let resolved = resolve_elements(&doc, &field_names);
    let report = set_form_values(
        &mut doc,
        &field_names,
        &resolved,
        &initial,
        MissingFieldPolicy::Fail,
        &TraceLogger::disabled(),
    )
    .expect("all fields present");

    assert_eq!(displayed(&doc, "well_id"), "W-1");
    assert_eq!(displayed(&doc, "core_id"), "C-9");
    assert_eq!(report.fields_set, vec!["well_id", "core_id"]);
    assert!(report.all_set());
}

#[test]
fn only_named_fields_are_touched() {
    let mut doc = well_core_document();
    let field_names = fields(&["well_id"]);
    // remarks has a value too, but is not named
    let initial = values(&[("well_id", "W-1"), ("remarks", "overwritten?")]);

    let resolved = resolve_elements(&doc, &field_names);
    set_form_values(
        &mut doc,
        &field_names,
        &resolved,
        &initial,
        MissingFieldPolicy::Fail,
        &TraceLogger::disabled(),
    )
    .expect("ok");

    assert_eq!(
        displayed(&doc, "remarks"),
        "unchanged",
        "Fields outside field_names keep their value"
    );
}

// =========================================================================
// Missing data: Fail policy
// =========================================================================

#[test]
fn fail_policy_errors_on_missing_element() {
    let mut doc = well_core_document();
    let field_names = fields(&["well_id", "bottom_depth"]);
    let initial = values(&[("well_id", "W-1"), ("bottom_depth", "130.5")]);

    let resolved = resolve_elements(&doc, &field_names);
    let err = set_form_values(
        &mut doc,
        &field_names,
        &resolved,
        &initial,
        MissingFieldPolicy::Fail,
        &TraceLogger::disabled(),
    )
    .expect_err("bottom_depth has no element");

    match err {
        FormError::MissingElement { field } => assert_eq!(field, "bottom_depth"),
        other => panic!("Expected MissingElement, got: {}", other),
    }
}

#[test]
fn fail_policy_errors_on_missing_value() {
    let mut doc = well_core_document();
    let field_names = fields(&["well_id", "core_id"]);
    let initial = values(&[("well_id", "W-1")]);

    let resolved = resolve_elements(&doc, &field_names);
    let err = set_form_values(
        &mut doc,
        &field_names,
        &resolved,
        &initial,
        MissingFieldPolicy::Fail,
        &TraceLogger::disabled(),
    )
    .expect_err("core_id has no value");

    match err {
        FormError::MissingValue { field } => assert_eq!(field, "core_id"),
        other => panic!("Expected MissingValue, got: {}", other),
    }

    assert_eq!(
        displayed(&doc, "well_id"),
        "W-1",
        "Fields before the failure keep their assignment"
    );
}

// =========================================================================
// Missing data: Skip policy
// =========================================================================

#[test]
fn skip_policy_reports_missing_pairs_and_sets_the_rest() {
    let mut doc = well_core_document();
    let field_names = fields(&["well_id", "bottom_depth", "core_id"]);
    let initial = values(&[("well_id", "W-1"), ("bottom_depth", "130.5")]);

    let resolved = resolve_elements(&doc, &field_names);
    let report = set_form_values(
        &mut doc,
        &field_names,
        &resolved,
        &initial,
        MissingFieldPolicy::Skip,
        &TraceLogger::disabled(),
    )
    .expect("skip policy never fails on missing data");

    assert_eq!(report.fields_set, vec!["well_id"], "Present pair was set");
    assert_eq!(report.skipped.len(), 2);
    assert_eq!(report.skipped[0].field, "bottom_depth");
    assert_eq!(report.skipped[0].reason, SkipReason::MissingElement);
    assert_eq!(report.skipped[1].field, "core_id");
    assert_eq!(report.skipped[1].reason, SkipReason::MissingValue);
    assert!(!report.all_set());
}

// =========================================================================
// Handle hygiene
// =========================================================================

#[test]
fn stale_handle_is_a_typed_error() {
    let big = SnapshotDocument::new(
        "big",
        vec![
            FormElement::input("a"),
            FormElement::input("b"),
            FormElement::input("c"),
        ],
    );
    let mut small = SnapshotDocument::new("small", vec![FormElement::input("a")]);

    let foreign = big.find_by_id("c").expect("present in big");
    let err = small
        .set_value(foreign, "x")
        .expect_err("handle does not belong to small");

    match err {
        FormError::StaleHandle { index } => assert_eq!(index, 2),
        other => panic!("Expected StaleHandle, got: {}", other),
    }
}

// =========================================================================
// End-to-end: resolve + populate from fixtures
// =========================================================================

#[test]
fn populate_form_runs_the_whole_flow() {
    let mut doc = SnapshotDocument::load(&fixture("core_entry_page.json")).expect("fixture loads");
    let initial = InitialValues::load(&fixture("core_record.json")).expect("record loads");

    let field_names = fields(&[
        "well_id",
        "core_number",
        "core_section_number",
        "core_section_name",
        "top_depth",
        "remarks",
    ]);

    // remarks is null in the record, so strict population must fail...
    let err = populate_form(
        &mut doc,
        &field_names,
        &initial,
        MissingFieldPolicy::Fail,
        &TraceLogger::disabled(),
    )
    .expect_err("null remarks means no value");
    match err {
        FormError::MissingValue { field } => assert_eq!(field, "remarks"),
        other => panic!("Expected MissingValue, got: {}", other),
    }

    // ...and skip population fills everything else.
    let report = populate_form(
        &mut doc,
        &field_names,
        &initial,
        MissingFieldPolicy::Skip,
        &TraceLogger::disabled(),
    )
    .expect("skip policy succeeds");

    assert_eq!(report.fields_set.len(), 5);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(displayed(&doc, "well_id"), "DEL-GT-01");
    assert_eq!(displayed(&doc, "core_number"), "C1");
    assert_eq!(displayed(&doc, "core_section_number"), "53");
    assert_eq!(displayed(&doc, "core_section_name"), "DELGT01-C1-53");
    assert_eq!(displayed(&doc, "top_depth"), "120.5");
    assert_eq!(displayed(&doc, "remarks"), "", "Skipped field untouched");
}

// =========================================================================
// Trace output
// =========================================================================

#[test]
fn trace_logger_writes_one_json_line_per_event() {
    let path = std::env::temp_dir().join(format!("rockin_forms_trace_{}.jsonl", std::process::id()));
    let path_str = path.display().to_string();
    let _ = std::fs::remove_file(&path);

    let tracer = TraceLogger::new(&path_str);
    tracer.log(&TraceEvent::ValueSet {
        field: "well_id".into(),
        value: "W-1".into(),
    });
    tracer.log(&TraceEvent::FieldSkipped {
        field: "remarks".into(),
        reason: "missing_value".into(),
    });

    let content = std::fs::read_to_string(&path).expect("trace file written");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2, "One line per event");

    let first: serde_json::Value = serde_json::from_str(lines[0]).expect("valid JSON");
    assert_eq!(first["event"], "value_set");
    assert_eq!(first["field"], "well_id");

    let second: serde_json::Value = serde_json::from_str(lines[1]).expect("valid JSON");
    assert_eq!(second["event"], "field_skipped");
    assert_eq!(second["reason"], "missing_value");

    let _ = std::fs::remove_file(&path);
}
