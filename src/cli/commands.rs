use crate::document::registry::SnapshotDocument;
use crate::form::form_spec::{find_spec, load_form_specs};
use crate::form::populate::{set_form_values, MissingFieldPolicy};
use crate::form::resolve::resolve_elements;
use crate::form::values::InitialValues;
use crate::name::joiner::join_name_components;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

// ============================================================================
// name subcommand
// ============================================================================

pub fn cmd_name(components: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", join_name_components(components));
    Ok(())
}

// ============================================================================
// resolve subcommand
// ============================================================================

/// Resolve a form's fields against a snapshot and return whether every
/// field found its element.
pub fn cmd_resolve(
    snapshot_path: &str,
    form_name: &str,
    specs_path: &str,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let specs = load_form_specs(specs_path)?;
    let spec = find_spec(&specs, form_name)?;
    let doc = SnapshotDocument::load(snapshot_path)?;

    if verbose > 0 {
        eprintln!(
            "Resolving {} fields of form '{}' against {} ({} elements)...",
            spec.fields.len(),
            spec.name,
            snapshot_path,
            doc.len()
        );
    }

    let resolved = resolve_elements(&doc, &spec.fields);

    tracer.log(&TraceEvent::FormResolved {
        form: spec.name.clone(),
        requested: resolved.len(),
        present: resolved.len() - resolved.missing().len(),
        missing: resolved.missing().iter().map(|f| f.to_string()).collect(),
    });

    for (field, handle) in resolved.iter() {
        match handle {
            Some(_) => println!("  {} -> present", field),
            None => println!("  {} -> MISSING", field),
        }
    }

    let missing = resolved.missing();
    if missing.is_empty() {
        println!("All {} fields resolved", resolved.len());
    } else {
        println!("{} of {} fields missing", missing.len(), resolved.len());
    }

    Ok(missing.is_empty())
}

// ============================================================================
// populate subcommand
// ============================================================================

pub fn cmd_populate(
    snapshot_path: &str,
    record_path: &str,
    form_name: &str,
    specs_path: &str,
    skip_missing: bool,
    output: Option<&str>,
    verbose: u8,
    tracer: &TraceLogger,
) -> Result<(), Box<dyn std::error::Error>> {
    let specs = load_form_specs(specs_path)?;
    let spec = find_spec(&specs, form_name)?;
    let mut doc = SnapshotDocument::load(snapshot_path)?;
    let values = InitialValues::load(record_path)?;

    let policy = if skip_missing {
        MissingFieldPolicy::Skip
    } else {
        MissingFieldPolicy::Fail
    };

    if verbose > 0 {
        eprintln!(
            "Populating form '{}' ({} fields) from {}...",
            spec.name,
            spec.fields.len(),
            record_path
        );
    }

    let resolved = resolve_elements(&doc, &spec.fields);
    tracer.log(&TraceEvent::FormResolved {
        form: spec.name.clone(),
        requested: resolved.len(),
        present: resolved.len() - resolved.missing().len(),
        missing: resolved.missing().iter().map(|f| f.to_string()).collect(),
    });

    let report = set_form_values(&mut doc, &spec.fields, &resolved, &values, policy, tracer)?;

    tracer.log(&TraceEvent::FormPopulated {
        form: spec.name.clone(),
        fields_set: report.fields_set.len(),
        skipped: report.skipped.len(),
        record_fingerprint: values.fingerprint(),
    });

    if verbose > 0 {
        eprintln!("Set {} fields", report.fields_set.len());
        for skipped in &report.skipped {
            eprintln!("  Skipped {}: {}", skipped.field, skipped.reason.as_str());
        }
    }

    // Write or print the populated snapshot
    match output {
        Some(path) => {
            doc.save(path)?;
            println!(
                "Wrote {} ({} fields set, {} skipped)",
                path,
                report.fields_set.len(),
                report.skipped.len()
            );
        }
        None => println!("{}", serde_json::to_string_pretty(&doc.to_json())?),
    }

    Ok(())
}
