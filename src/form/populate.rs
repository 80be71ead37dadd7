use crate::document::registry::FormDocument;
use crate::form::error::FormError;
use crate::form::resolve::ResolvedElements;
use crate::form::values::InitialValues;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::TraceEvent;

/// What to do when a field's element or value is missing during population.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingFieldPolicy {
    /// Abort on the first missing element or value
    Fail,
    /// Skip the field and record it in the report
    Skip,
}

/// Why a field was skipped under [`MissingFieldPolicy::Skip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingElement,
    MissingValue,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::MissingElement => "missing_element",
            SkipReason::MissingValue => "missing_value",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedField {
    pub field: String,
    pub reason: SkipReason,
}

/// Outcome of one population pass.
#[derive(Debug, Clone, Default)]
pub struct PopulateReport {
    /// Fields whose element value was assigned, in order
    pub fields_set: Vec<String>,

    /// Fields skipped under the Skip policy, in order
    pub skipped: Vec<SkippedField>,
}

impl PopulateReport {
    pub fn all_set(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Populate form fields from the initial-values mapping.
///
/// Iterates `field_names` in order; for each field looks up the resolved
/// element and the initial value, then assigns the value to the element.
/// Missing pairs follow `policy`: `Fail` returns a typed error naming the
/// field, `Skip` records the field in the report and moves on. Fields not
/// named in `field_names` are never touched, even if resolved.
pub fn set_form_values<D: FormDocument + ?Sized>(
    doc: &mut D,
    field_names: &[String],
    elements: &ResolvedElements,
    values: &InitialValues,
    policy: MissingFieldPolicy,
    tracer: &TraceLogger,
) -> Result<PopulateReport, FormError> {
    let mut report = PopulateReport::default();

    for field in field_names {
        let handle = match elements.handle(field) {
            Some(h) => h,
            None => {
                skip_or_fail(field, SkipReason::MissingElement, policy, &mut report, tracer)?;
                continue;
            }
        };

        let value = match values.get(field) {
            Some(v) => v,
            None => {
                skip_or_fail(field, SkipReason::MissingValue, policy, &mut report, tracer)?;
                continue;
            }
        };

        doc.set_value(handle, value)?;
        tracer.log(&TraceEvent::ValueSet {
            field: field.clone(),
            value: value.to_string(),
        });
        report.fields_set.push(field.clone());
    }

    Ok(report)
}

fn skip_or_fail(
    field: &str,
    reason: SkipReason,
    policy: MissingFieldPolicy,
    report: &mut PopulateReport,
    tracer: &TraceLogger,
) -> Result<(), FormError> {
    match policy {
        MissingFieldPolicy::Fail => Err(match reason {
            SkipReason::MissingElement => FormError::MissingElement {
                field: field.to_string(),
            },
            SkipReason::MissingValue => FormError::MissingValue {
                field: field.to_string(),
            },
        }),
        MissingFieldPolicy::Skip => {
            tracer.log(&TraceEvent::FieldSkipped {
                field: field.to_string(),
                reason: reason.as_str().to_string(),
            });
            report.skipped.push(SkippedField {
                field: field.to_string(),
                reason,
            });
            Ok(())
        }
    }
}
