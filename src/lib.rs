use crate::document::registry::FormDocument;
use crate::form::error::FormError;
use crate::form::populate::{set_form_values, MissingFieldPolicy, PopulateReport};
use crate::form::resolve::resolve_elements;
use crate::form::values::InitialValues;
use crate::trace::logger::TraceLogger;

pub mod cli;
pub mod document;
pub mod form;
pub mod name;
pub mod trace;

/// Resolve a form's elements and populate them from the initial values, in
/// one pass. This is the whole form-initialization flow for callers that do
/// not need the intermediate resolution.
pub fn populate_form<D: FormDocument>(
    doc: &mut D,
    field_names: &[String],
    values: &InitialValues,
    policy: MissingFieldPolicy,
    tracer: &TraceLogger,
) -> Result<PopulateReport, FormError> {
    let elements = resolve_elements(doc, field_names);
    set_form_values(doc, field_names, &elements, values, policy, tracer)
}
