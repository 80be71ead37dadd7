pub mod error;
pub mod form_spec;
pub mod populate;
pub mod resolve;
pub mod values;
