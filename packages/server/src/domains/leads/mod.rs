//! Lead intake domain: validation and the enquiry form submit flow.

pub mod form;
pub mod validate;

pub use form::{LeadFormFlow, Notice, SubmitAttempt, SubmitOutcome, SubmitState};
pub use validate::{validate, FieldError, LeadSubmission};
