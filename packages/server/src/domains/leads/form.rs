//! Enquiry form submit flow.
//!
//! Owns the per-form state: field values, the in-flight submit state, the
//! pending address suggestion, and the notices to surface to the visitor.
//! Remote capabilities are injected as traits so the flow can be driven
//! against mocks in tests.
//!
//! State machine:
//! `Idle -> Submitting -> Done(Success)` (form reset) or
//! `Idle -> Submitting -> Done(Failure)` (fields retained for retry).
//! A submit while `Submitting` is a no-op; no second relay call is issued.
//!
//! The embedded marketing page (`site/index.html`) mirrors this flow in its
//! inline script: same field rules and messages as [`validate`], same
//! [`ADDRESS_CORRECTION_THRESHOLD`], same double-submit guard and toast copy.
//! When changing a rule here, change the script too; a test in
//! `server::static_files` checks the page for the shared rules.

use std::sync::Arc;

use tracing::warn;

use crate::domains::leads::validate::{validate, FieldError, LeadSubmission};
use crate::kernel::{BaseAddressNormalizer, BaseLeadRelay};

/// Minimum address length before a correction call is worth issuing.
const ADDRESS_CORRECTION_THRESHOLD: usize = 10;

/// Submit flow state. Explicit three states, not an ad hoc boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Submitting,
    Done(SubmitOutcome),
}

/// Terminal result of one submit attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Success,
    Failure,
}

/// Outcome of calling [`LeadFormFlow::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    /// Validation failed; per-field messages, nothing dispatched.
    Rejected(Vec<FieldError>),
    /// A submission is already in flight; this click was ignored.
    InFlight,
    /// The relay was called and finished with this outcome.
    Completed(SubmitOutcome),
}

/// A toast-style notice for the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: &'static str,
    pub error: bool,
}

impl Notice {
    fn enquiry_sent() -> Self {
        Self {
            title: "Enquiry Sent!",
            description: "Thank you for your interest. We will get back to you shortly.",
            error: false,
        }
    }

    fn submit_failed() -> Self {
        Self {
            title: "Error",
            description: "Something went wrong. Please try again.",
            error: true,
        }
    }
}

/// The enquiry form controller.
pub struct LeadFormFlow {
    normalizer: Arc<dyn BaseAddressNormalizer>,
    relay: Arc<dyn BaseLeadRelay>,
    fields: LeadSubmission,
    suggestion: Option<String>,
    state: SubmitState,
    notices: Vec<Notice>,
}

impl LeadFormFlow {
    pub fn new(normalizer: Arc<dyn BaseAddressNormalizer>, relay: Arc<dyn BaseLeadRelay>) -> Self {
        Self {
            normalizer,
            relay,
            fields: LeadSubmission::empty(),
            suggestion: None,
            state: SubmitState::Idle,
            notices: Vec::new(),
        }
    }

    pub fn fields(&self) -> &LeadSubmission {
        &self.fields
    }

    pub fn set_fields(&mut self, fields: LeadSubmission) {
        self.fields = fields;
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.fields.address = address.into();
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The pending address suggestion, if any.
    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Drain accumulated notices. Each completed submit produces exactly one.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    /// The address field lost focus: maybe ask the normalizer for a correction.
    ///
    /// Inputs shorter than the threshold never issue a call. A correction that
    /// is empty (unrecognized) or equal to the input ignoring case is not
    /// surfaced. Normalizer errors are logged and swallowed; the field is left
    /// as typed.
    pub async fn address_blur(&mut self) {
        self.suggestion = None;

        if self.fields.address.chars().count() < ADDRESS_CORRECTION_THRESHOLD {
            return;
        }

        match self.normalizer.normalize(&self.fields.address).await {
            Ok(corrected) => {
                if !corrected.is_empty()
                    && corrected.to_lowercase() != self.fields.address.to_lowercase()
                {
                    self.suggestion = Some(corrected);
                }
            }
            Err(e) => {
                warn!(error = %e, "Address correction failed");
            }
        }
    }

    /// Accept the pending suggestion, overwriting the address field.
    ///
    /// Does not re-trigger validation; the next submit validates as usual.
    pub fn accept_suggestion(&mut self) {
        if let Some(suggestion) = self.suggestion.take() {
            self.fields.address = suggestion;
        }
    }

    /// Validate and dispatch the enquiry.
    ///
    /// All-or-nothing, single attempt, no retry. On success the form resets to
    /// empty defaults; on failure the entered values are retained so the
    /// visitor can try again.
    pub async fn submit(&mut self) -> SubmitAttempt {
        if self.state == SubmitState::Submitting {
            return SubmitAttempt::InFlight;
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            return SubmitAttempt::Rejected(errors);
        }

        self.state = SubmitState::Submitting;

        let outcome = match self.relay.deliver(&self.fields).await {
            Ok(_) => {
                self.fields = LeadSubmission::empty();
                self.suggestion = None;
                self.notices.push(Notice::enquiry_sent());
                SubmitOutcome::Success
            }
            Err(e) => {
                warn!(error = %e, "Lead relay failed");
                self.notices.push(Notice::submit_failed());
                SubmitOutcome::Failure
            }
        };

        self.state = SubmitState::Done(outcome);
        SubmitAttempt::Completed(outcome)
    }

    #[cfg(test)]
    pub(crate) fn force_state(&mut self, state: SubmitState) {
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockAddressNormalizer, MockLeadRelay};

    fn valid_fields() -> LeadSubmission {
        LeadSubmission {
            name: "Jo".to_string(),
            phone: "+919999999999".to_string(),
            address: "12 Example Street, City".to_string(),
            plot_size: "1500".to_string(),
            city: "Lucknow".to_string(),
        }
    }

    fn flow_with(
        normalizer: MockAddressNormalizer,
        relay: MockLeadRelay,
    ) -> (LeadFormFlow, Arc<MockAddressNormalizer>, Arc<MockLeadRelay>) {
        let normalizer = Arc::new(normalizer);
        let relay = Arc::new(relay);
        let flow = LeadFormFlow::new(normalizer.clone(), relay.clone());
        (flow, normalizer, relay)
    }

    #[tokio::test]
    async fn short_address_never_issues_a_correction_call() {
        let (mut flow, normalizer, _) =
            flow_with(MockAddressNormalizer::new(), MockLeadRelay::new());
        flow.set_address("12 Main");

        flow.address_blur().await;

        assert!(normalizer.calls().is_empty());
        assert_eq!(flow.suggestion(), None);
    }

    #[tokio::test]
    async fn correction_equal_ignoring_case_is_not_surfaced() {
        let (mut flow, normalizer, _) = flow_with(
            MockAddressNormalizer::new().with_correction("12 EXAMPLE STREET, CITY"),
            MockLeadRelay::new(),
        );
        flow.set_address("12 example street, city");

        flow.address_blur().await;

        assert_eq!(normalizer.calls().len(), 1);
        assert_eq!(flow.suggestion(), None);
    }

    #[tokio::test]
    async fn differing_correction_is_offered_and_accepted() {
        let (mut flow, _, _) = flow_with(
            MockAddressNormalizer::new().with_correction("12 Example Street, Lucknow 226001"),
            MockLeadRelay::new(),
        );
        flow.set_address("12 exmple street lucknow");

        flow.address_blur().await;
        assert_eq!(flow.suggestion(), Some("12 Example Street, Lucknow 226001"));

        flow.accept_suggestion();
        assert_eq!(flow.fields().address, "12 Example Street, Lucknow 226001");
        assert_eq!(flow.suggestion(), None);
    }

    #[tokio::test]
    async fn empty_correction_means_unrecognized() {
        let (mut flow, _, _) = flow_with(
            MockAddressNormalizer::new().with_correction(""),
            MockLeadRelay::new(),
        );
        flow.set_address("qwertyuiopasdf");

        flow.address_blur().await;

        assert_eq!(flow.suggestion(), None);
    }

    #[tokio::test]
    async fn normalizer_errors_leave_the_field_unchanged() {
        let (mut flow, _, _) = flow_with(
            MockAddressNormalizer::new().failing(),
            MockLeadRelay::new(),
        );
        flow.set_address("12 Example Street, City");

        flow.address_blur().await;

        assert_eq!(flow.fields().address, "12 Example Street, City");
        assert_eq!(flow.suggestion(), None);
    }

    #[tokio::test]
    async fn invalid_phone_blocks_submission() {
        let (mut flow, _, relay) =
            flow_with(MockAddressNormalizer::new(), MockLeadRelay::new());
        flow.set_fields(LeadSubmission {
            phone: "not-a-phone".to_string(),
            ..valid_fields()
        });

        let attempt = flow.submit().await;

        match attempt {
            SubmitAttempt::Rejected(errors) => {
                assert!(errors.iter().any(|e| e.field == "phone"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(relay.deliveries().is_empty());
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[tokio::test]
    async fn successful_submit_resets_form_and_notifies_once() {
        let (mut flow, _, relay) =
            flow_with(MockAddressNormalizer::new(), MockLeadRelay::new());
        flow.set_fields(valid_fields());

        let attempt = flow.submit().await;

        assert_eq!(attempt, SubmitAttempt::Completed(SubmitOutcome::Success));
        assert_eq!(relay.deliveries(), vec![valid_fields()]);
        assert_eq!(*flow.fields(), LeadSubmission::empty());
        assert_eq!(flow.state(), SubmitState::Done(SubmitOutcome::Success));

        let notices = flow.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Enquiry Sent!");
        assert!(!notices[0].error);
        assert!(flow.take_notices().is_empty());
    }

    #[tokio::test]
    async fn failed_submit_retains_fields_and_notifies_once() {
        let (mut flow, _, relay) = flow_with(
            MockAddressNormalizer::new(),
            MockLeadRelay::new().failing(),
        );
        flow.set_fields(valid_fields());

        let attempt = flow.submit().await;

        assert_eq!(attempt, SubmitAttempt::Completed(SubmitOutcome::Failure));
        assert_eq!(relay.deliveries().len(), 1);
        assert_eq!(*flow.fields(), valid_fields());
        assert_eq!(flow.state(), SubmitState::Done(SubmitOutcome::Failure));

        let notices = flow.take_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].error);
    }

    #[tokio::test]
    async fn submit_while_submitting_is_a_no_op() {
        let (mut flow, _, relay) =
            flow_with(MockAddressNormalizer::new(), MockLeadRelay::new());
        flow.set_fields(valid_fields());
        flow.force_state(SubmitState::Submitting);

        let attempt = flow.submit().await;

        assert_eq!(attempt, SubmitAttempt::InFlight);
        assert!(relay.deliveries().is_empty());
    }

    #[tokio::test]
    async fn failed_submit_can_be_retried() {
        let (mut flow, _, relay) = flow_with(
            MockAddressNormalizer::new(),
            MockLeadRelay::new().failing(),
        );
        flow.set_fields(valid_fields());

        assert_eq!(
            flow.submit().await,
            SubmitAttempt::Completed(SubmitOutcome::Failure)
        );
        // Done(Failure) does not block the next attempt
        assert_eq!(
            flow.submit().await,
            SubmitAttempt::Completed(SubmitOutcome::Failure)
        );
        assert_eq!(relay.deliveries().len(), 2);
    }

    #[tokio::test]
    async fn accepted_suggestion_is_submitted_without_revalidation_in_between() {
        let (mut flow, _, relay) = flow_with(
            MockAddressNormalizer::new().with_correction("12 Example Street, Lucknow"),
            MockLeadRelay::new(),
        );
        flow.set_fields(valid_fields());
        flow.set_address("12 exampl street lucknow");

        flow.address_blur().await;
        flow.accept_suggestion();

        assert_eq!(
            flow.submit().await,
            SubmitAttempt::Completed(SubmitOutcome::Success)
        );
        assert_eq!(relay.deliveries()[0].address, "12 Example Street, Lucknow");
    }
}
