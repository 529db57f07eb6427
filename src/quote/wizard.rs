use std::collections::BTreeMap;
use std::rc::Rc;

use log::warn;

use super::draft::Draft;
use super::estimate::Estimate;
use super::steps::StepSpec;
use crate::forms::simple::HONEYPOT_FIELD;
use crate::forms::status::FormStatus;
use crate::forms::storage::KeyStore;
use crate::forms::transport::{Submission, SubmitOutcome};
use crate::forms::validation::{FieldKind, FieldSpec};

pub const SUBMITTED_MESSAGE: &str =
    "Thank you! Your quote request has been submitted. We'll contact you within 24 hours.";
pub const FAILED_MESSAGE: &str =
    "Something went wrong sending your request. Please try again.";

/// Which step a reloaded page opens on when a draft was found.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ResumePolicy {
    /// Always step 1. Rehydrated values are still filled in.
    #[default]
    FirstStep,
    /// First step whose required fields the draft does not satisfy.
    FurthestStep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepState {
    Completed,
    Active,
    Pending,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Invalid,
    /// Honeypot filled.
    Discarded,
    AtLastStep,
}

#[derive(Clone, Debug, PartialEq)]
pub enum SubmitGate {
    Ready(Submission),
    Invalid,
    Discarded,
    NotReady,
    InFlight,
}

/// State of one quote form. Every mutation that persists takes the store explicitly.
#[derive(Clone, Debug, PartialEq)]
pub struct QuoteWizard {
    steps: Rc<[StepSpec]>,
    step: usize,
    draft: Draft,
    controls: BTreeMap<String, String>,
    errors: BTreeMap<String, String>,
    status: Option<FormStatus>,
    submitting: bool,
}

impl QuoteWizard {
    pub fn new(steps: Vec<StepSpec>) -> Self {
        Self {
            steps: steps.into(),
            step: 1,
            draft: Draft::new(),
            controls: BTreeMap::new(),
            errors: BTreeMap::new(),
            status: None,
            submitting: false,
        }
    }

    /// Builds a wizard and fills its controls from any draft left in `store`.
    pub fn restore(steps: Vec<StepSpec>, store: &dyn KeyStore, policy: ResumePolicy) -> Self {
        let mut wizard = Self::new(steps);
        let mut draft = match Draft::load(store) {
            Ok(Some(draft)) => draft,
            Ok(None) => return wizard,
            Err(err) => {
                warn!("Ignoring saved quote draft: {}", err);
                return wizard;
            }
        };

        let mut stale = Vec::new();
        for (field, value) in draft.iter() {
            match wizard.field_spec(field).map(|spec| spec.accepts(value)) {
                Some(true) => {
                    wizard.controls.insert(field.to_string(), value.to_string());
                }
                Some(false) => stale.push(field.to_string()),
                None => {}
            }
        }
        for field in stale {
            warn!("Dropping saved {} value that matches no option", field);
            draft.remove(&field);
        }
        wizard.draft = draft;

        if policy == ResumePolicy::FurthestStep {
            wizard.step = wizard.first_unsatisfied_step();
        }
        wizard
    }

    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    pub fn current_step(&self) -> usize {
        self.step
    }

    pub fn is_last_step(&self) -> bool {
        self.step == self.step_count()
    }

    pub fn steps(&self) -> &[StepSpec] {
        &self.steps
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn value(&self, field: &str) -> &str {
        self.controls.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn status(&self) -> Option<&FormStatus> {
        self.status.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn progress(&self, step: usize) -> StepState {
        if step < self.step {
            StepState::Completed
        } else if step == self.step {
            StepState::Active
        } else {
            StepState::Pending
        }
    }

    pub fn estimate(&self) -> Estimate {
        Estimate::compute(self.value("category"), self.value("quantity"))
    }

    /// Records a control change. Picking a category is saved straight away.
    pub fn set_field(&mut self, field: &str, value: impl Into<String>, store: &dyn KeyStore) {
        let value = value.into();
        if field == "category" {
            self.draft.insert(field, value.clone());
            self.persist(store);
        }
        self.controls.insert(field.to_string(), value);
    }

    pub fn advance(&mut self, store: &dyn KeyStore) -> Advance {
        if self.is_bot() {
            return Advance::Discarded;
        }
        if self.is_last_step() {
            return Advance::AtLastStep;
        }
        if !self.validate_current_step() {
            return Advance::Invalid;
        }

        self.merge_current_step();
        self.persist(store);
        self.step += 1;
        Advance::Moved(self.step)
    }

    /// Steps back without validating or touching the draft.
    pub fn retreat(&mut self) -> bool {
        if self.step <= 1 {
            return false;
        }
        self.step -= 1;
        true
    }

    /// First half of a submission: gate, validate, and hand back what to send.
    pub fn begin_submit(&mut self, store: &dyn KeyStore) -> SubmitGate {
        if self.is_bot() {
            return SubmitGate::Discarded;
        }
        if self.submitting {
            return SubmitGate::InFlight;
        }
        if !self.is_last_step() {
            return SubmitGate::NotReady;
        }
        if !self.validate_current_step() {
            return SubmitGate::Invalid;
        }

        self.merge_current_step();
        self.persist(store);
        self.submitting = true;
        self.status = None;
        SubmitGate::Ready(Submission {
            form: "quote",
            fields: self.draft.fields().clone(),
        })
    }

    /// Second half: apply what the transport reported.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome, store: &dyn KeyStore) {
        self.submitting = false;
        match outcome {
            Ok(()) => {
                if let Err(err) = store.remove() {
                    warn!("Failed to clear quote draft: {}", err);
                }
                self.draft.clear();
                self.controls.clear();
                self.errors.clear();
                self.step = 1;
                self.status = Some(FormStatus::success(SUBMITTED_MESSAGE));
            }
            Err(err) => {
                warn!("Quote submission failed: {}", err);
                self.status = Some(FormStatus::error(FAILED_MESSAGE));
            }
        }
    }

    fn is_bot(&self) -> bool {
        !self.value(HONEYPOT_FIELD).is_empty()
    }

    fn field_spec(&self, field: &str) -> Option<&FieldSpec> {
        self.steps.iter().find_map(|step| step.field(field))
    }

    fn current_spec(&self) -> &StepSpec {
        &self.steps[self.step - 1]
    }

    fn validate_current_step(&mut self) -> bool {
        let checks: Vec<(String, Result<(), String>)> = self
            .current_spec()
            .fields
            .iter()
            .map(|spec| (spec.name.to_string(), spec.check(self.value(spec.name))))
            .collect();

        let mut valid = true;
        for (field, result) in checks {
            match result {
                Ok(()) => {
                    self.errors.remove(&field);
                }
                Err(message) => {
                    valid = false;
                    self.errors.insert(field, message);
                }
            }
        }
        valid
    }

    fn merge_current_step(&mut self) {
        let values: Vec<(&'static str, String)> = self
            .current_spec()
            .fields
            .iter()
            .filter(|spec| spec.name != HONEYPOT_FIELD)
            .filter(|spec| spec.kind != FieldKind::Choice || !self.value(spec.name).is_empty())
            .map(|spec| (spec.name, self.value(spec.name).to_string()))
            .collect();

        for (field, value) in values {
            self.draft.insert(field, value);
        }
    }

    fn first_unsatisfied_step(&self) -> usize {
        self.steps
            .iter()
            .position(|step| {
                step.fields
                    .iter()
                    .any(|spec| spec.check(self.draft.get(spec.name).unwrap_or("")).is_err())
            })
            .map(|index| index + 1)
            .unwrap_or(self.steps.len())
    }

    fn persist(&self, store: &dyn KeyStore) {
        if let Err(err) = self.draft.save(store) {
            warn!("Failed to save quote draft: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::storage::memory::MemoryKey;
    use crate::forms::transport::SubmitError;
    use crate::quote::steps::quote_steps;
    use pretty_assertions::assert_eq;

    fn wizard() -> QuoteWizard {
        QuoteWizard::new(quote_steps())
    }

    fn fill_to_last_step(wizard: &mut QuoteWizard, store: &MemoryKey) {
        wizard.set_field("category", "wedding", store);
        assert_eq!(wizard.advance(store), Advance::Moved(2));
        wizard.set_field("quantity", "10", store);
        wizard.set_field("details", "gold foil", store);
        assert_eq!(wizard.advance(store), Advance::Moved(3));
        wizard.set_field("name", "Ada", store);
        wizard.set_field("email", "ada@example.com", store);
    }

    #[test]
    fn empty_required_fields_block_advance_and_are_all_flagged() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        wizard.set_field("category", "business", &store);
        wizard.advance(&store);

        assert_eq!(wizard.advance(&store), Advance::Invalid);
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.error("quantity"), Some("This field is required"));

        wizard.set_field("quantity", "5", &store);
        wizard.advance(&store);
        assert_eq!(wizard.advance(&store), Advance::AtLastStep);
        assert_eq!(wizard.begin_submit(&store), SubmitGate::Invalid);
        assert_eq!(wizard.error("name"), Some("This field is required"));
        assert_eq!(wizard.error("email"), Some("This field is required"));
        assert_eq!(wizard.error("phone"), None);
    }

    #[test]
    fn missing_category_is_reported_inline() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        assert_eq!(wizard.advance(&store), Advance::Invalid);
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.error("category"), Some("Please select a category"));
        assert_eq!(store.get(), None);
    }

    #[test]
    fn passing_validation_clears_the_flag() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        wizard.advance(&store);
        assert!(wizard.error("category").is_some());
        wizard.set_field("category", "packaging", &store);
        assert_eq!(wizard.advance(&store), Advance::Moved(2));
        assert_eq!(wizard.error("category"), None);
    }

    #[test]
    fn bad_email_blocks_submission() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        fill_to_last_step(&mut wizard, &store);
        wizard.set_field("email", "ada@example", &store);
        assert_eq!(wizard.begin_submit(&store), SubmitGate::Invalid);
        assert_eq!(wizard.error("email"), Some("Please enter a valid email"));
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn advance_persists_the_draft_and_category_change_saves_immediately() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        wizard.set_field("category", "merchandise", &store);
        assert_eq!(store.get().as_deref(), Some(r#"{"category":"merchandise"}"#));

        wizard.advance(&store);
        wizard.set_field("quantity", "3", &store);
        wizard.advance(&store);
        let saved = Draft::load(&store).unwrap().unwrap();
        assert_eq!(saved.get("quantity"), Some("3"));
        assert_eq!(saved.get("details"), Some(""));
        assert_eq!(saved.get("size"), None);
    }

    #[test]
    fn retreat_leaves_draft_alone_and_skips_validation() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        fill_to_last_step(&mut wizard, &store);
        wizard.set_field("email", "not an email", &store);
        let before = wizard.draft().clone();
        let writes = *store.writes.borrow();

        assert!(wizard.retreat());
        assert_eq!(wizard.current_step(), 2);
        assert!(wizard.retreat());
        assert!(!wizard.retreat());
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.draft(), &before);
        assert_eq!(wizard.error("email"), None);
        assert_eq!(*store.writes.borrow(), writes);
    }

    #[test]
    fn progress_marks_completed_active_pending() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        wizard.set_field("category", "business", &store);
        wizard.advance(&store);
        assert_eq!(wizard.progress(1), StepState::Completed);
        assert_eq!(wizard.progress(2), StepState::Active);
        assert_eq!(wizard.progress(3), StepState::Pending);
    }

    #[test]
    fn estimate_follows_controls() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        assert_eq!(wizard.estimate(), Estimate::Pending);
        wizard.set_field("category", "wedding", &store);
        wizard.set_field("quantity", "10", &store);
        assert_eq!(wizard.estimate(), Estimate::Range { min: 200, max: 500 });
    }

    #[test]
    fn restore_repopulates_controls_from_saved_draft() {
        let store = MemoryKey::default();
        let mut first = wizard();
        fill_to_last_step(&mut first, &store);

        let restored = QuoteWizard::restore(quote_steps(), &store, ResumePolicy::FirstStep);
        assert_eq!(restored.current_step(), 1);
        assert_eq!(restored.draft(), first.draft());
        for (field, value) in first.draft().iter() {
            assert_eq!(restored.value(field), value);
        }
        assert_eq!(restored.estimate(), Estimate::Range { min: 200, max: 500 });
    }

    #[test]
    fn restore_ignores_unknown_fields_and_corrupt_drafts() {
        let store = MemoryKey::with(r#"{"category":"business","legacy":"x"}"#);
        let restored = QuoteWizard::restore(quote_steps(), &store, ResumePolicy::FirstStep);
        assert_eq!(restored.value("category"), "business");
        assert_eq!(restored.value("legacy"), "");

        let corrupt = MemoryKey::with("{not json");
        let fresh = QuoteWizard::restore(quote_steps(), &corrupt, ResumePolicy::FirstStep);
        assert!(fresh.draft().is_empty());
        assert_eq!(fresh.current_step(), 1);
    }

    #[test]
    fn restore_leaves_choices_unset_when_saved_value_matches_no_option() {
        let store = MemoryKey::with(r#"{"category":"stickers","size":"Huge","paper":"Gloss"}"#);
        let mut restored = QuoteWizard::restore(quote_steps(), &store, ResumePolicy::FirstStep);
        assert_eq!(restored.value("category"), "");
        assert_eq!(restored.value("size"), "");
        assert_eq!(restored.value("paper"), "Gloss");
        assert_eq!(restored.draft().get("category"), None);
        assert_eq!(restored.estimate(), Estimate::Pending);

        assert_eq!(restored.advance(&store), Advance::Invalid);
        assert_eq!(restored.current_step(), 1);
        assert_eq!(restored.error("category"), Some("Please select a category"));

        let furthest = QuoteWizard::restore(quote_steps(), &store, ResumePolicy::FurthestStep);
        assert_eq!(furthest.current_step(), 1);
    }

    #[test]
    fn furthest_step_policy_resumes_where_draft_stops() {
        let store = MemoryKey::with(r#"{"category":"business"}"#);
        let restored = QuoteWizard::restore(quote_steps(), &store, ResumePolicy::FurthestStep);
        assert_eq!(restored.current_step(), 2);

        let complete = MemoryKey::with(
            r#"{"category":"business","quantity":"4","name":"Bo","email":"bo@example.com"}"#,
        );
        let restored = QuoteWizard::restore(quote_steps(), &complete, ResumePolicy::FurthestStep);
        assert_eq!(restored.current_step(), 3);
    }

    #[test]
    fn successful_submission_resets_everything() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        fill_to_last_step(&mut wizard, &store);

        let SubmitGate::Ready(submission) = wizard.begin_submit(&store) else {
            panic!("expected a ready submission");
        };
        assert_eq!(submission.form, "quote");
        assert_eq!(submission.fields.get("email").map(String::as_str), Some("ada@example.com"));
        assert!(!submission.fields.contains_key("website"));
        assert!(wizard.is_submitting());
        assert_eq!(wizard.begin_submit(&store), SubmitGate::InFlight);

        wizard.finish_submit(Ok(()), &store);
        assert_eq!(store.get(), None);
        assert_eq!(wizard.current_step(), 1);
        assert!(!wizard.is_submitting());
        for field in ["category", "quantity", "details", "name", "email"] {
            assert_eq!(wizard.value(field), "");
        }
        assert_eq!(wizard.status(), Some(&FormStatus::success(SUBMITTED_MESSAGE)));
    }

    #[test]
    fn failed_submission_keeps_the_draft() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        fill_to_last_step(&mut wizard, &store);
        assert!(matches!(wizard.begin_submit(&store), SubmitGate::Ready(_)));

        wizard.finish_submit(Err(SubmitError::Encode("unsupported value".into())), &store);
        assert_eq!(wizard.current_step(), 3);
        assert_eq!(wizard.value("name"), "Ada");
        assert!(store.get().is_some());
        assert_eq!(wizard.status(), Some(&FormStatus::error(FAILED_MESSAGE)));
    }

    #[test]
    fn honeypot_blocks_advance_and_submit_without_side_effects() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        fill_to_last_step(&mut wizard, &store);
        let saved = store.get();
        let writes = *store.writes.borrow();

        wizard.set_field("website", "http://bot.example", &store);
        assert_eq!(wizard.begin_submit(&store), SubmitGate::Discarded);
        assert_eq!(wizard.status(), None);
        assert!(!wizard.is_submitting());
        assert_eq!(store.get(), saved);
        assert_eq!(*store.writes.borrow(), writes);

        wizard.retreat();
        assert_eq!(wizard.advance(&store), Advance::Discarded);
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(*store.writes.borrow(), writes);
    }

    #[test]
    fn submit_is_only_reachable_from_the_last_step() {
        let store = MemoryKey::default();
        let mut wizard = wizard();
        wizard.set_field("category", "business", &store);
        assert_eq!(wizard.begin_submit(&store), SubmitGate::NotReady);
    }

    #[test]
    fn instances_are_independent() {
        let store_a = MemoryKey::default();
        let store_b = MemoryKey::default();
        let mut a = wizard();
        let b = wizard();
        a.set_field("category", "wedding", &store_a);
        a.advance(&store_a);
        assert_eq!(a.current_step(), 2);
        assert_eq!(b.current_step(), 1);
        assert_eq!(b.value("category"), "");
        assert_eq!(store_b.get(), None);
    }
}
