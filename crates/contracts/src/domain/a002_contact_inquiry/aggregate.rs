use serde::{Deserialize, Serialize};

use super::errors::{SubmitError, SubmitRejected};
use crate::enums::ProjectType;

/// Name of the hidden subject field understood by the form endpoint
pub const SUBJECT_FIELD: &str = "_subject";
/// Name of the hidden anti-spam field; legitimate users leave it empty
pub const HONEYPOT_FIELD: &str = "_gotcha";

// ============================================================================
// Fields
// ============================================================================

/// User-editable contents of the contact form
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub project: ProjectType,
    pub message: String,
    /// Bound to an invisible input
    #[serde(rename = "_gotcha")]
    pub honeypot: String,
}

impl ContactFields {
    pub fn new(default_project: ProjectType) -> Self {
        Self {
            project: default_project,
            ..Default::default()
        }
    }

    /// Names of required fields that are still blank
    pub fn missing_required(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }
}

/// Serialized form body, in the order the fields are posted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InquiryPayload {
    pub fields: Vec<(&'static str, String)>,
}

impl InquiryPayload {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

// ============================================================================
// State machine
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// Contact form with its submission lifecycle:
/// `Idle -> Submitting -> Succeeded`, and `Submitting -> Idle` on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub fields: ContactFields,
    state: SubmissionState,
    last_error: Option<String>,
    subject: String,
    default_project: ProjectType,
}

impl ContactForm {
    pub fn new(subject: impl Into<String>, default_project: ProjectType) -> Self {
        Self {
            fields: ContactFields::new(default_project),
            state: SubmissionState::Idle,
            last_error: None,
            subject: subject.into(),
            default_project,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    /// Diagnostic text of the last failed attempt, cleared by the next attempt
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Enter `Submitting` and produce the request body.
    ///
    /// Required fields are checked by the input layer, not here.
    pub fn begin_submit(&mut self) -> Result<InquiryPayload, SubmitRejected> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitRejected::AlreadySubmitting),
            SubmissionState::Succeeded => return Err(SubmitRejected::NotIdle),
            SubmissionState::Idle => {}
        }
        if !self.fields.honeypot.is_empty() {
            return Err(SubmitRejected::HoneypotFilled);
        }

        self.last_error = None;
        self.state = SubmissionState::Submitting;

        Ok(InquiryPayload {
            fields: vec![
                ("name", self.fields.name.clone()),
                ("email", self.fields.email.clone()),
                ("message", self.fields.message.clone()),
                ("project", self.fields.project.code().to_string()),
                (SUBJECT_FIELD, self.subject.clone()),
                (HONEYPOT_FIELD, self.fields.honeypot.clone()),
            ],
        })
    }

    /// Apply the outcome of the request started by `begin_submit`.
    /// Ignored unless a submission is in flight.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        if self.state != SubmissionState::Submitting {
            return;
        }
        match outcome {
            Ok(()) => self.state = SubmissionState::Succeeded,
            Err(err) => {
                self.last_error = Some(err.to_string());
                self.state = SubmissionState::Idle;
            }
        }
    }

    /// "Send another": clear the fields and return to `Idle`
    pub fn acknowledge(&mut self) {
        if self.state != SubmissionState::Succeeded {
            return;
        }
        self.fields = ContactFields::new(self.default_project);
        self.state = SubmissionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Category;

    const SUBJECT: &str = "New Project Inquiry from Justudio Website";

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::new(SUBJECT, ProjectType::default());
        form.fields.name = "Aina".to_string();
        form.fields.email = "aina@example.com".to_string();
        form.fields.message = "Need a menu for my cafe".to_string();
        form.fields.project = ProjectType::Design(Category::Menu);
        form
    }

    #[test]
    fn test_success_flow_clears_only_after_acknowledge() {
        let mut form = filled_form();
        assert_eq!(form.state(), SubmissionState::Idle);

        let payload = form.begin_submit().unwrap();
        assert_eq!(form.state(), SubmissionState::Submitting);
        assert_eq!(payload.get("name"), Some("Aina"));
        assert_eq!(payload.get("project"), Some("menu"));
        assert_eq!(payload.get(SUBJECT_FIELD), Some(SUBJECT));
        assert_eq!(payload.get(HONEYPOT_FIELD), Some(""));

        form.complete(Ok(()));
        assert_eq!(form.state(), SubmissionState::Succeeded);
        assert_eq!(form.fields.name, "Aina");

        form.acknowledge();
        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields, ContactFields::new(ProjectType::default()));
    }

    #[test]
    fn test_failure_returns_to_idle_with_fields_intact() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete(Err(SubmitError::Status {
            status: 422,
            message: "email invalid".to_string(),
        }));

        assert_eq!(form.state(), SubmissionState::Idle);
        assert_eq!(form.fields.email, "aina@example.com");
        assert_eq!(form.last_error(), Some("endpoint answered 422: email invalid"));

        // next attempt clears the diagnostic
        form.begin_submit().unwrap();
        assert_eq!(form.last_error(), None);
    }

    #[test]
    fn test_second_submit_while_in_flight_is_rejected() {
        let mut form = filled_form();
        let mut issued = 0;
        for _ in 0..2 {
            if form.begin_submit().is_ok() {
                issued += 1;
            }
        }
        assert_eq!(issued, 1);
        assert_eq!(form.begin_submit(), Err(SubmitRejected::AlreadySubmitting));
    }

    #[test]
    fn test_submit_after_success_requires_acknowledge() {
        let mut form = filled_form();
        form.begin_submit().unwrap();
        form.complete(Ok(()));
        assert_eq!(form.begin_submit(), Err(SubmitRejected::NotIdle));
    }

    #[test]
    fn test_honeypot_blocks_request() {
        let mut form = filled_form();
        form.fields.honeypot = "http://spam.example".to_string();
        assert_eq!(form.begin_submit(), Err(SubmitRejected::HoneypotFilled));
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_complete_without_flight_is_ignored() {
        let mut form = filled_form();
        form.complete(Ok(()));
        assert_eq!(form.state(), SubmissionState::Idle);
        form.acknowledge();
        assert_eq!(form.fields.name, "Aina");
    }

    #[test]
    fn test_missing_required() {
        let mut fields = ContactFields::new(ProjectType::Other);
        assert_eq!(fields.missing_required(), vec!["name", "email", "message"]);
        fields.name = "Aina".to_string();
        fields.message = "  ".to_string();
        assert_eq!(fields.missing_required(), vec!["email", "message"]);
    }
}
