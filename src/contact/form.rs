use crate::constants::{SUBMIT_FAILURE_TEXT, SUBMIT_SUCCESS_MARKER};
use crate::contact::validation::{validate, ContactSubmission, Field, ValidationErrors};
use crate::error::SubmitError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    /// The kind is read off the text itself.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let kind = if text.contains(SUBMIT_SUCCESS_MARKER) {
            BannerKind::Success
        } else {
            BannerKind::Failure
        };
        Self { kind, text }
    }
}

/// Local state of the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub values: ContactSubmission,
    pub errors: ValidationErrors,
    pub submitting: bool,
    pub banner: Option<Banner>,
}

impl ContactForm {
    /// Field edit: stores the value and clears only that field's error.
    pub fn edit(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.clear(field);
    }

    /// Validates and, when clean, enters the submitting state and returns
    /// the payload to send. Returns `None` (errors populated) otherwise.
    pub fn begin_submit(&mut self) -> Option<ContactSubmission> {
        if self.submitting {
            return None;
        }
        self.errors = validate(&self.values);
        if !self.errors.is_empty() {
            return None;
        }
        self.submitting = true;
        self.banner = None;
        Some(self.values.clone())
    }

    pub fn finish(&mut self, result: Result<String, SubmitError>) {
        self.submitting = false;
        self.banner = Some(match result {
            Ok(text) => {
                self.values = ContactSubmission::default();
                Banner::from_text(text)
            }
            Err(_) => Banner::from_text(SUBMIT_FAILURE_TEXT),
        });
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Envoi en cours..."
        } else {
            "Envoyer le message"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SUBMIT_SUCCESS_TEXT;
    use crate::contact::submit::ContactSubmitter;
    use async_trait::async_trait;

    struct ImmediateSubmitter(Result<String, SubmitError>);

    #[async_trait(?Send)]
    impl ContactSubmitter for ImmediateSubmitter {
        async fn submit(&self, _submission: &ContactSubmission) -> Result<String, SubmitError> {
            self.0.clone()
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::FullName, "Jean Gagnon".to_string());
        form.edit(Field::Email, "jean@gagnon.ca".to_string());
        form.edit(Field::Phone, "438-555-0101".to_string());
        form.edit(Field::Message, "Besoin d'un audit de trésorerie.".to_string());
        form
    }

    fn run(form: &mut ContactForm, submitter: &dyn ContactSubmitter) {
        if let Some(payload) = form.begin_submit() {
            let result = futures::executor::block_on(submitter.submit(&payload));
            form.finish(result);
        }
    }

    #[test]
    fn test_invalid_submit_does_not_send() {
        let mut form = ContactForm::default();
        assert!(form.begin_submit().is_none());
        assert!(!form.submitting);
        assert_eq!(form.errors.len(), 4);
        assert!(form.banner.is_none());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let mut form = ContactForm::default();
        form.begin_submit();
        form.edit(Field::Email, "x".to_string());
        assert!(!form.errors.contains(Field::Email));
        assert!(form.errors.contains(Field::FullName));
        assert!(form.errors.contains(Field::Phone));
        assert!(form.errors.contains(Field::Message));
    }

    #[test]
    fn test_successful_submit_clears_fields() {
        let mut form = filled();
        let payload = form.begin_submit().expect("valid form");
        assert!(form.submitting);
        assert_eq!(form.submit_label(), "Envoi en cours...");
        assert_eq!(payload.full_name, "Jean Gagnon");

        form.finish(Ok(SUBMIT_SUCCESS_TEXT.to_string()));
        assert!(!form.submitting);
        assert_eq!(form.values, ContactSubmission::default());
        assert_eq!(form.banner.as_ref().map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_failed_submit_shows_failure_banner() {
        let mut form = filled();
        run(&mut form, &ImmediateSubmitter(Err(SubmitError::Status(500))));
        let banner = form.banner.clone().expect("banner");
        assert_eq!(banner.kind, BannerKind::Failure);
        assert_eq!(banner.text, SUBMIT_FAILURE_TEXT);
        // Fields are kept so the visitor can retry
        assert_eq!(form.values.full_name, "Jean Gagnon");
    }

    #[test]
    fn test_banner_kind_follows_text() {
        let mut form = filled();
        run(&mut form, &ImmediateSubmitter(Ok("Reçu, merci".to_string())));
        assert_eq!(form.banner.map(|b| b.kind), Some(BannerKind::Failure));

        let mut form = filled();
        run(&mut form, &ImmediateSubmitter(Ok(SUBMIT_SUCCESS_TEXT.to_string())));
        assert_eq!(form.banner.map(|b| b.kind), Some(BannerKind::Success));
    }

    #[test]
    fn test_double_submit_is_ignored() {
        let mut form = filled();
        assert!(form.begin_submit().is_some());
        assert!(form.begin_submit().is_none());
    }
}
