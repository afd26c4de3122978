use std::future::Future;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    Name,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Name, FormField::Email, FormField::Message];

    pub fn as_str(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Message => "message",
        }
    }
}

impl FromStr for FormField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(FormField::Name),
            "email" => Ok(FormField::Email),
            "message" => Ok(FormField::Message),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }
}

/// Template parameters in the shape the email service expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailParams {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

impl EmailParams {
    /// First field left blank, whitespace-only counts as blank.
    pub fn missing_field(&self) -> Option<FormField> {
        [
            (FormField::Name, &self.from_name),
            (FormField::Email, &self.from_email),
            (FormField::Message, &self.message),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

impl From<&FormState> for EmailParams {
    fn from(form: &FormState) -> Self {
        Self {
            from_name: form.name.clone(),
            from_email: form.email.clone(),
            message: form.message.clone(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryError {
    #[error("Field '{}' is required", .0.as_str())]
    Incomplete(FormField),
    #[error("Email delivery is not configured")]
    NotConfigured,
    #[error("Couldn't reach the email service: {0}")]
    Transport(String),
    #[error("Email service rejected the message (status {status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Server error: {0}")]
    Server(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Please fill in the {} field", .0.as_str())]
    MissingField(FormField),
    #[error("A message is already being sent")]
    InFlight,
}

/// Sends the contents of the contact form somewhere a human will read them.
pub trait Delivery {
    fn deliver(&self, params: EmailParams) -> impl Future<Output = Result<(), DeliveryError>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AckIcon {
    Success,
    Error,
}

impl AckIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            AckIcon::Success => "✔",
            AckIcon::Error => "✖",
        }
    }
}

/// A transient message telling the visitor what happened to their submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub icon: AckIcon,
    pub title: String,
    pub text: String,
}

impl Acknowledgment {
    pub fn success() -> Self {
        Self {
            icon: AckIcon::Success,
            title: "Sent 🎉".to_string(),
            text: "Message delivered successfully!".to_string(),
        }
    }

    pub fn failure() -> Self {
        Self {
            icon: AckIcon::Error,
            title: "Not sent".to_string(),
            text: "Your message couldn't be delivered. Please try again.".to_string(),
        }
    }
}

/// Shows an [`Acknowledgment`] to the visitor. Fire and forget.
pub trait Notifier {
    fn notify(&self, ack: Acknowledgment);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Failed(DeliveryError),
}

/// Owns the contact form fields and their submission lifecycle.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    state: FormState,
    phase: FormPhase,
    rejected: Option<SubmitError>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn value(&self, field: FormField) -> &str {
        self.state.get(field)
    }

    /// Why the last submit attempt never left the form, if it still applies.
    pub fn rejection(&self) -> Option<&SubmitError> {
        self.rejected.as_ref()
    }

    /// Inline message shown under the form: a blocked submit takes
    /// precedence over a failed delivery.
    pub fn notice(&self) -> Option<String> {
        match (&self.rejected, &self.phase) {
            (Some(rejected), _) => Some(rejected.to_string()),
            (None, FormPhase::Failed(_)) => {
                Some("Your message is still here. Check it and send again.".to_string())
            }
            _ => None,
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Mirrors an input control into the form. Ignored while a send is in
    /// flight; editing after a failure returns the form to `Editing`.
    pub fn field_changed(&mut self, field: FormField, value: impl Into<String>) -> bool {
        if self.is_submitting() {
            return false;
        }
        *self.state.slot(field) = value.into();
        self.phase = FormPhase::Editing;
        if self.rejected == Some(SubmitError::MissingField(field)) {
            self.rejected = None;
        }
        true
    }

    pub fn begin_submit(&mut self) -> Result<EmailParams, SubmitError> {
        if self.is_submitting() {
            return Err(SubmitError::InFlight);
        }
        let params = EmailParams::from(&self.state);
        if let Some(field) = params.missing_field() {
            let err = SubmitError::MissingField(field);
            self.rejected = Some(err.clone());
            return Err(err);
        }
        self.rejected = None;
        self.phase = FormPhase::Submitting;
        Ok(params)
    }

    pub fn finish_submit(&mut self, outcome: Result<(), DeliveryError>) -> Acknowledgment {
        match outcome {
            Ok(()) => {
                self.state = FormState::default();
                self.phase = FormPhase::Editing;
                Acknowledgment::success()
            }
            Err(e) => {
                log::warn!("contact form delivery failed: {e}");
                self.phase = FormPhase::Failed(e);
                Acknowledgment::failure()
            }
        }
    }

    pub async fn submit<D, N>(&mut self, delivery: &D, notifier: &N) -> Result<(), SubmitError>
    where
        D: Delivery,
        N: Notifier,
    {
        let params = self.begin_submit()?;
        let outcome = delivery.deliver(params).await;
        notifier.notify(self.finish_submit(outcome));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeDelivery {
        outcome: Result<(), DeliveryError>,
        sent: RefCell<Vec<EmailParams>>,
    }

    impl FakeDelivery {
        fn accepting() -> Self {
            Self {
                outcome: Ok(()),
                sent: RefCell::new(Vec::new()),
            }
        }

        fn rejecting(err: DeliveryError) -> Self {
            Self {
                outcome: Err(err),
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Delivery for FakeDelivery {
        fn deliver(&self, params: EmailParams) -> impl Future<Output = Result<(), DeliveryError>> {
            self.sent.borrow_mut().push(params);
            let outcome = self.outcome.clone();
            async move { outcome }
        }
    }

    #[derive(Default)]
    struct RecordingNotifier(RefCell<Vec<Acknowledgment>>);

    impl Notifier for RecordingNotifier {
        fn notify(&self, ack: Acknowledgment) {
            self.0.borrow_mut().push(ack);
        }
    }

    fn filled(name: &str, email: &str, message: &str) -> ContactForm {
        let mut form = ContactForm::new();
        form.field_changed(FormField::Name, name);
        form.field_changed(FormField::Email, email);
        form.field_changed(FormField::Message, message);
        form
    }

    #[test]
    fn test_field_changes_mirror_last_value() {
        let mut form = ContactForm::new();
        let edits = [
            (FormField::Name, "A"),
            (FormField::Name, "Ad"),
            (FormField::Email, "ada@"),
            (FormField::Name, "Ada"),
            (FormField::Message, "H"),
            (FormField::Email, "ada@example.com"),
            (FormField::Message, "Hi"),
        ];
        for (field, value) in edits {
            assert!(form.field_changed(field, value));
            assert_eq!(form.value(field), value);
        }
        assert_eq!(
            form.state(),
            &FormState {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
                message: "Hi".to_string(),
            }
        );
    }

    #[test]
    fn test_field_names_parse() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
        assert!("phone".parse::<FormField>().is_err());
    }

    #[tokio::test]
    async fn test_successful_submit() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        let delivery = FakeDelivery::accepting();
        let notifier = RecordingNotifier::default();

        form.submit(&delivery, &notifier).await.unwrap();

        assert_eq!(
            *delivery.sent.borrow(),
            vec![EmailParams {
                from_name: "Ada".to_string(),
                from_email: "ada@example.com".to_string(),
                message: "Hi".to_string(),
            }]
        );
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(*notifier.0.borrow(), vec![Acknowledgment::success()]);
    }

    #[tokio::test]
    async fn test_missing_field_blocks_delivery() {
        let mut form = filled("Ada", "", "Hi");
        let delivery = FakeDelivery::accepting();
        let notifier = RecordingNotifier::default();

        let res = form.submit(&delivery, &notifier).await;

        assert_eq!(res, Err(SubmitError::MissingField(FormField::Email)));
        assert!(delivery.sent.borrow().is_empty());
        assert!(notifier.0.borrow().is_empty());
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Email), "");
        assert_eq!(form.value(FormField::Message), "Hi");
        assert_eq!(form.phase(), &FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_blank_field_blocks_delivery() {
        for form in [
            filled("", "ada@example.com", "Hi"),
            filled("Ada", "ada@example.com", "   "),
            ContactForm::new(),
        ] {
            let mut form = form;
            let delivery = FakeDelivery::accepting();
            let notifier = RecordingNotifier::default();
            assert!(matches!(
                form.submit(&delivery, &notifier).await,
                Err(SubmitError::MissingField(_))
            ));
            assert!(delivery.sent.borrow().is_empty());
        }
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_fields() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        let delivery = FakeDelivery::rejecting(DeliveryError::Rejected {
            status: 400,
            body: "The service ID is invalid".to_string(),
        });
        let notifier = RecordingNotifier::default();

        form.submit(&delivery, &notifier).await.unwrap();

        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.value(FormField::Email), "ada@example.com");
        assert_eq!(form.value(FormField::Message), "Hi");
        assert!(matches!(
            form.phase(),
            FormPhase::Failed(DeliveryError::Rejected { status: 400, .. })
        ));
        let acks = notifier.0.borrow();
        assert_eq!(*acks, vec![Acknowledgment::failure()]);
        assert_eq!(acks[0].icon, AckIcon::Error);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        let notifier = RecordingNotifier::default();
        form.submit(&FakeDelivery::rejecting(DeliveryError::NotConfigured), &notifier)
            .await
            .unwrap();

        let delivery = FakeDelivery::accepting();
        form.submit(&delivery, &notifier).await.unwrap();

        assert_eq!(delivery.sent.borrow().len(), 1);
        assert_eq!(form.state(), &FormState::default());
        assert_eq!(notifier.0.borrow().last(), Some(&Acknowledgment::success()));
    }

    #[test]
    fn test_blank_field_is_reported_until_edited() {
        let mut form = filled("   ", "ada@example.com", "Hi");
        assert_eq!(form.rejection(), None);

        assert_eq!(
            form.begin_submit(),
            Err(SubmitError::MissingField(FormField::Name))
        );
        assert_eq!(
            form.rejection().map(|e| e.to_string()),
            Some("Please fill in the name field".to_string())
        );
        assert_eq!(form.phase(), &FormPhase::Editing);

        // editing another field keeps the notice
        form.field_changed(FormField::Message, "Hello");
        assert!(form.rejection().is_some());

        form.field_changed(FormField::Name, "Ada");
        assert_eq!(form.rejection(), None);
        assert!(form.begin_submit().is_ok());
        assert_eq!(form.rejection(), None);
    }

    #[tokio::test]
    async fn test_notice_shows_blank_field_before_failure() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        assert_eq!(form.notice(), None);

        let notifier = RecordingNotifier::default();
        let delivery = FakeDelivery::rejecting(DeliveryError::Transport("timed out".to_string()));
        form.submit(&delivery, &notifier).await.unwrap();
        assert_eq!(
            form.notice().as_deref(),
            Some("Your message is still here. Check it and send again.")
        );

        form.field_changed(FormField::Email, "\n ");
        assert!(form.submit(&FakeDelivery::accepting(), &notifier).await.is_err());
        assert_eq!(
            form.notice().as_deref(),
            Some("Please fill in the email field")
        );
        assert_eq!(notifier.0.borrow().len(), 1);

        form.field_changed(FormField::Email, "ada@example.com");
        assert_eq!(form.notice(), None);
    }

    #[test]
    fn test_missing_field_on_params() {
        let params = EmailParams {
            from_name: "Ada".to_string(),
            from_email: " \t".to_string(),
            message: String::new(),
        };
        assert_eq!(params.missing_field(), Some(FormField::Email));
    }

    #[test]
    fn test_edit_after_failure_returns_to_editing() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        form.begin_submit().unwrap();
        form.finish_submit(Err(DeliveryError::Transport("timed out".to_string())));
        assert!(matches!(form.phase(), FormPhase::Failed(_)));

        assert!(form.field_changed(FormField::Message, "Hello"));
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.value(FormField::Message), "Hello");
    }

    #[test]
    fn test_submitting_rejects_edits_and_resubmits() {
        let mut form = filled("Ada", "ada@example.com", "Hi");
        let params = form.begin_submit().unwrap();
        assert_eq!(params.from_name, "Ada");
        assert!(form.is_submitting());

        assert!(!form.field_changed(FormField::Name, "Grace"));
        assert_eq!(form.value(FormField::Name), "Ada");
        assert_eq!(form.begin_submit(), Err(SubmitError::InFlight));

        let ack = form.finish_submit(Ok(()));
        assert_eq!(ack, Acknowledgment::success());
        assert!(!form.is_submitting());
    }

    #[test]
    fn test_email_params_serialize_with_service_names() {
        let params = EmailParams::from(&FormState {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        });
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from_name": "Ada",
                "from_email": "ada@example.com",
                "message": "Hi",
            })
        );
    }
}
