use crate::{Field, FieldError, SubmitError, Submission};

/// What the UI should show for one field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldStatus {
    /// Not blurred yet (and no submit attempted): never styled as an error.
    #[default]
    Pristine,
    Valid,
    Invalid,
    /// An advisory field failed its check; submission is still allowed.
    Warning,
}

impl FieldStatus {
    pub fn is_problem(self) -> bool {
        matches!(self, Self::Invalid | Self::Warning)
    }

    /// Label text color for the field.
    pub fn label_color(self) -> &'static str {
        match self {
            Self::Pristine | Self::Valid => "#d1d5dc",
            Self::Invalid => "#fb2c36",
            Self::Warning => "#fd9a00",
        }
    }
}

/// Variant of the shared "Contact Information" label above the email and phone inputs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ContactLabel {
    #[default]
    Neutral,
    /// Email is invalid.
    Error,
    /// Phone looks wrong.
    Warning,
    /// Both.
    Mixed,
}

impl ContactLabel {
    pub fn css_gradient(self) -> &'static str {
        match self {
            Self::Neutral => "linear-gradient(to right, #d1d5dc, #d1d5dc, #d1d5dc)",
            Self::Error => "linear-gradient(to right, #fb2c36, #fb2c36, #fb2c36)",
            Self::Warning => "linear-gradient(to right, #fd9a00, #fd9a00, #fd9a00)",
            Self::Mixed => "linear-gradient(to right, #fb2c36, #fd9a00, #fd9a00)",
        }
    }
}

/// How the sender would like to be reached back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PreferredContact {
    #[default]
    Email,
    Phone,
}

impl PreferredContact {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

/// Value and touched flag of one input.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
}

/// Contact form state: field values, touched flags, preferred contact and the honeypot.
///
/// Validity is recomputed from the current values on every query. A field's problems are only
/// surfaced once the field is touched, either by blurring it or by a submit attempt.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContactForm {
    name: FieldState,
    pronouns: FieldState,
    email: FieldState,
    phone: FieldState,
    message: FieldState,
    preferred_contact: PreferredContact,
    honeypot: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::Name => &self.name,
            Field::Pronouns => &self.pronouns,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::Message => &self.message,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Name => &mut self.name,
            Field::Pronouns => &mut self.pronouns,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::Message => &mut self.message,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        &self.field(field).value
    }

    /// Replaces a field's value (an input event). Does not touch the field.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        ftrace!(field = field.key(), len = value.len(), "ContactForm::set");
        self.field_mut(field).value = value;
    }

    /// Marks a field touched (a blur event).
    pub fn blur(&mut self, field: Field) {
        let state = self.field_mut(field);
        if !state.touched {
            ftrace!(field = field.key(), "ContactForm: field touched");
        }
        state.touched = true;
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.field(field).touched
    }

    pub fn error(&self, field: Field) -> Option<FieldError> {
        field.validate(self.value(field)).err()
    }

    pub fn is_valid(&self, field: Field) -> bool {
        self.error(field).is_none()
    }

    pub fn status(&self, field: Field) -> FieldStatus {
        if !self.is_touched(field) {
            return FieldStatus::Pristine;
        }
        match self.error(field) {
            None => FieldStatus::Valid,
            Some(_) if field.is_advisory() => FieldStatus::Warning,
            Some(_) => FieldStatus::Invalid,
        }
    }

    /// Errors on the required fields, in form order, whether touched or not.
    pub fn blocking_errors(&self) -> Vec<FieldError> {
        Field::REQUIRED
            .into_iter()
            .filter_map(|field| self.error(field))
            .collect()
    }

    /// Whether the submit button is enabled. A suspicious phone number never blocks.
    pub fn can_submit(&self) -> bool {
        Field::REQUIRED.into_iter().all(|field| self.is_valid(field))
    }

    pub fn contact_label(&self) -> ContactLabel {
        let email = self.status(Field::Email).is_problem();
        let phone = self.status(Field::Phone).is_problem();
        match (email, phone) {
            (true, true) => ContactLabel::Mixed,
            (true, false) => ContactLabel::Error,
            (false, true) => ContactLabel::Warning,
            (false, false) => ContactLabel::Neutral,
        }
    }

    /// The preferred-contact choice is only offered when both email and phone are filled in.
    pub fn offers_preferred_contact(&self) -> bool {
        !self.email.value.is_empty() && !self.phone.value.is_empty()
    }

    /// The effective choice, or `None` while the choice is not offered.
    pub fn preferred_contact(&self) -> Option<PreferredContact> {
        self.offers_preferred_contact()
            .then_some(self.preferred_contact)
    }

    /// Records the choice. It is kept while hidden and reappears with the control.
    pub fn set_preferred_contact(&mut self, preferred: PreferredContact) {
        self.preferred_contact = preferred;
    }

    /// The hidden anti-spam input. Humans never fill it in.
    pub fn set_honeypot(&mut self, value: impl Into<String>) {
        self.honeypot = value.into();
    }

    /// Handles a click on the submit button.
    ///
    /// Marks every required field touched so its problems become visible, then builds the
    /// relay payload if the form may be sent.
    pub fn attempt_submit(&mut self) -> Result<Submission, SubmitError> {
        for field in Field::REQUIRED {
            self.blur(field);
        }
        let errors = self.blocking_errors();
        if !errors.is_empty() {
            fdebug!(errors = errors.len(), "ContactForm: submit blocked");
            return Err(SubmitError::Invalid(errors));
        }
        if !self.honeypot.is_empty() {
            fwarn!("ContactForm: honeypot filled, submission dropped");
            return Err(SubmitError::Honeypot);
        }
        fdebug!(
            phone_warning = !self.is_valid(Field::Phone),
            "ContactForm: submit accepted"
        );
        Ok(Submission::from_form(self))
    }

    /// Clears all values and touched flags (after a successful send).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
