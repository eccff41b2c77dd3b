use crate::{ContactForm, Field, FieldError};

/// Reply the relay mails back to the sender.
pub const AUTORESPONSE: &str = "Thank you for submitting your contact information! I'll get back \
to you as soon as possible. In the meantime, here's a copy of your submission.";

/// Relay layout for the notification mail.
pub const TEMPLATE: &str = "table";

/// Why a submit attempt was refused.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
    #[error("submission rejected by spam filter")]
    Honeypot,
}

/// The payload posted to the form relay, including its hidden control fields.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Submission {
    pub name: String,
    pub pronouns: String,
    pub email: String,
    pub phone: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "contact-preferred",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub preferred_contact: Option<crate::PreferredContact>,
    pub message: String,
    #[cfg_attr(feature = "serde", serde(rename = "_subject"))]
    pub subject: String,
    #[cfg_attr(feature = "serde", serde(rename = "_template"))]
    pub template: String,
    #[cfg_attr(feature = "serde", serde(rename = "_autoresponse"))]
    pub autoresponse: String,
    #[cfg_attr(feature = "serde", serde(rename = "_replyto"))]
    pub reply_to: String,
    #[cfg_attr(feature = "serde", serde(rename = "_honey"))]
    pub honey: String,
}

impl Submission {
    pub(crate) fn from_form(form: &ContactForm) -> Self {
        let name = form.value(Field::Name).to_owned();
        let email = form.value(Field::Email).to_owned();
        Self {
            subject: subject_for(&name),
            reply_to: email.clone(),
            pronouns: form.value(Field::Pronouns).to_owned(),
            phone: form.value(Field::Phone).to_owned(),
            preferred_contact: form.preferred_contact(),
            message: form.value(Field::Message).to_owned(),
            template: TEMPLATE.to_owned(),
            autoresponse: AUTORESPONSE.to_owned(),
            honey: String::new(),
            name,
            email,
        }
    }

    /// Form-encoded pairs in the order the form posts them.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        let mut out = vec![
            (Field::Name.key(), self.name.clone()),
            (Field::Pronouns.key(), self.pronouns.clone()),
            (Field::Email.key(), self.email.clone()),
            (Field::Phone.key(), self.phone.clone()),
        ];
        if let Some(preferred) = self.preferred_contact {
            out.push(("contact-preferred", preferred.as_str().to_owned()));
        }
        out.extend([
            (Field::Message.key(), self.message.clone()),
            ("_autoresponse", self.autoresponse.clone()),
            ("_template", self.template.clone()),
            ("_replyto", self.reply_to.clone()),
            ("_subject", self.subject.clone()),
            ("_honey", self.honey.clone()),
        ]);
        out
    }
}

/// Mail subject for a request from `name`.
pub fn subject_for(name: &str) -> String {
    format!("Contact Request from {name}")
}
