use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern"));

// `[0-9]` rather than `\d`: the regex crate's `\d` matches every Unicode decimal digit.
static PHONE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+?([0-9]{1,3})?[-.\s]?(\(?[0-9]{3}\)?[-.\s]?)?([0-9][-.\s]?){6,9}[0-9]$")
        .expect("phone pattern")
});

/// An input of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Field {
    Name,
    Pronouns,
    Email,
    Phone,
    Message,
}

impl Field {
    /// Form order.
    pub const ALL: [Field; 5] = [
        Field::Name,
        Field::Pronouns,
        Field::Email,
        Field::Phone,
        Field::Message,
    ];

    /// Fields that must be valid before the form can be submitted.
    pub const REQUIRED: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    /// The form control name, as posted to the relay.
    pub fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Pronouns => "pronouns",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Pronouns => "Pronouns",
            Self::Email => "Email",
            Self::Phone => "Phone",
            Self::Message => "Message",
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Self::Name | Self::Email | Self::Message)
    }

    /// Whether a failure on this field only warns instead of blocking submission.
    pub fn is_advisory(self) -> bool {
        matches!(self, Self::Phone)
    }

    /// Checks `value` against this field's rule.
    ///
    /// Pronouns accept anything. An empty phone number is valid.
    pub fn validate(self, value: &str) -> Result<(), FieldError> {
        match self {
            Self::Name | Self::Message if value.is_empty() => Err(FieldError::Empty(self)),
            Self::Email if value.is_empty() => Err(FieldError::Empty(self)),
            Self::Email if !is_valid_email(value) => Err(FieldError::Malformed(self)),
            Self::Phone if !value.is_empty() && !is_plausible_phone(value) => {
                Err(FieldError::Malformed(self))
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Why a field failed validation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Empty(Field),
    #[error("{0} is not valid")]
    Malformed(Field),
}

impl FieldError {
    pub fn field(&self) -> Field {
        match *self {
            Self::Empty(field) | Self::Malformed(field) => field,
        }
    }
}

/// `local@domain.tld`; no part may contain whitespace or another `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// A loose phone shape: optional `+` and country code, optional area code (parenthesised or
/// not), then 7 to 10 digits with single `-`, `.` or space separators.
///
/// Failing this check is only a hint that the number may be wrong.
pub fn is_plausible_phone(value: &str) -> bool {
    PHONE.is_match(value)
}
