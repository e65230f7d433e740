//! Pure form logic for the reset page: field predicates, the form-level
//! validator, strength classification and the submission phase machine.

use std::{collections::BTreeMap, fmt};
use validator::ValidateEmail;

pub const DEFAULT_EMAIL: &str = "user@example.com";
pub const MIN_PASSWORD_LEN: usize = 8;
pub const STRONG_PASSWORD_LEN: usize = 12;

/// Length in UTF-16 code units, matching how the browser counts `value.length`.
pub fn password_length(password: &str) -> usize {
    password.encode_utf16().count()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::ConfirmPassword];
}

/// Password policy rules, in the order they are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyRule {
    MinLength,
    Uppercase,
    Digit,
    Special,
}

impl PolicyRule {
    pub const ORDERED: [PolicyRule; 4] = [
        PolicyRule::MinLength,
        PolicyRule::Uppercase,
        PolicyRule::Digit,
        PolicyRule::Special,
    ];

    pub fn is_satisfied_by(self, password: &str) -> bool {
        match self {
            PolicyRule::MinLength => password_length(password) >= MIN_PASSWORD_LEN,
            PolicyRule::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            PolicyRule::Digit => password.chars().any(|c| c.is_ascii_digit()),
            PolicyRule::Special => password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PolicyRule::MinLength => "Password must be at least 8 characters",
            PolicyRule::Uppercase => "Password must include at least 1 uppercase letter",
            PolicyRule::Digit => "Password must include at least 1 number",
            PolicyRule::Special => "Password must include at least 1 special character",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    PolicyViolation(PolicyRule),
    MismatchViolation,
    FormatViolation,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::PolicyViolation(rule) => rule.message(),
            FieldError::MismatchViolation => "Passwords must match",
            FieldError::FormatViolation => "Invalid email",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck {
    Valid,
    Invalid(FieldError),
}

impl FieldCheck {
    pub fn is_valid(self) -> bool {
        matches!(self, FieldCheck::Valid)
    }

    pub fn error(self) -> Option<FieldError> {
        match self {
            FieldCheck::Valid => None,
            FieldCheck::Invalid(err) => Some(err),
        }
    }
}

pub fn check_password(password: &str) -> FieldCheck {
    PolicyRule::ORDERED
        .into_iter()
        .find(|rule| !rule.is_satisfied_by(password))
        .map_or(FieldCheck::Valid, |rule| {
            FieldCheck::Invalid(FieldError::PolicyViolation(rule))
        })
}

pub fn check_confirm_password(password: &str, confirm_password: &str) -> FieldCheck {
    if password == confirm_password {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid(FieldError::MismatchViolation)
    }
}

pub fn check_email(email: &str) -> FieldCheck {
    if email.validate_email() {
        FieldCheck::Valid
    } else {
        FieldCheck::Invalid(FieldError::FormatViolation)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResetFormValues {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for ResetFormValues {
    fn default() -> Self {
        Self {
            email: DEFAULT_EMAIL.to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl ResetFormValues {
    pub fn check(&self, field: Field) -> FieldCheck {
        match field {
            Field::Email => check_email(&self.email),
            Field::Password => check_password(&self.password),
            Field::ConfirmPassword => {
                check_confirm_password(&self.password, &self.confirm_password)
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(FieldError::message)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn record(&mut self, field: Field, check: FieldCheck) {
        if let Some(err) = check.error() {
            self.0.insert(field, err);
        }
    }
}

/// Runs every field predicate and collects the failures.
pub fn validate_form(values: &ResetFormValues) -> Result<(), FieldErrors> {
    let errors = errors_for(values, Field::ALL);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn errors_for(values: &ResetFormValues, fields: impl IntoIterator<Item = Field>) -> FieldErrors {
    let mut errors = FieldErrors::default();
    for field in fields {
        errors.record(field, values.check(field));
    }
    errors
}

/// Fields the user has left at least once; only these show errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedFields {
    email: bool,
    password: bool,
    confirm_password: bool,
}

impl TouchedFields {
    pub fn mark(&mut self, field: Field) {
        match field {
            Field::Email => self.email = true,
            Field::Password => self.password = true,
            Field::ConfirmPassword => self.confirm_password = true,
        }
    }

    pub fn mark_all(&mut self) {
        Field::ALL.into_iter().for_each(|field| self.mark(field));
    }

    pub fn is_touched(&self, field: Field) -> bool {
        match field {
            Field::Email => self.email,
            Field::Password => self.password,
            Field::ConfirmPassword => self.confirm_password,
        }
    }
}

pub fn visible_errors(values: &ResetFormValues, touched: TouchedFields) -> FieldErrors {
    errors_for(
        values,
        Field::ALL
            .into_iter()
            .filter(|field| touched.is_touched(*field)),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn score(password: &str) -> u8 {
        let length = password_length(password);
        [
            length >= MIN_PASSWORD_LEN,
            PolicyRule::Uppercase.is_satisfied_by(password),
            PolicyRule::Digit.is_satisfied_by(password),
            PolicyRule::Special.is_satisfied_by(password),
            length >= STRONG_PASSWORD_LEN,
        ]
        .into_iter()
        .filter(|met| *met)
        .count() as u8
    }

    pub fn classify(password: &str) -> Self {
        match Self::score(password) {
            0..=2 => PasswordStrength::Weak,
            3 | 4 => PasswordStrength::Medium,
            _ => PasswordStrength::Strong,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl SubmitPhase {
    pub fn accepts_submit(self) -> bool {
        matches!(self, SubmitPhase::Idle | SubmitPhase::Failed)
    }

    /// `Idle`/`Failed` move to `Submitting`; every other phase refuses.
    pub fn begin(self) -> Option<Self> {
        self.accepts_submit().then_some(SubmitPhase::Submitting)
    }

    /// Settles an in-flight submission. Outside `Submitting` this is a no-op.
    pub fn resolve(self, succeeded: bool) -> Self {
        match (self, succeeded) {
            (SubmitPhase::Submitting, true) => SubmitPhase::Success,
            (SubmitPhase::Submitting, false) => SubmitPhase::Failed,
            (phase, _) => phase,
        }
    }

    pub fn is_submitting(self) -> bool {
        self == SubmitPhase::Submitting
    }

    pub fn is_success(self) -> bool {
        self == SubmitPhase::Success
    }
}
