//! Signup validation rules
//!
//! Turns a [`RawSignupForm`] into a [`SignupApplication`] or a list of
//! field errors. Validation runs in three stages:
//!
//! 1. **Normalization** ([`crate::form::normalize`]): blank numeric inputs
//!    become absent, the previous-loan flag is parsed, and the loan amount is
//!    cleared when the flag is not set.
//! 2. **Field checks**: every field is checked on its own. A field reports at
//!    most one error, the first rule it fails.
//! 3. **Cross-field rules**: rules reading more than one field run over the
//!    values that parsed structurally. Each rule attaches its error to a
//!    specific field, never to the form as a whole.
//!
//! # Field Rules
//!
//! - `name`: required
//! - `email`: required, valid address
//! - `phone`: exactly 10 characters
//! - `residenceType`, `maritalStatus`: one of the listed variants
//! - `monthlyIncome`: required number, not negative
//! - `numberOfDependents`: required whole number, not negative
//! - `loanAmount`: a number when given
//! - `city`, `state`: present, may be empty
//! - `zipCode`: when given, a whole number of 3 to 5 digits
//!
//! # Cross-Field Rules
//!
//! - previous loan declared ⇒ loan amount greater than 0

use std::fmt;
use std::str::FromStr;

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::Serialize;
use validator::ValidateEmail;

use crate::application::{MaritalStatus, ResidenceType, SignupApplication, SignupField};
use crate::form::{normalize, Flag, NormalizedForm, RawSignupForm};

/// Exact length of a phone number
pub const PHONE_LENGTH: usize = 10;

/// Allowed number of digits in a zip code
pub const ZIP_DIGITS: std::ops::RangeInclusive<usize> = 3..=5;

/// Validation error attached to a single field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Field the error belongs to
    pub field: SignupField,
    /// Human-readable message, shown verbatim next to the field
    pub message: String,
}

impl FieldError {
    /// Creates a field error
    pub fn new(field: SignupField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered collection of field errors
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an error for a field
    pub fn add(&mut self, field: SignupField, message: impl Into<String>) {
        self.errors.push(FieldError::new(field, message));
    }

    /// Adds a prepared field error
    pub fn push(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Returns true when no field failed
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of field errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the first message recorded for a field
    pub fn get(&self, field: SignupField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Returns true if the field has an error
    pub fn contains(&self, field: SignupField) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over the errors in the order they were found
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Fields with at least one error
    pub fn fields(&self) -> Vec<SignupField> {
        let mut fields: Vec<_> = self.errors.iter().map(|e| e.field).collect();
        fields.sort();
        fields.dedup();
        fields
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl IntoIterator for ValidationErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

/// Field values that passed their own checks
///
/// `None` means the field failed (its error is already recorded). For the
/// optional fields, `Some(None)` means the field was validly left empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedFields {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub residence_type: Option<ResidenceType>,
    pub monthly_income: Option<Decimal>,
    pub previous_loan: Option<bool>,
    pub loan_amount: Option<Option<Decimal>>,
    pub marital_status: Option<MaritalStatus>,
    pub number_of_dependents: Option<u32>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<Option<u32>>,
}

/// Rule whose outcome depends on more than one field
///
/// Rules only see structurally valid values, and must report against the
/// field the applicant has to change.
pub trait CrossFieldRule: Send + Sync {
    /// Short rule identifier used in logs
    fn name(&self) -> &'static str;

    /// Checks the parsed fields, returning an error if the rule is violated
    fn check(&self, fields: &ParsedFields) -> Option<FieldError>;
}

/// A declared previous loan needs a positive loan amount
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviousLoanRequiresAmount;

impl CrossFieldRule for PreviousLoanRequiresAmount {
    fn name(&self) -> &'static str {
        "previous_loan_requires_amount"
    }

    fn check(&self, fields: &ParsedFields) -> Option<FieldError> {
        match (fields.previous_loan, fields.loan_amount) {
            (Some(true), Some(amount)) if amount.map_or(true, |a| a <= Decimal::ZERO) => {
                Some(FieldError::new(
                    SignupField::LoanAmount,
                    "Loan amount must be greater than 0",
                ))
            }
            _ => None,
        }
    }
}

/// Validator for signup forms
///
/// # Examples
///
/// ```rust
/// use domain_signup::form::RawSignupForm;
/// use domain_signup::validation::SignupValidator;
///
/// let raw = RawSignupForm::default();
/// let result = SignupValidator::new().validate(&raw);
///
/// if let Err(errors) = result {
///     for error in errors.iter() {
///         println!("{}", error);
///     }
/// }
/// ```
pub struct SignupValidator {
    rules: Vec<Box<dyn CrossFieldRule>>,
}

impl Default for SignupValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SignupValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = self.rules.iter().map(|r| r.name()).collect();
        f.debug_struct("SignupValidator").field("rules", &names).finish()
    }
}

impl SignupValidator {
    /// Creates a validator with the standard cross-field rules
    pub fn new() -> Self {
        Self::with_rules(vec![Box::new(PreviousLoanRequiresAmount)])
    }

    /// Creates a validator with a custom set of cross-field rules
    pub fn with_rules(rules: Vec<Box<dyn CrossFieldRule>>) -> Self {
        Self { rules }
    }

    /// Validates a raw form
    ///
    /// # Returns
    ///
    /// The normalized application, or every field error found
    pub fn validate(&self, raw: &RawSignupForm) -> Result<SignupApplication, ValidationErrors> {
        let form = normalize(raw);
        let mut errors = ValidationErrors::new();

        let fields = Self::check_fields(&form, &mut errors);

        for rule in &self.rules {
            if let Some(error) = rule.check(&fields) {
                tracing::debug!(rule = rule.name(), field = %error.field, "Cross-field rule failed");
                errors.push(error);
            }
        }

        if !errors.is_empty() {
            tracing::debug!(error_count = errors.len(), fields = ?errors.fields(), "Signup form rejected");
            return Err(errors);
        }

        let ParsedFields {
            name: Some(name),
            email: Some(email),
            phone: Some(phone),
            residence_type: Some(residence_type),
            monthly_income: Some(monthly_income),
            previous_loan: Some(previous_loan),
            loan_amount: Some(loan_amount),
            marital_status: Some(marital_status),
            number_of_dependents: Some(number_of_dependents),
            city: Some(city),
            state: Some(state),
            zip_code: Some(zip_code),
        } = fields
        else {
            // unparsed fields always record an error above
            tracing::error!("Signup fields missing without a recorded error");
            return Err(errors);
        };

        Ok(SignupApplication {
            name,
            email,
            phone,
            residence_type,
            monthly_income,
            previous_loan,
            loan_amount,
            marital_status,
            number_of_dependents,
            city,
            state,
            zip_code,
        })
    }

    /// Runs every field-level check, recording failures
    fn check_fields(form: &NormalizedForm, errors: &mut ValidationErrors) -> ParsedFields {
        ParsedFields {
            name: record(errors, SignupField::Name, check_name(form.name.as_deref())),
            email: record(errors, SignupField::Email, check_email(form.email.as_deref())),
            phone: record(errors, SignupField::Phone, check_phone(form.phone.as_deref())),
            residence_type: record(
                errors,
                SignupField::ResidenceType,
                check_variant(form.residence_type.as_deref(), "Residence type is required"),
            ),
            monthly_income: record(
                errors,
                SignupField::MonthlyIncome,
                check_income(form.monthly_income.as_deref()),
            ),
            previous_loan: record(
                errors,
                SignupField::PreviousLoan,
                check_flag(&form.previous_loan),
            ),
            loan_amount: record(
                errors,
                SignupField::LoanAmount,
                check_optional_number(form.loan_amount.as_deref()),
            ),
            marital_status: record(
                errors,
                SignupField::MaritalStatus,
                check_variant(form.marital_status.as_deref(), "Marital status is required"),
            ),
            number_of_dependents: record(
                errors,
                SignupField::NumberOfDependents,
                check_dependents(form.number_of_dependents.as_deref()),
            ),
            city: record(errors, SignupField::City, check_present(form.city.as_deref(), "City is required")),
            state: record(errors, SignupField::State, check_present(form.state.as_deref(), "State is required")),
            zip_code: record(errors, SignupField::ZipCode, check_zip(form.zip_code.as_deref())),
        }
    }
}

/// Validates a raw form with the standard rules
pub fn validate(raw: &RawSignupForm) -> Result<SignupApplication, ValidationErrors> {
    SignupValidator::new().validate(raw)
}

type FieldResult<T> = Result<T, &'static str>;

fn record<T>(errors: &mut ValidationErrors, field: SignupField, result: FieldResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

fn check_name(value: Option<&str>) -> FieldResult<String> {
    match value {
        Some(name) if !name.is_empty() => Ok(name.to_string()),
        _ => Err("Name is required"),
    }
}

fn check_email(value: Option<&str>) -> FieldResult<String> {
    let email = match value {
        Some(email) if !email.is_empty() => email.to_string(),
        _ => return Err("Email is required"),
    };

    if email.validate_email() {
        Ok(email)
    } else {
        Err("Invalid email")
    }
}

fn check_phone(value: Option<&str>) -> FieldResult<String> {
    let phone = value.unwrap_or_default();
    match phone.chars().count() {
        n if n < PHONE_LENGTH => Err("Phone number is required"),
        n if n > PHONE_LENGTH => Err("Phone number has to be 10 digits"),
        _ => Ok(phone.to_string()),
    }
}

fn check_variant<T: FromStr>(value: Option<&str>, message: &'static str) -> FieldResult<T> {
    value.ok_or(message)?.parse().map_err(|_| message)
}

fn check_number(
    value: Option<&str>,
    missing: &'static str,
    out_of_range: &'static str,
) -> FieldResult<Decimal> {
    match value.map(parse_number) {
        Some(Ok(number)) => Ok(number),
        Some(Err(NumberError::OutOfRange)) => Err(out_of_range),
        Some(Err(NumberError::NotANumber)) | None => Err(missing),
    }
}

fn check_income(value: Option<&str>) -> FieldResult<Decimal> {
    let amount = check_number(
        value,
        "Monthly income is required",
        "Monthly income is out of range",
    )?;

    if amount < Decimal::ZERO {
        return Err("Monthly income cannot be negative");
    }
    Ok(amount)
}

fn check_flag(flag: &Flag) -> FieldResult<bool> {
    match flag {
        Flag::Set(value) => Ok(*value),
        Flag::Unrecognized(_) => Err("Previous loan must be yes or no"),
    }
}

fn check_optional_number(value: Option<&str>) -> FieldResult<Option<Decimal>> {
    match value {
        None => Ok(None),
        Some(_) => check_number(value, "Loan amount is required", "Loan amount is out of range").map(Some),
    }
}

fn check_dependents(value: Option<&str>) -> FieldResult<u32> {
    let count = check_number(
        value,
        "Number of dependents is required",
        "Number of dependents is out of range",
    )?;

    if count < Decimal::ZERO {
        return Err("Number of dependents cannot be negative");
    }
    if !count.fract().is_zero() {
        return Err("Number of dependents must be a whole number");
    }
    count.to_u32().ok_or("Number of dependents is out of range")
}

fn check_present(value: Option<&str>, message: &'static str) -> FieldResult<String> {
    value.map(str::to_string).ok_or(message)
}

fn check_zip(value: Option<&str>) -> FieldResult<Option<u32>> {
    const MESSAGE: &str = "Zip code must be from 3 to 5 digits";

    let Some(value) = value else {
        return Ok(None);
    };

    let number = parse_number(value).map_err(|_| MESSAGE)?;
    if number < Decimal::ZERO || !number.fract().is_zero() {
        return Err(MESSAGE);
    }

    let zip = number.to_u32().ok_or(MESSAGE)?;
    if ZIP_DIGITS.contains(&zip.to_string().len()) {
        Ok(Some(zip))
    } else {
        Err(MESSAGE)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberError {
    /// Not a finite decimal number
    NotANumber,
    /// A number, but not representable as a `Decimal`
    OutOfRange,
}

/// Parses a numeric form value, accepting plain and scientific notation
///
/// The text must first read as a finite `f64`, which rules out digit
/// separators, `inf` and `NaN`.
fn parse_number(value: &str) -> Result<Decimal, NumberError> {
    let value = value.trim();
    let float: f64 = value.parse().map_err(|_| NumberError::NotANumber)?;
    if !float.is_finite() {
        return Err(NumberError::NotANumber);
    }

    Decimal::from_str(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
        .or_else(|| Decimal::from_f64(float))
        .map(|d| d.normalize())
        .ok_or(NumberError::OutOfRange)
}
