//! Raw form input and normalization
//!
//! Form controls deliver every value as a string, and optional numeric
//! controls deliver an empty string when left blank. [`normalize`] is the
//! single place where that loosely-typed input is cleaned up before any rule
//! looks at it:
//!
//! - blank numeric values become absent (`None`), never zero
//! - `previousLoan` is read as a flag, defaulting to `false`
//! - `loanAmount` is cleared whenever the flag is not set

use serde::{Deserialize, Serialize};

/// Signup form exactly as submitted by the browser
///
/// Every field is optional because a client may omit any key. Keys use the
/// same camelCase names as the JSON sent to the backend.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSignupForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub residence_type: Option<String>,
    pub monthly_income: Option<String>,
    pub previous_loan: Option<String>,
    pub loan_amount: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_dependents: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl RawSignupForm {
    /// Returns the raw `previousLoan` flag as the form would echo it back
    pub fn previous_loan_selected(&self) -> bool {
        matches!(parse_flag(self.previous_loan.as_deref()), Flag::Set(true))
    }
}

/// Form after normalization, ready for field-level checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedForm {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub residence_type: Option<String>,
    pub monthly_income: Option<String>,
    pub previous_loan: Flag,
    pub loan_amount: Option<String>,
    pub marital_status: Option<String>,
    pub number_of_dependents: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

/// Interpretation of a boolean form control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flag {
    Set(bool),
    Unrecognized(String),
}

impl Flag {
    /// Returns true only for a recognized "yes"
    pub fn is_set(&self) -> bool {
        matches!(self, Flag::Set(true))
    }
}

/// Normalizes raw form input
pub fn normalize(raw: &RawSignupForm) -> NormalizedForm {
    let previous_loan = parse_flag(raw.previous_loan.as_deref());

    let loan_amount = if previous_loan.is_set() {
        absent_if_blank(raw.loan_amount.as_deref())
    } else {
        None
    };

    NormalizedForm {
        name: raw.name.clone(),
        email: raw.email.clone(),
        phone: raw.phone.clone(),
        residence_type: raw.residence_type.clone(),
        monthly_income: absent_if_blank(raw.monthly_income.as_deref()),
        previous_loan,
        loan_amount,
        marital_status: raw.marital_status.clone(),
        number_of_dependents: absent_if_blank(raw.number_of_dependents.as_deref()),
        city: raw.city.clone(),
        state: raw.state.clone(),
        zip_code: absent_if_blank(raw.zip_code.as_deref()),
    }
}

/// Treats a missing or whitespace-only numeric value as absent
fn absent_if_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn parse_flag(value: Option<&str>) -> Flag {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Flag::Set(false);
    };

    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Flag::Set(true),
        "false" | "no" | "off" | "0" => Flag::Set(false),
        _ => Flag::Unrecognized(value.to_string()),
    }
}
