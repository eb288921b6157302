//! Signup application model
//!
//! The `SignupApplication` is the normalized, validated record delivered to
//! the lending backend. It is only ever produced by
//! [`SignupValidator`](crate::validation::SignupValidator), so holding one
//! means every field and cross-field rule has already passed.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::UnknownVariant;

/// Validated loan signup application
///
/// Serializes with camelCase keys; monetary amounts are written as JSON
/// numbers and absent optionals are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupApplication {
    /// Applicant full name
    pub name: String,
    /// Contact email
    pub email: String,
    /// Ten character phone number
    pub phone: String,
    /// How the applicant occupies their residence
    pub residence_type: ResidenceType,
    /// Declared monthly income
    #[serde(with = "rust_decimal::serde::float")]
    pub monthly_income: Decimal,
    /// Whether the applicant has taken a loan before
    pub previous_loan: bool,
    /// Amount of the previous loan, present only when `previous_loan` is set
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub loan_amount: Option<Decimal>,
    /// Marital status
    pub marital_status: MaritalStatus,
    /// Number of financial dependents
    pub number_of_dependents: u32,
    /// City of residence
    pub city: String,
    /// State of residence
    pub state: String,
    /// Postal code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<u32>,
}

/// Residence type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResidenceType {
    Owned,
    Rented,
    Other,
}

impl ResidenceType {
    /// All residence types in display order
    pub const ALL: [ResidenceType; 3] = [Self::Owned, Self::Rented, Self::Other];

    /// Returns the wire name of the residence type
    pub fn as_str(&self) -> &'static str {
        match self {
            ResidenceType::Owned => "Owned",
            ResidenceType::Rented => "Rented",
            ResidenceType::Other => "Other",
        }
    }
}

impl fmt::Display for ResidenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResidenceType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                field: SignupField::ResidenceType,
                value: s.to_string(),
            })
    }
}

/// Marital status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    Single,
    Married,
    Divorced,
    Widowed,
}

impl MaritalStatus {
    /// All marital statuses in display order
    pub const ALL: [MaritalStatus; 4] = [
        Self::Single,
        Self::Married,
        Self::Divorced,
        Self::Widowed,
    ];

    /// Returns the wire name of the marital status
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Single => "Single",
            MaritalStatus::Married => "Married",
            MaritalStatus::Divorced => "Divorced",
            MaritalStatus::Widowed => "Widowed",
        }
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| UnknownVariant {
                field: SignupField::MaritalStatus,
                value: s.to_string(),
            })
    }
}

/// Field path of a signup application
///
/// Used to attach validation errors to a specific form control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    Name,
    Email,
    Phone,
    ResidenceType,
    MonthlyIncome,
    PreviousLoan,
    LoanAmount,
    MaritalStatus,
    NumberOfDependents,
    City,
    State,
    ZipCode,
}

impl SignupField {
    /// All fields in form order
    pub const ALL: [SignupField; 12] = [
        Self::Name,
        Self::Email,
        Self::Phone,
        Self::ResidenceType,
        Self::MonthlyIncome,
        Self::PreviousLoan,
        Self::LoanAmount,
        Self::MaritalStatus,
        Self::NumberOfDependents,
        Self::City,
        Self::State,
        Self::ZipCode,
    ];

    /// Returns the field path as it appears in form data and JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            SignupField::Name => "name",
            SignupField::Email => "email",
            SignupField::Phone => "phone",
            SignupField::ResidenceType => "residenceType",
            SignupField::MonthlyIncome => "monthlyIncome",
            SignupField::PreviousLoan => "previousLoan",
            SignupField::LoanAmount => "loanAmount",
            SignupField::MaritalStatus => "maritalStatus",
            SignupField::NumberOfDependents => "numberOfDependents",
            SignupField::City => "city",
            SignupField::State => "state",
            SignupField::ZipCode => "zipCode",
        }
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sample() -> SignupApplication {
        SignupApplication {
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1234567890".to_string(),
            residence_type: ResidenceType::Owned,
            monthly_income: dec!(5000),
            previous_loan: false,
            loan_amount: None,
            marital_status: MaritalStatus::Single,
            number_of_dependents: 0,
            city: "X".to_string(),
            state: "Y".to_string(),
            zip_code: Some(12345),
        }
    }

    #[test]
    fn test_serializes_with_camel_case_keys_and_numbers() {
        let json = serde_json::to_value(sample()).unwrap();

        assert_eq!(json["residenceType"], "Owned");
        assert_eq!(json["monthlyIncome"], serde_json::json!(5000.0));
        assert_eq!(json["previousLoan"], false);
        assert_eq!(json["numberOfDependents"], 0);
        assert_eq!(json["zipCode"], 12345);
        assert!(json.get("loanAmount").is_none());
    }

    #[test]
    fn test_loan_amount_serialized_when_present() {
        let mut application = sample();
        application.previous_loan = true;
        application.loan_amount = Some(dec!(250.5));

        let json = serde_json::to_value(&application).unwrap();
        assert_eq!(json["loanAmount"], serde_json::json!(250.5));
    }

    #[test]
    fn test_enum_parsing_is_exact() {
        assert_eq!("Rented".parse::<ResidenceType>().unwrap(), ResidenceType::Rented);
        assert_eq!(
            "rented".parse::<ResidenceType>(),
            Err(UnknownVariant {
                field: SignupField::ResidenceType,
                value: "rented".to_string(),
            })
        );
        assert_eq!("Widowed".parse::<MaritalStatus>().unwrap(), MaritalStatus::Widowed);
        assert!("".parse::<MaritalStatus>().is_err());
    }

    #[test]
    fn test_field_paths() {
        assert_eq!(SignupField::LoanAmount.to_string(), "loanAmount");
        assert_eq!(SignupField::ALL.len(), 12);
    }
}
