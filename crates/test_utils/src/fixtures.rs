//! Pre-built Test Fixtures
//!
//! Ready-to-use signup data. The example applicant is the canonical valid
//! record: every field filled, no previous loan.

use domain_signup::{MaritalStatus, RawSignupForm, ResidenceType, SignupApplication};
use rust_decimal_macros::dec;

/// Fixture for signup forms and applications
pub struct SignupFixtures;

impl SignupFixtures {
    /// The canonical valid form
    pub fn example_form() -> RawSignupForm {
        RawSignupForm {
            name: Some("Jo".to_string()),
            email: Some("jo@x.com".to_string()),
            phone: Some("1234567890".to_string()),
            residence_type: Some("Owned".to_string()),
            monthly_income: Some("5000".to_string()),
            previous_loan: Some("No".to_string()),
            loan_amount: None,
            marital_status: Some("Single".to_string()),
            number_of_dependents: Some("0".to_string()),
            city: Some("X".to_string()),
            state: Some("Y".to_string()),
            zip_code: Some("12345".to_string()),
        }
    }

    /// The application the canonical form validates into
    pub fn example_application() -> SignupApplication {
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

    /// A valid form declaring a previous loan
    pub fn previous_loan_form() -> RawSignupForm {
        RawSignupForm {
            previous_loan: Some("Yes".to_string()),
            loan_amount: Some("15000".to_string()),
            ..Self::example_form()
        }
    }

    /// A form exactly as a browser sends it when nothing was filled in
    pub fn blank_browser_form() -> RawSignupForm {
        RawSignupForm {
            name: Some(String::new()),
            email: Some(String::new()),
            phone: Some(String::new()),
            residence_type: Some(String::new()),
            monthly_income: Some(String::new()),
            previous_loan: Some("No".to_string()),
            loan_amount: Some(String::new()),
            marital_status: Some(String::new()),
            number_of_dependents: Some(String::new()),
            city: Some(String::new()),
            state: Some(String::new()),
            zip_code: Some(String::new()),
        }
    }
}
