//! Test Data Builders
//!
//! Provides a builder for raw signup forms. Tests set only the fields they
//! care about and start from the canonical valid form for everything else.

use domain_signup::{RawSignupForm, SignupField};

use crate::fixtures::SignupFixtures;

/// Builder for constructing raw signup forms
#[derive(Debug, Clone)]
pub struct RawSignupFormBuilder {
    form: RawSignupForm,
}

impl Default for RawSignupFormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RawSignupFormBuilder {
    /// Creates a new builder starting from the canonical valid form
    pub fn new() -> Self {
        Self {
            form: SignupFixtures::example_form(),
        }
    }

    /// Creates a builder with every field missing
    pub fn empty() -> Self {
        Self {
            form: RawSignupForm::default(),
        }
    }

    /// Sets any field by path
    pub fn with(mut self, field: SignupField, value: impl Into<String>) -> Self {
        *self.slot(field) = Some(value.into());
        self
    }

    /// Removes a field entirely, as if the control was not submitted
    pub fn without(mut self, field: SignupField) -> Self {
        *self.slot(field) = None;
        self
    }

    /// Sets the name
    pub fn with_name(self, name: impl Into<String>) -> Self {
        self.with(SignupField::Name, name)
    }

    /// Sets the email
    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.with(SignupField::Email, email)
    }

    /// Sets the phone number
    pub fn with_phone(self, phone: impl Into<String>) -> Self {
        self.with(SignupField::Phone, phone)
    }

    /// Sets the monthly income
    pub fn with_monthly_income(self, income: impl Into<String>) -> Self {
        self.with(SignupField::MonthlyIncome, income)
    }

    /// Declares a previous loan of the given amount
    pub fn with_previous_loan(self, amount: impl Into<String>) -> Self {
        self.with(SignupField::PreviousLoan, "Yes")
            .with(SignupField::LoanAmount, amount)
    }

    /// Declares no previous loan, leaving any loan amount in place
    pub fn without_previous_loan(self) -> Self {
        self.with(SignupField::PreviousLoan, "No")
    }

    /// Sets the number of dependents
    pub fn with_dependents(self, count: impl Into<String>) -> Self {
        self.with(SignupField::NumberOfDependents, count)
    }

    /// Sets the zip code
    pub fn with_zip_code(self, zip: impl Into<String>) -> Self {
        self.with(SignupField::ZipCode, zip)
    }

    /// Builds the raw form
    pub fn build(self) -> RawSignupForm {
        self.form
    }

    /// Encodes the form as an `application/x-www-form-urlencoded` body
    ///
    /// Missing fields are left out of the body entirely.
    pub fn form_body(&self) -> String {
        serde_urlencoded::to_string(&self.form).expect("raw signup form encodes")
    }

    fn slot(&mut self, field: SignupField) -> &mut Option<String> {
        let form = &mut self.form;
        match field {
            SignupField::Name => &mut form.name,
            SignupField::Email => &mut form.email,
            SignupField::Phone => &mut form.phone,
            SignupField::ResidenceType => &mut form.residence_type,
            SignupField::MonthlyIncome => &mut form.monthly_income,
            SignupField::PreviousLoan => &mut form.previous_loan,
            SignupField::LoanAmount => &mut form.loan_amount,
            SignupField::MaritalStatus => &mut form.marital_status,
            SignupField::NumberOfDependents => &mut form.number_of_dependents,
            SignupField::City => &mut form.city,
            SignupField::State => &mut form.state,
            SignupField::ZipCode => &mut form.zip_code,
        }
    }
}
