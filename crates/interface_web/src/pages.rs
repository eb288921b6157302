//! Server-rendered pages
//!
//! Markup is built with `maud`, so every spliced value is escaped.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use domain_signup::{
    MaritalStatus, RawSignupForm, ResidenceType, SignupApplication, SignupField, ValidationErrors,
};

/// Product name shown in page titles and headers
pub const PRODUCT_NAME: &str = "EasyApply";

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f3ff; color: #1f2937; }
header, footer { padding: 1.5rem; display: flex; justify-content: space-between; align-items: center; }
footer { justify-content: center; font-size: 0.875rem; color: #6b7280; }
main { max-width: 40rem; margin: 0 auto; padding: 2rem 1.5rem; }
.brand { font-size: 1.75rem; font-weight: 700; color: #6d28d9; }
.button { background: #7c3aed; color: #fff; padding: 0.5rem 1.25rem; border-radius: 0.5rem; text-decoration: none; border: 0; font-size: 1rem; }
.field { margin-bottom: 1rem; display: flex; flex-direction: column; gap: 0.25rem; }
.field input, .field select { padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 0.375rem; }
.field.invalid input, .field.invalid select { border-color: #ef4444; }
.error { color: #ef4444; font-size: 0.75rem; }
.banner { background: #fee2e2; color: #991b1b; padding: 0.75rem 1rem; border-radius: 0.5rem; margin-bottom: 1rem; }
.address { display: flex; gap: 0.5rem; }
.loan-amount { display: none; }
form:has(#previousLoan-yes:checked) .loan-amount { display: flex; }
"#;

/// Data needed to render the signup form
#[derive(Debug, Clone, Default)]
pub struct SignupView {
    /// Values to pre-fill, as the applicant typed them
    pub values: RawSignupForm,
    /// Per-field messages from the last attempt
    pub errors: ValidationErrors,
    /// Form-level message, used when delivery failed
    pub banner: Option<String>,
}

impl SignupView {
    /// Empty form, previous loan defaulting to "No"
    pub fn empty() -> Self {
        Self::default()
    }

    /// Form re-rendered with field errors
    pub fn with_errors(values: RawSignupForm, errors: ValidationErrors) -> Self {
        Self {
            values: Self::clear_hidden(values),
            errors,
            banner: None,
        }
    }

    /// Form re-rendered after the backend refused or could not be reached
    pub fn with_banner(values: RawSignupForm, banner: impl Into<String>) -> Self {
        Self {
            values: Self::clear_hidden(values),
            errors: ValidationErrors::new(),
            banner: Some(banner.into()),
        }
    }

    /// Drops the loan amount when no previous loan is selected
    fn clear_hidden(mut values: RawSignupForm) -> RawSignupForm {
        if !values.previous_loan_selected() {
            values.loan_amount = None;
        }
        values
    }
}

fn layout(title: &str, content: Markup) -> Markup {
    let year = chrono::Utc::now().format("%Y").to_string();
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " | " (PRODUCT_NAME) }
                style { (PreEscaped(STYLE)) }
            }
            body {
                header {
                    a class="brand" href="/" { (PRODUCT_NAME) }
                    a class="button" href="/signup" { "Sign up" }
                }
                (content)
                footer { "© " (year) " " (PRODUCT_NAME) ". All rights reserved." }
            }
        }
    }
}

/// Marketing landing page
pub fn landing_page() -> Markup {
    layout(
        "Get Your Loan Fast & Easy",
        html! {
            main {
                h1 { "Get Your Loan Fast & Easy" }
                p {
                    "Apply for loans with ease using our simple sign-up process. "
                    "Get approved faster than ever before."
                }
                p { a class="button" href="/signup" { "Start Now" } }
            }
        },
    )
}

/// Signup form page
pub fn signup_page(view: &SignupView) -> Markup {
    let values = &view.values;
    let errors = &view.errors;
    let residence_types = ResidenceType::ALL.map(|r| r.as_str());
    let marital_statuses = MaritalStatus::ALL.map(|m| m.as_str());
    let address = [
        (SignupField::City, "text", "City", values.city.as_deref()),
        (SignupField::State, "text", "State", values.state.as_deref()),
        (SignupField::ZipCode, "number", "Zip Code", values.zip_code.as_deref()),
    ];

    layout(
        "Sign up",
        html! {
            main {
                h2 { "Create Your Account" }
                @if let Some(banner) = &view.banner {
                    div class="banner" role="alert" { (banner) }
                }
                form method="post" action="/signup" novalidate {
                    (text_input(SignupField::Name, "text", "Name", values.name.as_deref(), errors))
                    (text_input(SignupField::Email, "email", "Email", values.email.as_deref(), errors))
                    (text_input(SignupField::Phone, "tel", "Phone", values.phone.as_deref(), errors))
                    (select(
                        SignupField::ResidenceType,
                        "Residence Type",
                        &residence_types,
                        values.residence_type.as_deref(),
                        errors,
                    ))
                    (text_input(
                        SignupField::MonthlyIncome,
                        "number",
                        "Monthly Income",
                        values.monthly_income.as_deref(),
                        errors,
                    ))
                    (previous_loan_radio(values.previous_loan_selected(), errors))
                    (text_input(
                        SignupField::LoanAmount,
                        "number",
                        "Loan Amount",
                        values.loan_amount.as_deref(),
                        errors,
                    ))
                    (select(
                        SignupField::MaritalStatus,
                        "Marital Status",
                        &marital_statuses,
                        values.marital_status.as_deref(),
                        errors,
                    ))
                    (text_input(
                        SignupField::NumberOfDependents,
                        "number",
                        "Number of Dependents",
                        values.number_of_dependents.as_deref(),
                        errors,
                    ))
                    fieldset class="field" {
                        legend { "Address" }
                        div class="address" {
                            @for (field, input_type, placeholder, value) in address {
                                input
                                    type=(input_type)
                                    id=(field.as_str())
                                    name=(field.as_str())
                                    placeholder=(placeholder)
                                    value=(value.unwrap_or_default());
                            }
                        }
                        @for (field, ..) in address {
                            (error_span(field, errors))
                        }
                    }
                    button class="button" type="submit" { "Sign Up" }
                }
            }
        },
    )
}

/// Confirmation shown after the backend accepted the application
pub fn confirmation_page(application: &SignupApplication) -> Markup {
    layout(
        "Application received",
        html! {
            main {
                h2 { "Application received" }
                p {
                    "Thanks, " (application.name) ". We will be in touch at "
                    (application.email) " shortly."
                }
                p { a class="button" href="/" { "Back to home" } }
            }
        },
    )
}

fn field_class(field: SignupField, errors: &ValidationErrors) -> &'static str {
    match (field, errors.contains(field)) {
        (SignupField::LoanAmount, true) => "field loan-amount invalid",
        (SignupField::LoanAmount, false) => "field loan-amount",
        (_, true) => "field invalid",
        (_, false) => "field",
    }
}

fn error_span(field: SignupField, errors: &ValidationErrors) -> Markup {
    html! {
        @if let Some(message) = errors.get(field) {
            span class="error" id=(format!("{}-error", field.as_str())) { (message) }
        }
    }
}

fn text_input(
    field: SignupField,
    input_type: &str,
    placeholder: &str,
    value: Option<&str>,
    errors: &ValidationErrors,
) -> Markup {
    html! {
        div class=(field_class(field, errors)) {
            input
                type=(input_type)
                id=(field.as_str())
                name=(field.as_str())
                placeholder=(placeholder)
                value=(value.unwrap_or_default());
            (error_span(field, errors))
        }
    }
}

fn select(
    field: SignupField,
    placeholder: &str,
    choices: &[&str],
    selected: Option<&str>,
    errors: &ValidationErrors,
) -> Markup {
    html! {
        div class=(field_class(field, errors)) {
            select id=(field.as_str()) name=(field.as_str()) {
                option value="" { (placeholder) }
                @for choice in choices {
                    option value=(choice) selected[selected == Some(*choice)] { (choice) }
                }
            }
            (error_span(field, errors))
        }
    }
}

fn previous_loan_radio(selected: bool, errors: &ValidationErrors) -> Markup {
    html! {
        div class=(field_class(SignupField::PreviousLoan, errors)) {
            label { "Previous Loan" }
            label {
                input type="radio" id="previousLoan-yes" name="previousLoan" value="Yes" checked[selected];
                " Yes"
            }
            label {
                input type="radio" id="previousLoan-no" name="previousLoan" value="No" checked[!selected];
                " No"
            }
            (error_span(SignupField::PreviousLoan, errors))
        }
    }
}
