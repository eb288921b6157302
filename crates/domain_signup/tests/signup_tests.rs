//! Comprehensive tests for domain_signup

use proptest::prelude::*;
use rust_decimal_macros::dec;

use domain_signup::application::SignupField;
use domain_signup::form::RawSignupForm;
use domain_signup::validation::{validate, SignupValidator};
use test_utils::{
    assert_error_fields, assert_field_error, assert_valid, RawSignupFormBuilder, SignupFixtures,
};

// ============================================================================
// Example Records
// ============================================================================

mod example_tests {
    use super::*;

    #[test]
    fn test_example_record_validates() {
        let application = assert_valid(validate(&SignupFixtures::example_form()));
        assert_eq!(application, SignupFixtures::example_application());
    }

    #[test]
    fn test_example_record_with_zero_loan_fails_on_loan_amount() {
        let form = RawSignupFormBuilder::new().with_previous_loan("0").build();

        let result = validate(&form);
        assert_error_fields(&result, &[SignupField::LoanAmount]);
        assert_field_error(&result, SignupField::LoanAmount, "Loan amount must be greater than 0");
    }

    #[test]
    fn test_previous_loan_record_keeps_amount() {
        let application = assert_valid(validate(&SignupFixtures::previous_loan_form()));
        assert!(application.previous_loan);
        assert_eq!(application.loan_amount, Some(dec!(15000)));
    }

    #[test]
    fn test_blank_browser_form() {
        let result = validate(&SignupFixtures::blank_browser_form());

        assert_error_fields(
            &result,
            &[
                SignupField::Name,
                SignupField::Email,
                SignupField::Phone,
                SignupField::ResidenceType,
                SignupField::MonthlyIncome,
                SignupField::MaritalStatus,
                SignupField::NumberOfDependents,
            ],
        );
        assert_field_error(&result, SignupField::MonthlyIncome, "Monthly income is required");
    }

    #[test]
    fn test_whitespace_only_name_is_accepted() {
        let form = RawSignupFormBuilder::new().with_name("   ").build();
        assert_eq!(assert_valid(validate(&form)).name, "   ");
    }

    #[test]
    fn test_digit_separators_rejected() {
        let form = RawSignupFormBuilder::new()
            .with_monthly_income("1_000")
            .with_dependents("1_0")
            .build();

        let result = validate(&form);
        assert_field_error(&result, SignupField::MonthlyIncome, "Monthly income is required");
        assert_field_error(&result, SignupField::NumberOfDependents, "Number of dependents is required");
    }

    #[test]
    fn test_out_of_range_numbers() {
        let form = RawSignupFormBuilder::new()
            .with_monthly_income("9e28")
            .with_previous_loan("1e40")
            .build();

        let result = validate(&form);
        assert_field_error(&result, SignupField::MonthlyIncome, "Monthly income is out of range");
        assert_field_error(&result, SignupField::LoanAmount, "Loan amount is out of range");
    }

    #[test]
    fn test_example_record_serializes_for_backend() {
        let application = validate(&SignupFixtures::example_form()).unwrap();
        let json = serde_json::to_value(&application).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Jo",
                "email": "jo@x.com",
                "phone": "1234567890",
                "residenceType": "Owned",
                "monthlyIncome": 5000.0,
                "previousLoan": false,
                "maritalStatus": "Single",
                "numberOfDependents": 0,
                "city": "X",
                "state": "Y",
                "zipCode": 12345
            })
        );
    }

    #[test]
    fn test_empty_form_reports_every_required_field() {
        let errors = validate(&RawSignupForm::default()).unwrap_err();

        assert_eq!(
            errors.fields(),
            vec![
                SignupField::Name,
                SignupField::Email,
                SignupField::Phone,
                SignupField::ResidenceType,
                SignupField::MonthlyIncome,
                SignupField::MaritalStatus,
                SignupField::NumberOfDependents,
                SignupField::City,
                SignupField::State,
            ]
        );
    }

    #[test]
    fn test_validator_is_reusable() {
        let validator = SignupValidator::default();
        assert!(validator.validate(&SignupFixtures::example_form()).is_ok());
        assert!(validator.validate(&RawSignupForm::default()).is_err());
        assert!(validator.validate(&SignupFixtures::example_form()).is_ok());
    }
}

// ============================================================================
// Properties
// ============================================================================

mod property_tests {
    use super::*;

    proptest! {
        #[test]
        fn loan_amount_never_required_without_previous_loan(raw_amount in proptest::option::of(".{0,12}")) {
            let mut form = SignupFixtures::example_form();
            form.previous_loan = Some("No".to_string());
            form.loan_amount = raw_amount;

            let application = validate(&form);
            prop_assert!(application.is_ok());
            prop_assert_eq!(application.unwrap().loan_amount, None);
        }

        #[test]
        fn previous_loan_requires_positive_amount(amount in -1_000_000i64..1_000_000i64) {
            let mut form = SignupFixtures::example_form();
            form.previous_loan = Some("Yes".to_string());
            form.loan_amount = Some(amount.to_string());

            let result = validate(&form);
            if amount > 0 {
                prop_assert!(result.is_ok());
            } else {
                prop_assert!(result.unwrap_err().contains(SignupField::LoanAmount));
            }
        }

        #[test]
        fn phone_length_decides_validity(phone in "[0-9a-z]{0,20}") {
            let mut form = SignupFixtures::example_form();
            form.phone = Some(phone.clone());

            let result = validate(&form);
            prop_assert_eq!(result.is_ok(), phone.chars().count() == 10);
        }

        #[test]
        fn zip_code_digit_count(zip in "[1-9][0-9]{0,7}") {
            let mut form = SignupFixtures::example_form();
            form.zip_code = Some(zip.clone());

            let result = validate(&form);
            prop_assert_eq!(result.is_ok(), (3..=5).contains(&zip.len()));
        }

        #[test]
        fn negative_income_and_dependents_rejected(value in 1i64..1_000_000i64) {
            let mut form = SignupFixtures::example_form();
            form.monthly_income = Some(format!("-{value}"));
            form.number_of_dependents = Some(format!("-{value}"));

            let errors = validate(&form).unwrap_err();
            prop_assert!(errors.contains(SignupField::MonthlyIncome));
            prop_assert!(errors.contains(SignupField::NumberOfDependents));
        }

        #[test]
        fn validation_never_panics(
            name in proptest::option::of(".*"),
            phone in proptest::option::of(".*"),
            income in proptest::option::of(".*"),
            flag in proptest::option::of(".*"),
            amount in proptest::option::of(".*"),
            zip in proptest::option::of(".*"),
        ) {
            let form = RawSignupForm {
                name,
                phone,
                monthly_income: income,
                previous_loan: flag,
                loan_amount: amount,
                zip_code: zip,
                ..SignupFixtures::example_form()
            };
            let _ = validate(&form);
        }
    }

    #[test]
    fn absent_income_and_dependents_rejected() {
        for blank in [None, Some(String::new()), Some("  ".to_string())] {
            let mut form = SignupFixtures::example_form();
            form.monthly_income = blank.clone();
            form.number_of_dependents = blank;

            let errors = validate(&form).unwrap_err();
            assert_eq!(errors.get(SignupField::MonthlyIncome), Some("Monthly income is required"));
            assert_eq!(
                errors.get(SignupField::NumberOfDependents),
                Some("Number of dependents is required")
            );
        }
    }

    #[test]
    fn zero_income_and_dependents_accepted() {
        let mut form = SignupFixtures::example_form();
        form.monthly_income = Some("0".to_string());
        form.number_of_dependents = Some("0".to_string());

        let application = validate(&form).unwrap();
        assert_eq!(application.monthly_income, dec!(0));
        assert_eq!(application.number_of_dependents, 0);
    }
}
