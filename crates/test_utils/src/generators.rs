//! Test Data Generators
//!
//! Provides proptest strategies that respect or deliberately break single
//! signup rules, plus `fake`-backed realistic applicants.

use domain_signup::{MaritalStatus, RawSignupForm, ResidenceType};
use fake::faker::address::en::{CityName, StateAbbr};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use proptest::prelude::*;

use crate::fixtures::SignupFixtures;

/// Strategy for phone numbers of exactly ten digits
pub fn valid_phone_strategy() -> impl Strategy<Value = String> {
    "[0-9]{10}"
}

/// Strategy for phone numbers of any other length
pub fn invalid_phone_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[0-9]{0,9}", "[0-9]{11,16}"]
}

/// Strategy for zip codes with 3 to 5 digits
pub fn valid_zip_strategy() -> impl Strategy<Value = String> {
    "[1-9][0-9]{2,4}"
}

/// Strategy for zip codes that are too short or too long
pub fn invalid_zip_strategy() -> impl Strategy<Value = String> {
    prop_oneof!["[1-9][0-9]?", "[1-9][0-9]{5,7}"]
}

/// Strategy for non-negative money amounts as typed into a form
pub fn amount_strategy() -> impl Strategy<Value = String> {
    (0u64..10_000_000u64, 0u32..100u32).prop_map(|(units, cents)| {
        if cents == 0 {
            units.to_string()
        } else {
            format!("{}.{:02}", units, cents)
        }
    })
}

/// Strategy for residence types by wire name
pub fn residence_type_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(ResidenceType::ALL.map(|r| r.as_str().to_string()).to_vec())
}

/// Strategy for marital statuses by wire name
pub fn marital_status_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(MaritalStatus::ALL.map(|m| m.as_str().to_string()).to_vec())
}

/// Strategy for forms that satisfy every rule
pub fn valid_form_strategy() -> impl Strategy<Value = RawSignupForm> {
    (
        "[A-Z][a-z]{2,10}",
        valid_phone_strategy(),
        residence_type_strategy(),
        amount_strategy(),
        proptest::option::of(amount_strategy().prop_filter("loan must be positive", |a| a != "0")),
        marital_status_strategy(),
        0u32..12u32,
        proptest::option::of(valid_zip_strategy()),
    )
        .prop_map(|(name, phone, residence, income, loan, marital, dependents, zip)| RawSignupForm {
            name: Some(name),
            phone: Some(phone),
            residence_type: Some(residence),
            monthly_income: Some(income),
            previous_loan: Some(if loan.is_some() { "Yes" } else { "No" }.to_string()),
            loan_amount: loan,
            marital_status: Some(marital),
            number_of_dependents: Some(dependents.to_string()),
            zip_code: Some(zip.unwrap_or_default()),
            ..SignupFixtures::example_form()
        })
}

/// A realistic applicant with fake personal details
pub fn fake_applicant_form() -> RawSignupForm {
    let phone: u64 = (1_000_000_000u64..10_000_000_000u64).fake();
    let zip: u32 = (10_000u32..100_000u32).fake();

    RawSignupForm {
        name: Some(Name().fake()),
        email: Some(SafeEmail().fake()),
        phone: Some(phone.to_string()),
        city: Some(CityName().fake()),
        state: Some(StateAbbr().fake()),
        zip_code: Some(zip.to_string()),
        ..SignupFixtures::example_form()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain_signup::validation::validate;

    proptest! {
        #[test]
        fn valid_forms_validate(form in valid_form_strategy()) {
            let result = validate(&form);
            prop_assert!(result.is_ok(), "{:?}", result);
        }

        #[test]
        fn invalid_phones_fail(phone in invalid_phone_strategy()) {
            let form = RawSignupForm { phone: Some(phone), ..SignupFixtures::example_form() };
            prop_assert!(validate(&form).is_err());
        }

        #[test]
        fn invalid_zips_fail(zip in invalid_zip_strategy()) {
            let form = RawSignupForm { zip_code: Some(zip), ..SignupFixtures::example_form() };
            prop_assert!(validate(&form).is_err());
        }
    }

    #[test]
    fn fake_applicants_validate() {
        for _ in 0..20 {
            let form = fake_applicant_form();
            assert!(validate(&form).is_ok(), "{:?}", form);
        }
    }
}
