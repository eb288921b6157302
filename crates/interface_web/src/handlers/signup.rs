//! Signup form handlers

use axum::{
    extract::{rejection::FormRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Form,
};

use domain_signup::{RawSignupForm, SignupError};
use maud::Markup;

use crate::pages::{self, SignupView};
use crate::{error::WebError, AppState};

/// Renders the empty signup form
pub async fn signup_form() -> Markup {
    pages::signup_page(&SignupView::empty())
}

/// Validates a submitted form and forwards it to the lending backend
///
/// - invalid input: 422 with the form and per-field messages
/// - backend failure: 502 with the form, values kept, and a banner so the
///   applicant can submit again
/// - accepted: 200 with a confirmation page
pub async fn submit_signup(
    State(state): State<AppState>,
    form: Result<Form<RawSignupForm>, FormRejection>,
) -> Result<Response, WebError> {
    let Form(raw) = form?;

    match state.signup.submit(&raw).await {
        Ok(accepted) => {
            tracing::info!(attempt_id = %accepted.attempt_id, "Signup accepted");
            Ok(pages::confirmation_page(&accepted.application).into_response())
        }
        Err(SignupError::Invalid(errors)) => {
            let view = SignupView::with_errors(raw, errors);
            Ok((StatusCode::UNPROCESSABLE_ENTITY, pages::signup_page(&view)).into_response())
        }
        Err(SignupError::Submission(err)) => {
            let view = SignupView::with_banner(raw, err.user_message());
            Ok((StatusCode::BAD_GATEWAY, pages::signup_page(&view)).into_response())
        }
    }
}
