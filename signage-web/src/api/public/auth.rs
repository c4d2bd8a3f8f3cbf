use actix_session::Session;
use actix_web::{http::header, web, HttpResponse};
use sha2::{Digest, Sha256};
use signage_error::{web::WebError, WebResult};
use signage_models::{constants::SESSION_LOGGED_IN, web::LoginForm};
use tracing::{info, warn};

use crate::AppState;

const LOGIN_PAGE: &str = include_str!("../../../templates/login.html");

pub async fn login_form() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(LOGIN_PAGE)
}

pub async fn login(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<LoginForm>,
) -> WebResult<HttpResponse> {
    if !password_matches(&form.password, &state.settings.auth.admin_password) {
        warn!("failed admin login attempt");
        return Err(WebError::Unauthorized("Incorrect password".into()));
    }

    session
        .insert(SESSION_LOGGED_IN, true)
        .map_err(|e| WebError::InternalError(e.to_string()))?;
    info!("admin logged in");
    Ok(redirect("/"))
}

pub async fn logout(session: Session) -> HttpResponse {
    session.purge();
    redirect("/login")
}

fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Compare the submitted password against the configured one without an
/// input-dependent early exit: both sides are hashed and the fixed-length
/// digests compared, so response time does not narrow down prefixes.
/// An empty configured password refuses every login.
fn password_matches(supplied: &str, expected: &str) -> bool {
    if expected.is_empty() {
        return false;
    }
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::password_matches;

    #[test]
    fn matches_only_exact_password() {
        assert!(password_matches("s3cret", "s3cret"));
        assert!(!password_matches("s3cret ", "s3cret"));
        assert!(!password_matches("", "s3cret"));
    }

    #[test]
    fn empty_configured_password_refuses_all() {
        assert!(!password_matches("", ""));
        assert!(!password_matches("anything", ""));
    }
}
