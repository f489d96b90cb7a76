//! # Auth Commands
//!
//! Login, demo quick-login pre-fill, and logout.
//!
//! ## Login Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {email, password}                                                      │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  validate_credentials ──blank?──► VALIDATION_ERROR                      │
//! │        │                          "Please enter both email and password"│
//! │        ▼                                                                │
//! │  store.authenticate(email) ──none?──► INVALID_CREDENTIALS               │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  session set, page = role's default                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The password only has to be present. It is never compared.

use inlin_core::validation::validate_credentials;
use inlin_core::{CoreError, LoginForm};
use tracing::debug;

use super::navigation::SessionDto;
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// Signs in by email.
///
/// ## Errors
/// - `VALIDATION_ERROR` if either field is blank (session untouched)
/// - `INVALID_CREDENTIALS` if no account has this email (session untouched)
pub fn login(state: &StoreState, form: LoginForm) -> Result<SessionDto, ApiError> {
    debug!(email = %form.email, "login command");

    let email = validate_credentials(&form)?;

    state.with_store_mut(|store| {
        store
            .authenticate(&email)
            .ok_or(CoreError::InvalidCredentials)?;
        Ok(SessionDto::from_session(store.session()))
    })
}

/// The login form as the demo quick-login fills it: the account's email
/// and the placeholder password.
///
/// Nothing is signed in; the presentation layer still submits the form.
pub fn demo_prefill(config: &ConfigState, email: &str) -> LoginForm {
    debug!(email, "demo_prefill command");

    LoginForm {
        email: email.trim().to_string(),
        password: config.demo_password.clone(),
    }
}

/// Clears the session. Collections are kept.
pub fn logout(state: &StoreState) -> SessionDto {
    debug!("logout command");

    state.with_store_mut(|store| {
        store.logout();
        SessionDto::from_session(store.session())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use inlin_core::{Page, Role};
    use inlin_store::Store;

    fn form(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_login_any_password() {
        let state = StoreState::new(Store::seeded());

        let session = login(&state, form(" sarah@inlintech.net ", "anything")).unwrap();

        assert!(session.authenticated);
        assert_eq!(session.user.map(|u| u.role), Some(Role::HrManager));
        assert_eq!(session.current_page, Page::Dashboard);
    }

    #[test]
    fn test_blank_fields_are_validation_errors() {
        let state = StoreState::new(Store::seeded());

        let err = login(&state, form("sarah@inlintech.net", "")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = login(&state, form("  ", "demo123")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_unknown_email_is_invalid_credentials() {
        let state = StoreState::new(Store::seeded());

        let err = login(&state, form("ghost@inlintech.net", "demo123")).unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidCredentials);
        assert!(!state.with_store(|s| s.session().is_authenticated()));
    }

    #[test]
    fn test_demo_prefill_then_login() {
        let state = StoreState::new(Store::seeded());
        let config = ConfigState::default();

        let filled = demo_prefill(&config, "alice@inlintech.net");
        assert_eq!(filled.password, "demo123");

        let session = login(&state, filled).unwrap();
        assert_eq!(session.current_page, Page::Portal);
    }

    #[test]
    fn test_logout_resets_session_only() {
        let state = StoreState::new(Store::seeded());
        login(&state, form("admin@inlintech.net", "demo123")).unwrap();

        let session = logout(&state);

        assert!(!session.authenticated);
        assert!(session.user.is_none());
        assert_eq!(session.current_page, Page::Dashboard);
        assert_eq!(state.with_store(|s| s.users().len()), 4);
    }
}
