//! # User Account Commands
//!
//! Admin-page account management. Emails are login keys, so they stay
//! unique, and the signed-in account cannot delete itself.

use inlin_core::{Collection, NewUser, RecordId, User};
use tracing::{debug, warn};

use super::authorized;
use crate::error::ApiError;
use crate::state::StoreState;

/// Adds an `active` account.
///
/// ## Errors
/// - `VALIDATION_ERROR` for blank fields, a malformed email, or an email
///   already in use
pub fn create_user(state: &StoreState, form: NewUser) -> Result<User, ApiError> {
    debug!(email = %form.email, role = %form.role, "create_user command");

    authorized(state, Collection::Users, |store, _| {
        Ok(store.users_mut().create(form)?)
    })
}

/// Removes an account. `Ok(None)` if the id was not there.
///
/// ## Errors
/// - `BUSINESS_LOGIC` when `id` is the signed-in account
pub fn delete_user(state: &StoreState, id: RecordId) -> Result<Option<User>, ApiError> {
    debug!(id, "delete_user command");

    authorized(state, Collection::Users, |store, user| {
        if user.id == id {
            warn!(id, "Refusing to delete the signed-in account");
            return Err(ApiError::business(
                "You cannot delete the account you are signed in with",
            ));
        }
        Ok(store.users_mut().delete(id))
    })
}

pub fn get_user(state: &StoreState, id: RecordId) -> Result<User, ApiError> {
    debug!(id, "get_user command");

    authorized(state, Collection::Users, |store, _| {
        Ok(store.users().require(id)?.clone())
    })
}
