//! # User Repository
//!
//! Login accounts. The email is the login key and must stay unique.

use inlin_core::{NewUser, User};

use super::UserRepository;
use crate::error::{StoreError, StoreResult};

impl UserRepository {
    /// Exact-match lookup by email. No secret is checked.
    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.list().iter().find(|u| u.email == email)
    }

    /// Appends a new `active` account.
    ///
    /// ## Errors
    /// - `Core(Validation)` for blank fields or a malformed email
    /// - `UniqueViolation` if the email (ignoring ASCII case) is taken
    pub fn create(&mut self, form: NewUser) -> StoreResult<User> {
        let email = form.email.trim();
        if self
            .list()
            .iter()
            .any(|u| u.email.eq_ignore_ascii_case(email))
        {
            return Err(StoreError::duplicate("email", email));
        }

        self.insert_with(|id| form.into_user(id))
    }
}
