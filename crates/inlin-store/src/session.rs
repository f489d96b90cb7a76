//! # Session
//!
//! Who is signed in and which page they are on.
//!
//! `is_authenticated()` is derived from `current_user`, so the two can never
//! disagree.

use chrono::{DateTime, Utc};
use inlin_core::access::default_page;
use inlin_core::{Page, Role, User};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct Session {
    current_user: Option<User>,
    current_page: Page,
    /// Fresh per sign-in; correlates log lines for one session.
    session_id: Option<Uuid>,
    signed_in_at: Option<DateTime<Utc>>,
}

impl Session {
    pub fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current_user.as_ref().map(|u| u.role)
    }

    pub fn current_page(&self) -> Page {
        self.current_page
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn session_id(&self) -> Option<Uuid> {
        self.session_id
    }

    pub fn signed_in_at(&self) -> Option<DateTime<Utc>> {
        self.signed_in_at
    }

    /// Signs `user` in and lands on their role's default page.
    pub(crate) fn sign_in(&mut self, user: User) {
        self.current_page = default_page(user.role);
        self.current_user = Some(user);
        self.session_id = Some(Uuid::new_v4());
        self.signed_in_at = Some(Utc::now());
    }

    /// Back to the signed-out state on the default page.
    pub(crate) fn sign_out(&mut self) {
        *self = Session::default();
    }

    pub(crate) fn set_page(&mut self, page: Page) {
        self.current_page = page;
    }
}
