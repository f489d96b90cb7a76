//! # Navigation Commands
//!
//! Session info, page changes, and the table search box.
//!
//! Rendering is always a full re-derivation from the current collections:
//! there is no cached view to invalidate.

use chrono::{DateTime, Utc};
use inlin_core::access::visible_pages;
use inlin_core::view::{self, PageView, ViewContext};
use inlin_core::{Page, User};
use inlin_store::{Session, Store};
use serde::Serialize;
use tracing::debug;
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// What the header and navigation bar show.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDto {
    pub authenticated: bool,
    pub user: Option<User>,
    /// `"HR MANAGER"` style label for the header badge.
    pub role_label: Option<String>,
    pub current_page: Page,
    /// Navigation links to show. Empty when signed out.
    pub visible_pages: Vec<Page>,
    pub session_id: Option<Uuid>,
    pub signed_in_at: Option<DateTime<Utc>>,
}

impl SessionDto {
    pub fn from_session(session: &Session) -> Self {
        let user = session.current_user().cloned();
        SessionDto {
            authenticated: session.is_authenticated(),
            role_label: user.as_ref().map(|u| u.role.label()),
            visible_pages: user
                .as_ref()
                .map(|u| visible_pages(u.role).to_vec())
                .unwrap_or_default(),
            user,
            current_page: session.current_page(),
            session_id: session.session_id(),
            signed_in_at: session.signed_in_at(),
        }
    }
}

/// Current session.
pub fn get_session(state: &StoreState) -> SessionDto {
    debug!("get_session command");
    state.with_store(|store| SessionDto::from_session(store.session()))
}

/// Moves to `page` and renders it.
///
/// ## Errors
/// - `UNAUTHENTICATED` when signed out
/// - `UNAUTHORIZED` when the page is outside the role's set; the current
///   page does not change
pub fn navigate(state: &StoreState, config: &ConfigState, page: Page) -> Result<PageView, ApiError> {
    debug!(%page, "navigate command");

    state.with_store_mut(|store| {
        store.navigate(page)?;
        render(store, config)
    })
}

/// Renders the current page, filtered by the search box text.
pub fn search(state: &StoreState, config: &ConfigState, query: &str) -> Result<PageView, ApiError> {
    debug!(query, "search command");

    state.with_store(|store| Ok(render(store, config)?.filter(query)))
}

/// Renders the current page for the signed-in user.
pub fn render(store: &Store, config: &ConfigState) -> Result<PageView, ApiError> {
    let viewer = store.require_user()?;
    let ctx = ViewContext {
        viewer,
        currency_symbol: &config.currency_symbol,
        company_name: &config.company_name,
    };

    Ok(view::derive(store.session().current_page(), store.snapshot(), ctx))
}

/// [`render`] through the shared state; `None` when signed out.
pub fn current_view(state: &StoreState, config: &ConfigState) -> Option<PageView> {
    state.with_store(|store| render(store, config).ok())
}
