//! # Intents
//!
//! Every user action as data, and the single dispatcher that runs it.
//!
//! ## Dispatch Cycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  {"intent":"create_employee","name":"Test User",...}                   │
//! │        │ serde                                                          │
//! │        ▼                                                                │
//! │  Intent::CreateEmployee(NewEmployee)                                   │
//! │        │ dispatch()                                                     │
//! │        ▼                                                                │
//! │  commands::employee::create_employee ──► access check ──► Store        │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  Outcome {                                                              │
//! │    notification: "Employee added successfully",                        │
//! │    session:      header + nav state,                                   │
//! │    view:         current page, re-derived after the mutation,          │
//! │    data:         form pre-fill / record / confirmation prompt          │
//! │  }                                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each intent runs to completion before the next one is read.

use inlin_core::view::PageView;
use inlin_core::{
    Collection, LoginForm, NewAsset, NewEmployee, NewLeaveRequest, NewUser, Page, RecordId,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::navigation::{self, SessionDto};
use crate::commands::{self, auth, employee, inventory, leave, user, AnyRecord};
use crate::error::ApiError;
use crate::state::{ConfigState, StoreState};

/// A user action.
///
/// ## Wire Format
/// ```json
/// {"intent": "login", "email": "sarah@inlintech.net", "password": "demo123"}
/// {"intent": "navigate", "page": "hr"}
/// {"intent": "delete", "target": "employees", "id": 3, "confirmed": true}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "intent", rename_all = "snake_case")]
pub enum Intent {
    Login(LoginForm),
    DemoPrefill {
        email: String,
    },
    Logout,
    Navigate {
        page: Page,
    },
    GetSession,
    Search {
        query: String,
    },
    CreateEmployee(NewEmployee),
    CreateAsset(NewAsset),
    SubmitLeave(NewLeaveRequest),
    CreateUser(NewUser),
    /// Without `confirmed: true` this only asks for confirmation.
    Delete {
        target: Collection,
        id: RecordId,
        #[serde(default)]
        confirmed: bool,
    },
    ApproveLeave {
        id: RecordId,
    },
    RejectLeave {
        id: RecordId,
    },
    ViewLeave {
        id: RecordId,
    },
    Edit {
        target: Collection,
        id: RecordId,
    },
}

impl Intent {
    /// The wire tag, for logs. Payloads stay out of the log (login carries
    /// a password).
    pub fn name(&self) -> &'static str {
        match self {
            Intent::Login(_) => "login",
            Intent::DemoPrefill { .. } => "demo_prefill",
            Intent::Logout => "logout",
            Intent::Navigate { .. } => "navigate",
            Intent::GetSession => "get_session",
            Intent::Search { .. } => "search",
            Intent::CreateEmployee(_) => "create_employee",
            Intent::CreateAsset(_) => "create_asset",
            Intent::SubmitLeave(_) => "submit_leave",
            Intent::CreateUser(_) => "create_user",
            Intent::Delete { .. } => "delete",
            Intent::ApproveLeave { .. } => "approve_leave",
            Intent::RejectLeave { .. } => "reject_leave",
            Intent::ViewLeave { .. } => "view_leave",
            Intent::Edit { .. } => "edit",
        }
    }
}

/// Toast colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn new(level: NotificationLevel, message: impl Into<String>) -> Self {
        Notification {
            level,
            message: message.into(),
        }
    }
}

/// The destructive-action confirmation step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmPrompt {
    pub target: Collection,
    pub id: RecordId,
    pub message: String,
}

/// Extra data some intents return besides the view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Payload {
    /// Demo quick-login: what to put in the login form.
    LoginForm(LoginForm),
    /// Edit pre-fill, leave detail, or the record just deleted.
    Record(AnyRecord),
    ConfirmDelete(ConfirmPrompt),
}

/// What the presentation layer does after an intent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub notification: Option<Notification>,
    pub session: SessionDto,
    /// The current page, derived after the intent ran. `None` when signed out.
    pub view: Option<PageView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Payload>,
}

impl Outcome {
    /// Session and current page as they are now.
    fn settle(state: &StoreState, config: &ConfigState) -> Self {
        Outcome {
            notification: None,
            session: navigation::get_session(state),
            view: navigation::current_view(state, config),
            data: None,
        }
    }

    fn notify(mut self, level: NotificationLevel, message: impl Into<String>) -> Self {
        self.notification = Some(Notification::new(level, message));
        self
    }

    fn with_data(mut self, data: Payload) -> Self {
        self.data = Some(data);
        self
    }

    fn with_view(mut self, view: PageView) -> Self {
        self.view = Some(view);
        self
    }
}

/// Runs one intent.
///
/// ## Errors
/// Whatever the command reports. State is unchanged on error, and the
/// caller keeps accepting intents.
pub fn dispatch(
    state: &StoreState,
    config: &ConfigState,
    intent: Intent,
) -> Result<Outcome, ApiError> {
    use NotificationLevel::{Info, Success};

    debug!(intent = intent.name(), "dispatch");

    let outcome = match intent {
        Intent::Login(form) => {
            auth::login(state, form)?;
            Outcome::settle(state, config).notify(Success, "Login successful!")
        }
        Intent::DemoPrefill { email } => {
            let form = auth::demo_prefill(config, &email);
            Outcome::settle(state, config).with_data(Payload::LoginForm(form))
        }
        Intent::Logout => {
            auth::logout(state);
            Outcome::settle(state, config).notify(Success, "Logged out successfully")
        }
        Intent::Navigate { page } => {
            let view = navigation::navigate(state, config, page)?;
            Outcome::settle(state, config).with_view(view)
        }
        Intent::GetSession => Outcome::settle(state, config),
        Intent::Search { query } => {
            let view = navigation::search(state, config, &query)?;
            Outcome::settle(state, config).with_view(view)
        }
        Intent::CreateEmployee(form) => {
            employee::create_employee(state, form)?;
            Outcome::settle(state, config).notify(Success, "Employee added successfully")
        }
        Intent::CreateAsset(form) => {
            inventory::create_asset(state, form)?;
            Outcome::settle(state, config).notify(Success, "Asset added successfully")
        }
        Intent::SubmitLeave(form) => {
            let request = leave::submit_leave(state, form)?;
            Outcome::settle(state, config).notify(
                Success,
                format!("Leave request submitted ({} days)", request.days),
            )
        }
        Intent::CreateUser(form) => {
            user::create_user(state, form)?;
            Outcome::settle(state, config).notify(Success, "User added successfully")
        }
        Intent::Delete {
            target,
            id,
            confirmed: false,
        } => {
            commands::authorize_delete(state, target)?;
            Outcome::settle(state, config).with_data(Payload::ConfirmDelete(ConfirmPrompt {
                target,
                id,
                message: format!(
                    "Are you sure you want to delete this {}?",
                    target.noun().to_lowercase()
                ),
            }))
        }
        Intent::Delete {
            target,
            id,
            confirmed: true,
        } => match commands::delete(state, target, id)? {
            Some(record) => Outcome::settle(state, config)
                .notify(Success, format!("{} deleted successfully", target.noun()))
                .with_data(Payload::Record(record)),
            None => Outcome::settle(state, config).notify(
                Info,
                format!("{} {id} no longer exists; nothing was deleted", target.noun()),
            ),
        },
        Intent::ApproveLeave { id } => {
            leave::approve_leave(state, id)?;
            Outcome::settle(state, config).notify(Success, "Leave request approved")
        }
        Intent::RejectLeave { id } => {
            leave::reject_leave(state, id)?;
            Outcome::settle(state, config).notify(Info, "Leave request rejected")
        }
        Intent::ViewLeave { id } => {
            let request = leave::view_leave(state, id)?;
            Outcome::settle(state, config)
                .with_data(Payload::Record(AnyRecord::LeaveRequests(request)))
        }
        Intent::Edit { target, id } => {
            let record = commands::edit(state, target, id)?;
            Outcome::settle(state, config).with_data(Payload::Record(record))
        }
    };

    Ok(outcome)
}
