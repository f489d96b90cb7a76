//! # inlin-store: In-Memory Store for the InlinTech Admin Dashboard
//!
//! Owns the four record collections and the session. Nothing is persisted:
//! a store lives exactly as long as the process that built it.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Dashboard Data Flow                              │
//! │                                                                         │
//! │  Console intent (create_employee)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    inlin-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Store      │    │  Repositories │    │    Seed      │  │   │
//! │  │   │  (store.rs)   │    │ (repository/) │    │  (seed.rs)   │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ Session       │◄───│ Table<T>      │    │ 4 users      │  │   │
//! │  │   │ Collections   │    │ IdSequence    │    │ 4 employees  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use inlin_core::Page;
//! use inlin_store::Store;
//!
//! let mut store = Store::seeded();
//! let sarah = store.authenticate("sarah@inlintech.net").unwrap();
//! assert_eq!(store.session().current_page(), Page::Dashboard);
//!
//! store.navigate(Page::Hr).unwrap();
//! assert_eq!(store.employees().len(), 4);
//! # let _ = sarah;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod seed;
pub mod sequence;
pub mod session;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use repository::{
    EmployeeRepository, InventoryRepository, LeaveRequestRepository, Record, Table,
    UserRepository,
};
pub use seed::Dataset;
pub use session::Session;
pub use store::Store;
