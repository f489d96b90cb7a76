//! # State Module
//!
//! Application state shared by every command.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐  ┌──────────────────────────────┐    │
//! │  │         StoreState           │  │        ConfigState           │    │
//! │  │                              │  │                              │    │
//! │  │  Arc<Mutex<Store>>           │  │  company_name                │    │
//! │  │   ├── four collections       │  │  currency_symbol             │    │
//! │  │   └── session                │  │  demo_password, seed         │    │
//! │  └──────────────────────────────┘  └──────────────────────────────┘    │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: exclusive access through the Mutex                      │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Commands take exactly the states they need, so tests build their own
//! instead of sharing a global.

mod config;
mod store;

pub use config::ConfigState;
pub use store::StoreState;
