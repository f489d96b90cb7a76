//! # InlinTech Dashboard Console Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        InlinTech Dashboard                              │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                  Presentation (external)                         │  │
//! │  │  • Login + demo users     • HR / Inventory / Admin tables        │  │
//! │  │  • Navigation bar         • Toasts, modals, charts               │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                   JSON intents  │  ▲  JSON responses                   │
//! │                        (stdin)  ▼  │  (stdout)                          │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    Rust Backend (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Calls run()                                       │  │
//! │  │  lib.rs ─────► Logging, config, state, session loop              │  │
//! │  │  intent.rs ──► login, navigate, create_employee, approve_leave  │  │
//! │  │  state/ ─────► StoreState, ConfigState                           │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() -> anyhow::Result<()> {
    // Setup lives in lib.rs so it can be tested
    inlin_console::run()
}
