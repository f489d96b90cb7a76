//! # inlin-core: Pure Domain Logic for the InlinTech Admin Dashboard
//!
//! This crate holds the rules of the dashboard as pure functions with zero
//! I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      InlinTech Admin Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (browser)                       │   │
//! │  │    Login ──► Navigation ──► Tables ──► Forms / Row actions      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON intents                           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    inlin-console (dispatch)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    inlin-store (owned state)                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ inlin-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  access   │  │   leave   │  │   view    │  │   │
//! │  │   │  records  │  │ role→page │  │ day count │  │  rows     │  │   │
//! │  │   │  forms    │  │  gating   │  │ lifecycle │  │  pages    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO MUTABLE STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Records, roles, pages, form payloads
//! - [`access`] - Role → visible pages, default landing page
//! - [`leave`] - Inclusive day count and decision lifecycle
//! - [`money`] - Asset values in integer cents
//! - [`validation`] - Form checks and payload → record conversion
//! - [`view`] - Page view derivation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use inlin_core::access::{default_page, visible_pages};
//! use inlin_core::{Page, Role};
//!
//! assert_eq!(default_page(Role::Employee), Page::Portal);
//! assert!(visible_pages(Role::HrManager).contains(&Page::Hr));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod error;
pub mod leave;
pub mod money;
pub mod types;
pub mod validation;
pub mod view;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Longest accepted value for any free-text form field.
pub const MAX_TEXT_LEN: usize = 200;

/// Largest asset value the asset form accepts, in whole currency units.
///
/// Keeps dashboard totals far from `i64` overflow.
pub const MAX_ASSET_VALUE: i64 = 1_000_000_000;

/// Placeholder password the demo quick-login fills in. Never verified.
pub const DEMO_PASSWORD: &str = "demo123";
