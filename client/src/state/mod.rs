//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `form`, `referrals`) so pages and
//! components depend on small focused models. `cell` lets async flows update
//! either a Leptos signal or a plain shared cell.

pub mod cell;
pub mod form;
pub mod referrals;
pub mod session;
