//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. The async request flows live beside the pages in
//! `auth_flow` and `referral_sync` so they can run without a browser.

pub mod auth_flow;
pub mod login;
pub mod referral_sync;
pub mod referrals;
pub mod signup;

pub const LOGIN_ROUTE: &str = "/login";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const REFERRALS_ROUTE: &str = "/referrals";
