//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the auth forms and referral-page surfaces. Referral
//! components take the page's state signal as a prop.

pub mod notice_bar;
pub mod password_field;
pub mod referral_dialog;
pub mod referral_table;
