//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the fixed chrome of the Sign-In screen. None of them own
//! state or react to input.

pub mod home_indicator;
pub mod social_sign_in;
pub mod status_bar;
