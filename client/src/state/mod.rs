//! Client-side UI state.

pub mod sign_in;
