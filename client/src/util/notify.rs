//! Notification presenter used by the Sign-In form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The form only decides *which* notice to show. How it is shown (a blocking
//! `window.alert` in the browser, a log line during SSR, a recorder in tests)
//! lives behind [`Notifier`], provided to the tree as a [`NotifierHandle`].

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::sync::Arc;

use crate::state::sign_in::SignInError;

pub const PROGRESS_MESSAGE: &str = "Signing in...";

/// A message the user must acknowledge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Submit was attempted with a missing field.
    Rejected(SignInError),
    /// Submit passed validation; stands in for a real sign-in flow.
    SigningIn,
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Self::Rejected(err) => err.to_string(),
            Self::SigningIn => PROGRESS_MESSAGE.to_owned(),
        }
    }
}

/// Presents notices to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
}

/// Blocking browser alert. Outside a browser the message is logged instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserAlert;

impl Notifier for BrowserAlert {
    fn notify(&self, notice: &Notice) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                leptos::logging::warn!("no window to present notice: {}", notice.message());
                return;
            };
            if let Err(e) = window.alert_with_message(&notice.message()) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            leptos::logging::log!("notice: {}", notice.message());
        }
    }
}

/// Cloneable, context-friendly wrapper around a [`Notifier`].
#[derive(Clone)]
pub struct NotifierHandle(Arc<dyn Notifier>);

impl NotifierHandle {
    pub fn new(notifier: impl Notifier + 'static) -> Self {
        Self(Arc::new(notifier))
    }

    pub fn notifier(&self) -> &dyn Notifier {
        self.0.as_ref()
    }
}

impl Default for NotifierHandle {
    fn default() -> Self {
        Self::new(BrowserAlert)
    }
}

impl std::fmt::Debug for NotifierHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifierHandle").finish_non_exhaustive()
    }
}

/// Records every notice instead of presenting it.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct RecordingNotifier {
    seen: std::sync::Mutex<Vec<Notice>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn notices(&self) -> Vec<Notice> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notice.clone());
        }
    }
}

#[cfg(test)]
impl Notifier for Arc<RecordingNotifier> {
    fn notify(&self, notice: &Notice) {
        self.as_ref().notify(notice);
    }
}
