//! Per-browser state kept in the session cookie: pending toast, selected
//! project and CSRF token.

pub mod csrf;

use actix_session::Session;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::project::ProjectScope;

const TOAST_KEY: &str = "toast";
const PROJECT_KEY: &str = "selected_project";

/// Notification shown once on the next rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Toast {
    pub fn success(title: &str, description: impl Into<String>) -> Self {
        Toast { title: title.to_string(), description: description.into(), destructive: false }
    }

    pub fn error(title: &str, description: impl Into<String>) -> Self {
        Toast { title: title.to_string(), description: description.into(), destructive: true }
    }
}

pub fn push_toast(session: &Session, toast: Toast) {
    if let Err(e) = session.insert(TOAST_KEY, &toast) {
        log::warn!("Dropping toast '{}': {e}", toast.title);
    }
}

pub fn take_toast(session: &Session) -> Option<Toast> {
    let toast = session.get::<Toast>(TOAST_KEY).unwrap_or(None);
    if toast.is_some() {
        session.remove(TOAST_KEY);
    }
    toast
}

pub fn selected_project(session: &Session) -> ProjectScope {
    session
        .get::<String>(PROJECT_KEY)
        .unwrap_or(None)
        .map(|name| ProjectScope::from_name(&name))
        .unwrap_or_default()
}

pub fn set_selected_project(session: &Session, scope: &ProjectScope) -> Result<(), AppError> {
    match scope {
        ProjectScope::All => {
            session.remove(PROJECT_KEY);
            Ok(())
        }
        ProjectScope::Named(name) => session
            .insert(PROJECT_KEY, name)
            .map_err(|e| AppError::Session(format!("Failed to store project: {e}"))),
    }
}
