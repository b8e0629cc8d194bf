use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::{see_other, AppError};
use crate::models::project::ProjectScope;
use crate::session::{self, csrf};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub csrf_token: String,
    pub project: String,
    pub return_to: Option<String>,
}

/// Only same-site paths are followed after switching project.
fn safe_return_path(return_to: Option<&str>) -> &str {
    match return_to {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => "/collaboration",
    }
}

/// POST /project: remember the selected project for this browser.
pub async fn select(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<ProjectForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let scope = ProjectScope::from_name(&form.project);
    if let ProjectScope::Named(name) = &scope {
        let store = state.store.read().await;
        if !store.projects.iter().any(|p| p == name) {
            log::warn!("Ignoring unknown project '{name}'");
            return Ok(see_other(safe_return_path(form.return_to.as_deref())));
        }
    }

    session::set_selected_project(&session, &scope)?;
    log::info!("Selected project: {}", scope.name());
    Ok(see_other(safe_return_path(form.return_to.as_deref())))
}
