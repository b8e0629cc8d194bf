use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{see_other, AppError};
use crate::models::meeting;
use crate::session::{self, csrf, push_toast, Toast};
use crate::state::AppState;

use super::forms::CreateMeetingForm;
use super::project_for_new_meeting;

/// POST /collaboration/meetings
pub async fn create(
    state: web::Data<AppState>,
    session: Session,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let form = CreateMeetingForm::from_pairs(form.into_inner());
    csrf::validate_csrf(&session, &form.csrf_token)?;

    if let Some(message) = form.validate() {
        log::warn!("Meeting not created: {message}");
        push_toast(&session, Toast::error("Could not schedule meeting", message));
        return Ok(see_other("/collaboration"));
    }

    let scope = session::selected_project(&session);
    let mut store = state.store.write().await;
    let project = project_for_new_meeting(&scope, &store);
    let new = form.into_new_meeting(project, state.config.default_organizer.clone());
    let title = new.title.clone();
    let date = new.date.clone();
    let committees = new.committees.clone();

    let id = meeting::create(&mut store, new);
    store.audit.log(
        "meeting.created",
        "meeting",
        id,
        serde_json::json!({
            "summary": format!("Scheduled '{title}' on {date}"),
            "title": &title,
            "date": &date,
            "committees": &committees,
        }),
    );

    push_toast(&session, Toast::success("Meeting scheduled", format!("{title} has been added to the calendar.")));
    Ok(see_other("/collaboration"))
}
