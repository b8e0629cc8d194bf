use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::models::meeting::{self, month_param, FilterOptions, MonthGrid};
use crate::session;
use crate::state::AppState;
use crate::templates_structs::{CollaborationTemplate, FilterSidebar, MeetingFormOptions, PageContext};

use super::forms::CollaborationQuery;
use super::{participant_names, project_for_new_meeting};

/// GET /collaboration: meeting list or month calendar with sidebar filters.
pub async fn index(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<CollaborationQuery>,
) -> Result<HttpResponse, AppError> {
    let today = chrono::Local::now().date_naive();
    let store = state.store.read().await;
    let ctx = PageContext::build(&session, &store, &state.config, "/collaboration");

    let scope = session::selected_project(&session);
    let filter = query.to_filter(scope.clone());
    let all_meetings = meeting::find_all(&store);
    let matching = filter.apply(all_meetings);

    let (meetings, grid) = if filter.view.is_calendar() {
        let grid = MonthGrid::build(query.reference_month(today), matching, today);
        (Vec::new(), Some(grid))
    } else {
        (matching, None)
    };

    let committees = store.committees.iter().map(|c| c.name.clone()).collect();
    let form = MeetingFormOptions::new(
        committees,
        participant_names(&store),
        today.format("%Y-%m-%d").to_string(),
        project_for_new_meeting(&scope, &store),
    );

    let params = query.params(today);
    let sidebar = FilterSidebar::new(
        &FilterOptions::from_meetings(all_meetings),
        &params,
        filter.has_active_filters(),
    );
    let tmpl = CollaborationTemplate::new(
        ctx,
        params,
        meetings,
        grid,
        meeting::overview(all_meetings, &month_param(today)),
        sidebar,
        form,
    );
    render(tmpl)
}
