use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::handlers::collaboration_handlers::forms::CollaborationQuery;
use crate::models::meeting::{self, parse_month_param, MeetingFilter, MonthGrid, ViewMode};
use crate::session;
use crate::state::AppState;

/// GET /api/meetings: the list view's result set as JSON.
pub async fn meetings(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<CollaborationQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store.read().await;
    let filter = query.to_filter(session::selected_project(&session));
    let items = filter.apply(meeting::find_all(&store));
    Ok(HttpResponse::Ok().json(items))
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub month: Option<String>,
}

/// GET /api/calendar?month=YYYY-MM: the month grid with every status.
pub async fn calendar(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<CalendarQuery>,
) -> Result<HttpResponse, AppError> {
    let today = chrono::Local::now().date_naive();
    let reference = query.month.as_deref().and_then(parse_month_param).unwrap_or(today);

    let store = state.store.read().await;
    let filter = MeetingFilter {
        project: session::selected_project(&session),
        view: ViewMode::Calendar,
        ..MeetingFilter::default()
    };
    let grid = MonthGrid::build(reference, filter.apply(meeting::find_all(&store)), today);
    Ok(HttpResponse::Ok().json(grid))
}

#[derive(Deserialize)]
pub struct AuditQuery {
    pub limit: Option<usize>,
}

/// GET /api/audit: newest entries first.
pub async fn audit(
    state: web::Data<AppState>,
    query: web::Query<AuditQuery>,
) -> Result<HttpResponse, AppError> {
    let limit = query.limit.unwrap_or(50).clamp(1, 500);
    let store = state.store.read().await;
    Ok(HttpResponse::Ok().json(store.audit.recent(limit)))
}
