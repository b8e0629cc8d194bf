use actix_session::Session;
use actix_web::{web, HttpResponse};

use crate::errors::{render, AppError};
use crate::models::committee::{self, CommitteeFilter};
use crate::state::AppState;
use crate::templates_structs::{CommitteesTemplate, PageContext};

use super::forms::CommitteesQuery;

/// GET /committees
pub async fn index(
    state: web::Data<AppState>,
    session: Session,
    query: web::Query<CommitteesQuery>,
) -> Result<HttpResponse, AppError> {
    let store = state.store.read().await;
    let ctx = PageContext::build(&session, &store, &state.config, "/committees");

    let filter = CommitteeFilter::from_params(query.q.as_deref(), query.committee_type.as_deref());
    let all = committee::find_all(&store);
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    let tmpl = CommitteesTemplate::new(ctx, &filter, filter.apply(all), committee::overview(all), today);
    render(tmpl)
}
