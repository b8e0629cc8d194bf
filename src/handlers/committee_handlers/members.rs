use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::errors::{see_other, AppError};
use crate::models::committee::{self, MembershipError};
use crate::session::{csrf, push_toast, Toast};
use crate::state::AppState;

use super::forms::{AddMemberForm, ChangeRoleForm, RemoveMemberForm};

const COMMITTEES_PATH: &str = "/committees";

/// Toast for a refused change. Unknown members are a 404, not a toast.
fn reject(session: &Session, err: MembershipError) -> Result<HttpResponse, AppError> {
    if let MembershipError::MemberNotFound(_) = err {
        return Err(AppError::NotFound);
    }
    log::warn!("Membership change refused: {err}");
    push_toast(session, Toast::error(err.title(), err.to_string()));
    Ok(see_other(COMMITTEES_PATH))
}

fn invalid(session: &Session, title: &str, message: String) -> Result<HttpResponse, AppError> {
    log::warn!("{title}: {message}");
    push_toast(session, Toast::error(title, message));
    Ok(see_other(COMMITTEES_PATH))
}

/// POST /committees/{id}/members
pub async fn add(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<i64>,
    form: web::Form<AddMemberForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let committee_id = path.into_inner();
    let request = match form.to_request() {
        Ok(request) => request,
        Err(message) => return invalid(&session, "Invalid member details", message),
    };

    let mut store = state.store.write().await;
    if committee::find_by_id(&store, committee_id).is_none() {
        return Err(AppError::NotFound);
    }
    let member_id = store.next_member_id();
    let today = chrono::Local::now().date_naive();
    let committee = committee::find_by_id_mut(&mut store, committee_id).ok_or(AppError::NotFound)?;
    let committee_name = committee.name.clone();

    let (name, email, role) = match committee::add_member(committee, &request, member_id, today) {
        Ok(member) => (member.name.clone(), member.email.clone(), member.role),
        Err(err) => return reject(&session, err),
    };

    store.audit.log(
        "committee.member_added",
        "committee",
        committee_id,
        json!({
            "summary": format!("Added {name} to {committee_name}"),
            "member_id": member_id,
            "email": &email,
            "role": role.as_str(),
            "is_voting": request.is_voting,
        }),
    );

    push_toast(
        &session,
        Toast::success("Member added", format!("{name} has been added to {committee_name}.")),
    );
    Ok(see_other(COMMITTEES_PATH))
}

/// POST /committees/{id}/members/{member_id}/role
pub async fn change_role(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<(i64, i64)>,
    form: web::Form<ChangeRoleForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (committee_id, member_id) = path.into_inner();
    let request = match form.to_request(member_id) {
        Ok(request) => request,
        Err(message) => return invalid(&session, "Invalid role", message),
    };

    let mut store = state.store.write().await;
    let committee = committee::find_by_id_mut(&mut store, committee_id).ok_or(AppError::NotFound)?;
    let committee_name = committee.name.clone();
    let previous_role = committee.find_member(member_id).map(|m| m.role);

    let name = match committee::change_role(committee, &request) {
        Ok(member) => member.name.clone(),
        Err(err) => return reject(&session, err),
    };

    store.audit.log(
        "committee.member_role_changed",
        "committee",
        committee_id,
        json!({
            "summary": format!("{name} is now {} of {committee_name}", request.new_role.phrase()),
            "member_id": member_id,
            "previous_role": previous_role.map(|r| r.as_str()),
            "new_role": request.new_role.as_str(),
            "is_voting": request.is_voting,
        }),
    );

    push_toast(
        &session,
        Toast::success("Role updated", format!("{name} is now a {}.", request.new_role.phrase())),
    );
    Ok(see_other(COMMITTEES_PATH))
}

/// POST /committees/{id}/members/{member_id}/remove
pub async fn remove(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<(i64, i64)>,
    form: web::Form<RemoveMemberForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    let (committee_id, member_id) = path.into_inner();
    let request = match form.to_request(member_id) {
        Ok(request) => request,
        Err(message) => return invalid(&session, "Cannot remove member", message),
    };

    let mut store = state.store.write().await;
    let committee = committee::find_by_id_mut(&mut store, committee_id).ok_or(AppError::NotFound)?;
    let committee_name = committee.name.clone();

    let removed = match committee::remove_member(committee, &request) {
        Ok(member) => member,
        Err(err) => return reject(&session, err),
    };

    store.audit.log(
        "committee.member_removed",
        "committee",
        committee_id,
        json!({
            "summary": format!("Removed {} from {committee_name}", removed.name),
            "member_id": removed.id,
            "email": &removed.email,
            "reason": &request.reason,
            "effective_date": &request.effective_date,
        }),
    );

    push_toast(
        &session,
        Toast::success("Member removed", format!("{} has been removed from {committee_name}.", removed.name)),
    );
    Ok(see_other(COMMITTEES_PATH))
}
