use chrono::NaiveDate;

use collab_admin::models::committee::{
    self, add_member, change_role, remove_member, AddMemberRequest, ChangeRoleRequest, CommitteeFilter,
    MemberRole, MembershipError, RemoveMemberRequest,
};

mod common;
use common::{seeded_store, ALICE_ID, BOB_EMAIL, BOB_ID, GOVERNING_BOARD_ID, TSC_ID};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

// ---------------------------------------------------------------------------
// Add member
// ---------------------------------------------------------------------------

#[test]
fn test_add_member_derives_name_and_join_date() {
    let mut store = seeded_store();
    let id = store.next_member_id();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let before = tsc.members.len();

    let request = AddMemberRequest { email: "ivy_rose.nguyen@example.com".into(), role: MemberRole::Member, is_voting: false };
    let member = add_member(tsc, &request, id, today()).expect("add should succeed");
    assert_eq!(member.name, "Ivy Rose Nguyen");
    assert_eq!(member.join_date, "2026-10-16");
    assert_eq!(member.id, id);
    assert_eq!(tsc.members.len(), before + 1);
}

#[test]
fn test_duplicate_email_is_rejected_and_nothing_changes() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let before = tsc.members.len();

    for email in [BOB_EMAIL, "  bob.smith@example.com "] {
        let request = AddMemberRequest { email: email.into(), role: MemberRole::Member, is_voting: true };
        let err = add_member(tsc, &request, 999, today()).unwrap_err();
        assert!(matches!(err, MembershipError::DuplicateEmail(_)), "{email}");
    }
    assert_eq!(tsc.members.len(), before);
}

#[test]
fn test_duplicate_email_check_is_case_sensitive() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let before = tsc.members.len();

    let request = AddMemberRequest {
        email: "Bob.Smith@Example.com".into(),
        role: MemberRole::Member,
        is_voting: true,
    };
    let added = add_member(tsc, &request, 999, today()).unwrap();
    assert_eq!(added.email, "Bob.Smith@Example.com");
    assert_eq!(tsc.members.len(), before + 1);
}

#[test]
fn test_same_email_may_join_another_committee() {
    let mut store = seeded_store();
    let security = committee::find_by_id_mut(&mut store, 4).unwrap();
    let request = AddMemberRequest { email: BOB_EMAIL.into(), role: MemberRole::VotingMember, is_voting: true };
    assert!(add_member(security, &request, 100, today()).is_ok());
}

// ---------------------------------------------------------------------------
// Change role
// ---------------------------------------------------------------------------

#[test]
fn test_second_chair_is_rejected() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();

    let request = ChangeRoleRequest { member_id: BOB_ID, new_role: MemberRole::Chair, is_voting: true };
    let err = change_role(tsc, &request).unwrap_err();
    assert_eq!(err, MembershipError::ChairTaken { holder: "Alice Johnson".into() });

    let chairs: Vec<i64> = tsc.members.iter().filter(|m| m.is_chair()).map(|m| m.id).collect();
    assert_eq!(chairs, vec![ALICE_ID]);
    assert_eq!(tsc.find_member(BOB_ID).unwrap().role, MemberRole::Secretary);
}

#[test]
fn test_chair_can_be_reassigned_after_stepping_down() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();

    let step_down = ChangeRoleRequest { member_id: ALICE_ID, new_role: MemberRole::VotingMember, is_voting: true };
    change_role(tsc, &step_down).unwrap();
    let promote = ChangeRoleRequest { member_id: BOB_ID, new_role: MemberRole::Chair, is_voting: true };
    let bob = change_role(tsc, &promote).unwrap();
    assert!(bob.is_chair());
    assert_eq!(tsc.chair().map(|c| c.id), Some(BOB_ID));
}

#[test]
fn test_current_chair_may_keep_chair_and_toggle_voting() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let request = ChangeRoleRequest { member_id: ALICE_ID, new_role: MemberRole::Chair, is_voting: false };
    let alice = change_role(tsc, &request).unwrap();
    assert!(alice.is_chair());
    assert!(!alice.is_voting);
}

#[test]
fn test_unknown_member_is_reported() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let request = ChangeRoleRequest { member_id: 4242, new_role: MemberRole::Member, is_voting: false };
    assert_eq!(change_role(tsc, &request).unwrap_err(), MembershipError::MemberNotFound(4242));
}

// ---------------------------------------------------------------------------
// Remove member
// ---------------------------------------------------------------------------

#[test]
fn test_remove_member_splices_it_out() {
    let mut store = seeded_store();
    let tsc = committee::find_by_id_mut(&mut store, TSC_ID).unwrap();
    let before = tsc.members.len();

    let request = RemoveMemberRequest {
        member_id: BOB_ID,
        reason: "Moving to the security working group".into(),
        effective_date: "2026-11-01".into(),
    };
    let removed = remove_member(tsc, &request).unwrap();
    assert_eq!(removed.email, BOB_EMAIL);
    assert_eq!(tsc.members.len(), before - 1);
    assert!(tsc.find_member(BOB_ID).is_none());
}

// ---------------------------------------------------------------------------
// Read-only committees
// ---------------------------------------------------------------------------

#[test]
fn test_staff_managed_committee_refuses_every_mutation() {
    let mut store = seeded_store();
    let board = committee::find_by_id_mut(&mut store, GOVERNING_BOARD_ID).unwrap();
    assert!(!board.is_editable);
    let before = board.members.clone();
    let member_id = before[1].id;

    let add = AddMemberRequest { email: "new.person@example.com".into(), role: MemberRole::Member, is_voting: false };
    assert!(matches!(add_member(board, &add, 500, today()), Err(MembershipError::ReadOnly(_))));

    let change = ChangeRoleRequest { member_id, new_role: MemberRole::Secretary, is_voting: false };
    assert!(matches!(change_role(board, &change), Err(MembershipError::ReadOnly(_))));

    let remove = RemoveMemberRequest { member_id, reason: "Term has ended".into(), effective_date: "2026-12-31".into() };
    assert!(matches!(remove_member(board, &remove), Err(MembershipError::ReadOnly(_))));

    let after: Vec<(i64, MemberRole)> = board.members.iter().map(|m| (m.id, m.role)).collect();
    let expected: Vec<(i64, MemberRole)> = before.iter().map(|m| (m.id, m.role)).collect();
    assert_eq!(after, expected);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[test]
fn test_committee_search_and_type_filter() {
    let store = seeded_store();
    let all = committee::find_all(&store);

    let technical = CommitteeFilter::from_params(None, Some("technical")).apply(all);
    assert_eq!(technical.iter().map(|c| c.id).collect::<Vec<_>>(), vec![1, 4]);

    let search = CommitteeFilter::from_params(Some("BOARD"), Some("all")).apply(all);
    assert_eq!(search.iter().map(|c| c.id).collect::<Vec<_>>(), vec![GOVERNING_BOARD_ID]);

    let overview = committee::overview(all);
    assert_eq!(overview.total_committees, 5);
    assert_eq!(overview.active_committees, 4);
    assert_eq!(overview.editable_committees, 4);
}
