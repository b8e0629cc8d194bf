use collab_admin::models::meeting::{
    self, FilterOptions, Meeting, MeetingFilter, MeetingStatus, RecurrenceFilter, ViewMode,
};
use collab_admin::models::project::ProjectScope;

mod common;
use common::seeded_store;

fn ids(meetings: &[&Meeting]) -> Vec<i64> {
    meetings.iter().map(|m| m.id).collect()
}

fn calendar() -> MeetingFilter {
    MeetingFilter { view: ViewMode::Calendar, ..MeetingFilter::default() }
}

// ---------------------------------------------------------------------------
// View mode
// ---------------------------------------------------------------------------

#[test]
fn test_default_filter_is_upcoming_tab() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let upcoming = MeetingFilter::default().apply(all);
    assert!(!upcoming.is_empty());
    assert!(upcoming.iter().all(|m| m.status == MeetingStatus::Upcoming));
    assert_eq!(upcoming.len(), all.iter().filter(|m| m.status == MeetingStatus::Upcoming).count());
}

#[test]
fn test_list_tabs_partition_and_calendar_ignores_status() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let upcoming = MeetingFilter { view: ViewMode::List(MeetingStatus::Upcoming), ..Default::default() }.apply(all);
    let past = MeetingFilter { view: ViewMode::List(MeetingStatus::Past), ..Default::default() }.apply(all);
    assert_eq!(upcoming.len() + past.len(), all.len());
    assert!(past.iter().all(|m| m.status == MeetingStatus::Past));

    let everything = calendar().apply(all);
    assert_eq!(everything.len(), all.len());
}

// ---------------------------------------------------------------------------
// Criteria
// ---------------------------------------------------------------------------

#[test]
fn test_search_is_case_insensitive_over_title_and_description() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let filter = MeetingFilter { query: "SECURITY triage".into(), ..calendar() };
    let found = filter.apply(all);
    assert_eq!(ids(&found), vec![4, 9]);
}

#[test]
fn test_each_criterion_narrows_and_all_are_anded() {
    let store = seeded_store();
    let all = meeting::find_all(&store);

    let by_committee = MeetingFilter { committee: Some("Security Working Group".into()), ..calendar() };
    let by_organizer = MeetingFilter { organizer: Some("Emma Thompson".into()), ..calendar() };
    let by_recurrence = MeetingFilter { recurring: RecurrenceFilter::Label("Weekly".into()), ..calendar() };
    let combined = MeetingFilter {
        committee: Some("Technical Steering Committee".into()),
        organizer: Some("Emma Thompson".into()),
        recurring: RecurrenceFilter::Label("Weekly".into()),
        ..calendar()
    };

    for filter in [&by_committee, &by_organizer, &by_recurrence, &combined] {
        let subset = filter.apply(all);
        assert!(subset.len() <= all.len());
    }
    for meeting in combined.apply(all) {
        assert!(by_organizer.matches(meeting));
        assert!(by_recurrence.matches(meeting));
    }
    assert_eq!(ids(&combined.apply(all)), vec![4]);
}

#[test]
fn test_one_time_matches_only_unlabelled_meetings() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let filter = MeetingFilter { recurring: RecurrenceFilter::OneTime, ..calendar() };
    let found = filter.apply(all);
    assert!(!found.is_empty());
    assert!(found.iter().all(|m| m.recurring.is_none()));
}

#[test]
fn test_project_scope_restricts_to_owning_project() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let kubernetes = MeetingFilter { project: ProjectScope::Named("Kubernetes".into()), ..calendar() }.apply(all);
    assert_eq!(ids(&kubernetes), vec![1, 4, 9]);

    let everything = MeetingFilter { project: ProjectScope::from_name("All Projects"), ..calendar() }.apply(all);
    assert_eq!(everything.len(), all.len());
}

#[test]
fn test_no_match_is_empty_not_error() {
    let store = seeded_store();
    let filter = MeetingFilter { query: "no such meeting anywhere".into(), ..calendar() };
    assert!(filter.apply(meeting::find_all(&store)).is_empty());
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

#[test]
fn test_filtering_is_idempotent_and_order_preserving() {
    let store = seeded_store();
    let all = meeting::find_all(&store);
    let filter = MeetingFilter { committee: Some("Technical Steering Committee".into()), ..calendar() };

    let once = filter.apply(all);
    let twice = filter.apply(once.iter().copied());
    assert_eq!(ids(&once), ids(&twice));

    let positions: Vec<usize> = once
        .iter()
        .map(|m| all.iter().position(|a| a.id == m.id).expect("came from input"))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_filter_options_are_distinct_in_first_seen_order() {
    let store = seeded_store();
    let options = FilterOptions::from_meetings(meeting::find_all(&store));
    assert_eq!(options.organizers.first().map(String::as_str), Some("Jane Smith"));
    assert_eq!(options.recurring, vec!["Monthly", "Bi-weekly", "Weekly", "Quarterly"]);
    let distinct: std::collections::HashSet<&String> = options.committees.iter().collect();
    assert_eq!(distinct.len(), options.committees.len());
    assert_eq!(options.committees.first().map(String::as_str), Some("Technical Steering Committee"));
}
