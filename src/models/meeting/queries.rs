use serde::Serialize;

use crate::store::Store;

use super::types::{Attendee, Meeting, MeetingStatus, NewMeeting};

pub fn find_all(store: &Store) -> &[Meeting] {
    &store.meetings
}

pub fn find_by_id(store: &Store, id: i64) -> Option<&Meeting> {
    store.meetings.iter().find(|m| m.id == id)
}

/// Append a new upcoming meeting and return its id.
pub fn create(store: &mut Store, new: NewMeeting) -> i64 {
    let id = store.next_meeting_id();
    let attendee_list: Vec<Attendee> = new
        .participants
        .into_iter()
        .map(|name| Attendee { name, role: "participant".to_string() })
        .collect();

    store.meetings.push(Meeting {
        id,
        title: new.title,
        description: new.description,
        date: new.date,
        time: new.time,
        duration: new.duration,
        timezone: new.timezone,
        committees: new.committees,
        organizer: new.organizer,
        attendees: u32::try_from(attendee_list.len()).unwrap_or(u32::MAX),
        attendee_list,
        video_link: new.video_link,
        location: new.location,
        recurring: new.recurring,
        status: MeetingStatus::Upcoming,
        project: new.project,
        is_live_now: false,
    });
    id
}

/// Sidebar counters of the meetings view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MeetingOverview {
    pub upcoming: usize,
    pub past: usize,
    pub this_month: usize,
    pub recurring: usize,
}

/// `current_month` is a `YYYY-MM` prefix.
pub fn overview(meetings: &[Meeting], current_month: &str) -> MeetingOverview {
    MeetingOverview {
        upcoming: meetings.iter().filter(|m| m.status == MeetingStatus::Upcoming).count(),
        past: meetings.iter().filter(|m| m.status == MeetingStatus::Past).count(),
        this_month: meetings.iter().filter(|m| m.date.starts_with(current_month)).count(),
        recurring: meetings.iter().filter(|m| m.is_recurring()).count(),
    }
}
