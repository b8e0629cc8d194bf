use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::meeting::{
    month_param, parse_month_param, MeetingFilter, MeetingStatus, NewMeeting, RecurrenceFilter,
    RecurrencePattern, ViewMode, DURATIONS, TIMEZONES,
};
use crate::models::project::ProjectScope;
use crate::templates_structs::CollaborationParams;
use crate::validate;

/// Query string of `/collaboration` and `/api/meetings`.
#[derive(Debug, Default, Deserialize)]
pub struct CollaborationQuery {
    pub view: Option<String>,
    pub tab: Option<String>,
    pub q: Option<String>,
    pub committee: Option<String>,
    pub recurring: Option<String>,
    pub organizer: Option<String>,
    pub month: Option<String>,
}

/// Trimmed value, with "" and "all" meaning no constraint.
fn constraint(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != "all")
        .map(str::to_string)
}

impl CollaborationQuery {
    pub fn view_mode(&self) -> ViewMode {
        if self.view.as_deref() == Some("calendar") {
            return ViewMode::Calendar;
        }
        let status = self
            .tab
            .as_deref()
            .and_then(MeetingStatus::from_param)
            .unwrap_or(MeetingStatus::Upcoming);
        ViewMode::List(status)
    }

    pub fn to_filter(&self, project: ProjectScope) -> MeetingFilter {
        MeetingFilter {
            query: self.q.as_deref().unwrap_or_default().trim().to_string(),
            committee: constraint(&self.committee),
            recurring: RecurrenceFilter::from_param(self.recurring.as_deref()),
            organizer: constraint(&self.organizer),
            project,
            view: self.view_mode(),
        }
    }

    /// Month shown by the calendar. Missing or malformed values fall back
    /// to the month of `today`.
    pub fn reference_month(&self, today: NaiveDate) -> NaiveDate {
        self.month
            .as_deref()
            .and_then(parse_month_param)
            .unwrap_or(today)
    }

    /// Echo of the request for links and hidden inputs.
    pub fn params(&self, today: NaiveDate) -> CollaborationParams {
        let tab = match self.tab.as_deref().and_then(MeetingStatus::from_param) {
            Some(status) => status.as_str(),
            None => MeetingStatus::Upcoming.as_str(),
        };
        let view = if self.view_mode().is_calendar() { "calendar" } else { "list" };
        CollaborationParams {
            view: view.to_string(),
            tab: tab.to_string(),
            query: self.q.as_deref().unwrap_or_default().trim().to_string(),
            committee: constraint(&self.committee).unwrap_or_default(),
            recurring: RecurrenceFilter::from_param(self.recurring.as_deref()).as_param().to_string(),
            organizer: constraint(&self.organizer).unwrap_or_default(),
            month: month_param(self.reference_month(today)),
        }
    }
}

/// POST /collaboration/meetings. Checkbox groups repeat their key, so the
/// body is read as raw pairs and folded here.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CreateMeetingForm {
    pub csrf_token: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub duration: String,
    pub timezone: String,
    pub committee: String,
    pub additional_committees: Vec<String>,
    pub participants: Vec<String>,
    pub video_link: String,
    pub location: String,
    pub is_recurring: bool,
    pub recurrence_pattern: String,
}

impl CreateMeetingForm {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = CreateMeetingForm::default();
        for (key, value) in pairs {
            match key.as_str() {
                "csrf_token" => form.csrf_token = value,
                "title" => form.title = value,
                "description" => form.description = value,
                "date" => form.date = value,
                "time" => form.time = value,
                "duration" => form.duration = value,
                "timezone" => form.timezone = value,
                "committee" => form.committee = value,
                "additional_committees" => form.additional_committees.push(value),
                "participants" => form.participants.push(value),
                "video_link" => form.video_link = value,
                "location" => form.location = value,
                "is_recurring" => form.is_recurring = !value.is_empty(),
                "recurrence_pattern" => form.recurrence_pattern = value,
                _ => {}
            }
        }
        form
    }

    /// First problem found, worded for a toast.
    pub fn validate(&self) -> Option<String> {
        if let Some(err) = validate::validate_required(&self.title, "Meeting title", 200) {
            return Some(err);
        }
        if let Some(err) = validate::validate_date(&self.date, "a date") {
            return Some(err);
        }
        if let Some(err) = validate::validate_time(&self.time, "Time") {
            return Some(err);
        }
        if self.committee.trim().is_empty() {
            return Some("Please select a committee".to_string());
        }
        if self.duration_minutes().is_none() {
            return Some("Duration must be 30, 45, 60, 90 or 120 minutes".to_string());
        }
        if !TIMEZONES.contains(&self.timezone.as_str()) {
            return Some(format!("Unknown timezone '{}'", self.timezone));
        }
        if self.is_recurring && RecurrencePattern::from_param(&self.recurrence_pattern).is_none() {
            return Some("Please choose how often the meeting repeats".to_string());
        }
        None
    }

    fn duration_minutes(&self) -> Option<u32> {
        self.duration
            .trim()
            .parse()
            .ok()
            .filter(|d| DURATIONS.contains(d))
    }

    /// Primary committee first, then the additional ones, without repeats.
    pub fn committees(&self) -> Vec<String> {
        let mut committees: Vec<String> = Vec::new();
        for name in std::iter::once(&self.committee).chain(&self.additional_committees) {
            let name = name.trim();
            if !name.is_empty() && !committees.iter().any(|c| c == name) {
                committees.push(name.to_string());
            }
        }
        committees
    }

    pub fn into_new_meeting(self, project: String, organizer: String) -> NewMeeting {
        let recurring = if self.is_recurring {
            RecurrencePattern::from_param(&self.recurrence_pattern).map(|p| p.label().to_string())
        } else {
            None
        };
        NewMeeting {
            duration: self.duration_minutes().unwrap_or(60),
            committees: self.committees(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            date: self.date.trim().to_string(),
            time: self.time.trim().to_string(),
            timezone: self.timezone,
            participants: self.participants,
            video_link: self.video_link.trim().to_string(),
            location: self.location.trim().to_string(),
            recurring,
            project,
            organizer,
        }
    }
}
