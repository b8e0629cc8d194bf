use crate::models::project::ProjectScope;

use super::types::{Meeting, MeetingStatus};

/// Constraint on a meeting's recurrence label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RecurrenceFilter {
    #[default]
    Any,
    /// Only meetings without a recurrence label.
    OneTime,
    Label(String),
}

impl RecurrenceFilter {
    pub fn from_param(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            None | Some("") | Some("all") => RecurrenceFilter::Any,
            Some("none") => RecurrenceFilter::OneTime,
            Some(label) => RecurrenceFilter::Label(label.to_string()),
        }
    }

    /// Value to put back into the filter form.
    pub fn as_param(&self) -> &str {
        match self {
            RecurrenceFilter::Any => "",
            RecurrenceFilter::OneTime => "none",
            RecurrenceFilter::Label(label) => label,
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, RecurrenceFilter::Any)
    }

    fn matches(&self, recurring: Option<&str>) -> bool {
        match self {
            RecurrenceFilter::Any => true,
            RecurrenceFilter::OneTime => recurring.is_none_or(str::is_empty),
            RecurrenceFilter::Label(label) => recurring == Some(label.as_str()),
        }
    }
}

/// List view filters by the active tab; the calendar shows every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    List(MeetingStatus),
    Calendar,
}

impl Default for ViewMode {
    fn default() -> Self {
        ViewMode::List(MeetingStatus::Upcoming)
    }
}

impl ViewMode {
    pub fn is_calendar(&self) -> bool {
        matches!(self, ViewMode::Calendar)
    }

    fn admits(&self, status: MeetingStatus) -> bool {
        match self {
            ViewMode::List(tab) => *tab == status,
            ViewMode::Calendar => true,
        }
    }
}

/// Every criterion of the meetings view. Empty criteria impose no
/// constraint; active ones are ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeetingFilter {
    pub query: String,
    pub committee: Option<String>,
    pub recurring: RecurrenceFilter,
    pub organizer: Option<String>,
    pub project: ProjectScope,
    pub view: ViewMode,
}

impl MeetingFilter {
    pub fn matches(&self, meeting: &Meeting) -> bool {
        self.matches_query(meeting)
            && self
                .committee
                .as_deref()
                .is_none_or(|c| meeting.committees.iter().any(|mc| mc == c))
            && self.recurring.matches(meeting.recurring.as_deref())
            && self.organizer.as_deref().is_none_or(|o| meeting.organizer == o)
            && self.project.matches(&meeting.project)
            && self.view.admits(meeting.status)
    }

    fn matches_query(&self, meeting: &Meeting) -> bool {
        let needle = self.query.trim().to_lowercase();
        needle.is_empty()
            || meeting.title.to_lowercase().contains(&needle)
            || meeting.description.to_lowercase().contains(&needle)
    }

    /// Matching meetings in input order.
    pub fn apply<'a, I>(&self, meetings: I) -> Vec<&'a Meeting>
    where
        I: IntoIterator<Item = &'a Meeting>,
    {
        meetings.into_iter().filter(|m| self.matches(m)).collect()
    }

    /// True when any sidebar criterion (search, committee, recurrence,
    /// organizer) is set. Project and tab are not counted.
    pub fn has_active_filters(&self) -> bool {
        !self.query.trim().is_empty()
            || self.committee.is_some()
            || self.recurring.is_active()
            || self.organizer.is_some()
    }
}

/// Distinct dropdown values, in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub committees: Vec<String>,
    pub organizers: Vec<String>,
    pub recurring: Vec<String>,
}

impl FilterOptions {
    pub fn from_meetings(meetings: &[Meeting]) -> Self {
        let mut options = FilterOptions::default();
        for meeting in meetings {
            for committee in &meeting.committees {
                push_unique(&mut options.committees, committee);
            }
            push_unique(&mut options.organizers, &meeting.organizer);
            if let Some(label) = meeting.recurring.as_deref().filter(|l| !l.is_empty()) {
                push_unique(&mut options.recurring, label);
            }
        }
        options
    }
}

fn push_unique(values: &mut Vec<String>, value: &str) {
    if !values.iter().any(|v| v == value) {
        values.push(value.to_string());
    }
}
