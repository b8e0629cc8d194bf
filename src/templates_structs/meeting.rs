use askama::Template;

use crate::models::meeting::{
    FilterOptions, Meeting, MeetingOverview, MonthGrid, RecurrencePattern, DURATIONS, TIMEZONES,
    WEEKDAY_HEADERS,
};
use super::{PageContext, SelectOption};

/// Query parameters of `/collaboration`, normalized for echoing back into
/// links and hidden inputs.
#[derive(Debug, Clone, Default)]
pub struct CollaborationParams {
    pub view: String,
    pub tab: String,
    pub query: String,
    pub committee: String,
    pub recurring: String,
    pub organizer: String,
    pub month: String,
}

impl CollaborationParams {
    fn pairs(&self) -> [(&'static str, &str); 7] {
        [
            ("view", self.view.as_str()),
            ("tab", self.tab.as_str()),
            ("q", self.query.as_str()),
            ("committee", self.committee.as_str()),
            ("recurring", self.recurring.as_str()),
            ("organizer", self.organizer.as_str()),
            ("month", self.month.as_str()),
        ]
    }

    pub fn is_calendar(&self) -> bool {
        self.view == "calendar"
    }
}

#[derive(Template)]
#[template(path = "meetings/collaboration.html")]
pub struct CollaborationTemplate<'a> {
    pub ctx: PageContext,
    pub params: CollaborationParams,
    pub meetings: Vec<&'a Meeting>,
    pub grid: Option<MonthGrid<'a>>,
    pub weekday_headers: [&'static str; 7],
    pub overview: MeetingOverview,
    pub sidebar: FilterSidebar,
    pub form: MeetingFormOptions,
}

/// Dropdowns of the filter sidebar and whether any of them is set.
#[derive(Debug, Clone)]
pub struct FilterSidebar {
    pub committee_options: Vec<SelectOption>,
    pub recurring_options: Vec<SelectOption>,
    pub organizer_options: Vec<SelectOption>,
    pub has_active_filters: bool,
}

impl FilterSidebar {
    pub fn new(options: &FilterOptions, params: &CollaborationParams, has_active_filters: bool) -> Self {
        let committee_options =
            SelectOption::with_all("All Committees", "all", &options.committees, &params.committee);
        let organizer_options =
            SelectOption::with_all("All Organizers", "all", &options.organizers, &params.organizer);
        let mut recurring_options =
            SelectOption::with_all("All Meetings", "all", &options.recurring, &params.recurring);
        recurring_options.insert(1, SelectOption::new("none", "One-time only", params.recurring == "none"));

        Self { committee_options, recurring_options, organizer_options, has_active_filters }
    }
}

impl<'a> CollaborationTemplate<'a> {
    pub fn new(
        ctx: PageContext,
        params: CollaborationParams,
        meetings: Vec<&'a Meeting>,
        grid: Option<MonthGrid<'a>>,
        overview: MeetingOverview,
        sidebar: FilterSidebar,
        form: MeetingFormOptions,
    ) -> Self {
        Self {
            ctx,
            params,
            meetings,
            grid,
            weekday_headers: WEEKDAY_HEADERS,
            overview,
            sidebar,
            form,
        }
    }

    /// Current view state as hidden inputs, leaving out `skip` and empty values.
    pub fn hidden_fields(&self, skip: &str) -> Vec<(&'static str, String)> {
        self.params
            .pairs()
            .into_iter()
            .filter(|(name, value)| *name != skip && !value.is_empty())
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    /// Hidden inputs that survive a filter submit: view, tab and month.
    pub fn layout_fields(&self) -> Vec<(&'static str, String)> {
        self.params
            .pairs()
            .into_iter()
            .filter(|(name, value)| matches!(*name, "view" | "tab" | "month") && !value.is_empty())
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }

    /// Link that drops every sidebar filter but keeps the layout.
    pub fn clear_href(&self) -> String {
        let mut href = format!("/collaboration?view={}&tab={}", self.params.view, self.params.tab);
        if !self.params.month.is_empty() {
            href.push_str("&month=");
            href.push_str(&self.params.month);
        }
        href
    }

    /// `YYYY-MM` of today, target of the calendar's "Today" button.
    pub fn today_month(&self) -> &str {
        self.form.default_date.get(..7).unwrap_or_default()
    }

    pub fn tab_is(&self, tab: &str) -> bool {
        self.params.tab == tab
    }

    pub fn empty_message(&self) -> &'static str {
        if self.sidebar.has_active_filters {
            "No meetings match your filters."
        } else if self.params.tab == "past" {
            "No past meetings."
        } else {
            "No upcoming meetings scheduled."
        }
    }
}

/// Choices offered by the "Schedule Meeting" form.
#[derive(Debug, Clone)]
pub struct MeetingFormOptions {
    pub committees: Vec<String>,
    pub participants: Vec<String>,
    pub timezones: Vec<SelectOption>,
    pub durations: Vec<SelectOption>,
    pub patterns: Vec<SelectOption>,
    pub default_date: String,
    pub project: String,
}

impl MeetingFormOptions {
    pub fn new(committees: Vec<String>, participants: Vec<String>, default_date: String, project: String) -> Self {
        let timezones = TIMEZONES
            .iter()
            .enumerate()
            .map(|(i, tz)| SelectOption::new(*tz, *tz, i == 0))
            .collect();
        let durations = DURATIONS
            .iter()
            .map(|d| SelectOption::new(d.to_string(), duration_label(*d), *d == 60))
            .collect();
        let patterns = RecurrencePattern::ALL
            .iter()
            .map(|p| SelectOption::new(p.as_param(), p.label(), *p == RecurrencePattern::Weekly))
            .collect();
        Self { committees, participants, timezones, durations, patterns, default_date, project }
    }
}

fn duration_label(minutes: u32) -> String {
    match minutes {
        60 => "1 hour".to_string(),
        m if m % 60 == 0 => format!("{} hours", m / 60),
        90 => "1.5 hours".to_string(),
        m => format!("{m} minutes"),
    }
}
