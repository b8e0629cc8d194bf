use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Timezone labels offered by the create-meeting form. Display only.
pub const TIMEZONES: &[&str] = &["UTC", "EST (UTC-5)", "PST (UTC-8)", "CET (UTC+1)", "JST (UTC+9)"];

/// Durations (minutes) offered by the create-meeting form.
pub const DURATIONS: &[u32] = &[30, 45, 60, 90, 120];

/// Lifecycle tab a meeting is filed under. Assigned with the data, never
/// derived from the clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingStatus {
    Upcoming,
    Past,
}

impl MeetingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeetingStatus::Upcoming => "upcoming",
            MeetingStatus::Past => "past",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "upcoming" => Some(MeetingStatus::Upcoming),
            "past" => Some(MeetingStatus::Past),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendee {
    pub name: String,
    pub role: String,
}

impl Attendee {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub date: String, // YYYY-MM-DD
    pub time: String, // HH:MM
    pub duration: u32,
    pub timezone: String,
    #[serde(default)]
    pub committees: Vec<String>,
    pub organizer: String,
    pub attendees: u32,
    #[serde(default)]
    pub attendee_list: Vec<Attendee>,
    #[serde(default)]
    pub video_link: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub recurring: Option<String>,
    pub status: MeetingStatus,
    pub project: String,
    #[serde(default)]
    pub is_live_now: bool,
}

impl Meeting {
    pub fn is_past(&self) -> bool {
        self.status == MeetingStatus::Past
    }

    pub fn is_recurring(&self) -> bool {
        self.recurring.as_deref().is_some_and(|label| !label.is_empty())
    }

    pub fn recurring_label(&self) -> &str {
        self.recurring.as_deref().unwrap_or("")
    }

    pub fn committees_label(&self) -> String {
        self.committees.join(", ")
    }

    /// "Tuesday, August 5, 2025". Unparseable dates are shown as stored.
    pub fn long_date(&self) -> String {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|d| d.format("%A, %B %-d, %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }

    /// 12-hour start and end, e.g. "3:00 PM - 4:00 PM".
    pub fn time_range(&self) -> String {
        match NaiveTime::parse_from_str(&self.time, "%H:%M") {
            Ok(start) => {
                let (end, _) =
                    start.overflowing_add_signed(Duration::minutes(i64::from(self.duration)));
                format!("{} - {}", start.format("%-I:%M %p"), end.format("%-I:%M %p"))
            }
            Err(_) => self.time.clone(),
        }
    }

    pub fn time_display(&self) -> String {
        if self.is_live_now {
            "in 10 minutes".to_string()
        } else {
            self.time_range()
        }
    }
}

/// A meeting as submitted through the create form, after validation.
#[derive(Debug, Clone)]
pub struct NewMeeting {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub timezone: String,
    pub committees: Vec<String>,
    pub participants: Vec<String>,
    pub video_link: String,
    pub location: String,
    pub recurring: Option<String>,
    pub project: String,
    pub organizer: String,
}

/// Cadence choices on the create form. Only the label is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrencePattern {
    Weekly,
    Biweekly,
    Monthly,
    Quarterly,
}

impl RecurrencePattern {
    pub const ALL: [RecurrencePattern; 4] = [
        RecurrencePattern::Weekly,
        RecurrencePattern::Biweekly,
        RecurrencePattern::Monthly,
        RecurrencePattern::Quarterly,
    ];

    pub fn from_param(value: &str) -> Option<Self> {
        match value {
            "weekly" => Some(RecurrencePattern::Weekly),
            "biweekly" => Some(RecurrencePattern::Biweekly),
            "monthly" => Some(RecurrencePattern::Monthly),
            "quarterly" => Some(RecurrencePattern::Quarterly),
            _ => None,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Biweekly => "biweekly",
            RecurrencePattern::Monthly => "monthly",
            RecurrencePattern::Quarterly => "quarterly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RecurrencePattern::Weekly => "Weekly",
            RecurrencePattern::Biweekly => "Bi-weekly",
            RecurrencePattern::Monthly => "Monthly",
            RecurrencePattern::Quarterly => "Quarterly",
        }
    }
}

/// Uppercased first letter of each whitespace-separated word.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}
