//! Shared test infrastructure for model and HTTP tests.
//!
//! # Fixtures
//! - `seeded_store()` - Store loaded from the bundled seed dataset
//! - `meeting()` - Minimal meeting for filter and calendar tests
//! - `test_state()` - `web::Data<AppState>` around the seeded store
//! - `state_with()` - Same, around a store the test prepared
//! - `init_app!` - Builds the full actix service with session middleware

#![allow(dead_code, unused_macros)]

use actix_web::web;
use regex::Regex;

use collab_admin::config::AppConfig;
use collab_admin::models::meeting::{Meeting, MeetingStatus};
use collab_admin::state::AppState;
use collab_admin::store::{self, Store};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TSC_ID: i64 = 1;
pub const GOVERNING_BOARD_ID: i64 = 3;
pub const ALICE_ID: i64 = 1;
pub const BOB_ID: i64 = 2;
pub const BOB_EMAIL: &str = "bob.smith@example.com";

// ============================================================================
// STORE SETUP
// ============================================================================

pub fn seeded_store() -> Store {
    store::load(None).expect("Failed to load bundled seed")
}

pub fn test_state() -> web::Data<AppState> {
    state_with(seeded_store())
}

pub fn state_with(store: Store) -> web::Data<AppState> {
    web::Data::new(AppState::new(store, AppConfig::default()))
}

/// Meeting with only the fields the filters and the grid look at.
pub fn meeting(id: i64, date: &str, status: MeetingStatus) -> Meeting {
    Meeting {
        id,
        title: format!("Meeting {id}"),
        description: String::new(),
        date: date.to_string(),
        time: "10:00".to_string(),
        duration: 60,
        timezone: "UTC".to_string(),
        committees: vec![],
        organizer: "Jane Smith".to_string(),
        attendees: 0,
        attendee_list: vec![],
        video_link: String::new(),
        location: String::new(),
        recurring: None,
        status,
        project: "Kubernetes".to_string(),
        is_live_now: false,
    }
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build the application service the way `main` does.
macro_rules! init_app {
    ($state:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(collab_admin::session_middleware(actix_web::cookie::Key::generate()))
                .app_data($state.clone())
                .configure(collab_admin::handlers::configure)
                .default_service(actix_web::web::to(collab_admin::handlers::not_found)),
        )
        .await
    };
}

/// Pull the CSRF token out of a rendered page.
pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should carry a CSRF token")
}
