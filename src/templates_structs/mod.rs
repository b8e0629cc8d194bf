// Template context structures for Askama templates, organized by view.
// All types are re-exported: `use collab_admin::templates_structs::*`

use actix_session::Session;

use crate::config::AppConfig;
use crate::models::project::ALL_PROJECTS;
use crate::session::{self, csrf, Toast};
use crate::store::Store;

/// Common context shared by all pages.
/// Templates access these as `ctx.app_name`, `ctx.toast`, etc.
pub struct PageContext {
    pub app_name: String,
    pub current_path: String,
    pub toast: Option<Toast>,
    pub csrf_token: String,
    pub selected_project: String,
    pub project_options: Vec<SelectOption>,
}

impl PageContext {
    pub fn build(session: &Session, store: &Store, config: &AppConfig, current_path: &str) -> Self {
        let selected = session::selected_project(session);
        let project_options = std::iter::once(ALL_PROJECTS.to_string())
            .chain(store.projects.iter().cloned())
            .map(|name| {
                let is_selected = name == selected.name();
                SelectOption::new(name.clone(), name, is_selected)
            })
            .collect();

        Self {
            app_name: config.app_name.clone(),
            current_path: current_path.to_string(),
            toast: session::take_toast(session),
            csrf_token: csrf::get_or_create_token(session),
            selected_project: selected.name().to_string(),
            project_options,
        }
    }

    pub fn is_active(&self, path: &str) -> bool {
        self.current_path == path
    }
}

/// One `<option>` with its selection state precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self { value: value.into(), label: label.into(), selected }
    }

    /// Options for a dropdown whose first entry is the "no constraint" value.
    pub fn with_all(all_label: &str, all_value: &str, values: &[String], current: &str) -> Vec<Self> {
        std::iter::once(Self::new(all_value, all_label, current == all_value || current.is_empty()))
            .chain(values.iter().map(|v| Self::new(v.clone(), v.clone(), v == current)))
            .collect()
    }
}

mod committee;
mod meeting;

pub use committee::*;
pub use meeting::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_all_selects_the_all_entry_for_empty_values() {
        let values = vec!["TSC".to_string(), "Outreach".to_string()];
        let options = SelectOption::with_all("All Committees", "all", &values, "");
        assert_eq!(options.len(), 3);
        assert!(options[0].selected);
        assert!(!options[1].selected);

        let options = SelectOption::with_all("All Committees", "all", &values, "Outreach");
        assert!(!options[0].selected);
        assert!(options[2].selected);
    }
}
