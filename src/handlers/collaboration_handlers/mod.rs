pub mod create;
pub mod forms;
pub mod list;

use crate::models::project::ProjectScope;
use crate::store::Store;

/// Project a new meeting is filed under: the selected one, or the first
/// known project while "All Projects" is selected.
pub fn project_for_new_meeting(scope: &ProjectScope, store: &Store) -> String {
    match scope {
        ProjectScope::Named(name) => name.clone(),
        ProjectScope::All => store.projects.first().cloned().unwrap_or_default(),
    }
}

/// Distinct member names across all committees, for the participant picker.
pub fn participant_names(store: &Store) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for member in store.committees.iter().flat_map(|c| &c.members) {
        if !names.contains(&member.name) {
            names.push(member.name.clone());
        }
    }
    names
}
