use serde::Serialize;

/// Label of the project picker entry that removes the project constraint.
pub const ALL_PROJECTS: &str = "All Projects";

/// Which project the current session is looking at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum ProjectScope {
    #[default]
    All,
    Named(String),
}

impl ProjectScope {
    /// Parse a picker value. Empty input and the "All Projects" sentinel both
    /// mean no constraint.
    pub fn from_name(name: &str) -> Self {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed == ALL_PROJECTS {
            ProjectScope::All
        } else {
            ProjectScope::Named(trimmed.to_string())
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ProjectScope::All => ALL_PROJECTS,
            ProjectScope::Named(name) => name,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, ProjectScope::All)
    }

    pub fn matches(&self, project: &str) -> bool {
        match self {
            ProjectScope::All => true,
            ProjectScope::Named(name) => name == project,
        }
    }
}
