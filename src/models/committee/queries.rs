use serde::Serialize;

use crate::store::Store;

use super::types::{Committee, CommitteeType};

pub fn find_all(store: &Store) -> &[Committee] {
    &store.committees
}

pub fn find_by_id(store: &Store, id: i64) -> Option<&Committee> {
    store.committees.iter().find(|c| c.id == id)
}

pub fn find_by_id_mut(store: &mut Store, id: i64) -> Option<&mut Committee> {
    store.committees.iter_mut().find(|c| c.id == id)
}

/// Search box plus type dropdown of the committees page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitteeFilter {
    pub query: String,
    pub committee_type: Option<CommitteeType>,
}

impl CommitteeFilter {
    /// `type_param` of "all", empty or an unknown value means every type.
    pub fn from_params(query: Option<&str>, type_param: Option<&str>) -> Self {
        CommitteeFilter {
            query: query.unwrap_or_default().trim().to_string(),
            committee_type: type_param.and_then(CommitteeType::from_param),
        }
    }

    pub fn matches(&self, committee: &Committee) -> bool {
        let needle = self.query.to_lowercase();
        let matches_search = needle.is_empty()
            || committee.name.to_lowercase().contains(&needle)
            || committee.description.to_lowercase().contains(&needle);
        matches_search && self.committee_type.is_none_or(|t| committee.committee_type == t)
    }

    pub fn apply<'a>(&self, committees: &'a [Committee]) -> Vec<&'a Committee> {
        committees.iter().filter(|c| self.matches(c)).collect()
    }

    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.committee_type.is_some()
    }

    pub fn type_param(&self) -> &'static str {
        self.committee_type.map(|t| t.as_str()).unwrap_or("all")
    }
}

/// Sidebar counters of the committees page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CommitteeOverview {
    pub total_committees: usize,
    pub total_members: usize,
    pub active_committees: usize,
    pub voting_members: usize,
    pub editable_committees: usize,
}

pub fn overview(committees: &[Committee]) -> CommitteeOverview {
    CommitteeOverview {
        total_committees: committees.len(),
        total_members: committees.iter().map(|c| c.members.len()).sum(),
        active_committees: committees.iter().filter(|c| !c.members.is_empty()).count(),
        voting_members: committees.iter().map(Committee::voting_count).sum(),
        editable_committees: committees.iter().filter(|c| c.is_editable).count(),
    }
}
