use askama::Template;

use crate::models::committee::{Committee, CommitteeFilter, CommitteeOverview, CommitteeType, MemberRole};
use super::{PageContext, SelectOption};

#[derive(Template)]
#[template(path = "committees/list.html")]
pub struct CommitteesTemplate<'a> {
    pub ctx: PageContext,
    pub query: String,
    pub type_options: Vec<SelectOption>,
    pub committees: Vec<&'a Committee>,
    pub overview: CommitteeOverview,
    pub roles: Vec<MemberRole>,
    pub today: String,
    pub has_active_filters: bool,
}

impl<'a> CommitteesTemplate<'a> {
    pub fn new(
        ctx: PageContext,
        filter: &CommitteeFilter,
        committees: Vec<&'a Committee>,
        overview: CommitteeOverview,
        today: String,
    ) -> Self {
        let current = filter.type_param();
        let type_options = std::iter::once(SelectOption::new("all", "All Types", current == "all"))
            .chain(
                CommitteeType::ALL
                    .iter()
                    .map(|t| SelectOption::new(t.as_str(), t.label(), t.as_str() == current)),
            )
            .collect();

        Self {
            ctx,
            query: filter.query.clone(),
            type_options,
            committees,
            overview,
            roles: MemberRole::ALL.to_vec(),
            today,
            has_active_filters: filter.is_active(),
        }
    }

    pub fn empty_message(&self) -> &'static str {
        if self.has_active_filters {
            "No committees match your search."
        } else {
            "No committees yet."
        }
    }
}
