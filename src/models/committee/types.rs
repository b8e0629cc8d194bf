use serde::{Deserialize, Serialize};

use crate::models::meeting::initials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitteeType {
    Technical,
    Governance,
    Outreach,
    Finance,
}

impl CommitteeType {
    pub const ALL: [CommitteeType; 4] = [
        CommitteeType::Technical,
        CommitteeType::Governance,
        CommitteeType::Outreach,
        CommitteeType::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommitteeType::Technical => "technical",
            CommitteeType::Governance => "governance",
            CommitteeType::Outreach => "outreach",
            CommitteeType::Finance => "finance",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CommitteeType::Technical => "Technical",
            CommitteeType::Governance => "Governance",
            CommitteeType::Outreach => "Outreach",
            CommitteeType::Finance => "Finance",
        }
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MemberRole {
    Chair,
    Secretary,
    Member,
    VotingMember,
}

impl MemberRole {
    /// Order used by the role pickers.
    pub const ALL: [MemberRole; 4] = [
        MemberRole::Member,
        MemberRole::VotingMember,
        MemberRole::Secretary,
        MemberRole::Chair,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Chair => "chair",
            MemberRole::Secretary => "secretary",
            MemberRole::Member => "member",
            MemberRole::VotingMember => "voting-member",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Chair => "Chair",
            MemberRole::Secretary => "Secretary",
            MemberRole::Member => "Member",
            MemberRole::VotingMember => "Voting Member",
        }
    }

    /// Lowercase phrase for messages, e.g. "voting member".
    pub fn phrase(&self) -> String {
        self.as_str().replace('-', " ")
    }

    pub fn from_param(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitteeMember {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub join_date: String,
    pub is_voting: bool,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl CommitteeMember {
    pub fn initials(&self) -> String {
        initials(&self.name)
    }

    pub fn is_chair(&self) -> bool {
        self.role == MemberRole::Chair
    }

    /// Exact match on the stored address.
    pub fn has_email(&self, email: &str) -> bool {
        self.email == email
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Committee {
    pub id: i64,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub committee_type: CommitteeType,
    /// False for staff-managed committees; member changes are not offered.
    pub is_editable: bool,
    #[serde(default)]
    pub members: Vec<CommitteeMember>,
    pub created_at: String,
    #[serde(default)]
    pub meeting_schedule: Option<String>,
}

impl Committee {
    pub fn chair(&self) -> Option<&CommitteeMember> {
        self.members.iter().find(|m| m.is_chair())
    }

    pub fn find_member(&self, member_id: i64) -> Option<&CommitteeMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn voting_count(&self) -> usize {
        self.members.iter().filter(|m| m.is_voting).count()
    }

    pub fn schedule_label(&self) -> &str {
        self.meeting_schedule.as_deref().unwrap_or("")
    }
}

/// Add-member dialog payload.
#[derive(Debug, Clone)]
pub struct AddMemberRequest {
    pub email: String,
    pub role: MemberRole,
    pub is_voting: bool,
}

/// Change-role dialog payload.
#[derive(Debug, Clone)]
pub struct ChangeRoleRequest {
    pub member_id: i64,
    pub new_role: MemberRole,
    pub is_voting: bool,
}

/// Remove-member dialog payload. Reason and date are recorded, not checked.
#[derive(Debug, Clone)]
pub struct RemoveMemberRequest {
    pub member_id: i64,
    pub reason: String,
    pub effective_date: String,
}
