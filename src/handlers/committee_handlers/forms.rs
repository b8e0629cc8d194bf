use serde::Deserialize;

use crate::models::committee::{AddMemberRequest, ChangeRoleRequest, MemberRole, RemoveMemberRequest};
use crate::validate;

#[derive(Debug, Default, Deserialize)]
pub struct CommitteesQuery {
    pub q: Option<String>,
    #[serde(rename = "type")]
    pub committee_type: Option<String>,
}

/// Unchecked checkboxes are absent from the body.
fn checked(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

fn parse_role(value: &str) -> Result<MemberRole, String> {
    MemberRole::from_param(value.trim()).ok_or_else(|| format!("Unknown role '{value}'"))
}

#[derive(Debug, Deserialize)]
pub struct AddMemberForm {
    #[serde(default)]
    pub csrf_token: String,
    pub email: String,
    pub role: String,
    pub is_voting: Option<String>,
}

impl AddMemberForm {
    pub fn to_request(&self) -> Result<AddMemberRequest, String> {
        if let Some(err) = validate::validate_email(&self.email) {
            return Err(err);
        }
        Ok(AddMemberRequest {
            email: self.email.trim().to_string(),
            role: parse_role(&self.role)?,
            is_voting: checked(&self.is_voting),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ChangeRoleForm {
    #[serde(default)]
    pub csrf_token: String,
    pub role: String,
    pub is_voting: Option<String>,
}

impl ChangeRoleForm {
    pub fn to_request(&self, member_id: i64) -> Result<ChangeRoleRequest, String> {
        Ok(ChangeRoleRequest {
            member_id,
            new_role: parse_role(&self.role)?,
            is_voting: checked(&self.is_voting),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveMemberForm {
    #[serde(default)]
    pub csrf_token: String,
    pub reason: String,
    pub effective_date: String,
}

impl RemoveMemberForm {
    pub fn to_request(&self, member_id: i64) -> Result<RemoveMemberRequest, String> {
        if let Some(err) = validate::validate_min_len(&self.reason, "reason for removal", 10) {
            return Err(err);
        }
        if let Some(err) = validate::validate_date(&self.effective_date, "an effective date") {
            return Err(err);
        }
        Ok(RemoveMemberRequest {
            member_id,
            reason: self.reason.trim().to_string(),
            effective_date: self.effective_date.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_form_reads_checkbox_and_role() {
        let form = AddMemberForm {
            csrf_token: String::new(),
            email: " carol@example.com ".into(),
            role: "voting-member".into(),
            is_voting: Some("on".into()),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "carol@example.com");
        assert_eq!(request.role, MemberRole::VotingMember);
        assert!(request.is_voting);
    }

    #[test]
    fn add_form_rejects_bad_email_and_role() {
        let mut form = AddMemberForm {
            csrf_token: String::new(),
            email: "not-an-email".into(),
            role: "member".into(),
            is_voting: None,
        };
        assert!(form.to_request().is_err());
        form.email = "dan@example.com".into();
        form.role = "president".into();
        assert_eq!(form.to_request().unwrap_err(), "Unknown role 'president'");
    }

    #[test]
    fn remove_form_requires_reason_and_date() {
        let mut form = RemoveMemberForm {
            csrf_token: String::new(),
            reason: "too short".into(),
            effective_date: "2026-10-16".into(),
        };
        assert!(form.to_request(2).is_err());
        form.reason = "Stepped down to focus on other work".into();
        assert_eq!(form.to_request(2).unwrap().member_id, 2);
        form.effective_date = "soon".into();
        assert!(form.to_request(2).is_err());
    }
}
