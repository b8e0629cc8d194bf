use std::fmt;

use chrono::NaiveDate;

use super::types::{
    AddMemberRequest, ChangeRoleRequest, Committee, CommitteeMember, MemberRole,
    RemoveMemberRequest,
};

/// Why a membership change was refused. The committee is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    DuplicateEmail(String),
    ChairTaken { holder: String },
    MemberNotFound(i64),
    ReadOnly(String),
}

impl MembershipError {
    /// Short heading for the toast shown to the user.
    pub fn title(&self) -> &'static str {
        match self {
            MembershipError::DuplicateEmail(_) => "Member already exists",
            MembershipError::ChairTaken { .. } => "Cannot assign chair role",
            MembershipError::MemberNotFound(_) => "Member not found",
            MembershipError::ReadOnly(_) => "Committee is staff-managed",
        }
    }
}

impl fmt::Display for MembershipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MembershipError::DuplicateEmail(email) => {
                write!(f, "{email} is already a member of this committee.")
            }
            MembershipError::ChairTaken { holder } => write!(
                f,
                "{holder} is already the chair of this committee. Please change their role first."
            ),
            MembershipError::MemberNotFound(id) => write!(f, "No member with id {id} in this committee."),
            MembershipError::ReadOnly(name) => {
                write!(f, "{name} is managed by staff and cannot be edited here.")
            }
        }
    }
}

fn ensure_editable(committee: &Committee) -> Result<(), MembershipError> {
    if committee.is_editable {
        Ok(())
    } else {
        Err(MembershipError::ReadOnly(committee.name.clone()))
    }
}

/// Derive a display name from an address: "bob.smith@x" becomes "Bob Smith".
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    let mut name = String::with_capacity(local.len());
    let mut at_word_start = true;
    for ch in local.chars() {
        let ch = if ch == '.' || ch == '_' { ' ' } else { ch };
        if at_word_start && ch.is_alphanumeric() {
            name.extend(ch.to_uppercase());
        } else {
            name.push(ch);
        }
        at_word_start = !(ch.is_alphanumeric() || ch == '_');
    }
    name
}

/// Append a member unless the email is already present.
pub fn add_member<'c>(
    committee: &'c mut Committee,
    request: &AddMemberRequest,
    member_id: i64,
    today: NaiveDate,
) -> Result<&'c CommitteeMember, MembershipError> {
    ensure_editable(committee)?;
    let email = request.email.trim();
    if committee.members.iter().any(|m| m.has_email(email)) {
        return Err(MembershipError::DuplicateEmail(email.to_string()));
    }

    let index = committee.members.len();
    committee.members.push(CommitteeMember {
        id: member_id,
        name: display_name_from_email(email),
        email: email.to_string(),
        role: request.role,
        join_date: today.format("%Y-%m-%d").to_string(),
        is_voting: request.is_voting,
        avatar: None,
    });
    Ok(&committee.members[index])
}

/// Overwrite role and voting flag. A second chair is refused.
pub fn change_role<'c>(
    committee: &'c mut Committee,
    request: &ChangeRoleRequest,
) -> Result<&'c CommitteeMember, MembershipError> {
    ensure_editable(committee)?;
    let index = committee
        .members
        .iter()
        .position(|m| m.id == request.member_id)
        .ok_or(MembershipError::MemberNotFound(request.member_id))?;

    if request.new_role == MemberRole::Chair {
        if let Some(holder) = committee
            .members
            .iter()
            .find(|m| m.is_chair() && m.id != request.member_id)
        {
            return Err(MembershipError::ChairTaken { holder: holder.name.clone() });
        }
    }

    let member = &mut committee.members[index];
    member.role = request.new_role;
    member.is_voting = request.is_voting;
    Ok(&*member)
}

/// Splice the member out and hand it back for the audit trail.
pub fn remove_member(
    committee: &mut Committee,
    request: &RemoveMemberRequest,
) -> Result<CommitteeMember, MembershipError> {
    ensure_editable(committee)?;
    let index = committee
        .members
        .iter()
        .position(|m| m.id == request.member_id)
        .ok_or(MembershipError::MemberNotFound(request.member_id))?;
    Ok(committee.members.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_splits_on_dots_and_underscores() {
        assert_eq!(display_name_from_email("bob.smith@example.com"), "Bob Smith");
        assert_eq!(display_name_from_email("mary_jane.watson@x.org"), "Mary Jane Watson");
        assert_eq!(display_name_from_email("o-neil@x.org"), "O-Neil");
        assert_eq!(display_name_from_email("alice"), "Alice");
        assert_eq!(display_name_from_email("jb2@x.org"), "Jb2");
    }

    #[test]
    fn error_messages_name_the_conflict() {
        let err = MembershipError::ChairTaken { holder: "Alice Johnson".into() };
        assert_eq!(err.title(), "Cannot assign chair role");
        assert!(err.to_string().starts_with("Alice Johnson is already the chair"));
        assert_eq!(MembershipError::DuplicateEmail("a@b.c".into()).title(), "Member already exists");
    }
}
