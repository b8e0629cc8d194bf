use chrono::Local;
use serde::Serialize;
use serde_json::Value;

/// One recorded mutation. `details` carries the action-specific payload,
/// e.g. the removal reason and effective date.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub id: i64,
    pub action: String,
    pub target_type: String,
    pub target_id: i64,
    pub summary: String,
    pub details: Value,
    pub created_at: String,
}

/// Append-only, session-lifetime trail of committee and meeting changes.
#[derive(Debug, Default)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Record an action. The `summary` key of `details`, when present,
    /// becomes the entry summary.
    pub fn log(&mut self, action: &str, target_type: &str, target_id: i64, details: Value) -> i64 {
        let id = self.entries.last().map_or(1, |e| e.id + 1);
        let summary = details
            .get("summary")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        log::info!("audit {action} {target_type}#{target_id}: {details}");

        self.entries.push(AuditEntry {
            id,
            action: action.to_string(),
            target_type: target_type.to_string(),
            target_id,
            summary,
            details,
            created_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        });
        id
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> Vec<&AuditEntry> {
        self.entries.iter().rev().take(limit).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_assigns_sequential_ids_and_summary() {
        let mut audit = AuditLog::default();
        let first = audit.log("committee.member_added", "committee", 1, json!({"summary": "Added a@b.c"}));
        let second = audit.log("committee.member_removed", "committee", 1, json!({"reason": "left"}));

        assert_eq!((first, second), (1, 2));
        assert_eq!(audit.entries()[0].summary, "Added a@b.c");
        assert_eq!(audit.entries()[1].summary, "");
        assert_eq!(audit.recent(1)[0].action, "committee.member_removed");
    }
}
