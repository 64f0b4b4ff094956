use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categories that surface in the priority feed even without the urgency flag.
pub const PRIORITY_CATEGORIES: [&str; 2] = ["Education", "Finance"];

/// Which feed a notification belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Needs attention now; shown in the Focus Inbox.
    Priority,
    /// Everything else, browsable in the Vault grouped by app.
    Vault,
}

/// A single cross-application notification.
///
/// Immutable once created; the store replaces records wholesale rather
/// than editing them in place. Serde field names match the upstream
/// feed format (`app`, `time`, `urgency`, `sourceLink`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    #[serde(rename = "app")]
    pub source_app: String,
    /// Open set. Known values include Education, Work, Finance,
    /// Family, Health, Social, but anything upstream sends is kept.
    pub category: String,
    pub title: String,
    #[serde(rename = "time")]
    pub timestamp: NaiveDateTime,
    #[serde(rename = "urgency")]
    pub urgent: bool,
    /// Opaque follow-up label ("Open chat", a URI, ...). Never interpreted here.
    #[serde(rename = "sourceLink")]
    pub action_link: String,
}

impl Notification {
    /// Create a record with a freshly minted id, for host-captured
    /// notifications that arrive without one.
    pub fn new(
        source_app: impl Into<String>,
        category: impl Into<String>,
        title: impl Into<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            source_app: source_app.into(),
            category: category.into(),
            title: title.into(),
            timestamp,
            urgent: false,
            action_link: String::new(),
        }
    }

    /// Priority iff flagged urgent upstream or in a priority category.
    /// Pure and stable: the same record always lands in the same bucket.
    pub fn bucket(&self) -> Bucket {
        if self.urgent || PRIORITY_CATEGORIES.contains(&self.category.as_str()) {
            Bucket::Priority
        } else {
            Bucket::Vault
        }
    }

    pub fn is_priority(&self) -> bool {
        self.bucket() == Bucket::Priority
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make(category: &str, urgent: bool) -> Notification {
        let ts = NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        let mut n = Notification::new("Email", category, "Test", ts);
        n.urgent = urgent;
        n
    }

    #[test]
    fn urgent_is_priority_regardless_of_category() {
        assert_eq!(make("Social", true).bucket(), Bucket::Priority);
        assert_eq!(make("Work", true).bucket(), Bucket::Priority);
    }

    #[test]
    fn priority_category_alone_is_sufficient() {
        assert_eq!(make("Education", false).bucket(), Bucket::Priority);
        assert_eq!(make("Finance", false).bucket(), Bucket::Priority);
    }

    #[test]
    fn neither_urgent_nor_priority_category_goes_to_vault() {
        assert_eq!(make("Work", false).bucket(), Bucket::Vault);
        assert_eq!(make("Social", false).bucket(), Bucket::Vault);
        assert_eq!(make("Family", false).bucket(), Bucket::Vault);
    }

    #[test]
    fn category_match_is_case_sensitive() {
        assert_eq!(make("education", false).bucket(), Bucket::Vault);
    }

    #[test]
    fn classification_is_stable() {
        let n = make("Education", false);
        assert_eq!(n.bucket(), n.bucket());
    }

    #[test]
    fn upstream_field_names_roundtrip() {
        let json = r#"{"id":"n1","app":"Canvas","category":"Education","title":"DSA Assignment Submission","time":"2025-12-24T23:59:00","urgency":true,"sourceLink":"Canvas link"}"#;
        let n: Notification = serde_json::from_str(json).unwrap();
        assert_eq!(n.source_app, "Canvas");
        assert!(n.urgent);
        assert_eq!(n.action_link, "Canvas link");

        let back = serde_json::to_string(&n).unwrap();
        assert!(back.contains("\"app\":\"Canvas\""));
        assert!(back.contains("\"urgency\":true"));
    }
}
