use once_cell::sync::Lazy;

use crate::core::notification::Notification;

/// The demo feed, in the upstream wire format.
const SEED_JSON: &str = r#"[
  {"id":"n1","app":"Canvas","category":"Education","title":"DSA Assignment Submission","time":"2025-12-24T23:59:00","urgency":true,"sourceLink":"Canvas link"},
  {"id":"new1","app":"Google Meet","category":"Work","title":"Online Hackathon Demo","time":"2025-12-24T15:00:00","urgency":true,"sourceLink":"Join meeting"},
  {"id":"n12","app":"Email","category":"Work","title":"Interview invitation received","time":"2025-12-24T14:30:00","urgency":true,"sourceLink":"Open email"},
  {"id":"n2","app":"Stocks","category":"Finance","title":"Portfolio up 5.2% (+$1,240) today","time":"2025-12-24T07:15:00","urgency":true,"sourceLink":"View portfolio"},
  {"id":"n3","app":"WhatsApp","category":"Family","title":"Mom called twice","time":"2025-12-24T06:50:00","urgency":true,"sourceLink":"Open chat"},
  {"id":"n6","app":"Email","category":"Work","title":"HR: Policy update","time":"2025-12-23T18:45:00","urgency":false,"sourceLink":"Open email"},
  {"id":"n9","app":"WhatsApp","category":"Social","title":"Group chat: Weekend plan","time":"2025-12-22T16:00:00","urgency":false,"sourceLink":"Open chat"}
]"#;

static SEED: Lazy<Vec<Notification>> =
    Lazy::new(|| serde_json::from_str(SEED_JSON).expect("seed dataset is well-formed"));

/// A fresh copy of the seed collection the engine starts from.
pub fn notifications() -> Vec<Notification> {
    SEED.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_parses_with_unique_ids() {
        let seed = notifications();
        assert_eq!(seed.len(), 7);
        for n in &seed {
            assert!(seed.iter().filter(|other| other.id == n.id).count() == 1);
        }
    }

    #[test]
    fn seed_split_matches_expected_feeds() {
        let seed = notifications();
        let priority: Vec<&str> = seed
            .iter()
            .filter(|n| n.is_priority())
            .map(|n| n.id.as_str())
            .collect();
        assert_eq!(priority, vec!["n1", "new1", "n12", "n2", "n3"]);
    }
}
