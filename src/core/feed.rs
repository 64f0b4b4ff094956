use crate::core::notification::Notification;

/// Notifications from one source app, in working-set order.
#[derive(Debug, Clone, PartialEq)]
pub struct AppGroup {
    pub app: String,
    pub items: Vec<Notification>,
}

impl AppGroup {
    pub fn count(&self) -> usize {
        self.items.len()
    }
}

/// The subset that needs attention now, in working-set order.
pub fn priority_feed(items: &[Notification]) -> Vec<Notification> {
    items.iter().filter(|n| n.is_priority()).cloned().collect()
}

/// The complement of the priority feed.
pub fn vault_items(items: &[Notification]) -> Vec<Notification> {
    items.iter().filter(|n| !n.is_priority()).cloned().collect()
}

/// Group notifications by exact `source_app` match.
///
/// Within a group the input order is preserved; groups appear in
/// first-appearance order of each app. Every input record lands in
/// exactly one group.
pub fn group_by_app(items: &[Notification]) -> Vec<AppGroup> {
    let mut groups: Vec<AppGroup> = Vec::new();
    for n in items {
        match groups.iter_mut().find(|g| g.app == n.source_app) {
            Some(group) => group.items.push(n.clone()),
            None => groups.push(AppGroup {
                app: n.source_app.clone(),
                items: vec![n.clone()],
            }),
        }
    }
    groups
}

/// All notifications in chronological order, earliest first.
pub fn agenda(items: &[Notification]) -> Vec<Notification> {
    let mut events: Vec<Notification> = items.to_vec();
    events.sort_by_key(|n| n.timestamp);
    events
}

/// The morning briefing card content. Static placeholder copy; the
/// summary is not computed from the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Briefing {
    pub blocked_count: u32,
    pub headline: &'static str,
    pub summary: &'static str,
}

pub fn briefing() -> Briefing {
    Briefing {
        blocked_count: 42,
        headline: "Good Morning.",
        summary: "Critical: DSA Assignment due tonight and Online Hackathon Demo \
                  at 3:00 PM. Updates: Interview invitation received and Portfolio \
                  is up 5.2%. The rest is low-priority social chatter.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn make(id: &str, app: &str, category: &str, urgent: bool, hour: u32) -> Notification {
        let ts = NaiveDate::from_ymd_opt(2025, 12, 24)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap();
        let mut n = Notification::new(app, category, id, ts);
        n.id = id.to_string();
        n.urgent = urgent;
        n
    }

    #[test]
    fn priority_and_vault_partition_the_input() {
        let items = vec![
            make("a", "Canvas", "Education", false, 9),
            make("b", "Email", "Work", false, 10),
            make("c", "WhatsApp", "Family", true, 11),
        ];
        let priority = priority_feed(&items);
        let vault = vault_items(&items);
        assert_eq!(priority.len() + vault.len(), items.len());
        assert!(priority.iter().all(|n| n.is_priority()));
        assert!(vault.iter().all(|n| !n.is_priority()));
    }

    #[test]
    fn grouping_is_a_partition() {
        let items = vec![
            make("a", "Email", "Work", false, 9),
            make("b", "WhatsApp", "Social", false, 10),
            make("c", "Email", "Work", false, 11),
        ];
        let groups = group_by_app(&items);
        let total: usize = groups.iter().map(AppGroup::count).sum();
        assert_eq!(total, items.len());
        for group in &groups {
            assert!(group.items.iter().all(|n| n.source_app == group.app));
        }
    }

    #[test]
    fn groups_appear_in_first_appearance_order() {
        let items = vec![
            make("a", "Email", "Work", false, 9),
            make("b", "WhatsApp", "Social", false, 10),
            make("c", "Email", "Work", false, 11),
            make("d", "Stocks", "Finance", false, 12),
        ];
        let groups = group_by_app(&items);
        let apps: Vec<&str> = groups.iter().map(|g| g.app.as_str()).collect();
        assert_eq!(apps, vec!["Email", "WhatsApp", "Stocks"]);
        // Input order kept within the Email group.
        let email_ids: Vec<&str> = groups[0].items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(email_ids, vec!["a", "c"]);
    }

    #[test]
    fn grouping_key_is_case_sensitive() {
        let items = vec![
            make("a", "Email", "Work", false, 9),
            make("b", "email", "Work", false, 10),
        ];
        assert_eq!(group_by_app(&items).len(), 2);
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_by_app(&[]).is_empty());
    }

    #[test]
    fn agenda_sorts_ascending_by_timestamp() {
        let items = vec![
            make("late", "Email", "Work", false, 18),
            make("early", "Canvas", "Education", false, 7),
            make("mid", "Stocks", "Finance", false, 12),
        ];
        let events = agenda(&items);
        let ids: Vec<&str> = events.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["early", "mid", "late"]);
    }
}
