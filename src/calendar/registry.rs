use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::reminder::{Reminder, ReminderId};

/// In-memory reminders keyed by session id.
///
/// Ids start at 0 and are never handed out twice in one session, even after
/// the reminder holding one is removed.
#[derive(Debug, Default)]
pub struct Registry {
    reminders: BTreeMap<ReminderId, Reminder>,
    next_id: ReminderId,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from loaded reminders, numbering them densely in order.
    pub fn from_loaded(reminders: impl IntoIterator<Item = Reminder>) -> Self {
        let mut registry = Self::new();
        for reminder in reminders {
            registry.insert(reminder);
        }
        registry
    }

    pub fn add(&mut self, description: impl Into<String>, due_date: NaiveDate) -> ReminderId {
        self.insert(Reminder::new(description, due_date))
    }

    fn insert(&mut self, reminder: Reminder) -> ReminderId {
        let id = self.next_id;
        self.reminders.insert(id, reminder);
        self.next_id += 1;
        id
    }

    /// Remove a reminder. Absent ids are a no-op and return `None`.
    pub fn remove(&mut self, id: ReminderId) -> Option<Reminder> {
        self.reminders.remove(&id)
    }

    /// Reminders whose due date satisfies `predicate`, ascending by id.
    pub fn list<F>(&self, predicate: F) -> Vec<(ReminderId, &Reminder)>
    where
        F: Fn(NaiveDate) -> bool,
    {
        self.reminders
            .iter()
            .filter(|(_, r)| predicate(r.due_date))
            .map(|(id, r)| (*id, r))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reminder> {
        self.reminders.values()
    }

    pub fn len(&self) -> usize {
        self.reminders.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.reminders.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_add_then_list_all() {
        let mut registry = Registry::new();
        let id = registry.add("pay rent", date(2024, 2, 1));

        let all = registry.list(|_| true);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].0, id);
        assert_eq!(all[0].1.description, "pay rent");
        assert_eq!(all[0].1.due_date, date(2024, 2, 1));
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut registry = Registry::new();
        let first = registry.add("a", date(2024, 1, 1));
        let second = registry.add("b", date(2024, 1, 1));
        assert_eq!((first, second), (0, 1));

        assert!(registry.remove(second).is_some());
        let third = registry.add("c", date(2024, 1, 1));
        assert_eq!(third, 2);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = Registry::new();
        assert!(registry.remove(7).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_and_duplicate_descriptions_allowed() {
        let mut registry = Registry::new();
        registry.add("", date(2024, 1, 1));
        registry.add("dup", date(2024, 1, 1));
        registry.add("dup", date(2024, 1, 1));
        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_list_sorts_by_id_not_date() {
        let mut registry = Registry::new();
        registry.add("late", date(2030, 1, 1));
        registry.add("early", date(2020, 1, 1));

        let ids: Vec<_> = registry.list(|_| true).into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![0, 1]);

        let filtered = registry.list(|d| d.year() < 2025);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].1.description, "early");
    }

    #[test]
    fn test_from_loaded_numbers_densely() {
        let registry = Registry::from_loaded(vec![
            Reminder::new("x", date(2024, 5, 5)),
            Reminder::new("y", date(2024, 5, 6)),
        ]);
        let all = registry.list(|_| true);
        assert_eq!((all[0].0, all[0].1.description.as_str()), (0, "x"));
        assert_eq!((all[1].0, all[1].1.description.as_str()), (1, "y"));

        let mut registry = registry;
        assert_eq!(registry.add("z", date(2024, 5, 7)), 2);
    }
}
