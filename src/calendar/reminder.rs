use chrono::NaiveDate;

use super::date::format_date;

pub type ReminderId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub description: String,
    pub due_date: NaiveDate,
}

impl Reminder {
    pub fn new(description: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            description: description.into(),
            due_date,
        }
    }

    pub fn due_display(&self) -> String {
        format_date(self.due_date)
    }
}
