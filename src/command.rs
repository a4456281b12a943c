use chrono::NaiveDate;

use crate::calendar::date::parse_date;
use crate::calendar::ReminderId;
use crate::error::{ReminderError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `a <text>@<M-D-YYYY>`
    Add { description: String, due_date: NaiveDate },
    /// `va`
    ViewAll,
    /// `vt`
    ViewToday,
    /// `vt+<n>`
    ViewUpcoming { days: i64 },
    /// `r<id>`
    Remove { id: ReminderId },
    Help,
    Quit,
}

impl Command {
    /// Classify one input line (terminator already stripped).
    ///
    /// Unrecognized lines yield `Ok(None)` and are meant to be ignored.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        if let Some(rest) = line.strip_prefix("a ") {
            return parse_add(rest).map(Some);
        }

        match line {
            "va" => return Ok(Some(Command::ViewAll)),
            "vt" => return Ok(Some(Command::ViewToday)),
            "h" => return Ok(Some(Command::Help)),
            "q" => return Ok(Some(Command::Quit)),
            _ => {}
        }

        if let Some(days) = line.strip_prefix("vt+") {
            let days = days
                .parse::<i64>()
                .map_err(|_| ReminderError::invalid(format!("{} is not a number of days", days)))?;
            return Ok(Some(Command::ViewUpcoming { days }));
        }

        if let Some(rest) = line.strip_prefix('r') {
            return parse_remove(rest).map(Some);
        }

        Ok(None)
    }
}

fn parse_add(rest: &str) -> Result<Command> {
    let parts: Vec<&str> = rest.split('@').collect();
    let [description, date] = parts.as_slice() else {
        return Err(ReminderError::invalid("expected exactly one @ before the date"));
    };
    let due_date = parse_date(date)?;
    Ok(Command::Add {
        description: description.to_string(),
        due_date,
    })
}

/// The id is the digit run right after `r`; anything after it is ignored.
fn parse_remove(rest: &str) -> Result<Command> {
    let end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return Err(ReminderError::invalid("expected r<rem-id>"));
    }
    let id = digits
        .parse::<ReminderId>()
        .map_err(|_| ReminderError::invalid(format!("{} is not a reminder id", digits)))?;
    Ok(Command::Remove { id })
}
