use std::io::Write;

use chrono::{Duration, NaiveDate};
use color_eyre::Result;
use log::{debug, info};

use crate::calendar::date::{is_after, is_same_day};
use crate::calendar::{Registry, ReminderId, Store};
use crate::command::Command;
use crate::error::ReminderError;
use crate::theme::Theme;

const HELP: &[&str] = &[
    "a <txt>@<date> : New reminder on <(M)M-(D)D-YYYY>",
    "r <rem-id>: Delete a reminder",
    "vt : Today's reminders",
    "vt+n : Reminders in next <n> days",
    "va : All reminders",
    "q : Quit",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Everything one session needs: the reminders, where they live, and what day it is.
pub struct App {
    registry: Registry,
    store: Store,
    today: NaiveDate,
    theme: Theme,
}

impl App {
    /// Load the store, report bad lines, and rewrite the file at once if any
    /// reminder had already expired.
    pub fn open<W: Write>(store: Store, today: NaiveDate, theme: Theme, out: &mut W) -> Result<Self> {
        writeln!(out, "Current Reminders are stored in {}", store.path().display())?;

        let outcome = store.load(today)?;
        for rejected in &outcome.rejected {
            let msg = format!(
                "Error loading reminder line {} :: {}",
                rejected.line_number, rejected.reason
            );
            writeln!(out, "{}", theme.paint(theme.error, msg))?;
        }

        let app = Self {
            registry: Registry::from_loaded(outcome.reminders),
            store,
            today,
            theme,
        };
        writeln!(out, "Loaded current reminders :: {}", app.registry.len())?;

        if outcome.had_expired {
            info!("Dropping expired reminders from {}", app.store.path().display());
            app.save()?;
        }

        Ok(app)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn prompt(&self) -> String {
        self.theme.paint(self.theme.prompt, "> ")
    }

    /// Parse and run one input line. Only fatal errors are returned.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> Result<Flow> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, line, out),
            Ok(None) => {
                debug!("Ignoring input {:?}", line);
                Ok(Flow::Continue)
            }
            Err(err) if err.is_recoverable() => {
                self.report(line, &err, out)?;
                Ok(Flow::Continue)
            }
            Err(err) => Err(err.into()),
        }
    }

    pub fn execute<W: Write>(&mut self, command: Command, line: &str, out: &mut W) -> Result<Flow> {
        match command {
            Command::Add {
                description,
                due_date,
            } => {
                let id = self.registry.add(description, due_date);
                debug!("Added reminder {}", id);
                self.save()?;
                writeln!(out, "Saved.")?;
            }
            Command::ViewAll => self.view(out, |_| true)?,
            Command::ViewToday => {
                let today = self.today;
                self.view(out, |due| is_same_day(due, today))?;
            }
            Command::ViewUpcoming { days } => match self.window_end(days) {
                Some(end) => self.view(out, |due| !is_after(due, end))?,
                None => {
                    let err = ReminderError::invalid(format!("{} days is out of range", days));
                    self.report(line, &err, out)?;
                }
            },
            Command::Remove { id } => self.remove(id, out)?,
            Command::Help => {
                writeln!(out)?;
                for help in HELP {
                    writeln!(out, "{}", help)?;
                }
            }
            Command::Quit => {
                writeln!(out, "Bye")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn remove<W: Write>(&mut self, id: ReminderId, out: &mut W) -> Result<()> {
        match self.registry.remove(id) {
            Some(removed) => {
                self.save()?;
                writeln!(out, "Reminder :: {} Removed.", removed.description)?;
            }
            None => {
                debug!("Remove of absent reminder {}", id);
                writeln!(out, "No reminder with id {}.", id)?;
            }
        }
        Ok(())
    }

    /// Last day shown by `vt+n`: today plus n+1 days, inclusive.
    fn window_end(&self, days: i64) -> Option<NaiveDate> {
        let span = Duration::try_days(days.checked_add(1)?)?;
        self.today.checked_add_signed(span)
    }

    fn view<W, F>(&self, out: &mut W, predicate: F) -> Result<()>
    where
        W: Write,
        F: Fn(NaiveDate) -> bool,
    {
        let theme = &self.theme;
        writeln!(out)?;
        writeln!(out, "{}", theme.paint(theme.header, "Reminders ....................."))?;
        writeln!(out)?;

        let matches = self.registry.list(predicate);
        if matches.is_empty() {
            writeln!(out, "No reminders.")?;
        }
        for (id, reminder) in matches {
            let date_style = if is_same_day(reminder.due_date, self.today) {
                theme.today
            } else {
                theme.date
            };
            writeln!(
                out,
                "{} {} {}",
                theme.paint(theme.id, format!("{}.", id)),
                reminder.description,
                theme.paint(date_style, format!("[{}]", reminder.due_display())),
            )?;
        }
        Ok(())
    }

    fn report<W: Write>(&self, line: &str, err: &ReminderError, out: &mut W) -> Result<()> {
        let msg = format!("Error in processing {} :: {}", line, err);
        writeln!(out, "{}", self.theme.paint(self.theme.error, msg))?;
        Ok(())
    }

    fn save(&self) -> Result<()> {
        self.store.save_all(self.registry.iter())?;
        Ok(())
    }
}
