use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use log::{debug, info, warn};

use super::date::{format_date, is_after, parse_date};
use super::reminder::Reminder;
use crate::error::{ReminderError, Result};

const STORE_DIR: &str = "rm";
const STORE_FILE: &str = "current";

/// Flat-file persistence: one `description<TAB>M-D-YYYY` line per reminder.
///
/// The file is opened and closed inside each call, never held across commands.
pub struct Store {
    path: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedLine {
    pub line_number: usize,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct LoadOutcome {
    pub reminders: Vec<Reminder>,
    pub had_expired: bool,
    pub rejected: Vec<RejectedLine>,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<home>/rm/current`
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ReminderError::HomeDirUnavailable)?;
        Ok(home.join(STORE_DIR).join(STORE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read every reminder, dropping those due before `today`.
    pub fn load(&self, today: NaiveDate) -> Result<LoadOutcome> {
        let file = self.open_or_create()?;
        let reader = BufReader::new(file);
        let mut outcome = LoadOutcome::default();

        for (index, raw) in reader.split(b'\n').enumerate() {
            let mut raw = raw.map_err(|e| ReminderError::storage(&self.path, e))?;
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }

            let parsed = match String::from_utf8(raw) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => parse_line(&line),
                Err(_) => Err("line is not valid UTF-8".to_string()),
            };

            match parsed {
                Ok(reminder) if is_after(today, reminder.due_date) => {
                    outcome.had_expired = true;
                }
                Ok(reminder) => outcome.reminders.push(reminder),
                Err(reason) => {
                    warn!("Skipping line {} of {}: {}", index + 1, self.path.display(), reason);
                    outcome.rejected.push(RejectedLine {
                        line_number: index + 1,
                        reason,
                    });
                }
            }
        }

        info!(
            "Loaded {} reminders from {} (expired dropped: {})",
            outcome.reminders.len(),
            self.path.display(),
            outcome.had_expired
        );
        Ok(outcome)
    }

    /// Overwrite the whole file with `reminders` and sync it before returning.
    pub fn save_all<'a>(&self, reminders: impl IntoIterator<Item = &'a Reminder>) -> Result<()> {
        self.ensure_dir()?;
        let storage_err = |e| ReminderError::storage(&self.path, e);

        let file = File::create(&self.path).map_err(storage_err)?;
        let mut writer = BufWriter::new(file);
        let mut count = 0;
        for reminder in reminders {
            writeln!(writer, "{}", format_line(reminder)).map_err(storage_err)?;
            count += 1;
        }
        let file = writer.into_inner().map_err(|e| storage_err(e.into_error()))?;
        file.sync_all().map_err(storage_err)?;

        debug!("Saved {} reminders to {}", count, self.path.display());
        Ok(())
    }

    fn open_or_create(&self) -> Result<File> {
        self.ensure_dir()?;
        OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)
            .map_err(|e| ReminderError::storage(&self.path, e))
    }

    fn ensure_dir(&self) -> Result<()> {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::create_dir_all(dir).map_err(|e| ReminderError::storage(dir, e))
            }
            _ => Ok(()),
        }
    }
}

fn format_line(reminder: &Reminder) -> String {
    format!("{}\t{}", reminder.description, format_date(reminder.due_date))
}

fn parse_line(line: &str) -> std::result::Result<Reminder, String> {
    let fields: Vec<&str> = line.split('\t').collect();
    let [description, date] = fields.as_slice() else {
        return Err(format!("expected 2 tab-separated fields, found {}", fields.len()));
    };
    let due_date = parse_date(date).map_err(|_| format!("invalid date {:?}", date))?;
    Ok(Reminder::new(*description, due_date))
}
