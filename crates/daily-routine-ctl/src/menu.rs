// Interactive text menu.
//
// The menu only gathers field text and reports results. Parsing lives in
// daily-routine-common and every write goes through ActivityStore.

use anyhow::Result;
use daily_routine_common::{parse_date, parse_role_choice, parse_time, render_table, Role};
use daily_routine_common::{Activity, ActivityFields};
use daily_routine_db::{ActivityStore, DbError};
use std::io::{BufRead, Write};
use tracing::error;

pub struct Console<R, W, E> {
    input: R,
    out: W,
    err: E,
}

enum Choice {
    Add,
    View,
    Update,
    Delete,
    Exit,
    Invalid,
}

impl Choice {
    fn parse(line: &str) -> Self {
        match line.trim().parse::<i64>() {
            Ok(1) => Choice::Add,
            Ok(2) => Choice::View,
            Ok(3) => Choice::Update,
            Ok(4) => Choice::Delete,
            Ok(5) => Choice::Exit,
            _ => Choice::Invalid,
        }
    }
}

impl<R: BufRead, W: Write, E: Write> Console<R, W, E> {
    pub fn new(input: R, out: W, err: E) -> Self {
        Self { input, out, err }
    }

    /// Run until the user picks Exit or input ends.
    pub async fn run(&mut self, store: &ActivityStore) -> Result<()> {
        loop {
            writeln!(self.out, "\n=== Daily Routine Manager ===")?;
            writeln!(self.out, "1. Add Activity")?;
            writeln!(self.out, "2. View Activities")?;
            writeln!(self.out, "3. Update Activity")?;
            writeln!(self.out, "4. Delete Activity")?;
            writeln!(self.out, "5. Exit")?;

            let Some(line) = self.prompt("Choose an option: ")? else {
                writeln!(self.out)?;
                break;
            };

            match Choice::parse(&line) {
                Choice::Add => self.add(store).await?,
                Choice::View => self.view(store).await?,
                Choice::Update => self.update(store).await?,
                Choice::Delete => self.delete(store).await?,
                Choice::Exit => break,
                Choice::Invalid => writeln!(self.out, "Invalid choice. Try again.")?,
            }
        }

        writeln!(self.out, "Exiting program...")?;
        Ok(())
    }

    async fn add(&mut self, store: &ActivityStore) -> Result<()> {
        let Some(id) = self.prompt("Enter ID: ")? else { return Ok(()) };
        let Some(fields) = self.read_fields("")? else { return Ok(()) };

        match store.create(&Activity::new(id, fields)).await {
            Ok(_) => writeln!(self.out, "Activity added successfully.")?,
            Err(e) => self.report_failure("add", &e)?,
        }
        Ok(())
    }

    async fn view(&mut self, store: &ActivityStore) -> Result<()> {
        match store.list().await {
            Ok(activities) => write!(self.out, "{}", render_table(&activities))?,
            Err(e) => {
                if e.is_connectivity() {
                    error!("Lost database session: {}", e);
                }
                writeln!(self.err, "Failed to retrieve activities: {}", e)?;
            }
        }
        Ok(())
    }

    async fn update(&mut self, store: &ActivityStore) -> Result<()> {
        let Some(id) = self.prompt("Enter ID to update: ")? else { return Ok(()) };
        let Some(fields) = self.read_fields("new ")? else { return Ok(()) };

        // A missing id still reports success; the store logs the zero-row update.
        match store.update(&id, &fields).await {
            Ok(_) => writeln!(self.out, "Activity updated successfully.")?,
            Err(e) => self.report_failure("update", &e)?,
        }
        Ok(())
    }

    async fn delete(&mut self, store: &ActivityStore) -> Result<()> {
        let Some(id) = self.prompt("Enter ID to delete: ")? else { return Ok(()) };

        match store.delete(&id).await {
            Ok(_) => writeln!(self.out, "Activity deleted successfully.")?,
            Err(e) => self.report_failure("delete", &e)?,
        }
        Ok(())
    }

    /// Prompt for everything but the id. Returns `None` when a value is
    /// rejected (after printing why) or input ends.
    fn read_fields(&mut self, qualifier: &str) -> Result<Option<ActivityFields>> {
        let Some(name) = self.prompt(&format!("Enter {}name: ", qualifier))? else {
            return Ok(None);
        };
        let Some(description) = self.prompt(&format!("Enter {}description: ", qualifier))? else {
            return Ok(None);
        };

        let Some(date_text) = self.prompt(&format!("Enter {}date (yyyy-MM-dd): ", qualifier))?
        else {
            return Ok(None);
        };
        let date = match parse_date(&date_text) {
            Ok(date) => date,
            Err(e) => return self.reject(e),
        };

        let Some(start_text) = self.prompt(&format!("Enter {}start time (HH:mm): ", qualifier))?
        else {
            return Ok(None);
        };
        let start_time = match parse_time(&start_text) {
            Ok(time) => time,
            Err(e) => return self.reject(e),
        };

        let Some(end_text) = self.prompt(&format!("Enter {}end time (HH:mm): ", qualifier))? else {
            return Ok(None);
        };
        let end_time = match parse_time(&end_text) {
            Ok(time) => time,
            Err(e) => return self.reject(e),
        };

        writeln!(self.out, "Select Role:")?;
        for role in Role::ALL {
            writeln!(self.out, "{}. {}", role.choice(), role.label())?;
        }
        let Some(role_text) = self.prompt("Enter your choice: ")? else { return Ok(None) };
        let role = match parse_role_choice(&role_text) {
            Ok(role) => role,
            Err(e) => return self.reject(e),
        };

        Ok(Some(ActivityFields { name, description, date, start_time, end_time, role }))
    }

    fn reject(&mut self, e: daily_routine_common::Error) -> Result<Option<ActivityFields>> {
        writeln!(self.err, "{}", e)?;
        Ok(None)
    }

    fn report_failure(&mut self, verb: &str, e: &DbError) -> Result<()> {
        if e.is_connectivity() {
            error!("Lost database session: {}", e);
        }
        writeln!(self.err, "Failed to {} activity: {}", verb, e)?;
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }
}
