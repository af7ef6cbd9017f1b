//! `vaxreg [--today DATE]`: the interactive registry session.
//!
//! One [`Registry`] lives for the duration of the session; everything is
//! lost on exit. End of input behaves like choosing Exit.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::Args;

use vaxreg_core::{types::parse_date, Registry, ScheduleSettings};

use crate::render;

/// Arguments for the interactive session.
#[derive(Args, Debug)]
pub struct MenuArgs {
    /// Pin "today" to midnight of this date (YYYY-MM-DD) instead of the wall clock.
    #[arg(long, value_name = "DATE", value_parser = parse_today)]
    pub today: Option<NaiveDate>,

    /// Days between booking and the appointment.
    #[arg(long, value_name = "DAYS", default_value_t = 7)]
    pub lead_days: i64,

    /// Width in days of the reminder window starting at "now".
    #[arg(long, value_name = "DAYS", default_value_t = 1)]
    pub reminder_window_days: i64,
}

fn parse_today(s: &str) -> std::result::Result<NaiveDate, String> {
    parse_date("--today", s).map_err(|e| e.to_string())
}

impl MenuArgs {
    pub fn run(self) -> Result<()> {
        let clock = match self.today {
            Some(day) => Clock::Fixed(day.and_time(NaiveTime::MIN)),
            None => Clock::System,
        };
        let settings = ScheduleSettings::from_days(self.lead_days, self.reminder_window_days);
        tracing::debug!(?clock, lead_days = self.lead_days, "starting session");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut session = Session::new(
            Registry::with_settings(settings),
            clock,
            stdin.lock(),
            stdout.lock(),
        );
        session.run()
    }
}

// ---------------------------------------------------------------------------
// Clock
// ---------------------------------------------------------------------------

/// Source of "now" for age, booking and reminder calculations.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    System,
    Fixed(NaiveDateTime),
}

impl Clock {
    pub fn now(&self) -> NaiveDateTime {
        match self {
            Clock::System => Local::now().naive_local(),
            Clock::Fixed(at) => *at,
        }
    }
}

// ---------------------------------------------------------------------------
// Menu choices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Register,
    ViewSchedule,
    ScheduleVaccination,
    ListChildren,
    ViewRecords,
    Exit,
    SendReminders,
}

impl FromStr for MenuChoice {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::Register),
            "2" => Ok(Self::ViewSchedule),
            "3" => Ok(Self::ScheduleVaccination),
            "4" => Ok(Self::ListChildren),
            "5" => Ok(Self::ViewRecords),
            "6" => Ok(Self::Exit),
            "7" => Ok(Self::SendReminders),
            other => Err(format!("unknown menu choice '{other}'")),
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// Prompt/answer loop over any line reader and writer.
pub struct Session<R, W> {
    registry: Registry,
    clock: Clock,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(registry: Registry, clock: Clock, input: R, output: W) -> Self {
        Self {
            registry,
            clock,
            input,
            output,
        }
    }

    #[cfg(test)]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "Welcome to the Child Vaccination Management System"
        )
        .context("failed to write to stdout")?;

        loop {
            render::menu(&mut self.output).context("failed to write to stdout")?;
            let Some(answer) = self.prompt("\nEnter your choice (1-7): ")? else {
                break;
            };
            let flow = match answer.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(reason) => {
                    tracing::debug!(%reason, "rejected menu input");
                    render::notice(
                        &mut self.output,
                        "Invalid choice! Please select a valid option.",
                    )?;
                    Flow::Continue
                }
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        writeln!(self.output, "\nExiting the system. Goodbye!")
            .context("failed to write to stdout")?;
        self.output.flush().context("failed to flush stdout")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::Register => self.register(),
            MenuChoice::ViewSchedule => self.view_schedule(),
            MenuChoice::ScheduleVaccination => self.schedule_vaccination(),
            MenuChoice::ListChildren => {
                render::children(&mut self.output, self.registry.children())?;
                Ok(Flow::Continue)
            }
            MenuChoice::ViewRecords => self.view_records(),
            MenuChoice::Exit => Ok(Flow::Quit),
            MenuChoice::SendReminders => {
                let reminders = self.registry.due_reminders(self.clock.now());
                render::reminders(&mut self.output, &reminders)?;
                Ok(Flow::Continue)
            }
        }
    }

    fn register(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter child's name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(raw_birthdate) = self.prompt("Enter birthdate (YYYY-MM-DD): ")? else {
            return Ok(Flow::Quit);
        };
        let birthdate = match parse_date("birthdate", &raw_birthdate) {
            Ok(date) => date,
            Err(err) => {
                render::failure(&mut self.output, "Registration cancelled", &err)?;
                return Ok(Flow::Continue);
            }
        };
        let Some(parent_name) = self.prompt("Enter parent's name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(contact) = self.prompt("Enter contact number: ")? else {
            return Ok(Flow::Quit);
        };

        let child = self.registry.register(name, birthdate, parent_name, contact);
        render::registered(&mut self.output, child)?;
        Ok(Flow::Continue)
    }

    fn view_schedule(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter child's name to view vaccine schedule: ")? else {
            return Ok(Flow::Quit);
        };
        match self.registry.vaccine_schedule(&name, self.clock.now()) {
            Ok(schedule) => render::schedule(&mut self.output, &schedule)?,
            Err(err) => render::failure(&mut self.output, "Cannot show schedule", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn schedule_vaccination(&mut self) -> Result<Flow> {
        let Some(child_name) = self.prompt("Enter child's name to schedule vaccination: ")?
        else {
            return Ok(Flow::Quit);
        };
        let Some(vaccine_name) = self.prompt("Enter vaccine name: ")? else {
            return Ok(Flow::Quit);
        };
        let now = self.clock.now();
        match self
            .registry
            .schedule_vaccination(&child_name, &vaccine_name, now)
        {
            Ok(appt) => render::appointment(&mut self.output, &appt)?,
            Err(err) => render::failure(&mut self.output, "Error scheduling vaccination", &err)?,
        }
        Ok(Flow::Continue)
    }

    fn view_records(&mut self) -> Result<Flow> {
        let Some(name) = self.prompt("Enter child's name to view vaccination records: ")? else {
            return Ok(Flow::Quit);
        };
        let lookup = self
            .registry
            .find_child_by_name(&name)
            .map(|child| (child.name.to_string(), &child.vaccination_records));
        match lookup {
            Some((display_name, records)) => {
                render::records(&mut self.output, &display_name, records)?
            }
            None => {
                let err = vaxreg_core::RegistryError::ChildNotFound { name };
                render::failure(&mut self.output, "Cannot show records", &err)?
            }
        }
        Ok(Flow::Continue)
    }

    /// Write `label`, then read one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}").context("failed to write to stdout")?;
        self.output.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(y: i32, m: u32, d: u32) -> Clock {
        Clock::Fixed(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    fn run_script(script: &str, clock: Clock) -> (String, Registry) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut session = Session::new(Registry::new(), clock, script.as_bytes(), &mut out);
        session.run().expect("session runs");
        let registry = session.registry().clone();
        drop(session);
        (String::from_utf8(out).expect("utf8"), registry)
    }

    #[test]
    fn menu_choice_parses_all_options() {
        let parsed: Vec<MenuChoice> = ["1", "2", "3", "4", "5", "6", "7"]
            .iter()
            .map(|s| s.parse().expect("valid"))
            .collect();
        assert_eq!(
            parsed,
            [
                MenuChoice::Register,
                MenuChoice::ViewSchedule,
                MenuChoice::ScheduleVaccination,
                MenuChoice::ListChildren,
                MenuChoice::ViewRecords,
                MenuChoice::Exit,
                MenuChoice::SendReminders,
            ]
        );
        assert!(" 3 ".parse::<MenuChoice>().is_ok());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = fixed(2024, 1, 1);
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn end_of_input_exits_cleanly() {
        let (out, registry) = run_script("", fixed(2024, 1, 1));
        assert!(out.contains("Welcome"));
        assert!(out.contains("Goodbye"));
        assert!(registry.children().is_empty());
    }

    #[test]
    fn register_then_schedule() {
        let script = "1\nAna\n2023-04-01\nMaria\n555-0100\n3\nana\npolio\n6\n";
        let (out, registry) = run_script(script, fixed(2024, 1, 1));
        assert!(out.contains("Ana has been successfully registered."));
        assert!(out.contains("Vaccination for Polio scheduled on 2024-01-08 for Ana."));
        let records = registry.vaccination_records("Ana").expect("records");
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn malformed_birthdate_does_not_register() {
        let script = "1\nAna\n01/04/2023\n4\n6\n";
        let (out, registry) = run_script(script, fixed(2024, 1, 1));
        assert!(out.contains("Registration cancelled"));
        assert!(out.contains("invalid birthdate '01/04/2023'"));
        assert!(out.contains("No children registered yet."));
        assert!(registry.children().is_empty());
    }

    #[test]
    fn unknown_names_are_reported_and_session_continues() {
        let script = "2\nZed\n3\nZed\nBCG\n5\nZed\n4\n6\n";
        let (out, _) = run_script(script, fixed(2024, 1, 1));
        assert!(out.contains("Cannot show schedule: child with name Zed not found"));
        assert!(out.contains("Error scheduling vaccination: child with name Zed not found"));
        assert!(out.contains("Cannot show records: child with name Zed not found"));
        assert!(out.contains("No children registered yet."));
        assert!(out.contains("Goodbye"));
    }

    #[test]
    fn invalid_choice_reprompts() {
        let (out, _) = run_script("9\n6\n", fixed(2024, 1, 1));
        assert!(out.contains("Invalid choice! Please select a valid option."));
        assert_eq!(out.matches("Options:").count(), 2);
    }

    #[test]
    fn schedule_view_lists_due_vaccines() {
        let script = "1\nAna\n2023-05-01\nMaria\n555\n2\nAna\n6\n";
        let (out, _) = run_script(script, fixed(2024, 1, 1));
        assert!(out.contains("Vaccination Schedule for Ana (Age: 8 months):"));
        assert!(out.contains("  - DTP (Diphtheria, Tetanus, Pertussis; recommended at 2 months)"));
        assert!(!out.contains("Measles"));
    }
}
