//! Text presentation of registry results.
//!
//! Every function writes to the supplied writer so the interactive session
//! can be exercised against an in-memory buffer.

use std::io::{self, Write};

use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use vaxreg_core::{
    types::DATE_FORMAT, Appointment, Child, Reminder, Vaccine, VaccinationRecord, VaccineSchedule,
};

#[derive(Tabled)]
struct ChildRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "birthdate")]
    birthdate: String,
    #[tabled(rename = "parent")]
    parent: String,
    #[tabled(rename = "contact")]
    contact: String,
    #[tabled(rename = "appointments")]
    appointments: usize,
}

#[derive(Tabled)]
struct VaccineRow {
    #[tabled(rename = "vaccine")]
    name: &'static str,
    #[tabled(rename = "prevents")]
    diseases: String,
    #[tabled(rename = "from age (months)")]
    recommended_age_months: i32,
}

impl From<&Vaccine> for VaccineRow {
    fn from(v: &Vaccine) -> Self {
        Self {
            name: v.name,
            diseases: v.diseases_prevented.join(", "),
            recommended_age_months: v.recommended_age_months,
        }
    }
}

pub fn menu(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "\n{}", "Options:".bold())?;
    writeln!(out, "1. Register a Child")?;
    writeln!(out, "2. View Vaccine Schedule")?;
    writeln!(out, "3. Schedule Vaccination")?;
    writeln!(out, "4. View All Registered Children")?;
    writeln!(out, "5. View Vaccination Records")?;
    writeln!(out, "6. Exit")?;
    writeln!(out, "7. Send Reminders")
}

pub fn registered(out: &mut impl Write, child: &Child) -> io::Result<()> {
    writeln!(
        out,
        "\n{} {} has been successfully registered.",
        "✓".green(),
        child.name
    )
}

pub fn schedule(out: &mut impl Write, schedule: &VaccineSchedule<'_>) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!(
            "Vaccination Schedule for {} (Age: {} months):",
            schedule.child.name, schedule.age_months
        )
        .as_str()
        .bold()
    )?;
    if schedule.due.is_empty() {
        return writeln!(out, "  (no vaccines due yet)");
    }
    for vaccine in &schedule.due {
        writeln!(out, "  - {vaccine}")?;
    }
    Ok(())
}

pub fn appointment(out: &mut impl Write, appt: &Appointment<'_>) -> io::Result<()> {
    writeln!(
        out,
        "\n{} Vaccination for {} scheduled on {} for {}.",
        "✓".green(),
        appt.record.vaccine.name,
        appt.record.scheduled_date(),
        appt.child.name
    )
}

pub fn children(out: &mut impl Write, children: &[Child]) -> io::Result<()> {
    if children.is_empty() {
        return writeln!(out, "\nNo children registered yet.");
    }
    writeln!(out, "\n{}", "--- Registered Children ---".bold())?;
    let rows: Vec<ChildRow> = children
        .iter()
        .map(|c| ChildRow {
            name: c.name.to_string(),
            birthdate: c.birthdate.format(DATE_FORMAT).to_string(),
            parent: c.parent_name.clone(),
            contact: c.contact.clone(),
            appointments: c.vaccination_records.len(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    writeln!(out, "{table}")
}

pub fn records(
    out: &mut impl Write,
    child_name: &str,
    records: &[VaccinationRecord],
) -> io::Result<()> {
    writeln!(
        out,
        "\n{}",
        format!("Vaccination Records for {child_name}:")
            .as_str()
            .bold()
    )?;
    if records.is_empty() {
        return writeln!(out, "  (no appointments booked)");
    }
    for record in records {
        writeln!(out, "  - {} on {}", record.vaccine.name, record.scheduled_date())?;
    }
    Ok(())
}

pub fn reminders(out: &mut impl Write, reminders: &[Reminder<'_>]) -> io::Result<()> {
    writeln!(out, "\n{}", "--- Vaccination Reminders ---".bold())?;
    if reminders.is_empty() {
        return writeln!(out, "No appointments in the reminder window.");
    }
    for r in reminders {
        writeln!(
            out,
            "Reminder: {}, your child {} has a {} vaccination appointment on {}.",
            r.child.parent_name,
            r.child.name,
            r.vaccine.name,
            r.scheduled_for.format(DATE_FORMAT)
        )?;
    }
    Ok(())
}

pub fn catalog_table(out: &mut impl Write, catalog: &[Vaccine]) -> io::Result<()> {
    let rows: Vec<VaccineRow> = catalog.iter().map(VaccineRow::from).collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    writeln!(out, "{table}")
}

pub fn failure(out: &mut impl Write, context: &str, err: &dyn std::fmt::Display) -> io::Result<()> {
    writeln!(out, "\n{} {context}: {err}", "✗".red())
}

pub fn notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "\n{}", message.yellow())
}
