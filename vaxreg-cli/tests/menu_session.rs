//! End-to-end runs of the `vaxreg` binary with scripted stdin.
//!
//! Every session pins `--today` so booking and reminder dates are stable.

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn vaxreg_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vaxreg"));
    cmd.env_remove("RUST_LOG").arg("--no-color");
    cmd
}

fn session(today: &str, script: &str) -> assert_cmd::assert::Assert {
    vaxreg_cmd()
        .args(["--today", today])
        .write_stdin(script.to_owned())
        .assert()
}

const REGISTER_ANA: &str = "1\nAna\n2023-04-01\nMaria\n555-0100\n";

// ---------------------------------------------------------------------------
// 1. Menu flow
// ---------------------------------------------------------------------------

#[test]
fn exit_prints_goodbye() {
    session("2024-01-01", "6\n")
        .success()
        .stdout(contains("Welcome to the Child Vaccination Management System"))
        .stdout(contains("7. Send Reminders"))
        .stdout(contains("Exiting the system. Goodbye!"));
}

#[test]
fn empty_registry_lists_no_children() {
    session("2024-01-01", "4\n6\n")
        .success()
        .stdout(contains("No children registered yet."));
}

#[test]
fn registered_child_appears_in_listing() {
    let script = format!("{REGISTER_ANA}4\n6\n");
    session("2024-01-01", &script)
        .success()
        .stdout(contains("Ana has been successfully registered."))
        .stdout(contains("--- Registered Children ---"))
        .stdout(contains("2023-04-01"))
        .stdout(contains("Maria"))
        .stdout(contains("555-0100"));
}

#[test]
fn schedule_view_at_nine_months_includes_measles() {
    let script = format!("{REGISTER_ANA}2\nana\n6\n");
    session("2024-01-01", &script)
        .success()
        .stdout(contains("Vaccination Schedule for Ana (Age: 9 months):"))
        .stdout(contains("  - BCG (Tuberculosis; recommended at 0 months)"))
        .stdout(contains("  - Measles (Measles; recommended at 9 months)"));
}

// ---------------------------------------------------------------------------
// 2. Booking and records
// ---------------------------------------------------------------------------

#[test]
fn booking_lands_one_week_out() {
    let script = format!("{REGISTER_ANA}3\nANA\npolio\n5\nana\n6\n");
    session("2024-01-01", &script)
        .success()
        .stdout(contains("Vaccination for Polio scheduled on 2024-01-08 for Ana."))
        .stdout(contains("Vaccination Records for Ana:"))
        .stdout(contains("  - Polio on 2024-01-08"));
}

#[test]
fn lead_days_flag_changes_booking_date() {
    let script = format!("{REGISTER_ANA}3\nAna\nBCG\n6\n");
    vaxreg_cmd()
        .args(["--today", "2024-01-01", "--lead-days", "3"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains("scheduled on 2024-01-04 for Ana."));
}

#[test]
fn unknown_vaccine_is_reported_and_nothing_is_booked() {
    let script = format!("{REGISTER_ANA}3\nAna\nRabies\n5\nAna\n6\n");
    session("2024-01-01", &script)
        .success()
        .stdout(contains("Error scheduling vaccination: vaccine Rabies not found in catalog"))
        .stdout(contains("(no appointments booked)"));
}

#[test]
fn malformed_birthdate_returns_to_menu() {
    session("2024-01-01", "1\nAna\nyesterday\n4\n6\n")
        .success()
        .stdout(contains("invalid birthdate 'yesterday'"))
        .stdout(contains("No children registered yet."))
        .stdout(contains("Goodbye"));
}

// ---------------------------------------------------------------------------
// 3. Reminders
// ---------------------------------------------------------------------------

#[test]
fn reminders_are_empty_on_booking_day() {
    let script = format!("{REGISTER_ANA}3\nAna\nDTP\n7\n6\n");
    session("2024-01-01", &script)
        .success()
        .stdout(contains("--- Vaccination Reminders ---"))
        .stdout(contains("No appointments in the reminder window."));
}

#[test]
fn reminders_fire_on_appointment_day() {
    // With a zero-day lead the appointment is "now", the start of the window.
    let script = format!("{REGISTER_ANA}3\nAna\nDTP\n7\n6\n");
    vaxreg_cmd()
        .args(["--today", "2024-01-08", "--lead-days", "0"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(contains(
            "Reminder: Maria, your child Ana has a DTP vaccination appointment on 2024-01-08.",
        ));
}

// ---------------------------------------------------------------------------
// 4. Catalog and argument handling
// ---------------------------------------------------------------------------

#[test]
fn catalog_table_lists_all_vaccines() {
    let mut cmd = vaxreg_cmd();
    cmd.arg("catalog").assert().success().stdout(
        contains("BCG")
            .and(contains("Hepatitis B"))
            .and(contains("Diphtheria, Tetanus, Pertussis"))
            .and(contains("Polio"))
            .and(contains("Measles")),
    );
}

#[test]
fn catalog_json_is_parseable() {
    let output = vaxreg_cmd()
        .args(["catalog", "--json"])
        .output()
        .expect("run vaxreg");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    let entries = value.as_array().expect("array");
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[4]["name"], "Measles");
    assert_eq!(entries[4]["recommended_age_months"], 9);
    assert_eq!(entries[2]["diseases_prevented"][1], "Tetanus");
}

#[test]
fn malformed_today_flag_is_rejected() {
    vaxreg_cmd()
        .args(["--today", "01-01-2024"])
        .assert()
        .failure()
        .stderr(contains("invalid --today '01-01-2024'"));
}
