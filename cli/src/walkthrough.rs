//! Scripted tour of the dashboard.
//!
//! Runs against a throwaway in-memory session so the stored sign-in is not
//! touched.

use std::iter;

use chrono::NaiveDate;

use medidash_contracts::error::MedidashResult;
use medidash_core::SessionManager;
use medidash_forms::{AppointmentDraft, PatientDraft, RecordDraft};
use medidash_router::TomlRouteTable;
use medidash_storage::InMemoryStore;

use crate::{commands, Context};

pub fn run(routes: TomlRouteTable, today: NaiveDate) -> MedidashResult<bool> {
    print_banner();

    let session = SessionManager::new(Box::new(InMemoryStore::new()), Box::new(InMemoryStore::new()));
    let mut ctx = Context {
        session,
        routes,
        today,
    };

    step("1. Anonymous visit to /patients");
    commands::open(&ctx, "/patients")?;

    step("2. Sign in with a wrong password");
    commands::login(&mut ctx, "doctor@example.com", "not-the-password")?;

    step("3. Sign in as the doctor");
    commands::login(&mut ctx, "doctor@example.com", "password")?;
    commands::whoami(&ctx)?;

    step("4. Dashboard");
    commands::open(&ctx, "/")?;

    step("5. Search patients for \"wilson\"");
    commands::patients(&ctx, Some("wilson"), iter::empty())?;

    step("6. Add \"Test Patient\"");
    commands::add_patient(
        &ctx,
        PatientDraft {
            name: "Test Patient".to_string(),
            age: "40".to_string(),
            gender: "Male".to_string(),
            phone: "(555) 000-0000".to_string(),
            email: "test.patient@example.com".to_string(),
            address: "1 Test Way, Anytown".to_string(),
            condition: "Checkup".to_string(),
        },
    )?;

    step("7. Add a patient with the form left blank");
    commands::add_patient(&ctx, PatientDraft::default())?;

    step("8. Follow-up appointments by day");
    commands::appointments(&ctx, None, None, Some("Follow-up".to_string()))?;

    step("9. Schedule without choosing a patient, then for Olivia Martinez");
    commands::schedule(&ctx, AppointmentDraft::new(today))?;
    let mut draft = AppointmentDraft::new(today);
    draft.patient_id = "3".to_string();
    draft.time = "13:30".to_string();
    draft.appointment_type = "Prenatal".to_string();
    commands::schedule(&ctx, draft)?;

    step("10. Upload a record");
    commands::upload_record(
        &ctx,
        RecordDraft {
            description: "Thyroid Panel".to_string(),
            ..RecordDraft::default()
        },
    )?;

    step("11. Emma Wilson's chart");
    commands::open(&ctx, "/patients/1")?;

    step("12. Settings (no such page)");
    commands::open(&ctx, "/settings")?;

    step("13. Sign out, then try /patients again");
    commands::logout(&mut ctx)?;
    commands::open(&ctx, "/patients")?;

    step("14. Continue as a guest");
    commands::guest_enter(&mut ctx)?;
    commands::whoami(&ctx)?;
    commands::open(&ctx, "/medical-records")?;

    println!();
    println!("Walkthrough complete.");
    Ok(true)
}

fn step(title: &str) {
    println!();
    println!("── {} ", title);
    println!();
}

fn print_banner() {
    println!();
    println!("MEDIDASH — Hospital Dashboard");
    println!("Walkthrough");
    println!("=============================");
    println!();
    println!("Every page passes the route gate:");
    println!("  [1] /login and unknown paths are public");
    println!("  [2] Everything else needs a signed-in account or guest mode");
    println!("  [3] Refused requests are redirected to /login");
}
