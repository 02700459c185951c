//! One function per subcommand.
//!
//! Every page command passes the router's gate first, exactly as following a
//! link in the dashboard would. Output is plain text on stdout; refusals go
//! to stderr.

use chrono::NaiveDate;
use tracing::debug;

use medidash_clinic::{
    pages::{DashboardPage, PatientDetailsPage},
    shell::{self, active_item},
    Clinic,
};
use medidash_contracts::{
    appointment::{Appointment, MedicalRecord},
    error::{MedidashError, MedidashResult},
    navigation::{Navigation, View},
    patient::Patient,
};
use medidash_core::{
    fields::{PatientField, RecordField},
    grouping::DateGroup,
    session::demo_emails,
    traits::RouteResolver,
};
use medidash_forms::{AppointmentDraft, PatientDraft, RecordDraft};

use crate::Context;

// ── Session ───────────────────────────────────────────────────────────────────

pub fn login(ctx: &mut Context, email: &str, password: &str) -> MedidashResult<bool> {
    if ctx.session.login(email, password)? {
        println!("Signed in as {}.", ctx.session.display().name);
        Ok(true)
    } else {
        eprintln!("Invalid email or password.");
        Ok(false)
    }
}

pub fn logout(ctx: &mut Context) -> MedidashResult<bool> {
    let next = shell::sign_out(&mut ctx.session, &ctx.routes)?;
    println!("Signed out. Next: {}", next);
    Ok(true)
}

pub fn guest_enter(ctx: &mut Context) -> MedidashResult<bool> {
    ctx.session.guest_enter()?;
    println!("Guest mode on.");
    Ok(true)
}

pub fn guest_exit(ctx: &mut Context) -> MedidashResult<bool> {
    ctx.session.guest_exit()?;
    println!("Guest mode off.");
    Ok(true)
}

pub fn whoami(ctx: &Context) -> MedidashResult<bool> {
    let display = ctx.session.display();
    if display.name.is_empty() {
        println!("Not signed in.");
    } else {
        println!("[{}] {} ({})", display.initial, display.name, display.role);
    }
    Ok(true)
}

// ── Navigation ────────────────────────────────────────────────────────────────

/// Resolve `path` through the gate. Prints the redirect and returns `None`
/// when the page is refused.
fn enter(ctx: &Context, path: &str) -> MedidashResult<Option<Navigation>> {
    let nav = ctx.routes.resolve(&ctx.session.navigation_request(path))?;
    if let Navigation::Redirect { to } = &nav {
        eprintln!("{} requires signing in or guest mode; redirected to {}.", path, to);
        return Ok(None);
    }
    Ok(Some(nav))
}

pub fn open(ctx: &Context, path: &str) -> MedidashResult<bool> {
    let Some(nav) = enter(ctx, path)? else {
        return Ok(false);
    };
    let Some(view) = nav.view() else {
        return Ok(false);
    };
    debug!(path, view = ?view, "opened");

    if view != View::Login && view != View::NotFound {
        let display = ctx.session.display();
        let section = active_item(path).map(|i| i.label).unwrap_or("");
        println!("{} | {} ({}) | {}", view.title(), display.name, display.role, section);
        println!();
    }

    let clinic = Clinic::load()?;
    match view {
        View::Login => {
            println!("Sign in to MEDIDASH");
            println!("Demo accounts (password \"password\"):");
            for email in demo_emails() {
                println!("  {}", email);
            }
            println!("Or run `medidash guest enter`.");
        }
        View::Dashboard => print_dashboard(&clinic.dashboard(&ctx.session.display())),
        View::Patients => print_patients(&clinic.patients.visible(), &clinic.patients.summary()),
        View::PatientDetails => {
            let id = nav.param("id").unwrap_or_default();
            match clinic.patient_details(id)? {
                Some(details) => print_details(&details),
                None => print_not_found(),
            }
        }
        View::Appointments => print_groups(&clinic.appointments.grouped()),
        View::MedicalRecords => print_records(&clinic.records.visible()),
        View::NotFound => print_not_found(),
    }
    Ok(true)
}

// ── Listings ──────────────────────────────────────────────────────────────────

pub fn patients(
    ctx: &Context,
    search: Option<&str>,
    sort: impl Iterator<Item = PatientField>,
) -> MedidashResult<bool> {
    if enter(ctx, "/patients")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    if let Some(s) = search {
        clinic.patients.set_search(s);
    }
    for field in sort {
        clinic.patients.sort_by(field);
    }
    print_patients(&clinic.patients.visible(), &clinic.patients.summary());
    Ok(true)
}

pub fn appointments(
    ctx: &Context,
    search: Option<&str>,
    date: Option<NaiveDate>,
    appointment_type: Option<String>,
) -> MedidashResult<bool> {
    if enter(ctx, "/appointments")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    if let Some(s) = search {
        clinic.appointments.set_search(s);
    }
    clinic.appointments.set_date_filter(date);
    clinic.appointments.set_type_filter(appointment_type);
    print_groups(&clinic.appointments.grouped());
    Ok(true)
}

pub fn records(
    ctx: &Context,
    search: Option<&str>,
    record_type: Option<String>,
    sort: impl Iterator<Item = RecordField>,
) -> MedidashResult<bool> {
    if enter(ctx, "/medical-records")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    if let Some(s) = search {
        clinic.records.set_search(s);
    }
    clinic.records.set_type_filter(record_type);
    for field in sort {
        clinic.records.sort_by(field);
    }
    print_records(&clinic.records.visible());
    Ok(true)
}

// ── Forms ─────────────────────────────────────────────────────────────────────

/// Show a rejected form's reasons and turn the rejection into a refusal.
fn form_outcome<T>(result: MedidashResult<T>) -> MedidashResult<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(MedidashError::FormInvalid { form, reasons }) => {
            eprintln!("The {} form was not submitted:", form);
            for reason in reasons {
                eprintln!("  - {}", reason);
            }
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

pub fn add_patient(ctx: &Context, draft: PatientDraft) -> MedidashResult<bool> {
    if enter(ctx, "/patients")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    clinic.patients.open_add();
    if let Some(d) = clinic.patients.draft_mut() {
        *d = draft;
    }
    let Some(created) = form_outcome(clinic.add_patient(ctx.today))? else {
        return Ok(false);
    };
    if let Some(patient) = created {
        println!("Added patient {} ({}).", patient.name, patient.id);
    }
    print_patients(&clinic.patients.visible(), &clinic.patients.summary());
    Ok(true)
}

pub fn schedule(ctx: &Context, draft: AppointmentDraft) -> MedidashResult<bool> {
    if enter(ctx, "/appointments")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    clinic.appointments.open_schedule(ctx.today);
    if let Some(d) = clinic.appointments.draft_mut() {
        *d = draft;
    }
    match form_outcome(clinic.schedule_appointment())? {
        Some(Some(appointment)) => {
            println!(
                "Scheduled {} for {} on {} at {}.",
                appointment.appointment_type,
                appointment.patient_name,
                appointment.date,
                appointment.time
            );
            print_groups(&clinic.appointments.grouped());
            Ok(true)
        }
        Some(None) => {
            eprintln!(
                "Select a patient from the roster (--patient 1..{}).",
                clinic.patients.patients().len()
            );
            Ok(false)
        }
        None => Ok(false),
    }
}

pub fn upload_record(ctx: &Context, draft: RecordDraft) -> MedidashResult<bool> {
    if enter(ctx, "/medical-records")?.is_none() {
        return Ok(false);
    }
    let mut clinic = Clinic::load()?;
    clinic.records.open_upload();
    if let Some(d) = clinic.records.draft_mut() {
        *d = draft;
    }
    let Some(created) = form_outcome(clinic.upload_record(ctx.today))? else {
        return Ok(false);
    };
    if let Some(record) = created {
        println!(
            "Uploaded {} for {} as {}.",
            record.record_type, record.patient_name, record.file_name
        );
    }
    print_records(&clinic.records.visible());
    Ok(true)
}

// ── Printing ──────────────────────────────────────────────────────────────────

pub(crate) fn print_patients(rows: &[&Patient], summary: &str) {
    println!(
        "{:<4} {:<18} {:>4} {:<7} {:<11} {}",
        "ID", "Name", "Age", "Gender", "Last Visit", "Condition"
    );
    for p in rows {
        println!(
            "{:<4} {:<18} {:>4} {:<7} {:<11} {}",
            p.id, p.name, p.age, p.gender, p.last_visit, p.condition
        );
    }
    println!("{}", summary);
}

pub(crate) fn print_groups(groups: &[DateGroup<'_>]) {
    if groups.is_empty() {
        println!("No appointments found");
        println!("Try adjusting your search or filter criteria.");
        return;
    }
    for group in groups {
        println!("{}", group.date.format("%A, %B %-d, %Y"));
        for a in &group.appointments {
            print_appointment(a);
        }
        println!();
    }
}

fn print_appointment(a: &Appointment) {
    println!(
        "  {:<9} {:>3} min  {:<18} {:<13} {:<15} {}",
        a.time, a.duration, a.patient_name, a.appointment_type, a.doctor, a.status
    );
}

pub(crate) fn print_records(rows: &[&MedicalRecord]) {
    println!(
        "{:<4} {:<18} {:<19} {:<24} {:<11} {:<18} {}",
        "ID", "Patient", "Type", "Description", "Date", "Doctor", "File"
    );
    for r in rows {
        println!(
            "{:<4} {:<18} {:<19} {:<24} {:<11} {:<18} {}",
            r.id, r.patient_name, r.record_type, r.description, r.date, r.doctor, r.file_name
        );
    }
}

fn print_dashboard(page: &DashboardPage) {
    println!("{}", page.welcome());
    println!();
    for stat in page.stats() {
        println!("  {:<22} {}", stat.name, stat.value);
    }
    println!();
    println!("Recent patients");
    for p in page.recent_patients() {
        println!("  {:<18} {:>3}  {:<13} {}  {}", p.name, p.age, p.status, p.date, p.condition);
    }
    println!();
    println!("Upcoming appointments");
    for a in page.upcoming_appointments() {
        println!("  {:<9} {:<18} {:<13} {}", a.time, a.patient, a.appointment_type, a.doctor);
    }
}

fn print_details(details: &PatientDetailsPage) {
    let p = details.patient();
    let chart = details.chart();
    println!("{} ({}, {} years)", p.name, p.gender, p.age);
    println!("  {} | {} | {}", p.phone, p.email, p.address);
    if let Some(blood) = &chart.blood_type {
        println!("  Blood type {}", blood);
    }
    if !chart.allergies.is_empty() {
        println!("  Allergies: {}", chart.allergies.join(", "));
    }
    if let Some(contact) = &chart.emergency_contact {
        println!("  Emergency contact: {} ({}) {}", contact.name, contact.relation, contact.phone);
    }
    for h in &chart.medical_history {
        println!("  {} {:<14} {:<12} {}", h.date, h.diagnosis, h.doctor, h.notes);
    }
    for m in &chart.medications {
        println!("  {} {} {} since {}", m.name, m.dosage, m.frequency, m.start_date);
    }
    for l in &chart.lab_results {
        let flag = if l.is_abnormal() { "!" } else { " " };
        println!("  {}{} {:<30} {}", flag, l.date, l.test, l.notes);
    }
}

fn print_not_found() {
    println!("404 Page not found");
    println!("The page you are looking for does not exist.");
}
