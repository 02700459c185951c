//! MEDIDASH — command-line front end
//!
//! Drives the dashboard one command at a time. The signed-in identity and the
//! guest flag persist between commands in the storage directory; clinical
//! data does not, so every listing starts from the built-in sample set.
//!
//! Usage:
//!   medidash login --email doctor@example.com --password password
//!   medidash patients --search wilson
//!   medidash open /patients/1
//!   medidash walkthrough

mod commands;
mod walkthrough;

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use medidash_contracts::error::MedidashResult;
use medidash_core::{
    fields::{PatientField, RecordField},
    DashboardConfig, SessionManager,
};
use medidash_router::TomlRouteTable;
use medidash_storage::JsonFileStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// MEDIDASH — hospital management dashboard.
#[derive(Parser)]
#[command(
    name = "medidash",
    about = "MEDIDASH hospital dashboard",
    long_about = "Signs in with a demo account or as a guest, opens dashboard pages,\n\
                  and lists, filters and adds patients, appointments and records."
)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory for the session files. Overrides the configuration.
    #[arg(long, global = true)]
    storage_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Sign in with a demo account.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Sign out and leave guest mode.
    Logout,
    /// Enter or leave guest mode.
    Guest {
        #[arg(value_enum)]
        action: GuestAction,
    },
    /// Show who the dashboard greets.
    Whoami,
    /// Resolve a path the way the dashboard's router does.
    Open { path: String },
    /// List patients.
    Patients {
        #[arg(long)]
        search: Option<String>,
        /// Column header clicks, in order. Repeat a column to reverse it.
        #[arg(long = "sort", value_enum)]
        sort: Vec<PatientSort>,
    },
    /// List appointments grouped by day.
    Appointments {
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long = "type")]
        appointment_type: Option<String>,
    },
    /// List medical records (newest first unless sorted).
    Records {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "type")]
        record_type: Option<String>,
        /// Column header clicks, in order.
        #[arg(long = "sort", value_enum)]
        sort: Vec<RecordSort>,
    },
    /// Submit the add-patient form.
    AddPatient {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        age: String,
        #[arg(long, default_value = "")]
        gender: String,
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        address: String,
        #[arg(long, default_value = "")]
        condition: String,
    },
    /// Submit the schedule-appointment form.
    Schedule {
        /// Roster id of the patient.
        #[arg(long, default_value = "")]
        patient: String,
        /// Defaults to today.
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        duration: Option<String>,
        #[arg(long = "type")]
        appointment_type: Option<String>,
        #[arg(long)]
        doctor: Option<String>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Submit the upload-record form.
    UploadRecord {
        #[arg(long, default_value = "")]
        patient: String,
        #[arg(long = "type")]
        record_type: Option<String>,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        doctor: Option<String>,
        #[arg(long)]
        file: Option<String>,
    },
    /// Scripted tour of the gate, the listings and the forms. Leaves the
    /// stored session untouched.
    Walkthrough,
}

#[derive(Clone, Copy, ValueEnum)]
enum GuestAction {
    Enter,
    Exit,
}

#[derive(Clone, Copy, ValueEnum)]
enum PatientSort {
    Name,
    Age,
    LastVisit,
}

impl From<PatientSort> for PatientField {
    fn from(s: PatientSort) -> Self {
        match s {
            PatientSort::Name => PatientField::Name,
            PatientSort::Age => PatientField::Age,
            PatientSort::LastVisit => PatientField::LastVisit,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum RecordSort {
    PatientName,
    Type,
    Description,
    Date,
    Doctor,
}

impl From<RecordSort> for RecordField {
    fn from(s: RecordSort) -> Self {
        match s {
            RecordSort::PatientName => RecordField::PatientName,
            RecordSort::Type => RecordField::Type,
            RecordSort::Description => RecordField::Description,
            RecordSort::Date => RecordField::Date,
            RecordSort::Doctor => RecordField::Doctor,
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("medidash: {}", e);
            std::process::exit(1);
        }
    };

    // Structured logging. RUST_LOG wins over the configured filter.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
        )
        .with_target(false)
        .compact()
        .init();

    match run(cli.command, &config) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("medidash: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> MedidashResult<DashboardConfig> {
    let mut config = DashboardConfig::load(cli.config.as_deref())?;
    if let Some(dir) = &cli.storage_dir {
        config.storage_dir = dir.clone();
    }
    Ok(config)
}

/// Everything a command works against.
pub(crate) struct Context {
    pub session: SessionManager,
    pub routes: TomlRouteTable,
    pub today: NaiveDate,
}

/// Run one command. `Ok(false)` means the command was refused (bad
/// credentials, gated page, rejected form) and the process exits non-zero.
fn run(command: Command, config: &DashboardConfig) -> MedidashResult<bool> {
    let routes = TomlRouteTable::load(config.routes_file.as_deref())?;
    let today = chrono::Local::now().date_naive();

    if let Command::Walkthrough = command {
        return walkthrough::run(routes, today);
    }

    let session = SessionManager::restore(
        Box::new(JsonFileStore::new(config.local_store_path())),
        Box::new(JsonFileStore::new(config.session_store_path())),
    )?;
    let mut ctx = Context {
        session,
        routes,
        today,
    };

    match command {
        Command::Login { email, password } => commands::login(&mut ctx, &email, &password),
        Command::Logout => commands::logout(&mut ctx),
        Command::Guest { action } => match action {
            GuestAction::Enter => commands::guest_enter(&mut ctx),
            GuestAction::Exit => commands::guest_exit(&mut ctx),
        },
        Command::Whoami => commands::whoami(&ctx),
        Command::Open { path } => commands::open(&ctx, &path),
        Command::Patients { search, sort } => commands::patients(
            &ctx,
            search.as_deref(),
            sort.into_iter().map(PatientField::from),
        ),
        Command::Appointments {
            search,
            date,
            appointment_type,
        } => commands::appointments(&ctx, search.as_deref(), date, appointment_type),
        Command::Records {
            search,
            record_type,
            sort,
        } => commands::records(
            &ctx,
            search.as_deref(),
            record_type,
            sort.into_iter().map(RecordField::from),
        ),
        Command::AddPatient {
            name,
            age,
            gender,
            phone,
            email,
            address,
            condition,
        } => commands::add_patient(
            &ctx,
            medidash_forms::PatientDraft {
                name,
                age,
                gender,
                phone,
                email,
                address,
                condition,
            },
        ),
        Command::Schedule {
            patient,
            date,
            time,
            duration,
            appointment_type,
            doctor,
            notes,
        } => {
            let mut draft = medidash_forms::AppointmentDraft::new(date.unwrap_or(today));
            draft.patient_id = patient;
            draft.notes = notes;
            if let Some(t) = time {
                draft.time = t;
            }
            if let Some(d) = duration {
                draft.duration = d;
            }
            if let Some(t) = appointment_type {
                draft.appointment_type = t;
            }
            if let Some(d) = doctor {
                draft.doctor = d;
            }
            commands::schedule(&ctx, draft)
        }
        Command::UploadRecord {
            patient,
            record_type,
            description,
            doctor,
            file,
        } => {
            let mut draft = medidash_forms::RecordDraft {
                patient_id: patient,
                description,
                file_name: file,
                ..Default::default()
            };
            if let Some(t) = record_type {
                draft.record_type = t;
            }
            if let Some(d) = doctor {
                draft.doctor = d;
            }
            commands::upload_record(&ctx, draft)
        }
        // Runs before the stored session is restored.
        Command::Walkthrough => Ok(true),
    }
}
