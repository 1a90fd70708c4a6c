use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vital_view_dashboard::views::handlers::PatientsQuery;
use vital_view_dashboard::{create_application, DashboardConfig, DashboardError, View};
use vital_view_domain::auth::LoginRequest;
use vital_view_domain::entities::{HistoryFilter, VitalSignStatus, VitalSignType};

#[derive(Parser, Debug)]
#[command(name = "vitalview", about = "Patient vital signs dashboard over a generated dataset")]
struct Args {
    /// Login email
    #[arg(long, global = true, env = "VITALVIEW_EMAIL")]
    email: Option<String>,

    /// Login password
    #[arg(long, global = true, env = "VITALVIEW_PASSWORD", hide_env_values = true)]
    password: Option<String>,

    /// Seed for a reproducible dataset (overrides VITALVIEW_SEED)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Days of history to generate (overrides VITALVIEW_HISTORY_DAYS)
    #[arg(long, global = true)]
    days: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Counters, daily activity and patients needing attention
    Dashboard,

    /// Patient list
    Patients {
        /// Match on first name, last name or patient id
        #[arg(long)]
        search: Option<String>,
    },

    /// Detail view of one patient
    Patient {
        /// Internal patient id
        id: String,
    },

    /// Vital signs history, newest first
    History {
        #[arg(long)]
        patient: Option<String>,

        /// heart_rate, blood_pressure, temperature, oxygen_saturation or respiratory_rate
        #[arg(long)]
        category: Option<VitalSignType>,

        /// normal, warning or critical
        #[arg(long)]
        status: Option<VitalSignStatus>,
    },

    /// Warning and critical counts
    Alerts,
}

impl From<Command> for View {
    fn from(command: Command) -> Self {
        match command {
            Command::Dashboard => View::Dashboard,
            Command::Alerts => View::Alerts,
            Command::Patients { search } => View::Patients(PatientsQuery { search }),
            Command::Patient { id } => View::Patient { id },
            Command::History {
                patient,
                category,
                status,
            } => View::History(HistoryFilter {
                patient_id: patient,
                kind: category,
                status,
            }),
        }
    }
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenv().ok();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();

    let args = Args::parse();

    let mut config = DashboardConfig::from_env().context("Failed to read configuration")?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(days) = args.days {
        config.history_days = days;
    }

    match run(&config, args) {
        Ok(body) => {
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
        Err(err) => {
            error!(code = err.code(), "{}", err);
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            Err(err).context("vitalview failed")
        }
    }
}

fn run(config: &DashboardConfig, args: Args) -> Result<serde_json::Value, DashboardError> {
    let mut app = create_application(config)?;

    // Without credentials the session stays anonymous and the view reports login_required
    if let (Some(email), Some(password)) = (args.email, args.password) {
        app.login(&LoginRequest::new(email, password))?;
    }

    let view = View::from(args.command);
    info!(view = view.name(), "Rendering");
    app.render(&view)
}
