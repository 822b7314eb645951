mod account;
mod facilities;
mod geo;
mod playeros;

use anyhow::Context;
use clap::{Parser, Subcommand};
use estace_api::{ApiClient, Session, SessionStore};
use estace_core::AppConfig;
use tracing_subscriber::EnvFilter;

use crate::facilities::FacilityCommands;
use crate::geo::GeoCommands;
use crate::playeros::PlayeroCommands;

#[derive(Debug, Parser)]
#[command(name = "estace")]
#[command(about = "Parking facility administration from the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Staff number used as login id
        #[arg(long)]
        legajo: i64,
        #[arg(long, env = "ESTACE_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the signed-in profile
    Whoami,
    /// Province, locality and address lookups
    Geo {
        #[command(subcommand)]
        command: GeoCommands,
    },
    /// Facilities owned by the signed-in account
    Facilities {
        #[command(subcommand)]
        command: FacilityCommands,
    },
    /// Parking attendants
    Playeros {
        #[command(subcommand)]
        command: PlayeroCommands,
    },
}

/// Shared state for commands that talk to the persistence API.
pub(crate) struct App {
    pub config: AppConfig,
    pub store: SessionStore,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let store = SessionStore::new(config.session_path.clone());
        Self { config, store }
    }

    fn load_session(&self) -> anyhow::Result<Session> {
        self.store
            .load()
            .with_context(|| format!("failed to read session from {}", self.store.path().display()))
    }

    pub(crate) fn api(&self, session: Session) -> anyhow::Result<ApiClient> {
        ApiClient::with_base_url(
            &self.config.api_url,
            session,
            &self.config.user_agent,
            self.config.api_timeout_secs,
        )
        .context("failed to build API client")
    }

    /// Runs `f` with an API client and persists the session afterwards, so
    /// a token cleared by an expiry response is also removed from disk.
    async fn with_api<F, Fut>(&self, f: F) -> anyhow::Result<()>
    where
        F: FnOnce(ApiClient) -> Fut,
        Fut: std::future::Future<Output = anyhow::Result<()>>,
    {
        let session = self.load_session()?;
        let result = f(self.api(session.clone())?).await;
        self.store
            .save(&session)
            .with_context(|| format!("failed to write session to {}", self.store.path().display()))?;
        result
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = estace_core::load_app_config_from_env().context("invalid configuration")?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, api = %config.api_url, "configuration loaded");

    let app = App::new(config);

    match cli.command {
        Some(Commands::Login { legajo, password }) => {
            app.with_api(|api| async move { account::run_login(&api, legajo, &password).await })
                .await?;
        }
        Some(Commands::Logout) => {
            app.with_api(|api| async move {
                account::run_logout(&api);
                Ok(())
            })
            .await?;
        }
        Some(Commands::Whoami) => {
            app.with_api(|api| async move { account::run_whoami(&api).await })
                .await?;
        }
        Some(Commands::Geo { command }) => geo::run(&app.config, command).await?,
        Some(Commands::Facilities { command }) => {
            app.with_api(|api| async move { facilities::run(&api, command).await })
                .await?;
        }
        Some(Commands::Playeros { command }) => {
            app.with_api(|api| async move { playeros::run(&api, command).await })
                .await?;
        }
        None => println!("estace ready; run `estace --help` for commands"),
    }

    Ok(())
}

/// Turns a guard redirect into a user-facing error.
pub(crate) async fn require_owner(api: &ApiClient) -> anyhow::Result<()> {
    match estace_form::authorize(api, estace_form::OWNER_ONLY).await {
        estace_form::Access::Granted(_) => Ok(()),
        estace_form::Access::RedirectLogin => {
            anyhow::bail!("not signed in or session expired; run `estace login`")
        }
        estace_form::Access::RedirectDashboard => {
            anyhow::bail!("this command is only available to facility owners")
        }
    }
}
