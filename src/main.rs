//! OrbitView command-line client
//!
//! Main application entry point

mod cli;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, error, info};

use orbitview::{
    config::Settings,
    handlers::{auth, discover, home, profile},
    services::ServiceFactory,
    state::{FileStorage, SessionCache, SessionStorage},
    utils::logging,
    OrbitViewError,
};

use crate::cli::{Cli, Command, TimelineCommand};

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            if matches!(e.downcast_ref::<OrbitViewError>(), Some(OrbitViewError::NotAuthenticated)) {
                eprintln!("Sign in with `orbitview login --username <USERNAME>`.");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<String> {
    // Load configuration
    let settings = Settings::load(cli.config.as_deref()).context("failed to load configuration")?;
    settings.validate()?;

    // Initialize logging; the guard flushes the file writer on drop
    let _log_guard = logging::init_logging(&settings.logging)?;
    debug!(version = orbitview::VERSION, "Starting {}", orbitview::info());

    let services = ServiceFactory::new(&settings)?;
    let storage: Arc<dyn SessionStorage> = Arc::new(FileStorage::new(&settings.session.storage_path));
    let mut session = SessionCache::new(
        services.auth_service.clone(),
        storage,
        settings.session.storage_key.clone(),
    );

    // Revalidate any stored session before serving the page
    if !matches!(cli.command, Command::Config) && session.initialize().await? {
        info!("Restored stored session");
    }

    let result = dispatch(cli.command, &settings, &services, &mut session).await;
    if let Err(e) = &result {
        error!(error = %e, severity = ?e.severity(), "Command failed");
    }
    Ok(result?)
}

async fn dispatch(
    command: Command,
    settings: &Settings,
    services: &ServiceFactory,
    session: &mut SessionCache,
) -> orbitview::Result<String> {
    match command {
        Command::Home => home::handle_home(services, session).await,
        Command::Discover(args) => discover::handle_discover(services, session, &args.into()).await,
        Command::Show { kind, id } => discover::handle_resource(services, session, kind, id).await,
        Command::Categories { selected } => discover::handle_categories(services, &selected).await,
        Command::Login { username, password } => {
            auth::handle_login(services, session, &username, &password).await
        }
        Command::Register(args) => auth::handle_register(services, session, &args.into()).await,
        Command::Logout => auth::handle_logout(session),
        Command::Whoami => Ok(auth::handle_whoami(session)),
        Command::Profile => profile::handle_profile(services, session).await,
        Command::Timeline(timeline) => match timeline {
            TimelineCommand::List => profile::handle_timeline_list(services, session).await,
            TimelineCommand::Show { id } => profile::handle_timeline_show(services, session, id).await,
            TimelineCommand::Add(fields) => {
                profile::handle_timeline_add(services, session, fields.into()).await
            }
            TimelineCommand::Edit { id, fields } => {
                profile::handle_timeline_edit(services, session, id, fields.into()).await
            }
            TimelineCommand::Delete { id } => profile::handle_timeline_delete(services, session, id).await,
        },
        Command::Config => {
            toml::to_string_pretty(settings).map_err(|e| OrbitViewError::Config(e.to_string()))
        }
    }
}
