use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use orbitview::discovery::ResourceKind;
use orbitview::handlers::discover::DiscoverOptions;
use orbitview::handlers::profile::TimelineFields;
use orbitview::models::user::RegisterRequest;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Discover events, programs and competitions on OrbitView."
)]
pub struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Featured events, competitions and programs.
    Home,
    /// Browse every resource, optionally filtered.
    Discover(DiscoverArgs),
    /// Show one resource.
    Show {
        /// event, competition or program.
        kind: ResourceKind,
        id: i64,
    },
    /// List the categories available for filtering.
    Categories {
        /// Category ids to mark as selected.
        #[arg(long = "category", value_name = "ID")]
        selected: Vec<i64>,
    },
    /// Sign in and remember the session.
    Login {
        #[arg(long)]
        username: String,
        #[arg(long, env = "ORBITVIEW_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create a new account.
    Register(RegisterArgs),
    /// Forget the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Show the signed-in user's profile.
    Profile,
    /// Manage career timeline entries.
    #[command(subcommand)]
    Timeline(TimelineCommand),
    /// Print the effective configuration.
    Config,
}

#[derive(Args, Debug)]
pub struct DiscoverArgs {
    /// Case-insensitive text to search for.
    #[arg(long, short)]
    pub query: Option<String>,

    /// Only show resources in these categories (repeatable).
    #[arg(long = "category", value_name = "ID")]
    pub categories: Vec<i64>,

    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

impl From<DiscoverArgs> for DiscoverOptions {
    fn from(args: DiscoverArgs) -> Self {
        Self {
            query: args.query,
            categories: args.categories,
            page: args.page,
        }
    }
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub first_name: String,
    #[arg(long)]
    pub last_name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "ORBITVIEW_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long, env = "ORBITVIEW_CONFIRM_PASSWORD", hide_env_values = true)]
    pub confirm_password: String,
    /// Date of birth (YYYY-MM-DD).
    #[arg(long)]
    pub date_of_birth: Option<NaiveDate>,
}

impl From<RegisterArgs> for RegisterRequest {
    fn from(args: RegisterArgs) -> Self {
        Self {
            username: args.username,
            first_name: args.first_name,
            last_name: args.last_name,
            email: args.email,
            password: args.password,
            re_password: args.confirm_password,
            date_of_birth: args.date_of_birth,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum TimelineCommand {
    /// List all timeline entries.
    List,
    /// Show a single entry.
    Show { id: i64 },
    /// Add a new entry.
    Add(TimelineArgs),
    /// Change fields of an existing entry.
    Edit {
        id: i64,
        #[command(flatten)]
        fields: TimelineArgs,
    },
    /// Delete an entry.
    Delete { id: i64 },
}

#[derive(Args, Debug)]
pub struct TimelineArgs {
    /// work, education, volunteer, internship or certification.
    #[arg(long = "type", value_name = "TYPE")]
    pub entry_type: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub organization: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub location: Option<String>,
    /// Start date (YYYY-MM-DD).
    #[arg(long)]
    pub start_date: Option<String>,
    /// End date (YYYY-MM-DD).
    #[arg(long)]
    pub end_date: Option<String>,
    /// Whether this is an ongoing position.
    #[arg(long, value_name = "BOOL")]
    pub current: Option<bool>,
    #[arg(long)]
    pub role: Option<String>,
    #[arg(long)]
    pub department: Option<String>,
    #[arg(long)]
    pub degree: Option<String>,
    #[arg(long)]
    pub field_of_study: Option<String>,
    #[arg(long)]
    pub grade: Option<String>,
    /// Highlight bullet (repeatable); replaces existing highlights.
    #[arg(long = "highlight", value_name = "TEXT")]
    pub highlights: Vec<String>,
    #[arg(long)]
    pub url: Option<String>,
}

impl From<TimelineArgs> for TimelineFields {
    fn from(args: TimelineArgs) -> Self {
        Self {
            entry_type: args.entry_type,
            title: args.title,
            organization: args.organization,
            description: args.description,
            location: args.location,
            start_date: args.start_date,
            end_date: args.end_date,
            is_current: args.current,
            role: args.role,
            department: args.department,
            degree: args.degree,
            field_of_study: args.field_of_study,
            grade: args.grade,
            highlights: args.highlights,
            url: args.url,
        }
    }
}
