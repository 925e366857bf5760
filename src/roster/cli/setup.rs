use clap::{Args, Parser, Subcommand};
use roster::model::FormFields;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Keep a validated roster of students", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and its config (overrides ROSTER_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// The four form inputs. Omitted fields are submitted empty on `add` and left
/// as they are on `edit`.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    /// Student name (letters and spaces)
    #[arg(long)]
    pub name: Option<String>,

    /// Student ID (digits)
    #[arg(long)]
    pub id: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Contact number (at least 10 digits)
    #[arg(long)]
    pub contact: Option<String>,
}

impl FieldArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.id.is_none() && self.email.is_none() && self.contact.is_none()
    }

    pub fn into_form_fields(self) -> FormFields {
        FormFields::new(
            self.name.unwrap_or_default(),
            self.id.unwrap_or_default(),
            self.email.unwrap_or_default(),
            self.contact.unwrap_or_default(),
        )
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student
    #[command(alias = "a")]
    Add(FieldArgs),

    /// Show the roster
    #[command(alias = "ls")]
    List,

    /// Change fields of the student at a position
    #[command(alias = "e")]
    Edit {
        /// Position in the list (1-based)
        position: usize,

        #[command(flatten)]
        fields: FieldArgs,
    },

    /// Delete the student at a position
    #[command(alias = "rm")]
    Delete {
        /// Position in the list (1-based)
        position: usize,

        /// Do not ask for confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Interactive form session on stdin
    Form,

    /// Print the path of the roster file
    Path,

    /// Get or set configuration
    Config {
        /// Configuration key (slot-key, confirm-delete)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
