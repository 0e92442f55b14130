use clap::{Args, Parser, Subcommand};
use roster::model::{NewStudent, StudentPatch};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(
    about = "Interactive student roster: add, edit, search and chart students",
    long_about = "Runs one command and exits when COMMAND is given, otherwise starts an \
                  interactive session reading one command per line from stdin."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<SessionCommand>,

    /// Read configuration from this file instead of the config directory
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start with an empty roster (ignores seed-sample-data)
    #[arg(long, global = true)]
    pub no_seed: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// One line of session input.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// List students, optionally narrowed by search query and course
    #[command(alias = "ls", display_order = 1)]
    List {
        /// Prefix search over name, email and course words
        #[arg(short, long)]
        search: Option<String>,

        /// Only students in this course (exact name)
        #[arg(short, long)]
        course: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Search students by prefix (an empty query lists everyone)
    #[command(alias = "s", display_order = 2)]
    Search {
        /// Query words (joined with spaces)
        #[arg(num_args = 0..)]
        query: Vec<String>,
    },

    /// Show one student in full
    #[command(alias = "v", display_order = 3)]
    Show {
        id: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a student
    #[command(alias = "n", display_order = 4)]
    Add(StudentArgs),

    /// Change some fields of a student
    #[command(alias = "e", display_order = 5)]
    Edit {
        id: String,

        #[command(flatten)]
        fields: PatchArgs,
    },

    /// Delete a student
    #[command(alias = "rm", display_order = 6)]
    Delete { id: String },

    /// List the course catalog
    #[command(display_order = 7)]
    Courses,

    /// Dashboard statistics
    #[command(display_order = 8)]
    Stats {
        /// Print JSON instead of charts
        #[arg(long)]
        json: bool,
    },

    /// Show the current user
    #[command(display_order = 9)]
    Whoami,

    /// End the session
    #[command(alias = "exit", display_order = 10)]
    Quit,
}

#[derive(Args, Debug, Default)]
pub struct StudentArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// 10-digit phone number
    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub course: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Image URL or data: URI
    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    /// Enrollment date (YYYY-MM-DD), defaults to today
    #[arg(long, value_name = "DATE")]
    pub enrolled: Option<String>,

    /// Defaults to the configured default status
    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Mark the student as having completed the course
    #[arg(long)]
    pub completed: bool,
}

impl From<StudentArgs> for NewStudent {
    fn from(args: StudentArgs) -> Self {
        NewStudent {
            name: args.name,
            email: args.email,
            phone: args.phone,
            course: args.course,
            address: args.address,
            image: args.image,
            bio: args.bio,
            enrollment_date: args.enrolled,
            status: args.status,
            notes: args.notes,
            completed: args.completed,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct PatchArgs {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    #[arg(long)]
    pub course: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    #[arg(long)]
    pub image: Option<String>,

    #[arg(long)]
    pub bio: Option<String>,

    #[arg(long, value_name = "DATE")]
    pub enrolled: Option<String>,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// true or false
    #[arg(long)]
    pub completed: Option<bool>,
}

impl From<PatchArgs> for StudentPatch {
    fn from(args: PatchArgs) -> Self {
        StudentPatch {
            name: args.name,
            email: args.email,
            phone: args.phone,
            course: args.course,
            address: args.address,
            image: args.image,
            bio: args.bio,
            enrollment_date: args.enrolled,
            status: args.status,
            notes: args.notes,
            completed: args.completed,
        }
    }
}

/// Logs go to stderr so they never mix with command output. `RUST_LOG`
/// wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "roster=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
