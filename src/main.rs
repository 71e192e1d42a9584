use anyhow::Result;
use clap::{Parser, Subcommand};
use revwalk::areas::repository::Repository;
use revwalk::commands::porcelain::log::LogOptions;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "revwalk",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Walk the commit history of a git repository",
    long_about = "A small git-compatible repository tool built around a history walker. \
    It lists commits reachable from revisions, honours ranges (A..B) and exclusions (^A), \
    and can restrict history to commits that touch given paths.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "commit",
        about = "Record a snapshot of every workspace file",
        long_about = "This command stores every file of the working tree and creates a commit \
        on top of HEAD. The author is read from GIT_AUTHOR_NAME, GIT_AUTHOR_EMAIL and the \
        optional GIT_AUTHOR_DATE."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "branch", about = "Create or list branches")]
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },
    #[command(
        name = "log",
        about = "Show commit history",
        long_about = "This command lists the commits selected by the given revisions, newest first. \
        Arguments may be revisions, ranges (A..B), exclusions (^A) or workspace paths; \
        HEAD is used when no revision is given."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long, help = "Abbreviate commit ids")]
        abbrev_commit: bool,
        #[arg(long, help = "List the files each commit changed")]
        name_status: bool,
        #[arg(help = "Revisions, ranges, exclusions and paths")]
        revisions: Vec<String>,
    },
    #[command(
        name = "rev-list",
        about = "List commit ids in reverse chronological order",
        long_about = "This command prints the full id of every commit selected by the given \
        revisions, ranges, exclusions and paths, one per line."
    )]
    RevList {
        #[arg(help = "Revisions, ranges, exclusions and paths")]
        revisions: Vec<String>,
    },
}

#[derive(Subcommand)]
enum BranchAction {
    #[command(name = "create", about = "Create a branch at a revision (HEAD by default)")]
    Create {
        #[arg(index = 1)]
        name: String,
        #[arg(index = 2)]
        start_revision: Option<String>,
    },
    #[command(name = "list", about = "List branches, marking the current one")]
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let pwd = std::env::current_dir()?;

    match &cli.command {
        Commands::Init { path } => {
            let path = path.clone().unwrap_or(pwd);
            Repository::new(&path, Box::new(std::io::stdout()))?.init()?
        }
        Commands::Commit { message } => {
            Repository::new(&pwd, Box::new(std::io::stdout()))?.commit(message)?
        }
        Commands::Branch { action } => {
            let repository = Repository::new(&pwd, Box::new(std::io::stdout()))?;

            match action {
                BranchAction::Create {
                    name,
                    start_revision,
                } => repository.create_branch(name, start_revision.as_deref())?,
                BranchAction::List => repository.list_branches()?,
            }
        }
        Commands::Log {
            oneline,
            abbrev_commit,
            name_status,
            revisions,
        } => {
            let options = LogOptions {
                oneline: *oneline,
                abbrev_commit: *abbrev_commit,
                name_status: *name_status,
            };
            Repository::new(&pwd, Box::new(std::io::stdout()))?.log(revisions, &options)?
        }
        Commands::RevList { revisions } => {
            Repository::new(&pwd, Box::new(std::io::stdout()))?.rev_list(revisions)?
        }
    }

    Ok(())
}
