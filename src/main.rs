use anyhow::Result;
use clap::{Parser, Subcommand};
use is_terminal::IsTerminal;
use sprig::areas::repository::Repository;
use sprig::artifacts::core::Output;
use sprig::config::Settings;
use sprig::error::SprigError;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "sprig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A small single-user version-control system",
    long_about = "sprig keeps an immutable history of snapshots of the files in a directory. \
    It supports staging, branching, checkout, reset and three-way merges with \
    conflict detection, all stored locally under .sprig/.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
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
        long_about = "This command creates .sprig/ in the current directory with an initial commit on master."
    )]
    Init,
    #[command(name = "add", about = "Stage a file for the next commit")]
    Add {
        #[arg(index = 1, help = "The file to stage")]
        file: String,
    },
    #[command(
        name = "commit",
        about = "Record the staged changes",
        long_about = "This command creates a new commit from HEAD and the staging area with the given message."
    )]
    Commit {
        #[arg(short, long, default_value = "", help = "The commit message")]
        message: String,
    },
    #[command(name = "rm", about = "Unstage a file or stop tracking it")]
    Rm {
        #[arg(index = 1, help = "The file to remove")]
        file: String,
    },
    #[command(name = "log", about = "Show the history of HEAD")]
    Log,
    #[command(name = "global-log", about = "Show every commit ever made")]
    GlobalLog,
    #[command(name = "find", about = "Print the ids of commits with the given message")]
    Find {
        #[arg(index = 1, help = "The exact commit message")]
        message: String,
    },
    #[command(name = "status", about = "Show branches, staged files and working tree changes")]
    Status,
    #[command(
        name = "checkout",
        about = "Switch branches or restore a file",
        long_about = "`checkout <branch>` replaces the working directory with the tip of <branch>. \
        `checkout [<commit>] -- <file>` restores <file> from <commit>, or from HEAD."
    )]
    Checkout {
        #[arg(help = "A branch name, or the commit to restore a file from")]
        target: Option<String>,
        #[arg(last = true, help = "The file to restore")]
        files: Vec<String>,
    },
    #[command(name = "branch", about = "Create a branch at HEAD, or list branches")]
    Branch {
        #[arg(index = 1, help = "The name of the new branch")]
        name: Option<String>,
    },
    #[command(name = "rm-branch", about = "Delete a branch pointer")]
    RmBranch {
        #[arg(index = 1, help = "The branch to delete")]
        name: String,
    },
    #[command(name = "reset", about = "Move the current branch to a commit")]
    Reset {
        #[arg(index = 1, help = "The full or abbreviated commit id")]
        commit: String,
    },
    #[command(name = "merge", about = "Merge a branch into the current branch")]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
}

impl Commands {
    fn is_paged(&self) -> bool {
        matches!(self, Commands::Log | Commands::GlobalLog)
    }

    fn is_read_only(&self) -> bool {
        matches!(
            self,
            Commands::Log
                | Commands::GlobalLog
                | Commands::Find { .. }
                | Commands::Status
                | Commands::Branch { name: None }
        )
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(error) = sprig::logging::init() {
        eprintln!("warning: {error}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(error),
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load_from_env()?;
    let pwd = std::env::current_dir()?;

    if !std::io::stdout().is_terminal() {
        colored::control::set_override(false);
    }

    let output = Output::select(cli.command.is_paged(), settings.no_pager());
    let writer = output.writer();

    let mut repository = match &cli.command {
        Commands::Init => {
            Repository::init(&pwd, writer, settings)?;
            return output.finish();
        }
        _ => Repository::open(&pwd, writer, settings)?,
    };

    match &cli.command {
        Commands::Init => {}
        Commands::Add { file } => repository.add(file)?,
        Commands::Commit { message } => {
            repository.commit(message)?;
        }
        Commands::Rm { file } => repository.rm(file)?,
        Commands::Log => repository.log()?,
        Commands::GlobalLog => repository.global_log()?,
        Commands::Find { message } => repository.find(message)?,
        Commands::Status => repository.status()?,
        Commands::Checkout { target, files } => match (target, files.as_slice()) {
            (target, [file]) => repository.checkout_file(target.as_deref(), file)?,
            (Some(branch), []) => repository.checkout_branch(branch)?,
            _ => return Err(SprigError::IncorrectOperands.into()),
        },
        Commands::Branch { name } => repository.branch(name.as_deref())?,
        Commands::RmBranch { name } => repository.rm_branch(name)?,
        Commands::Reset { commit } => repository.reset(commit)?,
        Commands::Merge { branch } => repository.merge(branch)?,
    }

    if !cli.command.is_read_only() {
        repository.save()?;
    }
    drop(repository);

    output.finish()
}

fn report(error: anyhow::Error) -> ExitCode {
    match error.downcast_ref::<SprigError>() {
        Some(sprig_error) if sprig_error.is_corruption() => {
            eprintln!("fatal: {sprig_error}");
            ExitCode::from(sprig_error.exit_code())
        }
        Some(sprig_error) => {
            eprintln!("{sprig_error}");
            ExitCode::from(sprig_error.exit_code())
        }
        None => {
            eprintln!("Error: {error:?}");
            ExitCode::FAILURE
        }
    }
}
