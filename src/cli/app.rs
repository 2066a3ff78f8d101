//! Main CLI application structure

use std::ffi::OsString;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use super::commands;
use super::output::{Output, OutputFormat};
use crate::domain::{Edit, IndentLevel, IndentRequest, NewTask, Selector};
use crate::storage::{Config, TodoFile};

#[derive(Parser)]
#[command(name = "todo")]
#[command(author, version, about = "Edit markdown checklists by line number")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Options accepted by every command
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Checklist file to operate on
    #[arg(long, global = true, env = "TODO_FILE")]
    pub file: Option<PathBuf>,

    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, env = "TODO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Do not print the listing after an edit
    #[arg(long, short = 'q', global = true, overrides_with = "no_quiet")]
    pub quiet: bool,

    /// Print the listing after an edit even if the config sets `quiet`
    #[arg(long, global = true, overrides_with = "quiet")]
    pub no_quiet: bool,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    /// The flag from the command line, if one was given
    fn quiet_flag(&self) -> Option<bool> {
        match (self.quiet, self.no_quiet) {
            (true, _) => Some(true),
            (false, true) => Some(false),
            (false, false) => None,
        }
    }

    fn merge(self, other: GlobalArgs) -> Self {
        Self {
            file: self.file.or(other.file),
            config: self.config.or(other.config),
            format: self.format.or(other.format),
            quiet: self.quiet || other.quiet,
            no_quiet: self.no_quiet || other.no_quiet,
            verbose: self.verbose || other.verbose,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every line with its number (default)
    #[command(visible_alias = "ls")]
    List,

    /// Print the file as it is
    Print,

    /// Count total, done and pending tasks
    Status,

    /// Add a task
    ///
    /// Examples:
    ///   todo add "Write docs"            # Append
    ///   todo add "Write docs" 4          # Insert so it becomes line 4
    ///   todo add "Write docs" -I         # One level deeper than the line above
    Add(AddArgs),

    /// Indent task lines
    Indent {
        /// Lines to indent, e.g. `3-4,6`
        selector: Selector,

        /// Levels to indent by
        steps: usize,
    },

    /// Unindent task lines
    Unindent {
        /// Lines to unindent, e.g. `3-4,6`
        selector: Selector,

        /// Levels to unindent by
        steps: usize,
    },

    /// Mark tasks as done
    #[command(name = "do")]
    Do {
        /// Lines to check, e.g. `3-4,6`
        selector: Selector,
    },

    /// Mark tasks as not done
    Undo {
        /// Lines to uncheck, e.g. `3-4,6`
        selector: Selector,
    },

    /// Remove lines
    #[command(name = "rm", visible_alias = "remove")]
    Rm {
        /// Lines to remove, e.g. `3-4,6`
        selector: Selector,
    },

    /// Move a line to a new position
    #[command(name = "mv", visible_alias = "move")]
    Mv {
        /// Current line number
        from: usize,

        /// Line number it should end up at
        to: usize,
    },

    /// Anything else is added as a new task
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Task text
    pub text: String,

    /// Line number the new task should occupy (appends when omitted)
    pub position: Option<usize>,

    /// Add the task already checked
    #[arg(long, short = 'd')]
    pub done: bool,

    /// Indent to an absolute level (2 spaces per level)
    #[arg(long, value_name = "LEVEL", conflicts_with = "auto_indent")]
    pub indent: Option<usize>,

    /// Indent one level deeper than the line above
    #[arg(long, short = 'I')]
    pub auto_indent: bool,
}

impl From<AddArgs> for NewTask {
    fn from(args: AddArgs) -> Self {
        let indent = match (args.indent, args.auto_indent) {
            (Some(level), _) => IndentRequest::Level(IndentLevel(level)),
            (None, true) => IndentRequest::Deeper,
            (None, false) => IndentRequest::Inherit,
        };

        NewTask {
            text: args.text,
            position: args.position,
            checked: args.done,
            indent,
        }
    }
}

/// Parser for `todo <TEXT> [add options]`
#[derive(Parser)]
#[command(name = "todo")]
struct BareAdd {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(flatten)]
    add: AddArgs,
}

impl Commands {
    fn into_edit(self) -> Option<Edit> {
        let edit = match self {
            Commands::List | Commands::Print | Commands::Status | Commands::External(_) => {
                return None
            }
            Commands::Add(args) => Edit::Add(args.into()),
            Commands::Indent { selector, steps } => Edit::Indent { selector, steps },
            Commands::Unindent { selector, steps } => Edit::Unindent { selector, steps },
            Commands::Do { selector } => Edit::Do(selector),
            Commands::Undo { selector } => Edit::Undo(selector),
            Commands::Rm { selector } => Edit::Remove(selector),
            Commands::Mv { from, to } => Edit::Move { from, to },
        };
        Some(edit)
    }
}

/// Parses arguments, turning help and version requests into an exit
fn parse<P, I, T>(args: I) -> Result<P>
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => Ok(parsed),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(e.into()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .try_init();
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli: Cli = parse(std::env::args_os())?;

    let (global, command) = match cli.command {
        Some(Commands::External(words)) => {
            let bare: BareAdd = parse(std::iter::once("todo".to_string()).chain(words))?;
            (cli.global.merge(bare.global), Some(Commands::Add(bare.add)))
        }
        command => (cli.global, command),
    };

    init_logging(global.verbose);

    let config = match &global.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let output = Output::new(
        config.resolve_format(global.format),
        config.resolve_quiet(global.quiet_flag()),
    );
    let file = TodoFile::new(config.resolve_file(global.file));
    tracing::debug!(path = %file.path().display(), "resolved todo file");

    match command {
        None | Some(Commands::List) => commands::list(&file, &output)?,
        Some(Commands::Print) => commands::print(&file, &output)?,
        Some(Commands::Status) => commands::status(&file, &output)?,
        Some(command) => {
            if let Some(edit) = command.into_edit() {
                commands::edit(&file, &output, &edit)?;
            }
        }
    }

    tracing::debug!("command completed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn no_command_means_list() {
        assert!(parse_cli(&["todo"]).command.is_none());
    }

    #[test]
    fn unknown_word_is_external() {
        match parse_cli(&["todo", "New"]).command {
            Some(Commands::External(words)) => assert_eq!(words, vec!["New"]),
            _ => panic!("expected external subcommand"),
        }
    }

    #[test]
    fn bare_add_accepts_add_options() {
        let bare = BareAdd::try_parse_from(["todo", "New", "3", "--done", "-q"]).unwrap();
        assert_eq!(bare.add.text, "New");
        assert_eq!(bare.add.position, Some(3));
        assert!(bare.add.done);
        assert!(bare.global.quiet);
    }

    #[test]
    fn add_indent_options() {
        let add = |args: &[&str]| match parse_cli(args).command {
            Some(Commands::Add(args)) => NewTask::from(args),
            _ => panic!("expected add"),
        };

        assert_eq!(add(&["todo", "add", "x"]).indent, IndentRequest::Inherit);
        assert_eq!(add(&["todo", "add", "x", "-I"]).indent, IndentRequest::Deeper);
        assert_eq!(
            add(&["todo", "add", "x", "--indent", "2"]).indent,
            IndentRequest::Level(IndentLevel(2))
        );
        assert!(Cli::try_parse_from(["todo", "add", "x", "-I", "--indent", "1"]).is_err());
    }

    #[test]
    fn selector_syntax_is_checked_while_parsing() {
        assert!(Cli::try_parse_from(["todo", "do", "3-4,6"]).is_ok());
        assert!(Cli::try_parse_from(["todo", "do", "4-3"]).is_err());
        assert!(Cli::try_parse_from(["todo", "indent", "3"]).is_err());
        assert!(Cli::try_parse_from(["todo", "mv", "3"]).is_err());
    }

    #[test]
    fn global_flags_after_command() {
        let cli = parse_cli(&["todo", "do", "100", "-q"]);
        assert!(cli.global.quiet);
    }

    #[test]
    fn quiet_flags_override_each_other() {
        assert_eq!(parse_cli(&["todo"]).global.quiet_flag(), None);
        assert_eq!(parse_cli(&["todo", "-q"]).global.quiet_flag(), Some(true));
        assert_eq!(parse_cli(&["todo", "--no-quiet"]).global.quiet_flag(), Some(false));
        assert_eq!(
            parse_cli(&["todo", "do", "3", "-q", "--no-quiet"]).global.quiet_flag(),
            Some(false)
        );
        assert_eq!(
            parse_cli(&["todo", "undo", "3", "--no-quiet", "-q"]).global.quiet_flag(),
            Some(true)
        );
    }

    #[test]
    fn read_commands_have_no_edit() {
        assert!(Commands::Status.into_edit().is_none());
        assert!(matches!(
            Commands::Mv { from: 3, to: 5 }.into_edit(),
            Some(Edit::Move { from: 3, to: 5 })
        ));
    }
}
