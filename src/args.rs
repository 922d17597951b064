use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

/// `neon-new <NAME>` is short for `neon-new new <NAME>`.
#[derive(Parser)]
#[command(
    name = "neon-new",
    version,
    about,
    arg_required_else_help(true),
    args_conflicts_with_subcommands(true),
    disable_help_subcommand(true),
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Project name, used verbatim as the directory to create and as the package name
    #[arg(value_name = "NAME")]
    name: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Creates a new Neon app (default command)
    New(NewArgs),
}

#[derive(Clone, Debug, Args)]
pub struct NewArgs {
    /// Project name, used verbatim as the directory to create and as the package name
    #[arg(value_parser)]
    pub name: String,
}

impl Cli {
    /// Fold the default command and the explicit `new` into the same arguments
    pub fn into_new_args(self) -> Result<NewArgs, clap::Error> {
        match (self.command, self.name) {
            (Some(Command::New(args)), _) => Ok(args),
            (None, Some(name)) => Ok(NewArgs { name }),
            (None, None) => Err(Self::command().error(
                ErrorKind::MissingRequiredArgument,
                "a project name is required",
            )),
        }
    }
}

/// To get the arguments list from terminal
/// Return : work arguments
pub fn resolve_args() -> NewArgs {
    Cli::parse()
        .into_new_args()
        .unwrap_or_else(|e| e.exit())
}
