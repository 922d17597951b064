/// Main file
mod absolute_path;
mod app_log;
mod args;
mod emitter;
mod error;
mod interactive;
mod materializer;
mod progressbar;
mod project_properties;
mod template;
mod template_filters;
mod template_variables;
mod user_parsed_input;

use app_log::log_env_init;
use args::{resolve_args, NewArgs};
use emitter::FsEmitter;
use interactive::{collect_answers, LinePrompter, Prompter, TerminalPrompter};
use materializer::{Materializer, Outcome};
use project_properties::ProjectProperties;
use template::LiquidRenderer;
use template_variables::ProjectDir;
use user_parsed_input::UserParsedInput;

use anyhow::Result;
use console::style;
use log::{debug, info, warn};
use std::io::{self, IsTerminal};

fn main() -> Result<()> {
    log_env_init();
    let args = resolve_args();
    match generate(&args)? {
        Outcome::Created(project_dir) => info!(
            "✨ {} {} {}",
            style("Done!").bold().green(),
            style("New project created").bold(),
            style(project_dir.display()).underlined()
        ),
        Outcome::Rejected(project_dir) => warn!(
            "{} {}",
            style(project_dir.display()).bold().yellow(),
            style("already exists, nothing was created").bold()
        ),
    }
    Ok(())
}

/// Ask the questions, then write the project
fn generate(args: &NewArgs) -> Result<Outcome> {
    let user_parsed_input = UserParsedInput::try_from_args(args)?;
    let destination = ProjectDir::from(&user_parsed_input);

    let answers = {
        let mut prompter = prompter();
        collect_answers(prompter.as_mut())?
    };
    let props = ProjectProperties::new(destination.into_path(), user_parsed_input.name(), answers);
    for warning in props.convention_warnings() {
        warn!("{}", style(warning).yellow());
    }
    debug!("🔧 {props:#?}");

    let renderer = LiquidRenderer::new()?;
    let mut materializer = Materializer::new(renderer, FsEmitter);
    info!(
        "🔧 {}",
        style(format!("Destination: {} ...", props.full_project_path.display()))
            .bold()
            .yellow()
    );
    Ok(materializer.materialize(&props)?)
}

/// dialoguer when a person is at the keyboard, plain lines otherwise
fn prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        Box::new(TerminalPrompter)
    } else {
        Box::new(LinePrompter::new(io::stdin().lock(), io::stdout()))
    }
}
