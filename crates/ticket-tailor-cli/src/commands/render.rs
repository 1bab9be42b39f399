use std::io::Write;
use std::path::Path;

use anyhow::Result;

use ticket_tailor_core::engine::EngineKind;
use ticket_tailor_core::form;

use crate::{input, output, TemplateArgs, ValueArgs};

/// Fill a template and print or write the ticket.
///
/// Values come from `--values`, then `--var`, then (with `--interactive`)
/// prompts for whatever is still blank. Unfilled placeholders are left in the
/// output unless `--require-all` is set, in which case nothing is rendered.
pub async fn run(
    config_path: &Path,
    engine: Option<EngineKind>,
    source: &TemplateArgs,
    value_args: &ValueArgs,
    interactive: bool,
    require_all: bool,
    output_path: Option<&Path>,
) -> Result<()> {
    output::print_header("ticket-tailor render");

    let session = super::open_session(config_path, engine)?;
    let template = input::load_template(source, &session.config, config_path)?;
    output::print_key_value("Engine", session.engine.display_name());

    output::print_step(1, 3, "Analyzing template...");
    let spinner = output::spinner("Extracting variables...");
    let variables = session.engine.extract(&template).await;
    spinner.finish_and_clear();
    let variables = variables?;
    output::print_key_value("Variables", &variables.join(", "));

    output::print_step(2, 3, "Collecting values...");
    let supplied = input::load_values(value_args)?;
    let mut values = form::seed_values(&variables, &supplied);
    if interactive {
        input::prompt_missing(&variables, &mut values)?;
    }

    if require_all {
        form::require_all(&variables, &values)?;
    } else {
        let missing = form::missing_values(&variables, &values);
        if !missing.is_empty() {
            output::print_warning(&format!("Left unfilled: {}", missing.join(", ")));
        }
    }

    output::print_step(3, 3, "Generating ticket...");
    let spinner = output::spinner("Filling template...");
    let ticket = session.engine.render(&template, &values).await;
    spinner.finish_and_clear();
    let ticket = ticket?;

    match output_path {
        Some(path) => {
            std::fs::write(path, &ticket)?;
            output::print_success(&format!("Ticket written to {}", path.display()));
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(ticket.as_bytes())?;
            stdout.flush()?;
            output::print_success("Ticket generated");
        }
    }

    Ok(())
}
