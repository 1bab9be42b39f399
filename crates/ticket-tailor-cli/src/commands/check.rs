use std::path::Path;

use anyhow::Result;

use ticket_tailor_core::engine::EngineKind;
use ticket_tailor_core::error::TailorError;
use ticket_tailor_core::form;

use crate::{input, output, TemplateArgs, ValueArgs};

/// Report which variables have values. Fails if any are missing.
pub async fn run(
    config_path: &Path,
    engine: Option<EngineKind>,
    source: &TemplateArgs,
    value_args: &ValueArgs,
) -> Result<()> {
    output::print_header("ticket-tailor check");

    let session = super::open_session(config_path, engine)?;
    let template = input::load_template(source, &session.config, config_path)?;

    let spinner = output::spinner("Analyzing template...");
    let variables = session.engine.extract(&template).await;
    spinner.finish_and_clear();
    let variables = variables?;

    let values = input::load_values(value_args)?;
    for name in &variables {
        if form::is_filled(&values, name) {
            output::print_success(name);
        } else {
            output::print_missing(name);
        }
    }

    let missing = form::missing_values(&variables, &values);
    if !missing.is_empty() {
        return Err(TailorError::MissingValues(missing).into());
    }

    output::print_success(&format!("All {} variables filled", variables.len()));
    Ok(())
}
