use std::path::Path;

use anyhow::Result;

use ticket_tailor_core::engine::EngineKind;

use crate::{input, output, TemplateArgs};

/// List the variables of a template, one per line or as a JSON array.
pub async fn run(
    config_path: &Path,
    engine: Option<EngineKind>,
    source: &TemplateArgs,
    json: bool,
) -> Result<()> {
    let session = super::open_session(config_path, engine)?;
    let template = input::load_template(source, &session.config, config_path)?;

    let spinner = output::spinner("Analyzing template...");
    let variables = session.engine.extract(&template).await;
    spinner.finish_and_clear();
    let variables = variables?;

    if json {
        println!("{}", serde_json::to_string_pretty(&variables)?);
    } else {
        for name in &variables {
            println!("{name}");
        }
    }

    output::print_success(&format!("Found {} variables", variables.len()));
    Ok(())
}
