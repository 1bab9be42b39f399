//! Template and value sources for the CLI.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use dialoguer::Input;

use ticket_tailor_core::config::TailorConfig;
use ticket_tailor_core::engine::VariableValues;
use ticket_tailor_core::error::TailorError;
use ticket_tailor_core::form;
use ticket_tailor_core::templates::embedded;

use crate::{TemplateArgs, ValueArgs};

/// clap value parser for `--var NAME=VALUE`.
pub fn parse_var(raw: &str) -> std::result::Result<(String, String), String> {
    form::parse_assignment(raw).ok_or_else(|| format!("expected NAME=VALUE, got '{raw}'"))
}

/// Load the template from `--template`, the config file, or the built-in default.
pub fn load_template(
    args: &TemplateArgs,
    config: &TailorConfig,
    config_path: &Path,
) -> Result<String> {
    let path = match &args.template {
        Some(path) if path.as_os_str() == "-" => {
            let mut template = String::new();
            std::io::stdin()
                .read_to_string(&mut template)
                .context("failed to read template from stdin")?;
            return Ok(template);
        }
        Some(path) => path.clone(),
        None => match config.template_path(config_path) {
            Some(path) => path,
            None => {
                tracing::debug!("no template configured, using built-in default");
                return Ok(embedded::DEFAULT_TICKET.to_string());
            }
        },
    };

    if !path.exists() {
        return Err(TailorError::TemplateNotFound(path).into());
    }
    std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read template {}", path.display()))
}

/// Collect values from `--values` then `--var`, later sources winning.
pub fn load_values(args: &ValueArgs) -> Result<VariableValues> {
    let mut values = match &args.values {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read values file {}", path.display()))?;
            serde_json::from_str::<VariableValues>(&contents).with_context(|| {
                format!(
                    "values file {} must be a JSON object of strings",
                    path.display()
                )
            })?
        }
        None => VariableValues::new(),
    };

    for (name, value) in &args.vars {
        values.insert(name.clone(), value.clone());
    }
    Ok(values)
}

/// Ask for a value for every variable that is still unfilled.
pub fn prompt_missing(variables: &[String], values: &mut VariableValues) -> Result<()> {
    for name in form::missing_values(variables, values) {
        let value: String = Input::new()
            .with_prompt(form::field_label(&name))
            .allow_empty(true)
            .interact_text()?;
        values.insert(name, value);
    }
    Ok(())
}
