use std::path::Path;

use anyhow::Result;

use ticket_tailor_core::templates::embedded;

use crate::output;

/// Print or write the built-in default ticket template.
pub fn run(output_path: Option<&Path>) -> Result<()> {
    match output_path {
        Some(path) => {
            std::fs::write(path, embedded::DEFAULT_TICKET)?;
            output::print_success(&format!("Default template written to {}", path.display()));
        }
        None => print!("{}", embedded::DEFAULT_TICKET),
    }
    Ok(())
}
