use std::path::Path;

use anyhow::Result;
use dialoguer::Select;

use ticket_tailor_core::config::TailorConfig;
use ticket_tailor_core::engine::{EngineKind, TicketEngine};
use ticket_tailor_genai::GenAiEngine;
use ticket_tailor_scan::ScanEngine;

use crate::output;

/// Write a default config file.
///
/// If no engine is given and stderr is a terminal, prompts for one;
/// otherwise the scan engine is used. Reports missing prerequisites for the
/// chosen engine as warnings.
pub fn run(config_path: &Path, engine: Option<EngineKind>, force: bool) -> Result<()> {
    output::print_header("ticket-tailor init");

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            config_path.display()
        );
    }

    let kind = match engine {
        Some(kind) => kind,
        None if console::Term::stderr().is_term() => {
            let options = [EngineKind::Scan, EngineKind::GenAi];
            let descriptions = &[
                "Local scan: deterministic, offline, instant",
                "Gemini: model-backed extraction and filling (needs an API key)",
            ];

            let selection = Select::new()
                .with_prompt("Select engine")
                .items(descriptions)
                .default(0)
                .interact()?;

            options[selection]
        }
        None => EngineKind::Scan,
    };

    output::print_step(1, 2, &format!("Writing {}", config_path.display()));
    let config = TailorConfig::default_for_engine(kind);
    config.save(config_path)?;

    output::print_step(2, 2, "Checking prerequisites");
    let engine = create_engine(kind, &config);
    match engine.check_prerequisites() {
        Ok(()) => output::print_success("All prerequisites met"),
        Err(missing) => {
            for m in &missing {
                output::print_warning(&format!("Missing: {} ({})", m.requirement, m.instructions));
            }
        }
    }

    output::print_success(&format!("Config written with {} engine", engine.display_name()));
    eprintln!();
    eprintln!("  Next steps:");
    eprintln!("    ticket-tailor template --output ticket.md");
    eprintln!("    ticket-tailor extract --template ticket.md");
    eprintln!("    ticket-tailor render --template ticket.md --interactive");
    eprintln!();

    Ok(())
}

/// Create the engine implementation for `kind`.
pub fn create_engine(kind: EngineKind, config: &TailorConfig) -> Box<dyn TicketEngine> {
    match kind {
        EngineKind::Scan => Box::new(ScanEngine::new()),
        EngineKind::GenAi => Box::new(GenAiEngine::new(config.genai.clone())),
    }
}
