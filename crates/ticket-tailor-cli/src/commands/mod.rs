//! CLI command implementations for ticket-tailor.
//!
//! Each module corresponds to a subcommand (`ticket-tailor <command>`).

pub mod check;
pub mod extract;
pub mod init;
pub mod render;
pub mod template;

use std::path::Path;

use anyhow::Result;

use ticket_tailor_core::config::TailorConfig;
use ticket_tailor_core::engine::{EngineKind, TicketEngine};

/// Loaded configuration plus the engine it selects.
pub struct Session {
    pub config: TailorConfig,
    pub engine: Box<dyn TicketEngine>,
}

/// Load config (or defaults) and build the engine, `--engine` taking precedence.
pub fn open_session(config_path: &Path, engine: Option<EngineKind>) -> Result<Session> {
    let config = TailorConfig::load_or_default(config_path)?;
    let kind = engine.unwrap_or(config.engine);
    let engine = init::create_engine(kind, &config);
    tracing::debug!("using {} engine", engine.name());
    Ok(Session { config, engine })
}
