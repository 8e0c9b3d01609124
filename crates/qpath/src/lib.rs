//! ## Crate layout
//! - `schema`: declaration records, the entity graph, and the passes that
//!   build it (inclusion policy, classification, assembly).
//! - `build`: Kotlin rendering of an assembled graph.
//! - `config`: generator settings from option maps or TOML.
//!
//! [`Processor`] ties them together for a host: it collects declarations,
//! then assembles, renders and emits one pass at a time.

pub use qpath_build as build;
pub use qpath_config_build as config;
pub use qpath_schema as schema;

mod emit;
mod processor;

pub use emit::{EmitError, Emitter, FsEmitter, MemoryEmitter};
pub use processor::{PassReport, Processor};

use qpath_config_build::ConfigError;
use qpath_schema::decl::Declaration;
use thiserror::Error as ThisError;

/// Workspace version re-export for downstream tooling/tests.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

///
/// Error
///

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error("invalid declaration input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a JSON array of declaration records.
pub fn load_declarations(json: &str) -> Result<Vec<Declaration>, Error> {
    Ok(serde_json::from_str(json)?)
}

///
/// Prelude
///

pub mod prelude {
    pub use crate::{
        EmitError, Emitter, Error, FsEmitter, MemoryEmitter, PassReport, Processor,
        load_declarations,
    };
    pub use qpath_build::{GeneratedFile, generate};
    pub use qpath_config_build::{ConfigError, Settings};
    pub use qpath_schema::prelude::*;
}
