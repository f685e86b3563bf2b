pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{LocalStorage, TomlConfig};

pub use adapters::{NaiveSentenceSegmenter, PlainTextSource};
pub use core::catalog::ProfileCatalog;
pub use core::{engine::AnalysisEngine, pipeline::ResumePipeline};
pub use utils::error::{AnalysisError, Result};
