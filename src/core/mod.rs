pub mod catalog;
pub mod classifier;
pub mod detector;
pub mod engine;
pub mod pipeline;
pub mod scorer;

pub use crate::domain::model::{
    ExtractedEntities, ProfileDefinition, ProfileMatchResult, ProfileScoreboard, ResumeAnalysis,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, SentenceSegmenter, Storage, TextSource};
pub use crate::utils::error::Result;
