use crate::domain::model::ResumeAnalysis;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Turns a document reference into a flat text string. PDF or other
/// paginated extraction lives behind this boundary, outside the crate.
pub trait TextSource: Send + Sync {
    fn load_text(&self, path: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Splits document text into sentences. The core only depends on this
/// sequence-of-sentences contract, never on a specific NLP implementation.
pub trait SentenceSegmenter: Send + Sync {
    fn split(&self, text: &str) -> Vec<String>;
}

pub trait ConfigProvider: Send + Sync {
    fn resume_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn job_description(&self) -> Option<&str>;
    fn education_keywords(&self) -> &[String];
    fn experience_keywords(&self) -> &[String];
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<String>;
    async fn analyze(&self, text: String) -> Result<ResumeAnalysis>;
    async fn publish(&self, analysis: ResumeAnalysis) -> Result<String>;
}
