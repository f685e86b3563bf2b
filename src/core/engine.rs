use crate::core::Pipeline;
use crate::utils::error::Result;

/// Drives the three pipeline stages in order. One engine run handles one
/// document; concurrent runs over different documents share nothing but
/// the read-only catalog.
pub struct AnalysisEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AnalysisEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting resume analysis...");

        tracing::info!("Extracting resume text...");
        let text = self.pipeline.extract().await?;
        tracing::info!("Extracted {} characters", text.len());

        tracing::info!("Analyzing resume...");
        let analysis = self.pipeline.analyze(text).await?;
        tracing::info!(
            "Detected {} skills, best profile: {}",
            analysis.entities.detected_skills.len(),
            analysis
                .match_result
                .best_profile
                .as_deref()
                .unwrap_or("no match")
        );

        tracing::info!("Writing artifacts...");
        let output_path = self.pipeline.publish(analysis).await?;
        tracing::info!("Artifacts saved to: {}", output_path);

        Ok(output_path)
    }
}
