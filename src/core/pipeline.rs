use crate::core::catalog::ProfileCatalog;
use crate::core::classifier::{self, ClassificationKeywords};
use crate::core::detector;
use crate::core::scorer;
use crate::core::{ConfigProvider, Pipeline, SentenceSegmenter, Storage, TextSource};
use crate::domain::model::{ExtractedEntities, ResumeAnalysis};
use crate::utils::error::{AnalysisError, Result};

pub const REPORT_FILENAME: &str = "resume_analysis_report.txt";
pub const ANALYSIS_FILENAME: &str = "analysis.json";
pub const SKILLS_CHART_FILENAME: &str = "skills_frequency.csv";
pub const PROFILE_CHART_FILENAME: &str = "profile_scores.csv";
pub const GAP_CHART_FILENAME: &str = "skills_analysis.csv";

/// One-document analysis pipeline: extract text, run the pure core, write
/// artifacts. Collaborators are injected explicitly; the catalog is built
/// once before the pipeline exists and is read-only from here on.
pub struct ResumePipeline<T, G, S, C>
where
    T: TextSource,
    G: SentenceSegmenter,
    S: Storage,
    C: ConfigProvider,
{
    text_source: T,
    segmenter: G,
    storage: S,
    config: C,
    catalog: ProfileCatalog,
    keywords: ClassificationKeywords,
}

impl<T, G, S, C> ResumePipeline<T, G, S, C>
where
    T: TextSource,
    G: SentenceSegmenter,
    S: Storage,
    C: ConfigProvider,
{
    pub fn new(text_source: T, segmenter: G, storage: S, config: C, catalog: ProfileCatalog) -> Self {
        let keywords =
            ClassificationKeywords::new(config.education_keywords(), config.experience_keywords());
        Self {
            text_source,
            segmenter,
            storage,
            config,
            catalog,
            keywords,
        }
    }

    pub fn catalog(&self) -> &ProfileCatalog {
        &self.catalog
    }

    fn build_report(&self, analysis: &ResumeAnalysis) -> String {
        let mut report = String::new();
        report.push_str("Resume Analysis Report\n");
        report.push_str(&"=".repeat(25));
        report.push('\n');
        report.push_str(&format!(
            "Generated: {}\n\n",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if let Some(job_description) = self.config.job_description() {
            report.push_str(&format!("Job Description:\n{}\n\n", job_description.trim()));
        }

        match &analysis.match_result.best_profile {
            Some(profile) => {
                report.push_str(&format!("Suggested Job Profile: {}\n\n", profile));
            }
            None => {
                report.push_str("Suggested Job Profile: no match found\n\n");
            }
        }

        let detected: Vec<&str> = analysis
            .entities
            .detected_skills
            .iter()
            .map(String::as_str)
            .collect();
        report.push_str("Strengths:\n");
        report.push_str(&format!(
            "- Skills Mentioned: {}\n",
            if detected.is_empty() {
                "None found".to_string()
            } else {
                detected.join(", ")
            }
        ));
        report.push_str(&format!(
            "- Education Level: {}\n\n",
            analysis.education_level.as_deref().unwrap_or("Not specified")
        ));

        report.push_str("Weaknesses:\n");
        match &analysis.match_result.best_profile {
            Some(profile) => {
                report.push_str(&format!(
                    "- Missing Skills for {} Profile: {}\n\n",
                    profile,
                    if analysis.match_result.missing_skills.is_empty() {
                        "None".to_string()
                    } else {
                        analysis.match_result.missing_skills.join(", ")
                    }
                ));
            }
            None => {
                report.push_str("- No profile matched the detected skills\n\n");
            }
        }

        report.push_str("Profile Scores (Skill Matches):\n");
        for entry in &analysis.match_result.scoreboard.entries {
            report.push_str(&format!(
                "- {}: {} matching skills\n",
                entry.profile, entry.matched
            ));
        }
        report.push('\n');

        report.push_str("Recommendations:\n");
        match &analysis.match_result.best_profile {
            Some(profile) if !analysis.match_result.missing_skills.is_empty() => {
                report.push_str(&format!(
                    "- To improve your profile as a {}, consider gaining skills in: \n",
                    profile
                ));
                report.push_str(&format!(
                    "{}.\n",
                    analysis.match_result.missing_skills.join(", ")
                ));
            }
            Some(_) => {
                report.push_str("- No additional skills are missing for your suggested profile!\n");
            }
            None => {
                report.push_str(
                    "- No catalog profile matched; consider adding recognized skills to the resume.\n",
                );
            }
        }
        report.push_str(
            "- Continue building expertise in areas related to your suggested profile to improve competitiveness.\n",
        );

        report.push_str("\nVisualizations:\n");
        report.push_str(&format!("1. Skills Mentioned: {}\n", SKILLS_CHART_FILENAME));
        report.push_str(&format!("2. Profile Match: {}\n", PROFILE_CHART_FILENAME));
        report.push_str(&format!("3. Skills Analysis: {}\n", GAP_CHART_FILENAME));

        report
    }

    fn skills_chart_csv(&self, analysis: &ResumeAnalysis) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["skill", "count"])?;
        for frequency in &analysis.skill_frequencies {
            writer.write_record([frequency.skill.as_str(), &frequency.count.to_string()])?;
        }
        finish_csv(writer)
    }

    fn profile_chart_csv(&self, analysis: &ResumeAnalysis) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["profile", "matching_skills"])?;
        for entry in &analysis.match_result.scoreboard.entries {
            writer.write_record([entry.profile.as_str(), &entry.matched.to_string()])?;
        }
        finish_csv(writer)
    }

    fn gap_chart_csv(&self, analysis: &ResumeAnalysis) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["category", "count"])?;
        writer.write_record([
            "missing_skills",
            &analysis.match_result.missing_skills.len().to_string(),
        ])?;
        writer.write_record([
            "present_skills",
            &analysis.entities.detected_skills.len().to_string(),
        ])?;
        finish_csv(writer)
    }
}

fn finish_csv(writer: csv::Writer<Vec<u8>>) -> Result<Vec<u8>> {
    writer
        .into_inner()
        .map_err(|e| AnalysisError::ProcessingError {
            message: format!("failed to flush chart data: {}", e),
        })
}

#[async_trait::async_trait]
impl<T, G, S, C> Pipeline for ResumePipeline<T, G, S, C>
where
    T: TextSource,
    G: SentenceSegmenter,
    S: Storage,
    C: ConfigProvider,
{
    async fn extract(&self) -> Result<String> {
        tracing::debug!("Reading resume text from: {}", self.config.resume_path());
        let text = self.text_source.load_text(self.config.resume_path()).await?;
        tracing::debug!("Extracted {} characters", text.len());
        Ok(text)
    }

    async fn analyze(&self, text: String) -> Result<ResumeAnalysis> {
        let empty_input = text.trim().is_empty();
        if empty_input {
            tracing::warn!("Resume text is empty; producing sentinel results");
        }

        let sentences = self.segmenter.split(&text);
        tracing::debug!("Segmented into {} sentences", sentences.len());

        // Classification and detection both read the same immutable text
        // and are independent of each other.
        let (education_mentions, experience_mentions) =
            classifier::classify(&sentences, &self.keywords);
        let detected_skills = detector::detect_skills(&text, self.catalog.vocabulary());
        let skill_frequencies = detector::skill_frequencies(&text, &detected_skills);
        let education_level = classifier::education_level(&education_mentions);

        let match_result = scorer::score(&detected_skills, &self.catalog);

        Ok(ResumeAnalysis {
            entities: ExtractedEntities {
                education_mentions,
                experience_mentions,
                detected_skills,
                empty_input,
            },
            match_result,
            education_level,
            skill_frequencies,
        })
    }

    async fn publish(&self, analysis: ResumeAnalysis) -> Result<String> {
        let report = self.build_report(&analysis);
        self.storage
            .write_file(REPORT_FILENAME, report.as_bytes())
            .await?;

        let json = serde_json::to_vec_pretty(&analysis)?;
        self.storage.write_file(ANALYSIS_FILENAME, &json).await?;

        if analysis.skill_frequencies.is_empty() {
            tracing::info!("No skills found to visualize");
        } else {
            let data = self.skills_chart_csv(&analysis)?;
            self.storage.write_file(SKILLS_CHART_FILENAME, &data).await?;
        }

        if analysis.match_result.scoreboard.has_any_match() {
            let data = self.profile_chart_csv(&analysis)?;
            self.storage
                .write_file(PROFILE_CHART_FILENAME, &data)
                .await?;
        } else {
            tracing::info!("No profile matches found for visualization");
        }

        if analysis.entities.detected_skills.is_empty()
            && analysis.match_result.missing_skills.is_empty()
        {
            tracing::info!("No missing or present skills found for visualization");
        } else {
            let data = self.gap_chart_csv(&analysis)?;
            self.storage.write_file(GAP_CHART_FILENAME, &data).await?;
        }

        Ok(self.config.output_path().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::NaiveSentenceSegmenter;
    use crate::core::catalog::ProfileCatalog;
    use crate::domain::model::ProfileDefinition;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned().ok_or_else(|| {
                AnalysisError::IoError(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("File not found: {}", path),
                ))
            })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FixedTextSource {
        text: String,
    }

    impl TextSource for FixedTextSource {
        async fn load_text(&self, _path: &str) -> Result<String> {
            Ok(self.text.clone())
        }
    }

    struct MockConfig {
        resume_path: String,
        output_path: String,
        job_description: Option<String>,
        education_keywords: Vec<String>,
        experience_keywords: Vec<String>,
    }

    impl MockConfig {
        fn new() -> Self {
            Self {
                resume_path: "resume.txt".to_string(),
                output_path: "test_output".to_string(),
                job_description: None,
                education_keywords: vec!["education".to_string()],
                experience_keywords: vec!["experience".to_string(), "work".to_string()],
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn resume_path(&self) -> &str {
            &self.resume_path
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn job_description(&self) -> Option<&str> {
            self.job_description.as_deref()
        }

        fn education_keywords(&self) -> &[String] {
            &self.education_keywords
        }

        fn experience_keywords(&self) -> &[String] {
            &self.experience_keywords
        }
    }

    fn test_catalog() -> ProfileCatalog {
        ProfileCatalog::build(vec![
            ProfileDefinition::new("Software Developer", vec!["Python", "Java", "Git"]),
            ProfileDefinition::new("AI Engineer", vec!["Python", "Machine Learning", "PyTorch"]),
        ])
        .unwrap()
    }

    fn pipeline_for(
        text: &str,
        config: MockConfig,
        storage: MockStorage,
    ) -> ResumePipeline<FixedTextSource, NaiveSentenceSegmenter, MockStorage, MockConfig> {
        ResumePipeline::new(
            FixedTextSource {
                text: text.to_string(),
            },
            NaiveSentenceSegmenter,
            storage,
            config,
            test_catalog(),
        )
    }

    #[tokio::test]
    async fn analyze_runs_the_full_core_chain() {
        let text = "My education includes a Bachelor of Engineering. \
                    Work experience with Python and Git at two startups.";
        let pipeline = pipeline_for(text, MockConfig::new(), MockStorage::new());

        let analysis = pipeline.analyze(text.to_string()).await.unwrap();

        assert_eq!(analysis.entities.education_mentions.len(), 1);
        assert_eq!(analysis.entities.experience_mentions.len(), 1);
        assert!(analysis.entities.detected_skills.contains("python"));
        assert!(analysis.entities.detected_skills.contains("git"));
        assert!(!analysis.entities.empty_input);
        assert_eq!(analysis.education_level.as_deref(), Some("Bachelor's"));
        assert_eq!(
            analysis.match_result.best_profile.as_deref(),
            Some("Software Developer")
        );
        assert_eq!(analysis.match_result.missing_skills, vec!["Java"]);
    }

    #[tokio::test]
    async fn analyze_flags_empty_input_and_returns_sentinel() {
        let pipeline = pipeline_for("", MockConfig::new(), MockStorage::new());

        let analysis = pipeline.analyze("   ".to_string()).await.unwrap();

        assert!(analysis.entities.empty_input);
        assert!(analysis.entities.detected_skills.is_empty());
        assert_eq!(analysis.match_result.best_profile, None);
        assert!(analysis.match_result.missing_skills.is_empty());
        // Scoreboard still carries one entry per profile
        assert_eq!(analysis.match_result.scoreboard.entries.len(), 2);
    }

    #[tokio::test]
    async fn publish_writes_report_json_and_chart_data() {
        let storage = MockStorage::new();
        let text = "Experience with Python, Git, and machine learning projects.";
        let pipeline = pipeline_for(text, MockConfig::new(), storage.clone());

        let analysis = pipeline.analyze(text.to_string()).await.unwrap();
        let output_path = pipeline.publish(analysis).await.unwrap();

        assert_eq!(output_path, "test_output");

        let report =
            String::from_utf8(storage.get_file(REPORT_FILENAME).await.unwrap()).unwrap();
        assert!(report.contains("Resume Analysis Report"));
        assert!(report.contains("Suggested Job Profile: "));
        assert!(report.contains("Profile Scores (Skill Matches):"));
        assert!(report.contains("Recommendations:"));

        let json = storage.get_file(ANALYSIS_FILENAME).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert!(parsed["match_result"]["best_profile"].is_string());

        let skills_csv =
            String::from_utf8(storage.get_file(SKILLS_CHART_FILENAME).await.unwrap()).unwrap();
        assert!(skills_csv.starts_with("skill,count"));
        assert!(skills_csv.contains("python"));

        let profile_csv =
            String::from_utf8(storage.get_file(PROFILE_CHART_FILENAME).await.unwrap()).unwrap();
        assert!(profile_csv.contains("Software Developer"));
        assert!(profile_csv.contains("AI Engineer"));
    }

    #[tokio::test]
    async fn publish_skips_chart_data_when_nothing_matched() {
        let storage = MockStorage::new();
        let pipeline = pipeline_for("", MockConfig::new(), storage.clone());

        let analysis = pipeline.analyze(String::new()).await.unwrap();
        pipeline.publish(analysis).await.unwrap();

        // Report and JSON always exist; chart data does not
        assert!(storage.get_file(REPORT_FILENAME).await.is_some());
        assert!(storage.get_file(ANALYSIS_FILENAME).await.is_some());
        assert!(storage.get_file(SKILLS_CHART_FILENAME).await.is_none());
        assert!(storage.get_file(PROFILE_CHART_FILENAME).await.is_none());
        assert!(storage.get_file(GAP_CHART_FILENAME).await.is_none());

        let report =
            String::from_utf8(storage.get_file(REPORT_FILENAME).await.unwrap()).unwrap();
        assert!(report.contains("Suggested Job Profile: no match found"));
        assert!(report.contains("No profile matched the detected skills"));
    }

    #[tokio::test]
    async fn report_includes_job_description_when_supplied() {
        let storage = MockStorage::new();
        let mut config = MockConfig::new();
        config.job_description = Some("Looking for a Python developer with Git.".to_string());
        let text = "Experience with Python.";
        let pipeline = pipeline_for(text, config, storage.clone());

        let analysis = pipeline.analyze(text.to_string()).await.unwrap();
        pipeline.publish(analysis).await.unwrap();

        let report =
            String::from_utf8(storage.get_file(REPORT_FILENAME).await.unwrap()).unwrap();
        assert!(report.contains("Job Description:"));
        assert!(report.contains("Looking for a Python developer with Git."));
    }

    #[tokio::test]
    async fn report_sections_appear_in_fixed_order() {
        let storage = MockStorage::new();
        let text = "Education: bachelor degree. Experience with Python and Git.";
        let pipeline = pipeline_for(text, MockConfig::new(), storage.clone());

        let analysis = pipeline.analyze(text.to_string()).await.unwrap();
        pipeline.publish(analysis).await.unwrap();

        let report =
            String::from_utf8(storage.get_file(REPORT_FILENAME).await.unwrap()).unwrap();

        let order = [
            "Resume Analysis Report",
            "Suggested Job Profile:",
            "Strengths:",
            "Weaknesses:",
            "Profile Scores (Skill Matches):",
            "Recommendations:",
            "Visualizations:",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|section| report.find(section).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
