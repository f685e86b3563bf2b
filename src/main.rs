use anyhow::Context;
use clap::Parser;
use resume_insight::utils::{logger, validation::Validate};
use resume_insight::{
    AnalysisEngine, CliConfig, LocalStorage, NaiveSentenceSegmenter, PlainTextSource,
    ProfileCatalog, ResumePipeline, TomlConfig,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting resume-insight CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(3);
    }

    // A TOML file replaces the built-in catalog and keyword defaults
    let catalog = match &config.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)
                .with_context(|| format!("failed to load config file: {}", path))?;
            if let Err(e) = toml_config.validate() {
                tracing::error!("❌ Config file validation failed: {}", e);
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(3);
            }
            if let Some(section) = &toml_config.classification {
                tracing::debug!("Using classification keywords from config file");
                if let Some(keywords) = &section.education_keywords {
                    config.education_keywords = keywords.clone();
                }
                if let Some(keywords) = &section.experience_keywords {
                    config.experience_keywords = keywords.clone();
                }
            }
            if let Some(path) = toml_config.output_path() {
                config.output_path = path.to_string();
            }
            toml_config.catalog()?
        }
        None => ProfileCatalog::with_default_profiles(),
    };
    tracing::info!(
        "Profile catalog loaded: {} profiles, {} skills in vocabulary",
        catalog.len(),
        catalog.vocabulary().len()
    );

    let text_source = PlainTextSource::new(LocalStorage::new(".".to_string()));
    let storage = LocalStorage::new(config.output_path.clone());
    let pipeline = ResumePipeline::new(
        text_source,
        NaiveSentenceSegmenter,
        storage,
        config,
        catalog,
    );

    let engine = AnalysisEngine::new(pipeline);

    match engine.run().await {
        Ok(report_path) => {
            tracing::info!("✅ Resume analysis completed successfully!");
            println!("✅ Resume analysis completed successfully!");
            println!("📁 Artifacts saved to: {}", report_path);
        }
        Err(e) => {
            tracing::error!(
                "❌ Resume analysis failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                resume_insight::utils::error::ErrorSeverity::Low => 0,
                resume_insight::utils::error::ErrorSeverity::Medium => 2,
                resume_insight::utils::error::ErrorSeverity::High => 1,
                resume_insight::utils::error::ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }

    Ok(())
}
