// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use crate::assessment::AssessmentGenerator;
use crate::classifier::ClassifierClient;
use crate::config::ScreeningConfig;

/// Arguments for the analyze command
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the retinal image file
    pub image: PathBuf,

    /// Classification server base URL
    #[arg(long, env = "CLASSIFIER_BASE_URL")]
    pub server: Option<String>,

    /// Generate an explanatory assessment for the top class
    #[arg(long)]
    pub assess: bool,
}

/// Arguments for the health command
#[derive(Args, Debug)]
pub struct HealthArgs {
    /// Classification server base URL
    #[arg(long, env = "CLASSIFIER_BASE_URL")]
    pub server: Option<String>,
}

fn load_config(server: Option<String>) -> ScreeningConfig {
    // Load environment variables from .env file if it exists
    dotenv::dotenv().ok();

    let mut config = ScreeningConfig::from_env();
    if let Some(server) = server {
        config.classifier_base_url = server;
    }
    config
}

/// Classify a retinal image and print the severity distribution
pub async fn analyze(args: AnalyzeArgs) -> Result<()> {
    let config = load_config(args.server);
    let client = ClassifierClient::new(&config)?;

    println!("🔍 Analyzing {}...", args.image.display());
    let result = client.analyze_image(&args.image).await?;

    println!("\nClassification: {}", result.highest_probability_class);
    let mut distribution: Vec<(&String, &f64)> = result.detailed_classification.iter().collect();
    distribution.sort_by(|a, b| b.1.partial_cmp(a.1).unwrap_or(std::cmp::Ordering::Equal));
    for (label, probability) in distribution {
        println!("  {:<18} {:.1}%", label, probability);
    }

    if args.assess {
        let generator = AssessmentGenerator::new(&config)?;
        let probability = result
            .detailed_classification
            .get(&result.highest_probability_class)
            .copied()
            .unwrap_or(0.0);
        let outcome = generator
            .generate(&result.highest_probability_class, probability)
            .await;

        let source = if outcome.used_fallback() {
            "offline fallback"
        } else {
            "generated"
        };
        println!("\nAssessment ({}):", source);
        println!("  Description: {}", outcome.assessment.description);
        println!("  Cause:       {}", outcome.assessment.cause);
        println!("  Remedy:      {}", outcome.assessment.remedy);
    }

    Ok(())
}

/// Query the classification server's health endpoint
pub async fn health(args: HealthArgs) -> Result<()> {
    let config = load_config(args.server);
    let client = ClassifierClient::new(&config)?;

    let status = client.check_server_health().await;
    println!("{}", serde_json::to_string_pretty(&status)?);

    Ok(())
}
