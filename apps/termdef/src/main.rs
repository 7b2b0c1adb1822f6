mod config;
mod data;
mod errors;
mod evaluation;
mod llm_client;
mod optimizer;
mod pipeline;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::data::{dev::devset, train::trainset};
use crate::evaluation::{definition_match, evaluate};
use crate::llm_client::OllamaClient;
use crate::optimizer::BootstrapFewShot;
use crate::pipeline::program::{LlmTermOracle, Prediction, Program, ValidateThenDefine};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (faults on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting termdef harness v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = OllamaClient::new(config.ollama_url.clone(), config.ollama_model.clone());
    info!("LLM client initialized (model: {})", llm.model());

    // Build the two-stage program
    let oracle = Arc::new(LlmTermOracle::new(llm));
    let program = ValidateThenDefine::new(oracle);

    // Compile it: bootstrap few-shot demonstrations from the train set
    let optimizer =
        BootstrapFewShot::new(definition_match).with_max_demos(config.max_bootstrap_demos);
    let compiled = optimizer.compile(&program, &trainset()).await?;
    info!(
        "Program compiled with {} demonstration(s)",
        compiled.demos().len()
    );

    // Dev-set inspection — tuning signal only, the optimizer never sees it
    let dev = evaluate(&compiled, &devset()).await;
    info!(
        "Dev set exact-match: {}/{} ({:.0}%)",
        dev.correct,
        dev.total,
        dev.score() * 100.0
    );

    // Run the compiled program on fresh terms. "grapes" is outside the
    // train set, so the model has to generalize (or reject).
    for term in ["Artificial Intelligence", "Deep Learning", "grapes"] {
        let prediction = compiled.forward(term).await?;
        print_prediction(&prediction);
    }

    Ok(())
}

fn print_prediction(prediction: &Prediction) {
    let rule = "=".repeat(50);

    println!("\n{rule}");
    println!("TERM: {}", prediction.term);
    println!("{rule}");

    if prediction.is_valid {
        println!("\nReason: {}", prediction.reason);
    } else {
        println!("\nRejected: {}", prediction.reason);
    }

    println!("\nDefinition: {}", prediction.definition);
    println!("{rule}");
}
