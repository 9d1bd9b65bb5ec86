//! mood-compass CLI
//!
//! Reads one survey payload (first argument, or stdin when absent or `-`),
//! writes the analysis JSON to stdout. Logs go to stderr.

use std::io::{self, Read};
use std::process::ExitCode;
use std::sync::Arc;

use mood_compass::adapters::{LlmRiskClassifier, OpenAIConfig, OpenAIProvider};
use mood_compass::application::AnalyzeSurveyHandler;
use mood_compass::config::{AppConfig, ConfigError, LogFormat, LoggingConfig};
use mood_compass::ports::AIError;

const EXIT_CONFIG: u8 = 2;
const EXIT_INPUT: u8 = 1;

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    if matches!(args.first().map(String::as_str), Some("-h" | "--help")) {
        print_help();
        return ExitCode::SUCCESS;
    }

    let config = match load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("mood-compass: {}", err);
            return ExitCode::from(EXIT_CONFIG);
        }
    };

    init_tracing(&config.logging);

    let payload = match read_payload(args.first().map(String::as_str)) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(error = %err, "Failed to read survey payload from stdin");
            return ExitCode::from(EXIT_INPUT);
        }
    };

    let handler = build_handler(&config);
    println!("{}", handler.handle_json(&payload).await);

    ExitCode::SUCCESS
}

fn load_config() -> Result<AppConfig, ConfigError> {
    let config = AppConfig::load()?;
    config.validate()?;
    Ok(config)
}

fn init_tracing(logging: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(logging.env_filter())
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.init(),
    }
}

fn read_payload(arg: Option<&str>) -> io::Result<String> {
    match arg {
        Some(payload) if payload != "-" => Ok(payload.to_string()),
        _ => {
            let mut payload = String::new();
            io::stdin().read_to_string(&mut payload)?;
            Ok(payload)
        }
    }
}

fn build_handler(config: &AppConfig) -> AnalyzeSurveyHandler {
    let handler = AnalyzeSurveyHandler::new();
    if !config.classifier_enabled() {
        return handler;
    }

    match openai_provider(config) {
        Ok(provider) => {
            tracing::info!(model = %config.ai.model, "AI classifier enabled");
            handler.with_classifier(
                Arc::new(LlmRiskClassifier::new(Arc::new(provider))),
                config.ai.classifier_timeout(),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "AI classifier unavailable, using deterministic scoring");
            handler
        }
    }
}

fn openai_provider(config: &AppConfig) -> Result<OpenAIProvider, AIError> {
    let api_key = config
        .ai
        .openai_api_key
        .clone()
        .ok_or_else(|| AIError::InvalidRequest("OpenAI API key not configured".to_string()))?;

    OpenAIProvider::new(
        OpenAIConfig::new(api_key)
            .with_model(&config.ai.model)
            .with_base_url(&config.ai.base_url)
            .with_timeout(config.ai.timeout())
            .with_max_retries(config.ai.max_retries),
    )
}

fn print_help() {
    println!(
        r#"mood-compass - wellbeing check-in analysis

USAGE:
    mood-compass [PAYLOAD]
    echo '{{"mood":"Anxious"}}' | mood-compass -

ARGS:
    PAYLOAD    Survey answers as a JSON object; read from stdin when omitted or "-"

ENVIRONMENT:
    MOOD_COMPASS_CONFIG                            Optional config file (toml, json, yaml)
    MOOD_COMPASS__FEATURES__ENABLE_AI_CLASSIFIER   Let an LLM refine the assessment
    MOOD_COMPASS__AI__OPENAI_API_KEY               OpenAI API key
    MOOD_COMPASS__LOGGING__FORMAT                  text | json
    RUST_LOG                                       Log filter (overrides config)"#
    );
}
