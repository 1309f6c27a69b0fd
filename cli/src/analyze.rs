use crate::cli::OutputFormat;
use crate::error::{CliError, Result, ResultExt};
use crate::{progress, ui};
use dialoguer::{theme::ColorfulTheme, Input};
use std::io::IsTerminal;
use tokio::runtime::Runtime;
use truth_finder::{
    build_controller, CliRenderer, JsonRenderer, OutputRenderer, RequestState, TruthFinderConfig,
};

#[derive(Debug, Clone)]
pub struct AnalyzeArgs {
    pub url: Option<String>,
    pub endpoint: Option<String>,
    pub config_path: String,
    pub format: OutputFormat,
    pub no_bars: bool,
    pub verbose: bool,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    let rt = Runtime::new()
        .map_err(|e| CliError::Other(format!("Failed to create async runtime: {}", e)))?;

    rt.block_on(execute_async(args))
}

async fn execute_async(args: AnalyzeArgs) -> Result<()> {
    let config = load_config(&args.config_path, args.endpoint.as_deref())?;
    if args.verbose {
        ui::info_message(&format!("Using analysis endpoint {}", config.endpoint()));
    }

    let url = match args.url.clone() {
        Some(url) => url,
        None => prompt_for_url()?,
    };

    let controller =
        build_controller(&config).with_context(|| "Failed to set up the analysis client")?;

    let spinner = match args.format {
        OutputFormat::Text => progress::create_spinner("Analyzing article"),
        OutputFormat::Json => progress::hidden(),
    };

    let mut states = controller.subscribe();
    let watcher = {
        let spinner = spinner.clone();
        tokio::spawn(async move {
            while states.changed().await.is_ok() {
                let state = states.borrow_and_update().clone();
                if state.is_loading() {
                    progress::start(&spinner);
                } else if state.is_terminal() {
                    spinner.finish_and_clear();
                    break;
                }
            }
        })
    };

    let state = controller.submit(&url).await;
    drop(controller);
    if let Err(err) = watcher.await {
        tracing::debug!(error = %err, "spinner task ended abnormally");
    }
    spinner.finish_and_clear();

    report(&state, &args)
}

/// Print the final state and map it to the command's outcome
fn report(state: &RequestState, args: &AnalyzeArgs) -> Result<()> {
    match args.format {
        OutputFormat::Json => print!("{}", JsonRenderer::new().render(state)),
        OutputFormat::Text => {
            if state.result().is_some() {
                let renderer = if args.no_bars {
                    CliRenderer::without_bars()
                } else {
                    CliRenderer::new()
                };
                print!("{}", renderer.render(state));
            }
        }
    }

    match state {
        RequestState::Error(message) => Err(CliError::RequestFailed(message.clone())),
        _ => Ok(()),
    }
}

/// Load configuration, letting an explicit endpoint win over the file
pub fn load_config(config_path: &str, endpoint: Option<&str>) -> Result<TruthFinderConfig> {
    let config = TruthFinderConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load configuration from {}", config_path))?;

    let config = match endpoint {
        Some(endpoint) => config.with_endpoint(endpoint),
        None => config,
    };

    config
        .validate()
        .with_context(|| "Invalid analysis endpoint")?;
    tracing::debug!(
        config = config_path,
        endpoint = config.endpoint(),
        timeout_seconds = config.timeout_seconds(),
        "configuration loaded"
    );
    Ok(config)
}

fn prompt_for_url() -> Result<String> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::Other(
            "No URL given. Pass the article URL as an argument".to_string(),
        ));
    }

    let url: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter article URL to analyze")
        .allow_empty(true)
        .interact_text()?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;
    use wiremock::{
        matchers::{body_json, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn args_for(server: &MockServer, dir: &TempDir, url: &str) -> AnalyzeArgs {
        AnalyzeArgs {
            url: Some(url.to_string()),
            endpoint: Some(format!("{}/analyze", server.uri())),
            config_path: dir.path().join("truthfinder.toml").to_string_lossy().to_string(),
            format: OutputFormat::Json,
            no_bars: false,
            verbose: true,
        }
    }

    #[tokio::test]
    async fn test_analyze_command_succeeds_against_service() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .and(body_json(json!({ "url": "https://news.example.com/story" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "trustScore": 9,
                "sensationalismScore": 2,
                "finalVerdict": "Reliable"
            })))
            .expect(1)
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();

        let args = args_for(&server, &dir, "  https://news.example.com/story ");
        assert!(execute_async(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_analyze_command_fails_with_service_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/analyze"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({ "error": "Unreachable content" })),
            )
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();

        let mut args = args_for(&server, &dir, "https://news.example.com/missing");
        args.format = OutputFormat::Text;
        let err = execute_async(args).await.unwrap_err();
        assert_eq!(err.user_message(), "Unreachable content");
    }

    #[tokio::test]
    async fn test_analyze_command_blank_url_sends_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        let dir = TempDir::new().unwrap();

        let err = execute_async(args_for(&server, &dir, "   ")).await.unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid URL");
    }

    #[test]
    fn test_load_config_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truthfinder.toml");
        let config = load_config(&path.to_string_lossy(), None).unwrap();
        assert_eq!(config.endpoint(), truth_finder::config::DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_endpoint_argument_overrides_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truthfinder.toml");
        fs::write(
            &path,
            "[service]\nendpoint = \"http://file.example.com/analyze\"\ntimeout_seconds = 9\n",
        )
        .unwrap();

        let config =
            load_config(&path.to_string_lossy(), Some("http://127.0.0.1:5000/analyze")).unwrap();
        assert_eq!(config.endpoint(), "http://127.0.0.1:5000/analyze");
        assert_eq!(config.timeout_seconds(), 9);
    }

    #[test]
    fn test_invalid_endpoint_argument_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("truthfinder.toml");
        let err = load_config(&path.to_string_lossy(), Some("localhost")).unwrap_err();
        assert!(err.user_message().starts_with("Invalid analysis endpoint"));
    }

    #[test]
    fn test_report_error_state_fails_command() {
        let args = AnalyzeArgs {
            url: None,
            endpoint: None,
            config_path: "truthfinder.toml".to_string(),
            format: OutputFormat::Text,
            no_bars: false,
            verbose: false,
        };
        let err = report(&RequestState::Error("Please enter a valid URL".to_string()), &args)
            .unwrap_err();
        assert_eq!(err.user_message(), "Please enter a valid URL");
    }
}
