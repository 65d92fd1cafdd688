//! One CLI invocation: credentials, client, batch, JSON.

use sight_models::BatchAnnotateImagesResponse;
use sight_vision::{resolve_credentials, VisionClient, VisionConfig, VisionError};
use thiserror::Error;
use tracing::info;

use crate::cli::Cli;

/// Stage of the invocation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Configure,
    Credentials,
    Annotate,
    Render,
}

impl Stage {
    fn describe(&self) -> &'static str {
        match self {
            Stage::Configure => "invalid configuration",
            Stage::Credentials => "unable to fetch credentials",
            Stage::Annotate => "unable to request image annotation",
            Stage::Render => "unable to marshal the response",
        }
    }
}

/// A fatal error, tagged with the stage that produced it.
#[derive(Debug, Error)]
#[error("{}: {source}", .stage.describe())]
pub struct CliError {
    pub stage: Stage,
    #[source]
    pub source: VisionError,
}

impl CliError {
    fn at(stage: Stage) -> impl FnOnce(VisionError) -> Self {
        move |source| Self { stage, source }
    }

    pub fn exit_code(&self) -> i32 {
        self.source.exit_code()
    }
}

/// Build a client from the CLI flags and the environment.
pub fn build_client(cli: &Cli) -> Result<VisionClient, CliError> {
    let mut config = VisionConfig::from_env().map_err(CliError::at(Stage::Configure))?;
    if let Some(endpoint) = cli.endpoint.as_deref() {
        config = config
            .with_endpoint(endpoint)
            .map_err(CliError::at(Stage::Configure))?;
    }

    let credentials =
        resolve_credentials(cli.credentials.as_deref()).map_err(CliError::at(Stage::Credentials))?;

    Ok(VisionClient::from_credentials(config, credentials))
}

/// Annotate the CLI's images with `client` and render the responses.
pub async fn execute(cli: &Cli, client: &mut VisionClient) -> Result<String, CliError> {
    let feature = cli.feature();
    let hints = cli.language_hints();
    if !hints.is_empty() {
        client.set_language_hints(hints, false);
    }

    info!(images = cli.images.len(), feature = %feature, "Requesting image annotation");

    let response = client
        .request_image_annotation(&cli.images, feature)
        .await
        .map_err(CliError::at(Stage::Annotate))?;

    render(&response).map_err(CliError::at(Stage::Render))
}

/// Per-image results as 2-space indented JSON.
pub fn render(response: &BatchAnnotateImagesResponse) -> Result<String, VisionError> {
    Ok(serde_json::to_string_pretty(&response.responses)?)
}

pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let mut client = build_client(cli)?;
    execute(cli, &mut client).await
}
