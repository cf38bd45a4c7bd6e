pub mod config;
pub mod doctor;
pub mod milestones;
pub mod recommend;

use babywear_core::config::{AppConfig, LoadOptions};
use babywear_core::errors::ApplicationError;
use babywear_core::service::RecommendationService;
use babywear_core::ShopId;
use serde::Serialize;

pub const INVALID_INPUT_EXIT_CODE: u8 = 2;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn invalid_input(command: &str, message: impl Into<String>) -> Self {
        Self::failure(command, "invalid_input", message, INVALID_INPUT_EXIT_CODE)
    }

    pub fn config_failure(command: &str, message: impl Into<String>) -> Self {
        Self::failure(command, "config_validation", message, INVALID_INPUT_EXIT_CODE)
    }

    /// Raw command output, used when the payload is already rendered.
    pub fn rendered(output: String) -> Self {
        Self { exit_code: 0, output }
    }
}

/// Builds the service the way the server does, honouring the configured
/// default shop.
pub(crate) fn load_service(command: &str) -> Result<RecommendationService, CommandResult> {
    let config = AppConfig::load(LoadOptions::default()).map_err(|error| {
        let error = ApplicationError::Configuration(error.to_string());
        CommandResult::config_failure(command, error.to_string())
    })?;

    Ok(RecommendationService::default()
        .with_default_shop(config.recommender.default_shop.as_deref().map(ShopId::new)))
}

pub(crate) fn render_json<T: Serialize>(command: &str, value: &T) -> CommandResult {
    match serde_json::to_string_pretty(value) {
        Ok(output) => CommandResult::rendered(output),
        Err(error) => CommandResult::failure(command, "serialization", error.to_string(), 1),
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}
