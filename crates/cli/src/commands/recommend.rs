use babywear_core::service::{
    parse_date, parse_shop, parse_temperature, Recommendation, RecommendationRequest,
};
use babywear_core::{RequestError, TemperatureSource};
use chrono::NaiveDate;

use super::{load_service, render_json, CommandResult};

const COMMAND: &str = "recommend";

#[derive(Debug, Clone, Default)]
pub struct RecommendArgs {
    pub birth_date: String,
    pub target_date: Option<String>,
    pub temperature: Option<String>,
    pub shop: Option<String>,
    pub json: bool,
}

pub fn run(args: RecommendArgs, today: NaiveDate) -> CommandResult {
    let service = match load_service(COMMAND) {
        Ok(service) => service,
        Err(result) => return result,
    };

    let request = match build_request(&args) {
        Ok(request) => request,
        Err(error) => return CommandResult::invalid_input(COMMAND, error.to_string()),
    };

    match service.recommend(request, today) {
        Ok(recommendation) if args.json => render_json(COMMAND, &recommendation),
        Ok(recommendation) => CommandResult::rendered(render_human(&recommendation)),
        Err(error) => CommandResult::invalid_input(COMMAND, error.to_string()),
    }
}

fn build_request(args: &RecommendArgs) -> Result<RecommendationRequest, RequestError> {
    let birth_date = parse_date("birth_date", &args.birth_date)?;
    let target_date =
        args.target_date.as_deref().map(|raw| parse_date("target_date", raw)).transpose()?;
    let temperature = args
        .temperature
        .as_deref()
        .map(|raw| parse_temperature("temperature", raw))
        .transpose()?;

    Ok(RecommendationRequest {
        birth_date,
        target_date,
        temperature,
        target_shop: parse_shop(args.shop.as_deref()),
    })
}

fn render_human(recommendation: &Recommendation) -> String {
    let source = match recommendation.temperature_source {
        TemperatureSource::Provided => "provided",
        TemperatureSource::Estimated => "estimated",
    };

    let mut lines = vec![format!(
        "{} months on {} ({:.1}°C {source}), size {}",
        recommendation.age_in_months,
        recommendation.target_date,
        recommendation.temperature,
        recommendation.size
    )];

    for item in &recommendation.items {
        lines.push(format!(
            "- {} {} [{}]",
            item.category_emoji, item.shop_specific_name, item.category_label
        ));
    }

    lines.join("\n")
}
