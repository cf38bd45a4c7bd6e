use babywear_core::service::{parse_date, parse_shop, MilestoneRequest, MilestoneResponse};

use super::{load_service, render_json, CommandResult};

const COMMAND: &str = "milestones";

#[derive(Debug, Clone, Default)]
pub struct MilestonesArgs {
    pub birth_date: String,
    pub shop: Option<String>,
    pub json: bool,
}

pub fn run(args: MilestonesArgs) -> CommandResult {
    let service = match load_service(COMMAND) {
        Ok(service) => service,
        Err(result) => return result,
    };

    let birth_date = match parse_date("birth_date", &args.birth_date) {
        Ok(date) => date,
        Err(error) => return CommandResult::invalid_input(COMMAND, error.to_string()),
    };

    let response = service
        .milestones(MilestoneRequest { birth_date, target_shop: parse_shop(args.shop.as_deref()) });

    if args.json {
        return render_json(COMMAND, &response);
    }
    CommandResult::rendered(render_human(&response))
}

fn render_human(response: &MilestoneResponse) -> String {
    let shop = response.target_shop.as_ref().map(|shop| shop.as_str()).unwrap_or("universal names");
    let mut lines = vec![format!("milestones for a child born {} ({shop}):", response.birth_date)];

    for milestone in &response.milestones {
        let names: Vec<&str> =
            milestone.items.iter().map(|item| item.shop_specific_name.as_str()).collect();
        lines.push(format!(
            "- {:>2}m {} {:>5.1}°C {:<8} {}",
            milestone.age_in_months,
            milestone.target_date,
            milestone.temperature,
            milestone.size,
            names.join(", ")
        ));
    }

    lines.join("\n")
}
