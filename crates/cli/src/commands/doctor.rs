use babywear_core::config::{AppConfig, LoadOptions};
use babywear_core::service::RecommendationService;
use babywear_core::ShopId;
use serde::Serialize;

use super::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report(AppConfig::load(LoadOptions::default()).map_err(|e| e.to_string()));
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    if json_output {
        let output = serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
        return CommandResult { exit_code, output };
    }

    CommandResult { exit_code, output: render_human(&report) }
}

fn build_report(config: Result<AppConfig, String>) -> DoctorReport {
    let mut checks = Vec::new();
    let service = RecommendationService::default();

    match config {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            checks.push(check_default_shop(&service, config.recommender.default_shop.as_deref()));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error,
            });
            checks.push(DoctorCheck {
                name: "default_shop",
                status: CheckStatus::Skipped,
                details: "skipped because configuration did not load".to_string(),
            });
        }
    }
    checks.push(check_catalog_coverage(&service));

    let all_pass = checks.iter().all(|check| check.status != CheckStatus::Fail);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_default_shop(service: &RecommendationService, default_shop: Option<&str>) -> DoctorCheck {
    let Some(shop) = default_shop else {
        return DoctorCheck {
            name: "default_shop",
            status: CheckStatus::Pass,
            details: "no default shop configured; universal names are shown".to_string(),
        };
    };

    if service.catalog().is_known_shop(&ShopId::new(shop)) {
        DoctorCheck {
            name: "default_shop",
            status: CheckStatus::Pass,
            details: format!("default shop `{shop}` is in the name table"),
        }
    } else {
        DoctorCheck {
            name: "default_shop",
            status: CheckStatus::Fail,
            details: format!("default shop `{shop}` is not in the name table"),
        }
    }
}

fn check_catalog_coverage(service: &RecommendationService) -> DoctorCheck {
    match service.verify_catalog() {
        Ok(report) => DoctorCheck {
            name: "catalog_coverage",
            status: CheckStatus::Pass,
            details: format!(
                "{} items have categories and names for {} shops",
                report.items_checked, report.shops_checked
            ),
        },
        Err(error) => DoctorCheck {
            name: "catalog_coverage",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
