use std::env;
use std::sync::{Mutex, OnceLock};

use babywear_cli::commands::{
    config, doctor,
    milestones::{self, MilestonesArgs},
    recommend::{self, RecommendArgs},
};
use chrono::NaiveDate;
use serde_json::Value;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
}

#[test]
fn recommend_returns_json_for_valid_input() {
    with_env(&[], || {
        let result = recommend::run(
            RecommendArgs {
                birth_date: "2025-10-01".to_string(),
                temperature: Some("10".to_string()),
                shop: Some("nishimatsuya".to_string()),
                json: true,
                ..RecommendArgs::default()
            },
            today(),
        );
        assert_eq!(result.exit_code, 0, "expected successful recommendation");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["age_in_months"], 4);
        assert_eq!(payload["size"], "60-70cm");
        assert_eq!(payload["temperature_source"], "provided");
        assert_eq!(payload["items"][0]["shop_specific_name"], "ボディスーツ");
        assert_eq!(payload["items"][1]["shop_specific_name"], "プレオール");
    });
}

#[test]
fn recommend_uses_configured_default_shop() {
    with_env(&[("BABYWEAR_DEFAULT_SHOP", "akachan_honpo")], || {
        let result = recommend::run(
            RecommendArgs {
                birth_date: "2025-10-01".to_string(),
                json: true,
                ..RecommendArgs::default()
            },
            today(),
        );
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["target_shop"], "akachan_honpo");
        assert_eq!(payload["temperature"], 6.0);
        assert_eq!(payload["items"][1]["shop_specific_name"], "ドレスオール");
    });
}

#[test]
fn recommend_human_output_lists_items() {
    with_env(&[], || {
        let result = recommend::run(
            RecommendArgs {
                birth_date: "2025-10-01".to_string(),
                target_date: Some("2025-10-15".to_string()),
                temperature: Some("24".to_string()),
                ..RecommendArgs::default()
            },
            today(),
        );
        assert_eq!(result.exit_code, 0);

        let lines: Vec<&str> = result.output.lines().collect();
        assert!(lines[0].starts_with("0 months on 2025-10-15"));
        assert_eq!(lines.len(), 3, "short and combination undershirts: {}", result.output);
        assert!(lines[1].contains("短肌着"));
        assert!(lines[2].contains("コンビ肌着"));
    });
}

#[test]
fn recommend_rejects_birth_after_target() {
    with_env(&[], || {
        let result = recommend::run(
            RecommendArgs {
                birth_date: "2026-03-01".to_string(),
                ..RecommendArgs::default()
            },
            today(),
        );
        assert_eq!(result.exit_code, 2, "expected invalid input code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["status"], "error");
        assert_eq!(payload["error_class"], "invalid_input");
    });
}

#[test]
fn recommend_rejects_malformed_date() {
    with_env(&[], || {
        let result = recommend::run(
            RecommendArgs { birth_date: "Oct 1 2025".to_string(), ..RecommendArgs::default() },
            today(),
        );
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["error_class"], "invalid_input");
        assert!(payload["message"].as_str().unwrap_or("").contains("birth_date"));
    });
}

#[test]
fn recommend_reports_config_failure() {
    with_env(&[("BABYWEAR_SERVER_PORT", "not-a-port")], || {
        let result = recommend::run(
            RecommendArgs { birth_date: "2025-10-01".to_string(), ..RecommendArgs::default() },
            today(),
        );
        assert_eq!(result.exit_code, 2, "expected config validation failure code");

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "recommend");
        assert_eq!(payload["error_class"], "config_validation");
        let message = payload["message"].as_str().unwrap_or("");
        assert!(message.starts_with("configuration failure:"), "{message}");
        assert!(message.contains("BABYWEAR_SERVER_PORT"), "{message}");
    });
}

#[test]
fn milestones_returns_twenty_five_entries() {
    with_env(&[], || {
        let result = milestones::run(MilestonesArgs {
            birth_date: "2025-10-01".to_string(),
            shop: Some("uniqlo".to_string()),
            json: true,
        });
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        let entries = payload["milestones"].as_array().expect("milestones array");
        assert_eq!(entries.len(), 25);
        assert_eq!(entries[4]["target_date"], "2026-02-01");
        assert_eq!(entries[4]["items"][0]["shop_specific_name"], "クルーネックボディスーツ");
        assert_eq!(entries[24]["size"], "90cm+");
    });
}

#[test]
fn milestones_human_output_has_one_line_per_month() {
    with_env(&[], || {
        let result = milestones::run(MilestonesArgs {
            birth_date: "2025-10-01".to_string(),
            ..MilestonesArgs::default()
        });
        assert_eq!(result.exit_code, 0);
        assert_eq!(result.output.lines().count(), 26);
    });
}

#[test]
fn milestones_rejects_malformed_date() {
    with_env(&[], || {
        let result = milestones::run(MilestonesArgs {
            birth_date: "2025-02-30".to_string(),
            ..MilestonesArgs::default()
        });
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "milestones");
        assert_eq!(payload["error_class"], "invalid_input");
    });
}

#[test]
fn config_attributes_env_sources() {
    with_env(&[("PORT", "9191"), ("BABYWEAR_DEFAULT_SHOP", "uniqlo")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0);

        assert!(result.output.contains("- server.port = 9191 (source: env (PORT))"));
        assert!(result
            .output
            .contains("- recommender.default_shop = uniqlo (source: env (BABYWEAR_DEFAULT_SHOP))"));
        assert!(result.output.contains("- logging.level = info (source: default)"));
    });
}

#[test]
fn config_ignores_blank_env_values() {
    with_env(&[("PORT", ""), ("BABYWEAR_LOG_LEVEL", "   ")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 0);

        let output = &result.output;
        assert!(output.contains("- server.port = 8080 (source: default)"), "{output}");
        assert!(output.contains("- logging.level = info (source: default)"), "{output}");
    });
}

#[test]
fn config_reports_validation_failure() {
    with_env(&[("BABYWEAR_ALLOWED_ORIGINS", "ftp://files.example")], || {
        let result = config::run();
        assert_eq!(result.exit_code, 2);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["command"], "config");
        assert_eq!(payload["error_class"], "config_validation");
    });
}

#[test]
fn doctor_json_passes_with_default_config() {
    with_env(&[], || {
        let result = doctor::run(true);
        assert_eq!(result.exit_code, 0);

        let payload = parse_payload(&result.output);
        assert_eq!(payload["overall_status"], "pass");
        let names: Vec<&str> = payload["checks"]
            .as_array()
            .expect("checks array")
            .iter()
            .filter_map(|check| check["name"].as_str())
            .collect();
        assert_eq!(names, vec!["config_validation", "default_shop", "catalog_coverage"]);
    });
}

#[test]
fn doctor_fails_on_invalid_config() {
    with_env(&[("BABYWEAR_LOG_LEVEL", "verbose")], || {
        let result = doctor::run(false);
        assert_eq!(result.exit_code, 1);
        assert!(result.output.starts_with("doctor: one or more readiness checks failed"));
        assert!(result.output.contains("- [fail] config_validation"));
        assert!(result.output.contains("- [skip] default_shop"));
        assert!(result.output.contains("- [ok] catalog_coverage"));
    });
}

fn parse_payload(output: &str) -> Value {
    serde_json::from_str(output).expect("command output should be valid JSON")
}

fn with_env(vars: &[(&str, &str)], test_fn: impl FnOnce()) {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let _guard =
        ENV_LOCK.get_or_init(|| Mutex::new(())).lock().expect("env mutex should not be poisoned");

    let keys = [
        "BABYWEAR_SERVER_BIND_ADDRESS",
        "BABYWEAR_SERVER_PORT",
        "PORT",
        "BABYWEAR_SERVER_GRACEFUL_SHUTDOWN_SECS",
        "BABYWEAR_ALLOWED_ORIGINS",
        "ALLOWED_ORIGINS",
        "BABYWEAR_DEFAULT_SHOP",
        "BABYWEAR_LOGGING_LEVEL",
        "BABYWEAR_LOGGING_FORMAT",
        "BABYWEAR_LOG_LEVEL",
        "BABYWEAR_LOG_FORMAT",
    ];

    let previous_values: Vec<(&str, Option<String>)> =
        keys.iter().map(|key| (*key, env::var(key).ok())).collect();

    for key in &keys {
        env::remove_var(key);
    }
    for (key, value) in vars {
        env::set_var(key, value);
    }

    test_fn();

    for (key, value) in previous_values {
        if let Some(value) = value {
            env::set_var(key, value);
        } else {
            env::remove_var(key);
        }
    }
}
