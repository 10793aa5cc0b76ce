use crate::helpers::cli_runner::CliRunner;
use crate::helpers::temp_files::TempFileManager;

use serde_json::Value;

fn cfg_json(env: &[(&str, &str)]) -> Value {
    let res = CliRunner::new().run_with_env(&["cfg"], env);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    serde_json::from_str(&res.stdout).expect("cfg prints JSON")
}

#[test]
fn cfg_shows_defaults() {
    let json = cfg_json(&[]);
    assert_eq!(json["level"]["value"], 1);
    assert_eq!(json["level"]["source"], "default");
    assert_eq!(json["max_level"]["value"], 20);
    assert_eq!(json["lives"]["value"], 3);
    assert_eq!(json["options"]["value"], 4);
    assert_eq!(json["history"]["value"], 5);
    assert_eq!(json["step_seed"]["value"], 97);
}

#[test]
fn env_overrides_file_which_overrides_defaults() {
    let tfm = TempFileManager::new().expect("temp dir");
    let path = tfm
        .create_file("lumo.toml", "level = 3\nstep_seed = 11\n")
        .expect("write config");
    let path = path.to_string_lossy().into_owned();

    let json = cfg_json(&[("LUMO_CONFIG", path.as_str()), ("LUMO_LEVEL", "4")]);
    assert_eq!(json["level"]["value"], 4);
    assert_eq!(json["level"]["source"], "env");
    assert_eq!(json["step_seed"]["value"], 11);
    assert_eq!(json["step_seed"]["source"], "file");
    assert_eq!(json["lives"]["source"], "default");
}

#[test]
fn invalid_env_value_fails_cfg() {
    let res = CliRunner::new().run_with_env(&["cfg"], &[("LUMO_LIVES", "0")]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("lives must be >= 1"), "stderr={}", res.stderr);
}

#[test]
fn unknown_file_keys_are_rejected() {
    let tfm = TempFileManager::new().expect("temp dir");
    let path = tfm
        .create_file("lumo.toml", "difficulty = \"hard\"\n")
        .expect("write config");
    let path = path.to_string_lossy().into_owned();

    let res = CliRunner::new().run_with_env(&["cfg"], &[("LUMO_CONFIG", path.as_str())]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("cannot parse config file"));
}

#[test]
fn configured_option_count_shapes_quiz_output() {
    let res = CliRunner::new().run_with_env(
        &["quiz", "--game", "alphabet", "--level", "3", "--json"],
        &[("LUMO_OPTIONS", "3")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: Value = serde_json::from_str(&res.stdout).expect("valid JSON");
    assert_eq!(json["options"].as_array().map(Vec::len), Some(3));
}

#[test]
fn oversized_options_and_history_are_config_errors() {
    let cli = CliRunner::new();
    let res = cli.run_with_env(
        &["quiz", "--game", "math"],
        &[("LUMO_OPTIONS", "100000000000")],
    );
    assert_eq!(res.exit_code, 2, "stderr={}", res.stderr);
    assert!(res.stderr.contains("options must be <= 10"), "stderr={}", res.stderr);

    let res = cli.run_with_env_and_input(
        &["play", "--game", "colors"],
        &[("LUMO_HISTORY", "1000000000000")],
        "q\n",
    );
    assert_eq!(res.exit_code, 2, "stderr={}", res.stderr);
    assert!(res.stderr.contains("history must be <= 1000"), "stderr={}", res.stderr);
}
