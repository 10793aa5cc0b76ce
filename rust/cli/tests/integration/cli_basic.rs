use crate::helpers::cli_runner::CliRunner;

#[test]
fn help_lists_all_commands() {
    let cli = CliRunner::new();
    let res = cli.run(&["--help"]);

    assert_eq!(res.exit_code, 0, "--help should exit with code 0");
    for cmd in lumo_cli::COMMANDS {
        assert!(res.stdout.contains(cmd), "help should list `{}`", cmd);
    }
}

#[test]
fn version_prints_version_and_exits_zero() {
    let res = CliRunner::new().run(&["--version"]);
    assert_eq!(res.exit_code, 0);
    assert!(res.stdout.starts_with("lumo "));
}

#[test]
fn unknown_subcommand_shows_command_list_on_stderr() {
    let res = CliRunner::new().run(&["unknown"]);
    assert_eq!(res.exit_code, 2);
    assert!(
        res.stderr.contains("Commands:"),
        "stderr should contain the command list\n---stderr---\n{}",
        res.stderr
    );
    assert!(res.stderr.contains("For full help, run: lumo --help"));
}

#[test]
fn missing_required_argument_is_a_usage_error() {
    let res = CliRunner::new().run(&["number", "--level", "1"]);
    assert_eq!(res.exit_code, 2);
    assert!(res.stdout.is_empty());
}

#[test]
fn quiz_prints_prompt_and_options() {
    let res = CliRunner::new().run(&["quiz", "--game", "colors", "--level", "1"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let mut lines = res.stdout.lines();
    assert_eq!(
        lines.next(),
        Some("[colors level 1] Which colour is #FF0000?")
    );
    let options = lines.next().unwrap_or_default();
    assert!(options.starts_with("1) "));
    assert!(options.contains("Red"));
}

#[test]
fn quiz_json_is_tagged_and_points_at_the_answer() {
    let res = CliRunner::new().run(&["quiz", "--game", "colors", "--level", "1", "--json"]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    let json: serde_json::Value = serde_json::from_str(&res.stdout).expect("valid JSON");

    assert_eq!(json["game"], "colors");
    assert_eq!(json["level"], 1);
    assert_eq!(json["challenge"]["type"], "name_color");
    assert_eq!(json["challenge"]["hex"], "#FF0000");
    let answer = json["answer"].as_u64().expect("answer index") as usize;
    assert_eq!(json["options"][answer], "Red");
}

#[test]
fn quiz_is_deterministic_across_runs() {
    let cli = CliRunner::new();
    for game in ["math", "alphabet", "colors", "shapes"] {
        let a = cli.run(&["quiz", "--game", game, "--level", "9"]);
        let b = cli.run(&["quiz", "--game", game, "--level", "9"]);
        assert_eq!(a.exit_code, 0);
        assert_eq!(a.stdout, b.stdout, "{} should repeat", game);
    }
}

#[test]
fn debug_logging_goes_to_stderr() {
    let res = CliRunner::new().run_with_env(
        &["quiz", "--game", "shapes", "--level", "2"],
        &[("LUMO_LOG", "debug")],
    );
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("quiz question"), "stderr={}", res.stderr);
    assert!(!res.stdout.contains("quiz question"));
}
