use crate::helpers::cli_runner::CliRunner;

#[test]
fn correct_answer_then_quit() {
    let res = CliRunner::new().run_with_input(&["play", "--game", "colors"], "red\nq\n");
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("play: game=colors level=1 lives=3\n"));
    assert!(res.stdout.contains("Correct!"));
    assert!(res.stdout.contains("Score: 10"));
    assert!(res.stdout.contains("Level: 2"));
    assert!(res.stdout.ends_with("Session ended: level=2 score=10 lives=3\n"));
}

#[test]
fn win_is_reported_through_stdin() {
    let cli = CliRunner::new();
    let tmp = crate::helpers::temp_files::TempFileManager::new().expect("temp dir");
    let cfg = tmp
        .create_file("lumo.toml", "max_level = 1\n")
        .expect("write config");
    let cfg = cfg.to_string_lossy().into_owned();
    let res = cli.run_with_env_and_input(
        &["play", "--game", "colors"],
        &[("LUMO_CONFIG", cfg.as_str())],
        "red\n",
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.contains("You won! Final score: 10"));
}

#[test]
fn unrecognized_answers_reprompt_on_stderr() {
    let res = CliRunner::new().run_with_input(&["play", "--game", "shapes"], "banana\nq\n");
    assert_eq!(res.exit_code, 0);
    assert!(res.stderr.contains("Unrecognized answer: banana"));
    assert!(res.stdout.contains("Session ended: level=1 score=0 lives=3"));
}

#[test]
fn start_level_above_max_is_an_error() {
    let res = CliRunner::new().run_with_input(
        &["play", "--game", "math", "--level", "30"],
        "q\n",
    );
    assert_eq!(res.exit_code, 2);
    assert!(res.stderr.contains("Error:"), "stderr={}", res.stderr);
}
