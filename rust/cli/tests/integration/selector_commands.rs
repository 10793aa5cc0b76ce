use crate::helpers::cli_runner::CliRunner;

#[test]
fn index_wraps_levels_into_the_list() {
    let cli = CliRunner::new();
    let res = cli.run(&["index", "--level", "7", "--length", "5"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "index: 1\n");

    let res = cli.run(&["index", "--level", "-3", "--length", "5"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "index: 1\n");
}

#[test]
fn unique_index_reports_the_step() {
    let res = CliRunner::new().run(&[
        "index", "--level", "2", "--length", "10", "--unique", "--seed", "97",
    ]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "index: 7\nstep: 7\n");
}

#[test]
fn unique_index_uses_configured_step_seed() {
    let res = CliRunner::new().run_with_env(
        &["index", "--level", "2", "--length", "9", "--unique"],
        &[("LUMO_STEP_SEED", "6")],
    );
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert_eq!(res.stdout, "index: 7\nstep: 7\n");
}

#[test]
fn pick_reads_consecutive_items() {
    let res = CliRunner::new().run(&["pick", "--level", "2", "--count", "5", "a,b,c"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "start: 1\npicked: b c a b c\n");
}

#[test]
fn rotate_accepts_negative_amounts() {
    let cli = CliRunner::new();
    assert_eq!(
        cli.run(&["rotate", "--by", "1", "1", "2", "3", "4"]).stdout,
        "rotated: 2 3 4 1\n"
    );
    assert_eq!(
        cli.run(&["rotate", "--by", "-1", "1", "2", "3", "4"]).stdout,
        "rotated: 4 1 2 3\n"
    );
}

#[test]
fn number_honours_salts() {
    let cli = CliRunner::new();
    let plain = cli.run(&["number", "--level", "1", "--min", "0", "--max", "10"]);
    assert_eq!(plain.stdout, "number: 6\n");

    let text = cli.run(&[
        "number", "--level", "1", "--min", "0", "--max", "100", "--salt", "ab",
    ]);
    assert_eq!(text.stdout, "number: 44\n");
}

#[test]
fn number_warns_on_empty_range() {
    let res = CliRunner::new().run(&["number", "--level", "3", "--min", "5", "--max", "5"]);
    assert_eq!(res.exit_code, 0);
    assert_eq!(res.stdout, "number: 5\n");
    assert!(res.stderr.contains("WARNING:"));
}

#[test]
fn verify_passes_with_a_fixed_rng_seed() {
    let res = CliRunner::new().run(&[
        "verify",
        "--modulus",
        "26",
        "--samples",
        "100",
        "--rng-seed",
        "5",
    ]);
    assert_eq!(res.exit_code, 0, "stderr={}", res.stderr);
    assert!(res.stdout.starts_with("verify: modulus=26 step=19 samples=100 rng_seed=5\n"));
    assert!(res.stdout.ends_with("all properties hold\n"));
}

#[test]
fn verify_rejects_zero_modulus() {
    let res = CliRunner::new().run(&["verify", "--modulus", "0"]);
    assert_eq!(res.exit_code, 2);
}
