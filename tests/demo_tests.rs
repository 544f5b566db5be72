use predicates::prelude::*;

#[test]
fn demo_writes_a_results_file_every_command_can_read() {
    let output_file = assert_fs::NamedTempFile::new("demo_results.yaml").unwrap();
    let output_arg = output_file.path().to_str().unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("trialscope");
    cmd.args(["demo", "-o", output_arg, "-s", "7"]);

    cmd.assert().success().stdout(predicate::str::contains(
        format!("Demo results for seed 7 written to {output_arg}"),
    ));

    let output = std::fs::read_to_string(output_file.path()).unwrap();
    assert!(output.contains("study_name: demo study"));
    assert!(output.contains("proposed:"));
    assert!(output.contains("baseline:"));
    assert!(output.contains("name: base case"));
}

#[test]
fn demo_is_deterministic_for_the_same_seed() {
    let first_file = assert_fs::NamedTempFile::new("first.yaml").unwrap();
    let second_file = assert_fs::NamedTempFile::new("second.yaml").unwrap();

    for file in [&first_file, &second_file] {
        let mut cmd = assert_cmd::cargo_bin_cmd!("trialscope");
        cmd.args(["demo", "-o", file.path().to_str().unwrap(), "-s", "42"]);
        cmd.assert().success();
    }

    let first = std::fs::read_to_string(first_file.path()).unwrap();
    let second = std::fs::read_to_string(second_file.path()).unwrap();
    // The fetch date is the only thing allowed to differ, and both runs
    // happen on the same day in practice.
    assert_eq!(first, second);
}
