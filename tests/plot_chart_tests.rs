use assert_fs::prelude::*;
use predicates::prelude::*;

const RESULTS_YAML: &str = r#"
study_name: fixture study
endpoint: continuous
fetch_date: 2026-08-30
proposed:
  - power: 0.70
    sample_size: 320
    enrollment_months: 13.0
    cost: 2100000.0
    secondary_power: null
    arm_sizes: [160]
    control_size: 160
  - power: 0.85
    sample_size: 400
    enrollment_months: 15.0
    cost: 2500000.0
    secondary_power: null
    arm_sizes: [200]
    control_size: 200
baseline:
  - power: 0.72
    sample_size: 410
    enrollment_months: 16.0
    cost: 2900000.0
    secondary_power: null
    arm_sizes: [205]
    control_size: 205
scenarios: []
"#;

#[test]
fn plot_writes_a_png_for_each_axis_pairing() {
    let input_file = assert_fs::NamedTempFile::new("results.yaml").unwrap();
    input_file.write_str(RESULTS_YAML).unwrap();

    for pairing in ["sample-size-power", "enrollment-power", "sample-size-cost"] {
        let output_file = assert_fs::NamedTempFile::new("chart.png").unwrap();
        let output_arg = output_file.path().to_str().unwrap();

        let mut cmd = assert_cmd::cargo_bin_cmd!("trialscope");
        cmd.args([
            "plot",
            "-i",
            input_file.path().to_str().unwrap(),
            "-o",
            output_arg,
            "-p",
            pairing,
        ]);

        cmd.assert()
            .success()
            .stdout(predicate::str::contains(format!(
                "Design chart written to {output_arg}"
            )));

        let metadata = std::fs::metadata(output_file.path()).unwrap();
        assert!(metadata.len() > 0);
    }
}

#[test]
fn plot_reports_a_missing_input_file() {
    let output_file = assert_fs::NamedTempFile::new("chart.png").unwrap();

    let mut cmd = assert_cmd::cargo_bin_cmd!("trialscope");
    cmd.args([
        "plot",
        "-i",
        "does_not_exist.yaml",
        "-o",
        output_file.path().to_str().unwrap(),
    ]);

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Failed to load results file"));
}
