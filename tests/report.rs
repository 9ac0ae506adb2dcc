// tests/report.rs

//! End-to-end tests of the `namedata` binary over temp CSV files.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;

const COLUMNS: usize = 45;

/// A well-formed 45-field data row; overrides are (0-based column, value).
fn row(overrides: &[(usize, &str)]) -> String {
    let mut fields = vec![String::new(); COLUMNS];
    fields[0] = "1".into();
    fields[1] = "male".into();
    fields[3] = "Mr.".into();
    fields[4] = "John".into();
    fields[6] = "Doe".into();
    fields[9] = "CA".into();
    fields[21] = "1990-01-01".into();
    fields[22] = "34".into();
    fields[35] = "2020 Honda Civic".into();
    fields[38] = "150.5".into();
    fields[39] = "68.2".into();
    fields[41] = "180".into();
    fields[42] = "6a29d603-03d4-4f9a-8c9c-b73e1d7f5f9e".into();
    fields[43] = "38.5".into();
    fields[44] = "-121.5".into();
    for (index, value) in overrides {
        fields[*index] = (*value).to_string();
    }
    fields.join(",")
}

fn write_csv(lines: &[String]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    for line in lines {
        writeln!(file, "{line}").expect("write line");
    }
    file
}

fn namedata() -> Command {
    Command::cargo_bin("namedata").expect("binary builds")
}

#[test]
fn reports_over_a_small_file() {
    let file = write_csv(&[
        "header".to_string(),
        row(&[]),
        row(&[
            (0, "2"),
            (1, "female"),
            (3, "Mrs."),
            (4, "Jane"),
            (6, "Roe"),
            (9, "OR"),
            (22, "61"),
            (35, "2018 Nissan Leaf"),
            (38, "120.5"),
        ]),
        row(&[(0, "3"), (4, "Jim"), (9, "CA"), (38, "165.5")]),
    ]);

    namedata()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 3 people in this file."))
        .stdout(predicate::str::contains("There are 2 males."))
        .stdout(predicate::str::contains("There are 1 married women."))
        .stdout(predicate::str::contains("The most populous state is CA."))
        .stdout(predicate::str::contains("The heaviest person is Jim Doe at 165.5 lbs."))
        .stdout(predicate::str::contains("The lightest person is Jane Roe at 120.5 lbs."))
        .stdout(predicate::str::contains("The oldest person is Jane Roe at 61 years."))
        .stdout(predicate::str::contains(
            "The most popular vehicle is the 2020 Honda Civic.",
        ));
}

#[test]
fn uppercase_policy_screams() {
    let file = write_csv(&["header".to_string(), row(&[])]);

    namedata()
        .arg(file.path())
        .args(["--case", "upper"])
        .assert()
        .success()
        .stdout(predicate::str::contains("THERE ARE 1 PEOPLE IN THIS FILE."));
}

#[test]
fn header_only_input_reports_unavailable_extrema() {
    let file = write_csv(&["just,a,header".to_string()]);

    namedata()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("There are 0 people in this file."))
        .stdout(predicate::str::contains("Heaviest person: no answer available"))
        .stdout(predicate::str::contains("Most popular vehicle: no answer available"));
}

#[test]
fn bad_row_aborts_the_run_naming_the_row() {
    let file = write_csv(&[
        "header".to_string(),
        row(&[]),
        "only,three,fields".to_string(),
    ]);

    namedata()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 3"))
        .stderr(predicate::str::contains("column count"));
}

#[test]
fn bad_field_aborts_the_run_naming_the_column() {
    let file = write_csv(&["header".to_string(), row(&[(38, "heavy")])]);

    namedata()
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("row 2"))
        .stderr(predicate::str::contains("Pounds"));
}

#[test]
fn missing_input_file_fails_with_its_path() {
    namedata()
        .arg("/no/such/namedata.csv")
        .assert()
        .failure()
        .stderr(predicate::str::contains("/no/such/namedata.csv"));
}

#[test]
fn json_format_lists_every_question() {
    let file = write_csv(&["header".to_string(), row(&[])]);

    let assert = namedata()
        .arg(file.path())
        .args(["--format", "json"])
        .assert()
        .success();
    let json: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid JSON output");

    let answers = json.as_array().expect("array of answers");
    assert_eq!(answers.len(), 8);
    assert_eq!(answers[0]["question"], "Total people");
    assert_eq!(answers[0]["answer"], "There are 1 people in this file.");
}

#[test]
fn first_appearance_grouping_is_selectable() {
    let file = write_csv(&[
        "header".to_string(),
        row(&[(35, "2018 Nissan Leaf")]),
        row(&[(0, "2"), (35, "2020 Honda Civic")]),
        row(&[(0, "3"), (35, "2020 Honda Civic")]),
    ]);

    // Historical keying: every vehicle its own group, so the first wins.
    namedata()
        .arg(file.path())
        .args(["--vehicle-grouping", "first-appearance"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "The most popular vehicle is the 2018 Nissan Leaf.",
        ));
}
