#![cfg(all(feature = "bubble_sort", feature = "insertion_sort"))]

use std::process::Command;

use regex::Regex;

fn run_binary(args: &[&str]) -> (Option<i32>, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_textbook_sort"))
        .args(args)
        .output()
        .unwrap();

    (output.status.code(), String::from_utf8(output.stdout).unwrap())
}

#[test]
fn full_run_passes() {
    let (code, stdout) = run_binary(&[]);

    assert_eq!(code, Some(0));

    let block = Regex::new(
        r"--- Testing (?P<name>[A-Za-z ]+) ---\nOriginal: \[64, 34, 25, 12, 22, 11, 90\]\nSorted: \[11, 12, 22, 25, 34, 64, 90\]\nResult: (?P<result>PASS|FAIL)\n\n",
    )
    .unwrap();

    let blocks: Vec<(String, String)> = block
        .captures_iter(&stdout)
        .map(|caps| (caps["name"].to_string(), caps["result"].to_string()))
        .collect();

    assert_eq!(
        blocks,
        [
            ("Bubble Sort".to_string(), "PASS".to_string()),
            ("Insertion Sort".to_string(), "PASS".to_string()),
        ]
    );

    assert!(stdout.ends_with("All tests passed!\n"));
    assert!(!stdout.contains("One or more tests failed."));
}

#[test]
fn arguments_are_ignored() {
    let (code_plain, stdout_plain) = run_binary(&[]);
    let (code_args, stdout_args) = run_binary(&["--verbose", "extra"]);

    assert_eq!(code_plain, code_args);
    assert_eq!(stdout_plain, stdout_args);
}
