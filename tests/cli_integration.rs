mod common;

use std::process::Command;

use common::Item;
use tempfile::tempdir;

fn bin() -> String {
    env!("CARGO_BIN_EXE_resdiff").to_string()
}

#[test]
fn cli_index_match_exits_zero() {
    let dir = tempdir().unwrap();
    let lines = vec![vec![Item::Value(5), Item::Value(7)], vec![Item::Value(3)]];
    let a = common::write_file(dir.path(), "a", &common::ascii_index(&lines));
    let b = common::write_file(dir.path(), "b", &common::binary_index(&lines));

    let out = Command::new(bin())
        .arg("index")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(out.status.success(), "{out:?}");
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("files match"), "{stdout}");
}

#[test]
fn cli_quiet_suppresses_success_message() {
    let dir = tempdir().unwrap();
    let lines = vec![vec![Item::Value(1)]];
    let a = common::write_file(dir.path(), "a", &common::ascii_index(&lines));
    let b = common::write_file(dir.path(), "b", &common::ascii_index(&lines));

    let out = Command::new(bin())
        .args(["--quiet", "index"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "{:?}", out.stdout);
}

#[test]
fn cli_mismatch_exits_one_with_coordinates() {
    let dir = tempdir().unwrap();
    let a = common::write_file(
        dir.path(),
        "a",
        &common::ascii_index(&[vec![Item::Value(5), Item::Value(7)], vec![Item::Value(3)]]),
    );
    let b = common::write_file(
        dir.path(),
        "b",
        &common::ascii_index(&[vec![Item::Value(5), Item::Value(8)], vec![Item::Value(3)]]),
    );

    let out = Command::new(bin())
        .arg("index")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 0, position 1"), "{stderr}");
    assert!(stderr.contains("value 7"), "{stderr}");
    assert!(stderr.contains("value 8"), "{stderr}");
}

#[test]
fn cli_version_mismatch_exits_one_naming_file() {
    let dir = tempdir().unwrap();
    let mut stale = common::framed("binary");
    stale.extend(common::framed("v0.1"));
    let a = common::write_file(dir.path(), "stale.bin", &stale);
    let b = common::write_file(
        dir.path(),
        "b",
        &common::binary_index(&[vec![Item::Value(1)]]),
    );

    let out = Command::new(bin())
        .arg("index")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("stale.bin"), "{stderr}");
    assert!(stderr.contains("v1.0"), "{stderr}");
}

#[test]
fn cli_color_csv_against_binary() {
    let dir = tempdir().unwrap();
    let lines = vec![vec![0u64, 2], vec![1]];
    let a = common::write_file(dir.path(), "a.csv", &common::csv_color(&lines, 4));
    let b = common::write_file(dir.path(), "b", &common::binary_color(&lines));

    let out = Command::new(bin())
        .arg("color")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(out.status.success(), "{out:?}");
}

#[test]
fn cli_json_stats_on_match() {
    let dir = tempdir().unwrap();
    let lines = vec![vec![Item::Value(1), Item::Value(2)]];
    let a = common::write_file(dir.path(), "a", &common::ascii_index(&lines));
    let b = common::write_file(dir.path(), "b", &common::ascii_index(&lines));

    let out = Command::new(bin())
        .args(["--json", "--quiet", "index"])
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("\"matched\": true"), "{stderr}");
    assert!(stderr.contains("\"tokens\": 2"), "{stderr}");
}

#[test]
fn cli_sort_lines_roundtrip() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    std::fs::write(&input, "0 9 3 7\n1 5 2\n").unwrap();

    let st = Command::new(bin())
        .arg("sort-lines")
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();
    assert!(st.success());
    assert_eq!(std::fs::read(&output).unwrap(), b"0 3 7 9\n1 2 5\n");
}

#[test]
fn cli_missing_input_exits_one() {
    let dir = tempdir().unwrap();
    let a = dir.path().join("missing1");
    let b = dir.path().join("missing2");
    let out = Command::new(bin())
        .arg("index")
        .arg(&a)
        .arg(&b)
        .output()
        .unwrap();
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn cli_no_args_shows_help() {
    let out = Command::new(bin()).output().unwrap();
    assert!(!out.status.success());
}
