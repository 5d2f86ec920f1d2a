//! End-to-end sampling tests against real files.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use qm9_subset::{run, ErrorKind, SamplerConfig};
use tempfile::{tempdir, TempDir};

fn write_id_value_csv(dir: &TempDir, rows: usize) -> PathBuf {
    let mut text = String::from("id,value\n");
    for i in 0..rows {
        text.push_str(&format!("{i},{:.3}\n", i as f64 * 0.5));
    }
    let path = dir.path().join("input.csv");
    fs::write(&path, text).unwrap();
    path
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_sample_ten_of_hundred() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 100);
    let output = dir.path().join("subset.csv");

    let config = SamplerConfig::new(&input, &output)
        .with_sample_size(10)
        .with_seed(42);
    let report = run(&config).unwrap();

    assert_eq!(report.rows_written, 10);
    assert_eq!(report.rows_available, 100);
    assert_eq!(report.output_path, output);

    let out = lines(&output);
    assert_eq!(out.len(), 11);
    assert_eq!(out[0], "id,value");

    // Rerun with the same seed: same rows, same order.
    let first = out.clone();
    run(&config).unwrap();
    assert_eq!(lines(&output), first);
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 2_000);
    let a = dir.path().join("a.csv");
    let b = dir.path().join("b.csv");

    run(&SamplerConfig::new(&input, &a).with_sample_size(500)).unwrap();
    run(&SamplerConfig::new(&input, &b).with_sample_size(500)).unwrap();

    assert_eq!(fs::read(&a).unwrap(), fs::read(&b).unwrap());
}

#[test]
fn test_rows_come_from_input_without_duplicates() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 300);
    let output = dir.path().join("subset.csv");

    run(&SamplerConfig::new(&input, &output).with_sample_size(120)).unwrap();

    let source: HashSet<String> = lines(&input).into_iter().skip(1).collect();
    let sampled: Vec<String> = lines(&output).into_iter().skip(1).collect();

    assert_eq!(sampled.len(), 120);
    assert!(sampled.iter().all(|row| source.contains(row)));
    let unique: HashSet<&String> = sampled.iter().collect();
    assert_eq!(unique.len(), sampled.len());
}

#[test]
fn test_header_preserved_in_order() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("qm9.csv");
    fs::write(
        &input,
        "mol_id,smiles,mu,homo\ngdb_1,C,0.0,-0.3877\ngdb_2,N,1.6256,-0.257\ngdb_3,O,1.8511,-0.2928\n",
    )
    .unwrap();
    let output = dir.path().join("qm9_subset.csv");

    run(&SamplerConfig::new(&input, &output).with_sample_size(2)).unwrap();

    let out = lines(&output);
    assert_eq!(out[0], "mol_id,smiles,mu,homo");
    assert_eq!(out.len(), 3);
}

#[test]
fn test_short_dataset_returns_all_rows() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 5);
    let output = dir.path().join("subset.csv");

    let report = run(&SamplerConfig::new(&input, &output).with_sample_size(10)).unwrap();
    assert_eq!(report.rows_written, 5);
    assert_eq!(report.rows_available, 5);

    let mut sampled: Vec<String> = lines(&output).into_iter().skip(1).collect();
    let mut source: Vec<String> = lines(&input).into_iter().skip(1).collect();
    sampled.sort();
    source.sort();
    assert_eq!(sampled, source);
}

#[test]
fn test_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 50);
    let output = dir.path().join("subset.csv");
    fs::write(&output, "stale\ncontent\nthat\nis\nlonger\nthan\nthe\nsample\n").unwrap();

    run(&SamplerConfig::new(&input, &output).with_sample_size(3)).unwrap();
    assert_eq!(lines(&output).len(), 4);
}

#[test]
fn test_json_input_writes_json_output() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("qm9.json");
    fs::write(
        &input,
        r#"[{"mol_id":"gdb_1","mu":0.0},{"mol_id":"gdb_2","mu":1.6256},{"mol_id":"gdb_3","mu":1.8511}]"#,
    )
    .unwrap();
    let output = dir.path().join("subset.json");

    let report = run(&SamplerConfig::new(&input, &output).with_sample_size(2)).unwrap();
    assert_eq!(report.rows_written, 2);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    let rows = value.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r["mu"].is_number()));
}

#[test]
fn test_missing_input_is_not_found() {
    let dir = tempdir().unwrap();
    let config = SamplerConfig::new(dir.path().join("absent.csv"), dir.path().join("out.csv"));

    let err = run(&config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_malformed_input_is_parse_error() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("bad.csv");
    fs::write(&input, "id,value\n1,2\n3,4,5\n").unwrap();

    let err = run(&SamplerConfig::new(&input, dir.path().join("out.csv"))).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Parse);
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 20);
    let output = dir.path().join("no_such_dir").join("subset.csv");

    let err = run(&SamplerConfig::new(&input, &output).with_sample_size(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn test_read_only_output_is_permission_error() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 20);
    let output = dir.path().join("subset.csv");
    fs::write(&output, "locked\n").unwrap();

    let mut perms = fs::metadata(&output).unwrap().permissions();
    perms.set_readonly(true);
    fs::set_permissions(&output, perms.clone()).unwrap();

    // Privileged users (root) can still open read-only files for writing.
    let writable = fs::OpenOptions::new().write(true).open(&output).is_ok();
    if !writable {
        let err = run(&SamplerConfig::new(&input, &output).with_sample_size(5)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Permission);
        assert_eq!(fs::read_to_string(&output).unwrap(), "locked\n");
    }

    perms.set_readonly(false);
    fs::set_permissions(&output, perms).unwrap();
}

#[test]
fn test_json_string_cells_are_not_retyped() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("strings.json");
    let source = r#"[{"id":"007","flag":"true","note":""}]"#;
    fs::write(&input, source).unwrap();
    let output = dir.path().join("subset.json");

    run(&SamplerConfig::new(&input, &output).with_sample_size(1)).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), source);
}

#[test]
fn test_confirmation_line() {
    let dir = tempdir().unwrap();
    let input = write_id_value_csv(&dir, 12_000);
    let output = dir.path().join("subset.csv");

    let report = run(&SamplerConfig::new(&input, &output)).unwrap();
    assert_eq!(
        report.to_string(),
        format!("10,000 records have been saved to {}", output.display())
    );
}
