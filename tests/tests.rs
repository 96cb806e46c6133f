use assert_cmd::prelude::*;
use lazy_static::lazy_static;
use predicates::str::{contains, is_empty, PredicateStrExt};
use regex::Regex;
use std::process::Command;

lazy_static! {
    static ref CSV_ROW_REGEX: Regex = Regex::new(r"^(chr\w+)((?:\t\(\d+, -?\d+\))+)$").unwrap();
}

const HITS: &str = "tests/input/hits.sam";
const PROBES: &str = "tests/input/probes.fa";
const META: &str = "tests/input/meta";

fn csv_rows(args: &[&str]) -> Vec<String> {
    let output = Command::cargo_bin("l1pd")
        .unwrap()
        .arg("--csv-output")
        .args(args)
        .args(&[HITS, PROBES])
        .unwrap()
        .stdout;
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn cli_no_args() {
    Command::cargo_bin("l1pd").unwrap().assert().failure();
}

#[test]
fn cli_no_such_file() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["-d", META, "tests/no_such_file.sam", PROBES])
        .assert()
        .failure()
        .stderr(contains("BamError").trim());
}

#[test]
fn cli_gff3() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["-d", META, HITS, PROBES])
        .assert()
        .success()
        .stdout(
            "##gff-version 3.1.25\n\
             chr1\tL1PD\tmobile_genetic_element\t44998\t51030\t.\t-\t.\tName=LINE1\n\
             chr1\tL1PD\tmobile_genetic_element\t9090\t15122\t.\t+\t.\tName=LINE1\n\
             chr2\tL1PD\tmobile_genetic_element\t1090\t7122\t.\t+\t.\tName=LINE1\n",
        );
}

#[test]
fn cli_csv_output() {
    assert_eq!(
        csv_rows(&[]),
        [
            "chr1\t(0, -50000)\t(1, -49640)\t(2, -48320)",
            "chr1\t(0, 10120)\t(1, 10483)\t(2, 11790)\t(3, 15102)",
            "chr2\t(1, 2480)\t(2, 3800)\t(3, 7100)",
        ]
    );
    for row in csv_rows(&[]) {
        assert!(CSV_ROW_REGEX.is_match(&row), "malformed row {}", row);
    }
}

#[test]
fn cli_all_kmers_required() {
    assert_eq!(
        csv_rows(&["-m", "0"]),
        ["chr1\t(0, 10120)\t(1, 10483)\t(2, 11790)\t(3, 15102)"]
    );
}

#[test]
fn cli_missing_kmers_allowed() {
    assert_eq!(csv_rows(&["-m", "-1"]), csv_rows(&[]));
}

#[test]
fn cli_tight_threshold() {
    assert_eq!(
        csv_rows(&["-t", "2"]),
        [
            "chr1\t(0, -50000)\t(1, -49640)\t(2, -48320)",
            "chr1\t(0, 10120)\t(3, 15102)",
            "chr2\t(1, 2480)\t(2, 3800)\t(3, 7100)",
        ]
    );
}

#[test]
fn cli_threads_do_not_change_output() {
    assert_eq!(csv_rows(&["-@", "4"]), csv_rows(&[]));
}

#[test]
fn cli_long_chromosome_names() {
    let rows = csv_rows(&["--max-chrom-len", "16"]);
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[2], "chrUn_KI270302v1\t(0, 100)\t(1, 460)");
}

#[test]
fn cli_no_hits() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["-d", META, "tests/input/no_hits.sam", PROBES])
        .assert()
        .success()
        .stdout(is_empty());
}

#[test]
fn cli_missing_metadata() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["-d", "tests/input", HITS, PROBES])
        .assert()
        .failure()
        .stdout(is_empty())
        .stderr(contains("NoMetadataFile"));
}

#[test]
fn cli_ambiguous_metadata() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["-d", "tests/input/meta_dup", HITS, PROBES])
        .assert()
        .failure()
        .stderr(contains("AmbiguousMetadataFile"));
}

#[test]
fn cli_probe_without_offset() {
    Command::cargo_bin("l1pd")
        .unwrap()
        .args(&["--csv-output", HITS, "tests/input/bad_offset.fa"])
        .assert()
        .failure()
        .stderr(contains("ProbeOffset"));
}
