use std::fs;
use std::path::Path;
use std::process::Command;

use mst_cluster::cluster::{medoid, CenterKind, MstCut};
use mst_cluster::{io, Point};
use tempfile::TempDir;

fn run_text(input: &str) -> String {
    let problem = io::parse_problem(input).unwrap();
    let fit = MstCut::new(problem.k).fit(&problem.points).unwrap();
    io::render(&fit)
}

#[test]
fn two_pairs_on_a_line() {
    let out = run_text("4 2\n0 0\n1 0\n10 0\n11 0\n");
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[2], "1.000000");

    let problem = io::parse_problem("4 2\n0 0\n1 0\n10 0\n11 0\n").unwrap();
    let fit = MstCut::new(2).fit(&problem.points).unwrap();
    let tree: Vec<_> = fit.tree().iter().map(|e| (e.u, e.v, e.cost)).collect();
    assert_eq!(tree, vec![(0, 1, 1.0), (2, 3, 1.0), (1, 2, 9.0)]);
    assert_eq!(fit.clusters()[0].members, vec![0, 1]);
    assert_eq!(fit.clusters()[1].members, vec![2, 3]);
    for cluster in fit.clusters() {
        assert_eq!(cluster.spread, 1.0);
    }
}

#[test]
fn k_equals_n_echoes_the_points() {
    let input = "5 5\n1.25 -3\n0 0\n7.5 2\n-4 4\n0.000001 9\n";
    let out = run_text(input);
    assert_eq!(
        out,
        "1.250000 -3.000000\n\
         0.000000 0.000000\n\
         7.500000 2.000000\n\
         -4.000000 4.000000\n\
         0.000001 9.000000\n\
         0.000000\n"
    );
}

#[test]
fn k_equals_one_is_the_one_center_of_everything() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 3.0),
        Point::new(9.0, 9.0),
        Point::new(2.0, 2.0),
    ];
    let fit = MstCut::new(1).fit(&points).unwrap();
    assert_eq!(fit.clusters().len(), 1);

    let all: Vec<usize> = (0..points.len()).collect();
    let expected = medoid(&points, &all);
    assert_eq!(fit.delta_max(), expected.spread);
    assert_eq!(fit.centers(), vec![expected.center]);
    assert_eq!(fit.clusters()[0].center_index, Some(4));
}

#[test]
fn three_groups_with_centroids() {
    let points = vec![
        Point::new(0.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(50.0, 50.0),
        Point::new(100.0, 0.0),
        Point::new(102.0, 0.0),
        Point::new(101.0, 3.0),
    ];
    let fit = MstCut::new(3)
        .with_center(CenterKind::Centroid)
        .fit(&points)
        .unwrap();
    assert_eq!(fit.labels(), &[0, 0, 1, 2, 2, 2]);
    assert_eq!(
        fit.centers(),
        vec![
            Point::new(0.0, 1.0),
            Point::new(50.0, 50.0),
            Point::new(101.0, 1.0)
        ]
    );
    assert_eq!(fit.delta_max(), 2.0);
}

fn cli(dir: &Path, input: &str, extra: &[&str]) -> (Option<i32>, Option<String>, String) {
    let input_path = dir.join("input.txt");
    let output_path = dir.join("output.txt");
    fs::write(&input_path, input).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_mst-cluster"))
        .arg("--input")
        .arg(&input_path)
        .arg("--output")
        .arg(&output_path)
        .args(extra)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    (
        output.status.code(),
        fs::read_to_string(&output_path).ok(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn cli_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let (code, out, _) = cli(dir.path(), "4 2\n0 0\n1 0\n10 0\n11 0\n", &[]);
    assert_eq!(code, Some(0));
    assert_eq!(
        out.as_deref(),
        Some("0.000000 0.000000\n10.000000 0.000000\n1.000000\n")
    );
}

#[test]
fn cli_centroid_flag() {
    let dir = TempDir::new().unwrap();
    let (code, out, _) = cli(
        dir.path(),
        "4 2\n0 0\n1 0\n10 0\n11 0\n",
        &["--center", "centroid"],
    );
    assert_eq!(code, Some(0));
    assert_eq!(
        out.as_deref(),
        Some("0.500000 0.000000\n10.500000 0.000000\n0.500000\n")
    );
}

#[test]
fn cli_malformed_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let (code, out, stderr) = cli(dir.path(), "3 5\n0 0\n1 1\n2 2\n", &[]);
    assert_eq!(code, Some(2));
    assert_eq!(out, None);
    assert!(stderr.contains("invalid cluster count"));

    let (code, out, _) = cli(dir.path(), "3 1\n0 0\n1 1\n", &[]);
    assert_eq!(code, Some(2));
    assert_eq!(out, None);
}

#[test]
fn cli_missing_input_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = Command::new(env!("CARGO_BIN_EXE_mst-cluster"))
        .arg("--input")
        .arg(dir.path().join("absent.txt"))
        .arg("--output")
        .arg(dir.path().join("output.txt"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join("output.txt").exists());
}
