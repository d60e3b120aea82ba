use std::fs;
use std::path::Path;
use std::process::Command;

use dial_sssp::driver::{discover_instances, run_batch, solve_instance, DriverConfig};
use dial_sssp::io::{load_instance, InstanceLayout, OutputFormat};
use dial_sssp::{Error, Strategy};
use tempfile::tempdir;

const SCENARIO_EDGES: &str = "1 2 4\n1 3 1\n3 2 1\n-1 -1 -1\n";
const SCENARIO_OUTPUT: &str = "1\n1 1 0\n2 3 2\n3 1 1\n";

fn write_instance(root: &Path, name: &str, nodes: &str, edge_file: &str, edges: &str) {
    let dir = root.join(name);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("nodos.txt"), nodes).unwrap();
    fs::write(dir.join(edge_file), edges).unwrap();
}

fn config_for(root: &Path, strategy: Strategy) -> DriverConfig {
    DriverConfig {
        instances_dir: root.to_path_buf(),
        strategy,
        ..Default::default()
    }
}

#[test]
fn batch_writes_one_report_per_instance() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "b", "3\n", "arcos.txt", SCENARIO_EDGES);
    write_instance(root.path(), "a", "4\n", "arcos.txt", "1 2 5\n2 3 5\n");
    fs::write(root.path().join("notes.txt"), "not an instance").unwrap();

    for strategy in Strategy::ALL {
        let reports = run_batch(&config_for(root.path(), strategy), 1).unwrap();
        let names: Vec<_> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b"]);
        assert!(reports.iter().all(|r| r.is_ok()));

        let output = root.path().join("b").join(strategy.default_output_name());
        assert_eq!(fs::read_to_string(output).unwrap(), SCENARIO_OUTPUT);

        let output = root.path().join("a").join(strategy.default_output_name());
        assert_eq!(fs::read_to_string(output).unwrap(), "1\n1 1 0\n2 1 5\n3 2 10\n4 0 -1\n");
    }
}

#[test]
fn edge_list_falls_back_to_dat_file() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "only-dat", "3", "arcos.dat", SCENARIO_EDGES);

    let graph = load_instance(&root.path().join("only-dat"), &InstanceLayout::default()).unwrap();
    let labels = Strategy::Dial.run(&graph, 1).unwrap();
    assert_eq!(labels.distance(2), Some(2));
}

#[test]
fn missing_edge_file_is_reported() {
    let root = tempdir().unwrap();
    let dir = root.path().join("empty");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("nodos.txt"), "2").unwrap();

    let err = load_instance(&dir, &InstanceLayout::default()).unwrap_err();
    assert!(matches!(err, Error::MissingInput(path) if path.ends_with("arcos.txt")));
}

#[test]
fn invalid_source_produces_no_output() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "five", "5", "arcos.txt", "1 2 1\n2 3 1\n");

    let config = config_for(root.path(), Strategy::Dijkstra);
    let err = solve_instance(&root.path().join("five"), &config, 7).unwrap_err();
    assert!(matches!(err, Error::InvalidSource { node: 7, node_count: 5 }));

    let entries: Vec<_> = fs::read_dir(root.path().join("five"))
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(entries.len(), 2, "unexpected files: {:?}", entries);
}

#[test]
fn failing_instance_does_not_stop_the_batch() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "bad", "3", "arcos.txt", "1 2 4\n1 two 1\n3 2 1\n");
    write_instance(root.path(), "good", "3", "arcos.txt", SCENARIO_EDGES);

    let config = config_for(root.path(), Strategy::Dial);
    let reports = run_batch(&config, 1).unwrap();

    assert!(matches!(reports[0].outcome, Err(Error::Parse { line: 2, .. })));
    assert!(!root.path().join("bad").join(config.output_name()).exists());
    assert!(reports[1].is_ok());
    assert!(root.path().join("good").join(config.output_name()).exists());
}

#[test]
fn parallel_batch_matches_sequential() {
    let root = tempdir().unwrap();
    for i in 0..6 {
        let nodes = 3 + i;
        let edges: String = (1..nodes).map(|n| format!("{} {} {}\n", n, n + 1, i + n)).collect();
        write_instance(root.path(), &format!("inst{}", i), &nodes.to_string(), "arcos.txt", &edges);
    }

    let mut config = config_for(root.path(), Strategy::ArrayScan);
    config.output_name = Some("sequential.txt".to_string());
    let sequential = run_batch(&config, 1).unwrap();

    config.output_name = Some("parallel.txt".to_string());
    config.parallel = true;
    let parallel = run_batch(&config, 1).unwrap();

    assert_eq!(sequential.len(), parallel.len());
    for (s, p) in sequential.iter().zip(&parallel) {
        assert_eq!(s.name, p.name);
        let dir = root.path().join(&s.name);
        assert_eq!(
            fs::read_to_string(dir.join("sequential.txt")).unwrap(),
            fs::read_to_string(dir.join("parallel.txt")).unwrap()
        );
    }
}

#[test]
fn json_output_format() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "json", "3", "arcos.txt", SCENARIO_EDGES);

    let mut config = config_for(root.path(), Strategy::Dial);
    config.format = OutputFormat::Json;
    config.output_name = Some("out.json".to_string());
    run_batch(&config, 2).unwrap();

    let text = fs::read_to_string(root.path().join("json").join("out.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["source"], 2);
    assert_eq!(value["nodes"][0]["distance"], -1);
    assert_eq!(value["nodes"][1]["predecessor"], 2);
}

#[test]
fn discover_ignores_files_and_sorts() {
    let root = tempdir().unwrap();
    for name in ["zeta", "alpha", "mid"] {
        fs::create_dir(root.path().join(name)).unwrap();
    }
    fs::write(root.path().join("file"), "").unwrap();

    let found = discover_instances(root.path()).unwrap();
    let names: Vec<_> = found.iter().map(|p| p.file_name().unwrap().to_str().unwrap()).collect();
    assert_eq!(names, vec!["alpha", "mid", "zeta"]);
}

#[test]
fn cli_rejects_non_positive_source() {
    for arg in ["0", "-3"] {
        let output = Command::new(env!("CARGO_BIN_EXE_sssp"))
            .arg(arg)
            .output()
            .unwrap();
        assert_eq!(output.status.code(), Some(2), "source {}", arg);
    }
}

#[test]
fn cli_solves_instances() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "one", "3", "arcos.txt", SCENARIO_EDGES);

    let status = Command::new(env!("CARGO_BIN_EXE_sssp"))
        .arg("1")
        .arg("--instances")
        .arg(root.path())
        .arg("--strategy")
        .arg("array-scan")
        .status()
        .unwrap();
    assert!(status.success());

    let output = root.path().join("one").join("salidaArrayScan.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), SCENARIO_OUTPUT);
}

#[test]
fn cli_fails_when_an_instance_fails() {
    let root = tempdir().unwrap();
    write_instance(root.path(), "small", "2", "arcos.txt", "1 2 1\n");

    let status = Command::new(env!("CARGO_BIN_EXE_sssp"))
        .args(["5", "--instances"])
        .arg(root.path())
        .status()
        .unwrap();
    assert_eq!(status.code(), Some(1));
    assert!(!root.path().join("small").join("salidaDial.txt").exists());
}
