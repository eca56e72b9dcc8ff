// ベンチマークランナーの統合テスト

use prototype_bench::benchmarks::{standard_workloads, BenchmarkRunner, LabeledWorkload, PerformanceComparison};
use prototype_bench::services::{DefaultRunnerConfig, NoOpBenchmarkReporter};
use std::cell::RefCell;
use std::rc::Rc;

fn runner(iterations: u64) -> BenchmarkRunner<DefaultRunnerConfig, NoOpBenchmarkReporter> {
    BenchmarkRunner::new(DefaultRunnerConfig::new(iterations), NoOpBenchmarkReporter::new())
}

#[test]
fn test_same_iteration_count_for_every_workload() {
    let results = runner(100).run_all(standard_workloads());

    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|m| m.iterations == 100));
    assert_eq!(results[0].report_line().split(" took: ").next(), Some("Full name"));
}

#[test]
fn test_workload_side_effects_are_local() {
    let counter = Rc::new(RefCell::new(0u64));
    let captured = Rc::clone(&counter);
    let workload = LabeledWorkload::new("counting", move || *captured.borrow_mut() += 1);

    runner(250).run_workload(workload);
    assert_eq!(*counter.borrow(), 250);
}

#[test]
fn test_heavier_unit_is_not_faster() {
    let runner = runner(50_000);
    let light = runner.run("light", || {
        std::hint::black_box(0u8);
    });
    let heavy = runner.run("heavy", || {
        let v: Vec<String> = (0..20).map(|i| format!("item-{i}")).collect();
        std::hint::black_box(v);
    });

    let mut comparison = PerformanceComparison::new();
    comparison.record(light);
    comparison.record(heavy);
    assert_eq!(comparison.fastest().unwrap().description, "light");
}
