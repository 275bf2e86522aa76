use classifier::{
    bench,
    bench_with,
    output::write_csv,
    q_classifier,
    BackendKind,
    ClassifierError,
    OptimizerKind,
    TrainConfig,
};
use quantum::Rotation;

fn small() -> TrainConfig {
    TrainConfig {
        n_train: 40,
        n_test: 20,
        n_qubits: 3,
        epochs: 2,
        batch: 10,
        ..TrainConfig::default()
    }
}

#[test]
fn defaults_match_benchmark_settings() {
    let cfg = TrainConfig::default();
    assert_eq!(cfg.n_test, 100);
    assert_eq!(cfg.depth, 1);
    assert_eq!(cfg.seed_paras, 19);
    assert_eq!(cfg.seed_data, 2);
    assert!((cfg.gap - 0.01).abs() < 1e-15);
    assert!((cfg.lr - 0.1).abs() < 1e-15);
    assert_eq!(cfg.optimizer, OptimizerKind::Adam);
}

#[test]
fn evaluation_schedule_and_step_count() {
    let summary = q_classifier(&small()).unwrap();

    // 4 batches per epoch, 2 epochs; iteration 5 is epoch 1, batch 0
    assert_eq!(summary.steps, 8);
    assert_eq!(summary.iterations, vec![40]);
    assert_eq!(summary.test_acc.len(), 1);
    assert!((0.0..=1.0).contains(&summary.test_acc[0]));
    assert!(summary.final_loss.is_finite());
}

#[test]
fn partial_batches_are_dropped() {
    let cfg = TrainConfig {
        n_train: 45,
        ..small()
    };
    assert_eq!(q_classifier(&cfg).unwrap().steps, 8);
}

#[test]
fn training_is_reproducible() {
    let cfg = TrainConfig {
        encoding: Rotation::Ry,
        ..small()
    };
    let a = q_classifier(&cfg).unwrap();
    let b = q_classifier(&cfg).unwrap();

    assert_eq!(a.final_loss, b.final_loss);
    assert_eq!(a.test_acc, b.test_acc);
    assert_eq!(a.model.weights(), b.model.weights());
}

#[test]
fn mps_backend_trains_like_statevector() {
    let sv = q_classifier(&TrainConfig {
        encoding: Rotation::Ry,
        ..small()
    })
    .unwrap();
    let mps = q_classifier(&TrainConfig {
        encoding: Rotation::Ry,
        backend: BackendKind::Mps {
            max_bond: 16,
            cutoff: 1e-14,
        },
        ..small()
    })
    .unwrap();

    assert!(
        (sv.final_loss - mps.final_loss).abs() < 1e-6,
        "{} vs {}",
        sv.final_loss,
        mps.final_loss
    );
}

#[test]
fn every_optimizer_runs() {
    for optimizer in [OptimizerKind::Adam, OptimizerKind::Sgd, OptimizerKind::RmsProp] {
        let summary = q_classifier(&TrainConfig {
            optimizer,
            ..small()
        })
        .unwrap();
        assert!(summary.final_loss.is_finite(), "{:?}", optimizer);
    }
}

#[test]
fn bad_batch_sizes_are_rejected() {
    assert_eq!(
        q_classifier(&TrainConfig { batch: 0, ..small() }).unwrap_err(),
        ClassifierError::ZeroBatch
    );
    assert_eq!(
        q_classifier(&TrainConfig { batch: 41, ..small() }).unwrap_err(),
        ClassifierError::BatchTooLarge {
            batch: 41,
            n_train: 40
        }
    );
}

#[test]
fn bench_reports_elapsed_time() {
    let result = bench(2, 1, 10, 20).unwrap();

    assert!(result.elapsed_secs > 0.0);
    assert_eq!(result.config.n_qubits, 2);
    assert_eq!(result.config.n_train, 20);
    assert_eq!(result.summary.steps, 2);
}

#[test]
fn summary_csv_lists_evaluations() {
    let cfg = TrainConfig {
        epochs: 10,
        ..small()
    };
    let result = bench_with(&cfg).unwrap();

    let path = std::env::temp_dir().join(format!("qnn-summary-{}.csv", std::process::id()));
    write_csv(&path, &result.summary).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "iteration,test_acc");
    // iterations 5 and 35 out of 40
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("40,"), "{}", lines[1]);
}

#[test]
fn empty_test_set_skips_evaluation() {
    let summary = q_classifier(&TrainConfig {
        n_test: 0,
        ..small()
    })
    .unwrap();

    assert_eq!(summary.steps, 8);
    assert!(summary.iterations.is_empty());
    assert!(summary.test_acc.is_empty());
    assert!(summary.final_loss.is_finite());
}

#[test]
fn bench_result_serializes_to_json() {
    let cfg = TrainConfig {
        epochs: 0,
        backend: BackendKind::Mps {
            max_bond: 4,
            cutoff: 1e-10,
        },
        ..small()
    };
    let result = bench_with(&cfg).unwrap();
    let json: serde_json::Value = serde_json::to_value(&result).unwrap();

    assert_eq!(json["config"]["backend"]["mps"]["max_bond"], 4);
    assert_eq!(json["config"]["backend"]["mps"]["cutoff"], 1e-10);
    assert_eq!(json["config"]["optimizer"], "adam");
    assert_eq!(json["config"]["encoding"], "rz");
    assert_eq!(json["summary"]["steps"], 0);
    assert!(json["summary"]["final_loss"].is_null());
    assert!(json["summary"].get("model").is_none());
    assert!(json["elapsed_secs"].is_f64());
}

#[test]
fn statevector_backend_serializes_as_unit_variant() {
    let json = serde_json::to_string(&TrainConfig::default()).unwrap();
    assert!(json.contains("\"backend\":\"statevector\""), "{}", json);
}
