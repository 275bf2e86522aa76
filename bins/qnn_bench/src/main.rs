use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use classifier::{bench_with, output::write_csv, BackendKind, OptimizerKind, TrainConfig};
use quantum::{datapoints_transform_to_state, Circuit, Rotation};

/// Training-time benchmark for a variational quantum binary classifier
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of qubits
    #[arg(long, default_value_t = 4)]
    qubits: usize,

    /// Training epochs
    #[arg(long, default_value_t = 5)]
    epochs: usize,

    /// Batch size
    #[arg(long, default_value_t = 20)]
    batch: usize,

    /// Training set size
    #[arg(long, default_value_t = 200)]
    train: usize,

    /// Test set size
    #[arg(long, default_value_t = 100)]
    test: usize,

    /// Number of entangling layers
    #[arg(long, default_value_t = 1)]
    depth: usize,

    /// Learning rate
    #[arg(long, default_value_t = 0.1)]
    lr: f64,

    /// Width of the empty band around the decision circle
    #[arg(long, default_value_t = 0.01)]
    gap: f64,

    /// Seed for parameter initialization
    #[arg(long, default_value_t = 19)]
    seed_paras: u64,

    /// Seed for dataset generation
    #[arg(long, default_value_t = 2)]
    seed_data: u64,

    #[arg(long, value_enum, default_value_t = Opt::Adam)]
    optimizer: Opt,

    /// Encoding rotation axis
    #[arg(long, value_enum, default_value_t = Encoding::Rz)]
    encoding: Encoding,

    #[arg(long, value_enum, default_value_t = Sim::Statevector)]
    backend: Sim,

    /// Maximum MPS bond dimension (mps backend)
    #[arg(long, default_value_t = 64)]
    max_bond: usize,

    /// SVD cutoff (mps backend)
    #[arg(long, default_value_t = 1e-10)]
    cutoff: f64,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Write test accuracy per evaluation to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print the benchmark result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Opt {
    Adam,
    Sgd,
    Rmsprop,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Encoding {
    Rz,
    Ry,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Sim {
    Statevector,
    Mps,
}

impl Args {
    fn config(&self) -> TrainConfig {
        TrainConfig {
            n_train: self.train,
            n_test: self.test,
            gap: self.gap,
            n_qubits: self.qubits,
            depth: self.depth,
            epochs: self.epochs,
            lr: self.lr,
            batch: self.batch,
            seed_paras: self.seed_paras,
            seed_data: self.seed_data,
            optimizer: match self.optimizer {
                Opt::Adam => OptimizerKind::Adam,
                Opt::Sgd => OptimizerKind::Sgd,
                Opt::Rmsprop => OptimizerKind::RmsProp,
            },
            encoding: match self.encoding {
                Encoding::Rz => Rotation::Rz,
                Encoding::Ry => Rotation::Ry,
            },
            backend: match self.backend {
                Sim::Statevector => BackendKind::StateVector,
                Sim::Mps => BackendKind::Mps {
                    max_bond: self.max_bond,
                    cutoff: self.cutoff,
                },
            },
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let cfg = args.config();

    println!("Encoding test input (x_0, x_1) = (1, 0) on 2 qubits:");
    for psi in datapoints_transform_to_state(&[vec![1.0, 0.0]], 2, cfg.encoding)? {
        let amps: Vec<String> = psi
            .amplitudes()
            .iter()
            .map(|a| format!("{:.4}{:+.4}i", a.re, a.im))
            .collect();
        println!("[{}]", amps.join(", "));
    }

    println!("{}", Circuit::classifier_ansatz(cfg.n_qubits, cfg.depth)?);

    let result = bench_with(&cfg).context("training failed")?;

    let model = &result.summary.model;
    println!("Trained circuit:");
    println!("{}", model.circuit().display_with(model.params()));

    if let Some(path) = &args.csv {
        write_csv(path, &result.summary)
            .with_context(|| format!("failed to write CSV to {}", path))?;
        info!(path = %path, "wrote test accuracy CSV");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }

    println!("{}", result.elapsed_secs);
    Ok(())
}
