use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::train::TrainingSummary;

pub fn write_csv<P: AsRef<Path>>(path: P, summary: &TrainingSummary) -> io::Result<()> {
    let mut f = File::create(path)?;
    writeln!(f, "iteration,test_acc")?;
    for (iteration, acc) in summary.iterations.iter().zip(&summary.test_acc) {
        writeln!(f, "{},{}", iteration, acc)?;
    }
    Ok(())
}
