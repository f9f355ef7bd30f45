use std::{fs, path::Path};

use anyhow::{Context, Result};
use life::Problem;
use log::{info, warn};

#[derive(Debug)]
pub struct Outcome {
    pub generations: i64,
    pub rendered: String,
}

/// Reads a problem from `input`, evolves it and writes the final field to `output`.
pub fn run(input: &Path, output: &Path) -> Result<Outcome> {
    let raw = fs::read_to_string(input)
        .with_context(|| format!("read problem from {}", input.display()))?;
    let problem: Problem = raw
        .parse()
        .with_context(|| format!("parse problem in {}", input.display()))?;
    info!(
        "loaded {}x{} field with {} live cells",
        problem.width,
        problem.height,
        problem.grid.population()
    );
    if problem.generations < 0 {
        warn!(
            "negative generation count {}, leaving the field as is",
            problem.generations
        );
    }

    let rendered = problem.solve().to_string();
    fs::write(output, &rendered)
        .with_context(|| format!("write result to {}", output.display()))?;
    info!("wrote final field to {}", output.display());

    Ok(Outcome {
        generations: problem.generations,
        rendered,
    })
}
