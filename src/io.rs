//! Optional JSON export of a comparison run.
//!
//! The console report in [`crate::report`] stays the primary interface; this
//! writer exists for plotting and regression scripts that want the raw
//! iterates instead of scraping formatted text.

use serde::Serialize;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::info;

use crate::operator::LaplaceSystem;
use crate::solver::RelaxationRun;

#[derive(Serialize, Debug)]
struct RunMetadata {
    nodes: usize,
    dim: usize,
    spacing: f64,
    x_eigen: i32,
    y_eigen: i32,
    sweeps: usize,
}

#[derive(Serialize, Debug)]
struct MethodReport {
    method: &'static str,
    solution: Vec<f64>,
    sweep_deltas: Vec<f64>,
    residual_norm: f64,
}

#[derive(Serialize, Debug)]
struct SolveReport<'a> {
    metadata: RunMetadata,
    methods: &'a [MethodReport],
}

/// Collects per-method results and writes them out once at the end.
#[derive(Debug)]
pub struct JsonReportWriter {
    output_filepath: String,
    methods: Vec<MethodReport>,
}

impl JsonReportWriter {
    /// Creates a new writer and makes sure the parent directory of the
    /// output file exists.
    pub fn new(output_filepath: String) -> Result<Self, io::Error> {
        let path = Path::new(&output_filepath);
        if let Some(parent_dir) = path.parent() {
            if !parent_dir.as_os_str().is_empty() {
                fs::create_dir_all(parent_dir)?;
                info!("Ensured output directory exists: {}", parent_dir.display());
            }
        }

        Ok(Self {
            output_filepath,
            methods: Vec::new(),
        })
    }

    /// Adds one finished relaxation run under the given method label.
    pub fn collect_run(&mut self, method: &'static str, run: &RelaxationRun) {
        self.methods.push(MethodReport {
            method,
            solution: run.solution.as_slice().to_vec(),
            sweep_deltas: run.sweep_deltas.clone(),
            residual_norm: run.residual_norm,
        });
    }

    /// Writes the collected runs plus problem metadata as pretty JSON.
    /// Writing nothing is not an error; the file is simply not created.
    pub fn write_final_output(
        &self,
        system: &LaplaceSystem,
        sweeps: usize,
    ) -> Result<(), io::Error> {
        if self.methods.is_empty() {
            info!(
                "No runs collected, skipping JSON output to {}.",
                self.output_filepath
            );
            return Ok(());
        }

        info!("Writing report to JSON file: {}...", self.output_filepath);
        let output_start = std::time::Instant::now();

        let metadata = RunMetadata {
            nodes: system.grid.nodes(),
            dim: system.grid.dim(),
            spacing: system.grid.spacing(),
            x_eigen: system.eigen.0,
            y_eigen: system.eigen.1,
            sweeps,
        };
        let report = SolveReport {
            metadata,
            methods: &self.methods,
        };

        let json_string = match serde_json::to_string_pretty(&report) {
            Ok(s) => s,
            Err(e) => {
                return Err(io::Error::new(
                    io::ErrorKind::Other,
                    format!("Failed to serialize report to JSON: {}", e),
                ));
            }
        };

        let file = File::create(&self.output_filepath)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(json_string.as_bytes())?;
        writer.flush()?;

        info!(
            "JSON output finished in {}ms",
            output_start.elapsed().as_millis()
        );
        Ok(())
    }
}
