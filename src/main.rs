use std::io;
use std::process::ExitCode;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use laplax::console;
use laplax::io::JsonReportWriter;
use laplax::operator::LaplaceSystem;
use laplax::report;
use laplax::solver::{gauss_seidel, jacobi};

struct CliOptions {
    json_path: Option<String>,
}

fn main() -> ExitCode {
    // Logs go to stderr so the report protocol on stdout stays scrapable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return ExitCode::SUCCESS;
    }
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("usage: laplax [--json <path>]");
            return ExitCode::from(2);
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(1)
        }
    }
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut json_path = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--json" => {
                i += 1;
                let path = args
                    .get(i)
                    .ok_or_else(|| "--json requires a file path".to_string())?;
                json_path = Some(path.clone());
            }
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }
    Ok(CliOptions { json_path })
}

fn run(options: &CliOptions) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();

    let params = console::prompt_parameters(&mut stdin.lock(), &mut stdout.lock())?;
    info!(
        nodes = params.grid.nodes(),
        x_eigen = params.eigen.0,
        y_eigen = params.eigen.1,
        sweeps = params.sweeps,
        "assembling laplace system"
    );
    let system = LaplaceSystem::assemble(params.grid, params.eigen);

    let jacobi_run = jacobi::solve(&system.matrix, &system.forcing, params.sweeps)?;
    let gauss_seidel_run = gauss_seidel::solve(&system.matrix, &system.forcing, params.sweeps)?;

    report::render_report(&mut stdout.lock(), &system, &jacobi_run, &gauss_seidel_run)?;

    if let Some(path) = &options.json_path {
        let mut writer = JsonReportWriter::new(path.clone())?;
        writer.collect_run("jacobi", &jacobi_run);
        writer.collect_run("gauss_seidel", &gauss_seidel_run);
        writer.write_final_output(&system, params.sweeps)?;
    }
    Ok(())
}

fn print_help() {
    println!("laplax: 5-point Laplace stencil assembly with a Jacobi / Gauss-Seidel comparison");
    println!();
    println!("Reads four integers from stdin (node count, x eigen value, y eigen value,");
    println!("iteration count), prints the operator next to the forcing vector, both final");
    println!("iterates with their ratio columns, and the last sweep's largest change.");
    println!();
    println!("Usage: laplax [--json <path>]");
    println!();
    println!("Options:");
    println!("  --json <path>   also write solutions and sweep deltas as pretty JSON");
    println!("  -h, --help      print this help");
}
