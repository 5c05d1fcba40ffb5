//! Demo driver for the scalar root-finding methods.
//!
//! Runs every method against the cubic `x^3` near its triple root at zero,
//! then scans a Chebyshev quartic for its four zeros, printing one banner per
//! method with the solution, the error against the known root, the iteration
//! count, and the wall time.

use std::time::Instant;

use laplax::error::RootFindError;
use laplax::rootfind::{
    bisection, false_position, horner, newton, secant, steffensen, Bracket, RootFindOptions,
    RootSearch,
};

fn main() -> Result<(), RootFindError> {
    tracing_subscriber::fmt::init();

    let cubic = |x: f64| x * x * x;

    let tight = Bracket::new(-0.05, 0.05)?;
    let wide = Bracket::new(-0.5, 0.5)?;
    let loose = RootFindOptions::default();
    let fine = RootFindOptions {
        tolerance: 1e-3,
        ..Default::default()
    };

    run_method("SECANT METHOD", "x^3", 0.0, || {
        secant::solve(cubic, tight, loose)
    });
    run_method("BISECTION METHOD", "x^3", 0.0, || {
        bisection::solve(cubic, wide, fine)
    });
    run_method("FALSE POSITION METHOD", "x^3", 0.0, || {
        false_position::solve(cubic, wide, fine)
    });
    run_method("NEWTON METHOD", "x^3", 0.0, || {
        newton::solve(cubic, 0.5, fine)
    });
    run_method("STEFFENSEN METHOD", "x^3", 0.0, || {
        steffensen::solve(cubic, 0.5, fine)
    });

    run_horner()?;
    Ok(())
}

fn run_method<F>(title: &str, function: &str, known_root: f64, solve: F)
where
    F: FnOnce() -> Result<RootSearch, RootFindError>,
{
    let start = Instant::now();
    let outcome = solve();
    let elapsed = start.elapsed().as_secs_f64();

    println!();
    println!("==============================");
    println!("{title}");
    println!("Function: {function}");
    match outcome {
        Ok(search) => {
            println!("Solution: {}", search.root);
            println!("Error: {}", (search.root - known_root).abs());
            println!("Iteration count: {}", search.iterations());
        }
        Err(e) => println!("Failed: {e}"),
    }
    println!("Computation time: {elapsed:.8}s");
    println!("==============================");
    println!();
}

fn run_horner() -> Result<(), RootFindError> {
    // Chebyshev T4: zeros at +-cos(pi/8) and +-cos(3 pi/8).
    let coefficients = [8.0, 0.0, -8.0, 0.0, 1.0];
    let range = Bracket::new(-1.1, 1.1)?;

    let start = Instant::now();
    let zeros = horner::scan_zeros(&coefficients, range, 0.001, 0.002)?;
    let elapsed = start.elapsed().as_secs_f64();

    let rendered: Vec<String> = zeros.iter().map(|z| format!("{z:.2}")).collect();
    println!();
    println!("==============================");
    println!("HORNER METHOD");
    println!("Function: 8x^4 - 8x^2 + 1");
    println!("Solutions: {}", rendered.join(", "));
    println!("Computation time: {elapsed:.8}s");
    println!("==============================");
    println!();
    Ok(())
}
