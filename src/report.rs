//! Console report rendering for the solver comparison.
//!
//! Layout, headers, and number formatting follow the legacy console tool this
//! replaces, so downstream scripts that scrape the output keep working. All
//! numbers go through [`fmt_g6`], a six-significant-digit general format.

use std::io::{self, Write};

use tracing::warn;

use crate::operator::LaplaceSystem;
use crate::solver::RelaxationRun;

/// Formats like `printf("%g")`: six significant digits, trailing zeros
/// trimmed, scientific notation once the exponent leaves `[-4, 5]`.
pub fn fmt_g6(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let magnitude = value.abs();
    // Round to six significant digits first; the exponent of the rounded
    // value decides between fixed and scientific style.
    let sci = format!("{magnitude:.5e}");
    let (mantissa, exp_str) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = match exp_str.parse() {
        Ok(e) => e,
        Err(_) => return sci,
    };

    let body = if !(-4..6).contains(&exponent) {
        let digits = trim_decimal(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{digits}e{sign}{:02}", exponent.abs())
    } else {
        let decimals = (5 - exponent) as usize;
        trim_decimal(&format!("{magnitude:.decimals$}"))
    };

    if value < 0.0 {
        format!("-{body}")
    } else {
        body
    }
}

fn trim_decimal(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Prints the operator rows next to the forcing vector.
pub fn render_system<W: Write>(out: &mut W, system: &LaplaceSystem) -> io::Result<()> {
    writeln!(out, "Laplace matrix  |   y")?;
    let n = system.grid.nodes();
    for i in 0..n {
        let row: Vec<String> = (0..n).map(|j| fmt_g6(system.matrix[(i, j)])).collect();
        writeln!(out, "{}\t{}", row.join(" "), fmt_g6(system.forcing[i]))?;
        writeln!(out)?;
    }
    Ok(())
}

/// Prints both final iterates side by side with their ratios against the
/// forcing entries. A zero forcing entry renders as `undefined` instead of
/// propagating an infinity through the column.
pub fn render_comparison<W: Write>(
    out: &mut W,
    system: &LaplaceSystem,
    jacobi: &RelaxationRun,
    gauss_seidel: &RelaxationRun,
) -> io::Result<()> {
    writeln!(
        out,
        "jacobi | jacobi over eigenvector y | Gauss-Seidel | Gauss Seidel over eiven vector y"
    )?;
    let mut undefined_rows = 0usize;
    for i in 0..system.grid.nodes() {
        let f_i = system.forcing[i];
        if f_i == 0.0 {
            undefined_rows += 1;
        }
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            fmt_g6(jacobi.solution[i]),
            ratio_cell(jacobi.solution[i], f_i),
            fmt_g6(gauss_seidel.solution[i]),
            ratio_cell(gauss_seidel.solution[i], f_i),
        )?;
    }
    if undefined_rows > 0 {
        warn!(
            rows = undefined_rows,
            "zero forcing entries, ratio columns rendered as undefined"
        );
    }
    Ok(())
}

fn ratio_cell(value: f64, divisor: f64) -> String {
    if divisor == 0.0 {
        "undefined".to_string()
    } else {
        fmt_g6(value / divisor)
    }
}

/// Prints the closing convergence line: the last sweep's largest component
/// change, or `n/a` when no sweep ran.
pub fn render_convergence<W: Write>(out: &mut W, jacobi: &RelaxationRun) -> io::Result<()> {
    writeln!(out)?;
    match jacobi.last_delta() {
        Some(delta) => writeln!(out, "{}", fmt_g6(delta)),
        None => writeln!(out, "n/a"),
    }
}

/// The full report in protocol order.
pub fn render_report<W: Write>(
    out: &mut W,
    system: &LaplaceSystem,
    jacobi: &RelaxationRun,
    gauss_seidel: &RelaxationRun,
) -> io::Result<()> {
    render_system(out, system)?;
    render_comparison(out, system, jacobi, gauss_seidel)?;
    render_convergence(out, jacobi)
}
