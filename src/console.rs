//! Interactive parameter intake for the solver comparison run.
//!
//! Four prompts, one integer each, answered on stdin. Bad input fails fast
//! with a [`ConfigError`] instead of re-prompting; the caller maps that to a
//! non-zero exit.

use std::io::{BufRead, Write};

use crate::domain::grid2d::{EigenPair, NodeGrid2D};
use crate::error::ConfigError;

/// Everything a comparison run needs, validated.
#[derive(Debug, Clone, PartialEq)]
pub struct RunParameters {
    pub grid: NodeGrid2D,
    pub eigen: EigenPair,
    pub sweeps: usize,
}

/// Walks the four-prompt protocol and validates the answers.
pub fn prompt_parameters<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> Result<RunParameters, ConfigError> {
    let nodes = prompt_integer(
        input,
        output,
        "Enter the node count (which equals to n^2): ",
        "node count",
    )?;
    if nodes <= 0 {
        return Err(ConfigError::InvalidNodeCount(nodes));
    }
    let grid = NodeGrid2D::new(nodes as usize)?;

    let kx = prompt_eigen(input, output, "Enter x eigen value: ", "x eigen value")?;
    let ky = prompt_eigen(input, output, "Enter y eigen value: ", "y eigen value")?;

    let sweeps = prompt_integer(input, output, "Enter iteration count: ", "iteration count")?;
    if sweeps < 0 {
        return Err(ConfigError::InvalidIterationCount(sweeps));
    }

    Ok(RunParameters {
        grid,
        eigen: EigenPair(kx, ky),
        sweeps: sweeps as usize,
    })
}

fn prompt_integer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<i64, ConfigError> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ConfigError::UnexpectedEof(field));
    }
    let trimmed = line.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| ConfigError::InvalidInteger {
            field,
            value: trimmed.to_string(),
        })
}

fn prompt_eigen<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    field: &'static str,
) -> Result<i32, ConfigError> {
    let raw = prompt_integer(input, output, prompt, field)?;
    i32::try_from(raw).map_err(|_| ConfigError::InvalidInteger {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(session: &str) -> (Result<RunParameters, ConfigError>, String) {
        let mut input = Cursor::new(session.as_bytes().to_vec());
        let mut output = Vec::new();
        let result = prompt_parameters(&mut input, &mut output);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn accepts_a_complete_session() {
        let (result, prompts) = run("9\n1\n2\n30\n");
        let params = result.unwrap();
        assert_eq!(params.grid.nodes(), 9);
        assert_eq!(params.eigen, EigenPair(1, 2));
        assert_eq!(params.sweeps, 30);
        assert_eq!(
            prompts,
            "Enter the node count (which equals to n^2): \
             Enter x eigen value: \
             Enter y eigen value: \
             Enter iteration count: "
        );
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let (result, _) = run("  16  \n1\n1\n5\n");
        assert_eq!(result.unwrap().grid.nodes(), 16);
    }

    #[test]
    fn zero_sweeps_are_allowed() {
        let (result, _) = run("4\n1\n1\n0\n");
        assert_eq!(result.unwrap().sweeps, 0);
    }

    #[test]
    fn negative_eigen_values_are_allowed() {
        let (result, _) = run("4\n-1\n-2\n3\n");
        assert_eq!(result.unwrap().eigen, EigenPair(-1, -2));
    }

    #[test]
    fn rejects_non_numeric_input() {
        let (result, _) = run("three\n");
        match result.unwrap_err() {
            ConfigError::InvalidInteger { field, value } => {
                assert_eq!(field, "node count");
                assert_eq!(value, "three");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn rejects_nonpositive_node_counts() {
        let (result, _) = run("-4\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidNodeCount(-4)
        ));
        let (result, _) = run("0\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidNodeCount(0)
        ));
    }

    #[test]
    fn rejects_non_square_node_counts() {
        let (result, _) = run("12\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::NotPerfectSquare(12)
        ));
    }

    #[test]
    fn rejects_negative_iteration_counts() {
        let (result, _) = run("9\n1\n1\n-3\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidIterationCount(-3)
        ));
    }

    #[test]
    fn rejects_eigen_values_beyond_i32() {
        let (result, _) = run("9\n5000000000\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::InvalidInteger {
                field: "x eigen value",
                ..
            }
        ));
    }

    #[test]
    fn reports_which_prompt_hit_end_of_input() {
        let (result, _) = run("9\n1\n");
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::UnexpectedEof("y eigen value")
        ));
    }
}
