//! Eval command: value and derivative of a catalogue function at points.

use clap::ValueEnum;
use dual_core::grad::{derivative_at_points, try_value_and_grad};
use dual_core::Dual;
use serde::Serialize;
use tracing::{info, warn};

use crate::catalog::CatalogFunction;
use crate::Result;

/// Output format for `eval`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON array of rows
    Json,
}

/// One evaluated point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvalRow {
    /// Evaluation point
    pub x: f64,
    /// f(x) and f'(x)
    #[serde(flatten)]
    pub result: Dual,
}

/// Evaluates `function` at every point.
///
/// With `strict`, the first non-finite value or derivative aborts with an
/// error; otherwise non-finite rows are kept and logged.
pub fn evaluate(function: CatalogFunction, points: &[f64], strict: bool) -> Result<Vec<EvalRow>> {
    let f = |x: Dual| function.apply(x);

    if strict {
        return points
            .iter()
            .map(|&x| -> Result<EvalRow> {
                let (value, derivative) = try_value_and_grad(f, x)?;
                Ok(EvalRow {
                    x,
                    result: Dual::new(value, derivative),
                })
            })
            .collect();
    }

    let rows: Vec<EvalRow> = points
        .iter()
        .zip(derivative_at_points(f, points))
        .map(|(&x, (value, derivative))| EvalRow {
            x,
            result: Dual::new(value, derivative),
        })
        .collect();

    for row in rows.iter().filter(|r| !r.result.is_finite()) {
        warn!(x = row.x, "non-finite result for {}", function.formula());
    }

    Ok(rows)
}

/// Renders rows as a text table.
pub fn render_table(function: CatalogFunction, rows: &[EvalRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!("f(x) = {}\n", function.formula()));
    out.push_str(&format!("{:>14} {:>22} {:>22}\n", "x", "f(x)", "f'(x)"));
    for row in rows {
        out.push_str(&format!(
            "{:>14.6} {:>22.12} {:>22.12}\n",
            row.x, row.result.value, row.result.derivative
        ));
    }
    out
}

/// Runs the eval command.
pub fn run(
    function: CatalogFunction,
    points: &[f64],
    format: OutputFormat,
    strict: bool,
) -> Result<()> {
    info!(
        "Evaluating {} at {} point(s)",
        function.formula(),
        points.len()
    );

    let rows = evaluate(function, points, strict)?;

    match format {
        OutputFormat::Table => print!("{}", render_table(function, &rows)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    #[test]
    fn test_evaluate_square() {
        let rows = evaluate(CatalogFunction::Square, &[1.0, 3.0], false).unwrap();
        assert_eq!(
            rows,
            vec![
                EvalRow {
                    x: 1.0,
                    result: Dual::new(1.0, 2.0)
                },
                EvalRow {
                    x: 3.0,
                    result: Dual::new(9.0, 6.0)
                },
            ]
        );
    }

    #[test]
    fn test_non_strict_keeps_pole() {
        let rows = evaluate(CatalogFunction::Reciprocal, &[0.0, 2.0], false).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].result.value, f64::INFINITY);
        assert_eq!(rows[1].result.derivative, -0.25);
    }

    #[test]
    fn test_strict_rejects_pole() {
        let result = evaluate(CatalogFunction::Reciprocal, &[2.0, 0.0], true);
        assert!(matches!(result, Err(CliError::Evaluation(_))));
    }

    #[test]
    fn test_render_table_has_header_and_rows() {
        let rows = evaluate(CatalogFunction::Sin, &[0.0], false).unwrap();
        let table = render_table(CatalogFunction::Sin, &rows);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "f(x) = sin(x)");
        assert!(lines[2].contains("1.000000000000"));
    }

    #[test]
    fn test_json_rows_serialise() {
        let rows = evaluate(CatalogFunction::Square, &[2.0], false).unwrap();
        let json = serde_json::to_string(&rows).unwrap();
        assert_eq!(json, r#"[{"x":2.0,"value":4.0,"derivative":4.0}]"#);
    }
}
