//! Parses a polynomial from the command line and prints its roots.
//!
//! ```text
//! cargo run --example roots -- "x^3 - 6x^2 + 11x - 6"
//! ```

use std::env;
use std::process::ExitCode;

use polycas::{RootOptions, parse_expression, roots};

fn main() -> ExitCode {
    let input = env::args()
        .skip(1)
        .collect::<Vec<_>>()
        .join(" ");
    let input = if input.trim().is_empty() {
        "x^3 - 6x^2 + 11x - 6".to_string()
    } else {
        input
    };

    let expr = match parse_expression(&input) {
        Ok(expr) => expr,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    println!("f = {expr}");
    println!("f' = {}", expr.derivative_inferred(1).unwrap_or_default());

    match roots(&expr, &RootOptions::default()) {
        Ok(report) => {
            for root in &report.roots {
                println!("  {:?}: {}", root.method, root.value);
            }
            println!("leading constant: {}", report.constant);
            if !report.complete {
                println!("deflation stopped before every root was found");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
