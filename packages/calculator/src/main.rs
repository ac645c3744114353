use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use proposition::{build_truth_table, parser::parse_proposition, rules::logical_rules};

/// Propositional truth table calculator over p, q, r and ¬ ∧ ∨ → ↔.
#[derive(Parser)]
struct Cli {
    /// The proposition to analyze, e.g. "(p∨q)∧r".
    expression: Option<String>,

    /// Also print the parse tree.
    #[arg(long)]
    tree: bool,

    /// List the semantic rules of the five connectives and exit.
    #[arg(long)]
    rules: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.rules {
        print_rules();
        return ExitCode::SUCCESS;
    }

    let Some(expression) = cli.expression else {
        eprintln!("{}", "No proposition given, nothing to do.".yellow());
        return ExitCode::FAILURE;
    };

    let table = match build_truth_table(&expression) {
        Ok(table) => table,
        Err(error) => {
            eprintln!("{} {error}", "Invalid proposition:".red());
            return ExitCode::FAILURE;
        }
    };

    if cli.tree {
        if let Ok(proposition) = parse_proposition(&expression) {
            println!("{}", proposition.get_tree());
        }
    }

    print!("{table}");

    ExitCode::SUCCESS
}

fn print_rules() {
    for rule in logical_rules() {
        println!(
            "{} ({})\n  {}",
            rule.name.blue(),
            rule.operator,
            rule.description
        );

        for (operands, result) in &rule.rows {
            let operands = operands
                .iter()
                .map(|value| value.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            println!("  {operands} => {result}");
        }

        println!();
    }
}
