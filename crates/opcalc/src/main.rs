use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use opcalc::{parse_batch, EvalContext, Evaluator, Expression, OperatorTable, Report, DEMO_BATCH};

/// opcalc evaluates `operand operator operand` integer expressions, one
/// result or error per expression.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Read expressions from a file, one per line.
    #[arg(short, long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Evaluate the built-in reference batch.
    #[arg(long)]
    demo: bool,

    /// Print one JSON report per line.
    #[arg(long)]
    json: bool,

    /// Trace evaluation steps to stderr.
    #[arg(long)]
    trace: bool,

    /// Expressions to evaluate; tokens are separated by whitespace.
    ///
    /// Operands may be negative (`"-7 / 2"`). Options must come before the
    /// first expression.
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    expressions: Vec<String>,
}

impl Args {
    /// Whether no input source was given, which selects the prompt.
    fn is_interactive(&self) -> bool {
        self.expressions.is_empty() && self.file.is_none() && !self.demo
    }
}

/// Assemble the batch: arguments first, then the file, then the demo lines.
fn collect_batch(args: &Args) -> Result<Vec<Expression>> {
    let mut batch: Vec<Expression> = args
        .expressions
        .iter()
        .map(|e| Expression::parse(e))
        .collect();
    if let Some(path) = &args.file {
        let src = fs::read_to_string(path)
            .with_context(|| format!("failed to read input file '{}'", path.display()))?;
        batch.extend(parse_batch(&src));
    }
    if args.demo {
        batch.extend(DEMO_BATCH.iter().map(|e| Expression::parse(e)));
    }
    Ok(batch)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let evaluator = Evaluator::new(OperatorTable::standard(), EvalContext::with_trace(args.trace));

    if args.is_interactive() {
        return run_prompt(&evaluator, args.json);
    }
    let batch = collect_batch(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for report in evaluator.evaluate_batch(&batch) {
        print_report(&mut out, &report, args.json)?;
    }
    Ok(())
}

fn run_prompt(evaluator: &Evaluator, json: bool) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut index = 0;
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                let expr = Expression::parse(&line);
                if expr.is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str())?;
                let outcome = evaluator.evaluate(expr.tokens());
                let report = Report::new(index, expr.into_tokens(), outcome);
                print_report(&mut io::stdout().lock(), &report, json)?;
                index += 1;
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn print_report(out: &mut impl Write, report: &Report, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer(&mut *out, report)?;
        writeln!(out)?;
    } else {
        writeln!(out, "{}", report)?;
    }
    Ok(())
}
