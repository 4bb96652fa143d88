//! Evaluate an expression from the command line.
//!
//! ```bash
//! cargo run --example query -- "( p ∧ q ) → r" --sorted --dot
//! ```

use clap::Parser;

use ttable_rs::truth_table;

#[derive(Debug, Parser)]
#[command(about = "Print the truth table of a propositional expression")]
struct Args {
    /// The expression, e.g. "( p ∧ q ) → r" or "( p & q ) > r".
    expression: String,

    /// Sort rows ascending over the variable columns.
    #[arg(long)]
    sorted: bool,

    /// Print the evaluation plan before the table.
    #[arg(long)]
    plan: bool,

    /// Print the parse tree in DOT format instead of normal forms.
    #[arg(long)]
    dot: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Args::parse();

    let plan = truth_table(&args.expression)?;

    if args.plan {
        println!("{}", plan);
    }

    let table = if args.sorted {
        plan.render_table_sorted()
    } else {
        plan.render_table()
    };
    println!("{}", table);

    if args.dot {
        println!("{}", plan.to_dot()?);
    } else {
        println!("PDNF = {}", plan.pdnf());
        println!("PCNF = {}", plan.pcnf());
    }

    Ok(())
}
