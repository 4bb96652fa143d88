use ttable_rs::{are_equivalent, truth_table};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Debug,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let time_total = std::time::Instant::now();

    let expression = "( p → q ) ∧ ( q → r )";
    println!("expression = {}", expression);

    let plan = truth_table(expression)?;
    println!("plan = {:?}", plan);
    println!();
    println!("{}", plan);
    println!("{}", plan.render_table_sorted());

    println!("PDNF = {}", plan.pdnf());
    println!("PCNF = {}", plan.pcnf());
    println!("models = {}", plan.count_models());
    println!("tautology = {}", plan.is_tautology());
    if let Some(model) = plan.satisfying_assignment() {
        println!("model = {:?}", model);
    }

    println!();
    let other = "( p → r ) ∨ ¬p";
    println!(
        "equivalent to {:?} = {}",
        other,
        are_equivalent(expression, other)?
    );

    let time_total = time_total.elapsed();
    println!("Done in {:.3} s", time_total.as_secs_f64());

    Ok(())
}
