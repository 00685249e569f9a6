use clap::Parser;
use color_eyre::Result;
use truth_table::{parse, EvalConfig, TruthTable};

#[derive(Parser)]
#[command(author, version, about = "Print the truth table of a propositional expression")]
struct Cli {
    /// Expression, e.g. "p and not (q and s)"
    expression: String,

    /// Maximum number of distinct variables
    #[arg(long, value_name = "INT", default_value_t = EvalConfig::DEFAULT_MAX_VARIABLES)]
    max_vars: usize,

    /// Do not limit the number of variables
    #[arg(long, conflicts_with = "max_vars")]
    unbounded: bool,

    /// Only print rows where the expression is true
    #[arg(long)]
    only_true: bool,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    let config = if cli.unbounded {
        EvalConfig::unbounded()
    } else {
        EvalConfig::default().with_max_variables(cli.max_vars)
    };

    let parsed = parse(&cli.expression)?;
    println!(
        "expr = {} (size {}, depth {})",
        parsed.expr(),
        parsed.expr().size(),
        parsed.expr().depth()
    );
    println!("rows = {}", parsed.row_count());

    let time_eval = std::time::Instant::now();
    let table = TruthTable::evaluate_with(&parsed, &config)?;
    let time_eval = time_eval.elapsed();

    if cli.only_true {
        println!("{}", table.variables().join(" "));
        for row in table.satisfying() {
            println!("{}", row.assignment);
        }
    } else {
        print!("{}", table);
    }

    println!(
        "{} of {} rows satisfy the expression ({:.3} s)",
        table.sat_count(),
        table.len(),
        time_eval.as_secs_f64()
    );
    if table.is_tautology() {
        println!("The expression is a tautology");
    } else if table.is_contradiction() {
        println!("The expression is a contradiction");
    }

    Ok(())
}
