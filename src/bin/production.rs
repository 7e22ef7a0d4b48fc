use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use production_planner::config::ScenarioFile;
use production_planner::input::Prompter;
use production_planner::logging::setup_tracing;
use production_planner::report::{budget_hints, render_report};
use production_planner::scip::{cross_check, solve_with_scip};
use production_planner::{ProductMix, ResourceBudget, find_optimal_combinations, plot};
use tracing::info;

// Usage:
//   production                      interactive session
//   production plan.yaml            run a scenario file
//   production --cross-check        also re-solve with SCIP
//   production --plot region.png    also draw the feasible region

#[derive(Debug, Default)]
struct Options {
    scenario: Option<PathBuf>,
    plot: Option<PathBuf>,
    cross_check: bool,
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--cross-check" => options.cross_check = true,
            "--plot" => {
                let Some(path) = iter.next() else {
                    anyhow::bail!("--plot needs a file name");
                };
                options.plot = Some(PathBuf::from(path));
            }
            flag if flag.starts_with("--") => anyhow::bail!("Unknown option: {}", flag),
            path => options.scenario = Some(PathBuf::from(path)),
        }
    }
    Ok(options)
}

fn main() -> Result<()> {
    setup_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut options = parse_args(&args)?;

    let plan = match options.scenario.take() {
        Some(path) => {
            let scenario = ScenarioFile::load(&path)?;
            options.cross_check |= scenario.cross_check;
            if options.plot.is_none() {
                options.plot = scenario.plot.clone();
            }
            let budget = scenario.budget()?;
            if budget.is_empty() {
                None
            } else {
                write_hints(&mut io::stdout(), &budget)?;
                Some(scenario.to_plan()?)
            }
        }
        None => interactive()?,
    };

    let Some((mix, budget)) = plan else {
        println!("\nNotice: with no resources at all, production is impossible.");
        println!("Optimal revenue: 0.");
        return Ok(());
    };

    let result = find_optimal_combinations(&mix, &budget);
    info!(best_revenue = result.best_revenue, optimal = result.combinations.len(), "plan computed");
    print!("{}", render_report(&mix, &result, &budget));

    if options.cross_check {
        let solution = solve_with_scip(&mix, &budget)?;
        if cross_check(&result, &solution) {
            println!("SCIP agrees: revenue {} at {:?}", solution.revenue, solution.quantities);
        } else {
            println!(
                "SCIP disagrees: revenue {} at {:?}",
                solution.revenue, solution.quantities
            );
        }
    }

    if let Some(path) = &options.plot {
        plot::render_feasible_region(&mix, &budget, &result, path)?;
        println!("Feasible region saved as: {}", path.display());
    }

    Ok(())
}

/// Prints guidance for single-resource budgets, then a separator.
fn write_hints(out: &mut impl Write, budget: &ResourceBudget) -> io::Result<()> {
    if let Some(hints) = budget_hints(budget) {
        writeln!(out, "{hints}")?;
        writeln!(out, "Output labels are not renamed.")?;
    }
    writeln!(out, "{}", "-".repeat(56))
}

/// Runs the prompts. `None` means the budget was empty and nothing can be planned.
fn interactive() -> Result<Option<(ProductMix, ResourceBudget)>> {
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    writeln!(prompter.writer(), "PRODUCTION OPTIMIZATION PROGRAM")?;
    writeln!(prompter.writer(), "{}\n", "-".repeat(40))?;

    let count = prompter.prompt_product_count()?;
    let budget = prompter.prompt_budget()?;
    if budget.is_empty() {
        return Ok(None);
    }

    write_hints(prompter.writer(), &budget)?;

    let products = (1..=count)
        .map(|index| prompter.prompt_product(&budget, index))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some((ProductMix::try_from(products)?, budget)))
}
