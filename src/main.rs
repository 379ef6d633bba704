//! Compound projection CLI
//!
//! Command-line front end for projections, reverse solves and scenario comparison

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use compound_projection::{
    export, params, record::SavedCalculation, solve_principal, solve_rate, summarize,
    ParameterInput, PeriodOption, ProjectionConfig, ProjectionEngine, Scenario, ScenarioRunner,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "compound", version, about = "Compound interest projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Project an account value over time
    Project(ProjectArgs),
    /// Per-period rate needed to grow a principal into a target
    SolveRate {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = params::DEFAULT_TOTAL_DAYS)]
        days: u32,
        #[arg(long, default_value_t = params::DEFAULT_PERIOD_DAYS)]
        period_days: u32,
    },
    /// Principal needed to reach a target at a per-period rate
    SolvePrincipal {
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        target: f64,
        #[arg(long, default_value_t = params::DEFAULT_TOTAL_DAYS)]
        days: u32,
        #[arg(long, default_value_t = params::DEFAULT_PERIOD_DAYS)]
        period_days: u32,
    },
    /// Compare scenarios under one shared period length
    Compare {
        /// CSV file with label,principal,rate,days[,color]
        #[arg(long)]
        file: Option<PathBuf>,
        /// Inline scenario as label:principal:rate:days (repeatable)
        #[arg(long = "scenario")]
        scenarios: Vec<String>,
        #[arg(long, default_value_t = params::DEFAULT_PERIOD_DAYS)]
        period_days: u32,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        json: bool,
    },
    /// Print a saved calculation
    Show {
        path: PathBuf,
    },
}

#[derive(Args, Debug)]
struct ProjectArgs {
    #[arg(long, default_value_t = params::DEFAULT_PRINCIPAL)]
    principal: f64,
    /// Rate in percent, applied once per period unless --annualized
    #[arg(long, default_value_t = params::DEFAULT_RATE_PERCENT)]
    rate: f64,
    #[arg(long, default_value_t = params::DEFAULT_TOTAL_DAYS as f64)]
    days: f64,
    #[arg(long, default_value_t = params::DEFAULT_PERIOD_DAYS as f64)]
    period_days: f64,
    #[arg(long, default_value_t = 0.0)]
    contribution: f64,
    #[arg(long)]
    target: Option<f64>,
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,
    #[arg(long, default_value = params::DEFAULT_CURRENCY)]
    currency: String,
    /// Treat --rate as a nominal annual rate
    #[arg(long)]
    annualized: bool,
    /// Write the series as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Save inputs and result as JSON
    #[arg(long)]
    save: Option<PathBuf>,
    /// Print the summary as JSON instead of a table
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Project(args) => run_project(args),
        Command::SolveRate { principal, target, days, period_days } => {
            let rate = solve_rate(principal, target, days, period_days)?;
            println!("Required rate: {:.4}% per period", rate);
            Ok(())
        }
        Command::SolvePrincipal { rate, target, days, period_days } => {
            let principal = solve_principal(rate, target, days, period_days)?;
            println!("Required principal: {:.2}", principal);
            Ok(())
        }
        Command::Compare { file, scenarios, period_days, target, json } => {
            run_compare(file, &scenarios, period_days, target, json)
        }
        Command::Show { path } => {
            let Some(saved) = SavedCalculation::load(&path)
                .with_context(|| format!("reading {}", path.display()))?
            else {
                bail!("no saved calculation at {}", path.display());
            };
            print_series(&saved.currency, &saved.projection());
            println!("\nFinal Amount: {} {:.2}", saved.currency, saved.final_amount);
            Ok(())
        }
    }
}

fn run_project(args: ProjectArgs) -> Result<()> {
    let input = ParameterInput {
        principal: Some(args.principal),
        annual_rate_percent: Some(args.rate),
        total_days: Some(args.days),
        period_days: Some(args.period_days),
        contribution_per_period: Some(args.contribution),
        target_amount: args.target,
        inflation_rate_percent: Some(args.inflation),
    };
    let params = input.validate()?;

    let config = if args.annualized {
        ProjectionConfig::annualized()
    } else {
        ProjectionConfig::default()
    };
    let projection = ProjectionEngine::new(config).project(&params)?;
    let summary = summarize(&params, &projection);

    if let Some(path) = &args.csv {
        export::write_csv_file(path, &projection)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("Series written to: {}", path.display());
    }
    if let Some(path) = &args.save {
        SavedCalculation::new(&params, &projection, &args.currency)
            .save(path)
            .with_context(|| format!("saving {}", path.display()))?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let cadence = PeriodOption::from_days(params.period_days)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| format!("every {} days", params.period_days));
    println!("Projection: {} periods ({})", projection.steps(), cadence);
    print_series(&args.currency, &projection);

    let c = &args.currency;
    println!("\nSummary:");
    println!("  Final Amount:      {} {:.2}", c, summary.final_amount);
    println!("  Total Contributed: {} {:.2}", c, summary.total_contributed);
    println!("  Interest Earned:   {} {:.2}", c, summary.interest_earned);
    if let Some(stats) = projection.stats() {
        println!("  Max / Min / Avg:   {:.2} / {:.2} / {:.2}", stats.max, stats.min, stats.average);
    }
    match (params.target_amount, summary.target_hit_day) {
        (Some(_), Some(day)) => println!("  Target reached:    day {}", day),
        (Some(_), None) => println!("  Target reached:    not reached"),
        (None, _) => {}
    }
    match summary.doubling_days {
        Some(days) => println!("  Doubling (Rule 72): ~{} days", days),
        None => println!("  Doubling (Rule 72): n/a"),
    }
    if params.inflation_rate_percent != 0.0 {
        println!("  Inflation-adjusted: {} {:.2}", c, summary.inflation_adjusted_amount);
    }

    Ok(())
}

fn run_compare(
    file: Option<PathBuf>,
    inline: &[String],
    period_days: u32,
    target: Option<f64>,
    json: bool,
) -> Result<()> {
    let mut scenarios = match &file {
        Some(path) => export::load_scenarios_file(path)
            .with_context(|| format!("loading scenarios from {}", path.display()))?,
        None => Vec::new(),
    };
    for raw in inline {
        scenarios.push(parse_scenario(raw)?);
    }
    if scenarios.is_empty() {
        bail!("no scenarios given (use --file or --scenario)");
    }

    let results = ScenarioRunner::new(period_days)?
        .with_target(target)
        .compare(&scenarios)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("{:<16} {:>14} {:>14} {:>12}", "Scenario", "Final", "Interest", "Target day");
    println!("{}", "-".repeat(60));
    for r in &results {
        let hit = r
            .summary
            .target_hit_day
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<16} {:>14.2} {:>14.2} {:>12}",
            r.scenario.label, r.summary.final_amount, r.summary.interest_earned, hit
        );
    }
    Ok(())
}

fn parse_scenario(raw: &str) -> Result<Scenario> {
    let parts: Vec<&str> = raw.split(':').collect();
    if parts.len() != 4 {
        bail!("scenario '{}' must be label:principal:rate:days", raw);
    }
    let principal: f64 = parts[1].parse().with_context(|| format!("principal in '{}'", raw))?;
    let rate: f64 = parts[2].parse().with_context(|| format!("rate in '{}'", raw))?;
    let days: u32 = parts[3].parse().with_context(|| format!("days in '{}'", raw))?;
    Ok(Scenario::new(parts[0], principal, rate, days))
}

fn print_series(currency: &str, projection: &compound_projection::Projection) {
    println!("{:>6} {:>6} {:>16}", "Period", "Day", "Amount");
    println!("{}", "-".repeat(30));
    for point in projection {
        println!(
            "{:>6} {:>6} {:>16}",
            point.period_index,
            point.day_offset,
            format!("{} {:.2}", currency, point.amount)
        );
    }
}
