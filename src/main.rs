use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use path_finder::models::{Budget, PointIndex, RouteResult};
use path_finder::{
    logging, Error, JsonSink, LogOptions, LogSink, PathFinder, RenderSink, SvgSink, TspFile,
};

/// Find closed routes over the positions of a TSPLIB file.
///
/// Positions are numbered from 1, as in the file (`Position#1` is node id 1).
#[derive(Parser)]
#[command(name = "path-finder", version)]
struct Cli {
    /// TSPLIB file with a NODE_COORD_SECTION
    #[arg(long, short)]
    input: PathBuf,
    #[command(flatten)]
    log: LogOptions,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every position with its coordinates
    List,
    /// Route from a start position through a chosen set of positions and back
    Set {
        #[arg(long, value_parser = parse_position)]
        start: PointIndex,
        /// Comma separated position numbers to visit
        #[arg(long, value_delimiter = ',', required = true, value_parser = parse_position)]
        points: Vec<PointIndex>,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Route over the positions reachable within a time interval at a travel speed
    Budget {
        #[arg(long, value_parser = parse_position)]
        start: PointIndex,
        #[arg(long, allow_negative_numbers = true)]
        time: f64,
        #[arg(long, allow_negative_numbers = true)]
        speed: f64,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run the budget request from every position and rank the starts
    Sweep {
        #[arg(long, allow_negative_numbers = true)]
        time: f64,
        #[arg(long, allow_negative_numbers = true)]
        speed: f64,
        /// Number of best starts to print
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Args)]
struct OutputArgs {
    /// Write the route as JSON to a file, or `-` for stdout
    #[arg(long)]
    json: Option<String>,
    /// Draw the route into an SVG file
    #[arg(long)]
    svg: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Err(e) = logging::init_logger(&cli.log) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Not enough budget is an answer, not a failure
        Err(e @ Error::InsufficientBudget { .. }) => {
            println!("{e}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if !e.is_recoverable() {
                log::error!("{e}");
            }
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> path_finder::Result<()> {
    let finder = PathFinder::from_provider(&TspFile::new(&cli.input))?;

    match cli.command {
        Command::List => {
            for point in finder.positions() {
                println!(
                    "Position#{} - [lat: {}, long: {}]",
                    point.position_number(),
                    point.latitude,
                    point.longitude
                );
            }
        }
        Command::Set {
            start,
            points,
            output,
        } => {
            let result = finder.find_route_for_set(start, points)?;
            print_result(&result)?;
            write_outputs(&result, &output)?;
        }
        Command::Budget {
            start,
            time,
            speed,
            output,
        } => {
            let budget = Budget::new(time, speed)?;
            println!("Max distance: {}", budget.max_distance());
            let result = finder.find_route_for_budget(start, time, speed)?;
            print_result(&result)?;
            write_outputs(&result, &output)?;
        }
        Command::Sweep { time, speed, top } => {
            let entries = finder.budget_sweep(time, speed)?;
            let mut ranked: Vec<(PointIndex, &RouteResult)> = entries
                .iter()
                .filter_map(|e| e.outcome.as_ref().ok().map(|r| (e.start, r)))
                .collect();
            // Most positions first, then shorter routes
            ranked.sort_by(|a, b| {
                b.1.visited_count.cmp(&a.1.visited_count).then(
                    a.1.total_distance
                        .partial_cmp(&b.1.total_distance)
                        .unwrap_or(std::cmp::Ordering::Equal),
                )
            });

            println!(
                "{} of {} starts can reach at least one position",
                ranked.len(),
                entries.len()
            );
            for (start, result) in ranked.into_iter().take(top) {
                println!(
                    "  Position#{}: {} positions visited, travelled distance {:.4}",
                    start + 1,
                    result.visited_count,
                    result.total_distance
                );
            }
        }
    }

    Ok(())
}

fn print_result(result: &RouteResult) -> path_finder::Result<()> {
    let path: Vec<String> = result
        .route
        .points
        .iter()
        .map(|p| format!("Position#{}", p.position_number()))
        .collect();
    println!("Route: {}", path.join(" -> "));
    println!("Travelled distance: {}", result.total_distance);
    println!("Positions visited: {}", result.visited_count);
    LogSink.render(result)
}

fn write_outputs(result: &RouteResult, output: &OutputArgs) -> path_finder::Result<()> {
    match output.json.as_deref() {
        Some("-") => JsonSink::new(io::stdout().lock()).pretty(true).render(result)?,
        Some(path) => JsonSink::new(io::BufWriter::new(std::fs::File::create(path)?))
            .pretty(true)
            .render(result)?,
        None => {}
    }
    if let Some(path) = &output.svg {
        SvgSink::new(path).render(result)?;
    }
    Ok(())
}

/// `Position#N` numbers on the command line are 1-based
fn parse_position(value: &str) -> Result<PointIndex, String> {
    let number: usize = value
        .trim()
        .parse()
        .map_err(|e| format!("invalid position number {value:?}: {e}"))?;
    number
        .checked_sub(1)
        .ok_or_else(|| "position numbers start at 1".to_string())
}
