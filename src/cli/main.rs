#![warn(clippy::all, clippy::pedantic)]
use std::error::Error;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use assignment::{AssignmentSolver, CostMatrix, DefaultSolver, Pair, SubtourElimination};
use clap::{ArgAction, Parser, ValueEnum};
use itertools::Itertools;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Minimum-cost assignment of rows to columns
    Assign,
    /// Shortest tour through all cities, the matrix holding distances
    Tour,
}

#[derive(Debug, Parser)]
#[command(
    name = "assignment-cli",
    about = "Solves assignment problems and small traveling salesman instances."
)]
struct Args {
    /// Headerless CSV cost matrix. `inf` marks a forbidden pairing.
    input: PathBuf,

    /// Output CSV file. `stdout` if not specified.
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Mode::Assign)]
    mode: Mode,

    /// Maximum number of coverage tests per assignment
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Verbose mode (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// Read a square cost matrix from a CSV file without headers
fn read_cost_matrix_csv(path: &Path) -> Result<CostMatrix<f64>, Box<dyn Error>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_path(path)?;
    let rows: Vec<Vec<f64>> = rdr.deserialize().collect::<Result<_, _>>()?;
    Ok(CostMatrix::new(rows).map_err(|e| e.to_string())?)
}

// Write the assigned cells as `row,col,cost` records
fn write_csv<W: io::Write>(pairs: Vec<Pair<f64>>, writer: W) -> Result<(), Box<dyn Error>> {
    let mut wtr = csv::Writer::from_writer(writer);
    for pair in pairs {
        wtr.serialize(pair)?;
    }
    wtr.flush()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;

    let costs = read_cost_matrix_csv(&args.input)?;
    log::info!("read {}x{} cost matrix", costs.dim(), costs.dim());
    for row in costs.rows() {
        log::trace!("{}", row.iter().join(", "));
    }

    let mut solver = DefaultSolver::new();
    if let Some(limit) = args.max_iterations {
        solver = solver.with_iteration_limit(limit);
    }

    let pairs: Vec<Pair<f64>> = match args.mode {
        Mode::Assign => {
            let solution = solver.solve(&costs).map_err(|e| e.to_string())?;
            solver
                .check(&costs, &solution)
                .map_err(|e| e.to_string())?;
            log::info!(
                "assignment of cost {} after {} iterations",
                solution.cost(),
                solution.iterations()
            );
            solution.pairs(&costs).collect()
        }
        Mode::Tour => {
            let tour = SubtourElimination::new(solver)
                .solve(&costs)
                .map_err(|e| e.to_string())?;
            log::info!(
                "tour {} -> {} of cost {} after {} subproblems",
                tour.cities().map(|c| c + 1).join(" -> "),
                tour.cities().next().map_or(0, |c| c + 1),
                tour.cost(),
                tour.subproblems()
            );
            tour.arcs()
                .iter()
                .map(|&(row, col)| Pair {
                    row,
                    col,
                    cost: costs.get(row, col),
                })
                .collect()
        }
    };

    match &args.output {
        Some(path) => write_csv(pairs, File::create(path)?)?,
        None => write_csv(pairs, io::stdout().lock())?,
    }

    Ok(())
}
