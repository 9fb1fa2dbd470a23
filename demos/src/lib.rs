//! Pathfinding visualizer shared by the `pathviz` binary.
//!
//! Demonstrates: grid editing with the mouse, BFS / DFS / A* animated step
//! by step, cancelling a running search from the keyboard, random walls,
//! and a headless mode that prints the searched grid as text.

use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flexi_logger::{FileSpec, Logger, LoggerHandle};
use rand::SeedableRng;
use rand::rngs::StdRng;

use pathviz_core::config::{DEFAULT_PIXEL_WIDTH, DEFAULT_ROWS};
use pathviz_core::{Cell, GridConfig, GridGraph, NodeState, parse_map, render_map};
use pathviz_crossterm::{Animator, Input, KeyboardCancel, TerminalView};
use pathviz_search::{Algorithm, Board, Never, RunSummary, Silent};

const HELP: &str = "\
left click: start, end, walls | right click: erase | space: run | \
tab/1-3: algorithm | w: walls | r: restart | c: clear | q: quit";

/// Command-line options.
#[derive(Debug, Clone, Parser)]
#[command(name = "pathviz", version, about = "Visualize BFS, DFS and A* on a grid")]
pub struct Args {
    /// Cells per side.
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: i32,

    /// Side length of the drawing area in pixels.
    #[arg(long, default_value_t = DEFAULT_PIXEL_WIDTH)]
    pub pixel_width: i32,

    /// Search strategy: astar, bfs or dfs.
    #[arg(short, long, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    /// Load the layout from a text map instead of an empty grid.
    #[arg(short, long)]
    pub map: Option<PathBuf>,

    /// Start cell as `row,col`.
    #[arg(long, value_parser = parse_cell)]
    pub start: Option<Cell>,

    /// End cell as `row,col`.
    #[arg(long, value_parser = parse_cell)]
    pub end: Option<Cell>,

    /// Fraction of free cells to block at random.
    #[arg(long, default_value_t = 0.0)]
    pub walls: f64,

    /// Seed for random walls.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each animation frame, in milliseconds.
    #[arg(long, default_value_t = 33)]
    pub delay_ms: u64,

    /// Run once and print the searched grid instead of opening the
    /// terminal UI.
    #[arg(long)]
    pub headless: bool,

    /// Log level or filter spec (overridden by RUST_LOG).
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Directory for log files of interactive sessions.
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,
}

impl Args {
    /// Grid dimensions requested on the command line.
    pub fn grid_config(&self) -> GridConfig {
        GridConfig::new(self.rows, self.pixel_width)
    }

    fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

/// Parse a `row,col` pair.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col, got {s:?}"))?;
    let row = row.trim().parse::<i32>().map_err(|e| format!("row: {e}"))?;
    let col = col.trim().parse::<i32>().map_err(|e| format!("col: {e}"))?;
    Ok(Cell::new(row, col))
}

/// Start the logger. Headless runs log to stderr; interactive sessions log
/// to a file because the terminal belongs to the UI.
pub fn init_logging(args: &Args) -> Result<LoggerHandle, Box<dyn Error>> {
    let logger = Logger::try_with_env_or_str(&args.log_level)?;
    let handle = if args.headless {
        logger.start()?
    } else {
        logger
            .log_to_file(
                FileSpec::default()
                    .directory(&args.log_dir)
                    .basename("pathviz"),
            )
            .append()
            .start()?
    };
    Ok(handle)
}

/// Build the initial board from the options.
pub fn build_board(args: &Args, rng: &mut StdRng) -> Result<Board, Box<dyn Error>> {
    let mut grid = match &args.map {
        Some(path) => {
            let text = std::fs::read_to_string(path)?;
            let cell_size = args.grid_config().cell_size()?;
            log::info!("loading map {}", path.display());
            parse_map(&text, cell_size)?
        }
        None => args.grid_config().build()?,
    };
    place(&mut grid, args.start, NodeState::Start)?;
    place(&mut grid, args.end, NodeState::End)?;

    let mut board = Board::from_grid(grid);
    board.select(args.algorithm);
    if args.walls > 0.0 {
        board.scatter_walls(rng, args.walls);
    }
    Ok(board)
}

fn place(grid: &mut GridGraph, cell: Option<Cell>, status: NodeState) -> Result<(), String> {
    let Some(cell) = cell else {
        return Ok(());
    };
    if !grid.contains(cell) {
        return Err(format!("{status} cell {cell} is outside the {0}x{0} grid", grid.rows()));
    }
    grid.set_status(cell, status);
    Ok(())
}

/// One-line description of a finished run.
pub fn describe(summary: &RunSummary) -> String {
    let outcome = if summary.found {
        format!("path of {} steps", summary.path.len())
    } else if summary.cancelled {
        "cancelled".to_string()
    } else {
        "no path".to_string()
    };
    format!(
        "{}: {outcome}, {} nodes expanded",
        summary.algorithm.label(),
        summary.expanded
    )
}

/// Run the selected search once without callbacks and return the final
/// grid as a text map followed by a summary line.
pub fn headless(board: &mut Board) -> Result<String, Box<dyn Error>> {
    let summary = describe(board.run(&mut Silent, &mut Never)?);
    let mut out = render_map(board.grid());
    out.push_str(&summary);
    out.push('\n');
    Ok(out)
}

/// Run the terminal UI until the user quits.
pub fn interactive(
    board: &mut Board,
    args: &Args,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let mut view = TerminalView::new(board.grid().rows());
    view.init()?;
    let result = event_loop(board, &mut view, args, rng);
    view.close();
    result
}

fn event_loop(
    board: &mut Board,
    view: &mut TerminalView,
    args: &Args,
    rng: &mut StdRng,
) -> Result<(), Box<dyn Error>> {
    let density = if args.walls > 0.0 { args.walls } else { 0.3 };
    let mut message = HELP.to_string();

    loop {
        view.draw(board.grid())?;
        view.draw_status(board.algorithm(), &message)?;

        let Some(input) = view.poll_input(Duration::from_millis(100))? else {
            continue;
        };
        match input {
            Input::Paint(cell) => {
                board.paint(cell);
            }
            Input::Erase(cell) => board.erase(cell),
            Input::Select(a) => {
                board.select(a);
            }
            Input::NextAlgorithm => {
                board.select(board.algorithm().next());
            }
            Input::Clear => {
                board.clear();
                message = HELP.to_string();
            }
            Input::Restart => {
                board.restart();
                message = HELP.to_string();
            }
            Input::Scatter => {
                let placed = board.scatter_walls(rng, density);
                message = format!("{placed} walls placed");
            }
            Input::Redraw => view.invalidate(),
            Input::Quit => break,
            Input::Run => {
                view.draw_status(board.algorithm(), "running... (esc to cancel)")?;
                let mut animator = Animator::new(view, args.delay());
                let mut cancel = KeyboardCancel::default();
                message = match board.run(&mut animator, &mut cancel) {
                    Ok(summary) => describe(summary),
                    Err(e) => e.to_string(),
                };
                animator.finish()?;
            }
        }
    }
    Ok(())
}

/// Entry point of the `pathviz` binary.
pub fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let _logger = init_logging(&args)?;
    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("starting with {:?}, seed {seed}", args.grid_config());
    let mut rng = StdRng::seed_from_u64(seed);
    let mut board = build_board(&args, &mut rng)?;

    if args.headless {
        print!("{}", headless(&mut board)?);
        return Ok(());
    }
    interactive(&mut board, &args, &mut rng)
}
