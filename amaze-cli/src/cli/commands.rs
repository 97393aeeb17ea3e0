//! Command implementations and argument parsing for the amaze CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use amaze_core::{
    Maze, MazePath, NoProgress, NodeId, SearchReport, SolverBuilder, SolverError, TracingProgress,
};
use amaze_providers_grid::{GridMaze, GridMazeError};
use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(name = "amaze", about = "Solve text mazes with a fork/join depth-first search.")]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Search a grid maze for a path from `S` to a `G` cell.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to a text grid: `#` walls, `.` or space open, `S` start, `G` goals.
    pub path: PathBuf,

    /// Nodes a task processes before forking its frontier; 0 never forks.
    #[arg(long = "fork-after", default_value_t = 0, allow_negative_numbers = true)]
    pub fork_after: i64,

    /// Worker threads in the search pool (defaults to one per CPU).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Override name for the maze (defaults to the file name).
    #[arg(long)]
    pub name: Option<String>,

    /// Print the grid with the path marked by `*`.
    #[arg(long)]
    pub render: bool,

    /// Emit a trace event for every actor movement.
    #[arg(long = "trace-actors")]
    pub trace_actors: bool,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The maze file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The grid text was malformed.
    #[error(transparent)]
    Grid(#[from] GridMazeError),
    /// Configuring or running the solver failed.
    #[error(transparent)]
    Core(#[from] SolverError),
}

/// Outcome of a `solve` command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the solved maze.
    pub maze: String,
    /// Node the search started from.
    pub start: NodeId,
    /// Path found, if any.
    pub path: Option<MazePath>,
    /// Number of nodes the search claimed.
    pub visited: usize,
    /// Number of search tasks that ran.
    pub tasks: usize,
    /// Grid rendering requested with `--render`.
    pub rendered: Option<String>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when loading the maze or searching it fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use amaze_cli::cli::{Cli, Command, SolveCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "S.\n#G\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         path: file.path().to_path_buf(),
///         fork_after: 0,
///         threads: Some(1),
///         name: Some("demo".into()),
///         render: false,
///         trace_actors: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.path.map(|path| path.len()), Some(3));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(
        path = field::Empty,
        fork_after = command.fork_after,
        threads = field::Empty,
        override_name = field::Empty,
    ),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let SolveCommand {
        path,
        fork_after,
        threads,
        name,
        render,
        trace_actors,
    } = command;
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record(
        "override_name",
        field::display(name.as_deref().unwrap_or("<derived>")),
    );

    let mut builder = SolverBuilder::new().with_fork_after(fork_after);
    if let Some(threads) = threads {
        builder = builder.with_threads(threads);
    }
    let solver = builder.build()?;
    span.record("threads", solver.threads());

    let maze_name = derive_maze_name(&path, name.as_deref());
    let maze = GridMaze::try_from_reader(maze_name, open_maze(&path)?)?;
    let start = maze.start();
    let report = if trace_actors {
        solver.search(&maze, start, &TracingProgress::new())?
    } else {
        solver.search(&maze, start, &NoProgress)?
    };

    let summary = summarise(&maze, start, report, render);
    info!(
        maze = summary.maze.as_str(),
        found = summary.path.is_some(),
        visited = summary.visited,
        tasks = summary.tasks,
        "command completed"
    );
    Ok(summary)
}

fn summarise(
    maze: &GridMaze,
    start: NodeId,
    report: SearchReport,
    render: bool,
) -> ExecutionSummary {
    let visited = report.visited().len();
    let tasks = report.tasks();
    let path = report.into_path();
    let rendered = if render {
        path.as_ref().map(|path| maze.render_with_path(path))
    } else {
        None
    };
    ExecutionSummary {
        maze: maze.name().to_owned(),
        start,
        path,
        visited,
        tasks,
        rendered,
    }
}

#[instrument(name = "cli.open_maze", err, fields(path = field::Empty))]
pub(super) fn open_maze(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_maze_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map_or_else(|| "maze".to_owned(), ToOwned::to_owned)
}

/// Renders `summary` to `writer` as plain text.
///
/// Prints the maze name, the start node and either the path length followed
/// by one node per line or `no path`. A requested grid rendering follows.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use amaze_cli::cli::{ExecutionSummary, render_summary};
/// # use amaze_core::{MazePath, NodeId};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = ExecutionSummary {
///     maze: "demo".into(),
///     start: NodeId::new(0),
///     path: Some(MazePath::try_from_nodes(vec![NodeId::new(0), NodeId::new(1)])?),
///     visited: 2,
///     tasks: 1,
///     rendered: None,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "maze: demo\nstart: 0\npath length: 2\n0\n1\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "maze: {}", summary.maze)?;
    writeln!(writer, "start: {}", summary.start)?;
    match &summary.path {
        Some(path) => {
            writeln!(writer, "path length: {}", path.len())?;
            for node in path.nodes() {
                writeln!(writer, "{node}")?;
            }
        }
        None => writeln!(writer, "no path")?,
    }
    if let Some(rendered) = &summary.rendered {
        writeln!(writer)?;
        write!(writer, "{rendered}")?;
    }
    Ok(())
}
