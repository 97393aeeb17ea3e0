//! Unit tests for the CLI commands.

use super::commands::{derive_maze_name, run_solve};
use super::test_helpers::{
    create_maze_file, run_cli_expecting_error, solve_cli, solve_command, temp_dir,
};
use super::{Cli, CliError, Command, ExecutionSummary, render_summary, run_cli};

use std::path::Path;

use amaze_core::{MazePath, NodeId, SolverError, SolverErrorCode};
use amaze_providers_grid::GridMazeError;
use amaze_test_support::tracing::RecordingLayer;
use clap::Parser;
use rstest::rstest;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const BEND: &str = "S.#\n#.#\n#.G\n";
const WALLED: &str = "S.#\n###\n#.G\n";

#[rstest]
#[case::override_name("/tmp/level.txt", Some("override"), "override")]
#[case::stem_with_extension("/tmp/level.txt", None, "level")]
#[case::stem_without_extension("/tmp/level", None, "level")]
#[case::missing_stem("", None, "maze")]
fn derive_maze_name_selects_expected_name(
    #[case] raw_path: &str,
    #[case] override_name: Option<&'static str>,
    #[case] expected: &str,
) {
    assert_eq!(derive_maze_name(Path::new(raw_path), override_name), expected);
}

#[rstest]
#[case::sequential(0)]
#[case::eager_forks(1)]
#[case::late_forks(8)]
fn solve_finds_the_bend(#[case] fork_after: i64) -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let mut command = solve_command(&path);
    command.fork_after = fork_after;
    let summary = run_cli(solve_cli(command))?;
    assert_eq!(summary.maze, "bend");
    assert_eq!(summary.start, NodeId::new(0));
    let nodes: Vec<usize> = summary
        .path
        .as_ref()
        .map(|path| path.nodes().iter().map(|node| node.get()).collect())
        .unwrap_or_default();
    assert_eq!(nodes, [0, 1, 4, 7, 8]);
    assert!(summary.rendered.is_none());
    Ok(())
}

#[rstest]
fn solve_reports_missing_path() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "walled.txt", WALLED)?;
    let summary = run_cli(solve_cli(solve_command(&path)))?;
    assert!(summary.path.is_none());
    assert_eq!(summary.visited, 2);
    Ok(())
}

#[rstest]
fn solve_renders_the_path_on_request() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let mut command = solve_command(&path);
    command.render = true;
    command.trace_actors = true;
    command.name = Some("custom".into());
    let summary = run_cli(solve_cli(command))?;
    assert_eq!(summary.maze, "custom");
    assert_eq!(summary.rendered.as_deref(), Some("S*#\n#*#\n#*G\n"));
    Ok(())
}

#[rstest]
fn solve_rejects_negative_fork_after() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let mut command = solve_command(&path);
    command.fork_after = -2;
    let err = run_cli_expecting_error(solve_cli(command), "negative fork_after must fail");
    assert!(matches!(
        err,
        CliError::Core(SolverError::InvalidForkAfter { got: -2 })
    ));
    Ok(())
}

#[rstest]
fn solve_rejects_zero_threads() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let mut command = solve_command(&path);
    command.threads = Some(0);
    let err = run_cli_expecting_error(solve_cli(command), "zero threads must fail");
    match err {
        CliError::Core(core) => assert_eq!(core.code(), SolverErrorCode::InvalidThreadCount),
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[rstest]
#[case::empty("", "empty grid must fail")]
#[case::no_start("..\n.G\n", "grid without start must fail")]
fn solve_rejects_malformed_grids(#[case] contents: &str, #[case] message: &str) -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bad.txt", contents)?;
    let err = run_cli_expecting_error(solve_cli(solve_command(&path)), message);
    assert!(matches!(
        err,
        CliError::Grid(GridMazeError::Empty | GridMazeError::MissingStart)
    ));
    Ok(())
}

#[rstest]
fn solve_reports_missing_files() {
    let dir = temp_dir();
    let missing = dir.path().join("missing.txt");
    let err = run_cli_expecting_error(solve_cli(solve_command(&missing)), "missing file");
    assert!(matches!(err, CliError::Io { path, .. } if path == missing));
}

#[rstest]
#[case::defaults(&["amaze", "solve", "maze.txt"], 0, None)]
#[case::fork_and_threads(
    &["amaze", "solve", "maze.txt", "--fork-after", "3", "--threads", "4"],
    3,
    Some(4),
)]
#[case::negative(&["amaze", "solve", "maze.txt", "--fork-after", "-1"], -1, None)]
fn cli_parses_solve_flags(
    #[case] args: &[&str],
    #[case] fork_after: i64,
    #[case] threads: Option<usize>,
) {
    let cli = Cli::try_parse_from(args).expect("arguments must parse");
    let Command::Solve(command) = cli.command;
    assert_eq!(command.path, Path::new("maze.txt"));
    assert_eq!(command.fork_after, fork_after);
    assert_eq!(command.threads, threads);
    assert!(!command.render);
}

#[rstest]
#[case::not_a_number(&["amaze", "solve", "maze.txt", "--fork-after", "often"])]
#[case::negative_threads(&["amaze", "solve", "maze.txt", "--threads", "-2"])]
#[case::missing_path(&["amaze", "solve"])]
fn cli_rejects_malformed_flags(#[case] args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}

#[rstest]
fn render_summary_lists_path_nodes() -> TestResult {
    let path = MazePath::try_from_nodes(vec![NodeId::new(3), NodeId::new(4)])?;
    let summary = ExecutionSummary {
        maze: "demo".into(),
        start: NodeId::new(3),
        path: Some(path),
        visited: 2,
        tasks: 1,
        rendered: Some("SG\n".into()),
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(
        String::from_utf8(buffer)?,
        "maze: demo\nstart: 3\npath length: 2\n3\n4\n\nSG\n"
    );
    Ok(())
}

#[rstest]
fn render_summary_reports_no_path() -> TestResult {
    let summary = ExecutionSummary {
        maze: "walled".into(),
        start: NodeId::new(0),
        path: None,
        visited: 2,
        tasks: 1,
        rendered: None,
    };
    let mut buffer = Vec::new();
    render_summary(&summary, &mut buffer)?;
    assert_eq!(String::from_utf8(buffer)?, "maze: walled\nstart: 0\nno path\n");
    Ok(())
}

#[rstest]
fn solve_records_spans_and_summary_event() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    let mut command = solve_command(&path);
    command.fork_after = 2;
    let summary = tracing::subscriber::with_default(subscriber, || run_solve(command))?;
    assert!(summary.path.is_some());

    let solve = layer
        .span_named("cli.solve")
        .expect("cli.solve span must exist");
    assert_eq!(solve.field("fork_after"), Some("2"));
    assert_eq!(solve.field("threads"), Some("2"));
    assert_eq!(solve.field("override_name"), Some("<derived>"));
    assert!(solve.field("path").is_some_and(|value| value.ends_with("bend.txt")));

    let open = layer
        .span_named("cli.open_maze")
        .expect("cli.open_maze span must exist");
    assert!(open.field("path").is_some_and(|value| value.ends_with("bend.txt")));
    assert!(layer.span_named("core.search").is_some());
    assert!(layer.has_event(Level::INFO, "command completed"));
    Ok(())
}

#[rstest]
fn run_cli_records_command_name() -> TestResult {
    let dir = temp_dir();
    let path = create_maze_file(&dir, "bend.txt", BEND)?;
    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());

    tracing::subscriber::with_default(subscriber, || run_cli(solve_cli(solve_command(&path))))?;

    let run = layer.span_named("cli.run").expect("cli.run span must exist");
    assert_eq!(run.field("command"), Some("solve"));
    Ok(())
}
