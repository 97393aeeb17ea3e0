//! Small helpers shared across CLI tests.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use super::{Cli, CliError, Command, SolveCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_maze_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

/// `solve` options with defaults matching the CLI flags.
pub(super) fn solve_command(path: &Path) -> SolveCommand {
    SolveCommand {
        path: path.to_path_buf(),
        fork_after: 0,
        threads: Some(2),
        name: None,
        render: false,
        trace_actors: false,
    }
}

pub(super) fn solve_cli(command: SolveCommand) -> Cli {
    Cli {
        command: Command::Solve(command),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
