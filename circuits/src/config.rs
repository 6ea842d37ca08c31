use clap::Parser;
use std::path::{Path, PathBuf};

use crate::error::CircuitError;
use crate::part1::DEFAULT_CONNECTIONS;

/// Command line options shared by the `part1` and `part2` binaries.
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about = "Wire junction boxes into circuits")]
pub struct Args {
    /// File with one `x,y,z` junction box per line
    #[arg(short, long, default_value = "input.txt")]
    pub input: PathBuf,

    /// Number of closest pairs to attempt (part 1 only)
    #[arg(short, long, env = "CIRCUITS_CONNECTIONS", default_value_t = DEFAULT_CONNECTIONS)]
    pub connections: usize,

    /// Write the accepted connections as a JSON scene (`-` for stdout)
    #[arg(short, long)]
    pub scene: Option<PathBuf>,
}

impl Args {
    pub fn read_input(&self) -> Result<String, CircuitError> {
        read_to_string(&self.input)
    }
}

fn read_to_string(path: &Path) -> Result<String, CircuitError> {
    std::fs::read_to_string(path).map_err(|source| CircuitError::Io {
        path: path.to_path_buf(),
        source,
    })
}
