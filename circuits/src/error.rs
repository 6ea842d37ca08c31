use miette::{Diagnostic, SourceSpan};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum CircuitError {
    #[error("Malformed junction box record")]
    #[diagnostic(
        code(circuits::parse),
        help("every line must hold three comma separated coordinates, e.g. `162,817,812`")
    )]
    Parse {
        #[source_code]
        src: String,
        #[label("{reason}")]
        span: SourceSpan,
        reason: String,
    },

    #[error("Cannot span {junctions} junction box(es): at least two are required")]
    #[diagnostic(code(circuits::too_few_junctions))]
    TooFewJunctions { junctions: usize },

    #[error("Ran out of connections with {components} circuits still apart")]
    #[diagnostic(code(circuits::disconnected))]
    Disconnected { components: usize },

    #[error("Failed to access {}", .path.display())]
    #[diagnostic(code(circuits::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode scene")]
    #[diagnostic(code(circuits::scene))]
    Scene(#[from] serde_json::Error),
}
