use itertools::Itertools;
use miette::*;

use crate::dsu::Dsu;
use crate::edges::{sorted_edges, Edge};
use crate::parser::parse_junctions;
use crate::Point;

/// How many of the closest pairs get wired when nothing else is configured.
pub const DEFAULT_CONNECTIONS: usize = 1000;

/// Outcome of wiring a bounded number of the closest pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Circuits {
    /// Connections that joined two separate circuits, in processing order.
    pub accepted: Vec<Edge>,
    /// Circuit sizes, largest first.
    pub sizes: Vec<usize>,
    /// Product of the three largest circuit sizes.
    pub product: usize,
}

/// Attempts the `connections` shortest pairs and reports the resulting circuits.
///
/// `connections` is clamped to the number of available pairs.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn connect_closest(points: &[Point], connections: usize) -> Circuits {
    let edges = sorted_edges(points);
    let mut dsu = Dsu::new(points.len());

    let limit = connections.min(edges.len());
    let accepted = edges
        .into_iter()
        .take(limit)
        .filter(|edge| dsu.union(edge.a, edge.b))
        .collect::<Vec<_>>();

    let sizes = dsu
        .sizes()
        .into_iter()
        .sorted_unstable_by(|a, b| b.cmp(a))
        .collect::<Vec<_>>();

    // Missing circuits count as 1
    let product = sizes.iter().take(3).product();

    tracing::debug!(
        attempted = limit,
        accepted = accepted.len(),
        circuits = sizes.len(),
        "wired closest pairs"
    );

    Circuits {
        accepted,
        sizes,
        product,
    }
}

#[tracing::instrument(skip(input))]
pub fn process_with(input: &str, connections: usize) -> Result<String> {
    let points = parse_junctions(input)?;
    let circuits = connect_closest(&points, connections);
    Ok(circuits.product.to_string())
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    process_with(input, DEFAULT_CONNECTIONS)
}
