use miette::*;

use crate::dsu::Dsu;
use crate::edges::{sorted_edges, Edge};
use crate::error::CircuitError;
use crate::parser::parse_junctions;
use crate::Point;

/// Outcome of wiring pairs until every junction box shares one circuit.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanning {
    /// Connections that joined two separate circuits, in processing order.
    pub accepted: Vec<Edge>,
    /// The connection that closed the final gap.
    pub last: Edge,
    /// Product of the integer x coordinates of `last`'s endpoints, wrapping on overflow.
    pub product: i64,
}

/// Connects the closest pairs until one circuit remains.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn connect_all(points: &[Point]) -> Result<Spanning, CircuitError> {
    if points.len() < 2 {
        return Err(CircuitError::TooFewJunctions {
            junctions: points.len(),
        });
    }

    let mut dsu = Dsu::new(points.len());
    let mut accepted = Vec::with_capacity(points.len() - 1);

    for edge in sorted_edges(points) {
        if !dsu.union(edge.a, edge.b) {
            continue;
        }
        accepted.push(edge);

        if dsu.components() == 1 {
            let x1 = points[edge.a].x as i64;
            let x2 = points[edge.b].x as i64;
            tracing::debug!(a = edge.a, b = edge.b, distance = edge.distance, "circuit closed");
            return Ok(Spanning {
                accepted,
                last: edge,
                product: x1.wrapping_mul(x2),
            });
        }
    }

    Err(CircuitError::Disconnected {
        components: dsu.components(),
    })
}

#[tracing::instrument(skip(input))]
pub fn process(input: &str) -> Result<String> {
    let points = parse_junctions(input)?;
    let spanning = connect_all(&points)?;
    Ok(spanning.product.to_string())
}
