use rayon::prelude::*;

use crate::Point;

/// Candidate connection between two junction boxes, by input index (`a < b`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
}

/// Generates every unordered pair `(i, j)` with `i < j` and its Euclidean distance.
///
/// Pairs come out ordered by `i`, then `j`. Distances are computed in parallel,
/// but rayon's ordered collect keeps the sequential order.
pub fn pairwise(points: &[Point]) -> Vec<Edge> {
    let n = points.len();
    (0..n)
        .into_par_iter()
        .flat_map_iter(move |a| {
            (a + 1..n).map(move |b| Edge {
                a,
                b,
                distance: points[a].distance(points[b]),
            })
        })
        .collect()
}

/// Stable ascending sort, equal distances keep their generation order.
pub fn sort_by_distance(edges: &mut [Edge]) {
    edges.sort_by(|lhs, rhs| lhs.distance.total_cmp(&rhs.distance));
}

#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn sorted_edges(points: &[Point]) -> Vec<Edge> {
    let mut edges = pairwise(points);
    sort_by_distance(&mut edges);
    tracing::debug!(edges = edges.len(), "sorted candidate connections");
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    use itertools::Itertools;
    use rstest::rstest;
    use std::collections::HashSet;

    fn lattice(n: usize) -> Vec<Point> {
        (0..n)
            .map(|i| Point::new((i % 5) as f64, (i / 5 % 5) as f64, (i / 25) as f64))
            .collect()
    }

    #[rstest]
    #[case(0, 0)]
    #[case(1, 0)]
    #[case(2, 1)]
    #[case(4, 6)]
    #[case(30, 435)]
    fn generates_every_pair_once(#[case] n: usize, #[case] expected: usize) {
        let edges = pairwise(&lattice(n));
        assert_eq!(edges.len(), expected);

        let unique: HashSet<_> = edges.iter().map(|e| (e.a, e.b)).collect();
        assert_eq!(unique.len(), expected);
        assert!(edges.iter().all(|e| e.a < e.b));
    }

    #[test]
    fn generation_order_matches_index_order() {
        let points = lattice(12);
        let expected = (0..points.len()).tuple_combinations().collect::<Vec<_>>();
        let actual = pairwise(&points)
            .into_iter()
            .map(|e| (e.a, e.b))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[test]
    fn coincident_points_sort_first() {
        let points = vec![
            Point::new(3.0, 4.0, 0.0),
            Point::new(0.0, 0.0, 0.0),
            Point::new(3.0, 4.0, 0.0),
        ];
        let edges = sorted_edges(&points);
        assert_eq!(edges[0], Edge { a: 0, b: 2, distance: 0.0 });
        assert_eq!(edges[1].distance, 5.0);
        assert_eq!(edges[2].distance, 5.0);
    }

    #[test]
    fn ties_keep_generation_order() {
        let points = lattice(25);
        let edges = sorted_edges(&points);
        for (lhs, rhs) in edges.iter().tuple_windows() {
            assert!(lhs.distance <= rhs.distance);
            if lhs.distance == rhs.distance {
                assert!((lhs.a, lhs.b) < (rhs.a, rhs.b));
            }
        }
    }
}
