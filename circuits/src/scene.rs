//! Read-only snapshot of a clustering run for external renderers.
//!
//! Endpoints are copied by value so the JSON stands on its own:
//! `{"points": [{"x", "y", "z"}], "lines": [{"from", "to", "distance"}]}`.

use serde::Serialize;
use std::io::Write;
use std::path::Path;

use crate::edges::Edge;
use crate::error::CircuitError;
use crate::Point;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScenePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<Point> for ScenePoint {
    fn from(p: Point) -> Self {
        Self { x: p.x, y: p.y, z: p.z }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneLine {
    pub from: ScenePoint,
    pub to: ScenePoint,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Scene {
    pub points: Vec<ScenePoint>,
    pub lines: Vec<SceneLine>,
}

impl Scene {
    pub fn new(points: &[Point], accepted: &[Edge]) -> Self {
        Self {
            points: points.iter().copied().map(ScenePoint::from).collect(),
            lines: accepted
                .iter()
                .map(|edge| SceneLine {
                    from: points[edge.a].into(),
                    to: points[edge.b].into(),
                    distance: edge.distance,
                })
                .collect(),
        }
    }

    pub fn to_json(&self) -> Result<String, CircuitError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the snapshot as JSON, `-` meaning stdout.
    #[tracing::instrument(skip(self), fields(points = self.points.len(), lines = self.lines.len()))]
    pub fn write_to(&self, path: &Path) -> Result<(), CircuitError> {
        let json = self.to_json()?;
        let io_err = |source| CircuitError::Io {
            path: path.to_path_buf(),
            source,
        };

        if path == Path::new("-") {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{json}").map_err(io_err)?;
        } else {
            std::fs::write(path, json).map_err(io_err)?;
        }
        tracing::info!(path = %path.display(), "scene written");
        Ok(())
    }
}
