mod geometry;
mod params;

pub use geometry::{box_geometry, cylinder_geometry, sphere_geometry, torus_geometry, Geometry, Vertex};
pub use params::{
    BoxParams, ConeParams, CylinderParams, ParameterId, ShapeParameters, SphereParams, TorusParams,
};

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of parametric shape the demo can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    #[default]
    Cube,
    Sphere,
    Cone,
    Cylinder,
    Torus,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Cube,
        ShapeKind::Sphere,
        ShapeKind::Cone,
        ShapeKind::Cylinder,
        ShapeKind::Torus,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Cube => "cube",
            ShapeKind::Sphere => "sphere",
            ShapeKind::Cone => "cone",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Torus => "torus",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
