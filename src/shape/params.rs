use std::f32::consts::{PI, TAU};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::geometry::{box_geometry, cylinder_geometry, sphere_geometry, torus_geometry, Geometry};
use super::ShapeKind;

/// Continuous construction parameters that can be animated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterId {
    Width,
    Height,
    Depth,
    Radius,
    RadiusTop,
    RadiusBottom,
    Tube,
    Arc,
    PhiStart,
    PhiLength,
    ThetaStart,
    ThetaLength,
}

impl ParameterId {
    pub const fn name(self) -> &'static str {
        match self {
            ParameterId::Width => "width",
            ParameterId::Height => "height",
            ParameterId::Depth => "depth",
            ParameterId::Radius => "radius",
            ParameterId::RadiusTop => "radius_top",
            ParameterId::RadiusBottom => "radius_bottom",
            ParameterId::Tube => "tube",
            ParameterId::Arc => "arc",
            ParameterId::PhiStart => "phi_start",
            ParameterId::PhiLength => "phi_length",
            ParameterId::ThetaStart => "theta_start",
            ParameterId::ThetaLength => "theta_length",
        }
    }
}

impl fmt::Display for ParameterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxParams {
    pub width: f32,
    pub height: f32,
    pub depth: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub depth_segments: u32,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            width: 32.0,
            height: 32.0,
            depth: 32.0,
            width_segments: 1,
            height_segments: 1,
            depth_segments: 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    pub radius: f32,
    pub width_segments: u32,
    pub height_segments: u32,
    pub phi_start: f32,
    pub phi_length: f32,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self {
            radius: 32.0,
            width_segments: 32,
            height_segments: 32,
            phi_start: 0.0,
            phi_length: TAU,
            theta_start: 0.0,
            theta_length: PI,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConeParams {
    pub radius: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub open_ended: bool,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl Default for ConeParams {
    fn default() -> Self {
        Self {
            radius: 32.0,
            height: 64.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
            theta_start: 0.0,
            theta_length: TAU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    pub open_ended: bool,
    pub theta_start: f32,
    pub theta_length: f32,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius_top: 32.0,
            radius_bottom: 32.0,
            height: 64.0,
            radial_segments: 32,
            height_segments: 1,
            open_ended: false,
            theta_start: 0.0,
            theta_length: TAU,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    pub radius: f32,
    pub tube: f32,
    pub radial_segments: u32,
    pub tubular_segments: u32,
    pub arc: f32,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self {
            radius: 24.0,
            tube: 8.0,
            radial_segments: 16,
            tubular_segments: 64,
            arc: TAU,
        }
    }
}

/// Live construction parameters of the active shape
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ShapeParameters {
    Cube(BoxParams),
    Sphere(SphereParams),
    Cone(ConeParams),
    Cylinder(CylinderParams),
    Torus(TorusParams),
}

impl ShapeParameters {
    /// Default parameters for a shape kind
    pub fn for_kind(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Self::Cube(BoxParams::default()),
            ShapeKind::Sphere => Self::Sphere(SphereParams::default()),
            ShapeKind::Cone => Self::Cone(ConeParams::default()),
            ShapeKind::Cylinder => Self::Cylinder(CylinderParams::default()),
            ShapeKind::Torus => Self::Torus(TorusParams::default()),
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Cube(_) => ShapeKind::Cube,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Cone(_) => ShapeKind::Cone,
            Self::Cylinder(_) => ShapeKind::Cylinder,
            Self::Torus(_) => ShapeKind::Torus,
        }
    }

    fn slot_mut(&mut self, id: ParameterId) -> Option<&mut f32> {
        use ParameterId as P;
        match (self, id) {
            (Self::Cube(p), P::Width) => Some(&mut p.width),
            (Self::Cube(p), P::Height) => Some(&mut p.height),
            (Self::Cube(p), P::Depth) => Some(&mut p.depth),
            (Self::Sphere(p), P::Radius) => Some(&mut p.radius),
            (Self::Sphere(p), P::PhiStart) => Some(&mut p.phi_start),
            (Self::Sphere(p), P::PhiLength) => Some(&mut p.phi_length),
            (Self::Sphere(p), P::ThetaStart) => Some(&mut p.theta_start),
            (Self::Sphere(p), P::ThetaLength) => Some(&mut p.theta_length),
            (Self::Cone(p), P::Radius) => Some(&mut p.radius),
            (Self::Cone(p), P::Height) => Some(&mut p.height),
            (Self::Cone(p), P::ThetaStart) => Some(&mut p.theta_start),
            (Self::Cone(p), P::ThetaLength) => Some(&mut p.theta_length),
            (Self::Cylinder(p), P::RadiusTop) => Some(&mut p.radius_top),
            (Self::Cylinder(p), P::RadiusBottom) => Some(&mut p.radius_bottom),
            (Self::Cylinder(p), P::Height) => Some(&mut p.height),
            (Self::Cylinder(p), P::ThetaStart) => Some(&mut p.theta_start),
            (Self::Cylinder(p), P::ThetaLength) => Some(&mut p.theta_length),
            (Self::Torus(p), P::Radius) => Some(&mut p.radius),
            (Self::Torus(p), P::Tube) => Some(&mut p.tube),
            (Self::Torus(p), P::Arc) => Some(&mut p.arc),
            _ => None,
        }
    }

    /// Read a parameter; `None` when this shape has no such parameter
    pub fn get(&self, id: ParameterId) -> Option<f32> {
        let mut copy = *self;
        copy.slot_mut(id).map(|slot| *slot)
    }

    /// Write a parameter; returns false when this shape has no such parameter
    pub fn set(&mut self, id: ParameterId, value: f32) -> bool {
        match self.slot_mut(id) {
            Some(slot) => {
                *slot = value;
                true
            }
            None => false,
        }
    }

    /// Build the triangle mesh these parameters describe
    pub fn build(&self) -> Geometry {
        match self {
            Self::Cube(p) => box_geometry(p),
            Self::Sphere(p) => sphere_geometry(p),
            Self::Cone(p) => cylinder_geometry(&CylinderParams {
                radius_top: 0.0,
                radius_bottom: p.radius,
                height: p.height,
                radial_segments: p.radial_segments,
                height_segments: p.height_segments,
                open_ended: p.open_ended,
                theta_start: p.theta_start,
                theta_length: p.theta_length,
            }),
            Self::Cylinder(p) => cylinder_geometry(p),
            Self::Torus(p) => torus_geometry(p),
        }
    }
}
