use std::collections::HashMap;
use std::f32::consts::TAU;

use serde::{Deserialize, Serialize};

use super::oscillator::{advance_parameter, OscillationMode};
use crate::shape::{ParameterId, ShapeKind, ShapeParameters};

/// One animated parameter: signed step, bounds and oscillation mode
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParameterTrack {
    pub parameter: ParameterId,
    pub delta: f32,
    pub min: f32,
    pub max: f32,
    #[serde(default)]
    pub mode: OscillationMode,
}

impl ParameterTrack {
    pub const fn new(parameter: ParameterId, delta: f32, min: f32, max: f32) -> Self {
        Self {
            parameter,
            delta,
            min,
            max,
            mode: OscillationMode::Alternate,
        }
    }

    pub const fn with_mode(mut self, mode: OscillationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Advance this track's parameter inside `params`.
    ///
    /// Returns `Some(completed)` when the parameter exists on the shape,
    /// `None` when it doesn't (the track is left untouched).
    pub fn apply(&mut self, params: &mut ShapeParameters) -> Option<bool> {
        let value = params.get(self.parameter)?;
        let step = advance_parameter(value, self.delta, self.min, self.max, self.mode);
        params.set(self.parameter, step.value);
        self.delta = step.delta;
        Some(step.completed)
    }
}

/// Per-shape, per-parameter oscillation deltas
#[derive(Debug, Clone, Default)]
pub struct AnimationDeltas {
    tracks: HashMap<ShapeKind, Vec<ParameterTrack>>,
}

impl AnimationDeltas {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Built-in animation for every shape kind
    pub fn with_defaults(mode: OscillationMode) -> Self {
        let mut deltas = Self::empty();
        for kind in ShapeKind::ALL {
            for track in default_tracks(kind) {
                deltas.insert(kind, track.with_mode(mode));
            }
        }
        deltas
    }

    /// Add a track, replacing any existing track for the same parameter
    pub fn insert(&mut self, kind: ShapeKind, track: ParameterTrack) {
        let tracks = self.tracks.entry(kind).or_default();
        match tracks.iter_mut().find(|t| t.parameter == track.parameter) {
            Some(existing) => *existing = track,
            None => tracks.push(track),
        }
    }

    pub fn tracks(&self, kind: ShapeKind) -> &[ParameterTrack] {
        self.tracks.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tracks_mut(&mut self, kind: ShapeKind) -> &mut [ParameterTrack] {
        self.tracks
            .get_mut(&kind)
            .map(Vec::as_mut_slice)
            .unwrap_or(&mut [])
    }

    pub fn set_mode(&mut self, mode: OscillationMode) {
        for track in self.tracks.values_mut().flatten() {
            track.mode = mode;
        }
    }
}

fn default_tracks(kind: ShapeKind) -> Vec<ParameterTrack> {
    use ParameterId as P;
    match kind {
        ShapeKind::Cube => vec![
            ParameterTrack::new(P::Width, -0.4, 8.0, 48.0),
            ParameterTrack::new(P::Depth, 0.4, 8.0, 48.0),
        ],
        ShapeKind::Sphere => vec![
            ParameterTrack::new(P::ThetaLength, -0.05, 0.01, TAU),
            ParameterTrack::new(P::PhiLength, -0.05, 0.01, TAU),
        ],
        ShapeKind::Cone => vec![
            ParameterTrack::new(P::ThetaLength, -0.05, 0.01, TAU),
            ParameterTrack::new(P::Height, -0.5, 16.0, 64.0),
        ],
        ShapeKind::Cylinder => vec![
            ParameterTrack::new(P::ThetaLength, -0.05, 0.01, TAU),
            ParameterTrack::new(P::RadiusTop, -0.5, 0.0, 32.0),
        ],
        ShapeKind::Torus => vec![
            ParameterTrack::new(P::Arc, -0.05, 0.01, TAU),
            ParameterTrack::new(P::Tube, -0.1, 2.0, 12.0),
        ],
    }
}
