use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationDeltas, OscillationMode, ParameterTrack};
use crate::camera::{DEFAULT_DISTANCE, DEFAULT_EASING};
use crate::cli::Cli;
use crate::controller::ROTATION_STEP;
use crate::shape::{ShapeKind, ShapeParameters};

/// Extra track for one shape kind, merged over the built-in ones
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackOverride {
    pub shape: ShapeKind,
    #[serde(flatten)]
    pub track: ParameterTrack,
}

/// Startup settings, from a preset file and the command line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub shape: ShapeKind,
    /// Starting parameters; must match `shape` when given
    pub parameters: Option<ShapeParameters>,
    pub mode: OscillationMode,
    pub rotation_step: [f32; 3],
    pub camera_easing: f32,
    pub camera_distance: f32,
    pub tracks: Vec<TrackOverride>,
    pub show_overlay: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shape: ShapeKind::default(),
            parameters: None,
            mode: OscillationMode::default(),
            rotation_step: [ROTATION_STEP; 3],
            camera_easing: DEFAULT_EASING,
            camera_distance: DEFAULT_DISTANCE,
            tracks: Vec::new(),
            show_overlay: true,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json).context("Invalid preset JSON")?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read preset {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to load preset {}", path.display()))
    }

    /// Preset (if any) with command-line flags applied on top
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut settings = match &cli.preset {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        settings.apply_cli(cli);
        Ok(settings)
    }

    pub fn apply_cli(&mut self, cli: &Cli) {
        if let Some(shape) = cli.shape {
            if shape != self.shape {
                self.parameters = None;
            }
            self.shape = shape;
        }
        if let Some(mode) = cli.mode {
            self.mode = mode;
        }
        if cli.no_ui {
            self.show_overlay = false;
        }
    }

    fn validate(&self) -> Result<()> {
        if let Some(parameters) = &self.parameters {
            anyhow::ensure!(
                parameters.kind() == self.shape,
                "Preset parameters are for {} but shape is {}",
                parameters.kind(),
                self.shape
            );
        }
        for entry in &self.tracks {
            anyhow::ensure!(
                entry.track.min <= entry.track.max,
                "Track {} for {} has min {} above max {}",
                entry.track.parameter,
                entry.shape,
                entry.track.min,
                entry.track.max
            );
            anyhow::ensure!(
                ShapeParameters::for_kind(entry.shape).get(entry.track.parameter).is_some(),
                "{} has no parameter {}",
                entry.shape,
                entry.track.parameter
            );
        }
        Ok(())
    }

    pub fn initial_parameters(&self) -> ShapeParameters {
        self.parameters
            .unwrap_or_else(|| ShapeParameters::for_kind(self.shape))
    }

    /// Built-in tracks in this mode, with preset overrides merged in
    pub fn deltas(&self) -> AnimationDeltas {
        let mut deltas = AnimationDeltas::with_defaults(self.mode);
        for entry in &self.tracks {
            deltas.insert(entry.shape, entry.track);
        }
        deltas
    }
}
