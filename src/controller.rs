use glam::{EulerRot, Mat4, Vec2, Vec3};

use crate::animation::{AnimationDeltas, OscillationMode};
use crate::camera::Camera;
use crate::input::InputAction;
use crate::shape::{ParameterId, ShapeKind, ShapeParameters};

/// Rotation added to each axis every frame, in radians
pub const ROTATION_STEP: f32 = 0.025;

/// Called when a parameter track reaches its upper bound
pub type CompletionCallback = Box<dyn FnMut(ShapeKind, ParameterId)>;

/// The shape currently in the scene
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub parameters: ShapeParameters,
    pub rotation: Vec3,
    /// Bumped whenever `parameters` change so the mesh can be rebuilt
    pub revision: u64,
}

impl Shape {
    pub fn new(kind: ShapeKind) -> Self {
        Self::from_parameters(ShapeParameters::for_kind(kind))
    }

    pub fn from_parameters(parameters: ShapeParameters) -> Self {
        Self {
            parameters,
            rotation: Vec3::ZERO,
            revision: 0,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        self.parameters.kind()
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Owns the live shape, its oscillation deltas, and the camera
pub struct AnimationController {
    shape: Option<Shape>,
    deltas: AnimationDeltas,
    camera: Camera,
    pointer: Vec2,
    viewport: (u32, u32),
    rotation_step: Vec3,
    on_complete: Option<CompletionCallback>,
    /// Survives shape switches so a new shape never reuses an old revision
    next_revision: u64,
}

impl AnimationController {
    pub fn new(width: u32, height: u32) -> Self {
        let mut camera = Camera::default();
        camera.resize(width, height);
        Self {
            shape: None,
            deltas: AnimationDeltas::with_defaults(OscillationMode::Alternate),
            camera,
            pointer: Vec2::ZERO,
            viewport: (width, height),
            rotation_step: Vec3::splat(ROTATION_STEP),
            on_complete: None,
            next_revision: 1,
        }
    }

    pub fn with_shape(mut self, kind: ShapeKind) -> Self {
        self.set_shape(kind);
        self
    }

    pub fn with_deltas(mut self, deltas: AnimationDeltas) -> Self {
        self.deltas = deltas;
        self
    }

    pub fn with_camera(mut self, camera: Camera) -> Self {
        let aspect = self.camera.aspect;
        self.camera = Camera { aspect, ..camera };
        self
    }

    pub fn with_rotation_step(mut self, step: Vec3) -> Self {
        self.rotation_step = step;
        self
    }

    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(ShapeKind, ParameterId) + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn deltas(&self) -> &AnimationDeltas {
        &self.deltas
    }

    pub fn set_mode(&mut self, mode: OscillationMode) {
        self.deltas.set_mode(mode);
    }

    /// Replace the active shape with `kind` at its default parameters
    pub fn set_shape(&mut self, kind: ShapeKind) {
        self.set_parameters(ShapeParameters::for_kind(kind));
    }

    pub fn set_parameters(&mut self, parameters: ShapeParameters) {
        let mut shape = Shape::from_parameters(parameters);
        shape.revision = self.bump_revision();
        log::info!("Showing {}", shape.kind());
        self.shape = Some(shape);
    }

    pub fn clear_shape(&mut self) {
        self.shape = None;
    }

    fn bump_revision(&mut self) -> u64 {
        let revision = self.next_revision;
        self.next_revision += 1;
        revision
    }

    /// Store the pointer offset from the viewport center
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        let (width, height) = self.viewport;
        self.pointer = Vec2::new(x - width as f32 / 2.0, y - height as f32 / 2.0);
    }

    pub fn scroll(&mut self, delta_y: f32) {
        self.camera.zoom(delta_y);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if self.camera.resize(width, height) {
            self.viewport = (width, height);
        }
    }

    pub fn handle(&mut self, action: InputAction) {
        match action {
            InputAction::PointerMoved { x, y } => self.pointer_moved(x, y),
            InputAction::Scrolled { delta_y } => self.scroll(delta_y),
            InputAction::Resized { width, height } => self.resize(width, height),
            InputAction::SelectShape(kind) => self.set_shape(kind),
            InputAction::ClearShape => self.clear_shape(),
            InputAction::Exit => {}
        }
    }

    /// Advance one frame. Returns false when there is no shape to animate.
    pub fn tick(&mut self) -> bool {
        self.camera.ease_toward(self.pointer);

        let Some(shape) = self.shape.as_mut() else {
            return false;
        };

        let kind = shape.kind();
        let mut changed = false;
        for track in self.deltas.tracks_mut(kind) {
            match track.apply(&mut shape.parameters) {
                Some(completed) => {
                    changed = true;
                    if completed {
                        log::debug!("{kind} {} reached {}", track.parameter, track.max);
                        if let Some(callback) = self.on_complete.as_mut() {
                            callback(kind, track.parameter);
                        }
                    }
                }
                None => log::warn!("{kind} has no parameter {}", track.parameter),
            }
        }

        if changed {
            shape.revision = self.next_revision;
            self.next_revision += 1;
        }
        shape.rotation += self.rotation_step;
        true
    }

    /// Model matrix of the active shape, identity without one
    pub fn model_matrix(&self) -> Mat4 {
        self.shape.as_ref().map(Shape::model_matrix).unwrap_or(Mat4::IDENTITY)
    }
}
