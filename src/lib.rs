pub mod animation;
pub mod camera;
pub mod cli;
pub mod controller;
pub mod core;
pub mod frame;
pub mod input;
pub mod overlay;
pub mod renderer;
pub mod settings;
pub mod shape;
pub mod types;

pub use animation::{advance_parameter, advance_parameter_with, OscillationMode};
pub use controller::AnimationController;
pub use shape::{ShapeKind, ShapeParameters};
