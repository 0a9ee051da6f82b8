mod deltas;
mod oscillator;

pub use deltas::{AnimationDeltas, ParameterTrack};
pub use oscillator::{advance_parameter, advance_parameter_with, Advance, OscillationMode};
