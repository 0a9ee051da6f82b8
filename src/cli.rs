// cli.rs - Command-line interface configuration
use clap::Parser;
use std::path::PathBuf;

use crate::animation::OscillationMode;
use crate::shape::ShapeKind;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "shape-morph")]
#[command(about = "Animated parametric shapes", long_about = None)]
pub struct Cli {
    /// Shape to show at startup
    #[arg(long, value_enum)]
    pub shape: Option<ShapeKind>,

    /// What a parameter does when it passes its upper bound
    #[arg(long, value_enum)]
    pub mode: Option<OscillationMode>,

    /// JSON preset with shape, mode, rotation and camera settings
    #[arg(long)]
    pub preset: Option<PathBuf>,

    /// Disable the overlay panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}
