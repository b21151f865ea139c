pub mod burst;
pub mod dialogue;
pub mod field;
pub mod motion;
pub mod relay;
pub mod setup;

pub use burst::*;
pub use dialogue::*;
pub use field::*;
pub use motion::*;
pub use relay::*;
pub use setup::*;

// Shaders bundled as string constants
pub static POINTS_WGSL: &str = include_str!("../../shaders/points.wgsl");
