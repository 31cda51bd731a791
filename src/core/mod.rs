pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod crossfade;
pub mod features;
pub mod mesh;
pub mod nav;
pub mod playlist;
pub mod rotation;
pub mod session;
pub mod sync;
pub mod transport;

pub use config::SiteConfig;
pub use sync::{FrameOutput, SyncLoop};

// Shaders bundled as string constants
pub static CUBE_WGSL: &str = include_str!("../../shaders/cube.wgsl");
