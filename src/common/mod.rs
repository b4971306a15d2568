//! Scene files and runtime configuration shared by the binary and tests.

pub mod config;
pub mod scene;

pub use config::{ConfigError, LogLevel, SimulatorConfig};
pub use scene::{Scene, SceneLoadError, load_scene};
