//! WebGPU rendering module
//!
//! CPU-side tessellation fed to a single colored-triangle pipeline with
//! alpha blending. Scene assembly is pure geometry and testable headless;
//! only the pipeline touches the GPU.

pub mod pipeline;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use scene::build_frame;
