//! # Graphics Module
//!
//! Everything needed to draw the hero scene with wgpu.
//!
//! - **Camera** ([`camera`]) - perspective camera with a scroll offset
//! - **Geometry** ([`geometry`]) - procedural icosahedron and disc
//! - **Scene** ([`scene`]) - node tree, scene group and bounds
//! - **Lights** ([`lights`]) - the hero light rig
//! - **Resources** ([`resources`]) - materials, uniforms, depth textures
//! - **Rendering** ([`rendering`]) - pipelines, shadow mapping, tone mapping
//!
//! The CPU side (scene, materials, lights) never touches the GPU, so scenes
//! can be built and inspected headless. [`RenderEngine::prepare`] uploads
//! whatever a scene needs right before it is drawn.

pub mod camera;
pub mod color;
pub mod geometry;
pub mod lights;
pub mod rendering;
pub mod resources;
pub mod scene;

// Re-export commonly used types
pub use camera::PerspectiveCamera;
pub use rendering::{RenderEngine, SurfaceExtent, ToneMapping};
