// src/gfx/rendering/mod.rs
//! Core rendering functionality
//!
//! Handles render pipelines, surface configuration and frame rendering.

pub mod pipeline_manager;
pub mod render_engine;
pub mod tone_mapping;

// Re-export main types
pub use pipeline_manager::{PipelineConfig, PipelineManager};
pub use render_engine::RenderEngine;
pub use tone_mapping::{SurfaceExtent, ToneMapping};
