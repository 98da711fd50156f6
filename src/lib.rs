//! Vitrine
//!
//! A single-page portfolio showcase: a real-time 3D hero scene rendered with
//! wgpu behind a scrolling page drawn with Dear ImGui.

pub mod app;
pub mod content;
pub mod error;
pub mod gfx;
pub mod hero;
pub mod page;
pub mod prelude;
pub mod ui;
pub mod wgpu_utils;

pub use app::VitrineApp;
pub use error::{Result, VitrineError};

/// Creates the showcase with the default hero settings and built-in content
pub fn default() -> Result<VitrineApp> {
    VitrineApp::new(hero::HeroConfig::default(), content::PortfolioContent::builtin()?)
}
