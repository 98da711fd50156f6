//! # Vitrine prelude
//!
//! The types most programs need to configure and run the showcase.
//!
//! ```no_run
//! use vitrine::prelude::*;
//!
//! fn main() -> vitrine::Result<()> {
//!     let config = HeroConfig::default().with_model_path("assets/Chair.glb");
//!     VitrineApp::new(config, PortfolioContent::builtin()?)?.run()
//! }
//! ```

pub use crate::app::VitrineApp;
pub use crate::content::PortfolioContent;
pub use crate::default;
pub use crate::error::{Result, VitrineError};

pub use crate::hero::{HeroConfig, HeroScene, LoadOutcome, MountToken};
pub use crate::page::{Ease, Element, Page, PageLayout, Pose, SectionId, Tween};

pub use crate::gfx::rendering::tone_mapping::ToneMapping;
pub use crate::gfx::scene::scene::Scene;
