//! # User interface
//!
//! The page is drawn with Dear ImGui on top of the hero scene. [`UiManager`]
//! owns the ImGui integration with winit and wgpu; [`draw_page`] turns the
//! state of a [`Page`] into draw calls every frame and feeds clicks, hover
//! and form edits back into it.
//!
//! [`Page`]: crate::page::Page

pub mod manager;
pub mod page_view;
pub mod theme;

pub use manager::UiManager;
pub use page_view::draw_page;
