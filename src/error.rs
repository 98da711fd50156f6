//! Error types
//!
//! [`VitrineError`] covers the failures that can stop the showcase from
//! starting (no window, no GPU) and the failures of loading external files.
//! Asset load failures never reach the user: the hero logs them and keeps its
//! fallback shape on screen.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for the showcase.
#[derive(Error, Debug)]
pub enum VitrineError {
    /// Failed to create a drawing surface for the window.
    #[error("Failed to create surface: {0}")]
    SurfaceCreateFailed(#[from] wgpu::CreateSurfaceError),

    /// Failed to find a GPU adapter compatible with the surface.
    #[error("Failed to request adapter: {0}")]
    AdapterRequestFailed(#[from] wgpu::RequestAdapterError),

    /// Failed to create the GPU device.
    #[error("Failed to request device: {0}")]
    DeviceRequestFailed(#[from] wgpu::RequestDeviceError),

    /// Window system / event loop error.
    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    /// Window creation error.
    #[error("Window creation error: {0}")]
    WindowCreate(#[from] winit::error::OsError),

    /// The asset file could not be read.
    #[error("Asset not found: {}", .0.display())]
    AssetNotFound(PathBuf),

    /// glTF parsing or buffer import error.
    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),

    /// The asset decoded but holds no drawable triangle geometry.
    #[error("Asset contains no triangle geometry: {}", .0.display())]
    EmptyAsset(PathBuf),

    /// The asset file is not glTF 2.0 (`.gltf` or `.glb`).
    #[error("Unsupported asset format: {}", .0.display())]
    UnsupportedAsset(PathBuf),

    /// The asset load was abandoned before producing a result.
    #[error("Asset load abandoned: {}", .0.display())]
    LoadAbandoned(PathBuf),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Portfolio content file could not be parsed.
    #[error("Content parse error: {0}")]
    ContentParse(#[from] ron::error::SpannedError),

    /// Portfolio content parsed but failed validation.
    #[error("Invalid content: {0}")]
    InvalidContent(String),
}

/// Alias for `Result<T, VitrineError>`.
pub type Result<T> = std::result::Result<T, VitrineError>;
