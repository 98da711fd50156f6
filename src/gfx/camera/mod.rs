//! The hero camera

pub mod camera_utils;
pub mod perspective_camera;

pub use camera_utils::CameraUniform;
pub use perspective_camera::PerspectiveCamera;
