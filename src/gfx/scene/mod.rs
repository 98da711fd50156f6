//! # Scene Management Module
//!
//! CPU-side scene description for the hero: a camera, a light rig, the
//! ground decoration and the animated [`SceneGroup`]. Surfaces carry their
//! mesh and material by value and get GPU buffers lazily from the render
//! engine, so the whole scene can be built and inspected without a device.

pub mod bounds;
pub mod group;
pub mod mesh;
pub mod node;
pub mod scene;
pub mod vertex;

pub use bounds::Aabb;
pub use group::{GroupContent, SceneGroup};
pub use mesh::{Mesh, Topology};
pub use node::{Node, Surface, Transform};
pub use scene::Scene;
pub use vertex::Vertex3D;
