//! Background glTF import
//!
//! The import runs on its own thread and reports back through a oneshot
//! channel which the frame loop polls without blocking.

use std::path::{Path, PathBuf};

use cgmath::{Quaternion, Vector3};
use futures::channel::oneshot;

use super::lifecycle::MountToken;
use crate::{
    error::{Result, VitrineError},
    gfx::{
        resources::material::Material,
        scene::{
            mesh::Mesh,
            node::{Node, Surface, Transform},
        },
    },
};

/// State of an in-flight load when polled
#[derive(Debug)]
pub enum LoadPoll {
    Pending,
    Ready(Result<Node>),
}

/// Receiving end of a model load
#[derive(Debug)]
pub struct PendingLoad {
    path: PathBuf,
    receiver: oneshot::Receiver<Result<Node>>,
}

impl PendingLoad {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Non-blocking check for a result. A worker that went away without
    /// answering counts as a failed load.
    pub fn poll(&mut self) -> LoadPoll {
        match self.receiver.try_recv() {
            Ok(None) => LoadPoll::Pending,
            Ok(Some(result)) => LoadPoll::Ready(result),
            Err(oneshot::Canceled) => {
                LoadPoll::Ready(Err(VitrineError::LoadAbandoned(self.path.clone())))
            }
        }
    }
}

/// Sending end handed to whoever performs the load
#[derive(Debug)]
pub struct LoadCompleter {
    sender: oneshot::Sender<Result<Node>>,
}

impl LoadCompleter {
    /// Delivers the result; returns false if the receiver is gone
    pub fn complete(self, result: Result<Node>) -> bool {
        self.sender.send(result).is_ok()
    }
}

/// Creates a connected completer / pending pair for `path`
pub fn channel(path: impl Into<PathBuf>) -> (LoadCompleter, PendingLoad) {
    let (sender, receiver) = oneshot::channel();
    (
        LoadCompleter { sender },
        PendingLoad {
            path: path.into(),
            receiver,
        },
    )
}

/// Starts importing `path` on a worker thread
pub fn spawn_gltf_load(path: impl Into<PathBuf>, token: MountToken) -> Result<PendingLoad> {
    let path = path.into();
    let (completer, pending) = channel(path.clone());

    std::thread::Builder::new()
        .name("vitrine-model-loader".to_string())
        .spawn(move || {
            if !token.is_live() {
                log::debug!("Hero unmounted before loading {}", path.display());
                return;
            }
            let result = import_gltf(&path);
            if !completer.complete(result) {
                log::debug!("Load result for {} dropped", path.display());
            }
        })?;

    Ok(pending)
}

/// Reads a glTF or GLB file into a node tree rooted at a single node
pub fn import_gltf(path: &Path) -> Result<Node> {
    if !path.is_file() {
        return Err(VitrineError::AssetNotFound(path.to_path_buf()));
    }
    let supported = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("glb") || ext.eq_ignore_ascii_case("gltf"));
    if !supported {
        return Err(VitrineError::UnsupportedAsset(path.to_path_buf()));
    }

    let gltf::Gltf { document, blob } = gltf::Gltf::open(path)?;
    let buffers = gltf::import_buffers(&document, path.parent(), blob)?;

    let scene = document
        .default_scene()
        .or_else(|| document.scenes().next())
        .ok_or_else(|| VitrineError::EmptyAsset(path.to_path_buf()))?;

    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "model".to_string());
    let mut root = Node::new(name);
    for node in scene.nodes() {
        root.children.push(convert_node(&node, &buffers));
    }

    if root.triangle_count() == 0 {
        return Err(VitrineError::EmptyAsset(path.to_path_buf()));
    }

    log::info!(
        "Imported {}: {} surfaces, {} triangles",
        path.display(),
        root.surface_count(),
        root.triangle_count()
    );
    Ok(root)
}

fn convert_node(node: &gltf::Node, buffers: &[gltf::buffer::Data]) -> Node {
    let (translation, [x, y, z, w], scale) = node.transform().decomposed();
    let transform = Transform {
        translation: Vector3::from(translation),
        rotation: Quaternion::new(w, x, y, z),
        scale: Vector3::from(scale),
    };

    let name = node
        .name()
        .map(str::to_owned)
        .unwrap_or_else(|| format!("node {}", node.index()));
    let mut converted = Node::new(name).with_transform(transform);

    if let Some(mesh) = node.mesh() {
        for primitive in mesh.primitives() {
            if let Some(surface) = convert_primitive(&primitive, buffers) {
                converted.surfaces.push(surface);
            }
        }
    }
    for child in node.children() {
        converted.children.push(convert_node(&child, buffers));
    }

    converted
}

fn convert_primitive(
    primitive: &gltf::Primitive,
    buffers: &[gltf::buffer::Data],
) -> Option<Surface> {
    if primitive.mode() != gltf::mesh::Mode::Triangles {
        log::debug!("Skipping primitive with mode {:?}", primitive.mode());
        return None;
    }

    let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|data| data.0.as_slice()));
    let positions: Vec<[f32; 3]> = reader.read_positions()?.collect();
    let normals = reader
        .read_normals()
        .map(|normals| normals.collect::<Vec<_>>());
    let indices: Vec<u32> = match reader.read_indices() {
        Some(indices) => indices.into_u32().collect(),
        None => (0..positions.len() as u32).collect(),
    };

    if indices.len() < 3 {
        return None;
    }
    if indices.iter().any(|&i| i as usize >= positions.len()) {
        log::warn!("Skipping primitive with out-of-range indices");
        return None;
    }

    Some(Surface::new(
        Mesh::from_positions(positions, normals, indices),
        convert_material(&primitive.material()),
    ))
}

fn convert_material(material: &gltf::Material) -> Material {
    let pbr = material.pbr_metallic_roughness();
    let mut converted = Material::from_factors(
        material.name().unwrap_or("gltf material"),
        pbr.base_color_factor(),
        pbr.metallic_factor(),
        pbr.roughness_factor(),
        material.emissive_factor(),
    );
    if material.alpha_mode() == gltf::material::AlphaMode::Blend {
        converted.set_transparent(true);
    }
    converted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_reported() {
        let err = import_gltf(Path::new("does/not/exist.glb")).unwrap_err();
        assert!(matches!(err, VitrineError::AssetNotFound(_)));
    }

    #[test]
    fn non_gltf_files_are_rejected() {
        let manifest = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let err = import_gltf(&manifest).unwrap_err();
        assert!(matches!(err, VitrineError::UnsupportedAsset(_)));
    }

    #[test]
    fn dropped_completer_abandons_the_load() {
        let (completer, mut pending) = channel("model.glb");
        assert!(matches!(pending.poll(), LoadPoll::Pending));
        drop(completer);
        assert!(matches!(
            pending.poll(),
            LoadPoll::Ready(Err(VitrineError::LoadAbandoned(_)))
        ));
    }

    #[test]
    fn completed_load_is_received() {
        let (completer, mut pending) = channel("model.glb");
        assert!(completer.complete(Ok(Node::new("model"))));
        match pending.poll() {
            LoadPoll::Ready(Ok(node)) => assert_eq!(node.name, "model"),
            other => panic!("unexpected poll result: {:?}", other),
        }
    }
}
