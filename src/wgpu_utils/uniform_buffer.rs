//! Typed uniform buffers
//!
//! The scene uploads its global block and one block per surface every
//! frame. Most of those blocks do not change between frames, so the buffer
//! remembers the last upload and skips identical writes.

use std::marker::PhantomData;

use wgpu::util::DeviceExt;

pub struct UniformBuffer<Content> {
    buffer: wgpu::Buffer,
    last_upload: Vec<u8>,
    content: PhantomData<Content>,
}

fn label_for<Content>() -> String {
    let type_name = std::any::type_name::<Content>();
    let short = type_name.rsplit("::").next().unwrap_or(type_name);
    format!("{short} Uniforms")
}

impl<Content: bytemuck::Pod> UniformBuffer<Content> {
    /// Zero-filled buffer, written on the first [`update_content`](Self::update_content)
    pub fn new(device: &wgpu::Device) -> Self {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some(&label_for::<Content>()),
            size: std::mem::size_of::<Content>() as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        Self {
            buffer,
            last_upload: Vec::new(),
            content: PhantomData,
        }
    }

    pub fn with_content(device: &wgpu::Device, content: &Content) -> Self {
        let bytes = bytemuck::bytes_of(content);
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&label_for::<Content>()),
            contents: bytes,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        Self {
            buffer,
            last_upload: bytes.to_vec(),
            content: PhantomData,
        }
    }

    /// Queues a write of `content` unless it matches the last upload
    pub fn update_content(&mut self, queue: &wgpu::Queue, content: Content) {
        let bytes = bytemuck::bytes_of(&content);
        if self.last_upload == bytes {
            return;
        }
        queue.write_buffer(&self.buffer, 0, bytes);
        self.last_upload.clear();
        self.last_upload.extend_from_slice(bytes);
    }

    pub fn binding_resource(&self) -> wgpu::BindingResource {
        self.buffer.as_entire_binding()
    }

    pub fn destroy(&self) {
        self.buffer.destroy();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_use_the_short_type_name() {
        assert_eq!(label_for::<crate::gfx::camera::CameraUniform>(), "CameraUniform Uniforms");
        assert_eq!(label_for::<u32>(), "u32 Uniforms");
    }
}
