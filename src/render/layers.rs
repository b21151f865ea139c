use super::helpers;
use crate::constants::*;
use crate::core::{LayerKind, PointLayer};
use glam::{EulerRot, Mat4, Quat};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PointInstance {
    pub(crate) position: [f32; 3],
    pub(crate) size: f32,
    pub(crate) color: [f32; 3],
}

impl PointInstance {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] =
        wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32, 2 => Float32x3];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<PointInstance>() as u64,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct LayerUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) params: [f32; 4],
}

#[derive(Clone, Copy, Debug)]
enum Sprite {
    Dot = 0,
    Star = 1,
    Nebula = 2,
}

/// `(world size, reference point size, sprite)` for a layer.
fn material(kind: LayerKind) -> (f32, f32, Sprite) {
    match kind {
        LayerKind::Nebula => (NEBULA_MATERIAL.0, NEBULA_MATERIAL.1, Sprite::Nebula),
        LayerKind::Starfield => (STARFIELD_MATERIAL.0, STARFIELD_MATERIAL.1, Sprite::Star),
        LayerKind::Constellation => (
            CONSTELLATION_MATERIAL.0,
            CONSTELLATION_MATERIAL.1,
            Sprite::Star,
        ),
        LayerKind::Ambient => (AMBIENT_MATERIAL.0, AMBIENT_MATERIAL.1, Sprite::Dot),
    }
}

/// GPU side of one point layer: instance data plus its own uniforms.
pub(crate) struct LayerGpu {
    kind: LayerKind,
    instances: wgpu::Buffer,
    count: u32,
    uniforms: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Reused every upload so steady-state frames do not allocate.
    scratch: Vec<PointInstance>,
    dynamic: bool,
}

impl LayerGpu {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        layer: &PointLayer,
    ) -> Self {
        let count = layer.len();
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("point_instances"),
            size: (count.max(1) * std::mem::size_of::<PointInstance>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let uniforms = helpers::uniform_buffer(
            device,
            "layer_uniforms",
            std::mem::size_of::<LayerUniforms>() as u64,
        );
        let bind_group = helpers::uniform_bind_group(device, "layer_bg", layout, &uniforms);
        let mut gpu = Self {
            kind: layer.kind,
            instances,
            count: count as u32,
            uniforms,
            bind_group,
            scratch: Vec::with_capacity(count),
            dynamic: layer.velocities.is_some(),
        };
        gpu.upload_points(queue, layer);
        gpu
    }

    fn upload_points(&mut self, queue: &wgpu::Queue, layer: &PointLayer) {
        self.scratch.clear();
        self.scratch.extend(
            layer
                .positions
                .iter()
                .zip(&layer.sizes)
                .zip(&layer.colors)
                .map(|((p, s), c)| PointInstance {
                    position: p.to_array(),
                    size: *s,
                    color: *c,
                }),
        );
        queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&self.scratch));
    }

    /// Push this frame's pose, and positions for drifting layers.
    pub(crate) fn update(&mut self, queue: &wgpu::Queue, layer: &PointLayer) {
        if self.dynamic {
            self.upload_points(queue, layer);
        }
        let (world_size, ref_size, sprite) = material(self.kind);
        let pose = layer.pose;
        let rotation = Quat::from_euler(
            EulerRot::XYZ,
            pose.rotation.x,
            pose.rotation.y,
            pose.rotation.z,
        );
        let model = Mat4::from_rotation_translation(rotation, pose.offset);
        let u = LayerUniforms {
            model: model.to_cols_array_2d(),
            params: [
                world_size * (CAMERA_FOV_Y_DEG.to_radians() * 0.5).tan(),
                pose.opacity,
                sprite as u32 as f32,
                ref_size,
            ],
        };
        queue.write_buffer(&self.uniforms, 0, bytemuck::bytes_of(&u));
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        if self.count == 0 {
            return;
        }
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.instances.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}
