use crate::prelude::*;
use bevy::{
    prelude::*,
    reflect::TypePath,
    render::render_resource::{AsBindGroup, ShaderRef, ShaderType},
};
use bytemuck::{Pod, Zeroable};

use super::generator;

const SHADER_ASSET_PATH: &str = "shaders/galaxy_points.wgsl";

pub struct PointCloudPlugin;

impl Plugin for PointCloudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(MaterialPlugin::<GalaxyPointMaterial>::default())
            .insert_resource(GalaxyPointCloud::default())
            .insert_resource(RegenTracker { generation: -1 })
            .insert_resource(ParticleCount::default())
            .add_systems(Update, regenerate_point_cloud);
    }
}

#[derive(Component)]
struct GalaxyPoint;

/// Asset handles owned by the current particle set. Swapped wholesale on
/// commit; the previous set is fully released before the new one exists.
#[derive(Resource, Default)]
pub struct GalaxyPointCloud(Option<PointCloudHandles>);

struct PointCloudHandles {
    mesh: Handle<Mesh>,
    material: Handle<GalaxyPointMaterial>,
}

#[derive(Resource)]
struct RegenTracker {
    generation: i32,
}

/// Rebuilds the point cloud whenever the committed config generation moves.
/// Starts at generation -1 so the first Update pass builds the initial set.
fn regenerate_point_cloud(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<GalaxyPointMaterial>>,
    mut point_cloud: ResMut<GalaxyPointCloud>,
    mut tracker: ResMut<RegenTracker>,
    mut particle_count: ResMut<ParticleCount>,
    config: Res<GalaxyConfig>,
    existing_points: Query<Entity, With<GalaxyPoint>>,
) {
    if tracker.generation == config.generation {
        return;
    }
    tracker.generation = config.generation;

    // dispose of the previous set before building the new one
    for entity in &existing_points {
        commands.entity(entity).despawn();
    }
    if let Some(previous) = point_cloud.0.take() {
        meshes.remove(&previous.mesh);
        materials.remove(&previous.material);
    }

    let set = generator::generate(&config.params);
    particle_count.count = set.len();

    if config.diagnostic_mode {
        log_branch_assignment(&config.params, set.len());
    }

    if set.is_empty() {
        return;
    }

    let mesh = meshes.add(Rectangle::from_size(Vec2::splat(1.0)));
    let material = materials.add(GalaxyPointMaterial::new(&config.params));

    // One shared mesh and material across the whole set, so the renderer
    // collapses every particle into a single instanced draw.
    for position in set.positions() {
        commands.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(material.clone()),
            Transform::from_translation(*position),
            GalaxyPoint,
        ));
    }

    point_cloud.0 = Some(PointCloudHandles { mesh, material });
}

fn log_branch_assignment(params: &GalaxyParams, count: usize) {
    for index in 0..count.min(20) {
        debug!(
            "particle {index}: branch {} angle {}",
            index as u32 % params.branches,
            generator::branch_angle(index, params.branches),
        );
    }
}

// GALAXY - POINT SPRITE MATERIAL

#[derive(Asset, TypePath, AsBindGroup, Debug, Clone)]
pub struct GalaxyPointMaterial {
    #[uniform(0)]
    params: GalaxyPointUniform,
    alpha_mode: AlphaMode,
}

impl GalaxyPointMaterial {
    fn new(params: &GalaxyParams) -> Self {
        Self {
            params: GalaxyPointUniform::read(params),
            // additive accumulation, no depth writes
            alpha_mode: AlphaMode::Add,
        }
    }
}

// This struct is duplicated in galaxy_points.wgsl, so make sure to update both
#[derive(ShaderType, Pod, Zeroable, Clone, Copy, Debug)]
#[repr(C)]
struct GalaxyPointUniform {
    tint: Vec4,
    size: f32,
    exposure: f32,
    pad: Vec2,
}

impl GalaxyPointUniform {
    fn read(params: &GalaxyParams) -> Self {
        Self {
            tint: Vec4::new(1.0, 0.92, 0.85, 1.0),
            size: params.size,
            exposure: 1.0,
            pad: Vec2::ZERO,
        }
    }
}

impl Material for GalaxyPointMaterial {
    fn vertex_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn fragment_shader() -> ShaderRef {
        SHADER_ASSET_PATH.into()
    }

    fn alpha_mode(&self) -> AlphaMode {
        self.alpha_mode
    }
}
