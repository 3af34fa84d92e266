use bevy::prelude::*;

mod galaxy_config;
mod generator;
mod point_cloud;

pub use galaxy_config::{
    ConfigCommitted, GalaxyConfig, GalaxyConfigDraft, GalaxyConfigPlugin, GalaxyParams,
};
pub use generator::{generate, ParticleSet};
pub use point_cloud::PointCloudPlugin;

#[derive(Resource, Default)]
pub struct ParticleCount {
    pub count: usize,
}
