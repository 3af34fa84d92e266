pub use crate::galaxy::{
    ConfigCommitted, GalaxyConfig, GalaxyConfigDraft, GalaxyParams, ParticleCount,
};
