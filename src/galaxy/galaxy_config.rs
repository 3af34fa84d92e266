use bevy::prelude::*;

/// The five tunables driving galaxy generation.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct GalaxyParams {
    pub count: u32,
    pub size: f32,
    pub radius: f32,
    pub branches: u32,
    pub spin: f32,
}

impl Default for GalaxyParams {
    fn default() -> Self {
        Self {
            count: 10_000,
            size: 0.01,
            radius: 5.0,
            branches: 3,
            spin: 1.0,
        }
    }
}

impl GalaxyParams {
    pub const MIN: Self = Self {
        count: 100,
        size: 0.001,
        radius: 0.1,
        branches: 2,
        spin: -5.0,
    };
    pub const MAX: Self = Self {
        count: 100_000,
        size: 0.1,
        radius: 15.0,
        branches: 20,
        spin: 5.0,
    };

    /// Pins every field into [MIN, MAX]. Generation assumes params passed
    /// this boundary; in particular `branches` never reaches zero.
    pub fn clamped(&self) -> Self {
        Self {
            count: self.count.clamp(Self::MIN.count, Self::MAX.count),
            size: self.size.clamp(Self::MIN.size, Self::MAX.size),
            radius: self.radius.clamp(Self::MIN.radius, Self::MAX.radius),
            branches: self.branches.clamp(Self::MIN.branches, Self::MAX.branches),
            spin: self.spin.clamp(Self::MIN.spin, Self::MAX.spin),
        }
    }
}

/// The committed configuration. `generation` increments on every effective
/// commit; downstream systems compare against it instead of watching fields.
#[derive(Resource, Clone, PartialEq)]
pub struct GalaxyConfig {
    pub params: GalaxyParams,
    pub diagnostic_mode: bool,
    pub generation: i32,
}

impl Default for GalaxyConfig {
    fn default() -> Self {
        Self {
            params: GalaxyParams::default(),
            diagnostic_mode: false,
            generation: 1,
        }
    }
}

/// UI-bound pending copy. Sliders mutate this freely mid-drag; nothing
/// regenerates until a commit event arrives.
#[derive(Resource, Clone, Default)]
pub struct GalaxyConfigDraft {
    pub params: GalaxyParams,
    pub diagnostic_mode: bool,
}

/// Fired by the panel once a widget interaction finishes (drag stop or
/// focus loss), never per intermediate drag tick.
#[derive(Event)]
pub struct ConfigCommitted;

pub struct GalaxyConfigPlugin;

impl Plugin for GalaxyConfigPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(GalaxyConfig::default())
            .insert_resource(GalaxyConfigDraft::default())
            .add_event::<ConfigCommitted>()
            .add_systems(Update, apply_commits);
    }
}

pub fn apply_commits(
    mut commits: EventReader<ConfigCommitted>,
    mut draft: ResMut<GalaxyConfigDraft>,
    mut config: ResMut<GalaxyConfig>,
) {
    if commits.is_empty() {
        return;
    }
    commits.clear();

    // Write the clamped values back so the panel reflects what took effect.
    draft.params = draft.params.clamped();

    if draft.params != config.params || draft.diagnostic_mode != config.diagnostic_mode {
        config.params = draft.params;
        config.diagnostic_mode = draft.diagnostic_mode;
        config.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        let mut app = App::new();
        app.insert_resource(GalaxyConfig::default())
            .insert_resource(GalaxyConfigDraft::default())
            .add_event::<ConfigCommitted>()
            .add_systems(Update, apply_commits);
        app
    }

    #[test]
    fn commit_bumps_generation_exactly_once() {
        let mut app = test_app();
        let before = app.world().resource::<GalaxyConfig>().generation;

        app.world_mut()
            .resource_mut::<GalaxyConfigDraft>()
            .params
            .radius = 8.0;
        app.world_mut().send_event(ConfigCommitted);
        app.update();

        let config = app.world().resource::<GalaxyConfig>();
        assert_eq!(config.generation, before + 1);
        assert_eq!(config.params.radius, 8.0);
    }

    #[test]
    fn identical_commit_does_not_bump_generation() {
        let mut app = test_app();
        let before = app.world().resource::<GalaxyConfig>().generation;

        app.world_mut().send_event(ConfigCommitted);
        app.update();

        assert_eq!(
            app.world().resource::<GalaxyConfig>().generation,
            before
        );
    }

    #[test]
    fn draft_edits_without_commit_change_nothing() {
        let mut app = test_app();

        app.world_mut()
            .resource_mut::<GalaxyConfigDraft>()
            .params
            .count = 50_000;
        app.update();

        let config = app.world().resource::<GalaxyConfig>();
        assert_eq!(config.params.count, GalaxyParams::default().count);
        assert_eq!(config.generation, GalaxyConfig::default().generation);
    }

    #[test]
    fn commit_clamps_out_of_range_draft() {
        let mut app = test_app();

        {
            let mut draft = app.world_mut().resource_mut::<GalaxyConfigDraft>();
            draft.params.count = 9_999_999;
            draft.params.branches = 0;
            draft.params.radius = -3.0;
        }
        app.world_mut().send_event(ConfigCommitted);
        app.update();

        let params = app.world().resource::<GalaxyConfig>().params;
        assert_eq!(params.count, GalaxyParams::MAX.count);
        assert_eq!(params.branches, GalaxyParams::MIN.branches);
        assert_eq!(params.radius, GalaxyParams::MIN.radius);

        // the draft mirrors the effective values after the commit
        let draft = app.world().resource::<GalaxyConfigDraft>();
        assert_eq!(draft.params, params);
    }

    #[test]
    fn clamped_pins_every_field() {
        let wild = GalaxyParams {
            count: 0,
            size: 99.0,
            radius: 1e9,
            branches: 1000,
            spin: -80.0,
        };
        let pinned = wild.clamped();
        assert_eq!(pinned.count, GalaxyParams::MIN.count);
        assert_eq!(pinned.size, GalaxyParams::MAX.size);
        assert_eq!(pinned.radius, GalaxyParams::MAX.radius);
        assert_eq!(pinned.branches, GalaxyParams::MAX.branches);
        assert_eq!(pinned.spin, GalaxyParams::MIN.spin);
    }
}
