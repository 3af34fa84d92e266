use crate::prelude::*;
use bevy::{
    input::mouse::{MouseMotion, MouseScrollUnit, MouseWheel},
    prelude::*,
};
use std::f32::consts::FRAC_PI_4;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_camera)
            .add_systems(PostUpdate, camera_control_system);
    }
}

fn spawn_camera(mut commands: Commands, mut clearcolor: ResMut<ClearColor>) {
    *clearcolor = ClearColor(Color::BLACK);
    commands.spawn((
        Camera3d { ..default() },
        Transform::from_xyz(3.0, 3.0, 3.0).looking_at(Vec3::ZERO, Vec3::Y),
        CameraMain::default(),
    ));
}

#[derive(Component, Clone)]
pub struct CameraMain {
    yaw: f32,
    pitch: f32,
    zoom: f32,
    smooth_zoom_buffer: f32,
}

impl Default for CameraMain {
    fn default() -> Self {
        Self {
            yaw: FRAC_PI_4,
            pitch: 0.62,
            zoom: 0.5,
            smooth_zoom_buffer: 0.0,
        }
    }
}

pub fn camera_control_system(
    mut query: Query<(&mut Transform, &mut CameraMain)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    galaxy_config: Res<GalaxyConfig>,
    mut motion_evr: EventReader<MouseMotion>,
    mut scroll_evr: EventReader<MouseWheel>,
) {
    let Ok((mut transform, mut camera_main)) = query.single_mut() else {
        return;
    };

    let mut drag_delta = Vec2::ZERO;
    for ev in motion_evr.read() {
        drag_delta += ev.delta;
    }
    if mouse_buttons.pressed(MouseButton::Left) {
        camera_main.yaw -= drag_delta.x * 0.005;
        // keep the orbit away from the poles
        camera_main.pitch = (camera_main.pitch + drag_delta.y * 0.005).clamp(-1.54, 1.54);
    }

    // scroll delta is cached to a buffer
    // buffer is converted to actual zoom over time for a smooth zooming effect
    for ev in scroll_evr.read() {
        match ev.unit {
            MouseScrollUnit::Line => {
                camera_main.smooth_zoom_buffer += ev.y * 0.05;
            }
            MouseScrollUnit::Pixel => {
                camera_main.smooth_zoom_buffer += ev.y * 0.05;
            }
        }
    }

    let smooth_zoom_min = 0.001f32;
    let smooth_zoom_factor = 0.2f32;

    let smooth_zoom_amount = if camera_main.smooth_zoom_buffer < 0.0 {
        f32::min(
            camera_main.smooth_zoom_buffer * smooth_zoom_factor,
            (-smooth_zoom_min).max(camera_main.smooth_zoom_buffer),
        )
    } else {
        f32::max(
            camera_main.smooth_zoom_buffer * smooth_zoom_factor,
            smooth_zoom_min.min(camera_main.smooth_zoom_buffer),
        )
    };
    camera_main.zoom -= smooth_zoom_amount;
    camera_main.smooth_zoom_buffer -= smooth_zoom_amount;
    camera_main.zoom = camera_main.zoom.clamp(0., 1.);

    // Orbit distance tracks the committed galaxy radius so the whole disk
    // stays framed across regenerations.
    let distance = (camera_main.zoom * 0.85 + 0.15) * galaxy_config.params.radius * 2.5;
    let orbit = Quat::from_euler(EulerRot::YXZ, camera_main.yaw, -camera_main.pitch, 0.0);
    transform.translation = orbit * Vec3::new(0.0, 0.0, distance);
    transform.look_at(Vec3::ZERO, Vec3::Y);
}
