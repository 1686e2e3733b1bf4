// disable console on windows for release builds
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use bevy::DefaultPlugins;
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowResolution};
use bevy::winit::WinitWindows;
use ecogen::texture::TextureGenerator;
use ecoglobe::SitePlugin;
use image::imageops::{self, FilterType};
use winit::window::Icon;

const ICON_SIZE: u32 = 64;

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.941, 0.992, 0.957)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "EcoGlobe".into(),
                resolution: WindowResolution::new(1500, 900),
                present_mode: PresentMode::AutoVsync,
                resize_constraints: WindowResizeConstraints {
                    min_width: 800.0,
                    min_height: 600.0,
                    max_width: 100000.0,
                    max_height: 100000.0,
                },
                ..default()
            }),
            ..default()
        }))
        .add_plugins(SitePlugin)
        .add_systems(Startup, set_window_icon)
        .run();
}

/// Uses a freshly generated globe texture as the window icon.
fn set_window_icon(
    windows: Option<NonSend<WinitWindows>>,
    primary_window: Query<Entity, With<PrimaryWindow>>,
) {
    let Some(windows) = windows else { return; };
    let Ok(primary_entity) = primary_window.single() else {
        return;
    };
    let Some(primary) = windows.get_window(primary_entity) else {
        return;
    };
    let texture = match TextureGenerator::from_config().generate() {
        Ok(texture) => texture,
        Err(e) => {
            warn!("No window icon: {e}");
            return;
        }
    };
    let icon = imageops::resize(&texture.image, ICON_SIZE, ICON_SIZE, FilterType::Triangle);
    match Icon::from_rgba(icon.into_raw(), ICON_SIZE, ICON_SIZE) {
        Ok(icon) => primary.set_window_icon(Some(icon)),
        Err(e) => warn!("No window icon: {e}"),
    }
}
