pub mod bundles;
pub mod components;
pub mod systems;
pub mod widgets;

use bevy::prelude::*;
use systems::*;

pub const GREEN: Color = Color::srgb(0.086, 0.639, 0.290);
pub const GREEN_HOVER: Color = Color::srgb(0.082, 0.502, 0.239);
pub const GREEN_PRESSED: Color = Color::srgb(0.086, 0.396, 0.204);
pub const BLUE: Color = Color::srgb(0.145, 0.388, 0.922);
pub const DEEP_GREEN: Color = Color::srgb(0.086, 0.396, 0.204);
pub const SLATE: Color = Color::srgb(0.059, 0.090, 0.165);
pub const MUTED: Color = Color::srgb(0.612, 0.639, 0.686);
pub const PAPER: Color = Color::srgb(0.941, 0.992, 0.957);
pub const GLASS: Color = Color::srgba(1.0, 1.0, 1.0, 0.2);
pub const GLASS_HOVER: Color = Color::srgba(1.0, 1.0, 1.0, 0.3);

pub struct UIPlugin;

impl Plugin for UIPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, (handle_button_interactions, update_progress_fills));
    }
}
