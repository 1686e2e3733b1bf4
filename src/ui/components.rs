use bevy::prelude::*;

#[derive(Component)]
pub struct UIButton;

#[derive(Component)]
pub struct ButtonConfig {
    pub normal_color: Color,
    pub hover_color: Color,
    pub pressed_color: Color,
}

/// Horizontal bar filled to `value` in `[0, 1]`.
#[derive(Component)]
pub struct ProgressBar {
    pub value: f32,
}

#[derive(Component)]
pub struct ProgressFill;
