use crate::ui::components::*;
use bevy::prelude::*;

pub fn handle_button_interactions(
    mut button_query: Query<
        (&Interaction, &mut BackgroundColor, &ButtonConfig),
        (Changed<Interaction>, With<UIButton>),
    >,
) {
    for (interaction, mut bg_color, config) in button_query.iter_mut() {
        match *interaction {
            Interaction::Pressed => {
                *bg_color = BackgroundColor(config.pressed_color);
            }
            Interaction::Hovered => {
                *bg_color = BackgroundColor(config.hover_color);
            }
            Interaction::None => {
                *bg_color = BackgroundColor(config.normal_color);
            }
        }
    }
}

pub fn update_progress_fills(
    bar_query: Query<(&ProgressBar, &Children), Changed<ProgressBar>>,
    mut fill_query: Query<&mut Node, With<ProgressFill>>,
) {
    for (bar, children) in &bar_query {
        for child in children.iter() {
            if let Ok(mut node) = fill_query.get_mut(child) {
                node.width = Val::Percent(bar.value.clamp(0.0, 1.0) * 100.0);
            }
        }
    }
}
