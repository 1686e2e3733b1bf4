use crate::ui::bundles::*;
use crate::ui::components::*;
use bevy::ecs::relationship::RelatedSpawnerCommands;
use bevy::prelude::*;

pub fn spawn_button_with_marker<T: Component>(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    text: &str,
    button: CtaButtonBundle,
    marker: T,
) -> Entity {
    parent
        .spawn((button, marker))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new(text, 20.0, Color::WHITE));
        })
        .id()
}

/// Track with a fill child whose width follows [`ProgressBar::value`].
pub fn spawn_progress_bar<T: Component>(
    parent: &mut RelatedSpawnerCommands<ChildOf>,
    track: ProgressTrackBundle,
    fill_color: Color,
    marker: T,
) -> Entity {
    let value = track.progress.value;
    let radius = track.border_radius;
    parent
        .spawn((track, marker))
        .with_children(|parent| {
            parent.spawn((
                Node {
                    width: Val::Percent(value.clamp(0.0, 1.0) * 100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(fill_color),
                radius,
                ProgressFill,
            ));
        })
        .id()
}
