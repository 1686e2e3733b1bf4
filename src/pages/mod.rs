pub mod home;
pub mod interactive;
pub mod quiz;
pub mod video;

use bevy::prelude::*;

pub struct PagesPlugin;

impl Plugin for PagesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            home::HomePlugin,
            video::VideoPlugin,
            interactive::InteractivePlugin,
            quiz::QuizPlugin,
        ));
    }
}

/// Page cleanup: removes every entity tagged with `T`, children included.
pub(crate) fn despawn_with<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

pub(crate) fn full_screen_column() -> Node {
    Node {
        width: Val::Percent(100.0),
        height: Val::Percent(100.0),
        position_type: PositionType::Absolute,
        flex_direction: FlexDirection::Column,
        align_items: AlignItems::Center,
        justify_content: JustifyContent::Center,
        padding: UiRect::horizontal(Val::Px(16.0)),
        ..default()
    }
}
