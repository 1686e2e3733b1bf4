use crate::core::navigation::Sequencer;
use crate::core::state::SiteState;
use crate::ui::bundles::*;
use crate::ui::components::ProgressBar;
use crate::ui::widgets::spawn_progress_bar;
use crate::ui::*;
use bevy::prelude::*;

pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SiteState::Home), spawn_loading_screen)
            .add_systems(OnExit(SiteState::Home), despawn_loading_screen)
            .add_systems(
                Update,
                update_loading_screen.run_if(in_state(SiteState::Home)),
            );
    }
}

#[derive(Component)]
struct LoadingScreen;

#[derive(Component)]
struct LoadingProgress;

fn spawn_loading_screen(mut commands: Commands, sequencer: Res<Sequencer>) {
    if !sequencer.0.is_loading() {
        return;
    }

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::Center,
                justify_content: JustifyContent::Center,
                ..default()
            },
            BackgroundColor(PAPER),
            GlobalZIndex(100),
            LoadingScreen,
        ))
        .with_children(|parent| {
            parent.spawn(
                LabelBundle::new("Growing Sustainability", 28.0, DEEP_GREEN)
                    .with_margin(UiRect::bottom(Val::Px(12.0))),
            );
            spawn_progress_bar(
                parent,
                ProgressTrackBundle::new(
                    Val::Px(256.0),
                    8.0,
                    Color::srgb(0.863, 0.988, 0.906),
                    sequencer.0.loading_progress(),
                ),
                GREEN,
                LoadingProgress,
            );
        });
}

fn update_loading_screen(
    mut commands: Commands,
    sequencer: Res<Sequencer>,
    screen_q: Query<Entity, With<LoadingScreen>>,
    mut progress_q: Query<&mut ProgressBar, With<LoadingProgress>>,
) {
    if sequencer.0.is_loading() {
        for mut bar in progress_q.iter_mut() {
            bar.value = sequencer.0.loading_progress();
        }
        return;
    }
    for entity in screen_q.iter() {
        debug!("Loading finished");
        commands.entity(entity).despawn();
    }
}

fn despawn_loading_screen(mut commands: Commands, screen_q: Query<Entity, With<LoadingScreen>>) {
    for entity in screen_q.iter() {
        commands.entity(entity).despawn();
    }
}
