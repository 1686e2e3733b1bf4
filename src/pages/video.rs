use crate::core::navigation::{PageTrigger, Sequencer};
use crate::core::state::SiteState;
use crate::pages::{despawn_with, full_screen_column};
use crate::ui::bundles::*;
use crate::ui::widgets::spawn_button_with_marker;
use crate::ui::*;
use bevy::prelude::*;
use ecogen::constants::VIDEO_REFERENCE;
use ecogen::sequencer::Trigger;

pub struct VideoPlugin;

impl Plugin for VideoPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SiteState::Video), setup_video)
            .add_systems(OnExit(SiteState::Video), despawn_with::<VideoUI>)
            .add_systems(
                Update,
                (reveal_skip_button, handle_skip_button)
                    .chain()
                    .run_if(in_state(SiteState::Video)),
            );
    }
}

#[derive(Component)]
struct VideoUI;

/// Top-right corner where the skip control appears once it unlocks.
#[derive(Component)]
struct SkipSlot;

#[derive(Component)]
struct SkipButton;

fn setup_video(mut commands: Commands) {
    commands.insert_resource(ClearColor(Color::BLACK));

    commands
        .spawn((full_screen_column(), BackgroundColor(Color::BLACK), VideoUI))
        .with_children(|parent| {
            parent
                .spawn((
                    Node {
                        width: Val::Percent(80.0),
                        max_width: Val::Px(1152.0),
                        aspect_ratio: Some(16.0 / 9.0),
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        justify_content: JustifyContent::Center,
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.07, 0.07, 0.07)),
                    BorderRadius::all(Val::Px(8.0)),
                ))
                .with_children(|parent| {
                    parent.spawn(LabelBundle::new(
                        "Pudumjee Papers Sustainable Packaging Video",
                        24.0,
                        Color::WHITE,
                    ));
                    parent.spawn(
                        LabelBundle::new(VIDEO_REFERENCE, 16.0, MUTED)
                            .with_margin(UiRect::top(Val::Px(8.0))),
                    );
                });

            parent
                .spawn((
                    Node {
                        position_type: PositionType::Absolute,
                        bottom: Val::Px(24.0),
                        padding: UiRect::axes(Val::Px(16.0), Val::Px(8.0)),
                        ..default()
                    },
                    BackgroundColor(GLASS),
                    BorderRadius::all(Val::Px(20.0)),
                ))
                .with_children(|parent| {
                    parent.spawn(LabelBundle::new(
                        "Discovering sustainable solutions...",
                        14.0,
                        Color::WHITE,
                    ));
                });

            parent.spawn((
                Node {
                    position_type: PositionType::Absolute,
                    top: Val::Px(24.0),
                    right: Val::Px(24.0),
                    ..default()
                },
                SkipSlot,
            ));
        });
}

/// The skip control does not exist until the sequencer would accept it.
fn reveal_skip_button(
    mut commands: Commands,
    sequencer: Res<Sequencer>,
    slot_q: Query<Entity, With<SkipSlot>>,
    button_q: Query<(), With<SkipButton>>,
) {
    if !sequencer.0.skip_available() || !button_q.is_empty() {
        return;
    }
    let Ok(slot) = slot_q.single() else {
        return;
    };
    commands.entity(slot).with_children(|parent| {
        spawn_button_with_marker(
            parent,
            "Skip",
            CtaButtonBundle::new(110.0, 40.0, GLASS, GLASS_HOVER, GLASS),
            SkipButton,
        );
    });
    debug!("Skip unlocked");
}

fn handle_skip_button(
    button_q: Query<&Interaction, (Changed<Interaction>, With<SkipButton>)>,
    mut triggers: MessageWriter<PageTrigger>,
) {
    for interaction in button_q.iter() {
        if *interaction == Interaction::Pressed {
            triggers.write(PageTrigger(Trigger::Skip));
        }
    }
}
