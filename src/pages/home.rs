use crate::core::navigation::PageTrigger;
use crate::core::state::SiteState;
use crate::globe::systems::{reload_globe_config, spawn_globe};
use crate::pages::{despawn_with, full_screen_column};
use crate::ui::bundles::*;
use crate::ui::widgets::spawn_button_with_marker;
use crate::ui::*;
use bevy::prelude::*;
use ecogen::sequencer::Trigger;

pub struct HomePlugin;

impl Plugin for HomePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SiteState::Home), setup_home)
            .add_systems(OnExit(SiteState::Home), despawn_with::<HomeUI>)
            .add_systems(
                Update,
                handle_start_button.run_if(in_state(SiteState::Home)),
            );
    }
}

#[derive(Component)]
struct HomeUI;

#[derive(Component)]
struct StartJourneyButton;

fn setup_home(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
) {
    commands.insert_resource(ClearColor(PAPER));
    let params = reload_globe_config().home;
    spawn_globe(&mut commands, &mut meshes, &mut materials, &mut images, params);

    commands
        .spawn((full_screen_column(), HomeUI))
        .with_children(|parent| {
            parent.spawn(
                LabelBundle::new("Pudumjee Papers", 26.0, DEEP_GREEN)
                    .with_margin(UiRect::bottom(Val::Px(32.0))),
            );
            parent.spawn(
                LabelBundle::new("Discover the Future of Sustainable Packaging", 56.0, DEEP_GREEN)
                    .with_max_width(900.0)
                    .with_margin(UiRect::bottom(Val::Px(24.0))),
            );
            parent.spawn(
                LabelBundle::new(
                    "Watch how Pudumjee Papers is revolutionizing the industry with innovative paper-based solutions",
                    22.0,
                    Color::srgb(0.216, 0.255, 0.318),
                )
                .with_max_width(760.0)
                .with_margin(UiRect::bottom(Val::Px(48.0))),
            );
            spawn_button_with_marker(
                parent,
                "Start Journey",
                CtaButtonBundle::new(260.0, 60.0, GREEN, GREEN_HOVER, GREEN_PRESSED),
                StartJourneyButton,
            );
        });
}

fn handle_start_button(
    button_q: Query<&Interaction, (Changed<Interaction>, With<StartJourneyButton>)>,
    mut triggers: MessageWriter<PageTrigger>,
) {
    for interaction in button_q.iter() {
        if *interaction == Interaction::Pressed {
            triggers.write(PageTrigger(Trigger::StartJourney));
        }
    }
}
