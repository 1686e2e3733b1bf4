use crate::core::camera::components::OrbitCamera;
use crate::core::camera::logic::{SCROLL_STEP, split_wheel};
use crate::core::navigation::PageTrigger;
use crate::core::state::SiteState;
use crate::globe::systems::{reload_globe_config, spawn_globe};
use crate::pages::{despawn_with, full_screen_column};
use crate::ui::bundles::*;
use crate::ui::widgets::spawn_button_with_marker;
use crate::ui::*;
use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use ecogen::sequencer::{Trigger, scroll_fraction};

pub struct InteractivePlugin;

impl Plugin for InteractivePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(SiteState::InteractiveGlobe), setup_interactive)
            .add_systems(
                OnExit(SiteState::InteractiveGlobe),
                (despawn_with::<InteractiveUI>, remove_page_scroll),
            )
            .add_systems(
                Update,
                (
                    handle_calculate_button,
                    handle_wheel,
                    apply_page_scroll.run_if(resource_exists_and_changed::<PageScroll>),
                )
                    .run_if(in_state(SiteState::InteractiveGlobe)),
            );
    }
}

/// Virtual document of the globe page: one screen of content followed by one
/// screen of scroll trigger area.
#[derive(Resource, Debug, Default)]
pub struct PageScroll {
    pub offset: f32,
    pub viewport: f32,
}

impl PageScroll {
    pub fn content_height(&self) -> f32 {
        self.viewport * 2.0
    }

    pub fn fraction(&self) -> f32 {
        scroll_fraction(self.offset, self.content_height(), self.viewport)
    }
}

#[derive(Component)]
struct InteractiveUI;

#[derive(Component)]
struct ScrollContent;

#[derive(Component)]
struct CalculateImpactButton;

fn setup_interactive(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    window_q: Query<&Window, With<PrimaryWindow>>,
) {
    commands.insert_resource(ClearColor(SLATE));
    let viewport = window_q.single().map(|w| w.height()).unwrap_or(900.0);
    commands.insert_resource(PageScroll {
        offset: 0.0,
        viewport,
    });

    let params = reload_globe_config().interactive;
    spawn_globe(&mut commands, &mut meshes, &mut materials, &mut images, params);

    commands
        .spawn((full_screen_column(), InteractiveUI, ScrollContent))
        .with_children(|parent| {
            parent.spawn(LabelBundle::new("Explore Our", 56.0, Color::WHITE));
            parent.spawn(
                LabelBundle::new("Sustainable Impact", 56.0, Color::srgb(0.290, 0.871, 0.502))
                    .with_margin(UiRect::bottom(Val::Px(24.0))),
            );
            parent.spawn(
                LabelBundle::new(
                    "Interact with our planet to discover how sustainable packaging solutions are transforming industries worldwide",
                    20.0,
                    Color::srgb(0.820, 0.835, 0.859),
                )
                .with_max_width(680.0)
                .with_margin(UiRect::bottom(Val::Px(48.0))),
            );
            spawn_button_with_marker(
                parent,
                "Calculate My Impact",
                CtaButtonBundle::new(300.0, 60.0, GREEN, GREEN_HOVER, GREEN_PRESSED),
                CalculateImpactButton,
            );
            parent.spawn(
                LabelBundle::new(
                    "Drag to rotate • Scroll to zoom • Continue scrolling to proceed",
                    14.0,
                    MUTED,
                )
                .with_margin(UiRect::top(Val::Px(64.0))),
            );
        });
}

fn remove_page_scroll(mut commands: Commands) {
    commands.remove_resource::<PageScroll>();
}

fn handle_calculate_button(
    button_q: Query<&Interaction, (Changed<Interaction>, With<CalculateImpactButton>)>,
    mut triggers: MessageWriter<PageTrigger>,
) {
    for interaction in button_q.iter() {
        if *interaction == Interaction::Pressed {
            triggers.write(PageTrigger(Trigger::CalculateImpact));
        }
    }
}

/// Wheel input zooms the camera first and scrolls the page once the camera
/// is fully zoomed out. Every scroll move reports the scrolled fraction.
fn handle_wheel(
    mut mouse_wheel: MessageReader<MouseWheel>,
    mut camera_q: Query<&mut OrbitCamera>,
    mut scroll: ResMut<PageScroll>,
    mut triggers: MessageWriter<PageTrigger>,
) {
    let lines: f32 = mouse_wheel
        .read()
        .map(|wheel| match wheel.unit {
            MouseScrollUnit::Line => wheel.y,
            MouseScrollUnit::Pixel => wheel.y / SCROLL_STEP,
        })
        .sum();
    if lines == 0.0 {
        return;
    }
    let Ok(mut orbit) = camera_q.single_mut() else {
        return;
    };
    if !orbit.zoom_enabled {
        return;
    }

    let split = split_wheel(
        lines,
        orbit.target_distance,
        orbit.min_distance,
        orbit.max_distance,
        scroll.offset,
    );
    orbit.target_distance += split.zoom_delta;

    if split.scroll_delta != 0.0 {
        let max_offset = scroll.content_height() - scroll.viewport;
        scroll.offset = (scroll.offset + split.scroll_delta).clamp(0.0, max_offset);
        triggers.write(PageTrigger(Trigger::Scrolled(scroll.fraction())));
    }
}

fn apply_page_scroll(scroll: Res<PageScroll>, mut content_q: Query<&mut Node, With<ScrollContent>>) {
    for mut node in content_q.iter_mut() {
        node.top = Val::Px(-scroll.offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(450.0, 0.5)]
    #[case(900.0, 1.0)]
    fn fraction_spans_one_viewport(#[case] offset: f32, #[case] expected: f32) {
        let scroll = PageScroll {
            offset,
            viewport: 900.0,
        };
        assert!((scroll.fraction() - expected).abs() < 1e-6);
    }

    #[test]
    fn threshold_needs_most_of_the_trigger_area() {
        let scroll = PageScroll {
            offset: 640.0,
            viewport: 900.0,
        };
        assert!(scroll.fraction() > 0.7);
    }
}
