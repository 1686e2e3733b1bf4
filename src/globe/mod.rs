pub mod components;
pub mod systems;

use crate::core::state::SiteState;
use crate::globe::systems::*;
use bevy::prelude::*;

pub struct GlobePlugin;

impl Plugin for GlobePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnExit(SiteState::Home), despawn_globes)
            .add_systems(OnExit(SiteState::InteractiveGlobe), despawn_globes)
            .add_systems(
                Update,
                (animate_globe, distort_globe_surface).run_if(
                    in_state(SiteState::Home).or(in_state(SiteState::InteractiveGlobe)),
                ),
            )
            .add_systems(
                Update,
                drag_rotate_globe.run_if(in_state(SiteState::InteractiveGlobe)),
            );
    }
}
