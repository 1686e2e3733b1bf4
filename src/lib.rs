mod core;
mod globe;
mod helpers;
mod loading;
mod pages;
mod ui;

use crate::core::camera::CameraPlugin;
use crate::core::navigation::NavigationPlugin;
use crate::core::state::SiteState;
use crate::globe::GlobePlugin;
use crate::loading::LoadingPlugin;
use crate::pages::PagesPlugin;
use crate::ui::UIPlugin;
use bevy::app::App;
#[cfg(debug_assertions)]
use bevy::diagnostic::LogDiagnosticsPlugin;
use bevy::prelude::*;

pub struct SitePlugin;

impl Plugin for SitePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<SiteState>().add_plugins((
            NavigationPlugin,
            CameraPlugin,
            LoadingPlugin,
            GlobePlugin,
            UIPlugin,
            PagesPlugin,
        ));

        #[cfg(debug_assertions)]
        {
            app.add_plugins(LogDiagnosticsPlugin::default());
        }
    }
}
