use bevy::prelude::States;
use ecogen::sequencer::Page;

/// Bevy-side mirror of [`Page`]. Only `route_location` writes `NextState<SiteState>`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub(crate) enum SiteState {
    #[default]
    Home,
    Video,
    InteractiveGlobe,
    Quiz,
}

impl From<Page> for SiteState {
    fn from(page: Page) -> Self {
        match page {
            Page::Home => SiteState::Home,
            Page::Video => SiteState::Video,
            Page::InteractiveGlobe => SiteState::InteractiveGlobe,
            Page::Quiz => SiteState::Quiz,
        }
    }
}

impl From<SiteState> for Page {
    fn from(state: SiteState) -> Self {
        match state {
            SiteState::Home => Page::Home,
            SiteState::Video => Page::Video,
            SiteState::InteractiveGlobe => Page::InteractiveGlobe,
            SiteState::Quiz => Page::Quiz,
        }
    }
}
