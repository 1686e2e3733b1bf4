use crate::core::state::SiteState;
use bevy::prelude::*;
use ecogen::sequencer::{Navigator, Page, PageSequencer, Trigger};

/// Page triggers from buttons and passive observers. Everything funnels
/// through this queue so the sequencer sees them one at a time.
#[derive(Message, Debug, Clone, Copy)]
pub struct PageTrigger(pub Trigger);

#[derive(Resource)]
pub struct Sequencer(pub PageSequencer);

/// Current route path. The sequencer writes it, `route_location` turns it
/// into a state transition.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct Location(pub String);

impl Default for Location {
    fn default() -> Self {
        Self(Page::Home.path().to_string())
    }
}

struct LocationNavigator<'a>(&'a mut Location);

impl Navigator for LocationNavigator<'_> {
    fn navigate_to(&mut self, page: Page) {
        self.0 .0 = page.path().to_string();
    }
}

pub(crate) struct NavigationPlugin;

impl Plugin for NavigationPlugin {
    fn build(&self, app: &mut App) {
        let config = ecogen::get_config();
        app.insert_resource(Sequencer(PageSequencer::new(&config.sequence)))
            .init_resource::<Location>()
            .add_message::<PageTrigger>()
            .add_systems(
                Update,
                (
                    tick_sequencer,
                    apply_page_triggers,
                    route_location.run_if(resource_changed::<Location>),
                )
                    .chain(),
            )
            .add_systems(
                Update,
                log_page_transitions.run_if(state_changed::<SiteState>),
            );
    }
}

fn tick_sequencer(time: Res<Time>, mut sequencer: ResMut<Sequencer>) {
    sequencer.0.tick(time.delta());
}

fn apply_page_triggers(
    mut triggers: MessageReader<PageTrigger>,
    mut sequencer: ResMut<Sequencer>,
    mut location: ResMut<Location>,
) {
    if triggers.is_empty() {
        return;
    }
    let mut navigator = LocationNavigator(&mut location);
    for PageTrigger(trigger) in triggers.read() {
        if let Err(e) = sequencer.0.handle(*trigger, &mut navigator) {
            debug!("Page trigger ignored: {e}");
        }
    }
}

fn route_location(
    location: Res<Location>,
    state: Res<State<SiteState>>,
    mut next_state: ResMut<NextState<SiteState>>,
) {
    match resolve_location(&location.0, *state.get()) {
        Ok(Some(target)) => next_state.set(target),
        Ok(None) => {}
        Err(path) => warn!("No page is routed at {path}"),
    }
}

/// `Ok(None)` when the path is already showing.
fn resolve_location(path: &str, current: SiteState) -> Result<Option<SiteState>, &str> {
    let page = Page::from_path(path).ok_or(path)?;
    let target = SiteState::from(page);
    Ok((target != current).then_some(target))
}

fn log_page_transitions(state: Res<State<SiteState>>) {
    let page: Page = (*state.get()).into();
    info!("Showing {}", page.path());
}
