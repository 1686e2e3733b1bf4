use crate::config::SequenceConfig;
use crate::constants::{SCROLL_THRESHOLD, SKIP_DELAY_SECS};
use crate::error::{EcoError, Result};
use log::{debug, info, warn};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Video,
    InteractiveGlobe,
    Quiz,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Video, Page::InteractiveGlobe, Page::Quiz];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::Video => "/video",
            Page::InteractiveGlobe => "/globe",
            Page::Quiz => "/quiz",
        }
    }

    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let normalized = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|page| page.path() == normalized)
    }

    pub fn next(self) -> Option<Page> {
        match self {
            Page::Home => Some(Page::Video),
            Page::Video => Some(Page::InteractiveGlobe),
            Page::InteractiveGlobe => Some(Page::Quiz),
            Page::Quiz => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Trigger {
    /// "Start Journey" on the landing page
    StartJourney,
    /// "Skip" over the video
    Skip,
    /// "Calculate My Impact" on the globe page
    CalculateImpact,
    /// Passive scroll observer, carrying the scrolled fraction of the page
    Scrolled(f32),
}

/// Router effect. The sequencer calls it once per accepted transition.
pub trait Navigator {
    fn navigate_to(&mut self, page: Page);
}

impl Navigator for Vec<Page> {
    fn navigate_to(&mut self, page: Page) {
        self.push(page);
    }
}

/// Scrolled fraction of a document, 0 when the document fits the viewport.
/// Degenerate or non-finite input reads as "not scrolled".
pub fn scroll_fraction(scroll_y: f32, scroll_height: f32, viewport_height: f32) -> f32 {
    let range = scroll_height - viewport_height;
    if !range.is_finite() || range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    let fraction = scroll_y / range;
    if fraction.is_finite() {
        fraction.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn secs(value: f32) -> Duration {
    Duration::try_from_secs_f32(value).unwrap_or(Duration::ZERO)
}

/// Linear page flow `Home -> Video -> InteractiveGlobe -> Quiz`.
///
/// Page-local timers live here and restart on every transition, so a delay
/// armed on a page that has been left can never fire.
#[derive(Debug, Clone)]
pub struct PageSequencer {
    page: Page,
    elapsed: Duration,
    loading_delay: Duration,
    skip_delay: Duration,
    scroll_threshold: f32,
    globe_exit_fired: bool,
}

impl PageSequencer {
    pub fn new(config: &SequenceConfig) -> Self {
        Self {
            page: Page::Home,
            elapsed: Duration::ZERO,
            loading_delay: secs(config.loading_delay_secs),
            skip_delay: secs(SKIP_DELAY_SECS),
            scroll_threshold: SCROLL_THRESHOLD,
            globe_exit_fired: false,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    pub fn is_loading(&self) -> bool {
        self.page == Page::Home && self.elapsed < self.loading_delay
    }

    pub fn loading_progress(&self) -> f32 {
        if self.page != Page::Home || self.loading_delay.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.loading_delay.as_secs_f32()).min(1.0)
    }

    pub fn skip_available(&self) -> bool {
        self.page == Page::Video && self.elapsed >= self.skip_delay
    }

    /// Applies a trigger. Returns the page navigated to, or `None` when a
    /// passive trigger had nothing to do.
    pub fn handle<N: Navigator>(&mut self, trigger: Trigger, nav: &mut N) -> Result<Option<Page>> {
        match (self.page, trigger) {
            (Page::Home, Trigger::StartJourney) => {
                if self.is_loading() {
                    return Err(self.reject(trigger, "still loading"));
                }
            }
            (Page::Video, Trigger::Skip) => {
                if !self.skip_available() {
                    return Err(self.reject(trigger, "skip is not available yet"));
                }
            }
            (Page::InteractiveGlobe, Trigger::CalculateImpact) => {}
            (Page::InteractiveGlobe, Trigger::Scrolled(fraction)) => {
                // NaN never exceeds the threshold
                if !(fraction > self.scroll_threshold) {
                    return Ok(None);
                }
            }
            (_, Trigger::Scrolled(_)) => return Ok(None),
            _ => return Err(self.reject(trigger, "not offered on this page")),
        }
        let Some(target) = self.page.next() else {
            return Err(self.reject(trigger, "last page"));
        };

        if self.page == Page::InteractiveGlobe {
            if self.globe_exit_fired {
                debug!("Ignoring {trigger:?}, globe page already left");
                return Ok(None);
            }
            self.globe_exit_fired = true;
        }

        info!("{:?} -> {:?} via {trigger:?}", self.page, target);
        self.page = target;
        self.elapsed = Duration::ZERO;
        nav.navigate_to(target);
        Ok(Some(target))
    }

    fn reject(&self, trigger: Trigger, reason: &'static str) -> EcoError {
        warn!("Rejected {trigger:?} on {:?}: {reason}", self.page);
        EcoError::TransitionRejected {
            page: self.page,
            trigger,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EcoGenConfig;
    use rstest::rstest;

    fn sequencer() -> PageSequencer {
        PageSequencer::new(&EcoGenConfig::default().sequence)
    }

    fn on_page(page: Page) -> (PageSequencer, Vec<Page>) {
        let mut seq = sequencer();
        let mut nav = Vec::new();
        seq.tick(Duration::from_secs(3));
        if page == Page::Home {
            return (seq, nav);
        }
        seq.handle(Trigger::StartJourney, &mut nav).unwrap();
        if page == Page::Video {
            return (seq, nav);
        }
        seq.tick(Duration::from_secs(3));
        seq.handle(Trigger::Skip, &mut nav).unwrap();
        if page == Page::InteractiveGlobe {
            return (seq, nav);
        }
        seq.handle(Trigger::CalculateImpact, &mut nav).unwrap();
        (seq, nav)
    }

    #[test]
    fn walks_the_whole_flow() {
        let (seq, nav) = on_page(Page::Quiz);
        assert_eq!(seq.page(), Page::Quiz);
        assert_eq!(nav, vec![Page::Video, Page::InteractiveGlobe, Page::Quiz]);
    }

    #[test]
    fn scroll_past_threshold_fires_once() {
        let (mut seq, mut nav) = on_page(Page::InteractiveGlobe);
        nav.clear();

        let results: Vec<_> = [0.5, 0.71, 0.75, 0.9, 0.71]
            .into_iter()
            .map(|f| seq.handle(Trigger::Scrolled(f), &mut nav).unwrap())
            .collect();

        assert_eq!(results, vec![None, Some(Page::Quiz), None, None, None]);
        assert_eq!(nav, vec![Page::Quiz]);
    }

    #[test]
    fn threshold_itself_does_not_fire() {
        let (mut seq, mut nav) = on_page(Page::InteractiveGlobe);
        assert_eq!(seq.handle(Trigger::Scrolled(0.7), &mut nav).unwrap(), None);
        assert_eq!(seq.page(), Page::InteractiveGlobe);
    }

    #[test]
    fn button_and_scroll_do_not_double_fire() {
        let (mut seq, mut nav) = on_page(Page::InteractiveGlobe);
        nav.clear();
        seq.handle(Trigger::CalculateImpact, &mut nav).unwrap();
        assert_eq!(seq.handle(Trigger::Scrolled(0.95), &mut nav).unwrap(), None);
        assert_eq!(nav, vec![Page::Quiz]);
    }

    #[rstest]
    #[case(0, false)]
    #[case(1_500, false)]
    #[case(2_999, false)]
    #[case(3_000, true)]
    #[case(10_000, true)]
    fn skip_unlocks_after_delay(#[case] millis: u64, #[case] accepted: bool) {
        let (mut seq, mut nav) = on_page(Page::Video);
        seq.tick(Duration::from_millis(millis));

        assert_eq!(seq.skip_available(), accepted);
        let result = seq.handle(Trigger::Skip, &mut nav);
        if accepted {
            assert_eq!(result.unwrap(), Some(Page::InteractiveGlobe));
        } else {
            assert!(matches!(
                result,
                Err(EcoError::TransitionRejected { page: Page::Video, .. })
            ));
            assert_eq!(seq.page(), Page::Video);
        }
    }

    #[test]
    fn time_on_previous_page_does_not_unlock_skip() {
        let mut seq = sequencer();
        let mut nav = Vec::new();
        seq.tick(Duration::from_secs(60));
        seq.handle(Trigger::StartJourney, &mut nav).unwrap();

        assert!(!seq.skip_available());
        seq.tick(Duration::from_millis(2_999));
        assert!(!seq.skip_available());
    }

    #[test]
    fn start_journey_waits_for_loading() {
        let mut seq = sequencer();
        let mut nav = Vec::new();
        assert!(seq.is_loading());
        assert!(seq.handle(Trigger::StartJourney, &mut nav).is_err());

        seq.tick(Duration::from_millis(1_500));
        assert!((seq.loading_progress() - 0.5).abs() < 1e-6);

        seq.tick(Duration::from_millis(1_500));
        assert!(!seq.is_loading());
        assert_eq!(seq.handle(Trigger::StartJourney, &mut nav).unwrap(), Some(Page::Video));
    }

    #[rstest]
    #[case(Page::Home, Trigger::Skip)]
    #[case(Page::Home, Trigger::CalculateImpact)]
    #[case(Page::Video, Trigger::StartJourney)]
    #[case(Page::InteractiveGlobe, Trigger::Skip)]
    #[case(Page::Quiz, Trigger::CalculateImpact)]
    #[case(Page::Quiz, Trigger::StartJourney)]
    fn rejects_triggers_from_other_pages(#[case] page: Page, #[case] trigger: Trigger) {
        let (mut seq, mut nav) = on_page(page);
        let before = nav.len();
        assert!(seq.handle(trigger, &mut nav).is_err());
        assert_eq!(seq.page(), page);
        assert_eq!(nav.len(), before);
    }

    #[rstest]
    #[case(f32::NAN)]
    #[case(f32::NEG_INFINITY)]
    #[case(-0.5)]
    fn nan_or_negative_scroll_stays_on_globe(#[case] fraction: f32) {
        let (mut seq, mut nav) = on_page(Page::InteractiveGlobe);
        nav.clear();
        assert_eq!(seq.handle(Trigger::Scrolled(fraction), &mut nav).unwrap(), None);
        assert!(nav.is_empty());
        assert_eq!(seq.page(), Page::InteractiveGlobe);
    }

    #[test]
    fn nan_document_height_does_not_open_the_quiz() {
        let (mut seq, mut nav) = on_page(Page::InteractiveGlobe);
        let fraction = scroll_fraction(10.0, f32::NAN, 400.0);
        assert_eq!(fraction, 0.0);
        assert_eq!(seq.handle(Trigger::Scrolled(fraction), &mut nav).unwrap(), None);
        assert_eq!(seq.page(), Page::InteractiveGlobe);
    }

    #[test]
    fn pages_chain_to_the_quiz() {
        let chain: Vec<_> = std::iter::successors(Some(Page::Home), |p| p.next()).collect();
        assert_eq!(chain, Page::ALL.to_vec());
    }

    #[rstest]
    #[case(Page::Home)]
    #[case(Page::Video)]
    #[case(Page::Quiz)]
    fn scroll_elsewhere_is_ignored(#[case] page: Page) {
        let (mut seq, mut nav) = on_page(page);
        assert_eq!(seq.handle(Trigger::Scrolled(0.99), &mut nav).unwrap(), None);
        assert_eq!(seq.page(), page);
    }

    #[rstest]
    #[case(0.0, 1000.0, 400.0, 0.0)]
    #[case(300.0, 1000.0, 400.0, 0.5)]
    #[case(600.0, 1000.0, 400.0, 1.0)]
    #[case(900.0, 1000.0, 400.0, 1.0)]
    #[case(50.0, 400.0, 400.0, 0.0)]
    #[case(f32::NAN, 1000.0, 400.0, 0.0)]
    #[case(300.0, f32::NAN, 400.0, 0.0)]
    #[case(300.0, 1000.0, f32::NAN, 0.0)]
    #[case(300.0, f32::INFINITY, 400.0, 0.0)]
    #[case(f32::INFINITY, 1000.0, 400.0, 0.0)]
    fn computes_scroll_fraction(
        #[case] scroll_y: f32,
        #[case] scroll_height: f32,
        #[case] viewport: f32,
        #[case] expected: f32,
    ) {
        assert!((scroll_fraction(scroll_y, scroll_height, viewport) - expected).abs() < 1e-6);
    }

    #[rstest]
    #[case("/", Some(Page::Home))]
    #[case("", Some(Page::Home))]
    #[case("/video", Some(Page::Video))]
    #[case("/globe/", Some(Page::InteractiveGlobe))]
    #[case("/quiz", Some(Page::Quiz))]
    #[case("/pricing", None)]
    fn resolves_paths(#[case] path: &str, #[case] expected: Option<Page>) {
        assert_eq!(Page::from_path(path), expected);
    }
}
