/// Camera distance change per wheel line
pub const ZOOM_STEP: f32 = 0.5;
/// Page scroll in logical pixels per wheel line
pub const SCROLL_STEP: f32 = 60.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WheelSplit {
    /// Change of the target camera distance, positive moves away
    pub zoom_delta: f32,
    /// Change of the page scroll offset, positive scrolls down
    pub scroll_delta: f32,
}

/// Splits wheel travel between zoom and page scroll.
///
/// Wheel down (`wheel_y < 0`) zooms out until `max` and scrolls the page with
/// whatever is left. Wheel up first scrolls the page back to the top, then
/// zooms in toward `min`.
pub fn split_wheel(
    wheel_y: f32,
    target_distance: f32,
    min: f32,
    max: f32,
    scroll_offset: f32,
) -> WheelSplit {
    if wheel_y < 0.0 {
        let wanted = -wheel_y * ZOOM_STEP;
        let zoom = wanted.min((max - target_distance).max(0.0));
        let leftover_lines = (wanted - zoom) / ZOOM_STEP;
        WheelSplit {
            zoom_delta: zoom,
            scroll_delta: leftover_lines * SCROLL_STEP,
        }
    } else if wheel_y > 0.0 {
        let scroll_back = (wheel_y * SCROLL_STEP).min(scroll_offset.max(0.0));
        let leftover_lines = wheel_y - scroll_back / SCROLL_STEP;
        let zoom = (leftover_lines * ZOOM_STEP).min((target_distance - min).max(0.0));
        WheelSplit {
            zoom_delta: -zoom,
            scroll_delta: -scroll_back,
        }
    } else {
        WheelSplit {
            zoom_delta: 0.0,
            scroll_delta: 0.0,
        }
    }
}

/// Frame-rate independent exponential approach, where `damping` is the
/// fraction of the gap closed per 60 Hz frame.
pub fn damp_distance(current: f32, target: f32, damping: f32, delta_time: f32) -> f32 {
    let factor = 1.0 - (1.0 - damping.clamp(0.0, 1.0)).powf(delta_time * 60.0);
    let next = current + (target - current) * factor;
    if (target - next).abs() < 1e-4 { target } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(-1.0, 4.0, 0.5, 0.0)] // room left, pure zoom
    #[case(-3.0, 7.0, 1.0, 60.0)] // hits max, one line scrolls
    #[case(-2.0, 8.0, 0.0, 120.0)] // already at max
    #[case(1.0, 5.0, -0.5, 0.0)] // nothing scrolled, zoom in
    #[case(0.0, 5.0, 0.0, 0.0)]
    fn splits_without_page_offset(
        #[case] wheel: f32,
        #[case] distance: f32,
        #[case] zoom: f32,
        #[case] scroll: f32,
    ) {
        let split = split_wheel(wheel, distance, 3.0, 8.0, 0.0);
        assert!((split.zoom_delta - zoom).abs() < 1e-5, "zoom {}", split.zoom_delta);
        assert!((split.scroll_delta - scroll).abs() < 1e-3, "scroll {}", split.scroll_delta);
    }

    #[test]
    fn wheel_up_scrolls_back_before_zooming() {
        let split = split_wheel(3.0, 8.0, 3.0, 8.0, 120.0);
        assert!((split.scroll_delta + 120.0).abs() < 1e-3);
        assert!((split.zoom_delta + 0.5).abs() < 1e-5);
    }

    #[test]
    fn zoom_never_passes_min() {
        let split = split_wheel(20.0, 3.5, 3.0, 8.0, 0.0);
        assert!((split.zoom_delta + 0.5).abs() < 1e-5);
        assert_eq!(split.scroll_delta, 0.0);
    }

    #[rstest]
    #[case(1.0 / 60.0, 0.05)]
    #[case(1.0 / 30.0, 0.0975)]
    fn damping_closes_fraction_of_gap(#[case] dt: f32, #[case] closed: f32) {
        let next = damp_distance(4.0, 5.0, 0.05, dt);
        assert!((next - (4.0 + closed)).abs() < 1e-4, "was {next}");
    }

    #[test]
    fn damping_converges_and_snaps() {
        let mut distance = 4.0;
        for _ in 0..600 {
            distance = damp_distance(distance, 8.0, 0.05, 1.0 / 60.0);
        }
        assert_eq!(distance, 8.0);
    }
}
