use crate::overlay::OverlayAction;

/// Minimum horizontal travel for a touch to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

impl SwipeDirection {
    pub fn action(self) -> OverlayAction {
        match self {
            SwipeDirection::Left => OverlayAction::Next,
            SwipeDirection::Right => OverlayAction::Prev,
        }
    }
}

/// Horizontal swipe between two touch points, if any. Vertical-dominant
/// gestures are scrolls and never count.
pub fn detect_swipe(start: TouchPoint, end: TouchPoint) -> Option<SwipeDirection> {
    let dx = start.x - end.x;
    let dy = start.y - end.y;
    if dx.abs() <= dy.abs() || dx.abs() <= SWIPE_THRESHOLD_PX {
        return None;
    }
    Some(if dx > 0.0 {
        SwipeDirection::Left
    } else {
        SwipeDirection::Right
    })
}

#[derive(Debug, Default)]
pub struct SwipeTracker {
    start: Option<TouchPoint>,
}

impl SwipeTracker {
    pub fn begin(&mut self, point: TouchPoint) {
        self.start = Some(point);
    }

    pub fn end(&mut self, point: TouchPoint) -> Option<SwipeDirection> {
        self.start.take().and_then(|start| detect_swipe(start, point))
    }
}

/// Keyboard shortcut for an overlay. Arrow keys only apply to overlays
/// that page through items.
pub fn route_key(key: &str, is_open: bool, navigable: bool) -> Option<OverlayAction> {
    if !is_open {
        return None;
    }
    match key {
        "Escape" => Some(OverlayAction::Close),
        "ArrowRight" if navigable => Some(OverlayAction::Next),
        "ArrowLeft" if navigable => Some(OverlayAction::Prev),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(x: f64, y: f64) -> TouchPoint {
        TouchPoint { x, y }
    }

    #[test]
    fn swipe_left_goes_forward() {
        let dir = detect_swipe(pt(200.0, 100.0), pt(120.0, 110.0));
        assert_eq!(dir, Some(SwipeDirection::Left));
        assert_eq!(dir.map(SwipeDirection::action), Some(OverlayAction::Next));
    }

    #[test]
    fn swipe_right_goes_back() {
        let dir = detect_swipe(pt(100.0, 100.0), pt(180.0, 90.0));
        assert_eq!(dir.map(SwipeDirection::action), Some(OverlayAction::Prev));
    }

    #[test]
    fn short_or_vertical_gestures_are_ignored() {
        assert_eq!(detect_swipe(pt(100.0, 0.0), pt(50.0, 0.0)), None);
        assert_eq!(detect_swipe(pt(100.0, 0.0), pt(30.0, 90.0)), None);
    }

    #[test]
    fn tracker_needs_a_start() {
        let mut tracker = SwipeTracker::default();
        assert_eq!(tracker.end(pt(0.0, 0.0)), None);

        tracker.begin(pt(300.0, 0.0));
        assert_eq!(tracker.end(pt(100.0, 0.0)), Some(SwipeDirection::Left));
        // consumed
        assert_eq!(tracker.end(pt(100.0, 0.0)), None);
    }

    #[test]
    fn keys_only_route_while_open() {
        assert_eq!(route_key("Escape", false, true), None);
        assert_eq!(route_key("Escape", true, false), Some(OverlayAction::Close));
        assert_eq!(route_key("ArrowLeft", true, true), Some(OverlayAction::Prev));
        assert_eq!(route_key("ArrowRight", true, true), Some(OverlayAction::Next));
        assert_eq!(route_key("ArrowRight", true, false), None);
        assert_eq!(route_key("Enter", true, true), None);
    }
}
