//! Open/closed state and current item for the modal and the lightbox.
//!
//! The controller is plain data so it can be driven from a Yew reducer and
//! tested on the host. DOM side effects (scroll lock, focus, teardown timing)
//! live in [`crate::hooks::use_overlay`].

use std::rc::Rc;

use log::warn;
use yew::Reducible;

use crate::error::UiError;

/// Index after `index`, wrapping to 0. `len` must be non-zero.
pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

/// Index before `index`, wrapping to `len - 1`. `len` must be non-zero.
pub fn prev_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlayState {
    pub is_open: bool,
    pub current_index: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    Open(usize),
    Close,
    Next,
    Prev,
    /// Exit transition finished; drop the rendered content if still closed.
    Teardown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayController {
    len: usize,
    state: OverlayState,
    // Item still painted in the overlay. Outlives `close()` until teardown so
    // the exit transition has something to animate.
    rendered: Option<usize>,
}

impl OverlayController {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: OverlayState::default(),
            rendered: None,
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    /// Current index, only while open.
    pub fn current(&self) -> Option<usize> {
        self.state.is_open.then_some(self.state.current_index)
    }

    pub fn rendered(&self) -> Option<usize> {
        self.rendered
    }

    pub fn open(&mut self, index: usize) -> Result<usize, UiError> {
        if self.len == 0 {
            return Err(UiError::EmptyCollection);
        }
        if index >= self.len {
            return Err(UiError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = OverlayState {
            is_open: true,
            current_index: index,
        };
        self.rendered = Some(index);
        Ok(index)
    }

    /// Returns whether the overlay was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.state.is_open;
        self.state.is_open = false;
        was_open
    }

    pub fn next(&mut self) -> Option<usize> {
        self.step(next_index)
    }

    pub fn prev(&mut self) -> Option<usize> {
        self.step(prev_index)
    }

    pub fn teardown(&mut self) -> bool {
        if self.state.is_open || self.rendered.is_none() {
            return false;
        }
        self.rendered = None;
        true
    }

    pub fn apply(&mut self, action: OverlayAction) -> Result<(), UiError> {
        match action {
            OverlayAction::Open(index) => {
                self.open(index)?;
            }
            OverlayAction::Close => {
                self.close();
            }
            OverlayAction::Next => {
                self.next();
            }
            OverlayAction::Prev => {
                self.prev();
            }
            OverlayAction::Teardown => {
                self.teardown();
            }
        }
        Ok(())
    }

    fn step(&mut self, f: fn(usize, usize) -> usize) -> Option<usize> {
        if !self.state.is_open || self.len == 0 {
            return None;
        }
        let index = f(self.state.current_index, self.len);
        self.state.current_index = index;
        self.rendered = Some(index);
        Some(index)
    }
}

impl Reducible for OverlayController {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match next.apply(action) {
            Ok(()) if next != *self => Rc::new(next),
            Ok(()) => self,
            Err(err) => {
                warn!("overlay action {:?} ignored: {}", action, err);
                self
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn open_then_close_clears_content_after_teardown() {
        for len in 1..6 {
            for i in 0..len {
                let mut overlay = OverlayController::new(len);
                assert_eq!(overlay.open(i), Ok(i));
                assert_eq!(overlay.current(), Some(i));

                assert!(overlay.close());
                assert!(!overlay.is_open());
                // still painted while the exit transition runs
                assert_eq!(overlay.rendered(), Some(i));

                assert!(overlay.teardown());
                assert_eq!(overlay.rendered(), None);
            }
        }
    }

    #[test]
    fn teardown_after_reopen_keeps_content() {
        let mut overlay = OverlayController::new(3);
        overlay.open(0).unwrap();
        overlay.close();
        overlay.open(2).unwrap();

        assert!(!overlay.teardown());
        assert_eq!(overlay.rendered(), Some(2));
    }

    #[test]
    fn next_and_prev_cycle_back_to_start() {
        let len = 5;
        for start in 0..len {
            let mut overlay = OverlayController::new(len);
            overlay.open(start).unwrap();
            for _ in 0..len {
                overlay.next();
            }
            assert_eq!(overlay.current(), Some(start));
            for _ in 0..len {
                overlay.prev();
            }
            assert_eq!(overlay.current(), Some(start));
        }
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let mut overlay = OverlayController::new(3);
        overlay.open(2).unwrap();
        assert_eq!(overlay.next(), Some(0));
        assert_eq!(overlay.prev(), Some(2));
    }

    #[test]
    fn navigation_is_noop_while_closed() {
        let mut overlay = OverlayController::new(3);
        assert_eq!(overlay.next(), None);
        assert_eq!(overlay.prev(), None);
        assert_eq!(overlay.state(), OverlayState::default());
    }

    #[test]
    fn invalid_open_leaves_state_unchanged() {
        let mut overlay = OverlayController::new(2);
        overlay.open(1).unwrap();
        let before = overlay.clone();

        assert_eq!(
            overlay.open(2),
            Err(UiError::IndexOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(overlay, before);
    }

    #[test]
    fn empty_collection_never_opens() {
        let mut overlay = OverlayController::new(0);
        assert_eq!(overlay.open(0), Err(UiError::EmptyCollection));
        assert_eq!(overlay.next(), None);
        assert!(!overlay.close());
    }

    #[test]
    fn reducer_ignores_invalid_actions() {
        let overlay = Rc::new(OverlayController::new(2));
        let same = overlay.clone().reduce(OverlayAction::Open(7));
        assert!(Rc::ptr_eq(&overlay, &same));

        let opened = overlay.reduce(OverlayAction::Open(1));
        assert_eq!(opened.current(), Some(1));
    }

    #[test]
    fn index_helpers_wrap() {
        assert_eq!(next_index(6, 7), 0);
        assert_eq!(prev_index(0, 7), 6);
        assert_eq!(prev_index(3, 7), 2);
    }
}
