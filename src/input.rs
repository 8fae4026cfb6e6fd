//! Input source collaborator
//!
//! The app loop polls this once per frame and distils it into a
//! [`TickInput`](crate::sim::TickInput) for the simulation. Edge-triggered
//! queries (`secondary_pressed`, `key_typed`) report a press once per
//! `process_events` cycle, not while held.

use glam::Vec2;

/// Discrete keys the screen flows care about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Start / restart
    Space,
    /// Welcome screen: back to the rules page
    Backspace,
    /// Welcome screen: controls page
    Num1,
    /// End screen: quit
    X,
}

/// Input polling collaborator
pub trait InputSource {
    /// Pump the platform event queue; call once per frame before polling
    fn process_events(&mut self);
    /// Pointer position in screen coordinates
    fn pointer(&self) -> Vec2;
    /// Primary action currently held
    fn primary_held(&self) -> bool;
    /// Secondary action pressed this cycle (edge, not level)
    fn secondary_pressed(&self) -> bool;
    /// Key typed this cycle (edge, not level)
    fn key_typed(&self, key: Key) -> bool;
    /// Environment asked the game to quit
    fn quit_requested(&self) -> bool;
}

/// Input source that reports nothing; for headless runs and tests.
#[derive(Debug, Default)]
pub struct NullInput;

impl InputSource for NullInput {
    fn process_events(&mut self) {}

    fn pointer(&self) -> Vec2 {
        Vec2::ZERO
    }

    fn primary_held(&self) -> bool {
        false
    }

    fn secondary_pressed(&self) -> bool {
        false
    }

    fn key_typed(&self, _key: Key) -> bool {
        false
    }

    fn quit_requested(&self) -> bool {
        false
    }
}
