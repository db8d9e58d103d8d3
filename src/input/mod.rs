//! # Input Module
//!
//! Translates window events into the small event vocabulary the state machine
//! understands.

use crate::game::Direction;
use macroquad::input::utils;
use macroquad::miniquad;
use macroquad::prelude::*;

/// Discrete input events consumed by the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputEvent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    /// Leave the game
    Quit,
    /// Any other key press or a mouse click
    AnyInput,
}

impl InputEvent {
    /// The movement direction carried by this event, if any.
    pub fn direction(self) -> Option<Direction> {
        match self {
            InputEvent::MoveUp => Some(Direction::Up),
            InputEvent::MoveDown => Some(Direction::Down),
            InputEvent::MoveLeft => Some(Direction::Left),
            InputEvent::MoveRight => Some(Direction::Right),
            InputEvent::Quit | InputEvent::AnyInput => None,
        }
    }
}

/// Maps a pressed key to an input event.
///
/// # Examples
///
/// ```
/// use gridwalk::{map_key, InputEvent};
/// use macroquad::prelude::KeyCode;
///
/// assert_eq!(map_key(KeyCode::Left), InputEvent::MoveLeft);
/// assert_eq!(map_key(KeyCode::Escape), InputEvent::Quit);
/// assert_eq!(map_key(KeyCode::Space), InputEvent::AnyInput);
/// ```
pub fn map_key(key: KeyCode) -> InputEvent {
    match key {
        KeyCode::Up => InputEvent::MoveUp,
        KeyCode::Down => InputEvent::MoveDown,
        KeyCode::Left => InputEvent::MoveLeft,
        KeyCode::Right => InputEvent::MoveRight,
        KeyCode::Escape => InputEvent::Quit,
        _ => InputEvent::AnyInput,
    }
}

/// Collects one frame of window events in the order they arrived.
///
/// macroquad replays its raw event queue into this handler, so repeated
/// presses of the same key and the interleaving of keys and clicks survive.
#[derive(Debug, Default)]
pub struct FrameEvents {
    /// Whether a mouse click counts as input
    pub mouse_enabled: bool,
    events: Vec<InputEvent>,
}

impl FrameEvents {
    /// Creates an empty buffer.
    pub fn new(mouse_enabled: bool) -> Self {
        Self {
            mouse_enabled,
            events: Vec::new(),
        }
    }

    /// Events collected so far, oldest first.
    pub fn events(&self) -> &[InputEvent] {
        &self.events
    }

    /// Appends an event after everything already collected.
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Takes the collected events, leaving the buffer empty.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }
}

impl miniquad::EventHandler for FrameEvents {
    fn update(&mut self) {}

    fn draw(&mut self) {}

    fn key_down_event(&mut self, keycode: KeyCode, _keymods: miniquad::KeyMods, repeat: bool) {
        // Auto-repeat while a key is held is not a new press.
        if !repeat {
            self.events.push(map_key(keycode));
        }
    }

    fn mouse_button_down_event(&mut self, _button: MouseButton, _x: f32, _y: f32) {
        if self.mouse_enabled {
            self.events.push(InputEvent::AnyInput);
        }
    }

    fn quit_requested_event(&mut self) {
        self.events.push(InputEvent::Quit);
    }
}

/// Polls macroquad for the events of the current frame.
pub struct InputHandler {
    subscriber: usize,
    frame: FrameEvents,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler and subscribes it to macroquad's event queue.
    ///
    /// Takes over the window close button so that closing the window arrives
    /// as a [`InputEvent::Quit`] instead of ending the process.
    pub fn new() -> Self {
        prevent_quit();
        Self {
            subscriber: utils::register_input_subscriber(),
            frame: FrameEvents::new(true),
        }
    }

    /// Drains everything that happened since the last frame, in arrival order.
    ///
    /// Never blocks; an empty vector means nothing happened.
    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        utils::repeat_all_miniquad_input(&mut self.frame, self.subscriber);

        // The close button only sets a flag; it is not in the replayed queue.
        if is_quit_requested() {
            self.frame.push(InputEvent::Quit);
        }

        self.frame.drain()
    }
}
