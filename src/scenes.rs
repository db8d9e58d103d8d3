//! # Scene Management
//!
//! The top-level state machine of a run: an intro banner, then play, then
//! termination. It routes input events either to player movement or to the
//! quit path and owns no rendering.

use crate::game::Session;
use crate::input::InputEvent;
use log::{debug, info};

/// The scene the application is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppState {
    /// Banner is shown, waiting for the first key press or click
    Intro,
    /// The player is walking the level
    Playing,
    /// The run is over; absorbing
    Terminated,
}

/// Drives [`AppState`] transitions from input events.
#[derive(Debug, Clone)]
pub struct StateMachine {
    state: AppState,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    /// Creates a state machine in [`AppState::Intro`].
    pub fn new() -> Self {
        Self {
            state: AppState::Intro,
        }
    }

    /// The current state.
    pub fn state(&self) -> AppState {
        self.state
    }

    /// Returns true once the run has ended.
    pub fn is_terminated(&self) -> bool {
        self.state == AppState::Terminated
    }

    /// Applies one event and returns the resulting state.
    ///
    /// In the intro any event other than quit starts play and is consumed by
    /// that transition. While playing, movement events move the player and
    /// other non-quit input is ignored.
    pub fn handle_event(&mut self, session: &mut Session, event: InputEvent) -> AppState {
        let next = match (self.state, event) {
            (AppState::Terminated, _) => AppState::Terminated,
            (_, InputEvent::Quit) => AppState::Terminated,
            (AppState::Intro, _) => AppState::Playing,
            (AppState::Playing, event) => {
                if let Some(direction) = event.direction() {
                    let outcome = session.move_player(direction);
                    debug!("Dispatched {:?}: {:?}", event, outcome);
                }
                AppState::Playing
            }
        };

        if next != self.state {
            info!("Scene {:?} -> {:?} on {:?}", self.state, next, event);
            self.state = next;
        }
        self.state
    }

    /// Applies one frame's events in arrival order.
    ///
    /// Events that arrive after termination are dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridwalk::{parse_level, AppState, InputEvent, Session, StateMachine};
    ///
    /// let mut session = Session::from_level(parse_level("#@.#").unwrap()).unwrap();
    /// let mut machine = StateMachine::new();
    ///
    /// let state = machine.process_events(
    ///     &mut session,
    ///     [InputEvent::AnyInput, InputEvent::MoveRight],
    /// );
    /// assert_eq!(state, AppState::Playing);
    /// assert_eq!(session.player_position().col, 2);
    /// ```
    pub fn process_events<I>(&mut self, session: &mut Session, events: I) -> AppState
    where
        I: IntoIterator<Item = InputEvent>,
    {
        for event in events {
            if self.handle_event(session, event) == AppState::Terminated {
                break;
            }
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::level::parse_level;

    fn session() -> Session {
        // #####
        // #.@.#
        // #####
        Session::from_level(parse_level("#####\n#.@.#\n#####").unwrap()).unwrap()
    }

    #[test]
    fn test_starts_in_intro() {
        let machine = StateMachine::new();
        assert_eq!(machine.state(), AppState::Intro);
        assert!(!machine.is_terminated());
    }

    #[test]
    fn test_intro_event_starts_play_without_moving() {
        let mut session = session();
        let mut machine = StateMachine::new();

        assert_eq!(
            machine.handle_event(&mut session, InputEvent::MoveLeft),
            AppState::Playing
        );
        assert_eq!(session.player_position(), Position::new(2, 1));
    }

    #[test]
    fn test_quit_from_intro() {
        let mut session = session();
        let mut machine = StateMachine::new();
        assert_eq!(
            machine.handle_event(&mut session, InputEvent::Quit),
            AppState::Terminated
        );
    }

    #[test]
    fn test_playing_moves_player() {
        let mut session = session();
        let mut machine = StateMachine::new();
        machine.handle_event(&mut session, InputEvent::AnyInput);

        machine.handle_event(&mut session, InputEvent::MoveRight);
        assert_eq!(session.player_position(), Position::new(3, 1));

        // Blocked by the wall, still playing
        assert_eq!(
            machine.handle_event(&mut session, InputEvent::MoveRight),
            AppState::Playing
        );
        assert_eq!(session.player_position(), Position::new(3, 1));
    }

    #[test]
    fn test_any_input_while_playing_is_ignored() {
        let mut session = session();
        let mut machine = StateMachine::new();
        machine.handle_event(&mut session, InputEvent::AnyInput);
        machine.handle_event(&mut session, InputEvent::AnyInput);
        assert_eq!(machine.state(), AppState::Playing);
        assert_eq!(session.player_position(), Position::new(2, 1));
    }

    #[test]
    fn test_terminated_is_absorbing() {
        let mut session = session();
        let mut machine = StateMachine::new();
        machine.process_events(&mut session, [InputEvent::AnyInput, InputEvent::Quit]);

        for event in [
            InputEvent::AnyInput,
            InputEvent::MoveLeft,
            InputEvent::Quit,
        ] {
            assert_eq!(machine.handle_event(&mut session, event), AppState::Terminated);
        }
        assert_eq!(session.player_position(), Position::new(2, 1));
    }

    #[test]
    fn test_events_after_quit_are_dropped() {
        let mut session = session();
        let mut machine = StateMachine::new();
        let state = machine.process_events(
            &mut session,
            vec![
                InputEvent::AnyInput,
                InputEvent::Quit,
                InputEvent::MoveLeft,
            ],
        );
        assert_eq!(state, AppState::Terminated);
        assert_eq!(session.statistics().steps_taken, 0);
    }

    #[test]
    fn test_empty_frame_keeps_state() {
        let mut session = session();
        let mut machine = StateMachine::new();
        assert_eq!(
            machine.process_events(&mut session, Vec::new()),
            AppState::Intro
        );
    }
}
