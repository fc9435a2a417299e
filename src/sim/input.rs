/// MAZECAST Project
/// `File` sim/input.rs
/// `Description` Keyboard to switch input module
/// `Author` TioT2
/// `Last changed` 19.10.2026

use std::collections::BTreeMap;

use mazecast::device::{Buttons, InputSource};

/// Physical key
pub type KeyCode = winit::keyboard::KeyCode;

/// Keys that hold board switches down
pub const BINDINGS: [(KeyCode, Buttons); 4] = [
    (KeyCode::KeyD, Buttons::TURN),
    (KeyCode::ArrowRight, Buttons::TURN),
    (KeyCode::KeyW, Buttons::MOVE),
    (KeyCode::ArrowUp, Buttons::MOVE),
];

/// Per-key record
#[derive(Copy, Clone, Default, PartialEq, Eq)]
struct KeyState {
    pressed: bool,
    /// Pressed flag flipped since the last `clear_changed`
    changed: bool,
} // struct KeyState

/// Keyboard snapshot
#[derive(Default)]
pub struct State {
    keys: BTreeMap<KeyCode, KeyState>,
} // struct State

impl State {
    fn get_key_state(&self, key: KeyCode) -> KeyState {
        self.keys.get(&key).copied().unwrap_or_default()
    } // fn get_key_state

    /// Is key pressed checking function
    /// * `key` - key to check state of
    /// * Returns true if key is pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.get_key_state(key).pressed
    } // fn is_key_pressed

    /// Is key clicked checking function
    /// * `key` - key to check state of
    /// * Returns true if key was pressed since the last frame
    pub fn is_key_clicked(&self, key: KeyCode) -> bool {
        let state = self.get_key_state(key);
        state.pressed && state.changed
    } // fn is_key_clicked

    /// Switch state getting function
    /// * Returns switches of all pressed bound keys
    pub fn get_buttons(&self) -> Buttons {
        BINDINGS
            .iter()
            .filter(|(key, _)| self.is_key_pressed(*key))
            .fold(Buttons::empty(), |buttons, (_, button)| buttons | *button)
    } // fn get_buttons
} // impl State

/// Window event driven input
#[derive(Default)]
pub struct Input {
    state: State,
} // struct Input

impl Input {
    pub fn new() -> Self {
        Self::default()
    } // fn new

    /// Key state change callback
    /// * `key` - keycode
    /// * `is_pressed` - changed key state
    pub fn on_key_state_change(&mut self, key: KeyCode, is_pressed: bool) {
        let state = self.state.keys.entry(key).or_default();
        // key repeat is not a change
        state.changed |= state.pressed != is_pressed;
        state.pressed = is_pressed;
    } // fn on_key_state_change

    /// Changed flags clearing function, called once per frame
    pub fn clear_changed(&mut self) {
        for state in self.state.keys.values_mut() {
            state.changed = false;
        }
    } // fn clear_changed

    pub fn get_state(&self) -> &State {
        &self.state
    } // fn get_state
} // impl Input

impl InputSource for Input {
    fn read(&mut self) -> Buttons {
        self.state.get_buttons()
    }
} // impl InputSource for Input


// file input.rs
