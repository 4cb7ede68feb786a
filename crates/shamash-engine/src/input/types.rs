/// Keyboard key identifier, decoupled from the windowing backend.
///
/// The runtime translates winit keycodes into these. Codes with no variant
/// arrive as [`Key::Unknown`] instead of being dropped, so an application can
/// apply an "any other key" policy.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    /// Modifier keys, left/right collapsed.
    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I,
    J, K, L, M, N, O, P, Q, R,
    S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3,
    Digit4, Digit5, Digit6, Digit7,
    Digit8, Digit9,

    /// Backend keycode with no variant here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Input events the runtime hands to the application.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// Set for OS key-repeat events.
        repeat: bool,
    },

    /// Window gained or lost keyboard focus.
    Focused(bool),
}
