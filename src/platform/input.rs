//! Keyboard mapping for the activate trigger

/// Physical key code (`KeyboardEvent.code`) that triggers activation
pub const ACTIVATE_KEY: &str = "Space";

/// Whether a keydown should activate.
///
/// Only the initial press counts; auto-repeat events while the key is held
/// are dropped here so the core only ever sees edges.
pub fn is_activate_key(code: &str, repeat: bool) -> bool {
    code == ACTIVATE_KEY && !repeat
}
