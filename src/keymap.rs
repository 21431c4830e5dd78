/// Keyboard shortcuts mirroring the debug-panel actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Flip,
    Mirror,
    ClearSelection,
    ResetCamera,
    ToggleHint,
}

#[inline]
pub fn action_for_key(key: &str) -> Option<KeyAction> {
    match key {
        "f" | "F" => Some(KeyAction::Flip),
        "m" | "M" => Some(KeyAction::Mirror),
        "r" | "R" => Some(KeyAction::ResetCamera),
        "h" | "H" => Some(KeyAction::ToggleHint),
        "Escape" => Some(KeyAction::ClearSelection),
        _ => None,
    }
}
