//! Status bar component for displaying keyboard shortcuts.

use cursive::view::Resizable;
use cursive::views::{LinearLayout, TextView};

/// Keyboard shortcut hint for the status bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Joins hints into a single `key: action │ key: action` line.
pub fn hint_text(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Build a status bar from a list of key hints.
pub fn build_status_bar(hints: &[KeyHint]) -> LinearLayout {
    LinearLayout::horizontal().child(TextView::new(hint_text(hints)).full_width())
}

/// Hints shown under the simulator dialog.
pub const SIMULATOR_HINTS: [KeyHint; 5] = [
    hints::TAB,
    hints::SHIFT_TAB,
    hints::ENTER,
    hints::CTRL_Q,
    hints::ESC,
];

/// Common key hints for the simulator.
pub mod hints {
    use super::KeyHint;

    pub const TAB: KeyHint = KeyHint::new("Tab", "Next");
    pub const SHIFT_TAB: KeyHint = KeyHint::new("S-Tab", "Prev");
    pub const ENTER: KeyHint = KeyHint::new("Enter", "Press");
    pub const CTRL_Q: KeyHint = KeyHint::new("C-q", "Quit");
    pub const ESC: KeyHint = KeyHint::new("Esc", "Quit");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hint_text_joins_with_separator() {
        assert_eq!(
            hint_text(&[hints::TAB, hints::CTRL_Q]),
            "Tab: Next │ C-q: Quit"
        );
    }

    #[test]
    fn simulator_hints_advertise_both_quit_keys() {
        let text = hint_text(&SIMULATOR_HINTS);

        assert!(text.contains("C-q: Quit"));
        assert!(text.ends_with("Esc: Quit"));
    }

    #[test]
    fn hint_text_empty() {
        assert_eq!(hint_text(&[]), "");
    }
}
