use super::super::super::messages::Message;
use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::Escape) => "escape".to_string(),
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        if Self::shortcut_matches(
            &self.config.key_toggle_play_pause,
            "space",
            &pressed,
            modifiers,
        ) {
            Some(Message::TogglePlayPause)
        } else if Self::shortcut_matches(&self.config.key_next_verse, "f", &pressed, modifiers) {
            Some(Message::NextVerse)
        } else if Self::shortcut_matches(&self.config.key_prev_verse, "s", &pressed, modifiers) {
            Some(Message::PreviousVerse)
        } else if Self::shortcut_matches(
            &self.config.key_stop_playback,
            "escape",
            &pressed,
            modifiers,
        ) {
            Some(Message::StopPlayback)
        } else if Self::shortcut_matches(
            &self.config.key_quick_search,
            "ctrl+k",
            &pressed,
            modifiers,
        ) {
            Some(Message::FocusQuickSearch)
        } else if Self::shortcut_matches(
            &self.config.key_toggle_theme,
            "ctrl+t",
            &pressed,
            modifiers,
        ) {
            Some(Message::ToggleTheme)
        } else {
            None
        }
    }

    pub(super) fn shortcut_matches(
        raw: &str,
        fallback: &str,
        pressed: &str,
        modifiers: Modifiers,
    ) -> bool {
        let normalized = Self::normalize_shortcut_token(raw, fallback);

        let mut required_ctrl = false;
        let mut required_alt = false;
        let mut required_logo = false;
        let mut required_shift = false;
        let mut required_key: Option<&str> = None;

        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => required_ctrl = true,
                "alt" => required_alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => required_logo = true,
                "shift" => required_shift = true,
                key => required_key = Some(key),
            }
        }

        let Some(required_key) = required_key else {
            return false;
        };
        if pressed != required_key {
            return false;
        }

        modifiers.control() == required_ctrl
            && modifiers.alt() == required_alt
            && modifiers.logo() == required_logo
            && modifiers.shift() == required_shift
    }

    pub(super) fn normalize_shortcut_token(raw: &str, fallback: &str) -> String {
        let normalized = raw.trim().to_ascii_lowercase();
        if normalized.is_empty() {
            fallback.to_string()
        } else if normalized == "esc" {
            "escape".to_string()
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn esc_is_an_alias_for_escape() {
        assert!(App::shortcut_matches("Esc", "x", "escape", Modifiers::empty()));
    }

    #[test]
    fn blank_binding_uses_fallback() {
        assert!(App::shortcut_matches("  ", "ctrl+k", "k", Modifiers::CTRL));
        assert!(!App::shortcut_matches("  ", "ctrl+k", "k", Modifiers::empty()));
    }

    #[test]
    fn matches_ctrl_k_shortcut() {
        assert!(App::shortcut_matches("ctrl+k", "x", "k", Modifiers::CTRL));
    }

    #[test]
    fn plain_key_rejects_modifiers() {
        assert!(App::shortcut_matches("f", "x", "f", Modifiers::empty()));
        assert!(!App::shortcut_matches("f", "x", "f", Modifiers::CTRL));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "ctrl+t",
            "x",
            "t",
            Modifiers::CTRL | Modifiers::SHIFT,
        ));
    }

    #[test]
    fn modifier_only_binding_never_matches() {
        assert!(!App::shortcut_matches("ctrl", "x", "ctrl", Modifiers::CTRL));
    }
}
