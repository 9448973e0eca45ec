use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::store::ReadingMode;
use iced::keyboard::{Key, Modifiers, key};

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Space) => "space".to_string(),
            Key::Named(key::Named::ArrowLeft) => "left".to_string(),
            Key::Named(key::Named::ArrowRight) => "right".to_string(),
            Key::Named(key::Named::ArrowUp) => "up".to_string(),
            Key::Named(key::Named::ArrowDown) => "down".to_string(),
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
        } else if Self::shortcut_matches(
            &self.config.key_jump_back_far,
            "shift+left",
            &pressed,
            modifiers,
        ) {
            Some(Message::JumpWords(-10))
        } else if Self::shortcut_matches(
            &self.config.key_jump_forward_far,
            "shift+right",
            &pressed,
            modifiers,
        ) {
            Some(Message::JumpWords(10))
        } else if Self::shortcut_matches(&self.config.key_jump_back, "left", &pressed, modifiers) {
            Some(Message::JumpWords(-1))
        } else if Self::shortcut_matches(
            &self.config.key_jump_forward,
            "right",
            &pressed,
            modifiers,
        ) {
            Some(Message::JumpWords(1))
        } else if Self::shortcut_matches(&self.config.key_speed_up, "up", &pressed, modifiers) {
            Some(Message::StepWpm(1))
        } else if Self::shortcut_matches(&self.config.key_speed_down, "down", &pressed, modifiers) {
            Some(Message::StepWpm(-1))
        } else if Self::shortcut_matches(&self.config.key_toggle_mode, "m", &pressed, modifiers) {
            let next = match self.mode {
                ReadingMode::Visual => ReadingMode::Speech,
                ReadingMode::Speech => ReadingMode::Visual,
            };
            Some(Message::SetMode(next))
        } else if Self::shortcut_matches(&self.config.key_toggle_theme, "t", &pressed, modifiers) {
            Some(Message::ToggleTheme)
        } else if Self::shortcut_matches(&self.config.key_toggle_help, "h", &pressed, modifiers) {
            Some(Message::ToggleHelp)
        } else if Self::shortcut_matches(&self.config.key_safe_quit, "q", &pressed, modifiers) {
            Some(Message::SafeQuit)
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

        let required_key = required_key.unwrap_or(fallback);
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
        } else {
            normalized.replace("spacebar", "space")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::keyboard::Modifiers;

    fn message_for(app: &App, key: Key, modifiers: Modifiers) -> Option<Message> {
        app.shortcut_message_for_key(key, modifiers)
    }

    #[test]
    fn normalizes_spacebar_alias() {
        assert_eq!(App::normalize_shortcut_token(" SpaceBar ", "x"), "space");
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        assert!(!App::shortcut_matches(
            "left",
            "x",
            "left",
            Modifiers::SHIFT,
        ));
    }

    #[test]
    fn space_toggles_play_pause() {
        let app = App::test_app("a b c");
        assert!(matches!(
            message_for(&app, Key::Named(key::Named::Space), Modifiers::empty()),
            Some(Message::TogglePlayPause)
        ));
    }

    #[test]
    fn arrows_jump_one_word_and_shift_jumps_ten() {
        let app = App::test_app("a b c");
        assert!(matches!(
            message_for(&app, Key::Named(key::Named::ArrowLeft), Modifiers::empty()),
            Some(Message::JumpWords(-1))
        ));
        assert!(matches!(
            message_for(&app, Key::Named(key::Named::ArrowRight), Modifiers::SHIFT),
            Some(Message::JumpWords(10))
        ));
    }

    #[test]
    fn vertical_arrows_step_the_speed() {
        let app = App::test_app("a b c");
        assert!(matches!(
            message_for(&app, Key::Named(key::Named::ArrowUp), Modifiers::empty()),
            Some(Message::StepWpm(1))
        ));
        assert!(matches!(
            message_for(&app, Key::Named(key::Named::ArrowDown), Modifiers::empty()),
            Some(Message::StepWpm(-1))
        ));
    }

    #[test]
    fn mode_toggle_targets_the_other_mode() {
        let app = App::test_app("a b c");
        assert!(matches!(
            message_for(&app, Key::Character("m".into()), Modifiers::empty()),
            Some(Message::SetMode(ReadingMode::Speech))
        ));
    }

    #[test]
    fn unbound_keys_produce_nothing() {
        let app = App::test_app("a b c");
        assert!(message_for(&app, Key::Character("z".into()), Modifiers::empty()).is_none());
    }
}
