//! Command handlers - prompt editing and popup toggles

use crate::app::GeneratorState;
use crate::messages::ui_events::InputMode;

impl GeneratorState {
    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.prompt.len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position = self.prompt[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.prompt.len() {
            self.cursor_position = self.prompt[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(self.prompt.len());
        }
    }

    pub fn enter_char(&mut self, c: char) {
        if self.cursor_position <= self.prompt.len() {
            self.prompt.insert(self.cursor_position, c);
            self.cursor_position += c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let prev_pos = self.prompt[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.prompt.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    pub fn clear_prompt(&mut self) {
        self.prompt.clear();
        self.cursor_position = 0;
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_backspace() {
        let mut state = GeneratorState::default();
        state.start_editing();
        for c in "cat".chars() {
            state.enter_char(c);
        }
        assert_eq!(state.prompt, "cat");
        assert_eq!(state.cursor_position, 3);

        state.delete_char();
        assert_eq!(state.prompt, "ca");
        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut state = GeneratorState::default();
        state.prompt = "ct".into();
        state.start_editing();
        state.move_cursor_left();
        state.enter_char('a');
        assert_eq!(state.prompt, "cat");
        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn test_cursor_moves_over_multibyte_chars() {
        let mut state = GeneratorState::default();
        state.prompt = "café".into();
        state.start_editing();
        assert_eq!(state.cursor_position, 5);

        state.move_cursor_left();
        assert_eq!(state.cursor_position, 3);
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 5);

        state.delete_char();
        assert_eq!(state.prompt, "caf");
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut state = GeneratorState::default();
        state.move_cursor_left();
        state.delete_char();
        assert_eq!(state.cursor_position, 0);

        state.prompt = "a".into();
        state.cursor_position = 1;
        state.move_cursor_right();
        assert_eq!(state.cursor_position, 1);
    }

    #[test]
    fn test_clear_prompt_and_help() {
        let mut state = GeneratorState::default();
        state.prompt = "dragon".into();
        state.cursor_position = 6;
        state.clear_prompt();
        assert!(state.prompt.is_empty());
        assert_eq!(state.cursor_position, 0);

        state.toggle_help();
        assert!(state.show_help);
        state.close_help();
        assert!(!state.show_help);
    }
}
