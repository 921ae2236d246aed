//! src/settings/form.rs
//!
//! Editable text inputs for the two settings.

use super::Settings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Interval,
    Points,
}

/// Raw input text; validated only on save.
#[derive(Debug)]
pub struct SettingsForm {
    pub interval: String,
    pub points: String,
    pub focus: Field,
}

/// Longest accepted input. Wider than either range, so an oversized value
/// reaches validation whole instead of being cut to an in-range one.
const MAX_INPUT_LEN: usize = 6;

impl SettingsForm {
    pub fn new(settings: &Settings) -> Self {
        let mut form = Self {
            interval: String::new(),
            points: String::new(),
            focus: Field::Interval,
        };
        form.reflect(settings);
        form
    }

    /// Overwrite both inputs with the live values.
    pub fn reflect(&mut self, settings: &Settings) {
        self.interval = settings.poll_interval_ms.to_string();
        self.points = settings.buffer_capacity.to_string();
    }

    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            Field::Interval => Field::Points,
            Field::Points => Field::Interval,
        };
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Interval => &mut self.interval,
            Field::Points => &mut self.points,
        }
    }

    /// Type into the focused input. Only digits are taken.
    pub fn input(&mut self, c: char) {
        let field = self.focused_mut();
        if c.is_ascii_digit() && field.len() < MAX_INPUT_LEN {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.focused_mut().pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_live_values() {
        let form = SettingsForm::new(&Settings::default());
        assert_eq!(form.interval, "500");
        assert_eq!(form.points, "50");
        assert_eq!(form.focus, Field::Interval);
    }

    #[test]
    fn edits_go_to_focused_input() {
        let mut form = SettingsForm::new(&Settings::default());
        form.backspace();
        form.backspace();
        form.input('x');
        assert_eq!(form.interval, "5");

        form.cycle_focus();
        form.backspace();
        form.backspace();
        for c in "3000000".chars() {
            form.input(c);
        }
        assert_eq!(form.points, "300000");
        assert_eq!(form.interval, "5");
    }

    #[test]
    fn oversized_interval_is_kept_whole_and_rejected() {
        let mut form = SettingsForm::new(&Settings::default());
        form.interval.clear();
        for c in "50000".chars() {
            form.input(c);
        }
        assert_eq!(form.interval, "50000");
        assert!(Settings::parse(&form.interval, &form.points).is_err());
    }
}
