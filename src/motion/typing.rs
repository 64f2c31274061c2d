use std::time::Duration;

use super::schedule::{Animation, Step};

pub const TYPE_DELAY: Duration = Duration::from_millis(150);
pub const DELETE_DELAY: Duration = Duration::from_millis(75);
/// Pause once a role is fully typed, before deleting starts.
pub const HOLD_FULL: Duration = Duration::from_millis(2000);
/// Pause once a role is fully deleted, before the next one starts.
pub const HOLD_EMPTY: Duration = Duration::from_millis(500);

/// Typing-effect state machine: `{extending, shrinking} × character count`
/// over a cycling list of roles. Never terminates unless the role list is
/// empty.
#[derive(Debug, Clone)]
pub struct TypingEffect {
    roles: Vec<String>,
    index: usize,
    chars: usize,
    deleting: bool,
}

impl TypingEffect {
    pub fn new(roles: Vec<String>) -> Self {
        Self {
            roles,
            index: 0,
            chars: 0,
            deleting: false,
        }
    }

    pub fn role_index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Currently displayed prefix of the active role.
    pub fn text(&self) -> String {
        self.roles
            .get(self.index)
            .map(|role| prefix(role, self.chars))
            .unwrap_or_default()
    }
}

fn prefix(role: &str, chars: usize) -> String {
    role.chars().take(chars).collect()
}

impl Animation for TypingEffect {
    type Frame = String;

    fn tick(&mut self) -> Step<String> {
        let Some(len) = self.roles.get(self.index).map(|r| r.chars().count()) else {
            return Step {
                frame: String::new(),
                next: None,
            };
        };

        let mut delay = if self.deleting {
            self.chars = self.chars.saturating_sub(1);
            DELETE_DELAY
        } else {
            self.chars = (self.chars + 1).min(len);
            TYPE_DELAY
        };
        let frame = self.text();

        if !self.deleting && self.chars == len {
            self.deleting = true;
            delay = HOLD_FULL;
        } else if self.deleting && self.chars == 0 {
            self.deleting = false;
            self.index = (self.index + 1) % self.roles.len();
            delay = HOLD_EMPTY;
        }

        Step {
            frame,
            next: Some(delay),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roles(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_single_char_role_switches_to_shrinking() {
        let mut typing = TypingEffect::new(roles(&["A", "BB"]));

        let step = typing.tick();
        assert_eq!(step.frame, "A");
        assert_eq!(step.next, Some(HOLD_FULL));
        assert!(typing.is_deleting());
        assert_eq!(typing.role_index(), 0);
    }

    #[test]
    fn test_shrink_to_empty_moves_to_next_role() {
        let mut typing = TypingEffect::new(roles(&["A", "BB"]));
        typing.tick();

        let step = typing.tick();
        assert_eq!(step.frame, "");
        assert_eq!(step.next, Some(HOLD_EMPTY));
        assert_eq!(typing.role_index(), 1);
        assert!(!typing.is_deleting());
        assert_eq!(typing.text(), "");

        let step = typing.tick();
        assert_eq!(step.frame, "B");
        assert_eq!(step.next, Some(TYPE_DELAY));

        let step = typing.tick();
        assert_eq!(step.frame, "BB");
        assert_eq!(step.next, Some(HOLD_FULL));
    }

    #[test]
    fn test_full_cycle_wraps_to_first_role() {
        let mut typing = TypingEffect::new(roles(&["ab", "c"]));
        let frames: Vec<(String, Option<Duration>)> = (0..8)
            .map(|_| {
                let s = typing.tick();
                (s.frame, s.next)
            })
            .collect();

        let expected = vec![
            ("a", TYPE_DELAY),
            ("ab", HOLD_FULL),
            ("a", DELETE_DELAY),
            ("", HOLD_EMPTY),
            ("c", HOLD_FULL),
            ("", HOLD_EMPTY),
            ("a", TYPE_DELAY),
            ("ab", HOLD_FULL),
        ];
        for ((frame, next), (want_frame, want_next)) in frames.iter().zip(expected) {
            assert_eq!(frame, want_frame);
            assert_eq!(*next, Some(want_next));
        }
        assert_eq!(typing.role_index(), 0);
    }

    #[test]
    fn test_multibyte_roles_slice_by_char() {
        let mut typing = TypingEffect::new(roles(&["éü"]));
        assert_eq!(typing.tick().frame, "é");
        assert_eq!(typing.tick().frame, "éü");
    }

    #[test]
    fn test_empty_role_list_stops() {
        let mut typing = TypingEffect::new(Vec::new());
        let step = typing.tick();
        assert_eq!(step.frame, "");
        assert_eq!(step.next, None);
    }
}
