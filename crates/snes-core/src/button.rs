//! Controller buttons and their core-facing numeric codes.

/// Logical button on the SNES controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    B,
    Y,
    Select,
    Start,
    Up,
    Down,
    Left,
    Right,
    A,
    X,
    L,
    R,
}

impl Button {
    /// Return the stable numeric code the core understands.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::B => 0,
            Self::Y => 1,
            Self::Select => 2,
            Self::Start => 3,
            Self::Up => 4,
            Self::Down => 5,
            Self::Left => 6,
            Self::Right => 7,
            Self::A => 8,
            Self::X => 9,
            Self::L => 10,
            Self::R => 11,
        }
    }

    /// Parse a logical button name, case-insensitively.
    ///
    /// Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "a" => Some(Self::A),
            "b" => Some(Self::B),
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            "l" => Some(Self::L),
            "r" => Some(Self::R),
            "select" => Some(Self::Select),
            "start" => Some(Self::Start),
            "up" => Some(Self::Up),
            "down" => Some(Self::Down),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_button_names() {
        assert_eq!(Button::from_name("a"), Some(Button::A));
        assert_eq!(Button::from_name("A"), Some(Button::A));
        assert_eq!(Button::from_name("start"), Some(Button::Start));
        assert_eq!(Button::from_name("select"), Some(Button::Select));
        assert_eq!(Button::from_name("up"), Some(Button::Up));
        assert_eq!(Button::from_name("unknown"), None);
    }

    #[test]
    fn codes_are_distinct() {
        let buttons = [
            Button::B,
            Button::Y,
            Button::Select,
            Button::Start,
            Button::Up,
            Button::Down,
            Button::Left,
            Button::Right,
            Button::A,
            Button::X,
            Button::L,
            Button::R,
        ];
        for (i, a) in buttons.iter().enumerate() {
            for b in &buttons[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }
}
