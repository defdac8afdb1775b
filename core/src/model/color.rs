use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Cell style for a shift code. `text` is only set where the default dark
/// text would be unreadable on the background.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftColor {
    pub background: Rgb,
    pub text: Option<Rgb>,
}

impl ShiftColor {
    pub const fn plain(background: Rgb) -> Self {
        Self { background, text: None }
    }

    pub const fn with_text(background: Rgb, text: Rgb) -> Self {
        Self {
            background,
            text: Some(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formats() {
        let gold = Rgb(247, 202, 67);
        assert_eq!(gold.to_hex(), "#F7CA43");
        assert_eq!(Rgb::WHITE.to_string(), "#FFFFFF");
    }
}
