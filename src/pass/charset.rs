//! Character categories for password generation.

const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const DIGITS: &[u8] = b"0123456789";
const SYMBOLS: &[u8] = b"!@#$%^&*()-_=+[]{};:,.<>?/\\|~`";

/// Characters that read back as one another (`I`/`l`/`1`, `O`/`0`/`o`).
pub const AMBIGUOUS: &[u8] = b"Il1O0o";

/// One of the four fixed character categories.
///
/// Variants are declared in catalog order, so the derived `Ord` sorts
/// categories the same way [`Category::ALL`] lists them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Uppercase,
        Category::Lowercase,
        Category::Digit,
        Category::Symbol,
    ];

    /// Full character set of the category, before any filtering.
    pub fn charset(self) -> &'static [u8] {
        match self {
            Category::Uppercase => UPPERCASE,
            Category::Lowercase => LOWERCASE,
            Category::Digit => DIGITS,
            Category::Symbol => SYMBOLS,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Uppercase => "Uppercase",
            Category::Lowercase => "Lowercase",
            Category::Digit => "Digits",
            Category::Symbol => "Symbols",
        }
    }
}

#[inline]
pub fn is_ambiguous(c: u8) -> bool {
    AMBIGUOUS.contains(&c)
}
