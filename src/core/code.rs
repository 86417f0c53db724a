//! Numberle code representation
//!
//! A Code is a validated 4-digit string. Both the secret and every guess are
//! Codes, so format validation happens once, at construction.

use rand::Rng;
use rustc_hash::FxHashMap;
use std::fmt;
use std::str::FromStr;

/// Number of digits in every code
pub const CODE_LENGTH: usize = 4;

/// Smallest value the default generator produces (leading digit never `0`)
pub const MIN_GENERATED: u16 = 1000;

/// Largest value the default generator produces
pub const MAX_GENERATED: u16 = 9999;

/// A 4-digit Numberle code
///
/// Stores the digits as ASCII bytes. Leading zeros are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    digits: [u8; CODE_LENGTH],
}

/// Error type for malformed codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength(usize),
    InvalidCharacters,
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Code must be exactly {CODE_LENGTH} digits, got {len}")
            }
            Self::InvalidCharacters => write!(f, "Code must contain only the digits 0-9"),
        }
    }
}

impl std::error::Error for CodeError {}

impl Code {
    /// Create a new Code from a string
    ///
    /// # Errors
    /// Returns `CodeError` if:
    /// - Length is not exactly 4 characters
    /// - Any character is not an ASCII digit
    ///
    /// # Examples
    /// ```
    /// use numberle::core::Code;
    ///
    /// let code = Code::new("0423").unwrap();
    /// assert_eq!(code.text(), "0423");
    ///
    /// assert!(Code::new("12345").is_err());
    /// assert!(Code::new("12a4").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, CodeError> {
        let len = text.chars().count();
        if len != CODE_LENGTH {
            return Err(CodeError::InvalidLength(len));
        }

        let mut digits = [0u8; CODE_LENGTH];
        for (slot, ch) in digits.iter_mut().zip(text.chars()) {
            if !ch.is_ascii_digit() {
                return Err(CodeError::InvalidCharacters);
            }
            *slot = ch as u8;
        }

        Ok(Self { digits })
    }

    /// Draw a code uniformly from `MIN_GENERATED..=MAX_GENERATED`
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let value: u16 = rng.random_range(MIN_GENERATED..=MAX_GENERATED);
        Self::from_value(value)
    }

    /// Render a value in `0..=9999` as a zero-padded code
    fn from_value(value: u16) -> Self {
        debug_assert!(value <= MAX_GENERATED, "Code value must be <= 9999");
        let mut digits = [b'0'; CODE_LENGTH];
        let mut rest = value;
        for slot in digits.iter_mut().rev() {
            *slot = b'0' + (rest % 10) as u8;
            rest /= 10;
        }
        Self { digits }
    }

    /// Get the code as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.digits).unwrap_or_default()
    }

    /// Get the digit at a specific position (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn digit_at(&self, position: usize) -> u8 {
        self.digits[position]
    }

    /// Get the count of each digit in the code
    ///
    /// This is the starting pool for feedback evaluation.
    #[inline]
    pub(crate) fn digit_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &digit in &self.digits {
            *counts.entry(digit).or_insert(0) += 1;
        }
        counts
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new("1123").unwrap();
        assert_eq!(code.text(), "1123");
        assert_eq!(code.digit_at(3), b'3');
    }

    #[test]
    fn code_leading_zero_allowed() {
        let code = Code::new("0007").unwrap();
        assert_eq!(code.text(), "0007");
        assert_eq!(code.digit_at(0), b'0');
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new("12345"), Err(CodeError::InvalidLength(5)));
        assert_eq!(Code::new("123"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::new(""), Err(CodeError::InvalidLength(0)));
    }

    #[test]
    fn code_length_counts_chars_not_bytes() {
        // Four chars, but more than four bytes
        assert_eq!(Code::new("12é4"), Err(CodeError::InvalidCharacters));
        assert_eq!(Code::new("١٢٣٤"), Err(CodeError::InvalidCharacters));
    }

    #[test]
    fn code_creation_invalid_characters() {
        assert_eq!(Code::new("12a4"), Err(CodeError::InvalidCharacters));
        assert_eq!(Code::new("12 4"), Err(CodeError::InvalidCharacters));
        assert_eq!(Code::new("-123"), Err(CodeError::InvalidCharacters));
        assert_eq!(Code::new(" 123"), Err(CodeError::InvalidCharacters));
    }

    #[test]
    fn code_digit_counts() {
        let code = Code::new("1123").unwrap();
        let counts = code.digit_counts();
        assert_eq!(counts.get(&b'1'), Some(&2));
        assert_eq!(counts.get(&b'2'), Some(&1));
        assert_eq!(counts.get(&b'3'), Some(&1));
        assert_eq!(counts.get(&b'9'), None);
    }

    #[test]
    fn code_digit_counts_all_same() {
        let counts = Code::new("7777").unwrap().digit_counts();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get(&b'7'), Some(&4));
    }

    #[test]
    fn code_from_value_pads() {
        assert_eq!(Code::from_value(7).text(), "0007");
        assert_eq!(Code::from_value(1000).text(), "1000");
        assert_eq!(Code::from_value(9999).text(), "9999");
    }

    #[test]
    fn random_codes_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let code = Code::random(&mut rng);
            assert_ne!(code.digit_at(0), b'0');
            let value: u16 = code.text().parse().unwrap();
            assert!((MIN_GENERATED..=MAX_GENERATED).contains(&value));
        }
    }

    #[test]
    fn random_is_deterministic_for_seed() {
        let a = Code::random(&mut StdRng::seed_from_u64(7));
        let b = Code::random(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn code_from_str_and_display() {
        let code: Code = "4096".parse().unwrap();
        assert_eq!(format!("{code}"), "4096");
        assert!("40x6".parse::<Code>().is_err());
    }

    #[test]
    fn code_error_display() {
        assert_eq!(
            CodeError::InvalidLength(5).to_string(),
            "Code must be exactly 4 digits, got 5"
        );
        assert_eq!(
            CodeError::InvalidCharacters.to_string(),
            "Code must contain only the digits 0-9"
        );
    }
}
