//! Postal code types.

use std::fmt;

/// Error returned when parsing an invalid CEP.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid CEP: {reason}")]
pub struct InvalidCep {
    reason: &'static str,
}

/// A valid 8-digit CEP (Brazilian postal code).
///
/// Input may carry punctuation ("01310-100") or whitespace; every
/// non-digit character is stripped before validation. This type
/// guarantees that any `Cep` value is exactly 8 ASCII digits.
///
/// # Examples
///
/// ```
/// use agency_locator::domain::Cep;
///
/// let cep = Cep::parse("01310-100").unwrap();
/// assert_eq!(cep.as_str(), "01310100");
/// assert_eq!(cep.formatted(), "01310-100");
///
/// // Too short or too long is rejected
/// assert!(Cep::parse("123").is_err());
/// assert!(Cep::parse("123456789").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cep([u8; 8]);

impl Cep {
    /// Parse a CEP from a string.
    ///
    /// Strips all non-digit characters; the remainder must be exactly
    /// 8 ASCII digits. Performs no I/O.
    pub fn parse(s: &str) -> Result<Self, InvalidCep> {
        let mut digits = [0u8; 8];
        let mut n = 0;

        for b in s.bytes() {
            if b.is_ascii_digit() {
                if n == 8 {
                    return Err(InvalidCep {
                        reason: "must have exactly 8 digits",
                    });
                }
                digits[n] = b;
                n += 1;
            }
        }

        if n != 8 {
            return Err(InvalidCep {
                reason: "must have exactly 8 digits",
            });
        }

        Ok(Cep(digits))
    }

    /// Returns the bare 8-digit code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII digits are ever stored
        std::str::from_utf8(&self.0).unwrap()
    }

    /// Returns the conventional "01310-100" presentation.
    pub fn formatted(&self) -> String {
        let s = self.as_str();
        format!("{}-{}", &s[..5], &s[5..])
    }
}

impl fmt::Debug for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cep({})", self.as_str())
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_bare_digits() {
        assert!(Cep::parse("01310100").is_ok());
        assert!(Cep::parse("00000000").is_ok());
        assert!(Cep::parse("99999999").is_ok());
    }

    #[test]
    fn parse_strips_punctuation() {
        let cep = Cep::parse("01310-100").unwrap();
        assert_eq!(cep.as_str(), "01310100");

        let cep = Cep::parse(" 01.310-100 ").unwrap();
        assert_eq!(cep.as_str(), "01310100");
    }

    #[test]
    fn reject_too_few_digits() {
        assert!(Cep::parse("").is_err());
        assert!(Cep::parse("123").is_err());
        assert!(Cep::parse("0131010").is_err());
        assert!(Cep::parse("abc-def").is_err());
    }

    #[test]
    fn reject_too_many_digits() {
        assert!(Cep::parse("123456789").is_err());
        assert!(Cep::parse("01310-1000").is_err());
    }

    #[test]
    fn formatted_presentation() {
        let cep = Cep::parse("01310100").unwrap();
        assert_eq!(cep.formatted(), "01310-100");
    }

    #[test]
    fn display_and_debug() {
        let cep = Cep::parse("01310-100").unwrap();
        assert_eq!(format!("{}", cep), "01310100");
        assert_eq!(format!("{:?}", cep), "Cep(01310100)");
    }

    #[test]
    fn equality() {
        let a = Cep::parse("01310-100").unwrap();
        let b = Cep::parse("01310100").unwrap();
        let c = Cep::parse("04538-133").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
