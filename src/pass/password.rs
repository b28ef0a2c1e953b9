//! The generated password value.

use std::fmt;

use zeroize::Zeroizing;

/// An immutable generated password.
///
/// The backing memory is wiped on drop and `Debug` never prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct Password {
    text: Zeroizing<String>,
    len: usize,
}

impl Password {
    pub(crate) fn from_chars(chars: &[char]) -> Self {
        let mut text = Zeroizing::new(String::with_capacity(chars.len()));
        text.extend(chars.iter());
        Self {
            text,
            len: chars.len(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars redacted>)", self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_contents() {
        let pass = Password::from_chars(&['s', '3', 'c', 'r', '3', 't']);
        let shown = format!("{pass:?}");
        assert!(!shown.contains("s3cr3t"));
        assert!(shown.contains("6 chars"));
        assert_eq!(pass.to_string(), "s3cr3t");
        assert_eq!(pass.len(), 6);
    }
}
