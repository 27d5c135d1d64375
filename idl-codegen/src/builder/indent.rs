//! Indentation configuration for code generation.

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    /// Spaces with the specified width, from 1 to 8.
    Spaces(u8),
}

const SPACES: &str = "        ";

impl Indent {
    /// 4-space indentation, the style of generated declaration files.
    pub const DECLARATIONS: Self = Self::Spaces(4);

    /// Convert to the string representation for one indent level.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spaces(n @ 1..=8) => &SPACES[..*n as usize],
            // Fallback to 4 whitespaces
            Self::Spaces(_) => &SPACES[..4],
        }
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::DECLARATIONS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_as_str() {
        assert_eq!(Indent::Spaces(2).as_str(), "  ");
        assert_eq!(Indent::Spaces(4).as_str(), "    ");
        assert_eq!(Indent::Spaces(3).as_str(), "   ");
        assert_eq!(Indent::Spaces(0).as_str(), "    ");
        assert_eq!(Indent::Spaces(12).as_str(), "    ");
    }

    #[test]
    fn test_default() {
        assert_eq!(Indent::default(), Indent::Spaces(4));
    }
}
