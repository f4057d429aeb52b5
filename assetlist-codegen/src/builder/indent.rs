//! Indentation of generated code.

/// One level of indentation, as a number of spaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indent(u8);

impl Indent {
    /// Two spaces, as used by every generated TypeScript file.
    pub const TYPESCRIPT: Self = Self(2);

    /// Text for a single level.
    pub fn unit(self) -> String {
        " ".repeat(usize::from(self.0))
    }
}

impl Default for Indent {
    fn default() -> Self {
        Self::TYPESCRIPT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit() {
        assert_eq!(Indent::TYPESCRIPT.unit(), "  ");
        assert_eq!(Indent::default(), Indent::TYPESCRIPT);
    }
}
