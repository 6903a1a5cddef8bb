//! Decoder configuration.

/// How the decoder treats bytes after the last record terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strictness {
    /// Unterminated bytes before the index section are an error.
    #[default]
    Strict,
    /// Unterminated bytes before the index section are skipped.
    Lenient,
}

/// Options accepted by [`decode_with`](crate::decode_with).
#[derive(Debug, Clone, Copy, Default)]
pub struct DecodeOptions {
    pub strictness: Strictness,
}

impl DecodeOptions {
    pub fn strict() -> Self {
        Self {
            strictness: Strictness::Strict,
        }
    }

    pub fn lenient() -> Self {
        Self {
            strictness: Strictness::Lenient,
        }
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}
