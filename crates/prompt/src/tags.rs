//! The FIM delimiter tags.
//!
//! Four literal delimiters mark the regions of a fill-in-the-middle prompt.
//! Their combined character length is fixed overhead against the token
//! budget: the tags themselves are never truncated or dropped, even when
//! the budget cannot fit any variable content at all.

/// A FIM region delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FimTag {
    Filename,
    Suffix,
    Prefix,
    Middle,
}

impl FimTag {
    /// All four tags.
    pub const ALL: [FimTag; 4] = [
        FimTag::Filename,
        FimTag::Suffix,
        FimTag::Prefix,
        FimTag::Middle,
    ];

    /// The literal delimiter string, bit-exact on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            FimTag::Filename => "<filename>",
            FimTag::Suffix => "<fim_suffix>",
            FimTag::Prefix => "<fim_prefix>",
            FimTag::Middle => "<fim_middle>",
        }
    }

    /// Character length of the literal, counted against the budget as-is.
    pub const fn char_len(self) -> usize {
        self.as_str().len()
    }

    /// Combined overhead of all four tags.
    pub fn overhead() -> usize {
        Self::ALL.iter().map(|tag| tag.char_len()).sum()
    }
}
