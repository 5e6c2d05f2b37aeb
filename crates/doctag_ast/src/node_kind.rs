//! Node kind definitions for the doc comment AST.
//!
//! Every tree node carries exactly one kind from this closed enumeration.
//! Consumers dispatch on the kind instead of downcasting, and the set is
//! stable for a given grammar revision.

use serde::Serialize;

/// The kind of a doc comment AST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "PascalCase")]
pub enum DocNodeKind {
    // Leaves
    /// A literal text run with an optional source excerpt.
    Particle,

    // Inline content
    /// A run of plain comment text.
    PlainText,
    /// A soft line break between lines of a paragraph.
    SoftBreak,
    /// A backslash-escaped character sequence.
    EscapedText,
    /// Text the parser could not interpret, preserved verbatim.
    ErrorText,
    /// A CommonMark-style code span delimited by single backticks.
    CodeSpan,
    /// An inline tag such as `{@link target}`.
    InlineTag,

    // Structure
    /// A block tag such as `@remarks` that starts a new section.
    BlockTag,
    /// A paragraph of inline content.
    Paragraph,
    /// A generic container of nodes.
    Section,
}

impl DocNodeKind {
    /// Returns true if nodes of this kind contain other nodes.
    #[inline]
    pub const fn is_container(&self) -> bool {
        matches!(self, DocNodeKind::Paragraph | DocNodeKind::Section)
    }

    /// Returns true if nodes of this kind are inline content.
    #[inline]
    pub const fn is_inline(&self) -> bool {
        matches!(
            self,
            DocNodeKind::PlainText
                | DocNodeKind::SoftBreak
                | DocNodeKind::EscapedText
                | DocNodeKind::ErrorText
                | DocNodeKind::CodeSpan
                | DocNodeKind::InlineTag
        )
    }

    /// Returns true if nodes of this kind are block-level structure.
    #[inline]
    pub const fn is_block(&self) -> bool {
        matches!(
            self,
            DocNodeKind::BlockTag | DocNodeKind::Paragraph | DocNodeKind::Section
        )
    }

    /// Returns true if this kind is a bare particle leaf.
    #[inline]
    pub const fn is_particle(&self) -> bool {
        matches!(self, DocNodeKind::Particle)
    }
}

impl std::fmt::Display for DocNodeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Use the same casing as serde serialization
        let name = match self {
            DocNodeKind::Particle => "Particle",
            DocNodeKind::PlainText => "PlainText",
            DocNodeKind::SoftBreak => "SoftBreak",
            DocNodeKind::EscapedText => "EscapedText",
            DocNodeKind::ErrorText => "ErrorText",
            DocNodeKind::CodeSpan => "CodeSpan",
            DocNodeKind::InlineTag => "InlineTag",
            DocNodeKind::BlockTag => "BlockTag",
            DocNodeKind::Paragraph => "Paragraph",
            DocNodeKind::Section => "Section",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_container() {
        assert!(DocNodeKind::Section.is_container());
        assert!(DocNodeKind::Paragraph.is_container());
        assert!(!DocNodeKind::CodeSpan.is_container());
        assert!(!DocNodeKind::Particle.is_container());
    }

    #[test]
    fn test_is_inline() {
        assert!(DocNodeKind::PlainText.is_inline());
        assert!(DocNodeKind::CodeSpan.is_inline());
        assert!(DocNodeKind::InlineTag.is_inline());
        assert!(!DocNodeKind::Section.is_inline());
        assert!(!DocNodeKind::BlockTag.is_inline());
    }

    #[test]
    fn test_is_block() {
        assert!(DocNodeKind::BlockTag.is_block());
        assert!(DocNodeKind::Paragraph.is_block());
        assert!(!DocNodeKind::SoftBreak.is_block());
    }

    #[test]
    fn test_inline_elements_comprehensive() {
        let inline_kinds = vec![
            DocNodeKind::PlainText,
            DocNodeKind::SoftBreak,
            DocNodeKind::EscapedText,
            DocNodeKind::ErrorText,
            DocNodeKind::CodeSpan,
            DocNodeKind::InlineTag,
        ];

        for kind in inline_kinds {
            assert!(kind.is_inline(), "{:?} should be inline", kind);
            assert!(!kind.is_container(), "{:?} should not be container", kind);
        }
    }

    #[test]
    fn test_particle_is_neither_inline_nor_block() {
        assert!(DocNodeKind::Particle.is_particle());
        assert!(!DocNodeKind::Particle.is_inline());
        assert!(!DocNodeKind::Particle.is_block());
    }

    #[test]
    fn test_display() {
        assert_eq!(DocNodeKind::CodeSpan.to_string(), "CodeSpan");
        assert_eq!(DocNodeKind::PlainText.to_string(), "PlainText");
        assert_eq!(DocNodeKind::Section.to_string(), "Section");
    }

    #[test]
    fn test_display_all_kinds() {
        let kinds = vec![
            (DocNodeKind::Particle, "Particle"),
            (DocNodeKind::PlainText, "PlainText"),
            (DocNodeKind::SoftBreak, "SoftBreak"),
            (DocNodeKind::EscapedText, "EscapedText"),
            (DocNodeKind::ErrorText, "ErrorText"),
            (DocNodeKind::CodeSpan, "CodeSpan"),
            (DocNodeKind::InlineTag, "InlineTag"),
            (DocNodeKind::BlockTag, "BlockTag"),
            (DocNodeKind::Paragraph, "Paragraph"),
            (DocNodeKind::Section, "Section"),
        ];

        for (kind, expected) in kinds {
            assert_eq!(kind.to_string(), expected);
        }
    }

    #[test]
    fn test_kind_serialization() {
        let kind = DocNodeKind::CodeSpan;
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, "\"CodeSpan\"");
    }

    #[test]
    fn test_kind_equality() {
        assert_eq!(DocNodeKind::Section, DocNodeKind::Section);
        assert_ne!(DocNodeKind::Section, DocNodeKind::Paragraph);
    }
}
