//! Source buffers and excerpts.
//!
//! An [`Excerpt`] ties a node back to the exact bytes of the comment it was
//! parsed from. Excerpts are produced by the tokenizer/parser and validated
//! once, at construction; everything downstream treats them as trusted.

use std::sync::Arc;

use thiserror::Error;

use crate::Span;

/// A shared, immutable source text buffer.
///
/// Cloning is cheap (reference-counted), so every excerpt over the same
/// comment shares one allocation. The buffer never changes after creation,
/// which is what makes a completed tree safe to read from multiple threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    text: Arc<str>,
}

impl SourceText {
    /// Creates a new source buffer from the given text.
    pub fn new(text: impl Into<Arc<str>>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the full buffer contents.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the buffer length in bytes.
    #[inline]
    pub fn len(&self) -> u32 {
        self.text.len() as u32
    }

    /// Returns true if the buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl From<&str> for SourceText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SourceText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

/// Errors raised when constructing an [`Excerpt`] with an inconsistent span.
///
/// These are producer-side errors: the tokenizer/parser building excerpts is
/// responsible for handing over well-formed ranges, and nothing downstream
/// re-checks them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExcerptError {
    /// The span's start offset is greater than its end offset.
    #[error("Inverted range: start {start} is greater than end {end}")]
    InvertedRange {
        /// Start byte offset.
        start: u32,
        /// End byte offset.
        end: u32,
    },

    /// The span extends past the end of the source buffer.
    #[error("Range {start}..{end} is out of bounds for source of length {len}")]
    OutOfBounds {
        /// Start byte offset.
        start: u32,
        /// End byte offset.
        end: u32,
        /// Source buffer length in bytes.
        len: u32,
    },

    /// The span does not fall on UTF-8 character boundaries.
    #[error("Range {start}..{end} does not fall on character boundaries")]
    NotCharBoundary {
        /// Start byte offset.
        start: u32,
        /// End byte offset.
        end: u32,
    },
}

/// An immutable reference to a contiguous span of source text.
///
/// An excerpt pairs a [`SourceText`] buffer with a [`Span`] into it. It is
/// the leaf of the framework's dependency graph: particles reference
/// excerpts, nodes own particles, and concatenating excerpt text in tree
/// order reproduces the original comment exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    source: SourceText,
    span: Span,
}

impl Excerpt {
    /// Creates a new excerpt over `span` of `source`.
    ///
    /// The span is validated here and nowhere else: it must not be inverted,
    /// must lie within the buffer, and must fall on UTF-8 character
    /// boundaries so that [`Excerpt::text`] is always a valid substring.
    pub fn new(source: &SourceText, span: Span) -> Result<Self, ExcerptError> {
        if span.start > span.end {
            return Err(ExcerptError::InvertedRange {
                start: span.start,
                end: span.end,
            });
        }
        if span.end > source.len() {
            return Err(ExcerptError::OutOfBounds {
                start: span.start,
                end: span.end,
                len: source.len(),
            });
        }
        let text = source.as_str();
        if !text.is_char_boundary(span.start as usize) || !text.is_char_boundary(span.end as usize)
        {
            return Err(ExcerptError::NotCharBoundary {
                start: span.start,
                end: span.end,
            });
        }
        Ok(Self {
            source: source.clone(),
            span,
        })
    }

    /// Returns the substring of the source buffer denoted by this excerpt.
    #[inline]
    pub fn text(&self) -> &str {
        &self.source.as_str()[self.span.start as usize..self.span.end as usize]
    }

    /// Returns the span of this excerpt within its source buffer.
    #[inline]
    pub const fn span(&self) -> Span {
        self.span
    }

    /// Returns the source buffer this excerpt points into.
    #[inline]
    pub const fn source(&self) -> &SourceText {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_excerpt_text() {
        let source = SourceText::new("`hello`");
        let excerpt = Excerpt::new(&source, Span::new(1, 6)).unwrap();
        assert_eq!(excerpt.text(), "hello");
        assert_eq!(excerpt.span(), Span::new(1, 6));
    }

    #[test]
    fn test_excerpt_full_buffer() {
        let source = SourceText::new("abc");
        let excerpt = Excerpt::new(&source, Span::new(0, 3)).unwrap();
        assert_eq!(excerpt.text(), "abc");
    }

    #[test]
    fn test_excerpt_empty_span() {
        let source = SourceText::new("abc");
        let excerpt = Excerpt::new(&source, Span::new(1, 1)).unwrap();
        assert_eq!(excerpt.text(), "");
    }

    #[test]
    fn test_excerpt_inverted_range() {
        let source = SourceText::new("abc");
        let err = Excerpt::new(&source, Span::new(2, 1)).unwrap_err();
        assert_eq!(err, ExcerptError::InvertedRange { start: 2, end: 1 });
    }

    #[test]
    fn test_excerpt_out_of_bounds() {
        let source = SourceText::new("abc");
        let err = Excerpt::new(&source, Span::new(0, 4)).unwrap_err();
        assert_eq!(
            err,
            ExcerptError::OutOfBounds {
                start: 0,
                end: 4,
                len: 3
            }
        );
    }

    #[test]
    fn test_excerpt_char_boundary() {
        // 'é' is two bytes; offset 1 splits it
        let source = SourceText::new("é");
        let err = Excerpt::new(&source, Span::new(0, 1)).unwrap_err();
        assert_eq!(err, ExcerptError::NotCharBoundary { start: 0, end: 1 });
    }

    #[test]
    fn test_excerpts_share_buffer() {
        let source = SourceText::new("`hello`");
        let opening = Excerpt::new(&source, Span::new(0, 1)).unwrap();
        let closing = Excerpt::new(&source, Span::new(6, 7)).unwrap();
        assert_eq!(opening.text(), "`");
        assert_eq!(closing.text(), "`");
        assert_eq!(opening.source(), closing.source());
    }

    #[test]
    fn test_error_display() {
        let source = SourceText::new("abc");
        let err = Excerpt::new(&source, Span::new(0, 4)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Range 0..4 is out of bounds for source of length 3"
        );
    }
}
