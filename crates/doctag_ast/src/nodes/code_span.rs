//! Inline code spans.

use crate::{DocNodeRef, DocParticle, DocParticleParameters, Excerpt};

/// Constructor parameters for [`DocCodeSpan`].
#[derive(Debug, Clone, Default)]
pub struct DocCodeSpanParameters {
    /// Excerpt for the opening backtick, when parsed from source.
    pub opening_delimiter_excerpt: Option<Excerpt>,
    /// Excerpt for the code content, when parsed from source.
    pub code_excerpt: Option<Excerpt>,
    /// The code text, excluding the backtick delimiters.
    pub code: String,
    /// Excerpt for the closing backtick, when parsed from source.
    pub closing_delimiter_excerpt: Option<Excerpt>,
}

/// A CommonMark-style code span: code surrounded by single backtick
/// characters.
///
/// The node never inspects its own `code` value; a `code` string containing
/// a literal backtick or newline is the upstream parser's problem to reject
/// before constructing this node.
#[derive(Debug, Clone, PartialEq)]
pub struct DocCodeSpan {
    // The opening ` delimiter
    opening_delimiter: DocParticle,
    // The code content
    code: DocParticle,
    // The closing ` delimiter
    closing_delimiter: DocParticle,
}

impl DocCodeSpan {
    /// Creates a new code span, materializing all three particles.
    ///
    /// Delimiter particle content is always a single backtick; the supplied
    /// excerpts (if any) tie each particle back to source.
    pub fn new(parameters: DocCodeSpanParameters) -> Self {
        Self {
            opening_delimiter: DocParticle::from_excerpt_or(
                parameters.opening_delimiter_excerpt,
                "`",
            ),
            code: DocParticle::new(DocParticleParameters {
                content: parameters.code,
                excerpt: parameters.code_excerpt,
            }),
            closing_delimiter: DocParticle::from_excerpt_or(
                parameters.closing_delimiter_excerpt,
                "`",
            ),
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocCodeSpanParameters) {
        *self = Self::new(parameters);
    }

    /// The text that should be rendered as code, excluding the backtick
    /// delimiters.
    #[inline]
    pub fn code(&self) -> &str {
        self.code.content()
    }

    /// Returns `[opening delimiter, code, closing delimiter]`, always
    /// exactly three children in source order.
    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![
            DocNodeRef::Particle(&self.opening_delimiter),
            DocNodeRef::Particle(&self.code),
            DocNodeRef::Particle(&self.closing_delimiter),
        ]
    }
}
