//! Plain text runs, soft breaks, escapes, and error text.

use serde::Serialize;

use crate::{DocNodeRef, DocParticle, DocParticleParameters, Excerpt};

/// Constructor parameters for [`DocPlainText`].
#[derive(Debug, Clone, Default)]
pub struct DocPlainTextParameters {
    /// Excerpt for the text, when parsed from source.
    pub text_excerpt: Option<Excerpt>,
    /// The plain text content.
    pub text: String,
}

/// A run of plain comment text with no special meaning.
#[derive(Debug, Clone, PartialEq)]
pub struct DocPlainText {
    text: DocParticle,
}

impl DocPlainText {
    /// Creates a new plain text node.
    pub fn new(parameters: DocPlainTextParameters) -> Self {
        Self {
            text: DocParticle::new(DocParticleParameters {
                content: parameters.text,
                excerpt: parameters.text_excerpt,
            }),
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocPlainTextParameters) {
        *self = Self::new(parameters);
    }

    /// The text content.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.content()
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![DocNodeRef::Particle(&self.text)]
    }
}

/// Constructor parameters for [`DocSoftBreak`].
#[derive(Debug, Clone, Default)]
pub struct DocSoftBreakParameters {
    /// Excerpt for the newline sequence, when parsed from source.
    pub newline_excerpt: Option<Excerpt>,
}

/// A soft line break between lines of a paragraph.
///
/// A synthesized soft break renders as `"\n"`. A parsed one takes its
/// particle content from the supplied excerpt, so a `"\r\n"` source
/// round-trips byte-for-byte.
#[derive(Debug, Clone, PartialEq)]
pub struct DocSoftBreak {
    newline: DocParticle,
}

impl DocSoftBreak {
    /// Creates a new soft break node.
    pub fn new(parameters: DocSoftBreakParameters) -> Self {
        let newline = match parameters.newline_excerpt {
            Some(excerpt) => DocParticle::from_excerpt(excerpt),
            None => DocParticle::from_excerpt_or(None, "\n"),
        };
        Self { newline }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocSoftBreakParameters) {
        *self = Self::new(parameters);
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![DocNodeRef::Particle(&self.newline)]
    }
}

impl Default for DocSoftBreak {
    fn default() -> Self {
        Self::new(DocSoftBreakParameters::default())
    }
}

/// The escaping convention an escaped character sequence uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EscapeStyle {
    /// CommonMark backslash escaping, e.g. `\{`.
    CommonMarkBackslash,
}

/// Constructor parameters for [`DocEscapedText`].
#[derive(Debug, Clone)]
pub struct DocEscapedTextParameters {
    /// The escaping convention in use.
    pub escape_style: EscapeStyle,
    /// Excerpt for the encoded text, when parsed from source.
    pub text_excerpt: Option<Excerpt>,
    /// The encoded form, including the escape character (e.g. `\{`).
    pub encoded_text: String,
}

/// A backslash-escaped character sequence.
///
/// The particle holds the encoded form so reconstruction stays lossless;
/// the decoded form is derived on read.
#[derive(Debug, Clone, PartialEq)]
pub struct DocEscapedText {
    escape_style: EscapeStyle,
    encoded_text: DocParticle,
}

impl DocEscapedText {
    /// Creates a new escaped text node.
    pub fn new(parameters: DocEscapedTextParameters) -> Self {
        Self {
            escape_style: parameters.escape_style,
            encoded_text: DocParticle::new(DocParticleParameters {
                content: parameters.encoded_text,
                excerpt: parameters.text_excerpt,
            }),
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocEscapedTextParameters) {
        *self = Self::new(parameters);
    }

    /// The escaping convention in use.
    #[inline]
    pub fn escape_style(&self) -> EscapeStyle {
        self.escape_style
    }

    /// The escaped form as written in the source, e.g. `\{`.
    #[inline]
    pub fn encoded_text(&self) -> &str {
        self.encoded_text.content()
    }

    /// The text with the escape removed, e.g. `{`.
    #[inline]
    pub fn decoded_text(&self) -> &str {
        match self.escape_style {
            EscapeStyle::CommonMarkBackslash => self
                .encoded_text
                .content()
                .strip_prefix('\\')
                .unwrap_or_else(|| self.encoded_text.content()),
        }
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![DocNodeRef::Particle(&self.encoded_text)]
    }
}

/// Constructor parameters for [`DocErrorText`].
#[derive(Debug, Clone)]
pub struct DocErrorTextParameters {
    /// Excerpt for the text, when parsed from source.
    pub text_excerpt: Option<Excerpt>,
    /// The text the parser could not interpret, preserved verbatim.
    pub text: String,
    /// The parser's diagnostic message for this text.
    pub error_message: String,
    /// Where in the source the problem was detected.
    pub error_location: Option<Excerpt>,
}

/// Text the parser could not interpret.
///
/// Malformed input recovery happens entirely in the parser; this node only
/// preserves the bytes it skipped over plus the diagnostic it attached, so
/// the tree still reconstructs losslessly.
#[derive(Debug, Clone, PartialEq)]
pub struct DocErrorText {
    text: DocParticle,
    error_message: String,
    error_location: Option<Excerpt>,
}

impl DocErrorText {
    /// Creates a new error text node.
    pub fn new(parameters: DocErrorTextParameters) -> Self {
        Self {
            text: DocParticle::new(DocParticleParameters {
                content: parameters.text,
                excerpt: parameters.text_excerpt,
            }),
            error_message: parameters.error_message,
            error_location: parameters.error_location,
        }
    }

    /// Atomically replaces this node's children from new parameters.
    pub fn rebuild(&mut self, parameters: DocErrorTextParameters) {
        *self = Self::new(parameters);
    }

    /// The skipped text, exactly as it appeared in the source.
    #[inline]
    pub fn text(&self) -> &str {
        self.text.content()
    }

    /// The parser's diagnostic message.
    #[inline]
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Where in the source the problem was detected.
    #[inline]
    pub fn error_location(&self) -> Option<&Excerpt> {
        self.error_location.as_ref()
    }

    pub fn children(&self) -> Vec<DocNodeRef<'_>> {
        vec![DocNodeRef::Particle(&self.text)]
    }
}
