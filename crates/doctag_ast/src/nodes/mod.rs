//! Concrete node kinds.
//!
//! Every kind follows the same pattern: a parameters struct with an optional
//! [`Excerpt`](crate::Excerpt) per literal token position plus the required
//! semantic values, a single-phase `new` that materializes all internal
//! particles, an atomic `rebuild`, derived accessors, and `children()` in
//! source order.

mod code_span;
mod containers;
mod tags;
mod text;

pub use code_span::{DocCodeSpan, DocCodeSpanParameters};
pub use containers::{DocParagraph, DocParagraphParameters, DocSection, DocSectionParameters};
pub use tags::{DocBlockTag, DocBlockTagParameters, DocInlineTag, DocInlineTagParameters};
pub use text::{
    DocErrorText, DocErrorTextParameters, DocEscapedText, DocEscapedTextParameters, DocPlainText,
    DocPlainTextParameters, DocSoftBreak, DocSoftBreakParameters, EscapeStyle,
};
