//! DocParticle definition.
//!
//! Particles are the leaves of every doc comment tree: a literal string of
//! comment text, optionally tied back to the excerpt it was read from.

use serde::Serialize;

use crate::Excerpt;

/// Constructor parameters for [`DocParticle`].
#[derive(Debug, Clone)]
pub struct DocParticleParameters {
    /// The literal text this particle represents.
    pub content: String,
    /// The source excerpt the content was read from, if the particle was
    /// parsed rather than synthesized.
    pub excerpt: Option<Excerpt>,
}

/// A leaf tree node pairing literal text with an optional source excerpt.
///
/// Particles represent verbatim runs of comment text: a delimiter, a literal
/// keyword, raw code, whitespace. When the excerpt is present, `content` is
/// the exact substring the excerpt denotes (the parser guarantees this; the
/// particle does not re-read the buffer). When it is absent, `content` is a
/// synthesized canonical value used for programmatically built nodes.
///
/// Particles are immutable after construction and never have children.
#[derive(Debug, Clone, PartialEq)]
pub struct DocParticle {
    content: String,
    excerpt: Option<Excerpt>,
}

impl DocParticle {
    /// Creates a new particle.
    pub fn new(parameters: DocParticleParameters) -> Self {
        Self {
            content: parameters.content,
            excerpt: parameters.excerpt,
        }
    }

    /// Creates a particle from an optional excerpt, falling back to a fixed
    /// canonical string when no excerpt was supplied.
    ///
    /// This is the shape every delimiter particle takes: the grammar fixes
    /// the delimiter text, so a parsed delimiter's excerpt always denotes
    /// exactly the canonical string, and synthesized input gets the same
    /// canonical text with no excerpt.
    pub(crate) fn from_excerpt_or(excerpt: Option<Excerpt>, canonical: &str) -> Self {
        Self {
            content: canonical.to_string(),
            excerpt,
        }
    }

    /// Creates a particle whose content is read from its excerpt.
    ///
    /// Used where the grammar does not fix the particle text (e.g. a soft
    /// break, which may be `"\n"` or `"\r\n"` in the source), so the
    /// content/excerpt equality invariant holds by construction.
    pub(crate) fn from_excerpt(excerpt: Excerpt) -> Self {
        Self {
            content: excerpt.text().to_string(),
            excerpt: Some(excerpt),
        }
    }

    /// Returns the literal text exactly as supplied at construction.
    #[inline]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the source excerpt, if this particle was parsed from source.
    #[inline]
    pub fn excerpt(&self) -> Option<&Excerpt> {
        self.excerpt.as_ref()
    }
}

impl Serialize for DocParticle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut len = 2; // kind, content
        if self.excerpt.is_some() {
            len += 1;
        }

        let mut state = serializer.serialize_struct("DocParticle", len)?;
        state.serialize_field("kind", "Particle")?;
        state.serialize_field("content", &self.content)?;
        if let Some(excerpt) = &self.excerpt {
            let span = excerpt.span();
            state.serialize_field("range", &[span.start, span.end])?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceText, Span};

    #[test]
    fn test_particle_content() {
        let particle = DocParticle::new(DocParticleParameters {
            content: "hello".to_string(),
            excerpt: None,
        });
        assert_eq!(particle.content(), "hello");
        assert!(particle.excerpt().is_none());
    }

    #[test]
    fn test_particle_with_excerpt() {
        let source = SourceText::new("`hello`");
        let excerpt = Excerpt::new(&source, Span::new(1, 6)).unwrap();
        let particle = DocParticle::new(DocParticleParameters {
            content: "hello".to_string(),
            excerpt: Some(excerpt),
        });

        assert_eq!(particle.content(), "hello");
        let excerpt = particle.excerpt().unwrap();
        assert_eq!(excerpt.text(), particle.content());
    }

    #[test]
    fn test_particle_from_excerpt_or_synthesized() {
        let particle = DocParticle::from_excerpt_or(None, "`");
        assert_eq!(particle.content(), "`");
        assert!(particle.excerpt().is_none());
    }

    #[test]
    fn test_particle_from_excerpt_or_parsed() {
        let source = SourceText::new("`x`");
        let excerpt = Excerpt::new(&source, Span::new(0, 1)).unwrap();
        let particle = DocParticle::from_excerpt_or(Some(excerpt), "`");
        assert_eq!(particle.content(), "`");
        assert_eq!(particle.excerpt().unwrap().span(), Span::new(0, 1));
    }

    #[test]
    fn test_particle_from_excerpt_reads_content() {
        let source = SourceText::new("a\r\nb");
        let excerpt = Excerpt::new(&source, Span::new(1, 3)).unwrap();
        let particle = DocParticle::from_excerpt(excerpt);

        assert_eq!(particle.content(), "\r\n");
        assert_eq!(particle.content(), particle.excerpt().unwrap().text());
    }

    #[test]
    fn test_serialization_without_excerpt() {
        let particle = DocParticle::new(DocParticleParameters {
            content: "x".to_string(),
            excerpt: None,
        });
        let json = serde_json::to_value(&particle).unwrap();

        assert_eq!(json["kind"], "Particle");
        assert_eq!(json["content"], "x");
        assert!(json.get("range").is_none());
    }

    #[test]
    fn test_serialization_with_excerpt() {
        let source = SourceText::new("`hello`");
        let excerpt = Excerpt::new(&source, Span::new(1, 6)).unwrap();
        let particle = DocParticle::new(DocParticleParameters {
            content: "hello".to_string(),
            excerpt: Some(excerpt),
        });
        let json = serde_json::to_value(&particle).unwrap();

        assert_eq!(json["kind"], "Particle");
        assert_eq!(json["range"][0], 1);
        assert_eq!(json["range"][1], 6);
    }
}
