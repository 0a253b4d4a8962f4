//! Structured construction of API request paths.
//!
//! Identifiers are appended as discrete, percent-encoded segments. An id
//! that happens to contain a literal like `did` or a `/` cannot corrupt the
//! surrounding path, which rules out the whole template-token-collision
//! class of bugs.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters escaped inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'/')
    .add(b'%');

/// Builder for an API path rooted at the platform base URL.
#[derive(Clone, Debug, Default)]
pub struct ApiPath {
    buf: String,
}

impl ApiPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append fixed literal segments; `literal` may contain several
    /// separated by `/`.
    pub fn push(mut self, literal: &str) -> Self {
        for part in literal.split('/').filter(|p| !p.is_empty()) {
            self.buf.push('/');
            self.buf.push_str(part);
        }
        self
    }

    /// Append one caller-supplied identifier as a single encoded segment.
    pub fn push_id(mut self, id: &str) -> Self {
        self.buf.push('/');
        for piece in utf8_percent_encode(id, SEGMENT) {
            self.buf.push_str(piece);
        }
        self
    }

    pub fn build(self) -> String {
        self.buf
    }
}
