use core::fmt;
use core::ops::Range;

#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
    NotInteger(Box<str>),
    NotUtf8,
    ExpectedTuple(usize),
    UnexpectedEof,
    Trailing(Box<str>),
    /// Error raised by a custom input processor, see [from_input!].
    ///
    /// [from_input!]: crate::from_input
    Boxed(anyhow::Error),
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::NotInteger(n) => write!(f, "not an integer or integer overflow `{n}`"),
            ErrorKind::NotUtf8 => write!(f, "not utf-8"),
            ErrorKind::ExpectedTuple(n) => write!(f, "expected tuple of length `{n}`"),
            ErrorKind::UnexpectedEof => write!(f, "unexpected eof"),
            ErrorKind::Trailing(rest) => write!(f, "unexpected trailing input `{rest}`"),
            ErrorKind::Boxed(e) => e.fmt(f),
        }
    }
}

/// Error raised through input processing.
#[derive(Debug)]
pub struct InputError {
    span: Range<usize>,
    kind: ErrorKind,
}

impl InputError {
    /// Construct a new input error.
    #[inline]
    pub fn new(span: Range<usize>, kind: ErrorKind) -> Self {
        Self { span, kind }
    }

    /// The span of the input the error refers to.
    #[inline]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    #[inline]
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for InputError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (at {:?})", self.kind, self.span)
    }
}

impl std::error::Error for InputError {}
