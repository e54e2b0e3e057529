//! Input tokenizer.

mod error;

#[cfg(test)]
mod tests;

use core::ops;
use std::str::from_utf8;

use bstr::{BStr, ByteSlice};

pub use self::error::{ErrorKind, InputError};

pub(self) type Result<T> = std::result::Result<T, InputError>;

pub(crate) const NL: u8 = b'\n';

/// Helper to parse input.
///
/// The index tracks where in the original data the current input starts, so
/// that errors raised from sub-inputs carry spans which point into the
/// original data.
#[derive(Debug, Clone, Copy)]
pub struct Input<'a> {
    /// The data being parsed.
    data: &'a [u8],
    /// Offset of `data` in the original input.
    index: usize,
}

impl<'a> Input<'a> {
    /// Construct a new input processor.
    #[inline]
    pub fn new(data: &'a [u8], index: usize) -> Self {
        Self { data, index }
    }

    /// Access index of input string.
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Test if input is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the length of the current input.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Get input being processed.
    #[inline]
    pub fn as_data(&self) -> &'a [u8] {
        self.data
    }

    /// Get remaining binary string of the input.
    #[inline]
    pub fn as_bstr(&self) -> &'a BStr {
        BStr::new(self.data)
    }

    /// Strip leading and trailing whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::Input;
    ///
    /// let input = Input::new(b"  Test: divisible by 23 \r", 0).trim();
    /// assert_eq!(input.as_data(), b"Test: divisible by 23");
    /// assert_eq!(input.index(), 2);
    /// ```
    pub fn trim(self) -> Self {
        let start = self.find(0, |b| !b.is_ascii_whitespace());
        let trimmed = self.data[start..].trim_end();

        Self {
            data: trimmed,
            index: self.index.saturating_add(start),
        }
    }

    /// Strip the given prefix, returning the remaining input if it matched.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::input::Input;
    ///
    /// let input = Input::new(b"If true: throw to monkey 2", 0);
    /// let rest = input.strip_prefix(b"If true:").unwrap();
    /// assert_eq!(rest.as_data(), b" throw to monkey 2");
    /// assert_eq!(rest.index(), 8);
    /// assert!(input.strip_prefix(b"If false:").is_none());
    /// ```
    pub fn strip_prefix(&self, prefix: &[u8]) -> Option<Self> {
        let data = self.data.strip_prefix(prefix)?;

        Some(Self {
            data,
            index: self.index.saturating_add(prefix.len()),
        })
    }

    /// Split on the given byte until the input is exhausted.
    #[inline]
    pub fn splitn(&mut self, byte: u8) -> impl InputIterator<'a> + '_ {
        return Iterator { input: self, byte };

        struct Iterator<'p, 'a> {
            input: &'p mut Input<'a>,
            byte: u8,
        }

        impl<'a> InputIterator<'a> for Iterator<'_, 'a> {
            #[inline]
            fn index(&self) -> usize {
                self.input.index
            }

            #[inline]
            fn next(&mut self) -> Option<Input<'a>> {
                self.input.split_once(self.byte)
            }
        }
    }

    /// Parse the next value as T.
    #[inline]
    #[allow(clippy::should_implement_trait)]
    pub fn next<T>(&mut self) -> Result<T>
    where
        T: FromInput<'a>,
    {
        T::from_input(self)
    }

    /// Try parse the next value as `T`, returns `None` if there is no more
    /// non-whitespace data to process.
    #[inline]
    pub fn try_next<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        T::try_from_input(self)
    }

    /// Parse the next line as `T`, returns `Ok(None)` if there is no more
    /// data to process.
    #[inline]
    pub fn try_line<T>(&mut self) -> Result<Option<T>>
    where
        T: FromInput<'a>,
    {
        let Some(mut line) = self.split_once(NL) else {
            return Ok(None);
        };

        line.try_next()
    }

    /// Try to parse the next whitespace-separated word, returning the index
    /// at which it starts.
    pub fn try_next_word<T>(&mut self) -> Result<Option<(usize, T)>>
    where
        T: FromInput<'a>,
    {
        let s = self.find(0, |b| !b.is_ascii_whitespace());
        let n = self.find(s, u8::is_ascii_whitespace);

        if s == n {
            return Ok(None);
        }

        let Some(mut input) = self.slice(s..n) else {
            return Ok(None);
        };

        let Some(value) = T::try_from_input(&mut input)? else {
            return Ok(None);
        };

        self.advance(n);
        Ok(Some((self.index - (n - s), value)))
    }

    /// Split once at the given byte or until the end of the input.
    fn split_once(&mut self, b: u8) -> Option<Input<'a>> {
        if self.data.is_empty() {
            return None;
        }

        let index = self.index;

        let Some(at) = memchr::memchr(b, self.data) else {
            let data = self.data;
            self.advance(data.len());
            return Some(Input::new(data, index));
        };

        let data = self.data.get(..at)?;
        self.advance(at.checked_add(1)?);
        Some(Input::new(data, index))
    }

    /// Find by predicate.
    fn find(&self, mut n: usize, p: fn(&u8) -> bool) -> usize {
        while let Some(c) = self.data.get(n) {
            if p(c) {
                break;
            }

            n += 1;
        }

        n
    }

    #[inline]
    fn advance(&mut self, n: usize) {
        let n = n.min(self.data.len());
        self.data = &self.data[n..];
        self.index = self.index.saturating_add(n);
    }

    /// Construct a sub-range.
    #[inline]
    fn slice(&self, range: ops::Range<usize>) -> Option<Input<'a>> {
        let index = self.index.checked_add(range.start)?;

        Some(Self {
            data: self.data.get(range)?,
            index,
        })
    }
}

/// A value that can be parsed from input.
pub trait FromInput<'a>: Sized {
    /// Error kind raised when the value is missing.
    #[inline]
    fn error_kind() -> ErrorKind {
        ErrorKind::UnexpectedEof
    }

    /// Try to parse a value, returning `Ok(None)` if there is nothing to
    /// parse.
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>>;

    /// Parse a value from a given input.
    #[inline]
    fn from_input(p: &mut Input<'a>) -> Result<Self> {
        let index = p.index;

        let Some(value) = Self::try_from_input(p)? else {
            return Err(InputError::new(index..p.index, Self::error_kind()));
        };

        Ok(value)
    }
}

/// Iterator over inputs.
pub trait InputIterator<'a> {
    /// Current index of the input iterator.
    fn index(&self) -> usize;

    /// Get next input.
    fn next(&mut self) -> Option<Input<'a>>;
}

/// Parse something from a sequence of inputs.
pub trait FromInputIter<'a>: Sized {
    /// Construct a value out of the inputs produced by an iterator.
    fn from_input_iter<I>(inputs: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>;
}

macro_rules! tuple {
    ($num:literal => $first:ident $first_id:ident $(, $rest:ident $rest_id:ident)* $(,)?) => {
        impl<'a, $first, $($rest,)*> FromInput<'a> for ($first, $($rest, )*)
        where
            $first: FromInput<'a>,
            $($rest: FromInput<'a>,)*
        {
            #[inline]
            fn error_kind() -> ErrorKind {
                ErrorKind::ExpectedTuple($num)
            }

            #[inline]
            fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
                let Some($first_id) = p.try_next()? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = p.try_next()? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }

        impl<'a, $first, $($rest,)*> FromInputIter<'a> for ($first, $($rest,)*)
        where
            $first: FromInput<'a>,
            $($rest: FromInput<'a>,)*
        {
            #[inline]
            fn from_input_iter<I>(mut inputs: I) -> Result<Option<Self>>
            where
                I: InputIterator<'a>
            {
                let Some(mut $first_id) = inputs.next() else {
                    return Ok(None);
                };

                $(
                    let Some(mut $rest_id) = inputs.next() else {
                        return Ok(None);
                    };
                )*

                let Some($first_id) = <$first>::try_from_input(&mut $first_id)? else {
                    return Ok(None);
                };

                $(
                    let Some($rest_id) = <$rest>::try_from_input(&mut $rest_id)? else {
                        return Ok(None);
                    };
                )*

                Ok(Some(($first_id, $($rest_id,)*)))
            }
        }
    }
}

macro_rules! integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<'a> FromInput<'a> for $ty {
                #[inline]
                fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
                    let Some((start, string)) = p.try_next_word::<&str>()? else {
                        return Ok(None);
                    };

                    let Ok(n) = str::parse(string) else {
                        return Err(InputError::new(start..p.index, ErrorKind::NotInteger(string.into())));
                    };

                    Ok(Some(n))
                }
            }
        )*
    };
}

tuple!(1 => A a);
tuple!(2 => A a, B b);
tuple!(3 => A a, B b, C c);
tuple!(4 => A a, B b, C c, D d);
tuple!(5 => A a, B b, C c, D d, E e);
tuple!(6 => A a, B b, C c, D d, E e, F f);

integer!(i64);

impl<'a> FromInput<'a> for Input<'a> {
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let rest = *p;
        p.advance(p.len());
        Ok(Some(rest))
    }
}

impl<'a> FromInput<'a> for &'a [u8] {
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let data = p.data;
        p.advance(data.len());
        Ok(Some(data))
    }
}

impl<'a> FromInput<'a> for &'a str {
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let index = p.index;

        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        let Ok(data) = from_utf8(data) else {
            return Err(InputError::new(index..p.index, ErrorKind::NotUtf8));
        };

        Ok(Some(data))
    }
}

impl<'a> FromInput<'a> for &'a BStr {
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let Some(data) = <&[u8]>::try_from_input(p)? else {
            return Ok(None);
        };

        Ok(Some(BStr::new(data)))
    }
}

impl<'a, T> FromInput<'a> for Vec<T>
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let mut output = Vec::new();

        while let Some(element) = T::try_from_input(p)? {
            output.push(element);
        }

        Ok(Some(output))
    }
}

impl<'a, T> FromInputIter<'a> for Vec<T>
where
    T: FromInput<'a>,
{
    #[inline]
    fn from_input_iter<I>(mut it: I) -> Result<Option<Self>>
    where
        I: InputIterator<'a>,
    {
        let mut output = Vec::new();

        while let Some(mut value) = it.next() {
            output.push(T::from_input(&mut value)?);

            let rest = value.trim();

            if !rest.is_empty() {
                let span = rest.index..rest.index.saturating_add(rest.len());
                let kind = ErrorKind::Trailing(rest.as_bstr().to_string().into());
                return Err(InputError::new(span, kind));
            }
        }

        Ok(Some(output))
    }
}

/// Split on the separator `D` until the end of input.
///
/// Every piece must be consumed in full, and a trailing separator is an
/// error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Split<const D: char, T>(pub T);

impl<'a, const D: char, T> FromInput<'a> for Split<D, T>
where
    T: FromInputIter<'a>,
{
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let trimmed = p.trim();

        if trimmed.data.last() == Some(&(D as u8)) {
            let end = trimmed.index.saturating_add(trimmed.len());
            return Err(InputError::new(end..end, ErrorKind::UnexpectedEof));
        }

        let it = p.splitn(D as u8);

        let Some(out) = T::from_input_iter(it)? else {
            return Ok(None);
        };

        Ok(Some(Self(out)))
    }
}

#[derive(Debug)]
#[non_exhaustive]
pub struct Skip;

impl<'a> FromInput<'a> for Skip {
    #[inline]
    fn try_from_input(_: &mut Input<'a>) -> Result<Option<Self>> {
        Ok(Some(Self))
    }
}

/// Parse a word of input, which parses until we reach a whitespace character.
#[derive(Debug)]
pub struct W<T = Skip>(pub T);

impl<'a, T> FromInput<'a> for W<T>
where
    T: FromInput<'a>,
{
    #[inline]
    fn try_from_input(p: &mut Input<'a>) -> Result<Option<Self>> {
        let Some((_, value)) = p.try_next_word()? else {
            return Ok(None);
        };

        Ok(Some(Self(value)))
    }
}
