use std::io::Read;

use lib::prelude::*;

use crate::error::{Error, ParseError, ParseErrorKind};
use crate::{Actor, Operand, Operation, Operator, Queue, Worry};

/// Keywords which open an actor block.
const HEADERS: [&[u8]; 2] = [b"Monkey", b"Actor"];

/// Read and parse every actor block from the given reader.
pub fn from_reader<R>(mut reader: R) -> Result<Vec<Actor>, Error>
where
    R: Read,
{
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    parse(&data)
}

/// Parse every actor block in `data`, in the order they appear.
///
/// Lines outside of a block which don't open a new one are ignored. A block
/// ends at the first blank line or the end of input, and must define every
/// field.
///
/// # Examples
///
/// ```
/// let actors = mitm::parse(
///     "Monkey 0:
///       Starting items: 79, 98
///       Operation: new = old * 19
///       Test: divisible by 23
///         If true: throw to monkey 2
///         If false: throw to monkey 3
///     ",
/// )?;
///
/// assert_eq!(actors.len(), 1);
/// assert_eq!(actors[0].items.snapshot(), [79, 98]);
/// assert_eq!(actors[0].divisor, 23);
/// # Ok::<_, mitm::Error>(())
/// ```
pub fn parse<D>(data: &D) -> Result<Vec<Actor>, Error>
where
    D: ?Sized + AsRef<[u8]>,
{
    let mut lines = Lines::new(data.as_ref());
    let mut actors = Vec::new();

    while let Some((n, line)) = lines.next()? {
        let Some(header) = strip_header(line) else {
            continue;
        };

        let id = parse_id(header).map_err(|kind| ParseError::new(n, line, kind))?;
        let mut fields = Fields::default();

        while let Some((n, line)) = lines.next()? {
            if line.is_empty() {
                break;
            }

            fields
                .parse_line(line)
                .map_err(|kind| ParseError::new(n, line, kind))?;
        }

        let actor = fields
            .build(id)
            .map_err(|kind| ParseError::new(n, line, kind))?;

        log::trace!("parsed actor {id} at line {}", n + 1);
        actors.push(actor);
    }

    log::debug!("parsed {} actors", actors.len());
    Ok(actors)
}

/// Trimmed lines of input with their zero-based line numbers.
struct Lines<'a> {
    input: Input<'a>,
    line: usize,
}

impl<'a> Lines<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            input: Input::new(data, 0),
            line: 0,
        }
    }

    fn next(&mut self) -> Result<Option<(usize, Input<'a>)>, ParseError> {
        let n = self.line;

        let line = match self.input.try_line::<Input>() {
            Ok(Some(line)) => line,
            Ok(None) => return Ok(None),
            Err(error) => return Err(ParseError::new(n, self.input, error.into())),
        };

        self.line += 1;
        // NB: rebase so that indexes are columns in the line.
        Ok(Some((n, Input::new(line.as_data(), 0).trim())))
    }
}

fn strip_header(line: Input<'_>) -> Option<Input<'_>> {
    for keyword in HEADERS {
        let Some(rest) = line.strip_prefix(keyword) else {
            continue;
        };

        if matches!(rest.as_data().first(), None | Some(b':') | Some(b' ' | b'\t')) {
            return Some(rest);
        }
    }

    None
}

fn parse_id(mut input: Input<'_>) -> Result<usize, ParseErrorKind> {
    let Some(W(token)) = input.try_next::<W<&str>>()? else {
        return Err(ParseErrorKind::MissingId);
    };

    let id = token.strip_suffix(':').unwrap_or(token);

    let Ok(id) = id.parse() else {
        return Err(ParseErrorKind::BadId(token.to_owned()));
    };

    expect_end(input)?;
    Ok(id)
}

/// Error unless all remaining input is whitespace.
fn expect_end(mut input: Input<'_>) -> Result<(), ParseErrorKind> {
    if let Some(W(rest)) = input.try_next::<W<&BStr>>()? {
        return Err(ParseErrorKind::Trailing(rest.to_string()));
    }

    Ok(())
}

/// Fields collected while parsing a block.
#[derive(Default)]
struct Fields {
    items: Option<Queue<Worry>>,
    operation: Option<Operation>,
    divisor: Option<Worry>,
    if_true: Option<usize>,
    if_false: Option<usize>,
}

impl Fields {
    fn parse_line(&mut self, line: Input<'_>) -> Result<(), ParseErrorKind> {
        if let Some(mut input) = line.strip_prefix(b"Starting items:") {
            let Split(items) = input.next::<Split<',', Vec<Worry>>>()?;

            if items.is_empty() {
                return Err(ParseErrorKind::MissingItems);
            }

            return set(&mut self.items, "Starting items", Queue::from(items));
        }

        if let Some(mut input) = line.strip_prefix(b"Operation:") {
            // new = old <operator> <operand>
            let (_, _, _, operator, operand) = input.next::<(W, W, W, Operator, Operand)>()?;
            expect_end(input)?;
            let operation = Operation::new(operator, operand);
            return set(&mut self.operation, "Operation", operation);
        }

        if let Some(mut input) = line.strip_prefix(b"Test:") {
            // divisible by <divisor>
            let (_, _, divisor) = input.next::<(W, W, Worry)>()?;
            expect_end(input)?;

            if divisor == 0 {
                return Err(ParseErrorKind::ZeroDivisor);
            }

            return set(&mut self.divisor, "Test", divisor);
        }

        if let Some(input) = line.strip_prefix(b"If true:") {
            let target = parse_target(input)?;
            return set(&mut self.if_true, "If true", target);
        }

        if let Some(input) = line.strip_prefix(b"If false:") {
            let target = parse_target(input)?;
            return set(&mut self.if_false, "If false", target);
        }

        Err(ParseErrorKind::UnrecognizedLine)
    }

    fn build(self, id: usize) -> Result<Actor, ParseErrorKind> {
        use ParseErrorKind::MissingField;

        Ok(Actor {
            id,
            items: self.items.ok_or(MissingField("Starting items"))?,
            operation: self.operation.ok_or(MissingField("Operation"))?,
            divisor: self.divisor.ok_or(MissingField("Test"))?,
            if_true: self.if_true.ok_or(MissingField("If true"))?,
            if_false: self.if_false.ok_or(MissingField("If false"))?,
            inspected: 0,
        })
    }
}

/// Parse `throw to monkey <target>`.
fn parse_target(mut input: Input<'_>) -> Result<usize, ParseErrorKind> {
    let (_, _, _, target) = input.next::<(W, W, W, i64)>()?;
    expect_end(input)?;

    if target < 0 {
        return Err(ParseErrorKind::NegativeTarget(target));
    }

    usize::try_from(target).map_err(|_| ParseErrorKind::TargetRange(target))
}

fn set<T>(slot: &mut Option<T>, name: &'static str, value: T) -> Result<(), ParseErrorKind> {
    if slot.is_some() {
        return Err(ParseErrorKind::Duplicate(name));
    }

    *slot = Some(value);
    Ok(())
}
