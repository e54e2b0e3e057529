use core::fmt;
use std::io::{self, Write};

use serde::Serialize;

/// Output of a solver, either human readable or JSON lines.
pub struct Output<O> {
    out: O,
    json: bool,
}

impl<O> Output<O>
where
    O: Write,
{
    pub(crate) fn new(out: O, json: bool) -> Self {
        Self { out, json }
    }

    /// Consume the output, returning the underlying writer.
    pub fn into_inner(self) -> O {
        self.out
    }

    pub fn error(&mut self, m: impl fmt::Display) -> io::Result<()> {
        self.message(MessageKind::Error, m)
    }

    /// Report a named answer.
    pub fn answer<T>(&mut self, name: &str, value: T) -> io::Result<()>
    where
        T: fmt::Display + Serialize,
    {
        if self.json {
            self.json(&Line {
                ty: LineType::Answer,
                data: Answer { name, value },
            })
        } else {
            writeln!(self.out, "{name}: {value}")
        }
    }

    fn message(&mut self, kind: MessageKind, m: impl fmt::Display) -> io::Result<()> {
        if self.json {
            self.json(&Line {
                ty: LineType::Message,
                data: Message { output: m, kind },
            })
        } else {
            writeln!(self.out, "{kind}: {m}")
        }
    }

    fn json<T>(&mut self, m: &T) -> io::Result<()>
    where
        T: Serialize,
    {
        serde_json::to_writer(&mut self.out, m)?;
        writeln!(self.out)?;
        Ok(())
    }
}

#[derive(Serialize)]
struct Line<T> {
    #[serde(rename = "type")]
    ty: LineType,
    data: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum LineType {
    Message,
    Answer,
}

#[derive(Serialize)]
struct Answer<'a, T> {
    name: &'a str,
    value: T,
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
enum MessageKind {
    Error,
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageKind::Error => write!(f, "error"),
        }
    }
}

struct Message<T> {
    output: T,
    kind: MessageKind,
}

impl<T> Serialize for Message<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("kind", &self.kind)?;
        map.serialize_entry("output", &DisplayString(&self.output))?;
        map.end()
    }
}

struct DisplayString<T>(T);

impl<T> Serialize for DisplayString<T>
where
    T: fmt::Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.0)
    }
}
