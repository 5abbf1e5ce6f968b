use super::{total_tokens, ResultItem, TotalOutput};
use crate::error::Result;
use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Serializer, Value};
use std::io;

/// Compact output with `", "` and `": "` separators, the layout Python's
/// `json.dumps` writes by default.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

fn to_spaced_string<T: Serialize>(value: &T) -> Result<String> {
    let mut buf = Vec::new();
    value.serialize(&mut Serializer::with_formatter(&mut buf, SpacedFormatter))?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// `{"total_tokens": N}` when totalling, otherwise a label → encoded map.
/// Repeated labels keep their first position and their last value.
pub fn render(results: &[ResultItem], total: bool) -> Result<String> {
    if total {
        let out = TotalOutput {
            total_tokens: total_tokens(results),
        };
        return Ok(format!("{}\n", to_spaced_string(&out)?));
    }

    let mut map = Map::new();
    for r in results {
        map.insert(r.label.clone(), serde_json::to_value(&r.encoded)?);
    }
    Ok(format!("{}\n", serde_json::to_string_pretty(&Value::Object(map))?))
}
