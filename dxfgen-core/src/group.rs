//! Group-code writer: the leaf primitive every layer above builds on.
//!
//! A DXF file is a flat stream of (group code, value) pairs, each written
//! as two consecutive text records. The group code is an integer tag
//! identifying the semantic role of the value that follows (e.g. 10 is the
//! primary X coordinate).

use std::fmt::Display;
use std::io::Write;

use crate::error::Result;

/// Writes group-code/value pairs to an owned output sink.
///
/// This is a thin formatting step: no buffering, retries, or validation of
/// its own. Write failures propagate to the caller.
pub struct GroupWriter<W: Write> {
    sink: W,
}

impl<W: Write> GroupWriter<W> {
    pub fn new(sink: W) -> Self {
        Self { sink }
    }

    /// Emit one group code and its value as two consecutive records.
    ///
    /// Codes are written unpadded; values use their default textual form.
    pub fn pair(&mut self, code: i32, value: impl Display) -> Result<()> {
        writeln!(self.sink, "{}", code)?;
        writeln!(self.sink, "{}", value)?;
        Ok(())
    }

    /// Flush the underlying sink.
    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Release the underlying sink.
    pub fn into_inner(self) -> W {
        self.sink
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(writer: GroupWriter<Vec<u8>>) -> Vec<String> {
        String::from_utf8(writer.into_inner())
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_pair_writes_two_records() {
        let mut writer = GroupWriter::new(Vec::new());
        writer.pair(0, "SECTION").unwrap();
        writer.pair(2, "ENTITIES").unwrap();
        assert_eq!(records(writer), ["0", "SECTION", "2", "ENTITIES"]);
    }

    #[test]
    fn test_numeric_values_use_display_form() {
        let mut writer = GroupWriter::new(Vec::new());
        writer.pair(10, 100.0_f64).unwrap();
        writer.pair(20, 57.5_f64).unwrap();
        writer.pair(8, 2_i32).unwrap();
        assert_eq!(records(writer), ["10", "100", "20", "57.5", "8", "2"]);
    }
}
