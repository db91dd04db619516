//! DXF ASCII text reader

use super::stream_reader::{DxfCodePair, DxfStreamReader};
use crate::error::{DxfError, Result};
use encoding_rs::Encoding;
use std::io::{BufReader, Read};

/// DXF ASCII tag stream reader
///
/// Reads alternating group-code and value lines, tracking a 1-based line
/// counter for diagnostics. Only forward progress occurs; the reader never
/// seeks and never closes the underlying stream.
pub struct DxfTextReader<R: Read> {
    reader: BufReader<R>,
    line_number: usize,
    peeked_pair: Option<DxfCodePair>,
    /// Non-UTF8 fallback encoding.  `None` means use Latin-1 (byte-to-char).
    encoding: Option<&'static Encoding>,
}

impl<R: Read> DxfTextReader<R> {
    /// Create a new DXF text reader
    pub fn new(reader: BufReader<R>) -> Self {
        Self {
            reader,
            line_number: 0,
            peeked_pair: None,
            encoding: None,
        }
    }

    /// Set the fallback encoding used for non-UTF8 value lines
    pub fn set_encoding(&mut self, encoding: &'static Encoding) {
        self.encoding = Some(encoding);
    }

    /// Read a single line from the stream, handling non-UTF8 bytes gracefully.
    /// Uses the configured encoding for fallback, or Latin-1 if none set.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut bytes = Vec::new();

        loop {
            let mut byte = [0u8; 1];
            match self.reader.read(&mut byte) {
                Ok(0) => {
                    // EOF
                    if bytes.is_empty() {
                        return Ok(None);
                    }
                    break;
                }
                Ok(_) => {
                    if byte[0] == b'\n' {
                        break;
                    }
                    bytes.push(byte[0]);
                }
                Err(e) => return Err(e.into()),
            }
        }

        self.line_number += 1;

        // Try UTF-8 first, then the configured encoding or Latin-1 fallback
        let line = match String::from_utf8(bytes.clone()) {
            Ok(s) => s,
            Err(_) => {
                if let Some(enc) = self.encoding {
                    let (decoded, _, _) = enc.decode(&bytes);
                    decoded.into_owned()
                } else {
                    // Latin-1 is a 1:1 mapping of bytes 0-255 to code points
                    bytes.iter().map(|&b| b as char).collect()
                }
            }
        };

        Ok(Some(line.trim().to_string()))
    }

    /// Read a code/value pair from the stream
    fn read_pair_internal(&mut self) -> Result<Option<DxfCodePair>> {
        let code_line = match self.read_line()? {
            Some(line) => line,
            None => return Ok(None),
        };

        let code = code_line.trim().parse::<i32>().map_err(|_| {
            DxfError::Parse(format!(
                "Invalid DXF code at line {}: '{}'",
                self.line_number, code_line
            ))
        })?;

        let value_line = match self.read_line()? {
            Some(line) => line,
            None => {
                return Err(DxfError::Parse(format!(
                    "Unexpected EOF after code {} at line {}",
                    code, self.line_number
                )))
            }
        };

        let value = self.process_string_value(&value_line);

        Ok(Some(DxfCodePair::new(code, value)))
    }

    /// Process special character sequences in DXF strings
    fn process_string_value(&self, value: &str) -> String {
        value
            .replace("^J", "\n")
            .replace("^M", "\r")
            .replace("^I", "\t")
            .replace("^ ", "^")
    }
}

impl DxfTextReader<std::io::Cursor<Vec<u8>>> {
    /// Create a reader over an in-memory string
    pub fn from_string(content: &str) -> Self {
        DxfTextReader::new(BufReader::new(std::io::Cursor::new(
            content.as_bytes().to_vec(),
        )))
    }
}

impl<R: Read> DxfStreamReader for DxfTextReader<R> {
    fn read_pair(&mut self) -> Result<Option<DxfCodePair>> {
        if let Some(pair) = self.peeked_pair.take() {
            return Ok(Some(pair));
        }

        self.read_pair_internal()
    }

    fn peek_code(&mut self) -> Result<Option<i32>> {
        if let Some(ref pair) = self.peeked_pair {
            return Ok(Some(pair.code));
        }

        if let Some(pair) = self.read_pair_internal()? {
            let code = pair.code;
            self.peeked_pair = Some(pair);
            Ok(Some(code))
        } else {
            Ok(None)
        }
    }

    fn push_back(&mut self, pair: DxfCodePair) {
        self.peeked_pair = Some(pair);
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn reader_over(data: &str) -> DxfTextReader<Cursor<&[u8]>> {
        DxfTextReader::new(BufReader::new(Cursor::new(data.as_bytes())))
    }

    #[test]
    fn test_read_simple_pair() {
        let mut reader = reader_over("0\nCIRCLE\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);
        assert_eq!(pair.value_string, "CIRCLE");
    }

    #[test]
    fn test_read_integer_pair() {
        let mut reader = reader_over("70\n42\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 70);
        assert_eq!(pair.as_int(), Some(42));
    }

    #[test]
    fn test_read_double_pair() {
        let mut reader = reader_over("10\n123.456\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 10);
        assert_eq!(pair.as_double(), Some(123.456));
    }

    #[test]
    fn test_line_counter() {
        let mut reader = reader_over("0\nCIRCLE\n8\n0\n");
        reader.read_pair().unwrap();
        assert_eq!(reader.line_number(), 2);
        reader.read_pair().unwrap();
        assert_eq!(reader.line_number(), 4);
    }

    #[test]
    fn test_peek_code() {
        let mut reader = reader_over("0\nSECTION\n2\nENTITIES\n");

        assert_eq!(reader.peek_code().unwrap(), Some(0));

        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.code, 0);

        assert_eq!(reader.peek_code().unwrap(), Some(2));
    }

    #[test]
    fn test_invalid_code_is_parse_error() {
        let mut reader = reader_over("banana\nCIRCLE\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_truncated_pair_is_parse_error() {
        let mut reader = reader_over("10\n");
        assert!(matches!(reader.read_pair(), Err(DxfError::Parse(_))));
    }

    #[test]
    fn test_special_characters() {
        let mut reader = reader_over("1\nLine1^JLine2^MLine3\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "Line1\nLine2\rLine3");
    }

    #[test]
    fn test_crlf_line_endings() {
        let mut reader = reader_over("0\r\nCIRCLE\r\n");
        let pair = reader.read_pair().unwrap().unwrap();
        assert_eq!(pair.value_string, "CIRCLE");
    }
}
