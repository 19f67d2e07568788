//! Delimited text writer.
//!
//! Writes a [`Table`] as a header row followed by one record per row, with
//! minimal quoting and `\n` terminators. With `bom` set the file starts with
//! the UTF-8 byte-order mark so spreadsheet applications pick the right
//! encoding when the file is opened directly.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::Table;
use crate::error::{MergeError, Result};

/// UTF-8 byte-order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Output settings for [`Table::write_csv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field delimiter byte.
    pub delimiter: u8,
    /// Prefix the output with a UTF-8 byte-order mark.
    pub bom: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            bom: true,
        }
    }
}

impl Table {
    /// Write the table to `path`, creating parent directories as needed.
    ///
    /// An existing file is overwritten.
    pub fn write_csv<P: AsRef<Path>>(&self, path: P, options: CsvOptions) -> Result<()> {
        let path = path.as_ref();
        let io_err = |source| MergeError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let file = fs::File::create(path).map_err(io_err)?;
        let mut out = BufWriter::new(file);
        self.write_csv_to(&mut out, options)
            .map_err(|source| MergeError::Csv {
                path: path.to_path_buf(),
                source,
            })?;
        out.flush().map_err(io_err)?;
        Ok(())
    }

    /// Write the table to any writer.
    pub fn write_csv_to<W: Write>(&self, writer: &mut W, options: CsvOptions) -> csv::Result<()> {
        if options.bom {
            writer.write_all(UTF8_BOM)?;
        }

        let mut csv_writer = csv::WriterBuilder::new()
            .delimiter(options.delimiter)
            .terminator(csv::Terminator::Any(b'\n'))
            .quote_style(csv::QuoteStyle::Necessary)
            .from_writer(writer);

        csv_writer.write_record(&self.columns)?;
        for row in &self.rows {
            csv_writer.write_record(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

    /// Render the table to a string (without BOM).
    pub fn to_csv_string(&self, delimiter: u8) -> csv::Result<String> {
        let mut buffer = Vec::new();
        self.write_csv_to(
            &mut buffer,
            CsvOptions {
                delimiter,
                bom: false,
            },
        )?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
