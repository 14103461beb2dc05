use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::error::ChainError;

/// Reads a text file and returns all its non-blank lines, one per document.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub fn read_lines<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents
		.lines()
		.filter(|line| !line.trim().is_empty())
		.map(str::to_owned)
		.collect())
}

/// Reads one named column of a CSV file with a header row.
///
/// # Errors
/// - `ChainError::Io` if the file cannot be opened
/// - `ChainError::Csv` on malformed records
/// - `ChainError::MissingColumn` if the header has no such column
pub fn read_column<P: AsRef<Path>>(
	filename: P,
	column: &str,
	delimiter: u8,
) -> Result<Vec<String>, ChainError> {
	let file = File::open(filename.as_ref())?;
	let values = read_column_from_reader(file, column, delimiter)?;
	debug!("Read {} rows from {}", values.len(), filename.as_ref().display());
	Ok(values)
}

/// Same as `read_column`, from any reader.
pub fn read_column_from_reader<R: Read>(
	reader: R,
	column: &str,
	delimiter: u8,
) -> Result<Vec<String>, ChainError> {
	let mut rdr = ReaderBuilder::new()
		.has_headers(true)
		.delimiter(delimiter)
		.flexible(true)
		.from_reader(reader);

	let position = rdr
		.headers()?
		.iter()
		.position(|header| header.trim() == column)
		.ok_or_else(|| ChainError::MissingColumn(column.to_owned()))?;

	let mut values = Vec::new();
	for record in rdr.records() {
		let record = record?;
		// Short rows simply have no value for this column
		if let Some(value) = record.get(position) {
			values.push(value.to_owned());
		}
	}
	Ok(values)
}
