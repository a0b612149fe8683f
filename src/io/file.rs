use serde_json::Value;
use std::fs::File;
use std::io;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/**
    Reads the contents of a file to a string.
*/
pub fn read_string_from_file(filename: impl AsRef<Path>) -> io::Result<String> {
    let mut file = File::open(filename.as_ref())?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)?;

    Ok(contents)
}

/**
    Reads a file holding one JSON document per line. Blank lines are skipped,
    a line that fails to parse is reported as [`io::ErrorKind::InvalidData`].
*/
pub fn read_json_lines(filename: impl AsRef<Path>) -> io::Result<Vec<Value>> {
    let reader = BufReader::new(File::open(filename.as_ref())?);

    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("line {}: {}", number + 1, e),
            )
        })?;
        records.push(record);
    }

    Ok(records)
}

#[test]
fn test_read_json_lines() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"review": "first"}}"#).unwrap();
    writeln!(file).unwrap();
    writeln!(file, r#"{{"review": "second"}}"#).unwrap();

    let records = read_json_lines(file.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[1]["review"], "second");
}

#[test]
fn test_read_json_lines_reports_line() {
    use std::io::Write;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, r#"{{"review": "first"}}"#).unwrap();
    writeln!(file, "not json").unwrap();

    let err = read_json_lines(file.path()).unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    assert!(err.to_string().starts_with("line 2"));
}
