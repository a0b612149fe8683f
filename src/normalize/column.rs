use serde_json::Value;
use std::borrow::Cow;

use crate::error::InputError;

/**
    Row-indexed access to the text of one column of a table.
    Rows are visited from `0` to `row_count() - 1`.
*/
pub trait ColumnSource {
    fn row_count(&self) -> usize;

    fn text_at(&self, row: usize) -> Result<Cow<'_, str>, InputError>;
}

impl<S: AsRef<str>> ColumnSource for [S] {
    fn row_count(&self) -> usize {
        self.len()
    }

    fn text_at(&self, row: usize) -> Result<Cow<'_, str>, InputError> {
        self.get(row)
            .map(|s| Cow::Borrowed(s.as_ref()))
            .ok_or(InputError::RowOutOfRange {
                row,
                len: self.len(),
            })
    }
}

impl<S: AsRef<str>> ColumnSource for Vec<S> {
    fn row_count(&self) -> usize {
        self.as_slice().row_count()
    }

    fn text_at(&self, row: usize) -> Result<Cow<'_, str>, InputError> {
        self.as_slice().text_at(row)
    }
}

/**
    Column backed by a caller supplied accessor.
*/
pub struct FnColumn<F> {
    len: usize,
    accessor: F,
}

impl<F> FnColumn<F>
where
    F: Fn(usize) -> Result<String, InputError>,
{
    pub fn new(len: usize, accessor: F) -> Self {
        Self { len, accessor }
    }
}

impl<F> ColumnSource for FnColumn<F>
where
    F: Fn(usize) -> Result<String, InputError>,
{
    fn row_count(&self) -> usize {
        self.len
    }

    fn text_at(&self, row: usize) -> Result<Cow<'_, str>, InputError> {
        (self.accessor)(row).map(Cow::Owned)
    }
}

/**
    One named field across a list of JSON records. Only string values are
    text; a number, boolean, null, array or object is rejected rather than
    coerced.
*/
#[derive(Clone, Copy, Debug)]
pub struct RecordColumn<'a> {
    records: &'a [Value],
    column: &'a str,
}

impl<'a> RecordColumn<'a> {
    pub fn new(records: &'a [Value], column: &'a str) -> Self {
        Self { records, column }
    }

    pub fn column(&self) -> &str {
        self.column
    }
}

impl ColumnSource for RecordColumn<'_> {
    fn row_count(&self) -> usize {
        self.records.len()
    }

    fn text_at(&self, row: usize) -> Result<Cow<'_, str>, InputError> {
        let record = self.records.get(row).ok_or(InputError::RowOutOfRange {
            row,
            len: self.records.len(),
        })?;

        match record.get(self.column) {
            Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
            Some(_) => Err(InputError::NonTextValue {
                column: self.column.to_string(),
                row,
            }),
            None => Err(InputError::MissingColumn {
                column: self.column.to_string(),
                row,
            }),
        }
    }
}

#[test]
fn test_slice_column() {
    let rows = ["first", "second"];
    assert_eq!(rows[..].row_count(), 2);
    assert_eq!(rows[..].text_at(1).unwrap(), "second");
    assert!(matches!(
        rows[..].text_at(2),
        Err(InputError::RowOutOfRange { row: 2, len: 2 })
    ));
}

#[test]
fn test_record_column() {
    let records: Vec<Value> = serde_json::from_str(
        r#"[{"review": "Great food"}, {"review": 5}, {"title": "no review"}, null]"#,
    )
    .unwrap();
    let column = RecordColumn::new(&records, "review");

    assert_eq!(column.row_count(), 4);
    assert_eq!(column.text_at(0).unwrap(), "Great food");
    assert!(matches!(
        column.text_at(1),
        Err(InputError::NonTextValue { row: 1, .. })
    ));
    assert!(matches!(
        column.text_at(2),
        Err(InputError::MissingColumn { row: 2, .. })
    ));
    assert!(matches!(
        column.text_at(3),
        Err(InputError::MissingColumn { row: 3, .. })
    ));
}

#[test]
fn test_fn_column() {
    let column = FnColumn::new(3, |row| Ok(format!("row number {}", row)));
    assert_eq!(column.row_count(), 3);
    assert_eq!(column.text_at(2).unwrap(), "row number 2");
}
