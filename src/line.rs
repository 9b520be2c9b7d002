//! Input lines and their columnized form.

/// A single raw log line as supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// The complete line text, without the trailing newline.
    pub full_line: String,
    /// 1-based position of the line in its source.
    pub line_number: usize,
}

impl LogLine {
    pub fn new(full_line: impl Into<String>, line_number: usize) -> Self {
        Self {
            full_line: full_line.into(),
            line_number,
        }
    }
}

/// One cell of a [`ColumnizedLine`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Column {
    pub full_value: String,
}

/// A log line split into an ordered, fixed-size set of columns.
///
/// Holds a read-only reference back to the [`LogLine`] it was built from.
/// The column count is fixed at construction; [`set_value`](Self::set_value)
/// is the only way to change a column afterwards.
#[derive(Debug, Clone)]
pub struct ColumnizedLine<'a> {
    line: &'a LogLine,
    columns: Vec<Column>,
}

impl<'a> ColumnizedLine<'a> {
    /// Build a line with `count` empty columns.
    pub fn empty(line: &'a LogLine, count: usize) -> Self {
        Self {
            line,
            columns: vec![Column::default(); count],
        }
    }

    /// The line these columns were split from.
    pub fn log_line(&self) -> &'a LogLine {
        self.line
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    /// Value of column `index`, or `""` when out of range.
    pub fn value(&self, index: usize) -> &str {
        self.columns
            .get(index)
            .map_or("", |column| column.full_value.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True when every column is empty, i.e. the line was not recognized.
    pub fn is_unparsed(&self) -> bool {
        self.columns.iter().all(|c| c.full_value.is_empty())
    }

    /// Replace the value of a single column. Out-of-range indexes are ignored.
    pub fn set_value(&mut self, index: usize, value: impl Into<String>) {
        if let Some(column) = self.columns.get_mut(index) {
            column.full_value = value.into();
        }
    }

    /// Iterate over the column values in order.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.full_value.as_str())
    }
}
