use crate::outcome::BenchmarkRate;

/// Header of the ZIP column in the target list.
pub const ZIPCODE_COLUMN: &str = "zipcode";
/// Header of the computed rate column.
pub const RATE_COLUMN: &str = "rate";

/// The target ZIP list, with every column carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    zip_index: usize,
}

impl TargetTable {
    /// Returns `None` when no `zipcode` header is present.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        let zip_index = headers.iter().position(|h| h.trim() == ZIPCODE_COLUMN)?;
        Some(Self {
            headers,
            rows,
            zip_index,
        })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Trimmed ZIP codes in row order. Duplicate rows are kept.
    pub fn zipcodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.rows
            .iter()
            .map(|row| row.get(self.zip_index).map_or("", |zip| zip.trim()))
    }

    /// Annotate every row with its benchmark rate.
    ///
    /// An existing `rate` column is filled in place; otherwise one is
    /// appended. Every other cell is copied as read. `rates` must line up
    /// with `rows`.
    pub fn with_rates(&self, rates: &[BenchmarkRate]) -> (Vec<String>, Vec<Vec<String>>) {
        debug_assert_eq!(rates.len(), self.rows.len());
        let mut headers = self.headers.clone();
        let rate_index = match headers.iter().position(|h| h.trim() == RATE_COLUMN) {
            Some(index) => index,
            None => {
                headers.push(RATE_COLUMN.to_string());
                headers.len() - 1
            }
        };
        let rows = self
            .rows
            .iter()
            .zip(rates)
            .map(|(row, rate)| {
                let mut row = row.clone();
                if row.len() <= rate_index {
                    row.resize(rate_index + 1, String::new());
                }
                row[rate_index] = rate.as_field().to_string();
                row
            })
            .collect();
        (headers, rows)
    }
}
