//! Error types for dataset loading and export.

use thiserror::Error;

/// Failures of the data layer. Everything else in the dashboard (empty
/// subsets, unmapped country codes) is a defined fallback, not an error.
#[derive(Error, Debug)]
pub enum DataError {
    /// The HTTP request failed or returned a non-success status.
    #[error("failed to fetch dataset from {url}: {source}")]
    Fetch {
        /// Requested location.
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The response arrived but carried no rows.
    #[error("dataset at {url} is empty")]
    EmptyBody { url: String },

    /// A row could not be parsed.
    #[error("malformed CSV{}: {source}", line_suffix(.line))]
    Csv {
        /// 1-based line of the offending row, when known.
        line: Option<u64>,
        #[source]
        source: csv::Error,
    },

    /// Writing or delivering an export failed.
    #[error("export failed: {0}")]
    Export(String),
}

fn line_suffix(line: &Option<u64>) -> String {
    line.map(|l| format!(" at line {l}")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, DataError>;

impl From<csv::Error> for DataError {
    fn from(source: csv::Error) -> Self {
        let line = source.position().map(|pos| pos.line());
        Self::Csv { line, source }
    }
}

impl DataError {
    #[must_use]
    pub fn export(message: impl Into<String>) -> Self {
        Self::Export(message.into())
    }

    /// True for failures that happened before any byte was parsed.
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch { .. } | Self::EmptyBody { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_error_display() {
        let err = DataError::export("disk full");
        assert_eq!(err.to_string(), "export failed: disk full");
        assert!(!err.is_fetch());
    }

    #[test]
    fn empty_body_is_a_fetch_failure() {
        let err = DataError::EmptyBody {
            url: "https://example.com/data.csv".into(),
        };
        assert!(err.is_fetch());
        assert!(err.to_string().contains("example.com/data.csv"));
    }

    #[test]
    fn csv_error_keeps_line_number() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Row {
            n: u32,
        }

        let data = "n\n1\nnot-a-number\n";
        let mut reader = csv::Reader::from_reader(data.as_bytes());
        let failure = reader
            .deserialize::<Row>()
            .find_map(|row| row.err())
            .expect("third line fails to parse");

        let err: DataError = failure.into();
        match &err {
            DataError::Csv { line, .. } => assert_eq!(*line, Some(3)),
            other => panic!("unexpected variant: {other:?}"),
        }
        assert!(err.to_string().contains("line 3"));
    }
}
