//! Dataset fetch + parse, cached once per process.

use std::io::Read;
use std::sync::Arc;

use csv::{ReaderBuilder, Trim};
use once_cell::sync::OnceCell;
use time::OffsetDateTime;
use tracing::{debug, error, info};

use super::{Dataset, SalaryRecord};
use crate::core::error::{DataError, Result};

static DATASET: OnceCell<Arc<Dataset>> = OnceCell::new();

/// Parse CSV text with a header row into a [`Dataset`].
///
/// The first malformed row aborts the parse; the error carries its line.
pub fn parse_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.deserialize::<SalaryRecord>() {
        records.push(row?);
    }
    Ok(Dataset::new(records))
}

/// Download and parse the dataset at `url`. No retries.
pub async fn fetch_dataset(url: &str) -> Result<Dataset> {
    let started = OffsetDateTime::now_utc();
    info!(%url, "fetching salary dataset");

    let fetch_err = |source: reqwest::Error| DataError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url)
        .await
        .and_then(|resp| resp.error_for_status())
        .map_err(fetch_err)?;
    let body = response.bytes().await.map_err(fetch_err)?;

    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(DataError::EmptyBody {
            url: url.to_string(),
        });
    }

    let dataset = parse_csv(body.as_ref())?;

    let elapsed_ms = (OffsetDateTime::now_utc() - started).whole_milliseconds() as i64;
    info!(rows = dataset.len(), elapsed_ms, "salary dataset loaded");
    Ok(dataset)
}

/// Return the process-wide dataset, fetching it on first use.
///
/// Only successful loads are cached. A failed load is logged here, once per
/// attempt.
pub async fn load_cached(url: &str) -> Result<Arc<Dataset>> {
    if let Some(dataset) = DATASET.get() {
        debug!(rows = dataset.len(), "salary dataset cache hit");
        return Ok(dataset.clone());
    }

    let fetched = fetch_dataset(url)
        .await
        .inspect_err(|err| error!(%url, %err, "salary dataset unavailable"))?;
    let fetched = Arc::new(fetched);
    Ok(DATASET.get_or_init(|| fetched).clone())
}
