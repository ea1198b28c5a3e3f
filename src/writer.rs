//! Aggregated holiday export
//!
//! Drives the fetcher over the whole catalog for one holiday kind and writes
//! `"<country_code> <YYYY-MM-DD>"` lines to a sink. Countries and years are
//! processed strictly one after the other, in catalog order, so two runs over
//! the same API responses produce identical bytes.

use futures::StreamExt;
use std::path::Path;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing::info;

use crate::catalog::CountryCatalog;
use crate::error::{Error, Result};
use crate::fetcher::HolidayFetcher;
use crate::types::{HolidayKind, YearRange};

/// Counters for one export
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteSummary {
    /// Countries processed
    pub countries: usize,
    /// Lines written
    pub records: usize,
    /// (country, year) pairs skipped because the API had no data
    pub skipped_years: usize,
}

/// Write every matching record of `kind` to `sink`
///
/// The sink is flushed after each country. Fetch failures only skip the
/// affected year; an error writing to the sink aborts the export.
pub async fn write_holidays<W>(
    fetcher: HolidayFetcher<'_>,
    catalog: &CountryCatalog,
    range: YearRange,
    kind: HolidayKind,
    sink: &mut W,
) -> Result<WriteSummary>
where
    W: AsyncWrite + Unpin,
{
    let mut summary = WriteSummary::default();

    for country in catalog {
        let mut outcomes = std::pin::pin!(fetcher.outcomes(country, range, kind));

        while let Some((_year, outcome)) = outcomes.next().await {
            if outcome.is_skipped() {
                summary.skipped_years += 1;
                continue;
            }

            for record in outcome.into_records() {
                let mut line = record.to_line();
                line.push('\n');
                sink.write_all(line.as_bytes()).await?;
                summary.records += 1;
            }
        }

        sink.flush().await?;
        summary.countries += 1;
    }

    Ok(summary)
}

/// Export `kind` to a file, truncating any previous content
pub async fn export_holidays(
    fetcher: HolidayFetcher<'_>,
    catalog: &CountryCatalog,
    range: YearRange,
    kind: HolidayKind,
    path: &Path,
) -> Result<WriteSummary> {
    let output_err = |source: std::io::Error| Error::Output {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent).await.map_err(output_err)?;
    }

    let file = tokio::fs::File::create(path).await.map_err(output_err)?;
    let mut sink = BufWriter::new(file);

    info!(kind = %kind, years = %range, path = %path.display(), "exporting holidays");

    let summary = match write_holidays(fetcher, catalog, range, kind, &mut sink).await {
        Ok(summary) => summary,
        Err(Error::Io(source)) => return Err(output_err(source)),
        Err(e) => return Err(e),
    };

    sink.shutdown().await.map_err(output_err)?;

    info!(
        kind = %kind,
        countries = summary.countries,
        records = summary.records,
        skipped_years = summary.skipped_years,
        "holiday export complete"
    );

    Ok(summary)
}
