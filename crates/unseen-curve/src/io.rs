//! Reading histograms and writing curves
//!
//! Histograms are whitespace-delimited text files. Curves are written as a
//! two-column delimited table (`scale`, `expected_species`).

use crate::{AccumulationCurve, Error, OutputFormat, Result};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};
use unseen_core::FrequencyHistogram;

/// Read a frequency-of-frequencies histogram from a text file
///
/// A missing file and a malformed token are both reported with the path.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_histogram<P: AsRef<Path>>(path: P) -> Result<FrequencyHistogram> {
    let path = path.as_ref();
    let wrap = |source: unseen_core::Error| Error::HistogramFile {
        path: path.to_path_buf(),
        source,
    };

    let text = fs::read_to_string(path).map_err(|e| wrap(e.into()))?;
    let histogram: FrequencyHistogram = text.parse().map_err(wrap)?;

    debug!(
        entries = histogram.len(),
        species = histogram.observed_species(),
        "histogram loaded"
    );
    Ok(histogram)
}

/// Write `curve` as a delimited table to `writer`
pub fn write_curve<W: Write>(writer: W, curve: &AccumulationCurve, format: &OutputFormat) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(format.delimiter_byte()?)
        .has_headers(format.header)
        .from_writer(writer);

    for point in curve.points() {
        wtr.serialize(point)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write `curve` to the file at `path`, replacing any existing file
#[instrument(skip(curve, format), fields(path = %path.as_ref().display(), points = curve.len()))]
pub fn write_curve_file<P: AsRef<Path>>(
    path: P,
    curve: &AccumulationCurve,
    format: &OutputFormat,
) -> Result<()> {
    let file = File::create(path.as_ref())?;
    write_curve(BufWriter::new(file), curve, format)
}
