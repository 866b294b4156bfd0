//! End-to-end tests: histogram file in, accumulation curve table out

use approx::assert_relative_eq;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::fs;
use std::io::Write;
use tempfile::{tempdir, NamedTempFile};
use unseen_core::FrequencyHistogram;
use unseen_curve::{
    accumulation_curve, read_histogram, write_curve_file, CurveBuilder, CurveConfig, Error,
    OutputFormat, ScaleGrid,
};
use unseen_toulmin::{RngTruncationSource, SmoothedGoodToulmin};

fn histogram_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn read_table(path: &std::path::Path) -> Vec<(f64, f64)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let mut cols = line.split('\t');
            let t = cols.next().unwrap().parse().unwrap();
            let y = cols.next().unwrap().parse().unwrap();
            assert!(cols.next().is_none());
            (t, y)
        })
        .collect()
}

#[test]
fn test_file_to_file_workflow() {
    let input = histogram_file("40 18 9\n6 3 2\n1 0 1\n");
    let histogram = read_histogram(input.path()).unwrap();
    assert_eq!(histogram.len(), 9);

    let config = CurveConfig::new(170, 4.0).with_step(0.5).with_seed(11);
    let curve = accumulation_curve(&histogram, &config).unwrap();

    let dir = tempdir().unwrap();
    let output = dir.path().join("accumulation_curve.tsv");
    write_curve_file(&output, &curve, &config.output).unwrap();

    let rows = read_table(&output);
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0], (0.0, 80.0));
    for (row, point) in rows.iter().zip(curve.points()) {
        assert_relative_eq!(row.0, point.scale);
        assert_relative_eq!(row.1, point.species, max_relative = 1e-12);
    }
}

#[test]
fn test_seeded_runs_are_identical() {
    let histogram = FrequencyHistogram::from_counts(&[25u32, 10, 4, 2, 1]).unwrap();
    let config = CurveConfig::new(60, 6.0).with_step(0.25).with_seed(1234);

    let a = accumulation_curve(&histogram, &config).unwrap();
    let b = accumulation_curve(&histogram, &config).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_interpolation_half_matches_worked_example() {
    let histogram = FrequencyHistogram::from_counts(&[3u32, 2, 1]).unwrap();
    let config = CurveConfig::new(9, 1.0).with_step(0.5).with_seed(0);
    let curve = accumulation_curve(&histogram, &config).unwrap();

    let half = curve.points()[1];
    assert_eq!(half.scale, 0.5);
    assert_relative_eq!(half.species, 6.0 + 1.125, epsilon = 1e-12);
}

#[test]
fn test_subsampled_curve_increases() {
    // Heavy singleton mass: discoveries keep coming as the sample grows
    let histogram = FrequencyHistogram::from_counts(&[60u32, 20, 8, 3, 1]).unwrap();
    let builder = CurveBuilder::new(
        SmoothedGoodToulmin::new(100),
        histogram.implied_sample_size() as u64,
        ScaleGrid::new(1.0, 0.1).unwrap(),
    );
    let mut source = RngTruncationSource::new(ChaCha8Rng::seed_from_u64(8));
    let curve = builder.build(&histogram, &mut source).unwrap();

    assert!(curve.is_monotone(0.0));
    let (_, last_new) = curve.new_species().last().unwrap();
    assert!(last_new > 0.0);
}

#[test]
fn test_header_and_delimiter_from_config() {
    let histogram = FrequencyHistogram::from_counts(&[2u32, 1]).unwrap();
    let config = CurveConfig::new(4, 1.0)
        .with_step(0.5)
        .with_seed(5)
        .with_output(OutputFormat::default().with_delimiter(',').with_header(true));
    let curve = accumulation_curve(&histogram, &config).unwrap();

    let dir = tempdir().unwrap();
    let output = dir.path().join("curve.csv");
    write_curve_file(&output, &curve, &config.output).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "scale,expected_species");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with('0'));
}

#[test]
fn test_malformed_histogram_is_fatal() {
    let input = histogram_file("3 2 one 1");
    match read_histogram(input.path()).unwrap_err() {
        Error::HistogramFile { path, source } => {
            assert_eq!(path, input.path());
            assert!(matches!(
                source,
                unseen_core::Error::Parse { position: 2, .. }
            ));
        }
        other => panic!("Wrong error type: {other:?}"),
    }
}

#[test]
fn test_config_file_round_trip() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{ "sample_size": 170, "max_scale": 2.0, "step": 0.5, "smoothing_samples": 100, "seed": 3 }}"#
    )
    .unwrap();

    let config = CurveConfig::from_json_file(file.path()).unwrap();
    assert_eq!(config.sample_size, 170);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.grid().unwrap().len(), 4);
}

#[test]
fn test_invalid_config_rejected_before_estimation() {
    let histogram = FrequencyHistogram::from_counts(&[1u32]).unwrap();
    let config = CurveConfig::new(0, 2.0);
    assert!(matches!(
        accumulation_curve(&histogram, &config),
        Err(Error::Core(unseen_core::Error::InvalidSampleSize { n: 0 }))
    ));
}
