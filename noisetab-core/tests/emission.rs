//! End-to-end emission tests.
//!
//! The emitted text is pasted into the native sampler's source, so these
//! tests pin the exact bytes for small tables and the line structure for
//! the default ones.

use std::num::NonZeroUsize;

use noisetab_core::{
    ErrorKind, LiteralFormat, NamedTable, SampleRange, TableEmitter, TablePipeline,
    TableSelection, TablesConfig, generate_gradients, generate_randoms,
};
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Splits one emitted table into its header and data lines.
fn data_lines(emitted: &str) -> (&str, Vec<&str>) {
    let body = emitted
        .strip_suffix("\n\n")
        .expect("table must end with a blank separator line");
    let mut lines = body.split('\n');
    let header = lines.next().expect("missing header");
    (header, lines.collect())
}

#[test]
fn four_gradients_emit_exactly() {
    let table = generate_gradients(4).unwrap();
    let out = TableEmitter::default().render(NamedTable::new("Perlin noise gradients", &table));

    assert_eq!(
        out,
        "Perlin noise gradients [8]:\n \
         1.00000000000000000, 0.00000000000000000, 0.00000000000000006, 1.00000000000000000,\n \
         -1.00000000000000000, 0.00000000000000012, -0.00000000000000018, -1.00000000000000000,\n\
         \n"
    );
}

#[test]
fn line_count_matches_row_width() {
    let table = generate_gradients(64).unwrap();
    for width in [1, 2, 3, 4, 5, 7, 64, 100] {
        let format = LiteralFormat::new(17, NonZeroUsize::new(width).unwrap()).unwrap();
        let out = TableEmitter::new(format).render(NamedTable::new("g", &table));
        let (header, lines) = data_lines(&out);

        assert_eq!(header, "g [128]:");
        assert_eq!(lines.len(), 64usize.div_ceil(width), "width {width}");
        assert_eq!(lines.len(), format.line_count(64));
        for (i, line) in lines.iter().enumerate() {
            let expected = if i + 1 < lines.len() || 64 % width == 0 {
                width
            } else {
                64 % width
            };
            assert_eq!(line.matches(',').count(), expected * 2, "line {i}: {line}");
            assert!(line.starts_with(' ') && line.ends_with(','));
        }
    }
}

#[test]
fn every_literal_has_fixed_precision() {
    let mut rng = Pcg64::seed_from_u64(11);
    let table = generate_randoms(256, SampleRange::default(), &mut rng).unwrap();
    let out = TableEmitter::default().render(NamedTable::new("Cellular noise randoms", &table));
    let (header, lines) = data_lines(&out);

    assert_eq!(header, "Cellular noise randoms [512]:");
    assert_eq!(lines.len(), 128);

    let literals: Vec<&str> = lines
        .iter()
        .flat_map(|line| line.split(','))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    assert_eq!(literals.len(), 512);

    for (literal, expected) in literals.iter().zip(table.scalars()) {
        let (_, fraction) = literal.split_once('.').expect("literal must have a fraction");
        assert_eq!(fraction.len(), 17, "{literal}");
        let parsed: f64 = literal.parse().unwrap();
        assert!((parsed - expected).abs() < 1e-16, "{literal} vs {expected}");
        assert!((-1.0..=1.0).contains(&parsed));
    }
}

#[test]
fn default_run_from_json5_config() {
    let config: TablesConfig = serde_json5::from_str("{ cellular: { seed: 5 } }").unwrap();
    let pipeline = TablePipeline::from_config(&config, TableSelection::Both).unwrap();
    let seed = config.cellular.seed.unwrap();

    let first = pipeline.generate(&mut Pcg64::seed_from_u64(seed)).unwrap().render();
    let second = pipeline.generate(&mut Pcg64::seed_from_u64(seed)).unwrap().render();
    assert_eq!(first, second);

    let (gradients, randoms) = first
        .split_once("\n\n")
        .expect("tables must be separated by a blank line");
    assert!(gradients.starts_with("Perlin noise gradients [128]:\n"));
    assert_eq!(gradients.lines().count(), 1 + 32);
    assert!(randoms.starts_with("Cellular noise randoms [512]:\n"));
    assert_eq!(randoms.trim_end_matches('\n').lines().count(), 1 + 128);
}

#[test]
fn invalid_arguments_produce_no_output() {
    let cases = [
        r"{ gradient: { count: 0 } }",
        r"{ cellular: { count: -5, range: [0, 1] } }",
        r"{ cellular: { count: 5, range: [1, 1] } }",
        r"{ cellular: { row_width: 0 } }",
    ];
    for case in cases {
        let config: TablesConfig = serde_json5::from_str(case).unwrap();
        let err = TablePipeline::from_config(&config, TableSelection::Both).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{case}");
    }
}
