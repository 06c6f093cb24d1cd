// File: crates/traceplot/tests/pipeline.rs
// Purpose: End-to-end pipeline scenarios over scratch trace files.

use std::path::PathBuf;

use traceplot::{run, Config, LoadError, TraceFile};

fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

fn write_le_floats(path: &PathBuf, values: &[f32]) {
    let mut bytes = Vec::with_capacity(values.len() * 4);
    for v in values {
        bytes.extend_from_slice(&v.to_le_bytes());
    }
    std::fs::write(path, bytes).unwrap();
}

#[test]
fn decodes_le_floats_in_order() {
    let path = scratch("decode.f32");
    write_le_floats(&path, &[1.0, -2.5, 0.0, f32::MIN_POSITIVE]);

    let trace = TraceFile::open(&path).expect("open");
    assert_eq!(trace.sample_count(), 4);
    let got: Vec<f32> = trace.samples().collect();
    assert_eq!(got, vec![1.0, -2.5, 0.0, f32::MIN_POSITIVE]);
}

#[test]
fn rejects_length_not_multiple_of_sample_size() {
    let path = scratch("five_bytes.f32");
    std::fs::write(&path, [0u8; 5]).unwrap();

    match TraceFile::open(&path) {
        Err(LoadError::TrailingBytes { len, .. }) => assert_eq!(len, 5),
        Err(other) => panic!("expected TrailingBytes, got {other:?}"),
        Ok(_) => panic!("expected TrailingBytes, got a successful open"),
    }
}

#[test]
fn rejects_missing_file() {
    let path = scratch("does_not_exist.f32");
    let _ = std::fs::remove_file(&path);

    match TraceFile::open(&path) {
        Err(LoadError::Open { source, .. }) => {
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound)
        }
        Err(other) => panic!("expected Open error, got {other:?}"),
        Ok(_) => panic!("expected Open error, got a successful open"),
    }
}

#[test]
fn rejects_empty_file() {
    let path = scratch("empty.f32");
    std::fs::write(&path, []).unwrap();

    assert!(matches!(TraceFile::open(&path), Err(LoadError::Empty { .. })));
}

#[test]
fn end_to_end_two_samples_png() {
    let input = scratch("two_samples.f32");
    write_le_floats(&input, &[1.0, -2.5]);
    let output = scratch("two_samples.png");
    let _ = std::fs::remove_file(&output);

    let cfg = Config { input, output: output.clone() };
    run(&cfg).expect("pipeline should succeed");

    let bytes = std::fs::read(&output).expect("output written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be a PNG");
}

#[test]
fn end_to_end_is_idempotent() {
    let input = scratch("idempotent.f32");
    write_le_floats(&input, &[0.5, 1.5, -0.5]);
    let output = scratch("idempotent.png");

    let cfg = Config { input, output: output.clone() };
    run(&cfg).expect("first run");
    let first = std::fs::read(&output).unwrap();
    run(&cfg).expect("second run");
    let second = std::fs::read(&output).unwrap();

    assert_eq!(first, second, "reruns overwrite with identical bytes");
}

#[test]
fn truncated_input_produces_no_output() {
    let input = scratch("truncated.f32");
    std::fs::write(&input, [0u8; 7]).unwrap();
    let output = scratch("truncated.png");
    let _ = std::fs::remove_file(&output);

    let cfg = Config { input, output: output.clone() };
    assert!(run(&cfg).is_err());
    assert!(!output.exists(), "failed load must not leave an output file");
}

#[test]
fn unsupported_extension_produces_no_output() {
    let input = scratch("valid_for_bmp.f32");
    write_le_floats(&input, &[1.0, 2.0]);
    let output = scratch("rejected.bmp");
    let _ = std::fs::remove_file(&output);

    let cfg = Config { input, output: output.clone() };
    let err = run(&cfg).expect_err("bmp is not a supported encoder");
    assert!(format!("{err:#}").contains("unsupported output format"));
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_fails() {
    let input = scratch("valid_for_missing_dir.f32");
    write_le_floats(&input, &[1.0, 2.0]);
    let output = PathBuf::from("target/test_out/no_such_dir/out.png");
    let _ = std::fs::remove_dir_all("target/test_out/no_such_dir");

    let cfg = Config { input, output };
    assert!(run(&cfg).is_err(), "writer must not create missing directories");
}
