//! Reading math types from binary asset streams.

use std::io::Cursor;

use zeus_math::{Endian, Error, Quat, StreamReader, Vec3};

fn be(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_be_bytes()).collect()
}

#[test]
fn quat_reads_scalar_first() {
    let mut reader = StreamReader::new(Cursor::new(be(&[0.5, 1.0, 2.0, 3.0])));
    let q = Quat::read_from(&mut reader).unwrap();
    assert_eq!(q.r(), 0.5);
    assert_eq!(q.v(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(reader.position(), 16);
}

#[test]
fn sequential_records() {
    let mut reader = StreamReader::new(Cursor::new(be(&[1.0, 0.0, 0.0, 0.0, 4.0, 5.0, 6.0])));
    let q = Quat::read_from(&mut reader).unwrap();
    let v = Vec3::read_from(&mut reader).unwrap();
    assert_eq!(q, Quat::IDENTITY);
    assert_eq!(v, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn little_endian_stream() {
    let bytes: Vec<u8> = [1.0f32, 0.0, 1.0, 0.0].iter().flat_map(|v| v.to_le_bytes()).collect();
    let mut reader = StreamReader::with_endian(Cursor::new(bytes), Endian::Little);
    let q = Quat::read_from(&mut reader).unwrap();
    assert_eq!(q, Quat::new(1.0, 0.0, 1.0, 0.0));
}

#[test]
fn truncated_quat_is_io_error() {
    let mut bytes = be(&[1.0, 2.0, 3.0, 4.0]);
    bytes.truncate(14);
    let mut reader = StreamReader::new(Cursor::new(bytes));
    let err = Quat::read_from(&mut reader).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(err.is_unexpected_eof());
}

#[test]
fn empty_stream() {
    let mut reader = StreamReader::new(Cursor::new(Vec::new()));
    assert!(Vec3::read_from(&mut reader).unwrap_err().is_io_error());
}
