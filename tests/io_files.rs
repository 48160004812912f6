// ==============================================
// INTEGER FILE HELPERS (integration)
// ==============================================
//
// Round trips through real files in a temporary directory.

use std::fs;

use dsakit::error::DsError;
use dsakit::io::{read_ints_from_file, write_ints_to_file};
use tempfile::tempdir;

#[test]
fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.txt");
    let values = [5, -3, 0, 42, i64::MAX, i64::MIN];

    write_ints_to_file(&path, &values).unwrap();
    assert_eq!(read_ints_from_file(&path).unwrap(), values);
}

#[test]
fn written_file_is_space_separated_with_trailing_newline() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("values.txt");

    write_ints_to_file(&path, &[1, 2, 3]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "1 2 3\n");

    write_ints_to_file(&path, &[]).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "\n");
    assert_eq!(read_ints_from_file(&path).unwrap(), Vec::<i64>::new());
}

#[test]
fn reads_across_lines_and_skips_blank_ones() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("multi.txt");
    fs::write(&path, "1 2\n\n   \n3\t4\n5").unwrap();

    assert_eq!(read_ints_from_file(&path).unwrap(), vec![1, 2, 3, 4, 5]);
}

#[test]
fn malformed_token_fails_whole_read() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, "1 2\n3 four 5\n").unwrap();

    assert_eq!(
        read_ints_from_file(&path),
        Err(DsError::InvalidInteger {
            token: "four".to_owned()
        })
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = read_ints_from_file(dir.path().join("absent.txt")).unwrap_err();
    assert!(matches!(err, DsError::Io(ref e) if e.kind() == std::io::ErrorKind::NotFound));
}
