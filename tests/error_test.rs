use std::io;
use std::path::PathBuf;

use theme_builder::error::Error;

#[test]
fn test_error_conversion() {
    let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();

    match err {
        Error::IoError(_) => (),
        _ => panic!("Expected IoError variant"),
    }
}

#[test]
fn test_error_display() {
    let err = Error::ConfigError("invalid manifest".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid manifest.");

    let err = Error::MissingPath { path: PathBuf::from("languages") };
    assert_eq!(err.to_string(), "Cannot delete 'languages': no such file or directory.");
}

#[test]
fn test_file_error_keeps_path() {
    let source = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
    let err = Error::file("functions.php")(source);

    match err {
        Error::FileError { path, source } => {
            assert_eq!(path, PathBuf::from("functions.php"));
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        _ => panic!("Expected FileError variant"),
    }
}
