//! File system helpers for the application: validating the input
//! description path and writing the route report.

use std::fs::OpenOptions;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `input_path` exists, is a file, and is valid UTF-8, returning
/// it as a string for the loader.
///
/// # Errors
/// `AppError::General` if the path is missing or not a file,
/// `AppError::InvalidPath` if it is not valid UTF-8.
pub fn validate_input_file(input_path: &Path, quiet_mode: bool) -> Result<String, AppError> {
    if !input_path.exists() {
        let error_msg = format!("File not found: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !input_path.is_file() {
        let error_msg = format!("Path is not a file: {}", input_path.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }

    input_path
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| AppError::InvalidPath(input_path.display().to_string()))
}

/// Writes string content to a file, creating or truncating it, and flushes
/// before returning.
pub fn write_content_to_file(file_path: &Path, content: &str) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("route_finder_fh_{}_{}", std::process::id(), name))
    }

    #[test]
    fn missing_input_is_rejected() {
        let path = scratch("missing.txt");
        let _ = fs::remove_file(&path);
        let err = validate_input_file(&path, true).unwrap_err();
        assert!(matches!(err, AppError::General(msg) if msg.starts_with("File not found")));
    }

    #[test]
    fn directory_input_is_rejected() {
        let dir = scratch("dir");
        fs::create_dir_all(&dir).unwrap();
        let err = validate_input_file(&dir, true).unwrap_err();
        assert!(matches!(err, AppError::General(msg) if msg.starts_with("Path is not a file")));
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn regular_file_is_accepted() {
        let path = scratch("input.txt");
        fs::write(&path, "2 A B A B").unwrap();
        let checked = validate_input_file(&path, true).unwrap();
        assert_eq!(PathBuf::from(checked), path);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn existing_output_is_truncated() {
        let path = scratch("report.txt");
        fs::write(&path, "a much longer leftover report from an earlier run\n").unwrap();
        write_content_to_file(&path, "1. A -> B\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "1. A -> B\n");
        fs::remove_file(&path).unwrap();
    }
}
