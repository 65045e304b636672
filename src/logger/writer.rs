use std::fs::{self, File, OpenOptions};
use std::sync::Mutex;

use super::config::FileConfig;
use super::error::LoggerError;

/// Opens the configured log file, creating parent directories first.
///
/// The returned `Mutex<File>` is used directly as a `MakeWriter`.
pub(crate) fn open_log_file(config: &FileConfig) -> Result<Mutex<File>, LoggerError> {
    let open_error = |source| LoggerError::OpenFile {
        path: config.path.clone(),
        source,
    };

    if let Some(parent) = config.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(open_error)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(config.append)
        .truncate(!config.append)
        .open(&config.path)
        .map_err(open_error)?;

    Ok(Mutex::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::LogFormat;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/logs/app.log");
        let config = FileConfig::new(true, path.clone(), true, LogFormat::Full);

        open_log_file(&config).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_and_truncate_modes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "existing\n").unwrap();

        let append = FileConfig::new(true, path.clone(), true, LogFormat::Full);
        writeln!(open_log_file(&append).unwrap().lock().unwrap(), "more").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "existing\nmore\n");

        let truncate = FileConfig::new(true, path.clone(), false, LogFormat::Full);
        writeln!(open_log_file(&truncate).unwrap().lock().unwrap(), "fresh").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh\n");
    }
}
