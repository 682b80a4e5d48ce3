//! Output writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::builder::BuildError;

/// Write `html` to `output_dir/file_name`, creating the directory if needed.
///
/// Any existing file is overwritten. Returns the written path.
pub fn write_site(output_dir: &Path, file_name: &str, html: &str) -> Result<PathBuf, BuildError> {
    fs::create_dir_all(output_dir)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", output_dir.display(), e)))?;

    let out = output_dir.join(file_name);
    fs::write(&out, html)
        .map_err(|e| BuildError::WriteError(format!("{}: {}", out.display(), e)))?;

    tracing::debug!("Wrote {} bytes to {}", html.len(), out.display());

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_directory_and_writes() {
        let temp = tempdir().unwrap();
        let out_dir = temp.path().join("docs").join("nested");

        let path = write_site(&out_dir, "index.html", "<html></html>").unwrap();

        assert_eq!(path, out_dir.join("index.html"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<html></html>");
    }

    #[test]
    fn overwrites_existing_file() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("index.html"), "old content that is longer").unwrap();

        let path = write_site(temp.path(), "index.html", "new").unwrap();

        assert_eq!(fs::read_to_string(path).unwrap(), "new");
    }

    #[test]
    fn errors_when_directory_is_a_file() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("docs");
        fs::write(&blocker, "").unwrap();

        let result = write_site(&blocker, "index.html", "x");

        assert!(matches!(result, Err(BuildError::WriteError(_))));
    }
}
