use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid directory: {0}")]
    InvalidDirectory(String),
}

/// Read a file relative to `root` and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Read a file by absolute or working-directory path
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

/// Write content to a file, creating parent directories as needed
pub fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// Scan for markdown files below `root`, returned relative to it and sorted
pub fn scan_markdown_files(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;

    let mut relative = files
        .iter()
        .filter_map(|path| path.strip_prefix(root).ok())
        .filter_map(|path| RelativePathBuf::from_path(path).ok())
        .collect::<Vec<_>>();
    relative.sort();
    Ok(relative)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

/// Replace `dest` with a recursive copy of `source`.
///
/// Anything already in `dest` is deleted first. Returns the number of files copied.
/// `dest` may not be `source` itself or lie inside it.
pub fn copy_static(source: &Path, dest: &Path) -> Result<usize, IoError> {
    validate_dir(source)?;
    ensure_outside(source, dest)?;

    if dest.exists() {
        log::info!("Removing {}", dest.display());
        fs::remove_dir_all(dest).map_err(IoError::Io)?;
    }
    fs::create_dir_all(dest).map_err(IoError::Io)?;

    copy_directory_recursive(source, dest)
}

fn copy_directory_recursive(source: &Path, dest: &Path) -> Result<usize, IoError> {
    let mut copied = 0;
    for entry in fs::read_dir(source).map_err(IoError::Io)? {
        let entry = entry.map_err(IoError::Io)?;
        let from = entry.path();
        let to = dest.join(entry.file_name());

        if from.is_dir() {
            fs::create_dir_all(&to).map_err(IoError::Io)?;
            copied += copy_directory_recursive(&from, &to)?;
        } else {
            log::debug!("Copying {} -> {}", from.display(), to.display());
            fs::copy(&from, &to).map_err(IoError::Io)?;
            copied += 1;
        }
    }
    Ok(copied)
}

fn ensure_outside(source: &Path, dest: &Path) -> Result<(), IoError> {
    let source = fs::canonicalize(source).map_err(IoError::Io)?;
    let dest = match (dest.parent(), dest.file_name()) {
        _ if dest.exists() => fs::canonicalize(dest),
        (Some(parent), Some(name)) if parent.exists() => {
            fs::canonicalize(parent).map(|parent| parent.join(name))
        }
        _ => std::path::absolute(dest),
    }
    .map_err(IoError::Io)?;

    if dest.starts_with(&source) {
        return Err(IoError::InvalidDirectory(format!(
            "{} is inside static directory {}",
            dest.display(),
            source.display()
        )));
    }
    Ok(())
}

pub fn validate_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDirectory(format!(
            "{} does not exist",
            path.display()
        )));
    }

    Ok(())
}
