use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::BlockList;
use crate::parsing::Dialect;

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid documents directory: {0}")]
    InvalidDocumentsDir(String),
    #[error("Path is not inside the documents directory: {0}")]
    OutsideRoot(PathBuf),
}

/// Extensions of files `scan_documents` picks up.
pub const DOCUMENT_EXTENSIONS: [&str; 4] = ["md", "markdown", "rst", "rest"];

/// Read a document file and return its content
pub fn read_file(relative_path: &RelativePath, root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(root))
}

/// Write content to a document file
pub fn write_file(relative_path: &RelativePath, root: &Path, content: &str) -> Result<(), IoError> {
    write_path(&relative_path.to_path(root), content)
}

/// Parse a document file into a block list.
pub fn load_document(path: &Path, dialect: Dialect) -> Result<BlockList, IoError> {
    let text = read_path(path)?;
    Ok(BlockList::from_text(&text, dialect))
}

/// Write a block list's canonical markup, ending with a newline.
pub fn save_document(path: &Path, list: &BlockList, dialect: Dialect) -> Result<(), IoError> {
    write_path(path, &file_text(list, dialect))
}

/// Exact file content `save_document` writes.
pub fn file_text(list: &BlockList, dialect: Dialect) -> String {
    let mut text = list.to_text(dialect);
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Scan for document files under `root`, returned relative to it and sorted
pub fn scan_documents(root: &Path) -> Result<Vec<RelativePathBuf>, IoError> {
    validate_documents_dir(root)?;

    let mut files = Vec::new();
    scan_directory_recursive(root, &mut files)?;

    let mut relative = files
        .iter()
        .map(|path| relative_to(path, root))
        .collect::<Result<Vec<_>, _>>()?;
    relative.sort();
    Ok(relative)
}

pub fn validate_documents_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidDocumentsDir(format!(
            "documents directory not found: {}",
            path.display()
        )));
    }
    Ok(())
}

pub fn is_document(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| DOCUMENT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::Io)
}

fn write_path(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }
    fs::write(path, content).map_err(IoError::Io)
}

fn relative_to(path: &Path, root: &Path) -> Result<RelativePathBuf, IoError> {
    let stripped = path
        .strip_prefix(root)
        .map_err(|_| IoError::OutsideRoot(path.to_path_buf()))?;
    RelativePathBuf::from_path(stripped).map_err(|_| IoError::OutsideRoot(path.to_path_buf()))
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_document(&path) {
            files.push(path);
        }
    }

    Ok(())
}
