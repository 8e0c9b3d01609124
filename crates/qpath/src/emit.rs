use qpath_build::GeneratedFile;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;
use tracing::debug;

///
/// EmitError
///

#[derive(Debug, ThisError)]
pub enum EmitError {
    #[error("failed to write {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}

///
/// Emitter
///
/// The host-side sink for generated files. Called once per file, after the
/// whole pass has been rendered.
///

pub trait Emitter {
    fn emit(&mut self, file: GeneratedFile) -> Result<(), EmitError>;
}

///
/// MemoryEmitter
///

#[derive(Debug, Default)]
pub struct MemoryEmitter {
    files: Vec<GeneratedFile>,
}

impl MemoryEmitter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn files(&self) -> &[GeneratedFile] {
        &self.files
    }

    /// Find a file by its generated class name, e.g. `QPerson`.
    #[must_use]
    pub fn file(&self, name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.name == name)
    }

    #[must_use]
    pub fn into_files(self) -> Vec<GeneratedFile> {
        self.files
    }
}

impl Emitter for MemoryEmitter {
    fn emit(&mut self, file: GeneratedFile) -> Result<(), EmitError> {
        self.files.push(file);

        Ok(())
    }
}

///
/// FsEmitter
///
/// Writes each file under `root` at its package path, creating directories
/// as needed. Existing files are overwritten.
///

#[derive(Clone, Debug)]
pub struct FsEmitter {
    root: PathBuf,
}

impl FsEmitter {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_for(&self, file: &GeneratedFile) -> PathBuf {
        self.root.join(file.relative_path())
    }
}

impl Emitter for FsEmitter {
    fn emit(&mut self, file: GeneratedFile) -> Result<(), EmitError> {
        let path = self.path_for(&file);
        let io_err = |source| EmitError::Io {
            path: path.clone(),
            source,
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        fs::write(&path, file.contents.as_bytes()).map_err(io_err)?;

        debug!(path = %path.display(), "wrote generated file");

        Ok(())
    }
}
