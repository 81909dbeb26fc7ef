use std::{
    fs,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use tempfile::{Builder, NamedTempFile};

use crate::error::PedError;

// Temporary files start with '.' so they are never picked up as inputs
fn temp_output(dir: &Path) -> io::Result<NamedTempFile> {
    let mut b = Builder::new();
    b.prefix(".pedqc");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Filtered through the umask like File::create
        b.permissions(fs::Permissions::from_mode(0o666));
    }
    b.tempfile_in(dir)
}

/// Output file that only appears at its final path once committed
///
/// Data goes to a temporary file in the destination directory which is
/// renamed over the target by [`OutputFile::commit`]. If the `OutputFile` is
/// dropped without being committed the temporary file is removed and any
/// existing file at the target path is left as it was.
pub struct OutputFile {
    path: PathBuf,
    wrt: BufWriter<NamedTempFile>,
}

impl OutputFile {
    /// Open a new output, creating missing parent directories
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self, PedError> {
        let path = path.as_ref().to_owned();
        let dir = match path.parent() {
            Some(d) if !d.as_os_str().is_empty() => d.to_owned(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir).map_err(|e| PedError::io(&dir, e))?;
        let tmp = temp_output(&dir).map_err(|e| PedError::io(&dir, e))?;
        // An existing output keeps its permissions when replaced
        if let Ok(md) = fs::metadata(&path) {
            tmp.as_file()
                .set_permissions(md.permissions())
                .map_err(|e| PedError::io(&path, e))?;
        }
        debug!(
            "Writing {} via temporary file {}",
            path.display(),
            tmp.path().display()
        );
        Ok(Self {
            path,
            wrt: BufWriter::new(tmp),
        })
    }

    /// Write `s` followed by a newline
    pub fn write_line(&mut self, s: &str) -> Result<(), PedError> {
        writeln!(self.wrt, "{}", s).map_err(|e| PedError::io(&self.path, e))
    }

    /// Flush and move the output into place
    pub fn commit(self) -> Result<PathBuf, PedError> {
        let Self { path, wrt } = self;
        let tmp = wrt
            .into_inner()
            .map_err(|e| PedError::io(&path, e.into_error()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| PedError::io(&path, e))?;
        tmp.persist(&path).map_err(|e| PedError::io(&path, e.error))?;
        Ok(path)
    }
}
