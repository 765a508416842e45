use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;
use serde::Serialize;
use tracing::info;

use clinflat_core::errors::Result;

use crate::consts::GZIP_EXTENSION;

/// Destination for serialized output: standard output or a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonSink {
    destination: Option<PathBuf>,
    pretty: bool,
}

impl JsonSink {
    pub fn stdout() -> Self {
        JsonSink::default()
    }

    /// Write to `path`. An empty path means standard output. A path ending in `.gz` is
    /// written gzip compressed.
    pub fn file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        JsonSink {
            destination: (!path.as_os_str().is_empty()).then(|| path.to_path_buf()),
            pretty: false,
        }
    }

    pub fn from_option<P: AsRef<Path>>(path: Option<P>) -> Self {
        match path {
            Some(path) => JsonSink::file(path),
            None => JsonSink::stdout(),
        }
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }

    ///
    /// Serialize `value` and write it out, returning the number of JSON bytes produced.
    ///
    /// Serialization happens completely in memory first: if it fails, the destination file is
    /// never created.
    ///
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> Result<usize> {
        let json = to_json_bytes(value, self.pretty)?;

        match &self.destination {
            Some(path) => write_file(path, &json)?,
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                handle.write_all(&json)?;
                writeln!(handle)?;
                handle.flush()?;
            }
        }

        info!(
            "Wrote {} bytes of JSON to {}",
            json.len(),
            self.destination
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "standard output".to_string())
        );
        Ok(json.len())
    }
}

pub fn to_json_bytes<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<Vec<u8>> {
    let json = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(json)
}

fn write_file(path: &Path, json: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let is_gzipped = path.extension().and_then(|e| e.to_str()) == Some(GZIP_EXTENSION);

    if is_gzipped {
        let mut encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        encoder.write_all(json)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = BufWriter::new(file);
        writer.write_all(json)?;
        writer.flush()?;
    }

    Ok(())
}
