//! Convertidor de documentos heredados
//!
//! Normaliza archivos `.doc` al formato de trabajo `.docx` invocando el
//! convertidor externo (LibreOffice en modo headless).

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::ConvertError;

/// Capacidad de conversión de documentos.
///
/// `convert` deja el archivo convertido junto al original y devuelve su ruta.
#[async_trait]
pub trait DocumentConverter: Send + Sync {
    async fn convert(&self, path: &Path) -> Result<PathBuf, ConvertError>;
}

/// Convertidor basado en LibreOffice headless.
pub struct LibreOfficeConverter {
    binary: String,
}

impl LibreOfficeConverter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

#[async_trait]
impl DocumentConverter for LibreOfficeConverter {
    async fn convert(&self, path: &Path) -> Result<PathBuf, ConvertError> {
        let outdir = path.parent().unwrap_or_else(|| Path::new("."));

        debug!("convirtiendo {} con {}", path.display(), self.binary);

        let status = Command::new(&self.binary)
            .arg("--headless")
            .arg("--convert-to")
            .arg("docx")
            .arg(path)
            .arg("--outdir")
            .arg(outdir)
            .status()
            .await
            .map_err(|e| ConvertError::SpawnFailed {
                command: self.binary.clone(),
                source: e,
            })?;

        if !status.success() {
            return Err(ConvertError::ConverterFailed {
                path: path.display().to_string(),
                status,
            });
        }

        let converted = path.with_extension("docx");
        if !converted.exists() {
            return Err(ConvertError::OutputMissing {
                path: converted.display().to_string(),
            });
        }

        Ok(converted)
    }
}
