use std::path::Path;

use thiserror::Error;

/// Tipo de resultado de la aplicación.
pub type AppResult<T> = Result<T, AppError>;

/// Error de la aplicación, segmentado por dominio.
#[derive(Debug, Error)]
pub enum AppError {
    /// Errores de archivo (lectura, escritura, movimiento)
    #[error("error de archivo: {0}")]
    File(#[from] FileError),
    /// Errores de servicios remotos (LanguageTool, detector de idioma)
    #[error("error de servicio: {0}")]
    Service(#[from] ServiceError),
    /// Errores del convertidor de documentos
    #[error("error de conversión: {0}")]
    Convert(#[from] ConvertError),
    /// Errores de extracción de texto
    #[error("error de extracción: {0}")]
    Extract(#[from] ExtractError),
}

/// Errores de operaciones sobre archivos.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("no se pudo leer el archivo {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no se pudo escribir el archivo {path}: {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no se pudo mover el archivo {path}: {source}")]
    MoveFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("no se pudo crear el directorio {path}: {source}")]
    CreateDirFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errores de servicios HTTP externos.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("falló la petición a {endpoint}: {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("respuesta inválida de {endpoint}: {source}")]
    BadResponse {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("respuesta vacía de {endpoint}")]
    EmptyResponse { endpoint: String },
}

/// Errores del convertidor externo de documentos.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("no se pudo ejecutar '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("el convertidor terminó con {status} para {path}")]
    ConverterFailed {
        path: String,
        status: std::process::ExitStatus,
    },
    #[error("la conversión no produjo el archivo esperado {path}")]
    OutputMissing { path: String },
}

/// Errores al extraer texto de un documento.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("no se pudo interpretar el documento {path}: {source}")]
    ParseFailed {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

// ========== Constructores de conveniencia ==========

impl AppError {
    /// Crea un error de lectura de archivo
    pub fn file_read_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::ReadFailed {
            path: path.as_ref().display().to_string(),
            source,
        })
    }

    /// Crea un error de escritura de archivo
    pub fn file_write_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.as_ref().display().to_string(),
            source,
        })
    }

    /// Crea un error de movimiento de archivo
    pub fn file_move_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::MoveFailed {
            path: path.as_ref().display().to_string(),
            source,
        })
    }

    /// Crea un error de creación de directorio
    pub fn create_dir_failed(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        AppError::File(FileError::CreateDirFailed {
            path: path.as_ref().display().to_string(),
            source,
        })
    }

    /// Crea un error de petición HTTP
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Service(ServiceError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// Crea un error de respuesta inválida
    pub fn bad_response(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        AppError::Service(ServiceError::BadResponse {
            endpoint: endpoint.into(),
            source,
        })
    }

    /// Crea un error de extracción de texto
    pub fn extract_failed(
        path: impl AsRef<Path>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        AppError::Extract(ExtractError::ParseFailed {
            path: path.as_ref().display().to_string(),
            source: Box::new(source),
        })
    }
}
