//! Capa de clientes HTTP
//!
//! Cada servicio externo se expone como una capacidad (`trait`) para poder
//! sustituirlo por dobles en los tests; las implementaciones reales usan
//! `reqwest`.

pub mod langdetect;
pub mod languagetool;

use async_trait::async_trait;

use crate::error::AppResult;
use languagetool::CheckResponse;

/// Capacidad de revisión ortográfica y gramatical.
#[async_trait]
pub trait GrammarChecker: Send + Sync {
    /// Envía el texto completo y devuelve los hallazgos del servicio.
    async fn check(&self, text: &str, language: &str) -> AppResult<CheckResponse>;
}

/// Capacidad de clasificación de idioma para una palabra.
#[async_trait]
pub trait LanguageClassifier: Send + Sync {
    /// Devuelve el código de idioma detectado (por ejemplo `"en"`, `"es"`).
    async fn classify(&self, word: &str) -> AppResult<String>;
}

pub use langdetect::DetectorClient;
pub use languagetool::LanguageToolClient;
