//! # Revisar Trabajos
//!
//! Revisor automático por lotes de los trabajos enviados al congreso:
//! estructura, ortografía/gramática, formato y estilo de referencias, con un
//! reporte HTML por documento.
//!
//! ## Arquitectura
//!
//! El sistema está organizado en capas:
//!
//! ### ① Infraestructura (`infrastructure/`)
//! - `DocumentConverter` / `LibreOfficeConverter` — conversión `.doc` → `.docx`
//! - `extractor` — texto plano a partir del `.docx`
//!
//! ### ② Clientes (`clients/`)
//! - `GrammarChecker` / `LanguageToolClient` — revisión gramatical remota
//! - `LanguageClassifier` / `DetectorClient` — clasificación de idioma
//!
//! ### ③ Servicios (`services/`)
//! - `validate_structure` — lista fija de nueve reglas
//! - `GrammarValidator` — filtrado de hallazgos del servicio
//! - `validate_format` — marcadores de formato
//! - `validate_references` — líneas candidatas a referencia
//! - `ReportRenderer` — HTML final
//!
//! ### ④ Orquestación (`orchestrator/`)
//! - `App` — lote completo, carpetas y estadísticas
//! - `process_manuscript` — pipeline de un solo trabajo
//!
//! ```text
//! App (Vec<archivo>)
//!     ↓
//! process_manuscript (un archivo)
//!     ↓
//! services (validadores + renderizador)
//!     ↓
//! clients / infrastructure (HTTP, procesos, docx)
//! ```

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod services;

// Reexporta los tipos de uso común
pub use clients::{DetectorClient, GrammarChecker, LanguageClassifier, LanguageToolClient};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::{DocumentConverter, LibreOfficeConverter};
pub use models::{Manuscript, Report};
pub use orchestrator::{App, ProcessingStats};
pub use services::{
    validate_format, validate_references, validate_structure, GrammarValidator, ReportRenderer,
};
