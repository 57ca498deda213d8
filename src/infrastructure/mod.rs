//! Capa de infraestructura
//!
//! Procesos externos y lectura de documentos: el convertidor de formatos
//! heredados y el extractor de texto de `.docx`.

pub mod converter;
pub mod extractor;

pub use converter::{DocumentConverter, LibreOfficeConverter};
pub use extractor::extract_text;
