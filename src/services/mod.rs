//! Capa de servicios
//!
//! Las cuatro pasadas de validación y el renderizador de reportes. Los
//! validadores de estructura, formato y referencias son funciones puras sobre
//! el texto; el gramatical depende de las capacidades HTTP inyectadas.

pub mod format;
pub mod grammar;
pub mod references;
pub mod renderer;
pub mod structure;

pub use format::validate_format;
pub use grammar::GrammarValidator;
pub use references::validate_references;
pub use renderer::ReportRenderer;
pub use structure::validate_structure;
