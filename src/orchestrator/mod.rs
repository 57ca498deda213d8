//! Capa de orquestación
//!
//! ## Módulos
//!
//! ### `batch_processor` — revisor de lote
//! - Crea las carpetas de trabajo
//! - Pasa de conversión `.doc` → `.docx` (mejor esfuerzo)
//! - Recorre los `.docx` uno por uno, en orden de listado
//! - Estadísticas finales
//!
//! ### `manuscript_processor` — revisor de un trabajo
//! - Extrae el texto, corre los cuatro validadores
//! - Escribe el reporte HTML
//! - Mueve el original a la carpeta de revisados
//!
//! Todo el recorrido es estrictamente secuencial: un trabajo termina su
//! pipeline completo antes de que empiece el siguiente.

pub mod batch_processor;
pub mod manuscript_processor;

pub use batch_processor::{App, ProcessingStats};
pub use manuscript_processor::process_manuscript;
