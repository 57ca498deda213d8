/// Un trabajo enviado al congreso: nombre base del archivo y texto extraído.
///
/// Se crea uno por archivo y se descarta al terminar su reporte; no hay estado
/// compartido entre trabajos.
#[derive(Debug, Clone)]
pub struct Manuscript {
    /// Nombre del archivo sin extensión (da nombre al reporte)
    pub stem: String,
    /// Cuerpo completo del documento, párrafos unidos con '\n'
    pub text: String,
}

impl Manuscript {
    pub fn new(stem: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            stem: stem.into(),
            text: text.into(),
        }
    }
}
