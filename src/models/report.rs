//! Hallazgos de los validadores y el reporte que los agrupa.
//!
//! Todos los tipos se construyen una vez por trabajo y no se mutan después.

/// Resultado de una regla de estructura (pasa / no pasa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructureFinding {
    /// Etiqueta de la regla, tal como aparece en el reporte
    pub rule: String,
    pub satisfied: bool,
}

impl StructureFinding {
    pub fn new(rule: impl Into<String>, satisfied: bool) -> Self {
        Self {
            rule: rule.into(),
            satisfied,
        }
    }
}

/// Ventana de contexto que el servicio gramatical devuelve con cada hallazgo.
///
/// `offset` y `length` indexan dentro de `text`, no dentro del documento.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrammarContext {
    pub text: String,
    pub offset: usize,
    pub length: usize,
}

impl GrammarContext {
    pub fn new(text: impl Into<String>, offset: usize, length: usize) -> Self {
        Self {
            text: text.into(),
            offset,
            length,
        }
    }

    /// Contexto vacío, usado por los hallazgos sintéticos de error de conexión.
    pub fn empty() -> Self {
        Self::default()
    }

    /// La palabra señalada dentro del contexto.
    ///
    /// Devuelve `""` si los índices quedan fuera de rango o no caen en un
    /// límite de carácter; un contexto mal formado nunca provoca un panic.
    pub fn flagged_word(&self) -> &str {
        let Some(end) = self.offset.checked_add(self.length) else {
            return "";
        };
        self.text.get(self.offset..end).unwrap_or("")
    }
}

/// Un error ortográfico o gramatical señalado por el servicio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarFinding {
    pub message: String,
    pub context: GrammarContext,
}

/// Una violación de formato detectada en el texto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatFinding {
    pub description: String,
}

impl FormatFinding {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// Una línea candidata a referencia bibliográfica y si cumple el estilo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceFinding {
    pub line: String,
    pub satisfied: bool,
}

/// Todos los hallazgos de un trabajo, listos para el renderizador.
#[derive(Debug, Clone)]
pub struct Report {
    pub file_stem: String,
    pub structure: Vec<StructureFinding>,
    pub grammar: Vec<GrammarFinding>,
    pub format: Vec<FormatFinding>,
    pub references: Vec<ReferenceFinding>,
}
