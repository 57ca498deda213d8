//! Validador de estructura
//!
//! Lista fija de nueve reglas sobre el texto extraído. Siempre se evalúan las
//! nueve, en el mismo orden; una regla que no se cumple es un hallazgo fallido,
//! nunca un error.

use crate::models::StructureFinding;

/// Evalúa las nueve reglas de estructura del manuscrito.
pub fn validate_structure(text: &str) -> Vec<StructureFinding> {
    let lower = text.to_lowercase();
    let word_count = text.split_whitespace().count();
    let first_line = text.lines().next().unwrap_or("");
    let title_ok = is_all_upper(first_line) && first_line.split_whitespace().count() <= 15;

    vec![
        StructureFinding::new("Título en mayúsculas y ≤ 15 palabras", title_ok),
        StructureFinding::new(
            "Autores y correos electrónicos presentes",
            text.contains('@'),
        ),
        // El límite real del resumen es 250 palabras; el conteo es sobre el
        // documento completo con umbral 500, igual que el revisor original.
        StructureFinding::new(
            "Resumen ≤ 250 palabras",
            lower.contains("resumen") && word_count < 500,
        ),
        StructureFinding::new("Palabras clave en español", lower.contains("palabras clave")),
        StructureFinding::new(
            "Traducción al inglés (título, resumen, palabras clave)",
            lower.contains("abstract"),
        ),
        StructureFinding::new("Sección INTRODUCCIÓN", lower.contains("introducción")),
        StructureFinding::new(
            "Sección RESULTADOS o DESARROLLO",
            lower.contains("resultados") || lower.contains("desarrollo"),
        ),
        StructureFinding::new("Sección CONCLUSIONES", lower.contains("conclusiones")),
        StructureFinding::new(
            "Sección REFERENCIAS BIBLIOGRÁFICAS",
            lower.contains("referencias"),
        ),
    ]
}

/// Equivalente a `str.isupper`: al menos un carácter con caja y ninguno en
/// minúscula.
fn is_all_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
