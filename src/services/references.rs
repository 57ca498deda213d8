//! Validador de referencias bibliográficas
//!
//! Recorre el texto línea por línea. Una línea es candidata a referencia si
//! menciona un año entre 2000 y 2025, "doi" o "http"; la candidata cumple el
//! estilo si presenta autor tipo `Apellido, I.` y el año entre paréntesis.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::ReferenceFinding;

// Clases Unicode para que los apellidos acentuados (García, Pérez) casen.
static AUTHOR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\p{Lu}\p{Ll}+, \p{Lu}\.").expect("patrón de autor"));
static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\d{4}\)").expect("patrón de año"));

/// Evalúa las líneas candidatas a referencia, en orden de aparición.
pub fn validate_references(text: &str) -> Vec<ReferenceFinding> {
    text.lines()
        .filter(|line| is_candidate(line))
        .map(|line| ReferenceFinding {
            line: line.trim().to_string(),
            satisfied: AUTHOR_PATTERN.is_match(line) && YEAR_PATTERN.is_match(line),
        })
        .collect()
}

fn is_candidate(line: &str) -> bool {
    let lower = line.to_lowercase();
    if lower.contains("doi") || lower.contains("http") {
        return true;
    }
    (2000..=2025).any(|year| lower.contains(&year.to_string()))
}
