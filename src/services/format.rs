//! Validador de formato
//!
//! Tres comprobaciones textuales independientes. Son aproximaciones: el texto
//! extraído no describe el estilo real del documento, así que se buscan
//! marcadores literales.

use crate::models::FormatFinding;

/// Fuente exigida por la plantilla del congreso.
pub const REQUIRED_FONT: &str = "Verdana";

/// Busca violaciones de formato en el texto.
pub fn validate_format(text: &str) -> Vec<FormatFinding> {
    let mut findings = Vec::new();

    if !text.contains(REQUIRED_FONT) {
        findings.push(FormatFinding::new(
            "Fuente incorrecta: no se detecta 'Verdana'",
        ));
    }
    if text.contains('\t') {
        findings.push(FormatFinding::new("Uso de tabuladores detectado"));
    }
    if text.to_lowercase().contains("left") {
        findings.push(FormatFinding::new("Texto no justificado"));
    }

    findings
}
