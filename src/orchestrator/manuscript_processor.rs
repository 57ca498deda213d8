//! Revisor de un solo trabajo
//!
//! Pipeline completo de un archivo: extraer texto → validar ×4 → escribir el
//! reporte → archivar el original.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::infrastructure::extractor;
use crate::models::{Manuscript, Report};
use crate::services::{
    validate_format, validate_references, validate_structure, GrammarValidator, ReportRenderer,
};

/// Procesa un trabajo y devuelve la ruta del reporte generado.
pub async fn process_manuscript(
    path: &Path,
    index: usize,
    grammar: &GrammarValidator,
    renderer: &ReportRenderer,
    config: &Config,
) -> Result<PathBuf> {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    log_manuscript_start(index, &stem);

    let text = extractor::extract_text(path)
        .await
        .with_context(|| format!("no se pudo extraer el texto de {}", path.display()))?;
    let manuscript = Manuscript::new(stem, text);

    let structure = validate_structure(&manuscript.text);
    let grammar_findings = grammar.check(&manuscript.text).await;
    let format = validate_format(&manuscript.text);
    let references = validate_references(&manuscript.text);

    log_findings(
        index,
        structure.iter().filter(|f| !f.satisfied).count(),
        grammar_findings.len(),
        format.len(),
        references.iter().filter(|f| !f.satisfied).count(),
    );

    let report = Report {
        file_stem: manuscript.stem.clone(),
        structure,
        grammar: grammar_findings,
        format,
        references,
    };

    // Detalle por hallazgo (si está habilitado)
    if config.verbose_logging {
        log_findings_detail(index, &report);
    }

    let report_path = renderer
        .write(&report)
        .await
        .with_context(|| format!("no se pudo escribir el reporte de {}", report.file_stem))?;

    archive(path, Path::new(&config.revisados_dir)).await?;

    log_manuscript_complete(index, &report_path);

    Ok(report_path)
}

/// Mueve el original a la carpeta de revisados.
async fn archive(path: &Path, archive_dir: &Path) -> Result<()> {
    let file_name = path
        .file_name()
        .with_context(|| format!("ruta sin nombre de archivo: {}", path.display()))?;
    let target = archive_dir.join(file_name);

    tokio::fs::rename(path, &target)
        .await
        .map_err(|e| AppError::file_move_failed(path, e))
        .with_context(|| format!("no se pudo archivar {}", path.display()))?;

    Ok(())
}

// ========== Funciones auxiliares de log ==========

fn log_manuscript_start(index: usize, stem: &str) {
    info!("\n[trabajo {}] {}", index, "─".repeat(30));
    info!("[trabajo {}] 📄 Revisando: {}", index, stem);
}

fn log_findings(index: usize, structure: usize, grammar: usize, format: usize, references: usize) {
    info!(
        "[trabajo {}] hallazgos: estructura {} | ortografía {} | formato {} | referencias {}",
        index, structure, grammar, format, references
    );
}

fn log_findings_detail(index: usize, report: &Report) {
    for finding in report.structure.iter().filter(|f| !f.satisfied) {
        info!("[trabajo {}]   ❌ {}", index, finding.rule);
    }
    for finding in &report.grammar {
        info!(
            "[trabajo {}]   ✏️ {}: {}",
            index,
            finding.context.flagged_word(),
            finding.message
        );
    }
    for finding in &report.format {
        info!("[trabajo {}]   📐 {}", index, finding.description);
    }
    for finding in report.references.iter().filter(|f| !f.satisfied) {
        info!("[trabajo {}]   📖 {}", index, finding.line);
    }
}

fn log_manuscript_complete(index: usize, report_path: &Path) {
    info!(
        "[trabajo {}] ✅ Reporte generado: {}",
        index,
        report_path.display()
    );
}
