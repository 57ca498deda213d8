//! Revisor de lote
//!
//! `App` posee la configuración y las capacidades; recorre la carpeta de
//! trabajos de forma estrictamente secuencial y emite las estadísticas
//! finales. Ningún fallo individual detiene el lote.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};

use crate::clients::{
    DetectorClient, GrammarChecker, LanguageClassifier, LanguageToolClient,
};
use crate::config::Config;
use crate::infrastructure::{DocumentConverter, LibreOfficeConverter};
use crate::orchestrator::manuscript_processor;
use crate::services::{GrammarValidator, ReportRenderer};

/// Aplicación principal.
pub struct App {
    config: Config,
    converter: Arc<dyn DocumentConverter>,
    grammar: GrammarValidator,
    renderer: ReportRenderer,
}

/// Estadísticas del lote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingStats {
    pub processed: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// Construye la aplicación con las capacidades reales (LibreOffice,
    /// LanguageTool y el detector de idioma por HTTP).
    pub fn initialize(config: Config) -> Self {
        let converter = Arc::new(LibreOfficeConverter::new(config.soffice_bin.clone()));
        let checker = Arc::new(LanguageToolClient::new(&config));
        let classifier = Arc::new(DetectorClient::new(&config));
        Self::with_capabilities(config, converter, checker, classifier)
    }

    /// Construye la aplicación con capacidades arbitrarias (dobles de prueba).
    pub fn with_capabilities(
        config: Config,
        converter: Arc<dyn DocumentConverter>,
        checker: Arc<dyn GrammarChecker>,
        classifier: Arc<dyn LanguageClassifier>,
    ) -> Self {
        let grammar = GrammarValidator::new(checker, classifier, config.language.clone());
        let renderer = ReportRenderer::new(config.reportes_dir.clone());
        Self {
            config,
            converter,
            grammar,
            renderer,
        }
    }

    /// Revisa todos los trabajos de la carpeta de entrada.
    pub async fn run(&self) -> Result<ProcessingStats> {
        log_startup(&self.config);

        let trabajos_dir = Path::new(&self.config.trabajos_dir);
        if !trabajos_dir.exists() {
            warn!(
                "⚠️ La carpeta de trabajos no existe: {}",
                trabajos_dir.display()
            );
            return Ok(ProcessingStats::default());
        }

        tokio::fs::create_dir_all(&self.config.revisados_dir)
            .await
            .with_context(|| {
                format!(
                    "no se pudo crear la carpeta de revisados {}",
                    self.config.revisados_dir
                )
            })?;

        self.convert_legacy_files(trabajos_dir).await?;

        let manuscripts = list_by_extension(trabajos_dir, "docx").await?;
        if manuscripts.is_empty() {
            warn!("⚠️ No se encontraron trabajos .docx para revisar");
            return Ok(ProcessingStats::default());
        }

        info!("✓ Se encontraron {} trabajos para revisar", manuscripts.len());

        let mut stats = ProcessingStats {
            total: manuscripts.len(),
            ..Default::default()
        };

        // Un trabajo a la vez; el orden es el del listado del directorio.
        for (i, path) in manuscripts.iter().enumerate() {
            let index = i + 1;
            match manuscript_processor::process_manuscript(
                path,
                index,
                &self.grammar,
                &self.renderer,
                &self.config,
            )
            .await
            {
                Ok(_) => stats.processed += 1,
                Err(e) => {
                    error!("[trabajo {}] ❌ falló la revisión: {:#}", index, e);
                    stats.failed += 1;
                }
            }
        }

        print_final_stats(&stats, &self.config);

        Ok(stats)
    }

    /// Convierte los `.doc` heredados al formato de trabajo, a mejor esfuerzo:
    /// una conversión fallida se registra y el archivo queda sin revisar.
    async fn convert_legacy_files(&self, dir: &Path) -> Result<()> {
        let legacy = list_by_extension(dir, "doc").await?;
        if legacy.is_empty() {
            return Ok(());
        }

        info!("▶ Convirtiendo {} archivos .doc a .docx...", legacy.len());

        for path in legacy {
            match self.converter.convert(&path).await {
                Ok(converted) => {
                    info!("✓ Convertido: {}", converted.display());
                }
                Err(e) => {
                    warn!("⚠️ No se pudo convertir {}: {}", path.display(), e);
                }
            }
        }

        Ok(())
    }
}

/// Lista los archivos del directorio con la extensión dada (sin distinguir
/// mayúsculas), en el orden en que los entrega el sistema.
async fn list_by_extension(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .with_context(|| format!("no se pudo leer la carpeta {}", dir.display()))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        if matches && path.is_file() {
            files.push(path);
        }
    }

    Ok(files)
}

// ========== Funciones auxiliares de log ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 Revisor automático de trabajos del congreso");
    info!("📁 Carpeta de entrada: {}", config.trabajos_dir);
    info!("📝 Idioma de revisión: {}", config.language);
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &ProcessingStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 Revisión del lote completada");
    info!(
        "Hora de término: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ Revisados: {}/{}", stats.processed, stats.total);
    info!("❌ Fallidos: {}", stats.failed);
    info!("📂 Reportes en: {}", config.reportes_dir);
    info!("{}", "=".repeat(60));
}
