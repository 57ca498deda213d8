/// Configuración del programa
#[derive(Clone, Debug)]
pub struct Config {
    /// Carpeta con los trabajos a revisar
    pub trabajos_dir: String,
    /// Carpeta donde se escriben los reportes HTML
    pub reportes_dir: String,
    /// Carpeta a la que se mueven los trabajos ya revisados
    pub revisados_dir: String,
    /// Endpoint del servicio de revisión gramatical (LanguageTool)
    pub languagetool_url: String,
    /// Endpoint del detector de idioma
    pub detector_url: String,
    /// Idioma objetivo de la revisión gramatical
    pub language: String,
    /// Binario del convertidor de documentos
    pub soffice_bin: String,
    /// Mostrar logs detallados por hallazgo
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trabajos_dir: "./trabajos".to_string(),
            reportes_dir: "./reportes".to_string(),
            revisados_dir: "./trabajos_revisados".to_string(),
            languagetool_url: "http://localhost:8010/v2/check".to_string(),
            detector_url: "http://localhost:5000/detect".to_string(),
            language: "es".to_string(),
            soffice_bin: "libreoffice".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            trabajos_dir: std::env::var("TRABAJOS_DIR").unwrap_or(default.trabajos_dir),
            reportes_dir: std::env::var("REPORTES_DIR").unwrap_or(default.reportes_dir),
            revisados_dir: std::env::var("REVISADOS_DIR").unwrap_or(default.revisados_dir),
            languagetool_url: std::env::var("LANGUAGETOOL_URL").unwrap_or(default.languagetool_url),
            detector_url: std::env::var("DETECTOR_URL").unwrap_or(default.detector_url),
            language: std::env::var("TARGET_LANGUAGE").unwrap_or(default.language),
            soffice_bin: std::env::var("SOFFICE_BIN").unwrap_or(default.soffice_bin),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }
}
