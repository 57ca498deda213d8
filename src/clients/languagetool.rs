/// Cliente del servicio de revisión gramatical (LanguageTool)
///
/// Encapsula la llamada HTTP y los tipos de la respuesta JSON.
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::clients::GrammarChecker;
use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Respuesta del endpoint `/v2/check`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub matches: Vec<CheckMatch>,
}

/// Un hallazgo individual del servicio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckMatch {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub context: MatchContext,
}

/// Ventana de contexto tal como la devuelve el servicio.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchContext {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub offset: usize,
    #[serde(default)]
    pub length: usize,
}

/// Cliente HTTP de LanguageTool.
pub struct LanguageToolClient {
    client: reqwest::Client,
    url: String,
}

impl LanguageToolClient {
    /// Crea un cliente a partir de la configuración.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.languagetool_url.clone(),
        }
    }
}

#[async_trait]
impl GrammarChecker for LanguageToolClient {
    async fn check(&self, text: &str, language: &str) -> AppResult<CheckResponse> {
        debug!("enviando {} bytes a {}", text.len(), self.url);

        let response = self
            .client
            .post(&self.url)
            .form(&[("text", text), ("language", language)])
            .send()
            .await
            .map_err(|e| AppError::request_failed(&self.url, e))?;

        let parsed = response
            .json::<CheckResponse>()
            .await
            .map_err(|e| AppError::bad_response(&self.url, e))?;

        debug!("LanguageTool devolvió {} hallazgos", parsed.matches.len());

        Ok(parsed)
    }
}
