/// Cliente del detector de idioma
///
/// Espera un endpoint estilo LibreTranslate: `POST {q}` responde con una lista
/// de candidatos `[{ "language": "en", "confidence": 92.0 }, ...]`.
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::clients::LanguageClassifier;
use crate::config::Config;
use crate::error::{AppError, AppResult, ServiceError};

#[derive(Debug, Clone, Deserialize)]
struct Detection {
    language: String,
    #[serde(default)]
    #[allow(dead_code)]
    confidence: f64,
}

/// Cliente HTTP del detector de idioma.
pub struct DetectorClient {
    client: reqwest::Client,
    url: String,
}

impl DetectorClient {
    /// Crea un cliente a partir de la configuración.
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config.detector_url.clone(),
        }
    }
}

#[async_trait]
impl LanguageClassifier for DetectorClient {
    async fn classify(&self, word: &str) -> AppResult<String> {
        let response = self
            .client
            .post(&self.url)
            .form(&[("q", word)])
            .send()
            .await
            .map_err(|e| AppError::request_failed(&self.url, e))?;

        let detections = response
            .json::<Vec<Detection>>()
            .await
            .map_err(|e| AppError::bad_response(&self.url, e))?;

        let best = detections
            .into_iter()
            .next()
            .ok_or_else(|| {
                AppError::Service(ServiceError::EmptyResponse {
                    endpoint: self.url.clone(),
                })
            })?;

        debug!("'{}' clasificada como '{}'", word, best.language);

        Ok(best.language)
    }
}
