//! Validador ortográfico y gramatical
//!
//! Envía el texto completo al servicio de revisión y filtra los hallazgos:
//! las palabras vacías y los préstamos del inglés se descartan. Un fallo del
//! servicio no tumba el documento; se degrada a un único hallazgo sintético.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::clients::{GrammarChecker, LanguageClassifier};
use crate::models::{GrammarContext, GrammarFinding};

/// Validador gramatical con sus capacidades inyectadas.
pub struct GrammarValidator {
    checker: Arc<dyn GrammarChecker>,
    classifier: Arc<dyn LanguageClassifier>,
    language: String,
}

impl GrammarValidator {
    pub fn new(
        checker: Arc<dyn GrammarChecker>,
        classifier: Arc<dyn LanguageClassifier>,
        language: impl Into<String>,
    ) -> Self {
        Self {
            checker,
            classifier,
            language: language.into(),
        }
    }

    /// Revisa el texto y devuelve los hallazgos ya filtrados.
    ///
    /// Nunca falla: un error de transporte o de formato se convierte en un
    /// único hallazgo con contexto vacío.
    pub async fn check(&self, text: &str) -> Vec<GrammarFinding> {
        let response = match self.checker.check(text, &self.language).await {
            Ok(response) => response,
            Err(e) => {
                warn!("fallo del servicio gramatical: {}", e);
                return vec![GrammarFinding {
                    message: format!("Error de conexión con LanguageTool: {e}"),
                    context: GrammarContext::empty(),
                }];
            }
        };

        let mut findings = Vec::new();
        for m in response.matches {
            let context = GrammarContext::new(m.context.text, m.context.offset, m.context.length);
            let word = context.flagged_word().trim().to_string();

            if word.is_empty() {
                continue;
            }
            if self.is_english(&word.to_lowercase()).await {
                debug!("'{}' clasificada como inglés, descartada", word);
                continue;
            }

            findings.push(GrammarFinding {
                message: m.message,
                context,
            });
        }
        findings
    }

    /// Un fallo del clasificador cuenta como "no es inglés": la palabra se
    /// conserva como posible error de español.
    async fn is_english(&self, word: &str) -> bool {
        match self.classifier.classify(word).await {
            Ok(code) => code == "en",
            Err(e) => {
                debug!("no se pudo clasificar '{}': {}", word, e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    use crate::clients::languagetool::{CheckMatch, CheckResponse, MatchContext};
    use crate::error::{AppError, AppResult, ServiceError};

    struct StubChecker {
        response: Option<CheckResponse>,
    }

    #[async_trait]
    impl GrammarChecker for StubChecker {
        async fn check(&self, _text: &str, _language: &str) -> AppResult<CheckResponse> {
            match &self.response {
                Some(r) => Ok(r.clone()),
                None => Err(AppError::Service(ServiceError::EmptyResponse {
                    endpoint: "stub".to_string(),
                })),
            }
        }
    }

    struct StubClassifier {
        languages: HashMap<String, String>,
        fail: bool,
    }

    #[async_trait]
    impl LanguageClassifier for StubClassifier {
        async fn classify(&self, word: &str) -> AppResult<String> {
            if self.fail {
                return Err(AppError::Service(ServiceError::EmptyResponse {
                    endpoint: "stub".to_string(),
                }));
            }
            Ok(self
                .languages
                .get(word)
                .cloned()
                .unwrap_or_else(|| "es".to_string()))
        }
    }

    fn match_for(text: &str, offset: usize, length: usize, message: &str) -> CheckMatch {
        CheckMatch {
            message: message.to_string(),
            context: MatchContext {
                text: text.to_string(),
                offset,
                length,
            },
        }
    }

    fn validator_with(
        response: Option<CheckResponse>,
        languages: &[(&str, &str)],
        fail_classifier: bool,
    ) -> GrammarValidator {
        let languages = languages
            .iter()
            .map(|(w, l)| (w.to_string(), l.to_string()))
            .collect();
        GrammarValidator::new(
            Arc::new(StubChecker { response }),
            Arc::new(StubClassifier {
                languages,
                fail: fail_classifier,
            }),
            "es",
        )
    }

    #[tokio::test]
    async fn english_loanword_is_filtered() {
        let response = CheckResponse {
            matches: vec![match_for("use the word", 4, 3, "Palabra desconocida")],
        };
        let validator = validator_with(Some(response), &[("the", "en")], false);

        let findings = validator.check("texto").await;
        assert!(findings.is_empty());
    }

    #[tokio::test]
    async fn misspelled_spanish_word_is_kept() {
        let response = CheckResponse {
            matches: vec![match_for("el qeu vino", 3, 3, "Posible error")],
        };
        let validator = validator_with(Some(response), &[], false);

        let findings = validator.check("texto").await;
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "Posible error");
        assert_eq!(findings[0].context.flagged_word(), "qeu");
    }

    #[tokio::test]
    async fn empty_flagged_word_is_discarded() {
        let response = CheckResponse {
            matches: vec![match_for("   espacios   ", 0, 3, "Espacios")],
        };
        let validator = validator_with(Some(response), &[], false);

        assert!(validator.check("texto").await.is_empty());
    }

    #[tokio::test]
    async fn out_of_range_context_is_discarded() {
        let response = CheckResponse {
            matches: vec![match_for("corto", 10, 4, "Fuera de rango")],
        };
        let validator = validator_with(Some(response), &[], false);

        assert!(validator.check("texto").await.is_empty());
    }

    #[tokio::test]
    async fn transport_failure_becomes_single_synthetic_finding() {
        let validator = validator_with(None, &[], false);

        let findings = validator.check("texto").await;
        assert_eq!(findings.len(), 1);
        assert!(findings[0]
            .message
            .starts_with("Error de conexión con LanguageTool"));
        assert_eq!(findings[0].context, GrammarContext::empty());
    }

    #[tokio::test]
    async fn classifier_failure_keeps_the_word() {
        let response = CheckResponse {
            matches: vec![match_for("el qeu vino", 3, 3, "Posible error")],
        };
        let validator = validator_with(Some(response), &[], true);

        let findings = validator.check("texto").await;
        assert_eq!(findings.len(), 1);
    }
}
