//! Extractor de texto de documentos `.docx`
//!
//! Devuelve los párrafos del documento unidos con `\n`, que es el texto plano
//! sobre el que corren todos los validadores.

use std::path::Path;

use docx_rs::{DocumentChild, ParagraphChild, RunChild};

use crate::error::{AppError, AppResult};

/// Lee un `.docx` y devuelve su texto plano.
pub async fn extract_text(path: &Path) -> AppResult<String> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| AppError::file_read_failed(path, e))?;

    let docx = docx_rs::read_docx(&bytes).map_err(|e| AppError::extract_failed(path, e))?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(p) => Some(paragraph_text(p)),
            _ => None,
        })
        .collect();

    Ok(paragraphs.join("\n"))
}

/// Texto de un párrafo: concatena los runs; tabuladores y saltos se conservan
/// como `\t` y `\n` para que el validador de formato pueda verlos.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut out = String::new();
    for child in &paragraph.children {
        if let ParagraphChild::Run(run) = child {
            for run_child in &run.children {
                match run_child {
                    RunChild::Text(t) => out.push_str(&t.text),
                    RunChild::Tab(_) => out.push('\t'),
                    RunChild::Break(_) => out.push('\n'),
                    _ => {}
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Paragraph, Run};

    fn write_docx(path: &Path, lines: &[&str]) {
        let mut docx = Docx::new();
        for line in lines {
            docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*line)));
        }
        let file = std::fs::File::create(path).unwrap();
        docx.build().pack(file).unwrap();
    }

    #[tokio::test]
    async fn joins_paragraphs_with_newlines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("trabajo.docx");
        write_docx(&path, &["TÍTULO DEL TRABAJO", "Resumen", "Conclusiones"]);

        let text = extract_text(&path).await.unwrap();
        assert_eq!(text, "TÍTULO DEL TRABAJO\nResumen\nConclusiones");
    }

    #[tokio::test]
    async fn missing_file_is_a_read_error() {
        let err = extract_text(Path::new("no-existe.docx"))
            .await
            .expect_err("el archivo no existe");
        assert!(err.to_string().contains("no-existe.docx"));
    }
}
