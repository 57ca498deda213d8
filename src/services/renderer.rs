//! Renderizador de reportes HTML
//!
//! Construye un documento HTML autocontenido con las cuatro secciones en orden
//! fijo y lo escribe en la carpeta de reportes como `<nombre>.html`. La salida
//! es determinista: mismos hallazgos, mismos bytes.

use std::path::PathBuf;

use crate::error::{AppError, AppResult};
use crate::models::{GrammarContext, Report};

const REPORT_TITLE: &str = "📘 Informe de revisión automática del Congreso Universidad 2026";

/// Escritor de reportes sobre una carpeta fija.
pub struct ReportRenderer {
    reports_dir: PathBuf,
}

impl ReportRenderer {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    /// Genera el HTML completo del reporte.
    pub fn render(&self, report: &Report) -> String {
        let mut out = String::new();
        out.push_str("<html>\n");
        out.push_str(" <head>\n");
        out.push_str("  <meta charset=\"utf-8\"/>\n");
        out.push_str("  <title>Reporte</title>\n");
        out.push_str(" </head>\n");
        out.push_str(" <body>\n");

        push_tag(&mut out, 2, "h1", REPORT_TITLE);
        push_tag(
            &mut out,
            2,
            "h2",
            &format!("📄 Archivo revisado: {}", escape(&report.file_stem)),
        );

        // I. Estructura
        push_tag(&mut out, 2, "h2", "I. 📚 Estructura del manuscrito");
        push_line(&mut out, 2, "<ul>");
        for finding in &report.structure {
            push_tag(
                &mut out,
                3,
                "li",
                &format!("{} {}", glyph(finding.satisfied), escape(&finding.rule)),
            );
        }
        push_line(&mut out, 2, "</ul>");

        // II. Ortografía y gramática
        push_tag(&mut out, 2, "h2", "II. 📝 Revisión ortográfica y gramatical");
        push_line(&mut out, 2, "<ul>");
        for finding in &report.grammar {
            push_line(&mut out, 3, "<li>");
            push_tag(
                &mut out,
                4,
                "strong",
                &format!("{}: ", escape(finding.context.flagged_word())),
            );
            push_line(&mut out, 4, &escape(&finding.message));
            push_line(&mut out, 4, "<p>");
            push_line(&mut out, 5, &highlight(&finding.context));
            push_line(&mut out, 4, "</p>");
            push_line(&mut out, 3, "</li>");
        }
        push_line(&mut out, 2, "</ul>");

        // III. Formato
        push_tag(&mut out, 2, "h2", "III. 📐 Formato del documento");
        push_line(&mut out, 2, "<ul>");
        for finding in &report.format {
            push_tag(&mut out, 3, "li", &format!("❌ {}", escape(&finding.description)));
        }
        push_line(&mut out, 2, "</ul>");

        // IV. Referencias
        push_tag(&mut out, 2, "h2", "IV. 📖 Revisión básica de estilo APA");
        push_line(&mut out, 2, "<ul>");
        for finding in &report.references {
            push_tag(
                &mut out,
                3,
                "li",
                &format!("{} {}", glyph(finding.satisfied), escape(&finding.line)),
            );
        }
        push_line(&mut out, 2, "</ul>");

        out.push_str(" </body>\n");
        out.push_str("</html>\n");
        out
    }

    /// Escribe el reporte como `<nombre>.html`, creando la carpeta si falta y
    /// sobrescribiendo cualquier reporte anterior del mismo archivo.
    pub async fn write(&self, report: &Report) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.reports_dir)
            .await
            .map_err(|e| AppError::create_dir_failed(&self.reports_dir, e))?;

        let path = self.reports_dir.join(format!("{}.html", report.file_stem));
        tokio::fs::write(&path, self.render(report))
            .await
            .map_err(|e| AppError::file_write_failed(&path, e))?;

        Ok(path)
    }
}

fn glyph(satisfied: bool) -> &'static str {
    if satisfied {
        "✅"
    } else {
        "❌"
    }
}

fn push_line(out: &mut String, indent: usize, content: &str) {
    for _ in 0..indent {
        out.push(' ');
    }
    out.push_str(content);
    out.push('\n');
}

fn push_tag(out: &mut String, indent: usize, tag: &str, content: &str) {
    push_line(out, indent, &format!("<{tag}>{content}</{tag}>"));
}

/// Contexto con la palabra señalada envuelta en `<mark>`.
///
/// Si los índices no caen en límites de carácter se renderiza el contexto
/// completo sin resaltar.
fn highlight(ctx: &GrammarContext) -> String {
    if let Some(end) = ctx.offset.checked_add(ctx.length) {
        if let (Some(before), Some(word), Some(after)) = (
            ctx.text.get(..ctx.offset),
            ctx.text.get(ctx.offset..end),
            ctx.text.get(end..),
        ) {
            return format!("{}<mark>{}</mark>{}", escape(before), escape(word), escape(after));
        }
    }
    escape(&ctx.text)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormatFinding, GrammarFinding, ReferenceFinding, StructureFinding};

    fn sample_report() -> Report {
        Report {
            file_stem: "trabajo_1".to_string(),
            structure: vec![
                StructureFinding::new("Título en mayúsculas y ≤ 15 palabras", true),
                StructureFinding::new("Autores y correos electrónicos presentes", false),
            ],
            grammar: vec![GrammarFinding {
                message: "Posible error ortográfico".to_string(),
                context: GrammarContext::new("el qeu vino", 3, 3),
            }],
            format: vec![FormatFinding::new("Uso de tabuladores detectado")],
            references: vec![ReferenceFinding {
                line: "García, J. (2020). Título.".to_string(),
                satisfied: true,
            }],
        }
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let renderer = ReportRenderer::new("reportes");
        let html = renderer.render(&sample_report());

        let structure = html.find("Estructura del manuscrito").unwrap();
        let grammar = html.find("Revisión ortográfica y gramatical").unwrap();
        let format = html.find("Formato del documento").unwrap();
        let references = html.find("Revisión básica de estilo APA").unwrap();
        assert!(structure < grammar && grammar < format && format < references);
    }

    #[test]
    fn glyphs_reflect_satisfaction() {
        let renderer = ReportRenderer::new("reportes");
        let html = renderer.render(&sample_report());

        assert!(html.contains("✅ Título en mayúsculas y ≤ 15 palabras"));
        assert!(html.contains("❌ Autores y correos electrónicos presentes"));
        assert!(html.contains("✅ García, J. (2020). Título."));
    }

    #[test]
    fn flagged_word_is_marked_in_context() {
        let renderer = ReportRenderer::new("reportes");
        let html = renderer.render(&sample_report());

        assert!(html.contains("el <mark>qeu</mark> vino"));
        assert!(html.contains("<strong>qeu: </strong>"));
    }

    #[test]
    fn document_text_is_escaped() {
        let mut report = sample_report();
        report.references[0].line = "Autor <b> & \"cita\"".to_string();
        let renderer = ReportRenderer::new("reportes");
        let html = renderer.render(&report);

        assert!(html.contains("Autor &lt;b&gt; &amp; &quot;cita&quot;"));
        assert!(!html.contains("Autor <b>"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let renderer = ReportRenderer::new("reportes");
        let report = sample_report();
        assert_eq!(renderer.render(&report), renderer.render(&report));
    }

    #[tokio::test]
    async fn write_creates_directory_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let reports_dir = dir.path().join("reportes");
        let renderer = ReportRenderer::new(&reports_dir);
        let report = sample_report();

        let first = renderer.write(&report).await.unwrap();
        assert_eq!(first, reports_dir.join("trabajo_1.html"));

        let second = renderer.write(&report).await.unwrap();
        assert_eq!(first, second);

        let contents = tokio::fs::read_to_string(&second).await.unwrap();
        assert_eq!(contents, renderer.render(&report));
    }
}
