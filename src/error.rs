//! Error types for loading form descriptions

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum FormError {
    #[error("Failed to read form file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Form syntax error: {message}")]
    Syntax {
        span: Option<Span>,
        message: String,
    },

    #[error("duplicate field name '{name}'")]
    DuplicateField { name: String, span: Span },
}

impl FormError {
    /// Source span of the error, if known
    pub fn span(&self) -> Option<&Span> {
        match self {
            FormError::Syntax { span, .. } => span.as_ref(),
            FormError::DuplicateField { span, .. } => Some(span),
            FormError::Io(_) => None,
        }
    }

    /// Format the error with source context using ariadne
    ///
    /// Errors without a span fall back to their plain message.
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span().cloned() else {
            return self.to_string();
        };
        let label = match self {
            FormError::DuplicateField { name, .. } => {
                format!("'{}' is already defined above", name)
            }
            _ => self.to_string(),
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(self.to_string())
            .with_label(
                Label::new((filename, span))
                    .with_message(label)
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl From<toml::de::Error> for FormError {
    fn from(err: toml::de::Error) -> Self {
        FormError::Syntax {
            span: err.span(),
            message: err.message().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = FormError::DuplicateField {
            name: "street".to_string(),
            span: 3..9,
        };
        assert_eq!(err.to_string(), "duplicate field name 'street'");
        assert_eq!(err.span(), Some(&(3..9)));
    }

    #[test]
    fn test_format_includes_source_context() {
        let source = "name = \"street\"\nname = \"street\"\n";
        let err = FormError::DuplicateField {
            name: "street".to_string(),
            span: 23..31,
        };
        let report = err.format(source, "form.toml");
        assert!(report.contains("form.toml"));
        assert!(report.contains("already defined"));
    }

    #[test]
    fn test_format_without_span_is_plain() {
        let err = FormError::Syntax {
            span: None,
            message: "bad".to_string(),
        };
        assert_eq!(err.format("", "form.toml"), "Form syntax error: bad");
    }
}
