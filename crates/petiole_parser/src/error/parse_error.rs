//! Structured parse errors and the aggregate diagnostic report returned
//! alongside every parsed Program (spec §4.2, §6.3, §7).

use miette::Diagnostic;
use petiole_lexer::Span;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic, Clone, PartialEq)]
pub enum ParseError {
    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("expected an expression")]
    ExpectedExpression { span: Span },

    #[error("expected a statement")]
    ExpectedStatement { span: Span },

    #[error("expected a type annotation")]
    ExpectedType { span: Span },

    #[error("expected an indented block or `{{...}}`")]
    ExpectedBlock { span: Span },

    #[error("duplicate `otherwise` case in this block")]
    DuplicateOtherwise { span: Span },

    #[error("`when` case found after `otherwise`")]
    WhenAfterOtherwise { span: Span },

    #[error("positional argument follows a named argument")]
    PositionalAfterNamed { span: Span },

    #[error("parameter without a default follows one that has a default")]
    DefaultParamOrder { span: Span },

    #[error("variadic parameter `{name}` must be the last parameter")]
    VariadicNotLast { span: Span, name: String },

    #[error("variadic parameter `{name}` may not have a default value")]
    VariadicWithDefault { span: Span, name: String },

    #[error("a struct field may carry either `as \"name\"` or a tag, not both")]
    AliasAndTag { span: Span },

    #[error("`:=` requires an identifier on its left-hand side")]
    WalrusNonIdentifier { span: Span },

    #[error("a declaration may not appear here")]
    UnexpectedDeclaration { span: Span },

    #[error("{message}")]
    Syntax { message: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::UnexpectedToken { span, .. }
            | ParseError::ExpectedExpression { span }
            | ParseError::ExpectedStatement { span }
            | ParseError::ExpectedType { span }
            | ParseError::ExpectedBlock { span }
            | ParseError::DuplicateOtherwise { span }
            | ParseError::WhenAfterOtherwise { span }
            | ParseError::PositionalAfterNamed { span }
            | ParseError::DefaultParamOrder { span }
            | ParseError::VariadicNotLast { span, .. }
            | ParseError::VariadicWithDefault { span, .. }
            | ParseError::AliasAndTag { span }
            | ParseError::WalrusNonIdentifier { span }
            | ParseError::UnexpectedDeclaration { span }
            | ParseError::Syntax { span, .. } => span,
        }
    }

    /// `(file, line, column, message)` as specified by §6.3.
    pub fn as_record(&self) -> (String, usize, usize, String) {
        let span = self.span();
        (
            span.file.to_string(),
            span.start.line,
            span.start.column,
            self.to_string(),
        )
    }
}

/// Aggregate diagnostics for one parse, returned alongside the Program.
/// Callers treat a nonempty report as "do not proceed to semantic
/// analysis" (spec §4.3).
#[derive(Debug, Clone, Default)]
pub struct DiagnosticReport {
    pub errors: Vec<ParseError>,
}

impl DiagnosticReport {
    pub fn new() -> Self {
        DiagnosticReport { errors: Vec::new() }
    }

    pub fn push(&mut self, error: ParseError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn records(&self) -> Vec<(String, usize, usize, String)> {
        self.errors.iter().map(ParseError::as_record).collect()
    }
}
