//! Validation report types

use serde::Serialize;
use std::fmt;

/// Severity level for a validation finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Taxonomy of validation findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A value has the wrong shape, e.g. a non-finite number
    SchemaViolation,
    /// A numeric invariant is broken
    RangeViolation,
    /// Non-fatal inconsistency between flags
    ConsistencyWarning,
}

impl ViolationKind {
    pub fn severity(&self) -> Severity {
        match self {
            ViolationKind::SchemaViolation | ViolationKind::RangeViolation => Severity::Error,
            ViolationKind::ConsistencyWarning => Severity::Warning,
        }
    }
}

/// The rule a finding broke
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Rule {
    /// value > 0
    Positive,
    /// value >= 0
    NonNegative,
    /// value <= max
    AtMost { max: f32 },
    /// 0 < value <= 1
    UnitStep,
    /// every color channel in [0, 1]
    UnitColor,
    /// first field must not exceed the second (or must stay below it when strict)
    Ordering { strict: bool },
    /// number must be finite
    Finite,
    /// string must not be blank
    NonEmpty,
    /// path loops while the clip does not
    LoopingPathWithoutLoopingClip,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Positive => write!(f, "must be > 0"),
            Rule::NonNegative => write!(f, "must be >= 0"),
            Rule::AtMost { max } => write!(f, "must be <= {}", max),
            Rule::UnitStep => write!(f, "must be within (0, 1]"),
            Rule::UnitColor => write!(f, "channels must be within [0, 1]"),
            Rule::Ordering { strict: true } => write!(f, "must be strictly ordered"),
            Rule::Ordering { strict: false } => write!(f, "must be ordered"),
            Rule::Finite => write!(f, "must be finite"),
            Rule::NonEmpty => write!(f, "must not be empty"),
            Rule::LoopingPathWithoutLoopingClip => {
                write!(f, "moving along a looping path with a non-looping animation")
            }
        }
    }
}

/// A single validation finding
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationError {
    pub kind: ViolationKind,
    /// Offending field paths, e.g. `["camera.minRadius", "camera.maxRadius"]`
    pub fields: Vec<String>,
    pub rule: Rule,
    pub message: String,
}

impl ValidationError {
    pub fn new(
        kind: ViolationKind,
        fields: Vec<String>,
        rule: Rule,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            fields,
            rule,
            message: message.into(),
        }
    }

    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    pub fn names_field(&self, field: &str) -> bool {
        self.fields.iter().any(|f| f == field)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.fields.join(", "), self.message, self.rule)
    }
}

/// Every finding of one validation pass, in check order
#[derive(Debug, Default, Clone, Serialize)]
pub struct ValidationReport {
    pub violations: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: ValidationError) {
        self.violations.push(violation);
    }

    /// Valid means no error-severity findings; warnings are allowed.
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    pub fn error_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity() == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity() == Severity::Warning)
            .count()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &ValidationError> {
        self.violations
            .iter()
            .filter(|v| v.severity() == Severity::Warning)
    }

    /// Findings that mention the given field path
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.violations.iter().filter(move |v| v.names_field(field))
    }

    pub fn summary(&self) -> String {
        let total = self.violations.len();
        if total == 0 {
            return "No violations found.".to_string();
        }

        format!(
            "{} violation(s): {} error(s), {} warning(s)",
            total,
            self.error_count(),
            self.warning_count(),
        )
    }
}
