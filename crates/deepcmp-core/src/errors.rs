use thiserror::Error;

/// Result type alias using CompareError
pub type Result<T> = std::result::Result<T, CompareError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every structural failure of a comparison maps to exactly one kind, and
/// each kind maps to a stable error code usable in tests and log assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// The two values at a path have different runtime types
    TypeMismatch,
    /// Arrays, slices or maps at a path have different lengths
    LengthMismatch,
    /// A struct member could not be resolved by name
    MissingField,
    /// A value could not be classified or its target could not be reached
    InvalidType,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::TypeMismatch => "ERR_TYPE_MISMATCH",
            ExErrorKind::LengthMismatch => "ERR_LENGTH_MISMATCH",
            ExErrorKind::MissingField => "ERR_MISSING_FIELD",
            ExErrorKind::InvalidType => "ERR_INVALID_TYPE",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification used for programmatic handling together with
/// the operation and field path for debugging.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    field: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            field: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add field path context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the field path context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: `{}`)", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Structural errors that abort a comparison
///
/// Any of these discards the diffs collected so far. Value differences are
/// never errors; they are returned as [`crate::compare::Diff`] data.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    /// The runtime types of the two values differ
    #[error("mismatched type of `{field}`, expected type={expected_type}, actual type={actual_type}")]
    TypeMismatch {
        field: String,
        expected_type: &'static str,
        actual_type: &'static str,
    },

    /// Two arrays, slices or maps have different lengths
    #[error("mismatched len of `{field}`, expected len={expected_len}, actual len={actual_len}")]
    LengthMismatch {
        field: String,
        expected_len: usize,
        actual_len: usize,
    },

    /// A struct member could not be resolved by name
    #[error("field `{field}` not found")]
    MissingField { field: String },

    /// A value could not be classified or reached
    #[error("invalid type found, field `{field}`, type={type_name}: {reason}")]
    InvalidType {
        field: String,
        type_name: &'static str,
        reason: String,
    },
}

impl CompareError {
    /// Field path at which the structural error was detected
    pub fn field(&self) -> &str {
        match self {
            CompareError::TypeMismatch { field, .. }
            | CompareError::LengthMismatch { field, .. }
            | CompareError::MissingField { field }
            | CompareError::InvalidType { field, .. } => field,
        }
    }

    /// Canonical kind of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            CompareError::TypeMismatch { .. } => ExErrorKind::TypeMismatch,
            CompareError::LengthMismatch { .. } => ExErrorKind::LengthMismatch,
            CompareError::MissingField { .. } => ExErrorKind::MissingField,
            CompareError::InvalidType { .. } => ExErrorKind::InvalidType,
        }
    }
}

/// Conversion from CompareError to the canonical ExError
impl From<CompareError> for ExError {
    fn from(err: CompareError) -> Self {
        let base = ExError::new(err.kind())
            .with_op("compare")
            .with_field(err.field());
        match err {
            CompareError::TypeMismatch {
                expected_type,
                actual_type,
                ..
            } => base.with_message(format!(
                "expected type {} but actual type is {}",
                expected_type, actual_type
            )),
            CompareError::LengthMismatch {
                expected_len,
                actual_len,
                ..
            } => base.with_message(format!(
                "expected len {} but actual len is {}",
                expected_len, actual_len
            )),
            CompareError::MissingField { .. } => base.with_message("field not found"),
            CompareError::InvalidType {
                type_name, reason, ..
            } => base.with_message(format!("{}: {}", type_name, reason)),
        }
    }
}
