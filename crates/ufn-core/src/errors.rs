use ufn_core_types::RunId;

/// Result type alias using UfnError
pub type Result<T> = std::result::Result<T, UfnError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// This taxonomy provides a stable, structured classification of all errors
/// in the sync pipeline. Each kind maps to a stable error code that can be
/// used for programmatic error handling, testing, and alerting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UfnErrorKind {
    /// Source provider unreachable, returned malformed data, or returned an
    /// empty result (never treated as a valid zero-member snapshot)
    Fetch,
    /// Cached snapshot could not be read from the store
    StoreRead,
    /// Notification send failed; the cycle aborts before persistence so the
    /// next run resends the identical delta
    Delivery,
    /// Store batch update partially applied (only possible on stores without
    /// transactional batches)
    PartialWrite,
    /// Store mutation failed and was rolled back
    Persistence,
    /// Broken internal invariant, e.g. a removed id with no cached entry
    Internal,
}

impl UfnErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            UfnErrorKind::Fetch => "ERR_FETCH",
            UfnErrorKind::StoreRead => "ERR_STORE_READ",
            UfnErrorKind::Delivery => "ERR_DELIVERY",
            UfnErrorKind::PartialWrite => "ERR_PARTIAL_WRITE",
            UfnErrorKind::Persistence => "ERR_PERSISTENCE",
            UfnErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Provides a structured representation of errors with classification fields
/// for programmatic handling and rich context for debugging.
#[derive(Debug, Clone)]
pub struct UfnError {
    kind: UfnErrorKind,
    op: Option<String>,
    member_id: Option<u64>,
    run_id: Option<RunId>,
    message: String,
    source: Option<Box<UfnError>>,
}

impl UfnError {
    /// Create a new error with the specified kind
    pub fn new(kind: UfnErrorKind) -> Self {
        Self {
            kind,
            op: None,
            member_id: None,
            run_id: None,
            message: String::new(),
            source: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add member ID context
    pub fn with_member_id(mut self, id: u64) -> Self {
        self.member_id = Some(id);
        self
    }

    /// Add run ID context
    pub fn with_run_id(mut self, run_id: RunId) -> Self {
        self.run_id = Some(run_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Add source error
    pub fn with_source(mut self, source: UfnError) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> UfnErrorKind {
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

    /// Get the member ID context, if any
    pub fn member_id(&self) -> Option<u64> {
        self.member_id
    }

    /// Get the run ID context, if any
    pub fn run_id(&self) -> Option<&RunId> {
        self.run_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the source error, if any
    pub fn source_error(&self) -> Option<&UfnError> {
        self.source.as_deref()
    }
}

impl std::fmt::Display for UfnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(member_id) = self.member_id {
            write!(f, " (member_id: {})", member_id)?;
        }
        if let Some(run_id) = &self.run_id {
            write!(f, " (run_id: {})", run_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for UfnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        None
    }
}

// ========== End Error Facility ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(UfnErrorKind::Fetch.code(), "ERR_FETCH");
        assert_eq!(UfnErrorKind::StoreRead.code(), "ERR_STORE_READ");
        assert_eq!(UfnErrorKind::Delivery.code(), "ERR_DELIVERY");
        assert_eq!(UfnErrorKind::PartialWrite.code(), "ERR_PARTIAL_WRITE");
    }

    #[test]
    fn test_builder_context() {
        let err = UfnError::new(UfnErrorKind::Fetch)
            .with_op("fetch_current")
            .with_member_id(42)
            .with_message("provider unreachable");

        assert_eq!(err.kind(), UfnErrorKind::Fetch);
        assert_eq!(err.op(), Some("fetch_current"));
        assert_eq!(err.member_id(), Some(42));
        assert_eq!(err.message(), "provider unreachable");
    }

    #[test]
    fn test_display_includes_code_and_op() {
        let err = UfnError::new(UfnErrorKind::Delivery)
            .with_op("send_notification")
            .with_message("channel closed");
        let s = format!("{}", err);
        assert!(s.contains("ERR_DELIVERY"));
        assert!(s.contains("send_notification"));
        assert!(s.contains("channel closed"));
    }

    #[test]
    fn test_source_chain() {
        let inner = UfnError::new(UfnErrorKind::Persistence).with_message("disk full");
        let outer = UfnError::new(UfnErrorKind::StoreRead).with_source(inner);
        assert_eq!(
            outer.source_error().map(|e| e.kind()),
            Some(UfnErrorKind::Persistence)
        );
    }
}
