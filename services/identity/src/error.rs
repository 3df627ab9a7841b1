/// Failure signalled by a broker or the runtime behind it.
#[derive(Debug, thiserror::Error)]
pub enum BrokerError {
    /// The runtime refused the call. `kind` is the runtime's own error code.
    #[error("{message}")]
    Rejected { kind: String, message: String },
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl BrokerError {
    pub fn rejected(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            Self::Rejected { kind, .. } => kind,
            Self::Internal(_) => "INTERNAL",
        }
    }
}

/// Identity service error variants.
#[derive(Debug, thiserror::Error)]
pub enum IdentityServiceError {
    /// A required argument was missing; the broker was not called.
    #[error("missing required argument `{argument}`")]
    Validation { argument: &'static str },
    /// Broker failure, passed through untouched.
    #[error(transparent)]
    Broker(#[from] BrokerError),
}

impl IdentityServiceError {
    pub fn kind(&self) -> &str {
        match self {
            Self::Validation { .. } => "VALIDATION",
            Self::Broker(e) => e.kind(),
        }
    }
}
