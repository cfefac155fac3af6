use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// One or more addresses had no record in the database, or were not
    /// valid addresses at all.
    #[error("could not lookup ip {}", .ips.join(", "))]
    Resolution { ips: Vec<String> },

    #[error("failed to open geo database {path}: {reason}")]
    Initialization { path: String, reason: String },

    #[error("database lookup failed for {ip}: {reason}")]
    Database { ip: String, reason: String },
}

impl GeoError {
    pub fn unresolved(ip: impl Into<String>) -> Self {
        GeoError::Resolution {
            ips: vec![ip.into()],
        }
    }

    pub fn is_resolution(&self) -> bool {
        matches!(self, GeoError::Resolution { .. })
    }

    pub fn is_initialization(&self) -> bool {
        matches!(self, GeoError::Initialization { .. })
    }

    /// Addresses that could not be resolved. Empty for other kinds.
    pub fn failed_ips(&self) -> &[String] {
        match self {
            GeoError::Resolution { ips } => ips,
            _ => &[],
        }
    }
}
