/// Shown instead of an address if none could be resolved.
pub const ADDRESS_NOT_FOUND: &str = "Address not found";

/// The outcome of a reverse geocoding lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved(String),
    /// The service answered but knows no address
    /// or all attempts timed out.
    NotFound,
    /// The service could not be reached.
    Unavailable,
}

impl Resolution {
    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Resolved(addr) => Some(addr),
            Self::NotFound | Self::Unavailable => None,
        }
    }

    pub fn address_or_not_found(&self) -> &str {
        self.address().unwrap_or(ADDRESS_NOT_FOUND)
    }
}
