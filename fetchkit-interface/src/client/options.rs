//! Settings used to construct a transport.

/// How the transport validates server certificates and host names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TlsVerification {
    /// Certificates and host names are verified against the trust store.
    #[default]
    Verify,
    /// Certificate and host name verification is skipped entirely.
    Insecure,
}

/// Settings consumed by a backend when creating a transport.
///
/// These are fixed for the lifetime of the transport. Anything that may differ from one call to
/// the next travels in [`crate::CallOptions`] instead.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransportSettings {
    /// Certificate validation mode.
    pub tls: TlsVerification,
    /// Whether to use the system's default proxy settings.
    pub use_default_proxy: bool,
}

impl TransportSettings {
    /// The settings of a transport that skips certificate and host name verification.
    ///
    /// Every other knob is reset to its default value.
    pub fn insecure() -> Self {
        Self {
            tls: TlsVerification::Insecure,
            ..Self::default()
        }
    }

    /// Returns `true` if the transport verifies server certificates.
    pub fn verifies_certificates(&self) -> bool {
        self.tls == TlsVerification::Verify
    }
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            tls: TlsVerification::default(),
            use_default_proxy: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_verify() {
        let settings = TransportSettings::default();
        assert!(settings.verifies_certificates());
        assert!(settings.use_default_proxy);
    }

    #[test]
    fn test_insecure_resets_other_knobs() {
        let settings = TransportSettings::insecure();
        assert_eq!(settings.tls, TlsVerification::Insecure);
        assert!(!settings.verifies_certificates());
        assert!(settings.use_default_proxy);
    }
}
