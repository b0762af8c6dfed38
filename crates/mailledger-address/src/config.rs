//! Parser configuration.

/// Toggles controlling which borderline inputs the parser accepts.
///
/// The default rejects every quoted local part and only warns about
/// length limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct EmailAddressParserConfig {
    /// Reject local parts longer than 64 characters instead of warning.
    pub local_part_length_check_enabled: bool,
    /// Reject addresses longer than 254 characters instead of warning.
    pub email_address_length_check_enabled: bool,
    /// Permit a quoted-string local part at all.
    pub quoted_local_part_allowed: bool,
    /// Permit a local part whose content can only be written as a quoted string.
    pub local_part_requiring_quoted_string_allowed: bool,
    /// Permit `""` as the local part.
    pub empty_local_part_allowed: bool,
}

impl EmailAddressParserConfig {
    /// Accepts anything RFC 5322 allows except empty local parts.
    ///
    /// Suitable for addresses coming from messages or imported settings.
    pub const RELAXED: Self = Self {
        local_part_length_check_enabled: false,
        email_address_length_check_enabled: false,
        quoted_local_part_allowed: true,
        local_part_requiring_quoted_string_allowed: true,
        empty_local_part_allowed: false,
    };

    /// Only accepts plain dot-string addresses within the length limits.
    ///
    /// Suitable for addresses typed in by a user, e.g. during account setup.
    pub const LIMITED: Self = Self {
        local_part_length_check_enabled: true,
        email_address_length_check_enabled: true,
        quoted_local_part_allowed: false,
        local_part_requiring_quoted_string_allowed: false,
        empty_local_part_allowed: false,
    };

    /// Creates a configuration builder starting from the default.
    #[must_use]
    pub const fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }
}

/// Builder for [`EmailAddressParserConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    config: EmailAddressParserConfig,
}

impl ConfigBuilder {
    /// Creates a builder with every toggle off.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: EmailAddressParserConfig {
                local_part_length_check_enabled: false,
                email_address_length_check_enabled: false,
                quoted_local_part_allowed: false,
                local_part_requiring_quoted_string_allowed: false,
                empty_local_part_allowed: false,
            },
        }
    }

    /// Sets whether overlong local parts are rejected.
    #[must_use]
    pub const fn local_part_length_check(mut self, enabled: bool) -> Self {
        self.config.local_part_length_check_enabled = enabled;
        self
    }

    /// Sets whether overlong addresses are rejected.
    #[must_use]
    pub const fn email_address_length_check(mut self, enabled: bool) -> Self {
        self.config.email_address_length_check_enabled = enabled;
        self
    }

    /// Sets whether quoted local parts are permitted.
    #[must_use]
    pub const fn allow_quoted_local_part(mut self, allowed: bool) -> Self {
        self.config.quoted_local_part_allowed = allowed;
        self
    }

    /// Sets whether local parts that need quoting are permitted.
    ///
    /// Enabling this also permits quoted local parts.
    #[must_use]
    pub const fn allow_local_part_requiring_quoted_string(mut self, allowed: bool) -> Self {
        self.config.local_part_requiring_quoted_string_allowed = allowed;
        if allowed {
            self.config.quoted_local_part_allowed = true;
        }
        self
    }

    /// Sets whether an empty quoted local part is permitted.
    ///
    /// Enabling this also permits quoted local parts and local parts that
    /// need quoting, since `""` can only be written quoted.
    #[must_use]
    pub const fn allow_empty_local_part(mut self, allowed: bool) -> Self {
        self.config.empty_local_part_allowed = allowed;
        if allowed {
            self.config.quoted_local_part_allowed = true;
            self.config.local_part_requiring_quoted_string_allowed = true;
        }
        self
    }

    /// Builds the configuration.
    #[must_use]
    pub const fn build(self) -> EmailAddressParserConfig {
        self.config
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::redundant_clone, clippy::manual_string_new, clippy::needless_collect, clippy::unreadable_literal, clippy::used_underscore_items, clippy::similar_names)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let config = EmailAddressParserConfig::default();
        assert!(!config.quoted_local_part_allowed);
        assert!(!config.local_part_requiring_quoted_string_allowed);
        assert!(!config.empty_local_part_allowed);
        assert!(!config.local_part_length_check_enabled);
        assert!(!config.email_address_length_check_enabled);
    }

    #[test]
    fn test_builder_matches_default() {
        assert_eq!(
            EmailAddressParserConfig::builder().build(),
            EmailAddressParserConfig::default()
        );
    }

    #[test]
    fn test_builder_quoting_implies_quoted_allowed() {
        let config = EmailAddressParserConfig::builder()
            .allow_local_part_requiring_quoted_string(true)
            .build();
        assert!(config.quoted_local_part_allowed);
        assert!(config.local_part_requiring_quoted_string_allowed);
        assert!(!config.empty_local_part_allowed);

        let config = EmailAddressParserConfig::builder()
            .allow_empty_local_part(true)
            .build();
        assert!(config.quoted_local_part_allowed);
        assert!(config.local_part_requiring_quoted_string_allowed);
        assert!(config.empty_local_part_allowed);
    }

    #[test]
    fn test_builder_length_checks() {
        let config = EmailAddressParserConfig::builder()
            .local_part_length_check(true)
            .email_address_length_check(true)
            .build();
        assert!(config.local_part_length_check_enabled);
        assert!(config.email_address_length_check_enabled);
        assert!(!config.quoted_local_part_allowed);
    }

    #[test]
    fn test_presets() {
        let relaxed = EmailAddressParserConfig::RELAXED;
        assert!(relaxed.quoted_local_part_allowed);
        assert!(relaxed.local_part_requiring_quoted_string_allowed);
        assert!(!relaxed.local_part_length_check_enabled);

        let limited = EmailAddressParserConfig::LIMITED;
        assert!(!limited.quoted_local_part_allowed);
        assert!(limited.local_part_length_check_enabled);
        assert!(limited.email_address_length_check_enabled);
    }
}
