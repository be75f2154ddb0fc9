use std::path::Path;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Resolver configuration.
///
/// Loaded in layers: built-in defaults, then an optional TOML file, then
/// `SVC_PROVIDER_*` environment variables.
///
/// ```toml
/// fail_with_exception = true
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverOptions {
    /// Escalate `NotFound` and `Ambiguous` to a panic instead of returning them.
    ///
    /// Default: false
    pub fail_with_exception: bool,
}

impl ResolverOptions {
    pub const ENV_PREFIX: &'static str = "SVC_PROVIDER_";

    pub fn new() -> Self { Self::default() }

    pub fn fail_with_exception(mut self, fail_with_exception: bool) -> Self {
        self.fail_with_exception = fail_with_exception;
        self
    }

    pub fn figment(path: Option<&Path>) -> Figment {
        let mut fig = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            fig = fig.merge(Toml::file(path));
        }
        fig.merge(Env::prefixed(Self::ENV_PREFIX))
    }

    pub fn from_figment(fig: &Figment) -> Result<Self, ConfigError> { Ok(fig.extract()?) }

    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::io::Write;

    #[test]
    fn test_default_is_recoverable() {
        assert!(!ResolverOptions::default().fail_with_exception);
        assert!(ResolverOptions::new().fail_with_exception(true).fail_with_exception);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::Builder::new()
            .prefix("svc-provider-options-")
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "fail_with_exception = true").unwrap();

        let options = ResolverOptions::load(Some(file.path())).unwrap();

        assert!(options.fail_with_exception);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            let options = ResolverOptions::load(Some(Path::new("absent.toml")))
                .map_err(|e| e.to_string())?;

            assert_eq!(options, ResolverOptions::default());
            Ok(())
        });
    }

    #[test]
    fn test_env_enables_escalation() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("SVC_PROVIDER_FAIL_WITH_EXCEPTION", "true");
            let options = ResolverOptions::load(None).map_err(|e| e.to_string())?;

            assert!(options.fail_with_exception);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file("svc-provider.toml", "fail_with_exception = false")?;
            jail.set_env("SVC_PROVIDER_FAIL_WITH_EXCEPTION", "true");
            let options = ResolverOptions::load(Some(Path::new("svc-provider.toml")))
                .map_err(|e| e.to_string())?;

            assert!(options.fail_with_exception);
            Ok(())
        });
    }

    #[test]
    fn test_empty_table_uses_defaults() {
        let fig = Figment::new().merge(Toml::string(""));
        assert_eq!(
            ResolverOptions::from_figment(&fig).unwrap(),
            ResolverOptions::default()
        );
    }

    #[test]
    fn test_invalid_value_is_reported() {
        let fig = Figment::new().merge(Toml::string("fail_with_exception = \"sometimes\""));
        let err = ResolverOptions::from_figment(&fig).unwrap_err();

        assert!(matches!(err, ConfigError::Figment(_)));
    }
}
