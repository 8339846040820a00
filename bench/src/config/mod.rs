pub mod defaults;

use crate::error::BenchError;
use defaults::*;
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::path::Path;
use std::time::Duration;
use tracing::info;
use transport_bench_report::params::{BenchmarkParams, FailurePolicy, SizeMeasurement};

/// Every tunable of a benchmark run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub rest_url: String,
    pub grpc_address: String,
    pub sizes: Vec<u32>,
    pub trials: u32,
    pub size_measurement: SizeMeasurement,
    pub failure_policy: FailurePolicy,
    /// Per-call deadline in humantime format, e.g. `5s` or `250ms`.
    pub request_timeout: Option<String>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            rest_url: DEFAULT_REST_URL.to_owned(),
            grpc_address: DEFAULT_GRPC_ADDRESS.to_owned(),
            sizes: DEFAULT_PAYLOAD_SIZES.to_vec(),
            trials: DEFAULT_TRIALS,
            size_measurement: SizeMeasurement::default(),
            failure_policy: FailurePolicy::default(),
            request_timeout: None,
        }
    }
}

impl BenchConfig {
    /// Resolves the configuration from, in increasing priority: built-in
    /// defaults, the optional TOML file, `TRANSPORT_BENCH_*` environment
    /// variables and finally `overrides` (the command line).
    pub fn load<T: Serialize>(path: Option<&Path>, overrides: &T) -> Result<Self, BenchError> {
        let mut figment = Figment::from(Serialized::defaults(BenchConfig::default()));
        if let Some(path) = path {
            if !path.is_file() {
                return Err(BenchError::CannotLoadConfiguration(format!(
                    "Cannot find configuration file at path: '{}'.",
                    path.display()
                )));
            }
            info!("Loading config from path: '{}'...", path.display());
            figment = figment.merge(Toml::file(path));
        }

        let config: BenchConfig = figment
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides))
            .extract()
            .map_err(|error| {
                BenchError::CannotLoadConfiguration(format!(
                    "Failed to load configuration: {error}"
                ))
            })?;
        config.validate()?;
        info!("Using config: {}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), BenchError> {
        if self.sizes.is_empty() {
            return Err(BenchError::InvalidConfiguration(
                "At least one payload size is required.".to_owned(),
            ));
        }
        if self.trials == 0 {
            return Err(BenchError::InvalidConfiguration(
                "Trial count must be greater than 0.".to_owned(),
            ));
        }
        if self.rest_url.is_empty() || self.grpc_address.is_empty() {
            return Err(BenchError::InvalidConfiguration(
                "REST URL and gRPC address cannot be empty.".to_owned(),
            ));
        }
        self.request_timeout()?;
        Ok(())
    }

    pub fn request_timeout(&self) -> Result<Option<Duration>, BenchError> {
        match &self.request_timeout {
            None => Ok(None),
            Some(value) => {
                let timeout = humantime::parse_duration(value).map_err(|error| {
                    BenchError::InvalidConfiguration(format!(
                        "Invalid request timeout: '{value}', {error}"
                    ))
                })?;
                if timeout.is_zero() {
                    return Err(BenchError::InvalidConfiguration(
                        "Request timeout must be greater than 0.".to_owned(),
                    ));
                }
                Ok(Some(timeout))
            }
        }
    }

    pub fn params(&self) -> BenchmarkParams {
        BenchmarkParams {
            rest_url: self.rest_url.clone(),
            grpc_address: self.grpc_address.clone(),
            sizes: self.sizes.clone(),
            trials: self.trials,
            size_measurement: self.size_measurement,
            failure_policy: self.failure_policy,
            request_timeout: self.request_timeout.clone(),
        }
    }
}

impl Display for BenchConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{{ rest_url: {}, grpc_address: {}, sizes: {:?}, trials: {}, size_measurement: {}, failure_policy: {}, request_timeout: {} }}",
            self.rest_url,
            self.grpc_address,
            self.sizes,
            self.trials,
            self.size_measurement,
            self.failure_policy,
            self.request_timeout.as_deref().unwrap_or("none"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[derive(Serialize, Default)]
    struct Overrides {
        #[serde(skip_serializing_if = "Option::is_none")]
        trials: Option<u32>,
        #[serde(skip_serializing_if = "Option::is_none")]
        sizes: Option<Vec<u32>>,
    }

    fn into_figment_error(error: BenchError) -> figment::Error {
        figment::Error::from(error.to_string())
    }

    #[test]
    fn should_use_defaults_without_file_env_or_overrides() {
        Jail::expect_with(|_| {
            let config = BenchConfig::load(None, &Overrides::default())
                .map_err(into_figment_error)?;
            assert_eq!(config, BenchConfig::default());
            assert_eq!(config.sizes, vec![1, 5, 10, 25, 50, 100, 500, 1000]);
            assert_eq!(config.trials, 50);
            assert_eq!(config.request_timeout().unwrap(), None);
            Ok(())
        });
    }

    #[test]
    fn should_layer_file_env_and_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "bench.toml",
                r#"
                rest_url = "http://10.0.0.1:8000/user/bulk"
                grpc_address = "10.0.0.1:50052"
                sizes = [10, 20]
                trials = 3
                size_measurement = "inline"
                request_timeout = "5s"
                "#,
            )?;
            jail.set_env("TRANSPORT_BENCH_TRIALS", "7");
            jail.set_env("TRANSPORT_BENCH_FAILURE_POLICY", "skip-trial");

            let overrides = Overrides {
                sizes: Some(vec![100]),
                ..Default::default()
            };
            let config = BenchConfig::load(Some(Path::new("bench.toml")), &overrides)
                .map_err(into_figment_error)?;

            assert_eq!(config.rest_url, "http://10.0.0.1:8000/user/bulk");
            assert_eq!(config.grpc_address, "10.0.0.1:50052");
            assert_eq!(config.sizes, vec![100]);
            assert_eq!(config.trials, 7);
            assert_eq!(config.size_measurement, SizeMeasurement::Inline);
            assert_eq!(config.failure_policy, FailurePolicy::SkipTrial);
            assert_eq!(
                config.request_timeout().unwrap(),
                Some(Duration::from_secs(5))
            );
            Ok(())
        });
    }

    #[test]
    fn shipped_config_file_should_match_defaults() {
        Jail::expect_with(|_| {
            let path = Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/configs/bench.toml"));
            let config =
                BenchConfig::load(Some(path), &Overrides::default()).map_err(into_figment_error)?;
            assert_eq!(config, BenchConfig::default());
            Ok(())
        });
    }

    #[test]
    fn should_fail_for_missing_config_file() {
        let result = BenchConfig::load(
            Some(Path::new("definitely/missing/bench.toml")),
            &Overrides::default(),
        );
        assert!(matches!(
            result,
            Err(BenchError::CannotLoadConfiguration(_))
        ));
    }

    #[test]
    fn should_reject_zero_trials_and_empty_sizes() {
        Jail::expect_with(|_| {
            let result = BenchConfig::load(
                None,
                &Overrides {
                    trials: Some(0),
                    ..Default::default()
                },
            );
            assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));

            let result = BenchConfig::load(
                None,
                &Overrides {
                    sizes: Some(Vec::new()),
                    ..Default::default()
                },
            );
            assert!(matches!(result, Err(BenchError::InvalidConfiguration(_))));
            Ok(())
        });
    }

    #[test]
    fn should_reject_unparsable_or_zero_timeout() {
        let config = BenchConfig {
            request_timeout: Some("soon".to_owned()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            request_timeout: Some("0s".to_owned()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            request_timeout: Some("250ms".to_owned()),
            ..Default::default()
        };
        assert_eq!(
            config.request_timeout().unwrap(),
            Some(Duration::from_millis(250))
        );
    }
}
