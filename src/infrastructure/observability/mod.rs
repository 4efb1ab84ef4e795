use crate::config::Environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

const DEVELOPMENT_FILTER: &str = "postboard=debug,tower_http=debug,sqlx=debug";
const PRODUCTION_FILTER: &str = "postboard=info,tower_http=info,sqlx=warn";

/// Install the global subscriber. `RUST_LOG` overrides the profile default.
pub fn init(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter(environment).into());

    if environment.is_development() {
        Registry::default()
            .with(env_filter)
            .with(fmt::layer().pretty().with_target(true))
            .init();
    } else {
        Registry::default()
            .with(env_filter)
            .with(
                fmt::layer()
                    .compact()
                    .with_ansi(false)
                    .with_thread_ids(true)
                    .with_target(true),
            )
            .init();
    }
}

fn default_filter(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => DEVELOPMENT_FILTER,
        Environment::Production => PRODUCTION_FILTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filters_parse() {
        for env in [Environment::Development, Environment::Production] {
            assert!(EnvFilter::try_new(default_filter(env)).is_ok());
        }
    }
}
