use figment::{
    Figment,
    providers::{Env, Format, Json, Serialized, Toml},
};
use std::{env, path::Path};
use watermark_application::error::{AppError, AppResult};
use watermark_application::infrastructure_config::Config;

pub const ENV_PREFIX: &str = "WATERMARK_";
pub const PORT_ENV: &str = "PORT";
pub const DEBUG_ENV: &str = "DEBUG";

/// Defaults, then `config.toml`, `config.json`, `WATERMARK_*` variables and
/// finally the bare `PORT` and `DEBUG` variables.
pub fn load_config() -> AppResult<Config> {
    let config: Config = build_figment()
        .extract()
        .map_err(|e| AppError::ConfigError {
            message: format!("Failed to load configuration: {e}"),
        })?;

    config.validate()?;
    Ok(config)
}

fn build_figment() -> Figment {
    let mut figment = Figment::from(Serialized::defaults(Config::default()));

    if Path::new("config.toml").exists() {
        figment = figment.merge(Toml::file("config.toml"));
    }

    if Path::new("config.json").exists() {
        figment = figment.merge(Json::file("config.json"));
    }

    figment = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(
            Env::raw()
                .only(&[PORT_ENV])
                .map(|_| "server.port".into()),
        );

    if let Ok(value) = env::var(DEBUG_ENV) {
        figment = figment.merge(Serialized::default("server.debug", parse_debug_flag(&value)));
    }

    figment
}

/// Only a case-insensitive `true` enables debug mode.
pub fn parse_debug_flag(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use watermark_application::infrastructure_config::LogFormat;

    fn load(jail: &mut Jail) -> Result<Config, figment::Error> {
        jail.clear_env();
        load_config().map_err(|e| e.to_string().into())
    }

    #[test]
    fn defaults_apply_without_any_source() {
        Jail::expect_with(|jail| {
            let config = load(jail)?;
            assert_eq!(config.server.port, 5001);
            assert!(config.server.debug);
            assert_eq!(config.log_level(), "debug");
            Ok(())
        });
    }

    #[test]
    fn bare_port_overrides_everything_else() {
        Jail::expect_with(|jail| {
            jail.create_file("config.toml", "[server]\nport = 7000\n")?;
            jail.clear_env();
            jail.set_env("WATERMARK_SERVER__PORT", "7100");
            jail.set_env("PORT", "8080");

            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.server.port, 8080);
            Ok(())
        });
    }

    #[test]
    fn debug_flag_is_case_insensitive() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("DEBUG", "TRUE");
            assert!(load_config().map_err(|e| e.to_string())?.server.debug);

            jail.set_env("DEBUG", "yes");
            let config = load_config().map_err(|e| e.to_string())?;
            assert!(!config.server.debug);
            assert_eq!(config.log_level(), "info");
            Ok(())
        });
    }

    #[test]
    fn environment_name_comes_from_prefixed_variable() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            assert_eq!(load(jail)?.environment.env, "development");

            jail.set_env("WATERMARK_ENVIRONMENT__ENV", "production");
            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.environment.env, "production");
            Ok(())
        });
    }

    #[test]
    fn prefixed_variables_nest_with_double_underscore() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("WATERMARK_FONTS__ENABLED", "false");
            jail.set_env("WATERMARK_SERVER__REQUEST_TIMEOUT_SECS", "5");

            let config = load_config().map_err(|e| e.to_string())?;
            assert!(!config.fonts.enabled);
            assert_eq!(config.server.request_timeout_secs, 5);
            Ok(())
        });
    }

    #[test]
    fn config_files_are_merged_in_order() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.create_file(
                "config.toml",
                "[logging]\nlevel = \"warn\"\nformat = \"json\"\n",
            )?;
            jail.create_file("config.json", r#"{"logging": {"level": "trace"}}"#)?;

            let config = load_config().map_err(|e| e.to_string())?;
            assert_eq!(config.log_level(), "trace");
            assert!(matches!(config.logging.format, LogFormat::Json));
            Ok(())
        });
    }

    #[test]
    fn invalid_values_are_config_errors() {
        Jail::expect_with(|jail| {
            jail.clear_env();
            jail.set_env("PORT", "not-a-port");
            assert!(matches!(load_config(), Err(AppError::ConfigError { .. })));

            jail.set_env("PORT", "5001");
            jail.set_env("WATERMARK_SERVER__REQUEST_TIMEOUT_SECS", "0");
            assert!(matches!(load_config(), Err(AppError::ConfigError { .. })));
            Ok(())
        });
    }

    #[test]
    fn parses_debug_values() {
        assert!(parse_debug_flag("true"));
        assert!(parse_debug_flag(" True "));
        assert!(!parse_debug_flag("1"));
        assert!(!parse_debug_flag(""));
    }
}
