use figment::Jail;
use geno_config::GenoConfig;
use pretty_assertions::assert_eq;

#[test]
fn env_var_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        std::fs::create_dir_all(jail.directory().join(".genofhir")).map_err(|e| e.to_string())?;
        jail.create_file(".genofhir/config.toml", "[convert]\npretty = false\n")?;
        jail.set_env("GENOFHIR_CONVERT__PRETTY", "true");
        jail.set_env("GENOFHIR_CONVERT__OUTPUT_DIR", "out");

        let config = GenoConfig::load().map_err(|e| e.to_string())?;
        assert!(config.convert.pretty);
        assert_eq!(config.convert.output_dir, Some("out".into()));
        Ok(())
    });
}

#[test]
fn log_filter_variable_is_not_a_config_key() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("GENOFHIR_LOG", "geno_graph=debug");
        jail.set_env("GENOFHIR_LOG__LEVEL", "info");

        let config = GenoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.log.level, "info");
        Ok(())
    });
}

#[test]
fn typo_env_var_silently_ignored() {
    Jail::expect_with(|jail| {
        jail.set_env("XDG_CONFIG_HOME", jail.directory().join("xdg").display());
        jail.set_env("GENOFHIR_CONVERT__PRETTTY", "true");

        let config = GenoConfig::load().map_err(|e| e.to_string())?;
        assert!(!config.convert.pretty);
        Ok(())
    });
}
