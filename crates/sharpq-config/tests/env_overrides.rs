use figment::Jail;
use sharpq_config::SharpqConfig;

#[test]
fn project_dotenv_fills_config_values() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join("app")).expect("mkdir");
        jail.create_file("app/.env", "SHARPQ_FOREST__EXCLUDE_GLOB=Generated/**\n")?;

        let config = SharpqConfig::load_for(&jail.directory().join("app")).expect("config loads");

        assert_eq!(config.forest.exclude_glob.as_deref(), Some("Generated/**"));
        Ok(())
    });
}

#[test]
fn process_env_beats_project_dotenv() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join("app")).expect("mkdir");
        jail.create_file("app/.env", "SHARPQ_OUTPUT__FORMAT=table\n")?;
        jail.set_env("SHARPQ_OUTPUT__FORMAT", "raw");

        let config = SharpqConfig::load_for(&jail.directory().join("app")).expect("config loads");

        assert_eq!(config.output.format, "raw");
        Ok(())
    });
}

#[test]
fn skip_dirs_override_from_env() {
    Jail::expect_with(|jail| {
        jail.set_env("SHARPQ_FOREST__SKIP_DIRS", "[\"bin\", \"obj\", \"node_modules\"]");

        let config = SharpqConfig::load().expect("config loads");

        assert_eq!(config.forest.skip_dirs, vec!["bin", "obj", "node_modules"]);
        Ok(())
    });
}
