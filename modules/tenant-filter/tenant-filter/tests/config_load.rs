#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Config loading touches process environment, so every test runs inside a
//! `figment::Jail`, which also serializes them.

use std::io::Write;

use figment::Jail;
use tenant_filter::TenantFilterConfig;

#[test]
fn load_reads_the_module_section_from_yaml() {
    Jail::expect_with(|_jail| {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "modules:\n  tenant_filter:\n    config:\n      broad_scope_warning: false\n      log_decisions: true"
        )
        .unwrap();

        let cfg = TenantFilterConfig::load(file.path()).unwrap();
        assert!(!cfg.broad_scope_warning);
        assert!(cfg.log_decisions);
        Ok(())
    });
}

#[test]
fn missing_file_yields_defaults() {
    Jail::expect_with(|_jail| {
        let dir = tempfile::tempdir().unwrap();
        let cfg = TenantFilterConfig::load(dir.path().join("absent.yaml")).unwrap();
        assert_eq!(cfg, TenantFilterConfig::default());
        Ok(())
    });
}

#[test]
fn environment_overrides_the_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "app.yaml",
            "modules:\n  tenant_filter:\n    config:\n      log_decisions: false\n",
        )?;
        jail.set_env("WW_MODULES__TENANT_FILTER__CONFIG__LOG_DECISIONS", "true");

        let cfg = TenantFilterConfig::load("app.yaml").map_err(|e| e.to_string())?;
        assert!(cfg.log_decisions);
        assert!(cfg.broad_scope_warning);
        Ok(())
    });
}

#[test]
fn malformed_section_is_an_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "app.yaml",
            "modules:\n  tenant_filter:\n    config:\n      log_decisions: sometimes\n",
        )?;
        assert!(TenantFilterConfig::load("app.yaml").is_err());
        Ok(())
    });
}
