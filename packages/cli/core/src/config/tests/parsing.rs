/* packages/cli/core/src/config/tests/parsing.rs */

use std::path::Path;

use crate::config::SiteConfig;

#[test]
fn parse_minimal_config() {
  let toml_str = r#"
[project]
name = "mirutec"
"#;
  let config: SiteConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.project.name, "mirutec");
  assert_eq!(config.server.host, "0.0.0.0");
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.build.out_dir, "dist");
  assert_eq!(config.assets.public_dir, "public");
  assert!(config.i18n.messages_dir.is_none());
  assert_eq!(config.log.level, "info");
  assert!(!config.log.json);
}

#[test]
fn parse_full_config() {
  let toml_str = r#"
[project]
name = "landing"

[server]
host = "127.0.0.1"
port = 8080

[build]
out_dir = "out"

[assets]
public_dir = "static"

[i18n]
messages_dir = "messages"

[log]
level = "mirutec_site=debug,info"
json = true
"#;
  let config: SiteConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.server.addr(), "127.0.0.1:8080");
  assert_eq!(config.build.out_dir, "out");
  assert_eq!(config.assets.public_dir, "static");
  assert_eq!(config.i18n.messages_dir.as_deref(), Some("messages"));
  assert_eq!(config.log.level, "mirutec_site=debug,info");
  assert!(config.log.json);
}

#[test]
fn partial_section_keeps_other_defaults() {
  let toml_str = r#"
[project]
name = "mirutec"

[server]
port = 4000
"#;
  let config: SiteConfig = toml::from_str(toml_str).unwrap();
  assert_eq!(config.server.port, 4000);
  assert_eq!(config.server.host, "0.0.0.0");
}

#[test]
fn project_section_is_required() {
  let toml_str = r#"
[server]
port = 4000
"#;
  assert!(toml::from_str::<SiteConfig>(toml_str).is_err());
}

#[test]
fn paths_resolve_against_base_dir() {
  let toml_str = r#"
[project]
name = "mirutec"

[i18n]
messages_dir = "i18n"
"#;
  let config: SiteConfig = toml::from_str(toml_str).unwrap();
  let base = Path::new("/srv/site");
  assert_eq!(config.out_dir(base), Path::new("/srv/site/dist"));
  assert_eq!(config.public_dir(base), Path::new("/srv/site/public"));
  assert_eq!(config.messages_dir(base).unwrap(), Path::new("/srv/site/i18n"));
}

#[test]
fn fallback_matches_minimal_defaults() {
  let config = SiteConfig::fallback();
  assert_eq!(config.server.port, 3000);
  assert_eq!(config.build.out_dir, "dist");
  assert!(config.validate().is_ok());
}
