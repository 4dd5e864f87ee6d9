use std::path::Path;

use super::*;

mod mock_fs;

use mock_fs::MockFileSystem;

const HASKELL: &str = r#"
[languages.Haskell]
extensions = ["hs"]
line_comment = "--"
block_comment = ["{-", "-}"]
nested_block_comments = true
"#;

#[test]
fn load_returns_default_when_no_config() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());
    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_finds_local_config() {
    let fs = MockFileSystem::new().with_file("/project/.comment-spans.toml", HASKELL);
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load().unwrap();
    assert!(config.languages.contains_key("Haskell"));
}

#[test]
fn load_from_path_reads_given_file() {
    let fs = MockFileSystem::new().with_file("/etc/langs.toml", HASKELL);
    let loader = FileConfigLoader::with_fs(fs);

    let config = loader.load_from_path(Path::new("/etc/langs.toml")).unwrap();
    let haskell = &config.languages["Haskell"];
    assert_eq!(haskell.extensions, vec!["hs"]);
}

#[test]
fn load_from_missing_path_reports_file() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/missing.toml"))
        .unwrap_err();
    match err {
        CommentSpanError::FileRead { path, source } => {
            assert_eq!(path, Path::new("/missing.toml"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("Expected FileRead, got {other:?}"),
    }
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let fs = MockFileSystem::new().with_file("/project/.comment-spans.toml", "[languages.Zig");
    let loader = FileConfigLoader::with_fs(fs);

    let err = loader.load().unwrap_err();
    assert!(matches!(err, CommentSpanError::TomlParse(_)));
}

#[test]
fn parse_config_accepts_current_version() {
    let config = parse_config("version = \"1\"").unwrap();
    assert_eq!(config.version.as_deref(), Some("1"));
}

#[test]
fn parse_config_rejects_unknown_version() {
    let err = parse_config("version = \"9\"").unwrap_err();
    assert!(err.to_string().contains("Unsupported config version '9'"));
}

#[test]
fn parse_config_validates_languages_eagerly() {
    let content = r#"
[languages.Good]
line_comment = "//"

[languages.Bad]
block_comment = ["/*", ""]
"#;

    let err = parse_config(content).unwrap_err();
    assert!(err.to_string().contains("language 'Bad'"));
}

#[test]
fn real_filesystem_loader_reads_temp_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("langs.toml");
    std::fs::write(&path, HASKELL).unwrap();

    let config = FileConfigLoader::new().load_from_path(&path).unwrap();
    assert_eq!(config.languages.len(), 1);
}
