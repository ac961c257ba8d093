use std::io::Write;

use super::*;
use crate::domain::entities::PostId;

#[test]
fn defaults_point_at_hosted_api() {
    let settings = Settings::from_raw(RawSettings::default()).expect("valid settings");

    assert_eq!(settings.api.base_url.as_str(), "https://json-post-2.onrender.com/");
    assert_eq!(settings.logging.level, LevelFilter::WARN);
    assert!(matches!(settings.logging.format, LogFormat::Compact));
    assert_eq!(settings.site.title, DEFAULT_SITE_TITLE);
}

#[test]
fn cli_overrides_take_highest_precedence() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("http://file.example".to_string());
    raw.logging.level = Some("info".to_string());

    let overrides = GlobalOverrides {
        api_url: Some("http://cli.example:3500".to_string()),
        log_level: Some("debug".to_string()),
        log_json: Some(true),
    };

    raw.apply_overrides(&overrides);
    let settings = Settings::from_raw(raw).expect("valid settings");

    assert_eq!(settings.api.base_url.as_str(), "http://cli.example:3500/");
    assert_eq!(settings.logging.level, LevelFilter::DEBUG);
    assert!(matches!(settings.logging.format, LogFormat::Json));
}

#[test]
fn rejects_unparseable_api_url() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("not a url".to_string());

    let err = Settings::from_raw(raw).expect_err("invalid url");
    assert!(matches!(
        err,
        LoadError::Invalid {
            key: "api.base_url",
            ..
        }
    ));
}

#[test]
fn rejects_non_http_scheme() {
    let mut raw = RawSettings::default();
    raw.api.base_url = Some("ftp://example.com".to_string());

    let err = Settings::from_raw(raw).expect_err("ftp is not supported");
    assert!(err.to_string().contains("unsupported scheme"));
}

#[test]
fn rejects_blank_site_title() {
    let mut raw = RawSettings::default();
    raw.site.title = Some("   ".to_string());

    let err = Settings::from_raw(raw).expect_err("blank title");
    assert!(matches!(err, LoadError::Invalid { key: "site.title", .. }));
}

#[test]
fn rejects_unknown_log_level() {
    let mut raw = RawSettings::default();
    raw.logging.level = Some("chatty".to_string());

    let err = Settings::from_raw(raw).expect_err("bad level");
    assert!(matches!(err, LoadError::Invalid { key: "logging.level", .. }));
}

#[test]
fn config_file_is_layered_under_cli() {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("tmp config");
    writeln!(
        file,
        "[api]\nbase_url = \"http://from-file.example\"\n\n[site]\ntitle = \"My Blog\"\n"
    )
    .expect("write config");

    let args = CliArgs::parse_from([
        "postboard",
        "--config-file",
        file.path().to_str().expect("utf-8 path"),
        "--log-level",
        "error",
    ]);
    let settings = load(&args).expect("settings");

    assert_eq!(settings.api.base_url.as_str(), "http://from-file.example/");
    assert_eq!(settings.site.title, "My Blog");
    assert_eq!(settings.logging.level, LevelFilter::ERROR);
}

#[test]
fn no_subcommand_means_listing() {
    let args = CliArgs::parse_from(["postboard"]);
    assert!(args.command.is_none());
}

#[test]
fn parse_list_with_search() {
    let args = CliArgs::parse_from(["postboard", "list", "--search", "rust"]);

    match args.command.expect("list command") {
        Command::List(list) => assert_eq!(list.search, "rust"),
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn parse_show_and_delete_ids() {
    let show = CliArgs::parse_from(["postboard", "show", "3"]);
    match show.command.expect("show command") {
        Command::Show(args) => assert_eq!(args.id, PostId::new(3)),
        _ => panic!("wrong command parsed"),
    }

    let delete = CliArgs::parse_from(["postboard", "delete", "7"]);
    match delete.command.expect("delete command") {
        Command::Delete(args) => assert_eq!(args.id, PostId::new(7)),
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn show_rejects_non_numeric_id() {
    let result = CliArgs::try_parse_from(["postboard", "show", "abc"]);
    assert!(result.is_err());
}

#[test]
fn parse_new_post_arguments() {
    let args = CliArgs::parse_from([
        "postboard",
        "new",
        "--title",
        "Hello",
        "--body",
        "World",
        "--api-url",
        "http://localhost:3500",
    ]);

    assert_eq!(
        args.overrides.api_url.as_deref(),
        Some("http://localhost:3500")
    );
    match args.command.expect("new command") {
        Command::New(new) => {
            assert_eq!(new.title, "Hello");
            assert_eq!(new.body.as_deref(), Some("World"));
            assert!(new.body_file.is_none());
        }
        _ => panic!("wrong command parsed"),
    }
}

#[test]
fn body_and_body_file_conflict() {
    let result = CliArgs::try_parse_from([
        "postboard",
        "new",
        "--body",
        "inline",
        "--body-file",
        "/tmp/body.txt",
    ]);
    assert!(result.is_err());
}
