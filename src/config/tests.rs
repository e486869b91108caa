//! Unit tests for configuration loading, precedence, and resolution.

use ortho_config::{MergeComposer, OrthoConfig};
use rstest::rstest;
use serde_json::{Value, json};

use crate::GleanerConfig;
use crate::github::IntakeError;

fn apply_layer(composer: &mut MergeComposer, layer_type: &str, value: Value) {
    match layer_type {
        "defaults" => composer.push_defaults(value),
        "file" => composer.push_file(value, None),
        "environment" => composer.push_environment(value),
        "cli" => composer.push_cli(value),
        _ => panic!("unknown layer type: {layer_type}"),
    }
}

fn dated(from: &str, to: &str) -> GleanerConfig {
    GleanerConfig {
        from_date: Some(from.to_owned()),
        to_date: Some(to.to_owned()),
        ..Default::default()
    }
}

#[rstest]
#[case::file_overrides_defaults(
    vec![("defaults", json!({"repo": "a/default"})), ("file", json!({"repo": "a/file"}))],
    "a/file"
)]
#[case::environment_overrides_file(
    vec![("file", json!({"repo": "a/file"})), ("environment", json!({"repo": "a/env"}))],
    "a/env"
)]
#[case::cli_overrides_environment(
    vec![("environment", json!({"repo": "a/env"})), ("cli", json!({"repo": "a/cli"}))],
    "a/cli"
)]
fn layer_precedence(#[case] layers: Vec<(&str, Value)>, #[case] expected: &str) {
    let mut composer = MergeComposer::new();
    for (layer_type, value) in layers {
        apply_layer(&mut composer, layer_type, value);
    }

    let config =
        GleanerConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.repo.as_deref(), Some(expected));
}

#[rstest]
fn partial_overrides_preserve_lower_values() {
    let mut composer = MergeComposer::new();
    composer.push_file(
        json!({"repo": "acme/widgets", "timezone": "UTC", "output_dir": "out"}),
        None,
    );
    composer.push_cli(json!({"timezone": "Europe/London"}));

    let config =
        GleanerConfig::merge_from_layers(composer.layers()).expect("merge should succeed");

    assert_eq!(config.repo.as_deref(), Some("acme/widgets"));
    assert_eq!(config.timezone.as_deref(), Some("Europe/London"));
    assert_eq!(config.output_root().as_str(), "out");
}

#[rstest]
fn loads_from_environment_and_cli() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("GLEANER_REPO", Some("acme/from-env")),
        ("GLEANER_FROM_DATE", Some("2024-01-01")),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let args = ["gleaner", "--to-date", "2024-01-31", "-o", "records"];
    let config = GleanerConfig::load_from_iter(args.map(std::ffi::OsString::from))
        .expect("config should load");

    assert_eq!(config.repo.as_deref(), Some("acme/from-env"));
    assert_eq!(config.from_date.as_deref(), Some("2024-01-01"));
    assert_eq!(config.to_date.as_deref(), Some("2024-01-31"));
    assert_eq!(config.output_root().as_str(), "records");
}

#[rstest]
fn short_flags_for_window_and_token_are_distinct() {
    let temp_dir = tempfile::TempDir::new().expect("temp dir should be created");
    let home = temp_dir.path().to_string_lossy().to_string();

    let _guard = env_lock::lock_env([
        ("GLEANER_TOKEN", None::<&str>),
        ("GLEANER_TO_DATE", None),
        ("HOME", Some(home.as_str())),
        ("XDG_CONFIG_HOME", Some(home.as_str())),
    ]);

    let args = [
        "gleaner",
        "-f",
        "2024-01-01",
        "--to-date",
        "2024-01-02",
        "-t",
        "ghp_cli",
    ];
    let config = GleanerConfig::load_from_iter(args.map(std::ffi::OsString::from))
        .expect("config should load");

    assert_eq!(config.from_date.as_deref(), Some("2024-01-01"));
    assert_eq!(config.to_date.as_deref(), Some("2024-01-02"));
    assert_eq!(config.token.as_deref(), Some("ghp_cli"));

    let args = ["gleaner", "-T", "2024-02-29"];
    let config = GleanerConfig::load_from_iter(args.map(std::ffi::OsString::from))
        .expect("config should load");

    assert_eq!(config.to_date.as_deref(), Some("2024-02-29"));
    assert_eq!(config.token, None);
}

#[rstest]
fn defaults_apply_when_unset() {
    let config = GleanerConfig::default();

    assert_eq!(config.output_root().as_str(), "pullrequests");
    assert_eq!(
        config
            .reporting_timezone()
            .expect("default timezone")
            .to_string(),
        "Asia/Tokyo"
    );
    assert_eq!(
        config.api_base_url().expect("default base").as_str(),
        "https://api.github.com/"
    );
    assert!(config.comment_filter().excludes("Copilot"));
    assert!(!config.verbose);
}

#[rstest]
fn require_repository_parses_owner_and_name() {
    let config = GleanerConfig {
        repo: Some("octocat/hello-world".to_owned()),
        ..Default::default()
    };

    let repository = config.require_repository().expect("repository should parse");

    assert_eq!(repository.to_string(), "octocat/hello-world");
}

#[rstest]
#[case::missing(None)]
#[case::no_slash(Some("octocat"))]
#[case::too_many_segments(Some("a/b/c"))]
fn require_repository_rejects_bad_input(#[case] repo: Option<&str>) {
    let config = GleanerConfig {
        repo: repo.map(str::to_owned),
        ..Default::default()
    };

    assert!(config.require_repository().is_err());
}

#[rstest]
fn resolve_token_prefers_configured_value() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = GleanerConfig {
        token: Some("my-token".to_owned()),
        ..Default::default()
    };

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "my-token");
}

#[rstest]
fn resolve_token_falls_back_to_github_token() {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", Some("legacy-token"))]);
    let config = GleanerConfig::default();

    let token = config.resolve_token().expect("token should resolve");
    assert_eq!(token.value(), "legacy-token");
}

#[rstest]
#[case::absent(None)]
#[case::blank(Some("   "))]
fn resolve_token_errors_without_a_value(#[case] token: Option<&str>) {
    let _guard = env_lock::lock_env([("GITHUB_TOKEN", None::<&str>)]);
    let config = GleanerConfig {
        token: token.map(str::to_owned),
        ..Default::default()
    };

    assert!(matches!(
        config.resolve_token(),
        Err(IntakeError::MissingToken)
    ));
}

#[rstest]
fn date_range_spans_whole_local_days() {
    let range = dated("2024-01-01", "2024-01-31")
        .date_range()
        .expect("range should build");

    assert_eq!(range.start().to_rfc3339(), "2024-01-01T00:00:00+09:00");
    assert_eq!(
        range.end().to_rfc3339(),
        "2024-01-31T23:59:59.999999+09:00"
    );
}

#[rstest]
fn date_range_uses_configured_timezone() {
    let config = GleanerConfig {
        timezone: Some("UTC".to_owned()),
        ..dated("2024-03-01", "2024-03-01")
    };

    let range = config.date_range().expect("range should build");

    assert_eq!(range.start().to_rfc3339(), "2024-03-01T00:00:00+00:00");
}

#[rstest]
#[case::missing_from(None, Some("2024-01-01"))]
#[case::missing_to(Some("2024-01-01"), None)]
#[case::malformed(Some("01/01/2024"), Some("2024-01-31"))]
#[case::impossible_day(Some("2024-02-30"), Some("2024-03-01"))]
#[case::inverted(Some("2024-02-01"), Some("2024-01-01"))]
fn date_range_rejects_invalid_windows(#[case] from: Option<&str>, #[case] to: Option<&str>) {
    let config = GleanerConfig {
        from_date: from.map(str::to_owned),
        to_date: to.map(str::to_owned),
        ..Default::default()
    };

    let result = config.date_range();

    assert!(
        matches!(result, Err(IntakeError::Configuration { .. })),
        "expected configuration error, got {result:?}"
    );
}

#[rstest]
fn unknown_timezone_is_a_configuration_error() {
    let config = GleanerConfig {
        timezone: Some("Mars/Olympus_Mons".to_owned()),
        ..Default::default()
    };

    assert!(matches!(
        config.reporting_timezone(),
        Err(IntakeError::Configuration { .. })
    ));
}

#[rstest]
fn invalid_api_base_is_rejected() {
    let config = GleanerConfig {
        api_base: Some("ftp://example.com".to_owned()),
        ..Default::default()
    };

    assert!(matches!(
        config.api_base_url(),
        Err(IntakeError::InvalidUrl(_))
    ));
}

#[rstest]
#[case::custom_list(Some("dependabot[bot], Copilot ,"), &["dependabot[bot]", "Copilot"], &["alice"])]
#[case::empty_keeps_everyone(Some(""), &[], &["Copilot", "alice"])]
#[case::default_list(None, &["Copilot"], &["alice"])]
fn comment_filter_reflects_exclusions(
    #[case] exclude_authors: Option<&str>,
    #[case] excluded: &[&str],
    #[case] kept: &[&str],
) {
    let config = GleanerConfig {
        exclude_authors: exclude_authors.map(str::to_owned),
        ..Default::default()
    };
    let filter = config.comment_filter();

    for author in excluded {
        assert!(filter.excludes(author), "{author} should be excluded");
    }
    for author in kept {
        assert!(!filter.excludes(author), "{author} should be kept");
    }
}
