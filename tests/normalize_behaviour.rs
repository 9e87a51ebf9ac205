use std::error::Error;

use skinwatch::config::model::{RawConfig, Timeouts};
use skinwatch::config::normalize;
use skinwatch::errors::ConfigError;
use skinwatch::notify::{NoticeLevel, RecordingNotify};

type TestResult = Result<(), Box<dyn Error>>;

fn raw(yaml: &str) -> RawConfig {
    serde_yaml::from_str(yaml).expect("test yaml should deserialize")
}

#[test]
fn missing_skins_key_is_fatal() {
    let mut sink = RecordingNotify::new();
    let err = normalize(raw("timeouts:\n  per_skin: 2\n"), &mut sink).unwrap_err();
    assert!(matches!(err, ConfigError::MissingSkins));
}

#[test]
fn null_and_empty_skins_are_fatal() {
    for yaml in ["skins:\n", "skins: []\n"] {
        let mut sink = RecordingNotify::new();
        let err = normalize(raw(yaml), &mut sink).unwrap_err();
        assert!(matches!(err, ConfigError::MissingSkins), "input: {yaml:?}");
        assert_eq!(sink.messages_at(NoticeLevel::Warning).len(), 1);
    }
}

#[test]
fn string_pattern_splits_on_comma_space() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n    pattern: \"Ruby, Sapphire\"\n"),
        &mut sink,
    )?;
    assert_eq!(
        cfg.skins[0].pattern,
        Some(vec!["Ruby".to_string(), "Sapphire".to_string()])
    );
    Ok(())
}

#[test]
fn single_value_pattern_becomes_one_element_list() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n    pattern: \"Solo\"\n"),
        &mut sink,
    )?;
    assert_eq!(cfg.skins[0].pattern, Some(vec!["Solo".to_string()]));
    Ok(())
}

#[test]
fn list_pattern_is_left_untouched() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n    pattern: [\"661\", \"670\"]\n"),
        &mut sink,
    )?;
    assert_eq!(
        cfg.skins[0].pattern,
        Some(vec!["661".to_string(), "670".to_string()])
    );
    Ok(())
}

#[test]
fn empty_string_pattern_is_accepted() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n    pattern: \"\"\n"),
        &mut sink,
    )?;
    assert_eq!(cfg.skins[0].pattern, Some(vec![String::new()]));
    Ok(())
}

#[test]
fn absent_pattern_stays_absent() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(raw("skins:\n  - url: \"https://x.example/a\"\n"), &mut sink)?;
    assert_eq!(cfg.skins[0].pattern, None);
    Ok(())
}

#[test]
fn absent_timeouts_use_full_default_table_silently() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(raw("skins:\n  - url: \"https://x.example/a\"\n"), &mut sink)?;

    assert_eq!(cfg.timeouts, Timeouts::default());
    assert_eq!(
        cfg.timeouts,
        Timeouts {
            per_skin: 2,
            per_page: 2,
            after_server_error: 10,
            after_too_many_requests: 60,
        }
    );

    // No mapping supplied means no per-key substitution notices.
    let substitutions: Vec<_> = sink
        .messages_at(NoticeLevel::Info)
        .into_iter()
        .filter(|m| m.starts_with("Timeout"))
        .collect();
    assert!(substitutions.is_empty(), "got: {substitutions:?}");
    Ok(())
}

#[test]
fn partial_timeouts_default_the_missing_keys() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\ntimeouts:\n  per_skin: 5\n"),
        &mut sink,
    )?;

    assert_eq!(
        cfg.timeouts,
        Timeouts {
            per_skin: 5,
            per_page: 2,
            after_server_error: 10,
            after_too_many_requests: 60,
        }
    );

    let substitutions: Vec<_> = sink
        .messages_at(NoticeLevel::Info)
        .into_iter()
        .filter(|m| m.starts_with("Timeout"))
        .collect();
    assert_eq!(substitutions.len(), 3);
    Ok(())
}

#[test]
fn substitution_notices_follow_key_order() -> TestResult {
    let mut sink = RecordingNotify::new();
    normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\ntimeouts: {}\n"),
        &mut sink,
    )?;

    let substitutions: Vec<_> = sink
        .messages_at(NoticeLevel::Info)
        .into_iter()
        .filter(|m| m.starts_with("Timeout"))
        .collect();
    assert_eq!(substitutions.len(), 4);
    assert!(substitutions[0].contains("'per_skin'"));
    assert!(substitutions[1].contains("'per_page'"));
    assert!(substitutions[2].contains("'after_server_error'"));
    assert!(substitutions[3].contains("'after_too_many_requests'"));
    Ok(())
}

#[test]
fn zero_timeout_is_defaulted_and_warned_once() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw(concat!(
            "skins:\n  - url: \"https://x.example/a\"\n",
            "timeouts:\n  per_skin: 0\n  per_page: 3\n",
            "  after_server_error: 10\n  after_too_many_requests: 60\n",
        )),
        &mut sink,
    )?;

    // Zero counts as "not provided": the default wins.
    assert_eq!(cfg.timeouts.per_skin, 2);
    assert_eq!(cfg.timeouts.per_page, 3);

    let warnings = sink.messages_at(NoticeLevel::Warning);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("rate limited"));
    Ok(())
}

#[test]
fn both_zero_pacing_values_warn_only_once() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\ntimeouts:\n  per_skin: 0\n  per_page: 0\n"),
        &mut sink,
    )?;

    assert_eq!(cfg.timeouts.per_skin, 2);
    assert_eq!(cfg.timeouts.per_page, 2);
    assert_eq!(sink.messages_at(NoticeLevel::Warning).len(), 1);
    Ok(())
}

#[test]
fn zero_backoff_timeouts_default_without_warning() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\ntimeouts:\n  after_server_error: 0\n"),
        &mut sink,
    )?;

    // The back-off keys still fall back to defaults on zero, but only the
    // pacing keys drive the rate-limit warning.
    assert_eq!(cfg.timeouts.after_server_error, 10);
    assert!(sink.messages_at(NoticeLevel::Warning).is_empty());
    Ok(())
}

#[test]
fn missing_proxy_emits_a_single_notice() -> TestResult {
    let mut sink = RecordingNotify::new();
    normalize(raw("skins:\n  - url: \"https://x.example/a\"\n"), &mut sink)?;

    let proxy_notices: Vec<_> = sink
        .messages_at(NoticeLevel::Info)
        .into_iter()
        .filter(|m| m.contains("proxy"))
        .collect();
    assert_eq!(proxy_notices.len(), 1);
    Ok(())
}

#[test]
fn configured_proxy_suppresses_the_notice() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\nproxy_url: \"http://127.0.0.1:8080\"\n"),
        &mut sink,
    )?;

    assert_eq!(cfg.proxy_url.as_deref(), Some("http://127.0.0.1:8080"));
    assert!(
        sink.messages_at(NoticeLevel::Info)
            .into_iter()
            .all(|m| !m.contains("proxy"))
    );
    Ok(())
}

#[test]
fn empty_proxy_notices_but_is_preserved() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\nproxy_url: \"\"\n"),
        &mut sink,
    )?;

    assert_eq!(cfg.proxy_url.as_deref(), Some(""));
    assert!(
        sink.messages_at(NoticeLevel::Info)
            .into_iter()
            .any(|m| m.contains("proxy"))
    );
    Ok(())
}

#[test]
fn unknown_top_level_keys_pass_through() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw(concat!(
            "skins:\n  - url: \"https://x.example/a\"\n",
            "webhook: \"https://hooks.example/notify\"\n",
            "retries: 3\n",
        )),
        &mut sink,
    )?;

    assert_eq!(
        cfg.extra.get("webhook"),
        Some(&serde_yaml::Value::String(
            "https://hooks.example/notify".to_string()
        ))
    );
    assert_eq!(
        cfg.extra.get("retries"),
        Some(&serde_yaml::Value::Number(3.into()))
    );
    Ok(())
}

#[test]
fn unknown_skin_keys_pass_through() -> TestResult {
    let mut sink = RecordingNotify::new();
    let cfg = normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n    stickers: \"Titan Holo\"\n"),
        &mut sink,
    )?;

    assert_eq!(
        cfg.skins[0].extra.get("stickers"),
        Some(&serde_yaml::Value::String("Titan Holo".to_string()))
    );
    Ok(())
}

#[test]
fn skin_count_is_reported() -> TestResult {
    let mut sink = RecordingNotify::new();
    normalize(
        raw("skins:\n  - url: \"https://x.example/a\"\n  - url: \"https://x.example/b\"\n"),
        &mut sink,
    )?;

    assert!(
        sink.messages_at(NoticeLevel::Info)
            .into_iter()
            .any(|m| m.contains("2 skins"))
    );
    Ok(())
}
