// src/config/normalize.rs

use crate::config::model::{Config, RawConfig, RawSkin, RawTimeouts, Skin, Timeouts};
use crate::errors::ConfigError;
use crate::notify::{NoticeLevel, Notify};

/// Normalize a raw configuration into its final form.
///
/// This runs the whole pipeline:
/// - require a non-empty skin list (the only fatal check)
/// - fold string-form patterns into list form
/// - fill missing or zero timeouts with defaults
/// - warn once if the user asked for zero-second pacing
/// - notice when no proxy is configured
///
/// All notices go through `notifier`; apart from the early exit on a missing
/// skin list, they never affect the result.
pub fn normalize(raw: RawConfig, notifier: &mut dyn Notify) -> Result<Config, ConfigError> {
    let skins = require_skins(raw.skins, notifier)?;
    notifier.notify(
        NoticeLevel::Info,
        &format!("Loaded {} skins!", skins.len()),
    );

    let timeouts = resolve_timeouts(raw.timeouts, notifier);

    // Empty string counts as "no proxy" for the notice, but the field itself
    // is passed through untouched.
    if raw.proxy_url.as_deref().is_none_or(str::is_empty) {
        notifier.notify(
            NoticeLevel::Info,
            "No proxy provided. Continuing without a proxy...",
        );
    }

    Ok(Config {
        skins,
        timeouts,
        proxy_url: raw.proxy_url,
        extra: raw.extra,
    })
}

/// The skin list must exist and be non-empty; everything downstream assumes
/// there is at least one entry to watch.
fn require_skins(
    skins: Option<Vec<RawSkin>>,
    notifier: &mut dyn Notify,
) -> Result<Vec<Skin>, ConfigError> {
    match skins {
        Some(list) if !list.is_empty() => {
            Ok(list.into_iter().map(normalize_skin).collect())
        }
        _ => {
            notifier.notify(
                NoticeLevel::Warning,
                "No skins provided. Add at least one entry under `skins` and rerun.",
            );
            Err(ConfigError::MissingSkins)
        }
    }
}

fn normalize_skin(raw: RawSkin) -> Skin {
    Skin {
        float: raw.float,
        pattern: raw.pattern.map(|p| p.into_list()),
        price: raw.price,
        pages: raw.pages,
        url: raw.url,
        sort_by_float: raw.sort_by_float,
        extra: raw.extra,
    }
}

/// Resolve the final timeout table.
///
/// When no `timeouts` mapping was supplied at all, the default table is used
/// wholesale and nothing is noticed: every default is present and non-zero,
/// so the per-key pass below could not fire anyway.
///
/// When a mapping was supplied, each key is resolved independently in a
/// fixed order. A missing or zero value falls back to its default with a
/// substitution notice. The rate-limit warning is keyed to the values the
/// user actually wrote: a supplied zero has already been replaced by its
/// non-zero default at that point, so checking the final values instead
/// would never find one.
fn resolve_timeouts(raw: Option<RawTimeouts>, notifier: &mut dyn Notify) -> Timeouts {
    let defaults = Timeouts::default();
    let Some(user) = raw else {
        return defaults;
    };

    let resolved = Timeouts {
        per_skin: pick("per_skin", user.per_skin, defaults.per_skin, notifier),
        per_page: pick("per_page", user.per_page, defaults.per_page, notifier),
        after_server_error: pick(
            "after_server_error",
            user.after_server_error,
            defaults.after_server_error,
            notifier,
        ),
        after_too_many_requests: pick(
            "after_too_many_requests",
            user.after_too_many_requests,
            defaults.after_too_many_requests,
            notifier,
        ),
    };

    if user.per_skin == Some(0) || user.per_page == Some(0) {
        notifier.notify(
            NoticeLevel::Warning,
            "Timeout values of 0 seconds are not recommended. This may cause you to get rate limited.",
        );
    }

    resolved
}

/// Pick one timeout value: the user's, unless it is missing or zero.
fn pick(name: &str, supplied: Option<u64>, default: u64, notifier: &mut dyn Notify) -> u64 {
    match supplied {
        Some(value) if value != 0 => value,
        _ => {
            notifier.notify(
                NoticeLevel::Info,
                &format!("Timeout '{name}' not provided. Using default value of {default} seconds."),
            );
            default
        }
    }
}
