//! Query-string encoding of [`AnimationPreviewState`].
//!
//! Keys are emitted in a fixed order (`anim, dur, delay, ease, iter, dir, fill, demo`) so the
//! same state always produces the same link. Decoding never fails: malformed or empty values
//! come back as `None` and the caller substitutes catalog defaults.

use std::collections::BTreeMap;

use url::form_urlencoded;

use crate::state::{AnimationPreviewState, Easing, IterationCount, format_number};

pub const ANIM: &str = "anim";
pub const DUR: &str = "dur";
pub const DELAY: &str = "delay";
pub const EASE: &str = "ease";
pub const ITER: &str = "iter";
pub const DIR: &str = "dir";
pub const FILL: &str = "fill";
pub const DEMO: &str = "demo";

/// Only values `decode` accepts are written; anything else is left out like an absent field.
pub fn encode(state: &AnimationPreviewState) -> String {
    let fields: [(&str, Option<String>); 8] = [
        (ANIM, state.animation_id.clone()),
        (DUR, state.duration_ms.filter(|v| valid_duration(*v)).map(format_number)),
        (DELAY, state.delay_ms.filter(|v| valid_delay(*v)).map(format_number)),
        (EASE, state.easing.as_ref().map(|e| e.as_str().to_string())),
        (
            ITER,
            state
                .iteration_count
                .filter(|i| *i != IterationCount::Count(0))
                .map(|i| i.to_string()),
        ),
        (DIR, state.direction.map(|d| d.as_str().to_string())),
        (FILL, state.fill_mode.map(|f| f.as_str().to_string())),
        (DEMO, state.demo_kind.map(|d| d.as_str().to_string())),
    ];

    let mut ser = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        let Some(value) = value else {
            continue;
        };
        if value.trim().is_empty() {
            continue;
        }
        ser.append_pair(key, &value);
    }
    ser.finish()
}

pub fn decode(query: &str) -> AnimationPreviewState {
    let query = query.strip_prefix('?').unwrap_or(query);

    // First occurrence of a key wins.
    let mut pairs = BTreeMap::new();
    for (k, v) in form_urlencoded::parse(query.as_bytes()) {
        pairs.entry(k.into_owned()).or_insert_with(|| v.into_owned());
    }

    AnimationPreviewState {
        animation_id: field(&pairs, ANIM, |s| Some(s.to_string())),
        duration_ms: field(&pairs, DUR, |s| parse_number(s).filter(|v| valid_duration(*v))),
        delay_ms: field(&pairs, DELAY, |s| parse_number(s).filter(|v| valid_delay(*v))),
        easing: field(&pairs, EASE, |s| Some(Easing::from(s))),
        iteration_count: field(&pairs, ITER, |s| s.parse().ok()),
        direction: field(&pairs, DIR, |s| s.parse().ok()),
        fill_mode: field(&pairs, FILL, |s| s.parse().ok()),
        demo_kind: field(&pairs, DEMO, |s| s.parse().ok()),
    }
}

/// Absent and blank values are both `None`; rejected values are logged and also `None`.
/// `parse` sees the value untrimmed.
fn field<T>(
    pairs: &BTreeMap<String, String>,
    key: &str,
    parse: impl FnOnce(&str) -> Option<T>,
) -> Option<T> {
    let raw = pairs.get(key)?.as_str();
    if raw.trim().is_empty() {
        return None;
    }
    let value = parse(raw);
    if value.is_none() {
        tracing::debug!(key, value = raw, "ignoring malformed share parameter");
    }
    value
}

fn parse_number(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok()
}

fn valid_duration(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

fn valid_delay(v: f64) -> bool {
    v.is_finite() && v >= 0.0
}
