//! Resolving a (possibly partial) preview state against a catalog entry.
//!
//! A decoded share link only carries the parameters the sender changed; everything else comes
//! from the record's defaults. The resolved preview then renders into the forms the gallery
//! needs: custom properties for the demo element, an `animation` shorthand for the playground,
//! a fully populated share state, and the settings JSON export.

use crate::{
    catalog::{AnimationRecord, Catalog},
    foundation::error::AnimlibResult,
    share::codec::decode,
    state::{
        AnimationPreviewState, DemoKind, Direction, Easing, FillMode, IterationCount,
        format_number,
    },
};

pub const VAR_DURATION: &str = "--animlib-duration";
pub const VAR_DELAY: &str = "--animlib-delay";
pub const VAR_EASING: &str = "--animlib-easing";
pub const VAR_ITERATIONS: &str = "--animlib-iterations";
pub const VAR_DIRECTION: &str = "--animlib-direction";
pub const VAR_FILL: &str = "--animlib-fill";

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPreview {
    pub animation_id: String,
    pub class_name: String,
    pub keyframes_name: String,
    #[serde(serialize_with = "plain_number")]
    pub duration_ms: f64,
    #[serde(serialize_with = "plain_number")]
    pub delay_ms: f64,
    pub easing: Easing,
    pub iterations: IterationCount,
    pub direction: Direction,
    pub fill_mode: FillMode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_kind: Option<DemoKind>,
}

/// Shape of the "download settings" export.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AnimationSettings {
    #[serde(serialize_with = "plain_number")]
    pub duration: f64,
    #[serde(serialize_with = "plain_number")]
    pub delay: f64,
    pub easing: Easing,
    pub iterations: IterationCount,
    pub direction: Direction,
    pub fill: FillMode,
}

impl ResolvedPreview {
    pub fn resolve(record: &AnimationRecord, state: &AnimationPreviewState) -> Self {
        let d = &record.defaults;
        Self {
            animation_id: record.id.clone(),
            class_name: record.class_name.clone(),
            keyframes_name: record.keyframes_name.clone(),
            duration_ms: state
                .duration_ms
                .filter(|v| v.is_finite() && *v > 0.0)
                .unwrap_or(d.duration_ms),
            delay_ms: state
                .delay_ms
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(d.delay_ms),
            easing: state
                .easing
                .clone()
                .filter(|e| !e.as_str().trim().is_empty())
                .unwrap_or_else(|| d.easing.clone()),
            iterations: state.iteration_count.unwrap_or(d.iterations),
            direction: state.direction.unwrap_or(d.direction),
            fill_mode: state.fill_mode.unwrap_or(d.fill_mode),
            demo_kind: state.demo_kind,
        }
    }

    /// Custom properties read by the demo element's class rule, in a stable order.
    pub fn css_vars(&self) -> Vec<(&'static str, String)> {
        vec![
            (VAR_DURATION, format!("{}ms", format_number(self.duration_ms))),
            (VAR_DELAY, format!("{}ms", format_number(self.delay_ms))),
            (VAR_EASING, self.easing.to_string()),
            (VAR_ITERATIONS, self.iterations.to_string()),
            (VAR_DIRECTION, self.direction.to_string()),
            (VAR_FILL, self.fill_mode.to_string()),
        ]
    }

    /// `css_vars` as an inline `style` attribute value.
    pub fn style_attribute(&self) -> String {
        self.css_vars()
            .iter()
            .map(|(name, value)| format!("{name}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Value for the `animation` shorthand property.
    pub fn animation_shorthand(&self) -> String {
        format!(
            "{} {}ms {}ms {} {} {} {}",
            self.keyframes_name,
            format_number(self.duration_ms),
            format_number(self.delay_ms),
            self.easing,
            self.iterations,
            self.direction,
            self.fill_mode
        )
    }

    pub fn to_share_state(&self) -> AnimationPreviewState {
        AnimationPreviewState {
            animation_id: Some(self.animation_id.clone()),
            duration_ms: Some(self.duration_ms),
            delay_ms: Some(self.delay_ms),
            easing: Some(self.easing.clone()),
            iteration_count: Some(self.iterations),
            direction: Some(self.direction),
            fill_mode: Some(self.fill_mode),
            demo_kind: self.demo_kind,
        }
    }

    pub fn settings(&self) -> AnimationSettings {
        AnimationSettings {
            duration: self.duration_ms,
            delay: self.delay_ms,
            easing: self.easing.clone(),
            iterations: self.iterations,
            direction: self.direction,
            fill: self.fill_mode,
        }
    }

    pub fn settings_json(&self) -> AnimlibResult<String> {
        Ok(serde_json::to_string_pretty(&self.settings())?)
    }
}

/// Decode a share query and resolve it against the entry named by its `anim` key.
///
/// `None` when the query names no animation or one the catalog does not contain.
pub fn restore(catalog: &Catalog, query: &str) -> Option<ResolvedPreview> {
    let state = decode(query);
    let id = state.animation_id.as_deref()?;
    let Some(record) = catalog.get(id) else {
        tracing::debug!(id, "shared animation not in catalog");
        return None;
    };
    Some(ResolvedPreview::resolve(record, &state))
}

/// Whole numbers serialize without a trailing `.0`.
fn plain_number<S: serde::Serializer>(v: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if v.fract() == 0.0 && v.abs() < 9.0e15 {
        serializer.serialize_i64(*v as i64)
    } else {
        serializer.serialize_f64(*v)
    }
}

#[cfg(test)]
#[path = "../tests/unit/preview.rs"]
mod tests;
