use std::path::PathBuf;

use anyhow::Context as _;

use crate::{
    catalog::{AnimationDefaults, AnimationRecord},
    css::extract::{ClassHeader, KeyframesHeader, extract_block},
    foundation::error::AnimlibResult,
    preview::{VAR_DELAY, VAR_DIRECTION, VAR_DURATION, VAR_EASING, VAR_FILL, VAR_ITERATIONS},
    state::format_number,
};

/// What to pull out of the stylesheet for one catalog entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CssTarget {
    pub animation_id: String,
    pub keyframes_name: String,
    pub class_name: String,
}

impl From<&AnimationRecord> for CssTarget {
    fn from(record: &AnimationRecord) -> Self {
        Self {
            animation_id: record.id.clone(),
            keyframes_name: record.keyframes_name.clone(),
            class_name: record.class_name.clone(),
        }
    }
}

/// The single external read behind CSS export.
pub trait StylesheetSource {
    fn read_stylesheet(&self) -> AnimlibResult<String>;
}

#[derive(Clone, Debug)]
pub struct FileStylesheet(pub PathBuf);

impl StylesheetSource for FileStylesheet {
    fn read_stylesheet(&self) -> AnimlibResult<String> {
        let s = std::fs::read_to_string(&self.0)
            .with_context(|| format!("read stylesheet '{}'", self.0.display()))?;
        Ok(s)
    }
}

#[derive(Clone, Debug)]
pub struct InlineStylesheet(pub String);

impl StylesheetSource for InlineStylesheet {
    fn read_stylesheet(&self) -> AnimlibResult<String> {
        Ok(self.0.clone())
    }
}

/// Minimal class rule that drives `keyframes_name` from the preview custom properties.
pub fn fallback_rule(class_name: &str, keyframes_name: &str) -> String {
    let d = AnimationDefaults::default();
    format!(
        ".{class_name} {{
  animation-name: {keyframes_name};
  animation-duration: var({VAR_DURATION}, {dur}ms);
  animation-delay: var({VAR_DELAY}, {delay}ms);
  animation-timing-function: var({VAR_EASING}, {easing});
  animation-iteration-count: var({VAR_ITERATIONS}, {iter});
  animation-direction: var({VAR_DIRECTION}, {dir});
  animation-fill-mode: var({VAR_FILL}, {fill});
}}",
        dur = format_number(d.duration_ms),
        delay = format_number(d.delay_ms),
        easing = d.easing,
        iter = d.iterations,
        dir = d.direction,
        fill = d.fill_mode,
    )
}

/// Copy/download-ready CSS for one animation. Never fails.
///
/// `stylesheet` is `None` when the stylesheet could not be read; the result is then the
/// fallback rule alone.
#[tracing::instrument(skip_all, fields(id = %target.animation_id))]
pub fn build_animation_css(target: &CssTarget, stylesheet: Option<&str>) -> String {
    let fallback = fallback_rule(&target.class_name, &target.keyframes_name);
    let Some(text) = stylesheet else {
        return fallback;
    };

    let keyframes = extract_block(text, &KeyframesHeader::standard(&target.keyframes_name))
        .or_else(|| extract_block(text, &KeyframesHeader::webkit(&target.keyframes_name)));
    let class_rule = extract_block(text, &ClassHeader::new(&target.class_name));

    match (keyframes, class_rule) {
        (Some(kf), Some(rule)) => format!("{}\n\n{}", kf.text(), rule.text()),
        (Some(kf), None) => {
            tracing::debug!(class = %target.class_name, "class rule not found, synthesizing");
            format!("{}\n\n{fallback}", kf.text())
        }
        (None, rule) => {
            tracing::debug!(keyframes = %target.keyframes_name, "keyframes not found");
            let body = rule.map(|r| r.text().to_string()).unwrap_or(fallback);
            format!(
                "/* @keyframes {} not found in stylesheet */\n{body}",
                target.keyframes_name
            )
        }
    }
}

/// Read the stylesheet from `source` and build the CSS; read failures degrade to the fallback.
pub fn export_animation_css(target: &CssTarget, source: &dyn StylesheetSource) -> String {
    match source.read_stylesheet() {
        Ok(text) => build_animation_css(target, Some(&text)),
        Err(err) => {
            tracing::warn!(id = %target.animation_id, error = %err, "stylesheet unavailable");
            build_animation_css(target, None)
        }
    }
}

/// Download name for an exported animation.
pub fn export_file_name(animation_id: &str) -> String {
    format!("{animation_id}.css")
}

#[cfg(test)]
#[path = "../../tests/unit/css/export.rs"]
mod tests;
