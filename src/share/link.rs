use url::Url;

use crate::{
    foundation::error::{AnimlibError, AnimlibResult},
    share::codec::encode,
    state::AnimationPreviewState,
};

/// Directory the share link is resolved against.
///
/// For a networked location this is origin + directory of the path. Otherwise (`file:` pages,
/// bare filesystem paths) the query, fragment and last path segment are stripped from the
/// location string itself.
pub fn share_base(location: &str) -> AnimlibResult<Url> {
    let loc = parse_location(location)?;
    let origin = loc.origin();

    let base = if origin.is_tuple() {
        let dir = parent_dir(loc.path());
        let dir = if dir.is_empty() { "/" } else { dir };
        Url::parse(&format!("{}{dir}", origin.ascii_serialization()))?
    } else {
        let href = loc.as_str();
        let href = href.split(['?', '#']).next().unwrap_or(href);
        Url::parse(parent_dir(href))?
    };

    if base.cannot_be_a_base() {
        return Err(AnimlibError::url(format!(
            "location '{location}' cannot be used as a base for share links"
        )));
    }
    Ok(base)
}

/// Absolute share link: `path_base` resolved against [`share_base`], query replaced by the
/// encoded state.
#[tracing::instrument(skip(state))]
pub fn build_share_url(
    path_base: &str,
    location: &str,
    state: &AnimationPreviewState,
) -> AnimlibResult<String> {
    let mut url = share_base(location)?.join(path_base)?;
    let query = encode(state);
    url.set_query(if query.is_empty() { None } else { Some(&query) });
    Ok(url.into())
}

fn parse_location(location: &str) -> AnimlibResult<Url> {
    match Url::parse(location) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::from_file_path(location)
            .map_err(|()| {
                AnimlibError::url(format!(
                    "location '{location}' is neither a URL nor an absolute path"
                ))
            }),
        Err(e) => Err(e.into()),
    }
}

/// Everything up to and including the last `/`.
fn parent_dir(path: &str) -> &str {
    &path[..path.rfind('/').map_or(0, |i| i + 1)]
}

#[cfg(test)]
#[path = "../../tests/unit/share/link.rs"]
mod tests;
