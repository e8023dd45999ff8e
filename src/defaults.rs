use crate::compat::{String, ToOwned, ToString};
use crate::parsed_url::ParsedUrl;
use crate::scheme::{AUTO_SCHEME, infer_scheme};

/// Fill an empty field from its fallback
fn fill(field: &mut String, fallback: &str) {
    if field.is_empty() {
        fallback.clone_into(field);
    }
}

/// Merge `defaults` into a freshly parsed URL and rebuild authority/opaque.
/// Port is merged before the scheme so "auto" sees the final port.
pub(crate) fn merge_defaults(mut url: ParsedUrl, defaults: &ParsedUrl) -> ParsedUrl {
    fill(&mut url.host, &defaults.host);
    fill(&mut url.port, &defaults.port);
    fill(&mut url.path, &defaults.path);

    if url.scheme.is_empty() {
        if defaults.scheme == AUTO_SCHEME {
            url.scheme = infer_scheme(&url.port).to_string();
        } else {
            url.scheme.clone_from(&defaults.scheme);
        }
    }

    fill(&mut url.fragment, &defaults.fragment);
    fill(&mut url.query, &defaults.query);
    fill(&mut url.userinfo, &defaults.userinfo);

    url.authority = format_authority(&url);
    if let Some(opaque) = format_opaque(&url) {
        url.opaque = opaque;
    }

    log_trace!(
        "merged defaults into {:?}: scheme={:?} authority={:?} opaque={:?}",
        url.input,
        url.scheme,
        url.authority,
        url.opaque
    );

    url
}

/// `[userinfo "@"] host [":" port]`
fn format_authority(url: &ParsedUrl) -> String {
    let host_and_port = url.host_and_port();
    if url.userinfo.is_empty() {
        return host_and_port;
    }

    let mut authority = String::with_capacity(url.userinfo.len() + 1 + host_and_port.len());
    authority.push_str(&url.userinfo);
    authority.push('@');
    authority.push_str(&host_and_port);
    authority
}

/// `["//"] authority path`, or None to keep the parsed opaque segment when
/// it cannot be rebuilt: no authority and either no path or a rootless
/// opaque (`mailto:someone@example.com`) that a default path would replace.
fn format_opaque(url: &ParsedUrl) -> Option<String> {
    let rootless = !url.opaque.is_empty() && !url.opaque.starts_with('/');
    if url.authority.is_empty() && (url.path.is_empty() || rootless) {
        return None;
    }

    let marker = if url.slashes && !url.authority.is_empty() {
        "//"
    } else {
        ""
    };
    let mut opaque = String::with_capacity(marker.len() + url.authority.len() + url.path.len());
    opaque.push_str(marker);
    opaque.push_str(&url.authority);
    opaque.push_str(&url.path);
    Some(opaque)
}
