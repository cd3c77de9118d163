//! Object naming for uploaded blobs.
//!
//! Paths are `{section}/{entity}-{millis}.{ext}` so a replaced file never
//! overwrites its predecessor; cleanup of the predecessor is a separate,
//! best-effort step.

use regex::Regex;
use std::sync::OnceLock;

use crate::modules::content::domain::document::SectionKind;

const PUBLIC_HOST: &str = "https://storage.googleapis.com";

fn ext_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]{1,8}$").expect("valid regex"))
}

/// File extension from the original name, lowercased; anything odd becomes
/// `bin` rather than leaking user input into object keys.
fn sanitized_extension(file_name: &str) -> String {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, e)| e.to_ascii_lowercase())
        .unwrap_or_default();

    if ext_pattern().is_match(&ext) {
        ext
    } else {
        "bin".to_string()
    }
}

pub fn storage_object_path(kind: SectionKind, entity_id: Option<&str>, file_name: &str) -> String {
    let entity = entity_id.filter(|id| !id.is_empty()).unwrap_or(kind.as_str());
    let millis = chrono::Utc::now().timestamp_millis();
    format!(
        "{}/{}-{}.{}",
        kind.as_str(),
        entity,
        millis,
        sanitized_extension(file_name)
    )
}

pub fn public_url(bucket: &str, object: &str) -> String {
    format!("{PUBLIC_HOST}/{bucket}/{object}")
}

/// Recover the object path from a public URL this service minted.
///
/// Foreign URLs (different host, or no object segment) yield `None`, which
/// callers treat as "nothing to clean up".
pub fn object_path_from_public_url(url: &str) -> Option<String> {
    let rest = url.strip_prefix(PUBLIC_HOST)?.strip_prefix('/')?;
    let (_bucket, object) = rest.split_once('/')?;
    if object.is_empty() {
        return None;
    }
    Some(object.to_string())
}
