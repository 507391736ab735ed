//! Rendering of expectation text and mismatch narratives.
//!
//! The narrative describes the path's state at render time, which is a
//! separate snapshot from the one the failed match observed. Both are
//! best effort; nothing here coordinates the two.

use std::path::Path;

use crate::link::LinkOptions;
use crate::native;
use crate::native::Presence;
use crate::predicate::Predicate;

/// Renders the static phrase describing what `predicate` expects,
/// prefixed with the link-policy qualifier when links are not followed.
pub(crate) fn expectation(predicate: &Predicate, options: LinkOptions) -> String {
    let mut out = String::new();
    if options.is_no_follow() {
        out.push_str("a non-symbolic link to ");
    }
    out.push_str(&predicate.expectation_text());
    out
}

/// Renders the narrative explaining why `path` failed `predicate`.
///
/// Three mutually exclusive branches, checked in order:
///
/// 1. the unresolved entry exists: describe what is actually there,
///    resolving through links no matter what the matcher's own policy
///    says, so the message names the object the path ultimately
///    reaches (the pass/fail decision already honored the policy);
/// 2. the entry does not exist per the matcher's policy;
/// 3. neither can be established, e.g. under a permission failure on
///    an ancestor directory.
pub(crate) fn mismatch(predicate: &Predicate, path: &Path, options: LinkOptions) -> String {
    if let Predicate::SameFile(_) = predicate {
        // The same-file matcher reports the plain counter-value, not
        // the filesystem narrative.
        return format!("was {}", path.display());
    }

    if native::probe(path, LinkOptions::no_follow()) == Presence::Present {
        describe_entry(path)
    } else if native::probe(path, options) == Presence::Absent {
        format!("{} does not exist", path.display())
    } else {
        format!(
            "file system status for {} cannot be determined",
            path.display()
        )
    }
}

/// Describes an entry known to exist: link-ness, effective permissions,
/// hidden marker, then the classification of the resolved target.
fn describe_entry(path: &Path) -> String {
    let mut out = format!("{} is a ", path.display());

    if native::entry_is_symlink(path) {
        out.push_str("symbolic link to a ");
    }

    if !native::is_readable(path) {
        out.push_str("un");
    }
    out.push_str("readable, ");

    if !native::is_writable(path) {
        out.push_str("un");
    }
    out.push_str("writable, ");

    if !native::is_executable(path) {
        out.push_str("un");
    }
    out.push_str("executable");

    match native::is_hidden(path) {
        Ok(true) => out.push_str(", hidden"),
        Ok(false) => {}
        Err(err) => {
            // Clause is omitted, not rendered as "not hidden".
            log::debug!("hidden check failed for {}: {err}", path.display());
        }
    }

    // Classify the resolved target, following links regardless of the
    // matcher's policy. A dangling link or special file (device,
    // socket) ends up as a "non-existent entry".
    match native::metadata(path, LinkOptions::default()) {
        Some(meta) if meta.is_dir() => out.push_str(" directory"),
        Some(meta) if meta.is_file() => out.push_str(" regular file"),
        _ => out.push_str(" non-existent entry"),
    }

    out
}
