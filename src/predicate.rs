use std::path::Path;
use std::path::PathBuf;

use crate::link::LinkOptions;
use crate::native;
use crate::native::Presence;

/// The predicate kinds a [`Matcher`](crate::Matcher) can evaluate.
///
/// Each variant is a pure function of `(path, LinkOptions)`; none of
/// them hold state between evaluations. Inspection failures never
/// escape: a predicate that cannot be decided evaluates to `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Predicate {
    /// The entry is resolvable per the link policy.
    Exists,
    /// The entry resolves to a directory per the link policy.
    Directory,
    /// The entry resolves to a regular file per the link policy.
    RegularFile,
    /// The unresolved entry itself is a symbolic link.
    SymbolicLink,
    /// Read permission is granted to the calling process.
    Readable,
    /// Write permission is granted to the calling process.
    Writable,
    /// Execute (or directory-search) permission is granted.
    Executable,
    /// The platform hidden marker is set.
    Hidden,
    /// The entry resolves to the same object as the stored path.
    SameFile(PathBuf),
}

impl Predicate {
    /// Evaluates this predicate against `path`.
    pub(crate) fn eval(&self, path: &Path, options: LinkOptions) -> bool {
        match self {
            Predicate::Exists => native::probe(path, options) == Presence::Present,
            Predicate::Directory => native::metadata(path, options)
                .map(|meta| meta.is_dir())
                .unwrap_or(false),
            Predicate::RegularFile => native::metadata(path, options)
                .map(|meta| meta.is_file())
                .unwrap_or(false),
            Predicate::SymbolicLink => native::entry_is_symlink(path),
            Predicate::Readable => native::is_readable(path),
            Predicate::Writable => native::is_writable(path),
            Predicate::Executable => native::is_executable(path),
            Predicate::Hidden => match native::is_hidden(path) {
                Ok(hidden) => hidden,
                Err(err) => {
                    // Undeterminable counts as "not hidden".
                    log::debug!("hidden check failed for {}: {err}", path.display());
                    false
                }
            },
            Predicate::SameFile(expected) => match native::is_same_file(path, expected) {
                Ok(same) => same,
                Err(err) => {
                    // Undeterminable counts as "not the same file".
                    log::debug!(
                        "same-file check of {} against {} failed: {err}",
                        path.display(),
                        expected.display()
                    );
                    false
                }
            },
        }
    }

    /// Whether this predicate accepts a link policy at all.
    ///
    /// The symbolic-link check is inherently unresolved, and the
    /// permission, hidden and same-file checks always resolve through
    /// the target per platform rules.
    pub(crate) fn accepts_options(&self) -> bool {
        matches!(
            self,
            Predicate::Exists | Predicate::Directory | Predicate::RegularFile
        )
    }

    /// The static phrase describing what this predicate expects,
    /// without any link-policy prefix.
    pub(crate) fn expectation_text(&self) -> String {
        match self {
            Predicate::Exists => "an existing filesystem entry".to_string(),
            Predicate::Directory => "a directory".to_string(),
            Predicate::RegularFile => "a regular file".to_string(),
            Predicate::SymbolicLink => "a symbolic link".to_string(),
            Predicate::Readable => "a readable file or directory".to_string(),
            Predicate::Writable => "a writable file or directory".to_string(),
            Predicate::Executable => "an executable file or directory".to_string(),
            Predicate::Hidden => "a hidden file or directory".to_string(),
            Predicate::SameFile(expected) => expected.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn directory_predicate_on_missing_path() {
        let dir = TempDir::new("predicate").unwrap();
        let missing = dir.path().join("missing");
        assert!(!Predicate::Directory.eval(&missing, LinkOptions::default()));
        assert!(!Predicate::Exists.eval(&missing, LinkOptions::default()));
    }

    #[test]
    fn same_file_against_unrelated_missing_path_is_false() {
        let dir = TempDir::new("predicate").unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"data").unwrap();
        let missing = dir.path().join("missing");
        assert!(!Predicate::SameFile(file).eval(&missing, LinkOptions::default()));
    }

    #[test]
    fn option_acceptance_matches_factory_surface() {
        assert!(Predicate::Exists.accepts_options());
        assert!(Predicate::Directory.accepts_options());
        assert!(Predicate::RegularFile.accepts_options());
        assert!(!Predicate::SymbolicLink.accepts_options());
        assert!(!Predicate::Readable.accepts_options());
        assert!(!Predicate::Hidden.accepts_options());
    }
}
