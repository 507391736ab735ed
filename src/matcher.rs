use std::path::Path;
use std::path::PathBuf;

use crate::describe;
use crate::link::LinkOptions;
use crate::predicate::Predicate;

/// An immutable, reusable path matcher: one predicate bound to a link
/// policy and to the shared description renderer.
///
/// Matchers hold no mutable state, so a single instance can be applied
/// to any number of paths, from any number of threads. Every call to
/// [`matches`](Matcher::matches) and [`mismatch`](Matcher::mismatch)
/// takes a fresh snapshot of the filesystem; the two snapshots of one
/// failed assertion are not atomic with each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    predicate: Predicate,
    options: LinkOptions,
}

impl Matcher {
    fn new(predicate: Predicate, options: LinkOptions) -> Self {
        debug_assert!(
            predicate.accepts_options() || !options.is_no_follow(),
            "link options supplied to a link-insensitive predicate"
        );
        Self { predicate, options }
    }

    /// Evaluates the predicate against `path`.
    ///
    /// Inspection failures (permission denied, I/O errors) evaluate to
    /// `false`; this call never fails.
    pub fn matches<P: AsRef<Path>>(&self, path: P) -> bool {
        self.predicate.eval(path.as_ref(), self.options)
    }

    /// The static phrase describing what this matcher expects.
    pub fn expectation(&self) -> String {
        describe::expectation(&self.predicate, self.options)
    }

    /// Renders the narrative explaining why `path` did not match,
    /// computed from the path's state at the time of this call.
    pub fn mismatch<P: AsRef<Path>>(&self, path: P) -> String {
        describe::mismatch(&self.predicate, path.as_ref(), self.options)
    }
}

/// Matches when the examined path can be determined to exist.
///
/// By default symbolic links are followed; pass
/// [`LinkOptions::no_follow`] to check the link entry itself.
pub fn exists(options: LinkOptions) -> Matcher {
    Matcher::new(Predicate::Exists, options)
}

/// Matches when the examined path resolves to a directory.
pub fn a_directory(options: LinkOptions) -> Matcher {
    Matcher::new(Predicate::Directory, options)
}

/// Matches when the examined path resolves to a regular file.
pub fn a_regular_file(options: LinkOptions) -> Matcher {
    Matcher::new(Predicate::RegularFile, options)
}

/// Matches when the examined path itself is a symbolic link.
///
/// The link is never resolved, so this accepts no link options.
pub fn a_symbolic_link() -> Matcher {
    Matcher::new(Predicate::SymbolicLink, LinkOptions::default())
}

/// Matches when the examined path exists and is readable.
pub fn readable() -> Matcher {
    Matcher::new(Predicate::Readable, LinkOptions::default())
}

/// Matches when the examined path exists and is writable.
pub fn writable() -> Matcher {
    Matcher::new(Predicate::Writable, LinkOptions::default())
}

/// Matches when the examined path exists and is executable.
///
/// For a directory, execute permission means the process may search
/// the directory to reach its entries.
pub fn executable() -> Matcher {
    Matcher::new(Predicate::Executable, LinkOptions::default())
}

/// Matches when the examined path carries the platform hidden marker:
/// a leading dot on unix, the hidden file attribute on Windows.
pub fn hidden() -> Matcher {
    Matcher::new(Predicate::Hidden, LinkOptions::default())
}

/// Matches when the examined path names the same filesystem object as
/// `expected`, even when relative segments or symbolic links are used
/// to arrive at it via another route.
pub fn same_file<P: AsRef<Path>>(expected: P) -> Matcher {
    Matcher::new(
        Predicate::SameFile(PathBuf::from(expected.as_ref())),
        LinkOptions::default(),
    )
}
