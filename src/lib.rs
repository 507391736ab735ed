//! Hamcrest-style filesystem path matchers for test assertions.
//!
//! Each matcher answers one boolean question about a path (does it
//! exist, is it a directory, is it readable, ...) and, when the answer
//! is not the expected one, explains itself with two strings: the
//! static expectation text and a narrative describing what is actually
//! on disk. A host assertion framework supplies the path, reads the
//! boolean, and composes the failure message.
//!
//! ```rust
//! use path_matchers::LinkOptions;
//! use path_matchers::a_directory;
//! use path_matchers::exists;
//!
//! let dir = tempdir::TempDir::new("docs").unwrap();
//! assert!(a_directory(LinkOptions::default()).matches(dir.path()));
//!
//! let missing = dir.path().join("missing");
//! let matcher = exists(LinkOptions::default());
//! assert!(!matcher.matches(&missing));
//! assert_eq!(matcher.expectation(), "an existing filesystem entry");
//! assert!(matcher.mismatch(&missing).ends_with("does not exist"));
//! ```
//!
//! Symbolic-link handling is configured per matcher through
//! [`LinkOptions`]; the default follows links. The mismatch narrative
//! deliberately always describes the object a link ultimately reaches,
//! even for a no-follow matcher, so the message names what is really
//! there while the pass/fail decision honors the configured policy.
//!
//! Every result is a snapshot: a path that existed when a matcher ran
//! may be gone by the time the caller acts on the answer. These
//! matchers must not be used to gate security-sensitive decisions.

mod describe;
mod errors;
mod link;
mod matcher;
mod native;
mod predicate;

pub use errors::Error;
pub use link::LinkOptions;
pub use link::NOFOLLOW_LINKS;
pub use matcher::Matcher;
pub use matcher::a_directory;
pub use matcher::a_regular_file;
pub use matcher::a_symbolic_link;
pub use matcher::executable;
pub use matcher::exists;
pub use matcher::hidden;
pub use matcher::readable;
pub use matcher::same_file;
pub use matcher::writable;

#[cfg(any(test, feature = "test_utils"))]
pub(crate) mod test_utils;
#[cfg(feature = "test_utils")]
pub use test_utils::TestRoot;
