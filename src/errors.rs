use thiserror::Error;

/// Represents all possible errors in the path-matchers crate.
///
/// The only fallible surface is matcher configuration: predicate
/// evaluation itself never returns an error (inspection failures are
/// folded into a `false` match result instead).
#[derive(Error, Debug, Clone, PartialEq, Hash, Eq)]
pub enum Error {
    /// Error indicating an unrecognized link-handling flag was supplied
    /// while building [`LinkOptions`](crate::LinkOptions).
    #[error("Unrecognized link option: {flag}")]
    UnknownLinkFlag {
        /// The flag value that was not recognized.
        flag: String,
    },
}
