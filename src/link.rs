use crate::errors::Error;

/// Flag string accepted by [`LinkOptions::from_flags`].
pub const NOFOLLOW_LINKS: &str = "nofollow-links";

/// Controls whether predicates traverse symbolic links before inspecting
/// the entry they name.
///
/// The default is to follow links, matching the behavior of the
/// underlying platform metadata calls. Construction from untyped flag
/// strings validates eagerly: an unrecognized flag is a configuration
/// error reported before any matcher is built, never at evaluation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Hash, Eq)]
pub struct LinkOptions {
    no_follow: bool,
}

impl LinkOptions {
    /// Options that stop at a symbolic link instead of resolving it.
    pub fn no_follow() -> Self {
        Self { no_follow: true }
    }

    /// Builds options from untyped flag strings, as supplied by a host
    /// assertion framework.
    ///
    /// The only recognized flag is [`NOFOLLOW_LINKS`]; anything else
    /// fails with [`Error::UnknownLinkFlag`].
    pub fn from_flags<I, S>(flags: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for flag in flags {
            match flag.as_ref() {
                NOFOLLOW_LINKS => options.no_follow = true,
                other => {
                    return Err(Error::UnknownLinkFlag {
                        flag: other.to_string(),
                    });
                }
            }
        }
        Ok(options)
    }

    /// Whether symbolic links are left unresolved.
    pub fn is_no_follow(&self) -> bool {
        self.no_follow
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_follows_links() {
        assert!(!LinkOptions::default().is_no_follow());
    }

    #[test]
    fn no_follow_constructor() {
        assert!(LinkOptions::no_follow().is_no_follow());
    }

    #[test]
    fn from_empty_flags() {
        assert_eq!(
            LinkOptions::from_flags::<_, &str>([]).unwrap(),
            LinkOptions::default()
        );
    }

    #[test]
    fn from_nofollow_flag() {
        assert_eq!(
            LinkOptions::from_flags([NOFOLLOW_LINKS]).unwrap(),
            LinkOptions::no_follow()
        );
    }

    #[test]
    fn unknown_flag_is_rejected() {
        assert_eq!(
            LinkOptions::from_flags(["follow-links"]),
            Err(Error::UnknownLinkFlag {
                flag: "follow-links".to_string()
            })
        );
    }

    #[test]
    fn unknown_flag_after_valid_one_is_rejected() {
        assert!(LinkOptions::from_flags([NOFOLLOW_LINKS, "deep"]).is_err());
    }
}
