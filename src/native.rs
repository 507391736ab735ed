//! Platform-level metadata probes backing the predicates.
//!
//! Every probe here is a single blocking metadata query; none of them
//! mutate the filesystem. Callers decide how failures are folded into
//! match results.

use std::fs;
use std::io;
use std::path::Path;

use crate::link::LinkOptions;

/// Outcome of an existence probe.
///
/// `Unknown` covers the cases where the platform cannot say either way,
/// typically a permission failure on an ancestor directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Presence {
    /// The entry is resolvable.
    Present,
    /// The entry definitely does not exist.
    Absent,
    /// Existence could not be determined.
    Unknown,
}

/// Probes for the entry named by `path`, honoring the link policy.
pub(crate) fn probe(path: &Path, options: LinkOptions) -> Presence {
    let result = if options.is_no_follow() {
        fs::symlink_metadata(path)
    } else {
        fs::metadata(path)
    };
    match result {
        Ok(_) => Presence::Present,
        Err(err) if err.kind() == io::ErrorKind::NotFound => Presence::Absent,
        Err(err) => {
            log::debug!("existence of {} is undeterminable: {err}", path.display());
            Presence::Unknown
        }
    }
}

/// Metadata for `path`, resolved per the link policy. Errors map to `None`.
pub(crate) fn metadata(path: &Path, options: LinkOptions) -> Option<fs::Metadata> {
    let result = if options.is_no_follow() {
        fs::symlink_metadata(path)
    } else {
        fs::metadata(path)
    };
    result.ok()
}

/// Whether the unresolved entry itself is a symbolic link.
pub(crate) fn entry_is_symlink(path: &Path) -> bool {
    fs::symlink_metadata(path)
        .map(|meta| meta.file_type().is_symlink())
        .unwrap_or(false)
}

/// Whether the calling process may read `path`, resolved through links.
#[cfg(unix)]
pub(crate) fn is_readable(path: &Path) -> bool {
    access(path, libc::R_OK)
}

/// Whether the calling process may write `path`, resolved through links.
#[cfg(unix)]
pub(crate) fn is_writable(path: &Path) -> bool {
    access(path, libc::W_OK)
}

/// Whether the calling process may execute `path` (or search it, for a
/// directory), resolved through links.
#[cfg(unix)]
pub(crate) fn is_executable(path: &Path) -> bool {
    access(path, libc::X_OK)
}

/// Asks the platform whether the effective uid/gid grant `mode` on
/// `path`, following symbolic links.
///
/// `AT_EACCESS` makes the kernel judge the effective credentials, the
/// ones that would govern an actual open, rather than the real ones
/// plain `access(2)` checks. The two differ under setuid/setgid.
#[cfg(unix)]
#[allow(unsafe_code)]
fn access(path: &Path, mode: libc::c_int) -> bool {
    use std::ffi::CString;
    use std::os::unix::ffi::OsStrExt;

    let Ok(cpath) = CString::new(path.as_os_str().as_bytes()) else {
        return false;
    };
    // faccessat only reads the path string and touches no process state.
    unsafe { libc::faccessat(libc::AT_FDCWD, cpath.as_ptr(), mode, libc::AT_EACCESS) == 0 }
}

#[cfg(not(unix))]
pub(crate) fn is_readable(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

#[cfg(not(unix))]
pub(crate) fn is_writable(path: &Path) -> bool {
    fs::metadata(path)
        .map(|meta| !meta.permissions().readonly())
        .unwrap_or(false)
}

#[cfg(not(unix))]
pub(crate) fn is_executable(path: &Path) -> bool {
    fs::metadata(path).is_ok()
}

/// Whether `path` carries the platform hidden marker.
///
/// On unix this is purely a name inspection (leading dot on the final
/// component) and never fails; existence is not required. On Windows it
/// reads the hidden file attribute and propagates the I/O error.
#[cfg(unix)]
pub(crate) fn is_hidden(path: &Path) -> io::Result<bool> {
    use std::os::unix::ffi::OsStrExt;

    // Raw byte comparison: POSIX filenames need not be valid UTF-8.
    Ok(path
        .file_name()
        .map(|name| name.as_bytes().first() == Some(&b'.'))
        .unwrap_or(false))
}

#[cfg(windows)]
pub(crate) fn is_hidden(path: &Path) -> io::Result<bool> {
    use std::os::windows::fs::MetadataExt;

    // FILE_ATTRIBUTE_HIDDEN
    const HIDDEN: u32 = 0x2;
    let meta = fs::metadata(path)?;
    Ok(meta.file_attributes() & HIDDEN != 0)
}

#[cfg(not(any(unix, windows)))]
pub(crate) fn is_hidden(_path: &Path) -> io::Result<bool> {
    Ok(false)
}

/// Whether the two paths resolve, after following every link and
/// relative segment, to the identical filesystem object.
#[cfg(unix)]
pub(crate) fn is_same_file(left: &Path, right: &Path) -> io::Result<bool> {
    use std::os::unix::fs::MetadataExt;

    let left = fs::metadata(left)?;
    let right = fs::metadata(right)?;
    Ok(left.dev() == right.dev() && left.ino() == right.ino())
}

#[cfg(not(unix))]
pub(crate) fn is_same_file(left: &Path, right: &Path) -> io::Result<bool> {
    Ok(fs::canonicalize(left)? == fs::canonicalize(right)?)
}

#[cfg(test)]
mod tests {
    use tempdir::TempDir;

    use super::*;

    #[test]
    fn probe_missing_entry() {
        let dir = TempDir::new("native").unwrap();
        let missing = dir.path().join("missing");
        assert_eq!(probe(&missing, LinkOptions::default()), Presence::Absent);
        assert_eq!(probe(&missing, LinkOptions::no_follow()), Presence::Absent);
    }

    #[test]
    fn probe_present_entry() {
        let dir = TempDir::new("native").unwrap();
        assert_eq!(probe(dir.path(), LinkOptions::default()), Presence::Present);
    }

    #[test]
    fn plain_file_is_not_symlink() {
        let dir = TempDir::new("native").unwrap();
        assert!(!entry_is_symlink(dir.path()));
        assert!(!entry_is_symlink(&dir.path().join("missing")));
    }

    #[cfg(unix)]
    #[test]
    fn dotfile_is_hidden_without_existing() {
        assert!(is_hidden(Path::new("/tmp/.does-not-need-to-exist")).unwrap());
        assert!(!is_hidden(Path::new("/tmp/plain-name")).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_dotfile_is_hidden() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = TempDir::new("native").unwrap();
        let dotted = dir.path().join(OsStr::from_bytes(b".\xff\xfehidden"));
        std::fs::write(&dotted, b"x").unwrap();
        assert!(is_hidden(&dotted).unwrap());

        let plain = dir.path().join(OsStr::from_bytes(b"\xff\xfeplain"));
        assert!(!is_hidden(&plain).unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn permission_checks_deny_a_mode_zero_file() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        // Effective uid 0 passes R_OK/W_OK regardless of mode bits.
        #[allow(unsafe_code)]
        let root_user = unsafe { libc::geteuid() == 0 };
        if root_user {
            return;
        }

        let dir = TempDir::new("native").unwrap();
        let file = dir.path().join("f");
        fs::write(&file, b"x").unwrap();
        fs::set_permissions(&file, fs::Permissions::from_mode(0o000)).unwrap();

        assert!(!is_readable(&file));
        assert!(!is_writable(&file));
        assert!(!is_executable(&file));
        assert!(is_readable(dir.path()));
    }

    #[test]
    fn same_file_errors_on_missing_operand() {
        let dir = TempDir::new("native").unwrap();
        assert!(is_same_file(dir.path(), &dir.path().join("missing")).is_err());
    }

    #[test]
    fn same_file_through_dot_dot() {
        let dir = TempDir::new("native").unwrap();
        let file = dir.path().join("f");
        std::fs::write(&file, b"x").unwrap();
        let name = dir.path().file_name().unwrap();
        let via_parent = dir.path().join("..").join(name).join("f");
        assert!(is_same_file(&file, &via_parent).unwrap());
    }
}
