//! Temporary-directory fixture for exercising the matchers.

use std::fs;
use std::io;
use std::path::PathBuf;

use tempdir::TempDir;

/// Utility structure holding a temporary directory populated with the
/// entry kinds the matchers distinguish: a folder, a read-only file, a
/// missing path, symbolic links to both, and a hidden file.
///
/// Link creation is best effort: on platforms (or under privileges)
/// where symbolic links cannot be created, the link fields are `None`
/// and link-dependent tests skip themselves.
#[derive(Debug)]
pub struct TestRoot {
    /// Root of the temporary test directory; removed on drop.
    pub root: TempDir,
    /// A directory with default permissions.
    pub folder: PathBuf,
    /// A regular file with content, made read-only.
    pub test_file: PathBuf,
    /// A path inside `folder` that does not exist.
    pub no_file: PathBuf,
    /// A symbolic link to `test_file`, when links are supported.
    pub link_file: Option<PathBuf>,
    /// A symbolic link to `no_file`, when links are supported.
    pub link_no_file: Option<PathBuf>,
    /// A dotfile (unix) carrying the platform hidden marker there.
    pub hidden_file: PathBuf,
}

impl TestRoot {
    /// Creates and populates a fresh fixture directory.
    pub fn new() -> io::Result<Self> {
        let root = TempDir::new("path-matchers")?;
        let folder = root.path().join("folder");
        fs::create_dir(&folder)?;

        let test_file = folder.join("test-file");
        fs::write(&test_file, "Some text\n")?;
        let mut permissions = fs::metadata(&test_file)?.permissions();
        permissions.set_readonly(true);
        fs::set_permissions(&test_file, permissions)?;

        let no_file = folder.join("no-file");

        let link_file = Self::symlink(&test_file, folder.join("link-file"));
        let link_no_file = Self::symlink(&no_file, folder.join("link-no-file"));

        let hidden_file = folder.join(".hidden");
        fs::write(&hidden_file, "Hidden\n")?;

        Ok(Self {
            root,
            folder,
            test_file,
            no_file,
            link_file,
            link_no_file,
            hidden_file,
        })
    }

    #[cfg(unix)]
    fn symlink(target: &PathBuf, link: PathBuf) -> Option<PathBuf> {
        std::os::unix::fs::symlink(target, &link).ok().map(|_| link)
    }

    #[cfg(windows)]
    fn symlink(target: &PathBuf, link: PathBuf) -> Option<PathBuf> {
        // Needs a privilege that plain test runs usually lack.
        std::os::windows::fs::symlink_file(target, &link)
            .ok()
            .map(|_| link)
    }

    #[cfg(not(any(unix, windows)))]
    fn symlink(_target: &PathBuf, _link: PathBuf) -> Option<PathBuf> {
        None
    }
}

impl Drop for TestRoot {
    fn drop(&mut self) {
        // TempDir cannot unlink the read-only file on some platforms;
        // restore write permission before it cleans up.
        if let Ok(meta) = fs::metadata(&self.test_file) {
            let mut permissions = meta.permissions();
            #[allow(clippy::permissions_set_readonly_false)]
            permissions.set_readonly(false);
            let _ = fs::set_permissions(&self.test_file, permissions);
        }
    }
}
