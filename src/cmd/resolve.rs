use std::{
    env,
    ffi::OsStr,
    fs,
    os::unix::fs::PermissionsExt,
    path::{Path, PathBuf},
};

/// Locate an external program on the `PATH` search directories.
///
/// Returns the first hit in path order, or `None` when the name does not
/// resolve to an executable regular file anywhere on the path.
pub fn resolve(name: &str) -> Option<PathBuf> {
    let path_var = env::var_os("PATH")?;
    resolve_in(env::split_paths(&path_var), name)
}

/// Locate `name` in an explicit list of directories, first hit wins.
///
/// Directories that cannot be read are skipped. Entries are matched by exact
/// name over a linear scan; directory listings are not assumed sorted.
pub fn resolve_in<I>(dirs: I, name: &str) -> Option<PathBuf>
where
    I: IntoIterator<Item = PathBuf>,
{
    for dir in dirs {
        let Ok(entries) = fs::read_dir(&dir) else {
            continue;
        };
        for entry in entries.flatten() {
            if entry.file_name().as_os_str() != OsStr::new(name) {
                continue;
            }
            let candidate = entry.path();
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// A regular file with any of the three execute permission bits set.
fn is_executable(path: &Path) -> bool {
    let Ok(meta) = fs::metadata(path) else {
        return false;
    };
    meta.is_file() && meta.permissions().mode() & 0o111 != 0
}
