//! Desktop launcher for the running executable.
//!
//! The launcher is rewritten on every start; an existing one is overwritten.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Display name of the launcher.
pub const SHORTCUT_NAME: &str = "ZIP Extractor";

/// Create a launcher for the current executable on the user's desktop.
///
/// Returns the path of the launcher file.
pub fn create_app_shortcut() -> io::Result<PathBuf> {
    let target = std::env::current_exe()?;
    let desktop = dirs::desktop_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no desktop directory"))?;

    create_shortcut(&target, &desktop)
}

/// Create a launcher in `desktop_dir` that starts `target`.
#[cfg(all(unix, not(target_os = "macos")))]
pub fn create_shortcut(target: &Path, desktop_dir: &Path) -> io::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let path = desktop_dir.join("zip-extractor.desktop");
    fs::write(&path, desktop_entry(target))?;
    // File managers only launch entries marked executable
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

/// Create a launcher in `desktop_dir` that starts `target`.
#[cfg(target_os = "macos")]
pub fn create_shortcut(target: &Path, desktop_dir: &Path) -> io::Result<PathBuf> {
    let path = desktop_dir.join(SHORTCUT_NAME);
    if fs::symlink_metadata(&path).is_ok() {
        fs::remove_file(&path)?;
    }
    std::os::unix::fs::symlink(target, &path)?;
    Ok(path)
}

/// Create a launcher in `desktop_dir` that starts `target`.
#[cfg(windows)]
pub fn create_shortcut(target: &Path, desktop_dir: &Path) -> io::Result<PathBuf> {
    let path = desktop_dir.join(format!("{}.url", SHORTCUT_NAME));
    fs::write(&path, internet_shortcut(target))?;
    Ok(path)
}

#[cfg(not(any(unix, windows)))]
pub fn create_shortcut(_target: &Path, _desktop_dir: &Path) -> io::Result<PathBuf> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "desktop shortcuts are not supported on this platform",
    ))
}

/// Contents of a freedesktop.org desktop entry launching `target`.
pub fn desktop_entry(target: &Path) -> String {
    let directory = target.parent().unwrap_or(Path::new("/"));
    format!(
        "[Desktop Entry]\n\
         Type=Application\n\
         Name={name}\n\
         Comment=Extract ZIP archives from Downloads\n\
         Exec=\"{exec}\"\n\
         Path={dir}\n\
         Icon=package-x-generic\n\
         Terminal=false\n\
         Categories=Utility;Archiving;\n",
        name = SHORTCUT_NAME,
        exec = target.display(),
        dir = directory.display(),
    )
}

/// Contents of a Windows internet shortcut pointing at `target`.
pub fn internet_shortcut(target: &Path) -> String {
    let url = target.display().to_string().replace('\\', "/");
    format!(
        "[InternetShortcut]\r\nURL=file:///{url}\r\nIconFile={icon}\r\nIconIndex=0\r\n",
        url = url.trim_start_matches('/'),
        icon = target.display(),
    )
}
