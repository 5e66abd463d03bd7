use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::bitmap::Bitmap;
use crate::error::ExportError;

/// Force a `.png` extension onto `path`.
///
/// The suffix is appended rather than substituted, so `shot.jpg` becomes
/// `shot.jpg.png`.
pub fn png_path(path: &Path) -> PathBuf {
    let has_png = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if has_png {
        return path.to_path_buf();
    }
    let mut name = OsString::from(path.as_os_str());
    name.push(".png");
    PathBuf::from(name)
}

/// Encode `bitmap` as PNG at `path` (extension forced), returning where it went
pub fn export_png(bitmap: &Bitmap, path: &Path) -> Result<PathBuf, ExportError> {
    let path = png_path(path);
    bitmap.save_png(&path)?;
    log::info!(
        "Saved {}x{} image to {}",
        bitmap.width(),
        bitmap.height(),
        path.display()
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_path_appends_extension() {
        assert_eq!(png_path(Path::new("out")), PathBuf::from("out.png"));
        assert_eq!(png_path(Path::new("dir/out.png")), PathBuf::from("dir/out.png"));
        assert_eq!(png_path(Path::new("OUT.PNG")), PathBuf::from("OUT.PNG"));
        assert_eq!(png_path(Path::new("shot.jpg")), PathBuf::from("shot.jpg.png"));
    }
}
