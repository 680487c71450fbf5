//! Output path computation for generated derivatives.
//!
//! Pure path math — directory creation and writing happen in
//! [`process`](crate::process). Each profile has its own placement
//! convention:
//!
//! ```text
//! Android    res/drawable-xxxhdpi/icon.png → res/drawable-xhdpi/icon.png
//! iOS        assets/icon@3x.png            → assets/icon@2x.png
//! iOS icon   assets/logo.png               → assets/logo-29x29.png
//! ```

use crate::profile::Profile;
use std::path::{Path, PathBuf};

/// Compute the destination path for one derivative of `file_name`.
///
/// Android outputs land in a sibling `drawable-<label>` bucket with the
/// file name unchanged; iOS outputs land next to the source. For the iOS
/// scale table the first `@3x` occurrence is removed from the stem and the
/// scale label appended; icon outputs append `-<size>x<size>`.
pub fn derivative_path(
    input_dir: &Path,
    file_name: &str,
    profile: Profile,
    label: &str,
) -> PathBuf {
    match profile {
        Profile::Android => input_dir
            .join("..")
            .join(format!("drawable-{label}"))
            .join(file_name),
        Profile::IosScaleTable => {
            let (stem, ext) = split_name(file_name);
            let stripped = stem.replacen("@3x", "", 1);
            input_dir.join(format!("{stripped}{label}{ext}"))
        }
        Profile::IosAppIcon => {
            let (stem, ext) = split_name(file_name);
            input_dir.join(format!("{stem}-{label}{ext}"))
        }
    }
}

/// Destination for a PNG conversion: `<stem>.png` next to the input.
///
/// A `.png` input maps onto itself, so conversion re-encodes in place.
pub fn converted_png_path(input_dir: &Path, file_name: &str) -> PathBuf {
    let (stem, _) = split_name(file_name);
    input_dir.join(format!("{stem}.png"))
}

/// Split a file name into `(stem, extension-with-dot)`.
///
/// Splits on the last dot, mirroring `Path::file_stem`; a name with no dot
/// yields an empty extension.
fn split_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_bucket_keeps_file_name() {
        let path = derivative_path(
            Path::new("res/drawable-xxxhdpi"),
            "icon.png",
            Profile::Android,
            "xhdpi",
        );
        assert_eq!(path, Path::new("res/drawable-xxxhdpi/../drawable-xhdpi/icon.png"));
    }

    #[test]
    fn android_bucket_from_bare_directory() {
        let path = derivative_path(Path::new(""), "icon.png", Profile::Android, "mdpi");
        assert_eq!(path, Path::new("../drawable-mdpi/icon.png"));
    }

    #[test]
    fn ios_strips_3x_and_appends_label() {
        let path = derivative_path(
            Path::new("assets"),
            "icon@3x.png",
            Profile::IosScaleTable,
            "@2x",
        );
        assert_eq!(path, Path::new("assets/icon@2x.png"));
    }

    #[test]
    fn ios_strips_first_3x_occurrence_only() {
        let path = derivative_path(
            Path::new("assets"),
            "icon@3x@3x.png",
            Profile::IosScaleTable,
            "@1x",
        );
        assert_eq!(path, Path::new("assets/icon@3x@1x.png"));
    }

    #[test]
    fn ios_jpg_extension_preserved() {
        let path = derivative_path(
            Path::new("assets"),
            "hero@3x.jpg",
            Profile::IosScaleTable,
            "@2x",
        );
        assert_eq!(path, Path::new("assets/hero@2x.jpg"));
    }

    #[test]
    fn app_icon_appends_size_label() {
        let path = derivative_path(Path::new("art"), "logo.png", Profile::IosAppIcon, "29x29");
        assert_eq!(path, Path::new("art/logo-29x29.png"));
    }

    #[test]
    fn app_icon_largest_size() {
        let path = derivative_path(Path::new("art"), "logo.png", Profile::IosAppIcon, "180x180");
        assert_eq!(path, Path::new("art/logo-180x180.png"));
    }

    #[test]
    fn converted_png_replaces_extension() {
        let path = converted_png_path(Path::new("photos"), "shot.jpg");
        assert_eq!(path, Path::new("photos/shot.png"));
    }

    #[test]
    fn converted_png_of_png_maps_onto_itself() {
        let path = converted_png_path(Path::new("photos"), "shot.png");
        assert_eq!(path, Path::new("photos/shot.png"));
    }

    #[test]
    fn split_name_edge_cases() {
        assert_eq!(split_name("a.png"), ("a", ".png"));
        assert_eq!(split_name("archive.9.png"), ("archive.9", ".png"));
        assert_eq!(split_name("noext"), ("noext", ""));
        assert_eq!(split_name(".hidden"), (".hidden", ""));
    }
}
