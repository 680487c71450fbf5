//! Platform profiles: the fixed scale tables and file-eligibility rules.
//!
//! A profile is compile-time data, not configuration. Android resizes an
//! `xxxhdpi` source down through the density buckets; iOS resizes an `@3x`
//! source down to `@2x`/`@1x`, or — in app-icon mode — renders the fixed
//! list of square icon sizes Apple requires.
//!
//! The three variants are a closed set: dispatch switches on [`Profile`]
//! rather than growing an open-ended hierarchy for two platforms.

use std::path::Path;

/// Target platform and generation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Android density buckets, derived from an `xxxhdpi` source.
    Android,
    /// iOS `@2x`/`@1x` variants, derived from an `@3x` source.
    IosScaleTable,
    /// iOS app icons: fixed square sizes, source aspect ratio ignored.
    IosAppIcon,
}

/// Density-bucket factors relative to an `xxxhdpi` source.
pub const ANDROID_SCALES: &[(&str, f64)] = &[
    ("xxhdpi", 3.0 / 4.0),
    ("xhdpi", 2.0 / 4.0),
    ("hdpi", 1.5 / 4.0),
    ("mdpi", 1.0 / 4.0),
];

/// Scale-suffix factors relative to an `@3x` source.
pub const IOS_SCALES: &[(&str, f64)] = &[("@2x", 2.0 / 3.0), ("@1x", 1.0 / 3.0)];

/// Square icon sizes (points × scale already applied) covering iPhone and
/// iPad home screen, spotlight, and settings contexts.
pub const IOS_APP_ICON_SIZES: &[u32] = &[29, 40, 58, 76, 80, 87, 120, 152, 167, 180];

/// Extensions the tool will decode and re-encode.
const ACCEPTED_EXTENSIONS: &[&str] = &["png", "jpg"];

/// Android NinePatch marker. Pre-sliced stretchable assets must never be
/// resized, so they are excluded from derivative generation outright.
const NINE_PATCH_SUFFIX: &str = ".9.png";

impl Profile {
    /// The `(label, factor)` table driving scale-table generation.
    ///
    /// Empty for [`Profile::IosAppIcon`], which plans from
    /// [`IOS_APP_ICON_SIZES`] instead.
    pub fn scales(self) -> &'static [(&'static str, f64)] {
        match self {
            Profile::Android => ANDROID_SCALES,
            Profile::IosScaleTable => IOS_SCALES,
            Profile::IosAppIcon => &[],
        }
    }

    /// Human-readable platform name for log lines.
    pub fn name(self) -> &'static str {
        match self {
            Profile::Android => "Android",
            Profile::IosScaleTable => "iOS",
            Profile::IosAppIcon => "iOS app icon",
        }
    }

    /// Whether a file should enter derivative generation under this profile.
    ///
    /// All profiles require an accepted extension and reject NinePatch
    /// files. The iOS scale table additionally requires an `@3x` stem so
    /// only the high-resolution master is picked up; app-icon mode bypasses
    /// that gate (the caller names the icon source explicitly).
    pub fn selects(self, file_name: &str) -> bool {
        if !has_accepted_extension(file_name) || is_nine_patch(file_name) {
            return false;
        }
        match self {
            Profile::Android | Profile::IosAppIcon => true,
            Profile::IosScaleTable => Path::new(file_name)
                .file_stem()
                .and_then(|s| s.to_str())
                .is_some_and(|stem| stem.contains("@3x")),
        }
    }
}

/// Whether the extension is one the tool decodes (`.png`, `.jpg`).
pub fn has_accepted_extension(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| ext.eq_ignore_ascii_case(accepted))
        })
}

/// Whether the file is an Android NinePatch (`*.9.png`).
pub fn is_nine_patch(file_name: &str) -> bool {
    file_name
        .to_ascii_lowercase()
        .ends_with(NINE_PATCH_SUFFIX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn android_table_order_and_factors() {
        let labels: Vec<&str> = ANDROID_SCALES.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["xxhdpi", "xhdpi", "hdpi", "mdpi"]);
        assert_eq!(ANDROID_SCALES[0].1, 0.75);
        assert_eq!(ANDROID_SCALES[2].1, 0.375);
    }

    #[test]
    fn ios_table_order() {
        let labels: Vec<&str> = IOS_SCALES.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["@2x", "@1x"]);
    }

    #[test]
    fn app_icon_sizes_are_ascending_and_complete() {
        assert_eq!(
            IOS_APP_ICON_SIZES,
            &[29, 40, 58, 76, 80, 87, 120, 152, 167, 180]
        );
        assert!(IOS_APP_ICON_SIZES.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn accepted_extensions() {
        assert!(has_accepted_extension("icon.png"));
        assert!(has_accepted_extension("photo.jpg"));
        assert!(has_accepted_extension("SHOUTY.PNG"));
        assert!(!has_accepted_extension("photo.jpeg"));
        assert!(!has_accepted_extension("vector.svg"));
        assert!(!has_accepted_extension("no_extension"));
    }

    #[test]
    fn nine_patch_detection() {
        assert!(is_nine_patch("button.9.png"));
        assert!(is_nine_patch("Button.9.PNG"));
        assert!(!is_nine_patch("button.png"));
        assert!(!is_nine_patch("button9.png"));
    }

    #[test]
    fn android_selects_plain_images_but_not_nine_patch() {
        assert!(Profile::Android.selects("icon.png"));
        assert!(Profile::Android.selects("photo.jpg"));
        assert!(!Profile::Android.selects("button.9.png"));
        assert!(!Profile::Android.selects("notes.txt"));
    }

    #[test]
    fn ios_scale_table_requires_3x_stem() {
        assert!(Profile::IosScaleTable.selects("icon@3x.png"));
        assert!(Profile::IosScaleTable.selects("hero@3x.jpg"));
        assert!(!Profile::IosScaleTable.selects("logo.png"));
        assert!(!Profile::IosScaleTable.selects("icon@2x.png"));
    }

    #[test]
    fn app_icon_mode_bypasses_3x_gate() {
        assert!(Profile::IosAppIcon.selects("logo.png"));
        assert!(!Profile::IosAppIcon.selects("logo.9.png"));
        assert!(!Profile::IosAppIcon.selects("logo.gif"));
    }
}
