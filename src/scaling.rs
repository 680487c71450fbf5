//! Pure dimension math: scale resolution and derivative planning.
//!
//! All functions here are pure and testable without any I/O or pixel data.
//! Planning produces a list of [`Derivative`] values describing *what* to
//! generate; the [`imaging`](crate::imaging) backend does the pixel work and
//! [`placement`](crate::placement) decides where outputs land.

use crate::profile::{IOS_APP_ICON_SIZES, Profile};

/// Resolve a source dimension against a scale factor.
///
/// `max(1, round(dimension * factor))` — rounding is half-away-from-zero
/// (`f64::round`), never truncation, and the result is clamped to a 1px
/// floor so extreme downscales stay valid image dimensions.
///
/// # Examples
/// ```
/// # use densify::scaling::resolve_scale;
/// assert_eq!(resolve_scale(100, 2.0 / 3.0), 67);
/// assert_eq!(resolve_scale(2, 0.1), 1); // floor clamp
/// ```
pub fn resolve_scale(dimension: u32, factor: f64) -> u32 {
    let scaled = (dimension as f64 * factor).round() as u32;
    scaled.max(1)
}

/// A planned output: label plus exact target dimensions.
///
/// Labels are density buckets (`xxhdpi`), scale suffixes (`@2x`), or square
/// icon sizes (`29x29`) depending on the profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derivative {
    pub label: String,
    pub width: u32,
    pub height: u32,
}

/// Plan the ordered derivative set for a source image under a profile.
///
/// Scale-table profiles resolve width and height independently per axis —
/// if the source violates the platform's aspect assumptions the outputs
/// scale non-uniformly, which is accepted behavior, not an error. App-icon
/// mode ignores the source dimensions entirely and plans one square per
/// entry in [`IOS_APP_ICON_SIZES`].
///
/// `exclusions` names scale labels to skip; it only applies to scale-table
/// profiles (icon sizes are not individually excludable).
pub fn plan_derivatives(
    source: (u32, u32),
    profile: Profile,
    exclusions: &[String],
) -> Vec<Derivative> {
    let (source_w, source_h) = source;

    match profile {
        Profile::Android | Profile::IosScaleTable => profile
            .scales()
            .iter()
            .filter(|(label, _)| !exclusions.iter().any(|e| e == label))
            .map(|&(label, factor)| Derivative {
                label: label.to_string(),
                width: resolve_scale(source_w, factor),
                height: resolve_scale(source_h, factor),
            })
            .collect(),
        Profile::IosAppIcon => IOS_APP_ICON_SIZES
            .iter()
            .map(|&size| Derivative {
                label: format!("{size}x{size}"),
                width: size,
                height: size,
            })
            .collect(),
    }
}
