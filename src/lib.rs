//! # densify
//!
//! Batch-resize image assets for mobile resource pipelines. Point the tool
//! at a high-resolution master — an Android `xxxhdpi` drawable or an iOS
//! `@3x` asset — and it deterministically writes every lower-density
//! derivative the platform expects, into the locations the platform
//! expects them.
//!
//! # Architecture: Plan, Then Execute
//!
//! Derivative generation is split into a pure planning half and an
//! executing half:
//!
//! ```text
//! profile   →  which files qualify, which scale table applies
//! scaling   →  (label, width, height) plan from the source dimensions
//! placement →  destination path per derivative
//! imaging   →  decode / resize / encode behind the ImageBackend trait
//! process   →  drives the above per file and per folder
//! ```
//!
//! The planning side ([`scaling`], [`placement`], [`profile`]) is pure data
//! and pure functions, unit-testable without touching pixels or disk. The
//! executing side is reached through the [`imaging::ImageBackend`] trait,
//! so orchestration tests run against a recording mock and only the
//! backend's own tests encode real images.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | Platform profile data: scale tables, iOS app-icon sizes, eligibility gates |
//! | [`scaling`] | Dimension math: scale resolution and derivative planning |
//! | [`placement`] | Output path computation per platform convention |
//! | [`imaging`] | `ImageBackend` trait + pure-Rust `image`-crate backend |
//! | [`process`] | Per-file and per-folder orchestration, PNG conversion, exact resizes |
//! | [`output`] | CLI reporting: pure formatting + the quiet-flag `Console` |
//!
//! # Design Decisions
//!
//! ## Closed Profile Set
//!
//! Android and iOS are the only targets, so platform behavior is a
//! three-variant enum ([`profile::Profile`]) dispatched in one place, not
//! an extensible trait hierarchy. The scale tables and icon sizes are
//! compile-time constants — resource-density conventions are platform
//! facts, not user configuration.
//!
//! ## Exact Dimensions, Independent Axes
//!
//! Scale-table derivatives resolve width and height independently
//! (`max(1, round(dim * factor))` per axis) and icon derivatives are
//! always square, so the backend resizes to exact target dimensions with
//! no aspect fitting. A non-square icon source scales non-uniformly
//! without complaint; supplying square masters is the caller's contract.
//!
//! ## Per-File Failure Isolation
//!
//! A folder batch never dies on one bad file: each file's outcome is
//! independent, failures are reported with their path, and the batch
//! summary says what happened. Files are processed in parallel (rayon) —
//! safe because every file's derivative set writes disjoint paths.

pub mod imaging;
pub mod output;
pub mod placement;
pub mod process;
pub mod profile;
pub mod scaling;

#[cfg(test)]
pub(crate) mod test_helpers;
