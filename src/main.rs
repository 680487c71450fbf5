use clap::Parser;
use densify::imaging::RustBackend;
use densify::output::Console;
use densify::process::{self, FileOutcome, ProcessError};
use densify::profile::Profile;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "densify")]
#[command(version)]
#[command(about = "Batch-resize image assets for iOS and Android resource pipelines")]
#[command(long_about = "\
Batch-resize image assets for iOS and Android resource pipelines

Point densify at a high-resolution master and it writes every lower-density
derivative the platform expects:

  densify -a --folder res/drawable-xxxhdpi
      res/drawable-xxhdpi/icon.png     3/4 scale
      res/drawable-xhdpi/icon.png      1/2 scale
      res/drawable-hdpi/icon.png       3/8 scale
      res/drawable-mdpi/icon.png       1/4 scale

  densify -i --file assets/icon@3x.png
      assets/icon@2x.png               2/3 scale
      assets/icon@1x.png               1/3 scale

  densify -i --app-icon --file art/logo.png
      art/logo-29x29.png ... art/logo-180x180.png

Only .png and .jpg files are touched; Android NinePatch files (*.9.png) are
never resized. In iOS mode only files with @3x in the name are picked up,
unless --app-icon bypasses that gate.

Two platform-independent modes exist alongside derivative generation:
--pngconv re-encodes the target(s) as PNG, and --resize WxH scales the
target(s) to an exact size in place.")]
struct Cli {
    /// Scale images for Android projects (expects an xxxhdpi source)
    #[arg(short = 'a', long = "android")]
    android: bool,

    /// Scale images for iOS projects (expects @3x sources)
    #[arg(short = 'i', long = "ios")]
    ios: bool,

    /// Process a single file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Process every image in a folder
    #[arg(long, value_name = "PATH")]
    folder: Option<PathBuf>,

    /// Scale labels to skip (e.g. xhdpi, @1x); repeatable
    #[arg(long = "exclude-scale", value_name = "LABEL", num_args = 1..)]
    exclude_scale: Vec<String>,

    /// Resize target(s) to an exact WxH instead of generating derivatives
    #[arg(long, value_name = "WxH")]
    resize: Option<String>,

    /// Convert target(s) to PNG format and exit
    #[arg(long = "pngconv")]
    png_convert: bool,

    /// Generate the fixed iOS app-icon sizes (bypasses the @3x name gate)
    #[arg(long = "app-icon")]
    app_icon: bool,

    /// Silence all output except errors
    #[arg(long)]
    silence: bool,
}

/// Which target the invocation names: one file or one folder.
enum Scope<'a> {
    File(&'a Path),
    Folder(&'a Path),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let console = Console::new(cli.silence);
    let backend = RustBackend::new();

    match run(&cli, &backend, &console) {
        Ok(code) => code,
        Err(UserError(message)) => {
            console.error(&message);
            ExitCode::from(2)
        }
    }
}

/// A bad invocation: reported as a plain message, exits 2, never a crash.
#[derive(Debug)]
struct UserError(String);

impl From<&str> for UserError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

fn run(cli: &Cli, backend: &RustBackend, console: &Console) -> Result<ExitCode, UserError> {
    let scope = select_scope(cli)?;

    // PNG conversion and exact resize are platform-independent; each runs
    // and exits without consulting -a / -i.
    if cli.png_convert {
        console.info("Converting file(s) to PNG.");
        return Ok(match scope {
            Scope::File(path) => {
                let (dir, name) = split_file_arg(path)?;
                single_file_exit(process::convert_file(backend, console, dir, name), console)
            }
            Scope::Folder(dir) => {
                batch_exit(process::convert_folder(backend, console, dir), console)
            }
        });
    }

    if let Some(spec) = &cli.resize {
        let (width, height) = parse_dimensions(spec)?;
        console.info(&format!("Resizing file(s) to {width}x{height}"));
        return Ok(match scope {
            Scope::File(path) => {
                let (dir, name) = split_file_arg(path)?;
                single_file_exit(
                    process::resize_file_exact(backend, console, dir, name, width, height),
                    console,
                )
            }
            Scope::Folder(dir) => batch_exit(
                process::resize_folder_exact(backend, console, dir, width, height),
                console,
            ),
        });
    }

    let profile = select_profile(cli)?;
    Ok(match scope {
        Scope::File(path) => {
            let (dir, name) = split_file_arg(path)?;
            single_file_exit(
                process::process_file(backend, console, dir, name, profile, &cli.exclude_scale),
                console,
            )
        }
        Scope::Folder(dir) => batch_exit(
            process::process_folder(backend, console, dir, profile, &cli.exclude_scale),
            console,
        ),
    })
}

fn select_scope(cli: &Cli) -> Result<Scope<'_>, UserError> {
    match (&cli.file, &cli.folder) {
        (Some(file), None) => Ok(Scope::File(file)),
        (None, Some(folder)) => Ok(Scope::Folder(folder)),
        (Some(_), Some(_)) => Err("Specify either --file or --folder, not both.".into()),
        (None, None) => Err("Must specify --file or --folder to process.".into()),
    }
}

fn select_profile(cli: &Cli) -> Result<Profile, UserError> {
    match (cli.android, cli.ios) {
        (true, false) if cli.app_icon => {
            Err("--app-icon only applies to iOS; use it with -i.".into())
        }
        (true, false) => Ok(Profile::Android),
        (false, true) if cli.app_icon => Ok(Profile::IosAppIcon),
        (false, true) => Ok(Profile::IosScaleTable),
        (true, true) => Err("Specify one platform: -i for iOS or -a for Android.".into()),
        (false, false) => {
            Err("Must specify a platform to perform actions with: -i or -a.".into())
        }
    }
}

/// Split a `--file` argument into its directory and file name.
fn split_file_arg(path: &Path) -> Result<(&Path, &str), UserError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| UserError(format!("Not a file path: {}", path.display())))?;
    Ok((path.parent().unwrap_or(Path::new("")), name))
}

/// Parse a `WxH` dimension spec like `120x80`.
fn parse_dimensions(spec: &str) -> Result<(u32, u32), UserError> {
    let parse = |part: &str| {
        part.parse::<u32>()
            .map_err(|_| UserError(format!("Invalid dimensions '{spec}', expected WxH.")))
    };
    let (w, h) = spec
        .split_once('x')
        .ok_or_else(|| UserError(format!("Invalid dimensions '{spec}', expected WxH.")))?;
    Ok((parse(w)?, parse(h)?))
}

fn single_file_exit(result: Result<FileOutcome, ProcessError>, console: &Console) -> ExitCode {
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            console.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn batch_exit(
    result: Result<process::BatchSummary, ProcessError>,
    console: &Console,
) -> ExitCode {
    match result {
        Ok(summary) if summary.failed == 0 => ExitCode::SUCCESS,
        // Per-file failures were already reported; signal partial failure.
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            console.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("densify").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parse_dimensions_accepts_wxh() {
        assert_eq!(parse_dimensions("120x80").unwrap().0, 120);
        assert_eq!(parse_dimensions("120x80").unwrap().1, 80);
    }

    #[test]
    fn parse_dimensions_rejects_malformed_input() {
        assert!(parse_dimensions("120").is_err());
        assert!(parse_dimensions("x80").is_err());
        assert!(parse_dimensions("120x").is_err());
        assert!(parse_dimensions("axb").is_err());
        assert!(parse_dimensions("120X80").is_err());
    }

    #[test]
    fn platform_selection() {
        assert_eq!(
            select_profile(&cli(&["-a", "--file", "x.png"])).unwrap(),
            Profile::Android
        );
        assert_eq!(
            select_profile(&cli(&["-i", "--file", "x.png"])).unwrap(),
            Profile::IosScaleTable
        );
        assert_eq!(
            select_profile(&cli(&["-i", "--app-icon", "--file", "x.png"])).unwrap(),
            Profile::IosAppIcon
        );
    }

    #[test]
    fn missing_platform_is_a_user_error() {
        assert!(select_profile(&cli(&["--file", "x.png"])).is_err());
        assert!(select_profile(&cli(&["-a", "-i", "--file", "x.png"])).is_err());
        assert!(select_profile(&cli(&["-a", "--app-icon", "--file", "x.png"])).is_err());
    }

    #[test]
    fn missing_scope_is_a_user_error() {
        assert!(select_scope(&cli(&["-a"])).is_err());
        assert!(select_scope(&cli(&["-a", "--file", "a.png", "--folder", "b"])).is_err());
    }

    #[test]
    fn split_file_arg_handles_bare_names() {
        let (dir, name) = split_file_arg(Path::new("icon.png")).unwrap();
        assert_eq!(dir, Path::new(""));
        assert_eq!(name, "icon.png");

        let (dir, name) = split_file_arg(Path::new("res/drawable-xxxhdpi/icon.png")).unwrap();
        assert_eq!(dir, Path::new("res/drawable-xxxhdpi"));
        assert_eq!(name, "icon.png");
    }
}
