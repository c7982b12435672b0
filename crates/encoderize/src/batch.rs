//! Rendering every encoding of a text in both themes.
//!
//! Output lands in `<root>/output_<text>/{light,dark}/<short_name>_<text>.svg`.
//! The text is used verbatim in paths; characters the filesystem rejects
//! surface as [Error::Io].

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{Config, Encoding, Error, Theme, save};

/// Directory holding both theme folders for a text.
pub fn output_dir(root: &Path, text: &str) -> PathBuf {
    root.join(format!("output_{text}"))
}

/// Directory for one theme's files.
pub fn theme_dir(root: &Path, text: &str, theme: Theme) -> PathBuf {
    output_dir(root, text).join(theme.name())
}

/// File name for one encoding of a text.
pub fn file_name(encoding: Encoding, text: &str) -> String {
    format!("{}_{text}.svg", encoding.short_name())
}

fn create_dir(path: PathBuf) -> Result<PathBuf, Error> {
    fs::create_dir_all(&path).map_err(|source| Error::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Create the light and dark folders, returning the folder holding both.
pub fn prepare(root: &Path, text: &str) -> Result<PathBuf, Error> {
    for theme in Theme::ALL {
        create_dir(theme_dir(root, text, theme))?;
    }
    Ok(output_dir(root, text))
}

/// Render every encoding in one theme, stopping at the first failure.
pub fn render_theme(text: &str, theme: Theme, config: &Config) -> Result<Vec<PathBuf>, Error> {
    let dir = create_dir(theme_dir(&config.output.root, text, theme))?;
    let palette = config.palette(theme);

    info!("rendering {} encodings in {theme} mode", Encoding::ALL.len());

    let mut written = Vec::with_capacity(Encoding::ALL.len());
    for encoding in Encoding::ALL {
        let canvas = config
            .encoders
            .encode(encoding, text, &palette)
            .map_err(|source| Error::Encode {
                encoding,
                theme,
                source,
            })?;

        let path = dir.join(file_name(encoding, text));
        save(&path, &canvas).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;

        debug!(
            "wrote {} ({}x{}, {} shapes)",
            path.display(),
            canvas.width,
            canvas.height,
            canvas.shapes.len()
        );
        written.push(path);
    }

    Ok(written)
}

/// Files written by [render_all].
#[derive(Debug, Clone)]
pub struct Report {
    /// `output_<text>` folder
    pub base: PathBuf,
    pub files: Vec<PathBuf>,
}

/// Render every encoding in the light theme, then in the dark theme.
pub fn render_all(text: &str, config: &Config) -> Result<Report, Error> {
    render_all_with(text, config, |_| {})
}

/// Like [render_all], calling `on_theme` before each theme is rendered.
pub fn render_all_with(
    text: &str,
    config: &Config,
    mut on_theme: impl FnMut(Theme),
) -> Result<Report, Error> {
    let base = prepare(&config.output.root, text)?;

    let mut files = Vec::new();
    for theme in Theme::ALL {
        on_theme(theme);
        files.extend(render_theme(text, theme, config)?);
    }

    info!("{} files written under {}", files.len(), base.display());
    Ok(Report { base, files })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_paths() {
        let root = Path::new("renders");
        assert_eq!(
            theme_dir(root, "Go", Theme::Dark),
            Path::new("renders/output_Go/dark")
        );
        assert_eq!(
            file_name(Encoding::Code128Barcode, "Go"),
            "code128_barcode_Go.svg"
        );
    }
}
