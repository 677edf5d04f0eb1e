use crate::density::{SizeTable, HEADER_SIZES, ICON_SIZES};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use xcommon::Scaler;

/// A named step run against every build folder.
///
/// `check` decides whether the folder has what the step needs; `generate`
/// only runs when it does. A non-zero status from `generate` aborts the
/// whole run and becomes the process exit status.
pub trait Operation {
    fn name(&self) -> &str;

    fn check(&self, folder: &Path) -> bool;

    fn generate(&self, folder: &Path, target: &Path) -> Result<u8>;
}

/// Output file name for a resized image.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Variation {
    /// `{stem}_{tail}` where tail is the source name after its first underscore.
    Suffixed(&'static str),
    /// Pattern with `{}` replaced by the mode.
    Template(&'static str),
}

impl Variation {
    pub fn file_name(self, source: &str) -> String {
        match self {
            Self::Suffixed(stem) => format!("{}_{}", stem, tail(source)),
            Self::Template(pattern) => pattern.replace("{}", mode(source)),
        }
    }
}

/// Source file name after its first underscore.
fn tail(file: &str) -> &str {
    file.split_once('_').map(|(_, tail)| tail).unwrap_or(file)
}

/// Visual variant encoded in a source file name, `header_dark.png` is `dark`.
pub fn mode(file: &str) -> &str {
    let tail = tail(file);
    tail.split_once('.').map(|(mode, _)| mode).unwrap_or(tail)
}

/// Table driven resize step shared by headers and icons.
#[derive(Clone, Debug)]
pub struct AssetOperation {
    pub name: &'static str,
    /// Directory below the build's destination, e.g. `header`.
    pub kind: &'static str,
    /// Every file must exist for the operation to run. Each one is resized.
    pub files: &'static [&'static str],
    pub sizes: SizeTable,
    /// Bucket directory prefix, e.g. `drawable`.
    pub prefix: &'static str,
    pub variations: &'static [Variation],
    /// Extra names written only for the `foreground` mode.
    pub foreground: &'static [&'static str],
}

pub const HEADER: AssetOperation = AssetOperation {
    name: "Header",
    kind: "header",
    files: &["header_dark.png", "header_light.png"],
    sizes: HEADER_SIZES,
    prefix: "drawable",
    variations: &[
        Variation::Suffixed("custom_header"),
        Variation::Suffixed("yt_wordmark_header"),
        Variation::Suffixed("yt_premium_wordmark_header"),
    ],
    foreground: &[],
};

/// Header naming used by older asset trees.
pub const LEGACY_HEADER: AssetOperation = AssetOperation {
    variations: &[
        Variation::Suffixed("custom_header"),
        Variation::Suffixed("yt_workmark_header"),
        Variation::Suffixed("yt_premium_workmark_header"),
    ],
    ..HEADER
};

pub const ICON: AssetOperation = AssetOperation {
    name: "Icon",
    kind: "icon",
    files: &["logo_background.png", "logo_foreground.png"],
    sizes: ICON_SIZES,
    prefix: "mipmap",
    variations: &[
        Variation::Template("revanced_adaptive_{}_custom.png"),
        Variation::Template("adaptiveproduct_youtube_{}_color_108.png"),
    ],
    foreground: &["ic_launcher_round.png", "ic_launcher.png"],
};

impl AssetOperation {
    /// Destination of this operation for `folder`: `<target>/<build>/<kind>`.
    pub fn destination(&self, folder: &Path, target: &Path) -> Result<PathBuf> {
        let build = folder
            .file_stem()
            .ok_or_else(|| anyhow::anyhow!("invalid build folder {}", folder.display()))?;
        Ok(target.join(build).join(self.kind))
    }

    /// Every file name written into each bucket directory for `source`.
    pub fn outputs(&self, source: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .variations
            .iter()
            .map(|variation| variation.file_name(source))
            .collect();
        if mode(source) == "foreground" {
            names.extend(self.foreground.iter().map(|name| name.to_string()));
        }
        names
    }
}

impl Operation for AssetOperation {
    fn name(&self) -> &str {
        self.name
    }

    fn check(&self, folder: &Path) -> bool {
        for file in self.files {
            if !folder.join(file).is_file() {
                tracing::info!("missing required file: {}", file);
                return false;
            }
        }
        true
    }

    fn generate(&self, folder: &Path, target: &Path) -> Result<u8> {
        let destination = self.destination(folder, target)?;
        std::fs::create_dir_all(&destination)
            .with_context(|| format!("failed to create {}", destination.display()))?;

        for file in self.files {
            let scaler = Scaler::open(folder.join(file))?;
            let outputs = self.outputs(file);
            for (density, (width, height)) in self.sizes {
                let res = destination.join(density.res_dir(self.prefix));
                std::fs::create_dir_all(&res)
                    .with_context(|| format!("failed to create {}", res.display()))?;
                let scaled = scaler.resize(*width, *height);
                for name in &outputs {
                    scaled.save(res.join(name))?;
                }
            }
            tracing::info!("generated {} for mode: {}", self.kind, mode(file));
        }
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_from_file_name() {
        assert_eq!(mode("header_dark.png"), "dark");
        assert_eq!(mode("header_light.png"), "light");
        assert_eq!(mode("logo_foreground.png"), "foreground");
        assert_eq!(mode("logo_background.png"), "background");
        assert_eq!(mode("logo.png"), "logo");
        assert_eq!(mode("a_b_c.png"), "b_c");
    }

    #[test]
    fn header_outputs() {
        assert_eq!(
            HEADER.outputs("header_dark.png"),
            [
                "custom_header_dark.png",
                "yt_wordmark_header_dark.png",
                "yt_premium_wordmark_header_dark.png",
            ]
        );
    }

    #[test]
    fn legacy_header_outputs() {
        assert_eq!(
            LEGACY_HEADER.outputs("header_light.png"),
            [
                "custom_header_light.png",
                "yt_workmark_header_light.png",
                "yt_premium_workmark_header_light.png",
            ]
        );
        assert_eq!(LEGACY_HEADER.files, HEADER.files);
        assert_eq!(LEGACY_HEADER.kind, "header");
    }

    #[test]
    fn icon_outputs() {
        assert_eq!(
            ICON.outputs("logo_background.png"),
            [
                "revanced_adaptive_background_custom.png",
                "adaptiveproduct_youtube_background_color_108.png",
            ]
        );
        assert_eq!(
            ICON.outputs("logo_foreground.png"),
            [
                "revanced_adaptive_foreground_custom.png",
                "adaptiveproduct_youtube_foreground_color_108.png",
                "ic_launcher_round.png",
                "ic_launcher.png",
            ]
        );
    }

    #[test]
    fn destination_uses_build_stem() -> Result<()> {
        let dst = HEADER.destination(Path::new("imgs/myapp"), Path::new("assets"))?;
        assert_eq!(dst, Path::new("assets/myapp/header"));
        let dst = ICON.destination(Path::new("imgs/my.app"), Path::new("assets"))?;
        assert_eq!(dst, Path::new("assets/my/icon"));
        Ok(())
    }

    #[test]
    fn check_requires_every_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("header_dark.png"), b"")?;
        assert!(!HEADER.check(dir.path()));
        std::fs::write(dir.path().join("header_light.png"), b"")?;
        assert!(HEADER.check(dir.path()));
        assert!(!ICON.check(dir.path()));
        Ok(())
    }

    #[test]
    fn check_ignores_directories() -> Result<()> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("logo_background.png"), b"")?;
        std::fs::create_dir(dir.path().join("logo_foreground.png"))?;
        assert!(!ICON.check(dir.path()));
        Ok(())
    }
}
