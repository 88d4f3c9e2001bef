use std::sync::OnceLock;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use rust_embed::RustEmbed;
use tracing::warn;

/// Stylesheets and icons compiled into the binary from `assets/`.
#[derive(RustEmbed)]
#[folder = "assets"]
struct EmbeddedAssets;

/// Files the page shell injects. A missing file degrades to empty content.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SiteAsset {
    MainCss,
    /// Generated by the Tailwind step of `dx`; absent in a plain checkout.
    TailwindCss,
    Favicon,
}

impl SiteAsset {
    fn path(self) -> &'static str {
        match self {
            SiteAsset::MainCss => "main.css",
            SiteAsset::TailwindCss => "tailwind.css",
            SiteAsset::Favicon => "favicon.svg",
        }
    }

    fn bytes(self) -> Vec<u8> {
        match EmbeddedAssets::get(self.path()) {
            Some(file) => file.data.into_owned(),
            None => {
                warn!(asset = self.path(), "Embedded asset is missing");
                Vec::new()
            }
        }
    }

    fn text(self) -> String {
        String::from_utf8(self.bytes()).unwrap_or_else(|_| {
            warn!(asset = self.path(), "Embedded asset is not valid UTF-8; skipping");
            String::new()
        })
    }
}

static MAIN_CSS: OnceLock<String> = OnceLock::new();
static TAILWIND_CSS: OnceLock<String> = OnceLock::new();
static FAVICON: OnceLock<String> = OnceLock::new();

pub fn main_css() -> &'static str {
    MAIN_CSS.get_or_init(|| SiteAsset::MainCss.text())
}

pub fn tailwind_css() -> &'static str {
    TAILWIND_CSS.get_or_init(|| SiteAsset::TailwindCss.text())
}

pub fn favicon_data_uri() -> &'static str {
    FAVICON.get_or_init(|| {
        let encoded = STANDARD.encode(SiteAsset::Favicon.bytes());
        format!("data:image/svg+xml;base64,{encoded}")
    })
}
