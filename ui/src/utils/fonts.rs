//! Hangul glyphs for the Korean strings.
//!
//! egui's bundled fonts have no Hangul, so a font file is registered as the
//! last fallback of every text family when one is available.

use egui::{
    FontData, FontFamily,
    epaint::text::{FontInsert, FontPriority, InsertFontFamily},
};

/// Name the fallback font is registered under.
pub const HANGUL_FONT: &str = "hangul fallback";

pub fn install_hangul_font(ctx: &egui::Context, font_data: Vec<u8>) {
    let families = [FontFamily::Proportional, FontFamily::Monospace]
        .into_iter()
        .map(|family| InsertFontFamily {
            family,
            priority: FontPriority::Lowest,
        })
        .collect();

    ctx.add_font(FontInsert::new(
        HANGUL_FONT,
        FontData::from_owned(font_data),
        families,
    ));
}

/// Reads a font file, logging and skipping it when it cannot be read.
#[cfg(not(target_arch = "wasm32"))]
pub fn read_font_file(path: &str) -> Option<Vec<u8>> {
    match std::fs::read(path) {
        Ok(data) if data.is_empty() => {
            log::warn!("Font file {path} is empty");
            None
        }
        Ok(data) => Some(data),
        Err(err) => {
            log::warn!("Failed to read font {path}: {err}");
            None
        }
    }
}
