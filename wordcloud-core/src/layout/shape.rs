// Shape estimation for word labels.
//
// There is no text measurement available to the layout, so the box of each
// label is estimated from its font size, character count and script.

use super::CloudConfig;

/// Which scripts a phrase is written in, as far as width estimation cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScriptClass {
    Cjk,
    Latin,
    Mixed,
    /// Neither CJK ideographs nor ASCII letters/digits (punctuation, emoji).
    Other,
}

impl ScriptClass {
    pub fn of(phrase: &str) -> Self {
        let has_cjk = phrase.chars().any(is_cjk_ideograph);
        let has_latin = phrase.chars().any(|c| c.is_ascii_alphanumeric());
        match (has_cjk, has_latin) {
            (true, true) => ScriptClass::Mixed,
            (true, false) => ScriptClass::Cjk,
            (false, true) => ScriptClass::Latin,
            (false, false) => ScriptClass::Other,
        }
    }

    /// Average glyph advance as a fraction of the font size.
    pub fn width_factor(self, cfg: &CloudConfig) -> f64 {
        match self {
            ScriptClass::Cjk => cfg.cjk_width_factor,
            ScriptClass::Mixed => cfg.mixed_width_factor,
            ScriptClass::Latin | ScriptClass::Other => cfg.latin_width_factor,
        }
    }
}

fn is_cjk_ideograph(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Visual weight and estimated footprint of one label.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WordShape {
    pub font_size: u32,
    pub opacity: f64,
    pub width_pct: f64,
    pub height_pct: f64,
}

/// Estimate font size, opacity and box size for a phrase.
///
/// `max_count` must be positive and at least `count`.
pub fn estimate(phrase: &str, count: u64, max_count: u64, cfg: &CloudConfig) -> WordShape {
    let ratio = count as f64 / max_count as f64;

    let font_size = (cfg.min_font_size + ratio.powf(cfg.font_curve) * cfg.font_size_range).round();
    let opacity = (cfg.min_opacity + ratio * (1.0 - cfg.min_opacity)).clamp(cfg.min_opacity, 1.0);

    // UTF-16 units: astral glyphs such as emoji render about two Latin letters wide
    let char_count = phrase.encode_utf16().count().max(1) as f64;
    let width_factor = ScriptClass::of(phrase).width_factor(cfg);
    let width_px = font_size * (char_count * width_factor);
    let height_px = font_size * cfg.line_height;

    WordShape {
        font_size: font_size as u32,
        opacity,
        width_pct: width_px / cfg.reference_size * 100.0,
        height_pct: height_px / cfg.reference_size * 100.0,
    }
}
