// Word cloud layout.
//
// Goals:
// - Deterministic: jitter is a pure function of (rank, attempt), never a stateful RNG
// - Analytic sizing: no glyph measurement, boxes are estimated from the phrase
// - Greedy by rank: the most frequent phrase takes the centre, the rest spiral out
// - No overlap (padded boxes), everything inside the canvas circle
// - Silent drops: a word that cannot be placed within its attempt budget is skipped
//
// Submodules:
// - shape: font size / opacity / box estimation
// - occupancy: spatial hash over placed boxes for collision queries
// - spiral_placement: the sunflower spiral search
//
// Output:
// - PlacedItem list in placement order, in percentages of a 100x100 canvas.

use serde::{Deserialize, Serialize};

use crate::error::CloudError;

mod occupancy;
mod shape;
mod spiral_placement;

pub use shape::{estimate, ScriptClass, WordShape};
pub use spiral_placement::{place, seeded_random};

/// A phrase with its occurrence count, as aggregated by the report backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub phrase: String,
    pub count: u64,
}

impl WordFrequency {
    pub fn new(phrase: impl Into<String>, count: u64) -> Self {
        Self { phrase: phrase.into(), count }
    }
}

/// A word together with its position in the descending-count ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub rank: usize,
    pub phrase: String,
    pub count: u64,
}

/// A ranked word with its estimated shape, ready for placement.
#[derive(Debug, Clone, PartialEq)]
pub struct SizedWord {
    pub rank: usize,
    pub phrase: String,
    pub count: u64,
    pub shape: WordShape,
}

/// A word that made it onto the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedItem {
    pub phrase: String,
    pub count: u64,
    pub rank: usize,
    /// Centre, in percent of the canvas.
    pub x: f64,
    pub y: f64,
    pub font_size: u32,
    pub opacity: f64,
    pub width_pct: f64,
    pub height_pct: f64,
    /// Entrance animation delay in seconds, by placement order.
    pub delay: f64,
}

impl PlacedItem {
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center(self.x, self.y, self.width_pct, self.height_pct)
    }
}

/// Axis-aligned box in canvas percentage units.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_center(x: f64, y: f64, w: f64, h: f64) -> Self {
        let half_w = w / 2.0;
        let half_h = h / 2.0;
        Self {
            min_x: x - half_w,
            min_y: y - half_h,
            max_x: x + half_w,
            max_y: y + half_h,
        }
    }

    pub fn inflate(&self, pad: f64) -> Self {
        Self {
            min_x: self.min_x - pad,
            min_y: self.min_y - pad,
            max_x: self.max_x + pad,
            max_y: self.max_y + pad,
        }
    }

    /// Strict overlap: boxes that only touch along an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min_x < other.max_x
            && self.max_x > other.min_x
            && self.min_y < other.max_y
            && self.max_y > other.min_y
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CloudConfig {
    /// How many of the most frequent words are considered at all.
    pub limit: usize,
    /// Reference canvas edge in px used to turn estimated px into percent.
    pub reference_size: f64,

    pub min_font_size: f64,
    pub font_size_range: f64,
    /// Exponent of the ratio -> font size curve (< 1 keeps small words legible).
    pub font_curve: f64,
    pub min_opacity: f64,

    /// Per-character width as a fraction of the font size.
    pub cjk_width_factor: f64,
    pub latin_width_factor: f64,
    pub mixed_width_factor: f64,
    pub line_height: f64,

    /// Trial budget for every word after the first.
    pub attempts: usize,
    /// Spiral parameter advance per failed trial.
    pub spiral_step: f64,
    pub radius_scale: f64,
    pub golden_angle: f64,
    /// Full width of the radius jitter band, centred on zero.
    pub radius_jitter: f64,
    pub angle_jitter: f64,

    pub canvas_radius: f64,
    /// Margin added on every side of a candidate before the overlap test.
    pub padding: f64,
    /// Seconds between consecutive entrance animations.
    pub delay_step: f64,
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            limit: 32,
            reference_size: 520.0,
            min_font_size: 12.0,
            font_size_range: 20.0,
            font_curve: 0.65,
            min_opacity: 0.35,
            cjk_width_factor: 0.98,
            latin_width_factor: 0.6,
            mixed_width_factor: 0.85,
            line_height: 1.1,
            attempts: 420,
            spiral_step: 0.28,
            radius_scale: 7.6,
            golden_angle: 2.399963,
            radius_jitter: 1.2,
            angle_jitter: 0.35,
            canvas_radius: 49.0,
            padding: 1.8,
            delay_step: 0.04,
        }
    }
}

impl CloudConfig {
    /// Most words a single layout will consider.
    pub const MAX_LIMIT: usize = 32;
    /// Most trials a single word may spend on the spiral.
    pub const MAX_ATTEMPTS: usize = 420;

    /// Cap the search budget so that caller-supplied settings cannot make a
    /// layout run unbounded. Overrides may shrink the budget, never grow it.
    pub fn clamped(self) -> Self {
        Self {
            limit: self.limit.min(Self::MAX_LIMIT),
            attempts: self.attempts.min(Self::MAX_ATTEMPTS),
            ..self
        }
    }
}

/// Canvas centre, in percent.
pub const CENTER: f64 = 50.0;

/// Sort by descending count and keep the first `limit` words.
/// The sort is stable, so ties keep the caller's order.
pub fn rank_words(words: &[WordFrequency], limit: usize) -> Vec<RankedWord> {
    let mut sorted: Vec<&WordFrequency> = words.iter().collect();
    sorted.sort_by(|a, b| b.count.cmp(&a.count));

    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(rank, w)| RankedWord {
            rank,
            phrase: w.phrase.clone(),
            count: w.count,
        })
        .collect()
}

/// Attach estimated shapes to ranked words. `ranked` must be non-empty with a
/// non-zero top count.
fn size_words(ranked: Vec<RankedWord>, cfg: &CloudConfig) -> Vec<SizedWord> {
    let max_count = ranked.first().map(|w| w.count).unwrap_or(1);

    ranked
        .into_iter()
        .map(|w| {
            let shape = estimate(&w.phrase, w.count, max_count, cfg);
            SizedWord {
                rank: w.rank,
                phrase: w.phrase,
                count: w.count,
                shape,
            }
        })
        .collect()
}

/// Lay out a word cloud.
///
/// Words are ranked by count, truncated to `cfg.limit`, sized and placed on a
/// sunflower spiral around the canvas centre. Words that cannot be placed
/// within the attempt budget are dropped without error, so the result may be
/// shorter than the input. The order of the result is placement order.
///
/// Returns [`CloudError::AllZeroCounts`] when the input is non-empty but no
/// word has a positive count.
pub fn layout_words(words: &[WordFrequency], cfg: &CloudConfig) -> Result<Vec<PlacedItem>, CloudError> {
    let ranked = rank_words(words, cfg.limit);
    let Some(top) = ranked.first() else {
        return Ok(Vec::new());
    };
    if top.count == 0 {
        return Err(CloudError::AllZeroCounts);
    }

    let sized = size_words(ranked, cfg);
    Ok(place(&sized, cfg))
}
