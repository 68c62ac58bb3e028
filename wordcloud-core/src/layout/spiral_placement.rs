// Sunflower spiral placement.
//
// Words are placed greedily in rank order. Rank 0 goes to the exact centre
// with a single attempt. Every later word walks a Fermat spiral
// (radius ~ sqrt(n), angle ~ n * golden angle) starting from its own rank,
// with a little deterministic jitter, and takes the first position that is
// inside the canvas circle and clear of everything placed so far.
//
// Properties:
// - Deterministic: jitter comes from seeded_random(rank, attempt)
// - Bounded: at most `attempts` trials per word
// - Lossy: words that never fit are dropped, not shrunk

use tracing::{debug, trace};

use super::occupancy::Occupancy;
use super::{Bounds, CloudConfig, PlacedItem, SizedWord, CENTER};

/// Stateless pseudo-random value in [0, 1) for an integer seed.
///
/// The same seed always yields the same value, on every run and platform
/// with IEEE-754 `sin`.
pub fn seeded_random(seed: u64) -> f64 {
    let x = (seed as f64).sin() * 10000.0;
    x - x.floor()
}

/// Candidate centre for trial `attempt` of the word at `rank` (rank >= 1).
fn spiral_point(rank: usize, attempt: usize, cfg: &CloudConfig) -> (f64, f64) {
    let idx = rank as f64 + attempt as f64 * cfg.spiral_step;

    let radius_seed = (rank * 1000 + attempt) as u64;
    let angle_seed = (rank * 2000 + attempt) as u64;
    let jitter_r = seeded_random(radius_seed) * cfg.radius_jitter - cfg.radius_jitter / 2.0;
    let jitter_a = seeded_random(angle_seed) * cfg.angle_jitter;

    let radius = idx.sqrt() * cfg.radius_scale + jitter_r;
    let angle = idx * cfg.golden_angle + jitter_a;

    (CENTER + radius * angle.cos(), CENTER + radius * angle.sin())
}

/// Placement state for one layout run.
struct Canvas<'a> {
    cfg: &'a CloudConfig,
    occupied: Occupancy,
}

impl<'a> Canvas<'a> {
    fn new(cfg: &'a CloudConfig) -> Self {
        Self {
            cfg,
            occupied: Occupancy::default(),
        }
    }

    /// The centre must be far enough from the canvas centre that the larger
    /// half-extent still fits inside the circle. This treats the box as a
    /// circle, which is conservative.
    fn contains(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        let dx = x - CENTER;
        let dy = y - CENTER;
        let dist = (dx * dx + dy * dy).sqrt();
        let max_r = self.cfg.canvas_radius - (w / 2.0).max(h / 2.0);
        dist <= max_r
    }

    fn can_place(&self, x: f64, y: f64, w: f64, h: f64) -> bool {
        if !self.contains(x, y, w, h) {
            return false;
        }
        let candidate = Bounds::from_center(x, y, w, h).inflate(self.cfg.padding);
        !self.occupied.overlaps_any(&candidate)
    }

    /// Find a position for `word`, or None once the budget is spent.
    fn find_position(&self, word: &SizedWord) -> Option<(f64, f64)> {
        let (w, h) = (word.shape.width_pct, word.shape.height_pct);

        if word.rank == 0 {
            return self.can_place(CENTER, CENTER, w, h).then_some((CENTER, CENTER));
        }

        (0..self.cfg.attempts)
            .map(|t| spiral_point(word.rank, t, self.cfg))
            .find(|&(x, y)| self.can_place(x, y, w, h))
    }

    fn occupy(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.occupied.insert(Bounds::from_center(x, y, w, h));
    }
}

/// Place sized words on the canvas, in the order given.
///
/// `sized` is expected in rank order (index 0 most frequent); only the first
/// `cfg.limit` are considered. Words that find no free spot within the
/// attempt budget are left out of the result; this is not an error. The
/// result is in placement order and each item's `delay` counts placed items
/// only.
pub fn place(sized: &[SizedWord], cfg: &CloudConfig) -> Vec<PlacedItem> {
    let mut canvas = Canvas::new(cfg);
    let mut placed: Vec<PlacedItem> = Vec::with_capacity(sized.len());

    for word in sized.iter().take(cfg.limit) {
        let Some((x, y)) = canvas.find_position(word) else {
            debug!(
                rank = word.rank,
                phrase = %word.phrase,
                width_pct = word.shape.width_pct,
                "word dropped, no free position"
            );
            continue;
        };

        canvas.occupy(x, y, word.shape.width_pct, word.shape.height_pct);
        trace!(rank = word.rank, x, y, "word placed");

        placed.push(PlacedItem {
            phrase: word.phrase.clone(),
            count: word.count,
            rank: word.rank,
            x,
            y,
            font_size: word.shape.font_size,
            opacity: word.shape.opacity,
            width_pct: word.shape.width_pct,
            height_pct: word.shape.height_pct,
            delay: placed.len() as f64 * cfg.delay_step,
        });
    }

    debug!(
        placed = placed.len(),
        dropped = sized.len().min(cfg.limit) - placed.len(),
        "word cloud layout finished"
    );
    placed
}
