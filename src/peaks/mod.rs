//! Mountain-range anchor planning.
//!
//! Chooses a small set of well-separated ridge anchor points from the seed.
//! Placement uses rejection sampling with a fixed proposal budget; running
//! out of proposals silently skips a peak, which is a designed degenerate
//! outcome rather than an error. Consumers must tolerate any count the
//! planner reports, never assume the requested number.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::terrain::WorldConfig;

/// A ridge anchor point on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Peak {
    pub x: u32,
    pub y: u32,
}

impl Peak {
    /// Euclidean distance to another peak, in tiles.
    pub fn distance_to(&self, other: &Peak) -> f64 {
        let dx = self.x as f64 - other.x as f64;
        let dy = self.y as f64 - other.y as f64;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Outcome of a planning run.
///
/// Records the requested count alongside the accepted peaks so callers can
/// distinguish "fewer peaks than requested" from a bug without counting the
/// output list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PeakPlacement {
    /// Number of peaks the planner set out to place.
    pub requested: usize,
    /// Accepted anchors, in insertion order.
    pub peaks: Vec<Peak>,
}

impl PeakPlacement {
    /// Number of peaks actually placed.
    pub fn placed(&self) -> usize {
        self.peaks.len()
    }

    /// Number of requested peaks the proposal budget failed to place.
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.peaks.len())
    }
}

/// Plans 1-4 ridge anchors inside the interior region of the grid.
///
/// The interior is inset from every edge by `config.edge_buffer` so ridges
/// are never truncated by the boundary. The first peak is placed
/// unconditionally; each subsequent peak gets `config.placement_attempts`
/// uniform proposals and is accepted only if it keeps
/// `config.min_peak_separation` tiles of distance to every earlier peak.
///
/// Grids too small to contain an interior region produce an empty placement.
pub fn plan_peaks(config: &WorldConfig) -> PeakPlacement {
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
    let requested = rng.random_range(1..=config.max_peaks.max(1));

    let mut peaks: Vec<Peak> = Vec::with_capacity(requested);
    if config.width <= 2 * config.edge_buffer || config.height <= 2 * config.edge_buffer {
        return PeakPlacement { requested, peaks };
    }

    let x_lo = config.edge_buffer as u32;
    let x_hi = (config.width - config.edge_buffer) as u32;
    let y_lo = config.edge_buffer as u32;
    let y_hi = (config.height - config.edge_buffer) as u32;

    for _ in 0..requested {
        if peaks.is_empty() {
            peaks.push(Peak {
                x: rng.random_range(x_lo..x_hi),
                y: rng.random_range(y_lo..y_hi),
            });
            continue;
        }

        for _ in 0..config.placement_attempts {
            let candidate = Peak {
                x: rng.random_range(x_lo..x_hi),
                y: rng.random_range(y_lo..y_hi),
            };
            let separated = peaks
                .iter()
                .all(|p| p.distance_to(&candidate) >= config.min_peak_separation);
            if separated {
                peaks.push(candidate);
                break;
            }
        }
        // Budget exhausted: the peak is skipped, not retried.
    }

    PeakPlacement { requested, peaks }
}
