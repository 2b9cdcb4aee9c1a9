use rand::Rng;
use std::ops::Range;
use std::time::Duration;

// Declarative particle bursts. A `BurstSpec` describes how a batch of
// decorative elements should fly; `plan_burst` turns it into concrete
// offsets that the DOM layer writes as CSS custom properties.

/// How each particle's animation start is staggered.
#[derive(Clone, Debug, PartialEq)]
pub enum DelayModel {
    /// Uniform random delay in `[0, max_sec)`.
    Random { max_sec: f64 },
    /// `index * step_sec`, so the burst ripples out.
    Stagger { step_sec: f64 },
}

impl DelayModel {
    fn sample<R: Rng>(&self, index: usize, rng: &mut R) -> f64 {
        match *self {
            DelayModel::Random { max_sec } if max_sec > 0.0 => rng.gen_range(0.0..max_sec),
            DelayModel::Random { .. } => 0.0,
            DelayModel::Stagger { step_sec } => index as f64 * step_sec,
        }
    }
}

#[derive(Clone, Debug)]
pub struct BurstSpec {
    pub count: usize,
    /// Direction range in degrees (0 = +x, 90 = +y, screen space).
    pub angle_deg: Range<f64>,
    /// Travel distance range in pixels.
    pub distance_px: Range<f64>,
    pub delay: DelayModel,
    /// Glyphs assigned round-robin by index.
    pub glyphs: &'static [&'static str],
    /// When set, the burst's container is cleaned up after this long.
    pub cleanup_after: Option<Duration>,
}

impl BurstSpec {
    /// Same burst mirrored to fan the opposite way (angles shifted by 180°).
    pub fn mirrored(&self) -> Self {
        Self {
            angle_deg: (self.angle_deg.start + 180.0)..(self.angle_deg.end + 180.0),
            ..self.clone()
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub dx: f64,
    pub dy: f64,
    pub delay_sec: f64,
    pub glyph: &'static str,
}

/// Sample from a half-open range, tolerating empty ranges by returning the start.
#[inline]
fn sample_range<R: Rng>(range: &Range<f64>, rng: &mut R) -> f64 {
    if range.end > range.start {
        rng.gen_range(range.clone())
    } else {
        range.start
    }
}

#[inline]
pub fn glyph_for(glyphs: &[&'static str], index: usize) -> &'static str {
    if glyphs.is_empty() {
        ""
    } else {
        glyphs[index % glyphs.len()]
    }
}

/// Draw a concrete burst. Angle and distance are independent uniform draws.
pub fn plan_burst<R: Rng>(spec: &BurstSpec, rng: &mut R) -> Vec<Particle> {
    (0..spec.count)
        .map(|i| {
            let angle = sample_range(&spec.angle_deg, rng).to_radians();
            let dist = sample_range(&spec.distance_px, rng);
            Particle {
                dx: angle.cos() * dist,
                dy: angle.sin() * dist,
                delay_sec: spec.delay.sample(i, rng),
                glyph: glyph_for(spec.glyphs, i),
            }
        })
        .collect()
}

/// Evenly spaced percentage offsets: `start + i * step` for `i in 0..count`.
pub fn spaced_percentages(count: usize, start: f64, step: f64) -> Vec<f64> {
    (0..count).map(|i| start + i as f64 * step).collect()
}
