use super::particles::{glyph_for, plan_burst, spaced_percentages, BurstSpec, DelayModel, Particle};
use crate::constants::*;
use rand::Rng;
use std::time::Duration;

/// One dancing bear: CSS `left` offset and animation delay.
#[derive(Clone, Debug, PartialEq)]
pub struct Dancer {
    pub left_pct: f64,
    pub delay_sec: f64,
    pub glyph: &'static str,
}

/// Everything the success screen spawns, decided up front.
#[derive(Clone, Debug)]
pub struct CelebrationPlan {
    pub dancers: Vec<Dancer>,
    pub hearts: Vec<Particle>,
    /// Hearts container is emptied after this long.
    pub hearts_clear_after: Duration,
    pub fireworks: FireworksPlan,
}

#[derive(Clone, Debug)]
pub struct FireworksPlan {
    pub left: Vec<Particle>,
    pub right: Vec<Particle>,
    /// The whole fireworks container is removed after this long.
    pub remove_after: Duration,
}

impl FireworksPlan {
    pub fn particle_count(&self) -> usize {
        self.left.len() + self.right.len()
    }
}

pub fn heart_burst_spec() -> BurstSpec {
    BurstSpec {
        count: HEART_BURST_COUNT,
        angle_deg: HEART_BURST_ANGLE_DEG.0..HEART_BURST_ANGLE_DEG.1,
        distance_px: HEART_BURST_DIST_PX.0..HEART_BURST_DIST_PX.1,
        delay: DelayModel::Random {
            max_sec: HEART_BURST_MAX_DELAY_SEC,
        },
        glyphs: HEART_BURST_GLYPHS,
        cleanup_after: Some(Duration::from_millis(HEART_BURST_CLEAR_MS as u64)),
    }
}

/// Left-side fan; the right side is `firework_spec().mirrored()`.
pub fn firework_spec() -> BurstSpec {
    BurstSpec {
        count: FIREWORK_PARTICLES_PER_SIDE,
        angle_deg: FIREWORK_ARC_DEG.0..FIREWORK_ARC_DEG.1,
        distance_px: FIREWORK_DIST_PX.0..FIREWORK_DIST_PX.1,
        delay: DelayModel::Stagger {
            step_sec: FIREWORK_DELAY_STEP_SEC,
        },
        glyphs: FIREWORK_GLYPHS,
        cleanup_after: Some(Duration::from_millis(FIREWORK_REMOVE_MS as u64)),
    }
}

pub fn plan_dancers() -> Vec<Dancer> {
    spaced_percentages(DANCER_COUNT, DANCER_LEFT_START_PCT, DANCER_LEFT_STEP_PCT)
        .into_iter()
        .enumerate()
        .map(|(i, left_pct)| Dancer {
            left_pct,
            delay_sec: i as f64 * DANCER_DELAY_STEP_SEC,
            glyph: DANCER_GLYPH,
        })
        .collect()
}

pub fn plan_fireworks<R: Rng>(rng: &mut R) -> FireworksPlan {
    let left_spec = firework_spec();
    let right_spec = left_spec.mirrored();
    FireworksPlan {
        left: plan_burst(&left_spec, rng),
        right: plan_burst(&right_spec, rng),
        remove_after: left_spec.cleanup_after.unwrap_or_default(),
    }
}

pub fn plan_celebration<R: Rng>(rng: &mut R) -> CelebrationPlan {
    let hearts_spec = heart_burst_spec();
    CelebrationPlan {
        dancers: plan_dancers(),
        hearts: plan_burst(&hearts_spec, rng),
        hearts_clear_after: hearts_spec.cleanup_after.unwrap_or_default(),
        fireworks: plan_fireworks(rng),
    }
}

/// Ambient hearts floating up the page background: `(left %, glyph)`.
pub fn plan_background_hearts() -> Vec<(f64, &'static str)> {
    spaced_percentages(
        BACKGROUND_HEART_COUNT,
        BACKGROUND_LEFT_START_PCT,
        BACKGROUND_LEFT_STEP_PCT,
    )
    .into_iter()
    .enumerate()
    .map(|(i, left)| (left, glyph_for(BACKGROUND_GLYPHS, i)))
    .collect()
}
