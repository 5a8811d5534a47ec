//! Decorative effect tokens.
//!
//! Opening the card produces one [`EffectBatch`]: hearts that float up and
//! away, sparkles that scatter, and fireworks that pop at random places on
//! the screen. Each token carries a [`Trajectory`] drawn once when the token
//! is created, so re-renders do not make elements jump.
//!
//! [`OpenWatcher`] is the edge detector that decides when a batch is due.

use std::fmt::Write as _;

use rand::Rng;

use crate::config::EffectCounts;

/// Kind of decorative element
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum EffectKind {
    /// Heart with the recipient's name, floats upward
    Heart,
    /// Sparkle scattering in every direction
    Sparkle,
    /// Repeating pop at a random screen position
    Firework,
    /// Small sparkle drifting around the final page
    MiniSparkle,
}

impl EffectKind {
    /// Tag embedded in token ids
    pub fn tag(&self) -> &'static str {
        match self {
            EffectKind::Heart => "heart",
            EffectKind::Sparkle => "spark",
            EffectKind::Firework => "fire",
            EffectKind::MiniSparkle => "mini",
        }
    }

    /// Whether the animation loops forever
    pub fn repeats(&self) -> bool {
        matches!(self, EffectKind::Firework | EffectKind::MiniSparkle)
    }

    /// Draw the motion parameters for the `index`-th token of this kind.
    fn draw<R: Rng + ?Sized>(&self, index: usize, rng: &mut R) -> Trajectory {
        match self {
            EffectKind::Heart => Trajectory {
                dx: rng.random_range(-300.0..300.0),
                dy: rng.random_range(-750.0..-150.0),
                rotate_deg: rng.random_range(0.0..360.0),
                scale_from: 0.5,
                scale_to: 1.5,
                duration_s: rng.random_range(4.0..6.0),
                delay_s: 0.0,
            },
            EffectKind::Sparkle => Trajectory {
                dx: rng.random_range(-350.0..350.0),
                dy: rng.random_range(-300.0..300.0),
                rotate_deg: 0.0,
                scale_from: 0.0,
                scale_to: rng.random_range(0.5..2.0),
                duration_s: rng.random_range(2.0..4.0),
                delay_s: 0.0,
            },
            // Fireworks don't travel; dx/dy are the viewport position as fractions.
            EffectKind::Firework => Trajectory {
                dx: rng.random_range(0.0..1.0),
                dy: rng.random_range(0.0..1.0),
                rotate_deg: 0.0,
                scale_from: 0.0,
                scale_to: 2.0,
                duration_s: 2.0,
                delay_s: rng.random_range(0.0..2.0),
            },
            EffectKind::MiniSparkle => Trajectory {
                dx: rng.random_range(-110.0..110.0),
                dy: rng.random_range(-110.0..110.0),
                rotate_deg: 0.0,
                scale_from: 1.0,
                scale_to: 1.0,
                duration_s: rng.random_range(2.0..3.0),
                delay_s: index as f64 * 0.2,
            },
        }
    }
}

/// Motion parameters of one element.
///
/// Offsets are in CSS pixels except for fireworks, see [`EffectKind::Firework`].
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Trajectory {
    pub dx: f64,
    pub dy: f64,
    pub rotate_deg: f64,
    pub scale_from: f64,
    pub scale_to: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

/// One decorative element
#[derive(Clone, PartialEq, Debug)]
pub struct EffectToken {
    /// `"{stamp}-{tag}-{index}"`, unique within a session
    pub id: String,
    pub kind: EffectKind,
    pub trajectory: Trajectory,
}

impl EffectToken {
    fn new<R: Rng + ?Sized>(stamp: u64, kind: EffectKind, index: usize, rng: &mut R) -> Self {
        Self {
            id: format!("{}-{}-{}", stamp, kind.tag(), index),
            kind,
            trajectory: kind.draw(index, rng),
        }
    }

    /// Inline style feeding the keyframes in the global stylesheet.
    pub fn style(&self) -> String {
        let t = &self.trajectory;
        let mut style = String::new();

        if self.kind == EffectKind::Firework {
            let _ = write!(
                style,
                "left: {:.2}%; top: {:.2}%; ",
                t.dx * 100.0,
                t.dy * 100.0
            );
        } else {
            let _ = write!(
                style,
                "--dx: {:.1}px; --dy: {:.1}px; --rot: {:.1}deg; ",
                t.dx, t.dy, t.rotate_deg
            );
        }

        let _ = write!(
            style,
            "--scale-from: {:.2}; --scale-to: {:.2}; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            t.scale_from, t.scale_to, t.duration_s, t.delay_s
        );

        if self.kind.repeats() {
            style.push_str(" animation-iteration-count: infinite;");
        }

        style
    }
}

fn tokens<R: Rng + ?Sized>(
    stamp: u64,
    kind: EffectKind,
    count: usize,
    rng: &mut R,
) -> Vec<EffectToken> {
    (0..count)
        .map(|index| EffectToken::new(stamp, kind, index, rng))
        .collect()
}

/// Everything that animates after the cover opens
#[derive(Clone, PartialEq, Debug)]
pub struct EffectBatch {
    /// Generation timestamp (ms) shared by all ids in the batch
    pub stamp: u64,
    pub hearts: Vec<EffectToken>,
    pub sparkles: Vec<EffectToken>,
    pub fireworks: Vec<EffectToken>,
}

impl EffectBatch {
    pub fn generate<R: Rng + ?Sized>(stamp: u64, counts: &EffectCounts, rng: &mut R) -> Self {
        let batch = Self {
            stamp,
            hearts: tokens(stamp, EffectKind::Heart, counts.hearts, rng),
            sparkles: tokens(stamp, EffectKind::Sparkle, counts.sparkles, rng),
            fireworks: tokens(stamp, EffectKind::Firework, counts.fireworks, rng),
        };
        tracing::debug!(stamp, total = batch.len(), "generated effect batch");
        batch
    }

    pub fn len(&self) -> usize {
        self.hearts.len() + self.sparkles.len() + self.fireworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All tokens: hearts, then sparkles, then fireworks
    pub fn tokens(&self) -> impl Iterator<Item = &EffectToken> {
        self.hearts
            .iter()
            .chain(self.sparkles.iter())
            .chain(self.fireworks.iter())
    }
}

/// Floating sparkles for the final page, staggered by 0.2 s each
pub fn mini_sparkles<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<EffectToken> {
    tokens(0, EffectKind::MiniSparkle, count, rng)
}

/// What the view should do with its effect batch after an observation
#[derive(Clone, Debug, PartialEq)]
pub enum WatchOutcome {
    /// Closed-to-open edge: show this fresh batch and start the music
    Launch(EffectBatch),
    /// Open-to-closed edge: drop the batch being shown
    Clear,
    /// No edge: leave everything as it is
    Keep,
}

impl WatchOutcome {
    /// Apply the outcome to the view's batch slot.
    ///
    /// Returns `true` when a new batch was launched.
    pub fn apply(self, slot: &mut Option<EffectBatch>) -> bool {
        match self {
            WatchOutcome::Launch(batch) => {
                *slot = Some(batch);
                true
            }
            WatchOutcome::Clear => {
                *slot = None;
                false
            }
            WatchOutcome::Keep => false,
        }
    }

    pub fn is_keep(&self) -> bool {
        matches!(self, WatchOutcome::Keep)
    }
}

/// Edge detector on the card's open flag.
///
/// Feed it every observed value of `is_open`; it launches a fresh batch
/// only on a closed-to-open edge and clears it on the way back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenWatcher {
    last_open: bool,
    generated: u32,
}

impl OpenWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe<R: Rng + ?Sized>(
        &mut self,
        is_open: bool,
        stamp: u64,
        counts: &EffectCounts,
        rng: &mut R,
    ) -> WatchOutcome {
        let was_open = std::mem::replace(&mut self.last_open, is_open);
        match (was_open, is_open) {
            (false, true) => {
                self.generated += 1;
                tracing::info!(stamp, generation = self.generated, "card opened, launching effects");
                WatchOutcome::Launch(EffectBatch::generate(stamp, counts, rng))
            }
            (true, false) => WatchOutcome::Clear,
            _ => WatchOutcome::Keep,
        }
    }

    /// Number of batches handed out so far
    pub fn batches_generated(&self) -> u32 {
        self.generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(7)
    }

    #[test]
    fn batch_has_configured_sizes() {
        let batch = EffectBatch::generate(1_700_000_000_000, &EffectCounts::default(), &mut rng());
        assert_eq!(batch.hearts.len(), 22);
        assert_eq!(batch.sparkles.len(), 40);
        assert_eq!(batch.fireworks.len(), 10);
        assert_eq!(batch.len(), 72);
        assert!(!batch.is_empty());
    }

    #[test]
    fn token_ids_embed_stamp_tag_and_index() {
        let batch = EffectBatch::generate(42, &EffectCounts::default(), &mut rng());
        assert_eq!(batch.hearts[0].id, "42-heart-0");
        assert_eq!(batch.sparkles[39].id, "42-spark-39");
        assert_eq!(batch.fireworks[9].id, "42-fire-9");
    }

    #[test]
    fn kinds_match_their_collection() {
        let batch = EffectBatch::generate(1, &EffectCounts::default(), &mut rng());
        assert!(batch.hearts.iter().all(|t| t.kind == EffectKind::Heart));
        assert!(batch.sparkles.iter().all(|t| t.kind == EffectKind::Sparkle));
        assert!(batch.fireworks.iter().all(|t| t.kind == EffectKind::Firework));
    }

    #[test]
    fn watcher_fires_on_rising_edge_only() {
        let counts = EffectCounts::default();
        let mut rng = rng();
        let mut watcher = OpenWatcher::new();

        assert_eq!(watcher.observe(false, 1, &counts, &mut rng), WatchOutcome::Keep);
        assert!(matches!(
            watcher.observe(true, 2, &counts, &mut rng),
            WatchOutcome::Launch(_)
        ));
        assert_eq!(watcher.observe(true, 3, &counts, &mut rng), WatchOutcome::Keep);
        assert_eq!(watcher.observe(true, 4, &counts, &mut rng), WatchOutcome::Keep);
        assert_eq!(watcher.batches_generated(), 1);
    }

    #[test]
    fn watcher_clears_then_rearms_after_close() {
        let counts = EffectCounts::default();
        let mut rng = rng();
        let mut watcher = OpenWatcher::new();

        watcher.observe(true, 1, &counts, &mut rng);
        assert_eq!(watcher.observe(false, 2, &counts, &mut rng), WatchOutcome::Clear);
        assert_eq!(watcher.observe(false, 3, &counts, &mut rng), WatchOutcome::Keep);
        match watcher.observe(true, 4, &counts, &mut rng) {
            WatchOutcome::Launch(batch) => assert_eq!(batch.stamp, 4),
            other => panic!("expected launch, got {other:?}"),
        }
        assert_eq!(watcher.batches_generated(), 2);
    }

    #[test]
    fn outcome_apply_updates_slot() {
        let batch = EffectBatch::generate(9, &EffectCounts::default(), &mut rng());
        let mut slot = None;

        assert!(WatchOutcome::Launch(batch.clone()).apply(&mut slot));
        assert_eq!(slot.as_ref(), Some(&batch));
        assert!(!WatchOutcome::Keep.apply(&mut slot));
        assert_eq!(slot.as_ref(), Some(&batch));
        assert!(!WatchOutcome::Clear.apply(&mut slot));
        assert!(slot.is_none());
        assert!(WatchOutcome::Keep.is_keep());
    }

    #[test]
    fn mini_sparkles_are_staggered() {
        let sparkles = mini_sparkles(12, &mut rng());
        assert_eq!(sparkles.len(), 12);
        assert_eq!(sparkles[0].trajectory.delay_s, 0.0);
        assert!((sparkles[5].trajectory.delay_s - 1.0).abs() < 1e-9);
        assert_eq!(sparkles[11].id, "0-mini-11");
    }

    #[test]
    fn heart_style_uses_offsets() {
        let token = EffectToken {
            id: "1-heart-0".into(),
            kind: EffectKind::Heart,
            trajectory: Trajectory {
                dx: -120.0,
                dy: -400.5,
                rotate_deg: 90.0,
                scale_from: 0.5,
                scale_to: 1.5,
                duration_s: 4.25,
                delay_s: 0.0,
            },
        };
        assert_eq!(
            token.style(),
            "--dx: -120.0px; --dy: -400.5px; --rot: 90.0deg; --scale-from: 0.50; \
             --scale-to: 1.50; animation-duration: 4.25s; animation-delay: 0.00s;"
        );
    }

    #[test]
    fn firework_style_positions_and_repeats() {
        let token = EffectToken {
            id: "1-fire-0".into(),
            kind: EffectKind::Firework,
            trajectory: Trajectory {
                dx: 0.25,
                dy: 0.5,
                rotate_deg: 0.0,
                scale_from: 0.0,
                scale_to: 2.0,
                duration_s: 2.0,
                delay_s: 1.5,
            },
        };
        let style = token.style();
        assert!(style.starts_with("left: 25.00%; top: 50.00%; "));
        assert!(style.contains("animation-delay: 1.50s;"));
        assert!(style.ends_with("animation-iteration-count: infinite;"));
        assert!(!style.contains("--dx"));
    }

    #[test]
    fn looping_is_decided_by_kind() {
        assert!(!EffectKind::Heart.repeats());
        assert!(!EffectKind::Sparkle.repeats());
        assert!(EffectKind::Firework.repeats());
        assert!(EffectKind::MiniSparkle.repeats());

        let batch = EffectBatch::generate(7, &EffectCounts::default(), &mut rng());
        for heart in &batch.hearts {
            assert!(!heart.style().contains("iteration-count"));
        }
    }
}
