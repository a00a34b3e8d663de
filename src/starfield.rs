use rand::Rng;

pub const STAR_COUNT: usize = 200;
pub const ORB_TOP_OFFSET: f64 = 150.0; // keeps orbs clear of the navbar

/// One speck of drifting star dust. Position is in percent of the
/// containing layer, sizes in px, timings in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub opacity: f64,
    pub duration: f64,
    pub delay: f64,
}

/// Floating orb start position: px from the top, vw from the left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orb {
    pub top: f64,
    pub left: f64,
}

/// Samples a field of `count` stars. Each drifts on its own cycle with a
/// phase offset somewhere inside that cycle.
pub fn scatter(count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let duration = rng.gen_range(5.0..20.0);
            Star {
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(1.0..3.0),
                opacity: rng.gen_range(0.2..0.8),
                duration,
                delay: rng.gen_range(0.0..duration),
            }
        })
        .collect()
}

pub fn scatter_orbs(count: usize, rng: &mut impl Rng) -> Vec<Orb> {
    (0..count)
        .map(|_| Orb {
            top: rng.gen_range(ORB_TOP_OFFSET..ORB_TOP_OFFSET + 80.0),
            left: rng.gen_range(0.0..90.0),
        })
        .collect()
}
