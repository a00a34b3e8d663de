/// Scroll offset that centers the item at `index` on a rail of uniform
/// items, clamped so the rail never overscrolls at either end.
pub fn centered_scroll(
    index: usize,
    item_extent: f64,
    gap: f64,
    viewport: f64,
    content: f64,
) -> f64 {
    let target = index as f64 * (item_extent + gap) - viewport / 2.0 + item_extent / 2.0;
    clamp_scroll(target, viewport, content)
}

/// Offset-based variant for rails measured directly (the emblem column,
/// where items are not uniformly sized).
pub fn centered_offset(item_offset: f64, item_extent: f64, viewport: f64, content: f64) -> f64 {
    clamp_scroll(
        item_offset - viewport / 2.0 + item_extent / 2.0,
        viewport,
        content,
    )
}

fn clamp_scroll(target: f64, viewport: f64, content: f64) -> f64 {
    target.min(content - viewport).max(0.0)
}

/// Prev/next indices around the active item, for the view's class wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Neighbors {
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

pub fn neighbors(index: usize, len: usize) -> Neighbors {
    Neighbors {
        prev: index.checked_sub(1),
        next: (index + 1 < len).then_some(index + 1),
    }
}

/// Where a wheel tick lands. The rail advances within its region until
/// it runs out, then hops to the neighbouring region, wrapping at both
/// ends of the region list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelStep {
    Stay,
    Within(usize),
    Hop { region: usize, index: usize },
}

pub fn wheel_step(counts: &[usize], region: usize, index: usize, delta: f64) -> WheelStep {
    if counts.is_empty() || region >= counts.len() {
        return WheelStep::Stay;
    }

    if delta > 0.0 {
        if index + 1 < counts[region] {
            return WheelStep::Within(index + 1);
        }
        WheelStep::Hop {
            region: (region + 1) % counts.len(),
            index: 0,
        }
    } else if delta < 0.0 {
        if index > 0 {
            return WheelStep::Within(index - 1);
        }
        let prev = (region + counts.len() - 1) % counts.len();
        WheelStep::Hop {
            region: prev,
            // landing on the last entry of the previous region
            index: counts[prev].saturating_sub(1),
        }
    } else {
        WheelStep::Stay
    }
}
