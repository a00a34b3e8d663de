use super::{REVEAL_BOTTOM_MARGIN, REVEAL_TOP_MARGIN};

/// Whether a card has scrolled far enough into the viewport to reveal.
/// `top` and `bottom` are the card's viewport-relative edges.
pub fn card_in_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_BOTTOM_MARGIN && bottom > REVEAL_TOP_MARGIN
}
