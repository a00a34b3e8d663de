pub mod mapper;
pub mod visibility;

pub use mapper::{ChronologyError, EraBounds, EraSpan, Marker, era_bounds, interpolate_year};
pub use visibility::card_in_view;

pub const REVEAL_BOTTOM_MARGIN: f64 = 120.0; // card top must clear this much of the lower edge
pub const REVEAL_TOP_MARGIN: f64 = 60.0; // card bottom must still hang below this line
