use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use serde_with::DeserializeFromStr;
use strum::{Display as StrumDisplay, EnumIter, EnumString};

pub const LABEL_PADDING: f64 = 20.0; // breathing room around a caption
pub const LABEL_GAP: f64 = 10.0; // space between portrait and caption
pub const VIEWPORT_FRACTION: f64 = 0.9; // share of the window the strip may fill

/// The two populations the strip can present.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    DeserializeFromStr,
    EnumString,
    EnumIter,
    StrumDisplay,
)]
#[strum(ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum FolkGroup {
    #[strum(serialize = "Awakened", serialize = "awakened")]
    Awakened,
    #[strum(serialize = "Watchers", serialize = "watcher")]
    Watchers,
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct FolkName(String);

crate::impl_string_newtype!(FolkName);

/// Raw measurements for one strip entry, as reported by the page once
/// its portrait has loaded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ItemMeasure {
    pub image_width: f64,
    pub image_height: f64,
    pub label_width: f64,
    pub label_height: f64,
}

/// Placement for one entry after packing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemSlot {
    pub left: f64,
    pub image_width: f64,
    pub image_height: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StripLayout {
    pub slots: Vec<ItemSlot>,
    pub scale: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for StripLayout {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            scale: 1.0,
            width: 0.0,
            height: 0.0,
        }
    }
}

/// Underline highlight for the hovered entry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub left: f64,
    pub width: f64,
}

/// Transparent hit area spanning an entry's full visual column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverZone {
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

/// Packs the strip left to right. Each entry claims the wider of its
/// portrait and padded caption; portraits shrink by one shared factor
/// when the row overflows its share of the window, captions keep their
/// natural size.
pub fn pack(items: &[ItemMeasure], viewport_width: f64) -> StripLayout {
    if items.is_empty() {
        return StripLayout::default();
    }

    let total: f64 = items
        .iter()
        .map(|m| m.image_width.max(m.label_width + LABEL_PADDING))
        .sum();

    let budget = viewport_width * VIEWPORT_FRACTION;
    let scale = (budget / total.max(1.0)).min(1.0);

    let mut slots = Vec::with_capacity(items.len());
    let mut pen = 0.0;
    let mut height: f64 = 0.0;

    for (i, m) in items.iter().enumerate() {
        let image_width = m.image_width * scale;
        let image_height = m.image_height * scale;

        slots.push(ItemSlot {
            left: pen,
            image_width,
            image_height,
        });
        height = height.max(image_height + m.label_height + LABEL_GAP);

        // the pen stops at the final entry; the row ends at its portrait edge
        if i < items.len() - 1 {
            pen += image_width.max(m.label_width + LABEL_PADDING);
        }
    }

    let last = slots[slots.len() - 1];
    StripLayout {
        width: last.left + last.image_width,
        height,
        scale,
        slots,
    }
}

/// Highlight for entry `index`: centered under its portrait, wide enough
/// to cover portrait or caption, whichever is larger.
pub fn highlight(layout: &StripLayout, items: &[ItemMeasure], index: usize) -> Option<Highlight> {
    let slot = layout.slots.get(index)?;
    let m = items.get(index)?;

    let width = slot.image_width.max(m.label_width);
    Some(Highlight {
        left: slot.left + slot.image_width / 2.0 - width / 2.0,
        width,
    })
}

/// Hit area for entry `index`. `underline_height` is the measured height
/// of the strip's underline rail.
pub fn hover_zone(
    layout: &StripLayout,
    items: &[ItemMeasure],
    index: usize,
    underline_height: f64,
) -> Option<HoverZone> {
    let slot = layout.slots.get(index)?;
    let m = items.get(index)?;

    Some(HoverZone {
        left: slot.left,
        width: slot.image_width.max(m.label_width),
        height: layout.height + underline_height,
    })
}
