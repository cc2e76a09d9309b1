//! Position Style Table - the five canonical 3D card positions.
//!
//! Pure data, shared read-only by every carousel. Indexed by slot number;
//! a slot outside the table has no visual treatment and the card is hidden.

/// Visual attributes of one slot, consumed by presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionStyle {
    /// Horizontal translation as a percentage of card width.
    pub offset_percent: f32,
    pub scale: f32,
    /// Rotation around the vertical axis, in degrees.
    pub rotation_deg: f32,
    /// Stacking order; higher draws on top.
    pub z_index: i32,
    pub opacity: f32,
    pub brightness: f32,
}

impl PositionStyle {
    const fn new(
        offset_percent: f32,
        scale: f32,
        rotation_deg: f32,
        z_index: i32,
        opacity: f32,
        brightness: f32,
    ) -> Self {
        Self {
            offset_percent,
            scale,
            rotation_deg,
            z_index,
            opacity,
            brightness,
        }
    }
}

/// Named slots, in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    Left,
    Center,
    Right,
    HiddenRight,
    HiddenLeft,
}

impl SlotName {
    pub const ALL: [SlotName; 5] = [
        SlotName::Left,
        SlotName::Center,
        SlotName::Right,
        SlotName::HiddenRight,
        SlotName::HiddenLeft,
    ];

    pub fn from_slot(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }
}

/// Number of slots with a defined style.
pub const SLOT_COUNT: usize = 5;

/// The position table.
pub static POSITIONS: [PositionStyle; SLOT_COUNT] = [
    PositionStyle::new(-100.0, 0.85, 35.0, 2, 0.7, 0.8), // Left
    PositionStyle::new(0.0, 1.0, 0.0, 3, 1.0, 1.0),      // Center
    PositionStyle::new(100.0, 0.85, -35.0, 2, 0.7, 0.8), // Right
    PositionStyle::new(200.0, 0.7, -45.0, 1, 0.3, 0.6),  // Hidden right
    PositionStyle::new(-200.0, 0.7, 45.0, 1, 0.3, 0.6),  // Hidden left
];

/// Style for a slot, `None` past the end of the table.
pub fn style_for_slot(slot: usize) -> Option<&'static PositionStyle> {
    POSITIONS.get(slot)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_on_top_and_unrotated() {
        let center = style_for_slot(1).unwrap();
        assert_eq!(center.offset_percent, 0.0);
        assert_eq!(center.rotation_deg, 0.0);
        assert!(POSITIONS.iter().all(|p| p.z_index <= center.z_index));
    }

    #[test]
    fn test_sides_mirror_each_other() {
        let pairs = [
            (SlotName::Left, SlotName::Right),
            (SlotName::HiddenLeft, SlotName::HiddenRight),
        ];
        for (a, b) in pairs {
            let a = POSITIONS[a as usize];
            let b = POSITIONS[b as usize];
            assert_eq!(a.offset_percent, -b.offset_percent);
            assert_eq!(a.rotation_deg, -b.rotation_deg);
            assert_eq!(a.scale, b.scale);
            assert_eq!(a.opacity, b.opacity);
        }
    }

    #[test]
    fn test_out_of_table_has_no_style() {
        assert!(style_for_slot(4).is_some());
        assert!(style_for_slot(5).is_none());
        assert_eq!(SlotName::from_slot(5), None);
        assert_eq!(SlotName::from_slot(3), Some(SlotName::HiddenRight));
    }
}
