/// Where a hospital's pin sits on the locator map, in percent of the map's
/// height and width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MapPin {
    /// Offset from the top edge.
    pub top_pct: u8,
    /// Offset from the left edge.
    pub left_pct: u8,
}

/// Pin for hospital `hospital_id`: `30 + id * 20` percent on both axes,
/// clamped so it stays on the map.
///
/// ```rust
/// use mediconnect::directory::{pin_position, MapPin};
///
/// assert_eq!(pin_position(1), MapPin { top_pct: 50, left_pct: 50 });
/// assert_eq!(pin_position(7), MapPin { top_pct: 100, left_pct: 100 });
/// ```
pub fn pin_position(hospital_id: u32) -> MapPin {
    let offset = hospital_id.saturating_mul(20).saturating_add(30).min(100) as u8;
    MapPin {
        top_pct: offset,
        left_pct: offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pins_step_by_twenty_percent() {
        assert_eq!(pin_position(0).top_pct, 30);
        assert_eq!(pin_position(2).left_pct, 70);
        assert_eq!(pin_position(3).top_pct, 90);
    }

    #[test]
    fn pins_never_leave_the_map() {
        assert_eq!(pin_position(4).top_pct, 100);
        assert_eq!(pin_position(u32::MAX).left_pct, 100);
    }
}
