//! Battery icon selection
//!
//! Maps a battery reading onto Material Design Icons glyphs. Every reading
//! yields a pair of icons, one for the level sensor and one for the state
//! sensor.

use crate::SensorKind;
use ios_registry::BatteryState;

/// Generic battery glyph
pub const DEFAULT_ICON_LEVEL: &str = "mdi:battery";
/// Generic power plug glyph
pub const DEFAULT_ICON_STATE: &str = "mdi:power-plug";

/// Rounded levels that have a dedicated charging glyph
const CHARGING_GLYPHS: [u8; 7] = [20, 30, 40, 60, 80, 90, 100];

/// Icons for both sensors of one device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryIcons {
    pub level: String,
    pub state: String,
}

impl BatteryIcons {
    pub fn for_kind(&self, kind: SensorKind) -> &str {
        match kind {
            SensorKind::Level => &self.level,
            SensorKind::State => &self.state,
        }
    }

    pub fn into_kind(self, kind: SensorKind) -> String {
        match kind {
            SensorKind::Level => self.level,
            SensorKind::State => self.state,
        }
    }
}

/// Round a percentage to the nearest ten, halves rounding up
pub fn rounded_level(level: u8) -> u8 {
    let level = level.min(100);
    (level + 5) / 10 * 10
}

/// Resolve the icon pair for a battery reading
pub fn resolve_icons(level: u8, state: BatteryState) -> BatteryIcons {
    let rounded = rounded_level(level);
    let plug_off = format!("{}-off", DEFAULT_ICON_STATE);

    match state {
        // Full never shows the plug, even when still connected
        BatteryState::Full => BatteryIcons {
            level: DEFAULT_ICON_LEVEL.to_string(),
            state: plug_off,
        },
        BatteryState::Charging => {
            let level_icon = if CHARGING_GLYPHS.contains(&rounded) {
                format!("{}-charging-{}", DEFAULT_ICON_LEVEL, rounded)
            } else {
                format!("{}-charging", DEFAULT_ICON_LEVEL)
            };
            BatteryIcons {
                level: level_icon,
                state: DEFAULT_ICON_STATE.to_string(),
            }
        }
        BatteryState::Unplugged => {
            // Outline when the level rounds to empty (5 included) or is near full
            let level_icon = if level <= 5 || level > 95 {
                format!("{}-outline", DEFAULT_ICON_LEVEL)
            } else {
                format!("{}-{}", DEFAULT_ICON_LEVEL, rounded)
            };
            BatteryIcons {
                level: level_icon,
                state: plug_off,
            }
        }
        // Both sensors use the battery glyph here
        BatteryState::Unknown => {
            let unknown = format!("{}-unknown", DEFAULT_ICON_LEVEL);
            BatteryIcons {
                level: unknown.clone(),
                state: unknown,
            }
        }
    }
}

/// Resolve the icon for one sensor kind
pub fn resolve_icon(level: u8, state: BatteryState, kind: SensorKind) -> String {
    resolve_icons(level, state).into_kind(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATES: [BatteryState; 4] = [
        BatteryState::Full,
        BatteryState::Charging,
        BatteryState::Unplugged,
        BatteryState::Unknown,
    ];

    #[test]
    fn test_rounded_level() {
        assert_eq!(rounded_level(0), 0);
        assert_eq!(rounded_level(4), 0);
        assert_eq!(rounded_level(5), 10);
        assert_eq!(rounded_level(54), 50);
        assert_eq!(rounded_level(85), 90);
        assert_eq!(rounded_level(95), 100);
        assert_eq!(rounded_level(100), 100);
        assert_eq!(rounded_level(255), 100);
    }

    #[test]
    fn test_every_reading_has_icons() {
        for level in 0..=100 {
            for state in STATES {
                for kind in SensorKind::ALL {
                    let icon = resolve_icon(level, state, kind);
                    assert!(icon.starts_with("mdi:"), "{} for {} {:?}", icon, level, state);
                }
            }
        }
    }

    #[test]
    fn test_full() {
        assert_eq!(
            resolve_icon(100, BatteryState::Full, SensorKind::Level),
            "mdi:battery"
        );
        for level in [0, 37, 100] {
            assert_eq!(
                resolve_icon(level, BatteryState::Full, SensorKind::Level),
                "mdi:battery"
            );
            assert_eq!(
                resolve_icon(level, BatteryState::Full, SensorKind::State),
                "mdi:power-plug-off"
            );
        }
    }

    #[test]
    fn test_charging_with_glyph() {
        assert_eq!(
            resolve_icon(85, BatteryState::Charging, SensorKind::Level),
            "mdi:battery-charging-90"
        );
        assert_eq!(
            resolve_icon(85, BatteryState::Charging, SensorKind::State),
            "mdi:power-plug"
        );
        assert_eq!(
            resolve_icon(100, BatteryState::Charging, SensorKind::Level),
            "mdi:battery-charging-100"
        );
        assert_eq!(
            resolve_icon(18, BatteryState::Charging, SensorKind::Level),
            "mdi:battery-charging-20"
        );
    }

    #[test]
    fn test_charging_without_glyph() {
        for level in [0, 3, 12, 50, 54, 70, 74] {
            assert_eq!(
                resolve_icon(level, BatteryState::Charging, SensorKind::Level),
                "mdi:battery-charging",
                "level {}",
                level
            );
        }
    }

    #[test]
    fn test_charging_midpoint_rounds_up() {
        assert_eq!(
            resolve_icon(55, BatteryState::Charging, SensorKind::Level),
            "mdi:battery-charging-60"
        );
        assert_eq!(
            resolve_icon(45, BatteryState::Charging, SensorKind::Level),
            "mdi:battery-charging"
        );
    }

    #[test]
    fn test_unplugged_outline() {
        for level in [0, 4, 5, 96, 100] {
            assert_eq!(
                resolve_icon(level, BatteryState::Unplugged, SensorKind::Level),
                "mdi:battery-outline",
                "level {}",
                level
            );
        }
        assert_eq!(
            resolve_icon(97, BatteryState::Unplugged, SensorKind::State),
            "mdi:power-plug-off"
        );
    }

    #[test]
    fn test_unplugged_low_levels_round_to_ten() {
        for level in 6..=9 {
            assert_eq!(
                resolve_icon(level, BatteryState::Unplugged, SensorKind::Level),
                "mdi:battery-10",
                "level {}",
                level
            );
        }
    }

    #[test]
    fn test_unplugged_rounded() {
        assert_eq!(
            resolve_icon(10, BatteryState::Unplugged, SensorKind::Level),
            "mdi:battery-10"
        );
        assert_eq!(
            resolve_icon(47, BatteryState::Unplugged, SensorKind::Level),
            "mdi:battery-50"
        );
        assert_eq!(
            resolve_icon(95, BatteryState::Unplugged, SensorKind::Level),
            "mdi:battery-100"
        );
        assert_eq!(
            resolve_icon(47, BatteryState::Unplugged, SensorKind::State),
            "mdi:power-plug-off"
        );
    }

    #[test]
    fn test_unknown_uses_battery_glyph_for_both() {
        for level in [0, 50, 100] {
            let icons = resolve_icons(level, BatteryState::Unknown);
            assert_eq!(icons.level, "mdi:battery-unknown");
            assert_eq!(icons.level, icons.state);
        }
    }

    #[test]
    fn test_for_kind_matches_into_kind() {
        let icons = resolve_icons(62, BatteryState::Charging);
        assert_eq!(icons.for_kind(SensorKind::Level), "mdi:battery-charging-60");
        assert_eq!(icons.for_kind(SensorKind::State), "mdi:power-plug");
        assert_eq!(icons.clone().into_kind(SensorKind::Level), icons.level);
    }
}
