//! Symbolic asset names and bundle verification
//!
//! The core never loads or owns assets; it refers to them by name and
//! assumes a frontend resolved the whole bundle at startup. A missing name
//! is a startup-fatal condition, surfaced here as an error so the frontend
//! can abort before the first frame.

use thiserror::Error;

use crate::sim::EntityKind;

/// Bitmaps every frontend must resolve before the game starts
pub const REQUIRED_BITMAPS: &[&str] = &[
    "player",
    "force_field",
    "shield",
    "star",
    "fuel",
    "ally_1",
    "ally_2",
    "ally_3",
    "ally_4",
    "foe",
    "hud",
    "force",
    "full",
    "empty",
    "1",
    "2",
    "end_hit",
    "end_fuel",
];

/// Sound effects every frontend must resolve
pub const REQUIRED_SOUNDS: &[&str] = &[
    "fuel",
    "star",
    "hit",
    "shield_hit",
    "activated",
    "thanks1",
    "thanks2",
    "thanks3",
];

/// Background music track name
pub const MUSIC_TRACK: &str = "bg";

/// HUD font name
pub const HUD_FONT: &str = "font";
/// End-screen font name
pub const END_FONT: &str = "game_font";

/// Bitmap name for an entity kind
pub fn entity_bitmap(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Shield => "shield",
        EntityKind::Star => "star",
        EntityKind::Fuel => "fuel",
        EntityKind::Ally1 => "ally_1",
        EntityKind::Ally2 => "ally_2",
        EntityKind::Ally3 => "ally_3",
        EntityKind::Ally4 => "ally_4",
        EntityKind::Foe => "foe",
    }
}

/// Asset bundle verification failure
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("missing bitmap '{0}' in asset bundle")]
    MissingBitmap(String),
    #[error("missing sound '{0}' in asset bundle")]
    MissingSound(String),
}

/// Check a loaded bundle against the required name tables.
///
/// `bitmaps` and `sounds` are the names the frontend actually resolved.
pub fn verify_bundle(bitmaps: &[&str], sounds: &[&str]) -> Result<(), AssetError> {
    for name in REQUIRED_BITMAPS {
        if !bitmaps.contains(name) {
            return Err(AssetError::MissingBitmap((*name).to_string()));
        }
    }
    for name in REQUIRED_SOUNDS {
        if !sounds.contains(name) {
            return Err(AssetError::MissingSound((*name).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_complete_bundle_verifies() {
        assert_eq!(verify_bundle(REQUIRED_BITMAPS, REQUIRED_SOUNDS), Ok(()));
    }

    #[test]
    fn test_missing_bitmap_is_fatal() {
        let bitmaps: Vec<&str> = REQUIRED_BITMAPS
            .iter()
            .copied()
            .filter(|n| *n != "foe")
            .collect();
        assert_eq!(
            verify_bundle(&bitmaps, REQUIRED_SOUNDS),
            Err(AssetError::MissingBitmap("foe".to_string()))
        );
    }

    #[test]
    fn test_every_kind_has_a_bitmap() {
        use crate::sim::{ALLY_KINDS, POWER_UP_KINDS};
        for kind in POWER_UP_KINDS.into_iter().chain(ALLY_KINDS) {
            assert!(REQUIRED_BITMAPS.contains(&entity_bitmap(kind)));
        }
        assert!(REQUIRED_BITMAPS.contains(&entity_bitmap(EntityKind::Foe)));
    }
}
