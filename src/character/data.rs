use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::loadout::Loadout;

/// The six character traits
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Traits {
    pub agility: i8,
    pub strength: i8,
    pub finesse: i8,
    pub instinct: i8,
    pub presence: i8,
    pub knowledge: i8,
}

impl Traits {
    /// Trait names paired with mutable values, in sheet order
    pub fn fields_mut(&mut self) -> [(&'static str, &mut i8); 6] {
        [
            ("Agility", &mut self.agility),
            ("Strength", &mut self.strength),
            ("Finesse", &mut self.finesse),
            ("Instinct", &mut self.instinct),
            ("Presence", &mut self.presence),
            ("Knowledge", &mut self.knowledge),
        ]
    }
}

/// Damage, stress and defense tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vitals {
    pub hit_points_marked: u8,
    pub hit_point_slots: u8,
    pub stress_marked: u8,
    pub stress_slots: u8,
    pub hope: u8,
    pub evasion: u8,
    pub armor_score: u8,
}

impl Default for Vitals {
    fn default() -> Self {
        Self {
            hit_points_marked: 0,
            hit_point_slots: 6,
            stress_marked: 0,
            stress_slots: 6,
            hope: 2,
            evasion: 10,
            armor_score: 0,
        }
    }
}

/// The character sheet. Doubles as the on-disk JSON shape; unknown or
/// missing fields fall back to defaults so older files keep loading.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterData {
    pub name: String,
    pub pronouns: String,
    pub ancestry: String,
    pub community: String,
    pub class_name: String,
    pub subclass: String,
    pub level: u8,
    pub traits: Traits,
    pub vitals: Vitals,
    /// False during initial character build; relaxes loadout caps once true
    pub creation_complete: bool,
    pub loadout: Loadout,
}

impl Default for CharacterData {
    fn default() -> Self {
        Self {
            name: "Untitled Character".to_string(),
            pronouns: String::new(),
            ancestry: String::new(),
            community: String::new(),
            class_name: String::new(),
            subclass: String::new(),
            level: 1,
            traits: Traits::default(),
            vitals: Vitals::default(),
            creation_complete: false,
            loadout: Loadout::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::card::{CardType, Domain, DomainCard};

    #[test]
    fn test_default_name() {
        let character = CharacterData::default();
        assert_eq!(character.name, "Untitled Character");
    }

    #[test]
    fn test_default_level_is_one() {
        assert_eq!(CharacterData::default().level, 1);
    }

    #[test]
    fn test_default_creation_incomplete() {
        assert!(!CharacterData::default().creation_complete);
    }

    #[test]
    fn test_default_loadout_empty() {
        let character = CharacterData::default();
        assert!(character.loadout.active.is_empty());
        assert!(character.loadout.vault.is_empty());
    }

    #[test]
    fn test_default_vitals() {
        let vitals = Vitals::default();
        assert_eq!(vitals.hit_point_slots, 6);
        assert_eq!(vitals.stress_slots, 6);
        assert_eq!(vitals.hope, 2);
        assert_eq!(vitals.hit_points_marked, 0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let mut character = CharacterData {
            name: "Marlowe Fairwind".to_string(),
            ancestry: "Katari".to_string(),
            community: "Wanderborne".to_string(),
            class_name: "Bard".to_string(),
            subclass: "Troubadour".to_string(),
            level: 3,
            creation_complete: true,
            ..CharacterData::default()
        };
        character.traits.presence = 2;
        character.loadout.active.push(DomainCard {
            name: "Inspirational Words".to_string(),
            domain: Domain::Grace,
            level: 1,
            card_type: CardType::Ability,
            recall_cost: 1,
        });

        let json = serde_json::to_string(&character).unwrap();
        let deserialized: CharacterData = serde_json::from_str(&json).unwrap();
        assert_eq!(character, deserialized);
    }

    #[test]
    fn test_missing_fields_default_on_deserialize() {
        // Simulates loading a file written before newer fields existed
        let json = r#"{"name": "Old Save", "level": 2}"#;
        let character: CharacterData = serde_json::from_str(json).unwrap();

        assert_eq!(character.name, "Old Save");
        assert_eq!(character.level, 2);
        assert!(!character.creation_complete);
        assert!(character.loadout.active.is_empty());
        assert_eq!(character.vitals.hope, 2);
    }

    #[test]
    fn test_traits_fields_mut_order() {
        let mut traits = Traits::default();
        let names: Vec<&str> = traits.fields_mut().map(|(n, _)| n).to_vec();
        assert_eq!(
            names,
            ["Agility", "Strength", "Finesse", "Instinct", "Presence", "Knowledge"]
        );
    }
}
