//! Unit tests for persistence data shapes.

use crate::character::card::{CardType, Domain, DomainCard};
use crate::character::CharacterData;

fn sample_character() -> CharacterData {
    let mut character = CharacterData {
        name: "Rook Thistledown".to_string(),
        ancestry: "Ribbet".to_string(),
        community: "Slyborne".to_string(),
        class_name: "Rogue".to_string(),
        subclass: "Nightwalker".to_string(),
        level: 2,
        creation_complete: true,
        ..CharacterData::default()
    };
    character.loadout.active.push(DomainCard {
        name: "Pick and Pull".to_string(),
        domain: Domain::Midnight,
        level: 1,
        card_type: CardType::Ability,
        recall_cost: 0,
    });
    character.loadout.vault.push(DomainCard {
        name: "Uncanny Disguise".to_string(),
        domain: Domain::Midnight,
        level: 1,
        card_type: CardType::Spell,
        recall_cost: 1,
    });
    character
}

#[test]
fn test_character_file_roundtrip() {
    let character = sample_character();

    let json = serde_json::to_string_pretty(&character).unwrap();
    let loaded: CharacterData = serde_json::from_str(&json).unwrap();

    assert_eq!(character, loaded);
    assert_eq!(loaded.loadout.active.len(), 1);
    assert_eq!(loaded.loadout.vault.len(), 1);
}

#[test]
fn test_character_file_is_stable_json_object() {
    let character = sample_character();
    let value: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&character).unwrap()).unwrap();

    // Spot-check the on-disk shape other tools rely on
    assert_eq!(value["name"], "Rook Thistledown");
    assert_eq!(value["creation_complete"], true);
    assert_eq!(value["loadout"]["active"][0]["name"], "Pick and Pull");
}

#[test]
fn test_corrupt_file_fails_to_parse() {
    let result = serde_json::from_str::<CharacterData>("{not json");
    assert!(result.is_err());
}
