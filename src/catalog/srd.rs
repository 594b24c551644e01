//! Built-in domain card definitions from the Daggerheart SRD.
//!
//! Serves as the default compendium; a user compendium file can override
//! or extend these entries.

use crate::character::card::{CardType, Domain, DomainCard};

fn card(name: &str, domain: Domain, level: u8, card_type: CardType, recall_cost: u8) -> DomainCard {
    DomainCard {
        name: name.to_string(),
        domain,
        level,
        card_type,
        recall_cost,
    }
}

/// The built-in SRD card set
pub fn srd_cards() -> Vec<DomainCard> {
    use CardType::{Ability, Grimoire, Spell};
    use Domain::*;

    vec![
        // Arcana
        card("Rune Ward", Arcana, 1, Spell, 0),
        card("Unleash Chaos", Arcana, 1, Spell, 1),
        card("Wall Walk", Arcana, 1, Spell, 1),
        card("Cinder Grasp", Arcana, 2, Spell, 1),
        card("Floating Eye", Arcana, 2, Spell, 0),
        card("Counterspell", Arcana, 3, Spell, 2),
        // Blade
        card("Get Back Up", Blade, 1, Ability, 1),
        card("Not Good Enough", Blade, 1, Ability, 1),
        card("Whirlwind", Blade, 1, Ability, 0),
        card("A Soldier's Bond", Blade, 2, Ability, 1),
        card("Reckless", Blade, 2, Ability, 1),
        // Bone
        card("Deft Maneuvers", Bone, 1, Ability, 0),
        card("I See It Coming", Bone, 1, Ability, 1),
        card("Untouchable", Bone, 1, Ability, 1),
        card("Ferocity", Bone, 2, Ability, 2),
        card("Strategic Approach", Bone, 2, Ability, 1),
        // Codex
        card("Book of Ava", Codex, 1, Grimoire, 0),
        card("Book of Illiat", Codex, 1, Grimoire, 0),
        card("Book of Tyfar", Codex, 1, Grimoire, 0),
        card("Book of Sitil", Codex, 2, Grimoire, 1),
        card("Book of Vagras", Codex, 2, Grimoire, 1),
        card("Book of Korvax", Codex, 3, Grimoire, 2),
        card("Book of Norai", Codex, 3, Grimoire, 1),
        // Grace
        card("Deft Deceiver", Grace, 1, Ability, 0),
        card("Enrapture", Grace, 1, Spell, 0),
        card("Inspirational Words", Grace, 1, Ability, 1),
        card("Tell No Lies", Grace, 2, Spell, 1),
        card("Troublemaker", Grace, 2, Ability, 2),
        // Midnight
        card("Pick and Pull", Midnight, 1, Ability, 0),
        card("Rain of Blades", Midnight, 1, Spell, 1),
        card("Uncanny Disguise", Midnight, 1, Spell, 1),
        card("Midnight Spirit", Midnight, 2, Spell, 1),
        card("Shadowbind", Midnight, 2, Spell, 1),
        // Sage
        card("Gifted Tracker", Sage, 1, Ability, 0),
        card("Nature's Tongue", Sage, 1, Ability, 0),
        card("Vicious Entangle", Sage, 1, Spell, 1),
        card("Conjure Swarm", Sage, 2, Spell, 1),
        card("Natural Familiar", Sage, 2, Spell, 1),
        // Splendor
        card("Bolt Beacon", Splendor, 1, Spell, 1),
        card("Mending Touch", Splendor, 1, Spell, 1),
        card("Reassurance", Splendor, 1, Ability, 0),
        card("Final Words", Splendor, 2, Spell, 1),
        card("Healing Hands", Splendor, 2, Spell, 1),
        // Valor
        card("Bare Bones", Valor, 1, Ability, 0),
        card("Forceful Push", Valor, 1, Ability, 1),
        card("I Am Your Shield", Valor, 1, Ability, 1),
        card("Body Basher", Valor, 2, Ability, 1),
        card("Bold Presence", Valor, 2, Ability, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_domain_is_represented() {
        let cards = srd_cards();
        for domain in Domain::all() {
            assert!(
                cards.iter().any(|c| c.domain == *domain),
                "no SRD cards for {}",
                domain.display_name()
            );
        }
    }

    #[test]
    fn test_card_names_are_unique() {
        let cards = srd_cards();
        for (i, card) in cards.iter().enumerate() {
            assert!(
                !cards[i + 1..].iter().any(|c| c.name == card.name),
                "duplicate SRD card name: {}",
                card.name
            );
        }
    }

    #[test]
    fn test_levels_are_plausible() {
        for card in srd_cards() {
            assert!((1..=10).contains(&card.level), "{} has level {}", card.name, card.level);
        }
    }

    #[test]
    fn test_codex_cards_are_grimoires() {
        for card in srd_cards().iter().filter(|c| c.domain == Domain::Codex) {
            assert_eq!(card.card_type, CardType::Grimoire);
        }
    }
}
