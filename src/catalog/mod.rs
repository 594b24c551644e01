//! The card compendium: every domain card the app can offer.
//!
//! The built-in SRD set is always available; a user compendium JSON file
//! in the data directory overrides entries by name and may add new ones.

mod srd;

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::character::card::{Domain, DomainCard};
use crate::paths;

pub use srd::srd_cards;

/// Shape of the user compendium file
#[derive(Debug, Deserialize)]
struct UserCompendium {
    cards: Vec<DomainCard>,
}

/// All known card definitions
#[derive(Resource, Default)]
pub struct CardCatalog {
    pub cards: Vec<DomainCard>,
}

impl CardCatalog {
    pub fn get(&self, name: &str) -> Option<&DomainCard> {
        self.cards.iter().find(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[allow(dead_code)]
    pub fn cards_for(&self, domain: Domain) -> impl Iterator<Item = &DomainCard> {
        self.cards.iter().filter(move |c| c.domain == domain)
    }

    /// Merge user-defined cards over the current set: entries with a known
    /// name replace it, new names are appended.
    fn merge(&mut self, extra: Vec<DomainCard>) {
        for card in extra {
            if let Some(existing) = self.cards.iter_mut().find(|c| c.name == card.name) {
                *existing = card;
            } else {
                self.cards.push(card);
            }
        }
    }
}

/// Message to re-read the user compendium from disk
#[derive(Message)]
pub struct RefreshCompendiumRequest;

/// Build the catalog from the SRD set plus the user compendium, if present
fn build_catalog(compendium_path: &Path) -> CardCatalog {
    let mut catalog = CardCatalog { cards: srd_cards() };

    if !compendium_path.exists() {
        info!(
            "No user compendium at {:?}; using {} built-in cards",
            compendium_path,
            catalog.cards.len()
        );
        return catalog;
    }

    match std::fs::read_to_string(compendium_path) {
        Ok(json) => match serde_json::from_str::<UserCompendium>(&json) {
            Ok(user) => {
                let user_count = user.cards.len();
                catalog.merge(user.cards);
                info!(
                    "Loaded {} user cards from {:?} ({} total)",
                    user_count,
                    compendium_path,
                    catalog.cards.len()
                );
            }
            Err(e) => {
                warn!("Failed to parse user compendium: {}", e);
            }
        },
        Err(e) => {
            warn!("Failed to read user compendium: {}", e);
        }
    }

    catalog
}

/// Startup system to populate the catalog
fn load_compendium(mut catalog: ResMut<CardCatalog>) {
    *catalog = build_catalog(&paths::compendium_file());
}

/// System to reload the catalog on request
fn refresh_compendium(
    mut events: MessageReader<RefreshCompendiumRequest>,
    mut catalog: ResMut<CardCatalog>,
) {
    for _ in events.read() {
        *catalog = build_catalog(&paths::compendium_file());
        info!("Refreshed compendium: {} cards", catalog.cards.len());
    }
}

pub struct CatalogPlugin;

impl Plugin for CatalogPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CardCatalog>()
            .add_message::<RefreshCompendiumRequest>()
            .add_systems(Startup, load_compendium)
            .add_systems(
                Update,
                refresh_compendium.run_if(on_message::<RefreshCompendiumRequest>),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::card::CardType;

    fn catalog() -> CardCatalog {
        CardCatalog { cards: srd_cards() }
    }

    #[test]
    fn test_get_by_name() {
        let catalog = catalog();
        let card = catalog.get("Whirlwind").expect("SRD card");
        assert_eq!(card.domain, Domain::Blade);
        assert!(catalog.get("Nonexistent Card").is_none());
    }

    #[test]
    fn test_cards_for_domain_filters() {
        let catalog = catalog();
        assert!(catalog.cards_for(Domain::Codex).all(|c| c.domain == Domain::Codex));
        assert!(catalog.cards_for(Domain::Codex).count() > 0);
    }

    #[test]
    fn test_merge_overrides_by_name() {
        let mut catalog = catalog();
        let before = catalog.cards.len();

        catalog.merge(vec![DomainCard {
            name: "Whirlwind".to_string(),
            domain: Domain::Blade,
            level: 1,
            card_type: CardType::Ability,
            recall_cost: 2,
        }]);

        assert_eq!(catalog.cards.len(), before);
        assert_eq!(catalog.get("Whirlwind").unwrap().recall_cost, 2);
    }

    #[test]
    fn test_merge_appends_new_names() {
        let mut catalog = catalog();
        let before = catalog.cards.len();

        catalog.merge(vec![DomainCard {
            name: "Homebrew Flourish".to_string(),
            domain: Domain::Grace,
            level: 4,
            card_type: CardType::Spell,
            recall_cost: 1,
        }]);

        assert_eq!(catalog.cards.len(), before + 1);
        assert!(catalog.contains("Homebrew Flourish"));
    }

    #[test]
    fn test_user_compendium_parses() {
        let json = r#"{
            "cards": [
                {"name": "Ember Lash", "domain": "Arcana", "level": 2, "card_type": "Spell", "recall_cost": 1}
            ]
        }"#;

        let user: UserCompendium = serde_json::from_str(json).unwrap();
        assert_eq!(user.cards.len(), 1);
        assert_eq!(user.cards[0].domain, Domain::Arcana);
    }
}
