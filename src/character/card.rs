use serde::{Deserialize, Serialize};

/// The nine card domains of Daggerheart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Domain {
    #[default]
    Arcana,
    Blade,
    Bone,
    Codex,
    Grace,
    Midnight,
    Sage,
    Splendor,
    Valor,
}

impl Domain {
    pub fn display_name(&self) -> &'static str {
        match self {
            Domain::Arcana => "Arcana",
            Domain::Blade => "Blade",
            Domain::Bone => "Bone",
            Domain::Codex => "Codex",
            Domain::Grace => "Grace",
            Domain::Midnight => "Midnight",
            Domain::Sage => "Sage",
            Domain::Splendor => "Splendor",
            Domain::Valor => "Valor",
        }
    }

    pub fn all() -> &'static [Domain] {
        &[
            Domain::Arcana,
            Domain::Blade,
            Domain::Bone,
            Domain::Codex,
            Domain::Grace,
            Domain::Midnight,
            Domain::Sage,
            Domain::Splendor,
            Domain::Valor,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CardType {
    #[default]
    Ability,
    Spell,
    Grimoire,
}

impl CardType {
    pub fn display_name(&self) -> &'static str {
        match self {
            CardType::Ability => "Ability",
            CardType::Spell => "Spell",
            CardType::Grimoire => "Grimoire",
        }
    }
}

/// A domain card. Identity is the name (unique within the compendium);
/// the loadout rules treat everything else as opaque display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainCard {
    pub name: String,
    pub domain: Domain,
    pub level: u8,
    pub card_type: CardType,
    /// Hope cost to recall this card from the vault; displayed, never enforced
    #[serde(default)]
    pub recall_cost: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_display_names() {
        assert_eq!(Domain::Arcana.display_name(), "Arcana");
        assert_eq!(Domain::Blade.display_name(), "Blade");
        assert_eq!(Domain::Bone.display_name(), "Bone");
        assert_eq!(Domain::Codex.display_name(), "Codex");
        assert_eq!(Domain::Grace.display_name(), "Grace");
        assert_eq!(Domain::Midnight.display_name(), "Midnight");
        assert_eq!(Domain::Sage.display_name(), "Sage");
        assert_eq!(Domain::Splendor.display_name(), "Splendor");
        assert_eq!(Domain::Valor.display_name(), "Valor");
    }

    #[test]
    fn test_all_has_nine_domains() {
        assert_eq!(Domain::all().len(), 9);
    }

    #[test]
    fn test_domain_serialization_roundtrip() {
        for domain in Domain::all() {
            let json = serde_json::to_string(domain).unwrap();
            let deserialized: Domain = serde_json::from_str(&json).unwrap();
            assert_eq!(*domain, deserialized);
        }
    }

    #[test]
    fn test_card_serialization_roundtrip() {
        let card = DomainCard {
            name: "Bolt Beacon".to_string(),
            domain: Domain::Splendor,
            level: 1,
            card_type: CardType::Spell,
            recall_cost: 1,
        };

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: DomainCard = serde_json::from_str(&json).unwrap();
        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_recall_cost_defaults_on_deserialize() {
        // Older compendium entries may predate the recall_cost field
        let json = r#"{"name":"Whirlwind","domain":"Blade","level":1,"card_type":"Ability"}"#;
        let card: DomainCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.recall_cost, 0);
    }
}
