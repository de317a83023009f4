//! Actor catalog keyed by template name.

use std::collections::BTreeMap;

use game_core::{ActorOracle, ActorTemplate, AiProfile, Capabilities, Faction, PLAYER_TEMPLATE};

/// In-memory set of actor templates.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActorCatalog {
    templates: BTreeMap<String, ActorTemplate>,
}

impl ActorCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Player, zombie, and plain enemy stat blocks of the reference dungeon.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        catalog.insert(
            PLAYER_TEMPLATE,
            ActorTemplate::builder("Player")
                .faction(Faction::Player)
                .capabilities(Capabilities::COMBATANT)
                .stats(50, 10, 3, 1)
                .build(),
        );
        catalog.insert(
            "zombie",
            ActorTemplate::builder("Zombie")
                .faction(Faction::Enemy)
                .capabilities(Capabilities::COMBATANT)
                .stats(10, 4, 1, 1)
                .ai(AiProfile::default())
                .build(),
        );
        catalog.insert(
            "enemy",
            ActorTemplate::builder("Enemy")
                .faction(Faction::Enemy)
                .capabilities(Capabilities::COMBATANT)
                .stats(10, 0, 1, 1)
                .ai(AiProfile::default())
                .build(),
        );
        catalog
    }

    /// Adds or replaces the template under `key`.
    pub fn insert(&mut self, key: impl Into<String>, template: ActorTemplate) -> Option<ActorTemplate> {
        self.templates.insert(key.into(), template)
    }

    pub fn get(&self, key: &str) -> Option<&ActorTemplate> {
        self.templates.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.templates.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl FromIterator<(String, ActorTemplate)> for ActorCatalog {
    fn from_iter<I: IntoIterator<Item = (String, ActorTemplate)>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

impl ActorOracle for ActorCatalog {
    fn template(&self, key: &str) -> Option<ActorTemplate> {
        self.get(key).cloned()
    }

    fn all_keys(&self) -> Vec<String> {
        self.templates.keys().cloned().collect()
    }
}
