//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// RNG seed for reproducible games.
    pub seed: u64,
    /// Class of the new character.
    pub class_id: String,
    /// Fixed character name; random when `None`.
    pub character_name: Option<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            class_id: "fighter".to_string(),
            character_name: None,
        }
    }
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the character class.
    pub fn with_class(mut self, class_id: impl Into<String>) -> Self {
        self.class_id = class_id.into();
        self
    }

    /// Set the character name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.character_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.seed, 42);
        assert_eq!(cfg.class_id, "fighter");
        assert!(cfg.character_name.is_none());
    }

    #[test]
    fn builder_methods() {
        let cfg = GameConfig::default()
            .with_seed(7)
            .with_class("rogue")
            .with_name("Vex");
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.class_id, "rogue");
        assert_eq!(cfg.character_name.as_deref(), Some("Vex"));
    }
}
