use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use quarto::{EngineConfig, PlayerIdx};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Settings for the games played in one session, loaded from a JSON file.
///
/// Every field is optional in the file:
/// ```json
/// { "players": ["Alice", "Bob"], "starting_player": 1 }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub players: [String; 2],
    pub starting_player: PlayerIdx,
    /// Overrides `starting_player` with a random pick for every game.
    pub random_starting_player: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: [String::from("Player 1"), String::from("Player 2")],
            starting_player: 0,
            random_starting_player: false,
        }
    }
}

impl GameConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open config file '{}'", path.display()))?;
        let config: GameConfig = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse config file '{}'", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.starting_player > 1 {
            anyhow::bail!(
                "The starting player must be 0 or 1, not {}",
                self.starting_player
            );
        }
        if self.players[0] == self.players[1] {
            anyhow::bail!("Both players are called '{}'", self.players[0]);
        }
        Ok(())
    }

    pub fn engine_config<R: Rng + ?Sized>(&self, rng: &mut R) -> EngineConfig {
        let starting_player = if self.random_starting_player {
            rng.gen_range(0..2)
        } else {
            self.starting_player
        };
        EngineConfig { starting_player }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn partial_config() {
        let config: GameConfig = serde_json::from_str(r#"{ "starting_player": 1 }"#).unwrap();
        assert_eq!(config.players, GameConfig::default().players);
        assert_eq!(config.starting_player, 1);
        assert!(config.validate().is_ok());
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(config.engine_config(&mut rng).starting_player, 1);
    }

    #[test]
    fn invalid_config() {
        let config: GameConfig = serde_json::from_str(r#"{ "starting_player": 2 }"#).unwrap();
        assert!(config.validate().is_err());
        let config: GameConfig =
            serde_json::from_str(r#"{ "players": ["Same", "Same"] }"#).unwrap();
        assert!(config.validate().is_err());
    }
}
