use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use quarto::{GameOutcome, Move, PlayerIdx};
use serde::{Deserialize, Serialize};

/// Everything needed to replay a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecording {
    pub players: [String; 2],
    pub starting_player: PlayerIdx,
    pub moves: Vec<Move>,
    /// `None` if the game was abandoned.
    pub outcome: Option<GameOutcome>,
}

impl GameRecording {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("Could not open recording '{}'", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Could not parse recording '{}'", path.display()))
    }
}

/// Writes numbered game recordings into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Returns the path of the new file.
    pub fn write_game_recording(&mut self, recording: &GameRecording) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, recording)?;
        writeln!(writer)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}
