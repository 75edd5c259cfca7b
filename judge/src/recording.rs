use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wordgrid::TurnAction;

/// Writes one JSON file per game into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
    turns: Vec<TurnRecord>,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self {
            num: 1,
            directory,
            turns: Vec::new(),
        })
    }

    pub fn store_turn(&mut self, turn: TurnRecord) {
        self.turns.push(turn);
    }

    /// Writes all turns stored since the last call and returns the path.
    pub fn write_game_recording(
        &mut self,
        final_scores: Vec<(String, u32)>,
    ) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let recording = GameRecording {
            turns: std::mem::take(&mut self.turns),
            final_scores,
        };
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, &recording)?;
        writer.flush()?;
        self.num += 1;
        Ok(filepath)
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameRecording {
    pub turns: Vec<TurnRecord>,
    pub final_scores: Vec<(String, u32)>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: String,
    /// The rack before the turn, e.g. `EHLLO?`.
    pub rack: String,
    /// The action that was carried out, which is a pass if all attempts were rejected.
    pub action: TurnAction,
    pub points: u32,
    /// Rejected actions of this turn, with the reason.
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub rejected: Vec<(TurnAction, String)>,
}
