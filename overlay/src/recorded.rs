use crate::network::{FetchError, SnapshotProvider};
use league_common::game_packet::GameTickPacket;
use log::info;
use std::{fs::read_to_string, path::Path};

/// Replays packets captured from a bridge, one JSON object per line. Loops back to the first
/// packet after the last one so a rehearsal can run unattended.
pub struct RecordedFeed {
    packets: Vec<GameTickPacket>,
    next: usize,
}

impl RecordedFeed {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FetchError> {
        let feed = Self::from_json_lines(&read_to_string(&path)?)?;
        info!(
            "Loaded {} recorded packets from {}",
            feed.len(),
            path.as_ref().display()
        );
        Ok(feed)
    }

    /// Blank lines are skipped
    pub fn from_json_lines(text: &str) -> Result<Self, FetchError> {
        let packets = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str::<GameTickPacket>)
            .collect::<Result<Vec<_>, _>>()?;

        if packets.is_empty() {
            return Err(FetchError::EmptyRecording);
        }

        Ok(Self { packets, next: 0 })
    }

    pub fn len(&self) -> usize {
        self.packets.len()
    }
}

impl SnapshotProvider for RecordedFeed {
    async fn fetch(&mut self) -> Result<GameTickPacket, FetchError> {
        let packet = self.packets[self.next].clone();
        self.next = (self.next + 1) % self.packets.len();
        Ok(packet)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    const RECORDING: &str = r#"
{"game_info": {"is_match_ended": false}, "game_cars": [{"name": "A", "team": 0, "boost": 50, "score_info": {"goals": 0}}]}

{"game_info": {"is_match_ended": false}, "game_cars": [{"name": "A", "team": 0, "boost": 80, "score_info": {"goals": 1}}]}
{"game_info": {"is_match_ended": true}, "game_cars": []}
"#;

    #[tokio::test]
    async fn test_replay_loops() {
        let mut feed = RecordedFeed::from_json_lines(RECORDING).unwrap();
        assert_eq!(feed.len(), 3);

        let mut ended = Vec::new();
        for _ in 0..4 {
            ended.push(feed.fetch().await.unwrap().is_match_over());
        }
        assert_eq!(ended, vec![false, false, true, false]);
    }

    #[test]
    fn test_empty_recording() {
        assert!(matches!(
            RecordedFeed::from_json_lines("\n  \n"),
            Err(FetchError::EmptyRecording)
        ));
    }

    #[test]
    fn test_corrupt_recording() {
        assert!(matches!(
            RecordedFeed::from_json_lines("{\"game_info\": {}}\n{oops"),
            Err(FetchError::Decode(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            RecordedFeed::from_file("/nonexistent/recording.jsonl"),
            Err(FetchError::Io(_))
        ));
    }
}
