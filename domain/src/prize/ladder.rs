//! The prize ladder table

use serde::Serialize;

/// Highest level of the ladder (the million question)
pub const MAX_LEVEL: u8 = 16;

/// Amount awarded for answering the final question correctly
pub const WIN_AMOUNT: u64 = 1_000_000;

/// One step of the ladder (Value Object)
///
/// - `prize`: awarded once this level is answered correctly
/// - `stop`: banked when the player stops after clearing this level
/// - `wrong`: banked when the player fails this level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LadderEntry {
    pub level: u8,
    pub prize: u64,
    pub stop: u64,
    pub wrong: u64,
    pub title: &'static str,
}

const fn entry(level: u8, prize: u64, stop: u64, wrong: u64, title: &'static str) -> LadderEntry {
    LadderEntry {
        level,
        prize,
        stop,
        wrong,
        title,
    }
}

const STANDARD: [LadderEntry; MAX_LEVEL as usize] = [
    entry(1, 1_000, 0, 0, "Ovelhinha"),
    entry(2, 2_000, 1_000, 500, "Visitante"),
    entry(3, 3_000, 2_000, 1_000, "Congregado"),
    entry(4, 4_000, 3_000, 1_500, "Membro"),
    entry(5, 5_000, 4_000, 2_000, "Obreiro"),
    entry(6, 10_000, 5_000, 2_500, "Diácono"),
    entry(7, 20_000, 10_000, 5_000, "Presbítero"),
    entry(8, 30_000, 20_000, 10_000, "Evangelista"),
    entry(9, 40_000, 30_000, 15_000, "Missionário"),
    entry(10, 50_000, 40_000, 20_000, "Pastor Auxiliar"),
    entry(11, 100_000, 50_000, 25_000, "Pastor"),
    entry(12, 200_000, 100_000, 50_000, "Mestre da Lei"),
    entry(13, 300_000, 200_000, 100_000, "Levita"),
    entry(14, 400_000, 300_000, 150_000, "Sacerdote"),
    entry(15, 500_000, 400_000, 200_000, "Profeta"),
    entry(16, WIN_AMOUNT, 0, 0, "Apóstolo"),
];

/// Title shown when the player did not clear a single level
pub const NO_LEVEL_TITLE: &str = "Vigia Irmão!";

/// Immutable level → prize table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeLadder {
    entries: &'static [LadderEntry],
}

impl Default for PrizeLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl PrizeLadder {
    /// The 16-level Show do Milhão ladder
    pub const fn standard() -> Self {
        Self { entries: &STANDARD }
    }

    pub fn lookup(&self, level: u8) -> Option<&'static LadderEntry> {
        self.entries.iter().find(|e| e.level == level)
    }

    pub fn entries(&self) -> &'static [LadderEntry] {
        self.entries
    }

    pub fn max_level(&self) -> u8 {
        self.entries.iter().map(|e| e.level).max().unwrap_or(0)
    }

    /// Title earned after clearing `levels_completed` levels
    pub fn title_for_completed(&self, levels_completed: u8) -> &'static str {
        if levels_completed == 0 {
            return NO_LEVEL_TITLE;
        }
        self.lookup(levels_completed)
            .map(|e| e.title)
            .unwrap_or(NO_LEVEL_TITLE)
    }
}
