use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The roster exports, named `{FileType}_{MonthName}.csv` on disk.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CsvFileType {
    #[serde(rename = "Daily_Stats")]
    DailyStats,
    #[serde(rename = "Dealer_Shift")]
    DealerShift,
    #[serde(rename = "Dealer_Stats")]
    DealerStats,
    #[serde(rename = "Dealer_WH")]
    DealerWH,
    #[serde(rename = "SM_Shift")]
    SMShift,
    #[serde(rename = "SM_WH")]
    SMWH,
}

/// The four column layouts the exports come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileShape {
    DailyStats,
    Shift,
    WorkingHours,
    MistakeStats,
}

impl fmt::Display for FileShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileShape::DailyStats => "daily stats",
            FileShape::Shift => "shift",
            FileShape::WorkingHours => "working hours",
            FileShape::MistakeStats => "mistake stats",
        };
        f.write_str(name)
    }
}

impl CsvFileType {
    pub const ALL: [CsvFileType; 6] = [
        CsvFileType::DailyStats,
        CsvFileType::DealerShift,
        CsvFileType::DealerStats,
        CsvFileType::DealerWH,
        CsvFileType::SMShift,
        CsvFileType::SMWH,
    ];

    /// Files that must all exist for a month to count as published.
    pub const REQUIRED: [CsvFileType; 3] = [
        CsvFileType::DailyStats,
        CsvFileType::DealerShift,
        CsvFileType::DealerStats,
    ];

    pub fn stem(self) -> &'static str {
        match self {
            CsvFileType::DailyStats => "Daily_Stats",
            CsvFileType::DealerShift => "Dealer_Shift",
            CsvFileType::DealerStats => "Dealer_Stats",
            CsvFileType::DealerWH => "Dealer_WH",
            CsvFileType::SMShift => "SM_Shift",
            CsvFileType::SMWH => "SM_WH",
        }
    }

    pub fn file_name(self, month: &str) -> String {
        format!("{}_{}.csv", self.stem(), month)
    }
}

impl fmt::Display for CsvFileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stem())
    }
}

impl FromStr for CsvFileType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        CsvFileType::ALL
            .into_iter()
            .find(|t| t.stem().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| anyhow!("Unknown file type: '{}'", s))
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Dealer,
    #[serde(rename = "sm")]
    ShiftManager,
    Operation,
    Admin,
    GlobalAdmin,
}

impl Role {
    pub fn files(self) -> &'static [CsvFileType] {
        match self {
            Role::Dealer => &[
                CsvFileType::DailyStats,
                CsvFileType::DealerShift,
                CsvFileType::DealerStats,
                CsvFileType::DealerWH,
            ],
            Role::ShiftManager => &[
                CsvFileType::DailyStats,
                CsvFileType::DealerStats,
                CsvFileType::SMShift,
                CsvFileType::SMWH,
            ],
            Role::Operation | Role::Admin | Role::GlobalAdmin => &CsvFileType::ALL,
        }
    }

    pub fn can_read(self, file_type: CsvFileType) -> bool {
        self.files().contains(&file_type)
    }

    /// Dealers and shift managers only ever see their own rows.
    pub fn is_personal(self) -> bool {
        matches!(self, Role::Dealer | Role::ShiftManager)
    }

    pub fn shows_total_row(self) -> bool {
        self == Role::Operation
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "dealer" => Ok(Role::Dealer),
            "sm" | "shift_manager" | "shift-manager" => Ok(Role::ShiftManager),
            "operation" => Ok(Role::Operation),
            "admin" => Ok(Role::Admin),
            "global_admin" | "global-admin" => Ok(Role::GlobalAdmin),
            _ => Err(anyhow!("Unknown role: '{}'", s)),
        }
    }
}

/// Portal sections that each have their own list of visible months.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Schedule,
    MistakeStatistics,
    DailyMistakes,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name() {
        assert_eq!(CsvFileType::DealerWH.file_name("October"), "Dealer_WH_October.csv");
        assert_eq!(CsvFileType::SMShift.file_name("May"), "SM_Shift_May.csv");
    }

    #[test]
    fn test_from_str_round_trips_stem() {
        for t in CsvFileType::ALL {
            assert_eq!(t.stem().parse::<CsvFileType>().unwrap(), t);
        }
        assert!("Dealer".parse::<CsvFileType>().is_err());
    }

    #[test]
    fn test_role_files() {
        assert!(Role::Dealer.can_read(CsvFileType::DealerWH));
        assert!(!Role::Dealer.can_read(CsvFileType::SMShift));
        assert!(Role::ShiftManager.can_read(CsvFileType::SMWH));
        assert!(!Role::ShiftManager.can_read(CsvFileType::DealerShift));
        assert_eq!(Role::Operation.files().len(), 6);
    }

    #[test]
    fn test_role_parse() {
        assert_eq!("sm".parse::<Role>().unwrap(), Role::ShiftManager);
        assert_eq!("Operation".parse::<Role>().unwrap(), Role::Operation);
        assert!("boss".parse::<Role>().is_err());
    }
}
