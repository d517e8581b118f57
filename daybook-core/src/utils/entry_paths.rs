//! Entry file naming.
//!
//! Entries live at `<project_dir>/<MM_DD_YYYY>/<secs>[.<fraction>].txt[.encrypted]`.
//! The folder is the local creation day; the file name is the creation instant.

use crate::error::{DaybookError, Result};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use std::{
    fmt,
    path::{Path, PathBuf},
};

pub const DATE_FOLDER_FORMAT: &str = "%m_%d_%Y";
pub const PLAIN_EXTENSION: &str = ".txt";
pub const ENCRYPTED_EXTENSION: &str = ".txt.encrypted";

static FILE_NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<secs>\d+)(?:\.(?P<frac>\d+))?\.txt(?P<enc>\.encrypted)?$").expect("valid regex")
});

static DATE_FOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{2}_\d{2}_\d{4}$").expect("valid regex"));

/// A sub-second unix timestamp as it appears in an entry file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryStamp {
    pub secs: i64,
    pub nanos: u32,
}

impl EntryStamp {
    pub fn from_datetime<Tz: TimeZone>(at: &DateTime<Tz>) -> Self {
        Self {
            secs: at.timestamp(),
            nanos: at.timestamp_subsec_nanos().min(999_999_999),
        }
    }

    /// Reads `<secs>` or `<secs>.<fraction>`; fraction digits past nanoseconds are dropped.
    fn parse(secs: &str, frac: Option<&str>) -> Option<Self> {
        let secs = secs.parse().ok()?;
        let nanos = match frac {
            Some(f) => {
                let digits: String = f.chars().chain(std::iter::repeat('0')).take(9).collect();
                digits.parse().ok()?
            }
            None => 0,
        };
        Some(Self { secs, nanos })
    }
}

impl fmt::Display for EntryStamp {
    /// New files carry microsecond precision: `1723705512.004211`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:06}", self.secs, self.nanos / 1_000)
    }
}

/// Orders entries chronologically: day folder first, then the timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntrySortKey {
    pub date: NaiveDate,
    pub stamp: EntryStamp,
}

/// The structured form of an entry's location below the project directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryFileName {
    pub date: NaiveDate,
    pub stamp: EntryStamp,
    pub encrypted: bool,
}

impl EntryFileName {
    pub fn new(date: NaiveDate, stamp: EntryStamp, encrypted: bool) -> Self {
        Self {
            date,
            stamp,
            encrypted,
        }
    }

    /// Parses `.../MM_DD_YYYY/<digits>[.<digits>].txt[.encrypted]`.
    pub fn from_path(path: &Path) -> Result<Self> {
        let invalid = || DaybookError::InvalidFileName(path.to_path_buf());

        let file_name = path.file_name().and_then(|n| n.to_str()).ok_or_else(invalid)?;
        let folder = path
            .parent()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .ok_or_else(invalid)?;

        if !DATE_FOLDER_RE.is_match(folder) {
            return Err(invalid());
        }
        let date = NaiveDate::parse_from_str(folder, DATE_FOLDER_FORMAT).map_err(|_| invalid())?;

        let caps = FILE_NAME_RE.captures(file_name).ok_or_else(invalid)?;
        let stamp = EntryStamp::parse(&caps["secs"], caps.name("frac").map(|m| m.as_str()))
            .ok_or_else(invalid)?;

        Ok(Self {
            date,
            stamp,
            encrypted: caps.name("enc").is_some(),
        })
    }

    pub fn folder_name(&self) -> String {
        self.date.format(DATE_FOLDER_FORMAT).to_string()
    }

    pub fn file_name(&self) -> String {
        let extension = if self.encrypted {
            ENCRYPTED_EXTENSION
        } else {
            PLAIN_EXTENSION
        };
        format!("{}{extension}", self.stamp)
    }

    pub fn path_in(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(self.folder_name()).join(self.file_name())
    }

    pub fn sort_key(&self) -> EntrySortKey {
        EntrySortKey {
            date: self.date,
            stamp: self.stamp,
        }
    }
}

/// Path for a new entry created at `stamp`; the folder is today's local date.
pub fn entry_filename(project_dir: &Path, stamp: EntryStamp, is_encrypted: bool) -> PathBuf {
    entry_filename_on(project_dir, Local::now().date_naive(), stamp, is_encrypted)
}

pub fn entry_filename_on(
    project_dir: &Path,
    date: NaiveDate,
    stamp: EntryStamp,
    is_encrypted: bool,
) -> PathBuf {
    EntryFileName::new(date, stamp, is_encrypted).path_in(project_dir)
}

pub fn sort_key_for_filename(path: &Path) -> Result<EntrySortKey> {
    Ok(EntryFileName::from_path(path)?.sort_key())
}

pub fn is_encrypted_path(path: &Path) -> bool {
    path.to_string_lossy().ends_with(ENCRYPTED_EXTENSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn builds_plain_and_encrypted_paths() {
        let stamp = EntryStamp {
            secs: 1_723_705_512,
            nanos: 4_211_000,
        };
        let root = Path::new("/journals/personal");

        let plain = entry_filename_on(root, date(2025, 8, 15), stamp, false);
        assert_eq!(
            plain,
            PathBuf::from("/journals/personal/08_15_2025/1723705512.004211.txt")
        );

        let encrypted = entry_filename_on(root, date(2025, 8, 15), stamp, true);
        assert!(encrypted.ends_with("08_15_2025/1723705512.004211.txt.encrypted"));
        assert!(is_encrypted_path(&encrypted));
        assert!(!is_encrypted_path(&plain));
    }

    #[test]
    fn folder_uses_today_not_the_stamp() {
        let stamp = EntryStamp { secs: 0, nanos: 0 };
        let path = entry_filename(Path::new("/j"), stamp, false);
        let today = Local::now().date_naive().format(DATE_FOLDER_FORMAT).to_string();
        assert!(path.starts_with(Path::new("/j").join(today)));
    }

    #[test]
    fn parses_what_it_builds() {
        let name = EntryFileName::new(
            date(2024, 12, 31),
            EntryStamp {
                secs: 1_735_600_000,
                nanos: 120_000,
            },
            true,
        );
        let parsed = EntryFileName::from_path(&name.path_in(Path::new("/j/book"))).unwrap();
        assert_eq!(parsed, name);
    }

    #[test]
    fn parses_legacy_fraction_lengths() {
        let short = EntryFileName::from_path(Path::new("/j/01_02_2019/1546400000.5.txt")).unwrap();
        assert_eq!(short.stamp.nanos, 500_000_000);

        let bare = EntryFileName::from_path(Path::new("/j/01_02_2019/1546400000.txt")).unwrap();
        assert_eq!(bare.stamp.nanos, 0);

        let long =
            EntryFileName::from_path(Path::new("/j/01_02_2019/1546400000.12345678912.txt")).unwrap();
        assert_eq!(long.stamp.nanos, 123_456_789);
    }

    #[test]
    fn sort_key_is_chronological_not_lexical() {
        // Lexically "01_01_2025" < "12_31_2024", chronologically the reverse.
        let new_year = sort_key_for_filename(Path::new("/j/01_01_2025/1735689600.1.txt")).unwrap();
        let eve = sort_key_for_filename(Path::new("/j/12_31_2024/1735603200.9.txt")).unwrap();
        assert!(new_year > eve);

        let earlier = sort_key_for_filename(Path::new("/j/08_15_2025/1723705512.2.txt")).unwrap();
        let later = sort_key_for_filename(Path::new("/j/08_15_2025/1723705512.25.txt")).unwrap();
        assert!(later > earlier);

        let nine = sort_key_for_filename(Path::new("/j/08_15_2025/999999999.txt")).unwrap();
        let ten = sort_key_for_filename(Path::new("/j/08_15_2025/1000000000.txt")).unwrap();
        assert!(ten > nine);
    }

    #[test]
    fn rejects_foreign_paths() {
        for p in [
            "/j/notes/1723705512.1.txt",
            "/j/08_15_2025/notes.txt",
            "/j/08_15_2025/1723705512.1.md",
            "/j/13_45_2025/1723705512.1.txt",
            "README.md",
        ] {
            let err = sort_key_for_filename(Path::new(p)).unwrap_err();
            assert!(matches!(err, DaybookError::InvalidFileName(_)), "{p}");
        }
    }
}
