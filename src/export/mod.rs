// DMR ID export formats
//
// anytone.rs writes the CSV contact list imported by AnyTone D878/D578 CPS,
// text.rs writes a fixed-width column listing. Both consume users that have
// already been touched up.

pub mod anytone;
pub mod text;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::registry::DmrUser;

pub use anytone::write_anytone;
pub use text::{left_just, write_text, FIELD_WIDTHS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Anytone,
    Text,
}

impl ExportFormat {
    /// Suffix appended to the database file stem
    fn suffix(self) -> &'static str {
        match self {
            ExportFormat::Anytone => "-anytone.csv",
            ExportFormat::Text => "-text.txt",
        }
    }
}

/// Result of one export run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub path: PathBuf,
    pub count: usize,
}

impl ExportSummary {
    /// User feedback line, e.g. `DMRID file (users-anytone.csv) exported with 1,234 IDs`
    pub fn message(&self) -> String {
        format!(
            "DMRID file ({}) exported with {} IDs",
            self.path.display(),
            group_thousands(self.count)
        )
    }
}

/// Output path for `format`, named after the database file
pub fn export_path(database: &Path, output_dir: &Path, format: ExportFormat) -> PathBuf {
    let stem = database
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "users".to_string());
    output_dir.join(format!("{}{}", stem, format.suffix()))
}

/// Write `users` to `path` in the given format
pub fn export_users(users: &[DmrUser], format: ExportFormat, path: &Path) -> Result<ExportSummary> {
    let count = match format {
        ExportFormat::Anytone => anytone::export_anytone(users, path)?,
        ExportFormat::Text => text::export_text(users, path)?,
    };
    log::info!("Exported {} DMR IDs to {:?}", count, path);
    Ok(ExportSummary { path: path.to_path_buf(), count })
}

/// Format a count with `,` thousands separators
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(271828), "271,828");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_export_path() {
        let out = Path::new("out");
        assert_eq!(
            export_path(Path::new("users.json"), out, ExportFormat::Anytone),
            PathBuf::from("out/users-anytone.csv")
        );
        assert_eq!(
            export_path(Path::new("/data/users.json"), out, ExportFormat::Text),
            PathBuf::from("out/users-text.txt")
        );
    }

    #[test]
    fn test_summary_message() {
        let summary = ExportSummary { path: PathBuf::from("users-text.txt"), count: 12345 };
        assert_eq!(summary.message(), "DMRID file (users-text.txt) exported with 12,345 IDs");
    }
}
