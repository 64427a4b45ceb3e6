//! Hand-off of a rendered Hudl sheet to the host application.
//!
//! The encoder itself is pure. Writing the file, presenting it in a share
//! sheet and telling the user what happened are done by collaborators the
//! caller plugs in through [`FileStore`], [`ShareSheet`] and [`Notifier`].

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use crate::error::{Error, Result};
use crate::play::{Play, TeamInfo};

use super::format::ExportFormat;
use super::hudl::HudlExporter;

/// Prefix of every exported file name
pub const FILE_PREFIX: &str = "StatIQ";

pub const CSV_MIME_TYPE: &str = "text/csv";
pub const CSV_UTI: &str = "public.comma-separated-values-text";
pub const SHARE_DIALOG_TITLE: &str = "Export Game Data to Hudl";

/// `StatIQ_<home>_vs_<away>_<YYYY-MM-DD>.csv`
///
/// Team names are used as-is.
pub fn export_file_name(home: &str, away: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_vs_{}_{}.csv",
        FILE_PREFIX,
        home,
        away,
        date.format("%Y-%m-%d")
    )
}

/// What the share sheet is asked to present
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShareRequest<'a> {
    pub mime_type: &'a str,
    pub dialog_title: &'a str,
    pub uti: &'a str,
}

impl Default for ShareRequest<'static> {
    fn default() -> Self {
        Self {
            mime_type: CSV_MIME_TYPE,
            dialog_title: SHARE_DIALOG_TITLE,
            uti: CSV_UTI,
        }
    }
}

/// Persists exported text and reports where it landed
pub trait FileStore {
    fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf>;
}

/// Presents a written file to the user
pub trait ShareSheet {
    fn is_available(&self) -> bool;

    fn share(&self, path: &Path, request: &ShareRequest<'_>) -> Result<()>;
}

/// User-facing message sink
pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// File written but no share sheet to hand it to
    ExportComplete { file_name: String },
    ExportFailed,
}

impl Notice {
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExportComplete { .. } => "Export Complete",
            Self::ExportFailed => "Export Failed",
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::ExportComplete { file_name } => format!("File saved to: {}", file_name),
            Self::ExportFailed => "Could not export game data. Please try again.".to_string(),
        }
    }
}

/// Successful export, with the path the store reported
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    Shared(PathBuf),
    Saved(PathBuf),
}

impl ExportOutcome {
    pub fn path(&self) -> &Path {
        match self {
            Self::Shared(path) | Self::Saved(path) => path,
        }
    }
}

/// Writes files into a single directory, creating it on first use
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
}

impl DirectoryStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

impl FileStore for DirectoryStore {
    fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.dir.join(file_name);
        fs::create_dir_all(&self.dir)
            .and_then(|_| fs::write(&path, contents))
            .map_err(|e| Error::WriteFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        Ok(path)
    }
}

/// Share sheet for hosts that have none
#[derive(Debug, Clone, Copy, Default)]
pub struct NoShareSheet;

impl ShareSheet for NoShareSheet {
    fn is_available(&self) -> bool {
        false
    }

    fn share(&self, _path: &Path, _request: &ShareRequest<'_>) -> Result<()> {
        Err(Error::ShareFailed("sharing is not available".to_string()))
    }
}

/// Renders a play log, stores it and offers it to the user.
pub struct HudlExport<F, S, N> {
    store: F,
    share_sheet: S,
    notifier: N,
    exporter: HudlExporter,
}

impl<F, S, N> HudlExport<F, S, N>
where
    F: FileStore,
    S: ShareSheet,
    N: Notifier,
{
    pub fn new(store: F, share_sheet: S, notifier: N) -> Self {
        Self {
            store,
            share_sheet,
            notifier,
            exporter: HudlExporter::default(),
        }
    }

    pub fn with_exporter(mut self, exporter: HudlExporter) -> Self {
        self.exporter = exporter;
        self
    }

    /// Export using today's (UTC) date in the file name.
    pub fn export(&self, plays: &[Play], home: &TeamInfo, away: &TeamInfo) -> bool {
        self.export_dated(plays, home, away, Utc::now().date_naive())
    }

    /// Export and report the result as a single success flag.
    ///
    /// Any collaborator failure produces exactly one [`Notice::ExportFailed`].
    pub fn export_dated(
        &self,
        plays: &[Play],
        home: &TeamInfo,
        away: &TeamInfo,
        date: NaiveDate,
    ) -> bool {
        let csv = self.exporter.format_rows(plays);
        let file_name = export_file_name(&home.name, &away.name, date);

        match self.deliver(&csv, &file_name) {
            Ok(_) => true,
            Err(e) => {
                error!("Export failed: {}", e);
                self.notifier.notify(&Notice::ExportFailed);
                false
            }
        }
    }

    /// Write `csv` under `file_name`, then share it or announce where it was
    /// saved. No retries.
    pub fn deliver(&self, csv: &str, file_name: &str) -> Result<ExportOutcome> {
        let path = self.store.write_text(file_name, csv)?;
        info!("Wrote Hudl export to {}", path.display());

        if self.share_sheet.is_available() {
            self.share_sheet.share(&path, &ShareRequest::default())?;
            info!("Shared {}", file_name);
            Ok(ExportOutcome::Shared(path))
        } else {
            self.notifier.notify(&Notice::ExportComplete {
                file_name: file_name.to_string(),
            });
            Ok(ExportOutcome::Saved(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[derive(Default)]
    struct MemoryStore {
        files: RefCell<Vec<(String, String)>>,
        fail: bool,
    }

    impl FileStore for &MemoryStore {
        fn write_text(&self, file_name: &str, contents: &str) -> Result<PathBuf> {
            if self.fail {
                return Err(Error::Io(std::io::Error::other("read-only")));
            }
            self.files
                .borrow_mut()
                .push((file_name.to_string(), contents.to_string()));
            Ok(PathBuf::from("/documents").join(file_name))
        }
    }

    #[derive(Default)]
    struct RecordingShareSheet {
        available: bool,
        fail: bool,
        shared: RefCell<Vec<PathBuf>>,
    }

    impl ShareSheet for &RecordingShareSheet {
        fn is_available(&self) -> bool {
            self.available
        }

        fn share(&self, path: &Path, request: &ShareRequest<'_>) -> Result<()> {
            assert_eq!(request.mime_type, "text/csv");
            if self.fail {
                return Err(Error::ShareFailed("dismissed".to_string()));
            }
            self.shared.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    #[derive(Default)]
    struct RecordingNotifier {
        notices: RefCell<Vec<Notice>>,
    }

    impl Notifier for &RecordingNotifier {
        fn notify(&self, notice: &Notice) {
            self.notices.borrow_mut().push(notice.clone());
        }
    }

    fn teams() -> (TeamInfo, TeamInfo) {
        (TeamInfo::new("Joshua", 28), TeamInfo::new("Eagles", 21))
    }

    fn game_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 3).unwrap()
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name("Joshua", "Eagles", game_day()),
            "StatIQ_Joshua_vs_Eagles_2025-10-03.csv"
        );
        assert_eq!(
            export_file_name("North High", "St. Mary's", game_day()),
            "StatIQ_North High_vs_St. Mary's_2025-10-03.csv"
        );
    }

    #[test]
    fn test_export_shares_when_available() {
        let store = MemoryStore::default();
        let sheet = RecordingShareSheet {
            available: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let (home, away) = teams();

        let export = HudlExport::new(&store, &sheet, &notifier);
        assert!(export.export_dated(&[Play::new("run")], &home, &away, game_day()));

        let files = store.files.borrow();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].0, "StatIQ_Joshua_vs_Eagles_2025-10-03.csv");
        assert_eq!(files[0].1.lines().count(), 2);
        assert_eq!(
            sheet.shared.borrow().as_slice(),
            &[PathBuf::from("/documents/StatIQ_Joshua_vs_Eagles_2025-10-03.csv")]
        );
        assert!(notifier.notices.borrow().is_empty());
    }

    #[test]
    fn test_export_falls_back_to_notice() {
        let store = MemoryStore::default();
        let sheet = RecordingShareSheet::default();
        let notifier = RecordingNotifier::default();
        let (home, away) = teams();

        let export = HudlExport::new(&store, &sheet, &notifier);
        assert!(export.export_dated(&[], &home, &away, game_day()));

        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title(), "Export Complete");
        assert_eq!(
            notices[0].message(),
            "File saved to: StatIQ_Joshua_vs_Eagles_2025-10-03.csv"
        );
    }

    #[test]
    fn test_write_failure_reports_once() {
        let store = MemoryStore {
            fail: true,
            ..Default::default()
        };
        let sheet = RecordingShareSheet {
            available: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let (home, away) = teams();

        let export = HudlExport::new(&store, &sheet, &notifier);
        assert!(!export.export_dated(&[Play::new("run")], &home, &away, game_day()));

        assert!(sheet.shared.borrow().is_empty());
        assert_eq!(notifier.notices.borrow().as_slice(), &[Notice::ExportFailed]);
    }

    #[test]
    fn test_share_failure_reports_once() {
        let store = MemoryStore::default();
        let sheet = RecordingShareSheet {
            available: true,
            fail: true,
            ..Default::default()
        };
        let notifier = RecordingNotifier::default();
        let (home, away) = teams();

        let export = HudlExport::new(&store, &sheet, &notifier);
        assert!(!export.export_dated(&[Play::new("run")], &home, &away, game_day()));

        // File stays behind; no cleanup on share failure
        assert_eq!(store.files.borrow().len(), 1);
        let notices = notifier.notices.borrow();
        assert_eq!(notices.as_slice(), &[Notice::ExportFailed]);
        assert_eq!(
            notices[0].message(),
            "Could not export game data. Please try again."
        );
    }

    #[test]
    fn test_deliver_outcome_path() {
        let store = MemoryStore::default();
        let notifier = RecordingNotifier::default();
        let export = HudlExport::new(&store, NoShareSheet, &notifier);

        let outcome = export.deliver("\"QTR\"", "game.csv").unwrap();
        assert_eq!(outcome, ExportOutcome::Saved(PathBuf::from("/documents/game.csv")));
        assert_eq!(outcome.path(), Path::new("/documents/game.csv"));
    }

    #[test]
    fn test_directory_store_writes_file() {
        let temp = tempfile::tempdir().unwrap();
        let store = DirectoryStore::new(temp.path().join("exports"));

        let path = store.write_text("game.csv", "\"QTR\"").unwrap();
        assert_eq!(path, temp.path().join("exports").join("game.csv"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "\"QTR\"");
    }

    #[test]
    fn test_directory_store_reports_write_failure() {
        let temp = tempfile::tempdir().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let store = DirectoryStore::new(&blocker);
        let err = store.write_text("game.csv", "").unwrap_err();
        assert!(matches!(err, Error::WriteFailed { .. }));
    }
}
