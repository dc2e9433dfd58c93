use std::path::{Path, PathBuf};

pub(crate) const EXPORT_DIR_ENV: &str = "BUDGETPLAN_EXPORT_DIR";
pub(crate) const LOG_FILTER_ENV: &str = "BUDGETPLAN_LOG";
const LOG_FILE_NAME: &str = "budgetplan.log";

#[derive(Debug, Clone)]
pub(crate) struct Settings {
    /// Directory export files are written into.
    pub(crate) export_dir: PathBuf,
    /// Log file used while the TUI owns the terminal; `None` disables it.
    pub(crate) log_file: Option<PathBuf>,
}

impl Settings {
    pub(crate) fn load() -> Self {
        let export_dir = std::env::var_os(EXPORT_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(default_export_dir);

        let log_file = directories::ProjectDirs::from("com", "budgetplan", "BudgetPlan")
            .map(|d| d.data_dir().join(LOG_FILE_NAME));

        Self {
            export_dir,
            log_file,
        }
    }

    pub(crate) fn with_export_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.export_dir = expand_home(dir.as_ref());
        self
    }
}

/// Downloads, then home, then the working directory.
fn default_export_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|d| {
            d.download_dir()
                .map(Path::to_path_buf)
                .or_else(|| Some(d.home_dir().to_path_buf()))
        })
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// Expand a leading `~/` to the home directory.
pub(crate) fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => directories::UserDirs::new()
            .map(|d| d.home_dir().join(rest))
            .unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
