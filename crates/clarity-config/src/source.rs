//! ---
//! clarity_section: "01-configuration"
//! clarity_subsection: "module"
//! clarity_type: "source"
//! clarity_scope: "code"
//! clarity_description: "Loads settings, formatting and entity logs from a configuration directory."
//! clarity_version: "v0.0.0-prealpha"
//! clarity_owner: "tbd"
//! ---
//! A configuration directory looks like:
//!
//! ```text
//! <dir>/settings.json
//! <dir>/formatting.json
//! <dir>/entities/*.json     one EntityLog per file
//! ```
//!
//! Loading never fails outright. Every problem is recorded as a
//! [`ConfigIssue`] and the affected record is left absent, which downstream
//! means "do not print".

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::entity::EntityLog;
use crate::errors::ConfigError;
use crate::formatting::Formatting;
use crate::settings::Settings;

pub const SETTINGS_FILE: &str = "settings.json";
pub const FORMATTING_FILE: &str = "formatting.json";
pub const ENTITIES_DIR: &str = "entities";

/// Which document of a configuration directory an issue refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigFile {
    Settings,
    Formatting,
    EntityLog,
}

impl ConfigFile {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFile::Settings => "settings",
            ConfigFile::Formatting => "formatting",
            ConfigFile::EntityLog => "entity log",
        }
    }
}

impl fmt::Display for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem found while reading a configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssue {
    DirectoryMissing { path: PathBuf },
    MissingFile { file: ConfigFile, path: PathBuf },
    Malformed { file: ConfigFile, path: PathBuf, reason: String },
    EntityDirectoryMissing { path: PathBuf },
    NoEntityLogs { path: PathBuf },
}

impl ConfigIssue {
    /// Whether this issue leaves emission disabled.
    pub fn disables_emission(&self) -> bool {
        match self {
            ConfigIssue::DirectoryMissing { .. } => true,
            ConfigIssue::MissingFile { file, .. } | ConfigIssue::Malformed { file, .. } => {
                matches!(file, ConfigFile::Settings | ConfigFile::Formatting)
            }
            ConfigIssue::EntityDirectoryMissing { .. } | ConfigIssue::NoEntityLogs { .. } => false,
        }
    }

    fn from_error(file: ConfigFile, error: ConfigError) -> Self {
        match error {
            ConfigError::Io { path, source } if source.kind() == std::io::ErrorKind::NotFound => {
                ConfigIssue::MissingFile { file, path }
            }
            ConfigError::Io { path, source } => ConfigIssue::Malformed {
                file,
                path,
                reason: source.to_string(),
            },
            ConfigError::Json { path, source } => ConfigIssue::Malformed {
                file,
                path: path.unwrap_or_default(),
                reason: source.to_string(),
            },
            ConfigError::NotAnObject { path, found } => ConfigIssue::Malformed {
                file,
                path: path.unwrap_or_default(),
                reason: format!("expected a JSON object, found {found}"),
            },
        }
    }
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigIssue::DirectoryMissing { path } => {
                write!(f, "configuration directory {} does not exist", path.display())
            }
            ConfigIssue::MissingFile { file, path } => {
                write!(f, "missing {} file {}", file, path.display())
            }
            ConfigIssue::Malformed { file, path, reason } => {
                write!(f, "malformed {} file {}: {}", file, path.display(), reason)
            }
            ConfigIssue::EntityDirectoryMissing { path } => {
                write!(f, "entity log directory {} does not exist", path.display())
            }
            ConfigIssue::NoEntityLogs { path } => {
                write!(f, "no entity logs found in {}", path.display())
            }
        }
    }
}

/// Everything decoded from one configuration directory.
#[derive(Debug, Clone, Default)]
pub struct ConfigSnapshot {
    pub settings: Option<Settings>,
    pub formatting: Option<Formatting>,
    pub entity_logs: Vec<EntityLog>,
    pub issues: Vec<ConfigIssue>,
    pub source: Option<PathBuf>,
}

impl ConfigSnapshot {
    pub const ENV_CONFIG_DIR: &str = "CLARITY_CONFIG_DIR";

    /// Load the directory named by `CLARITY_CONFIG_DIR`, or else the first
    /// existing candidate. With neither, the snapshot is empty and carries a
    /// `DirectoryMissing` issue for the first candidate.
    pub fn locate<P: AsRef<Path>>(candidates: &[P]) -> Self {
        let env_dir = std::env::var_os(Self::ENV_CONFIG_DIR).map(PathBuf::from);
        Self::locate_from(env_dir, candidates)
    }

    /// [`ConfigSnapshot::locate`] with the override passed in. An empty
    /// override is ignored.
    pub fn locate_from<P: AsRef<Path>>(override_dir: Option<PathBuf>, candidates: &[P]) -> Self {
        if let Some(dir) = override_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            return Self::load_dir(dir);
        }

        for candidate in candidates {
            if candidate.as_ref().is_dir() {
                return Self::load_dir(candidate);
            }
        }

        let path = candidates
            .first()
            .map(|p| p.as_ref().to_path_buf())
            .unwrap_or_default();
        warn!(
            inspected = %candidates
                .iter()
                .map(|p| p.as_ref().display().to_string())
                .collect::<Vec<_>>()
                .join(", "),
            "no configuration directory found"
        );
        Self {
            issues: vec![ConfigIssue::DirectoryMissing { path }],
            ..Self::default()
        }
    }

    /// Load a configuration directory, recording every problem as an issue.
    pub fn load_dir(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let mut snapshot = Self {
            source: Some(root.to_path_buf()),
            ..Self::default()
        };

        if !root.is_dir() {
            snapshot.issues.push(ConfigIssue::DirectoryMissing {
                path: root.to_path_buf(),
            });
            return snapshot;
        }

        match Settings::from_path(root.join(SETTINGS_FILE)) {
            Ok(settings) => snapshot.settings = Some(settings),
            Err(err) => snapshot
                .issues
                .push(ConfigIssue::from_error(ConfigFile::Settings, err)),
        }

        match Formatting::from_path(root.join(FORMATTING_FILE)) {
            Ok(formatting) => snapshot.formatting = Some(formatting),
            Err(err) => snapshot
                .issues
                .push(ConfigIssue::from_error(ConfigFile::Formatting, err)),
        }

        snapshot.load_entity_logs(&root.join(ENTITIES_DIR));

        debug!(
            config_dir = %root.display(),
            entity_logs = snapshot.entity_logs.len(),
            issues = snapshot.issues.len(),
            "configuration directory loaded"
        );
        snapshot
    }

    fn load_entity_logs(&mut self, dir: &Path) {
        if !dir.is_dir() {
            self.issues.push(ConfigIssue::EntityDirectoryMissing {
                path: dir.to_path_buf(),
            });
            return;
        }

        let files = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| entry.path().extension().is_some_and(|ext| ext == "json"));

        for entry in files {
            match EntityLog::from_path(entry.path()) {
                Ok(log) => self.entity_logs.push(log),
                Err(err) => self
                    .issues
                    .push(ConfigIssue::from_error(ConfigFile::EntityLog, err)),
            }
        }

        if self.entity_logs.is_empty() {
            self.issues.push(ConfigIssue::NoEntityLogs {
                path: dir.to_path_buf(),
            });
        }
    }

    /// Both settings and formatting decoded, so print points may fire.
    pub fn is_usable(&self) -> bool {
        self.settings.is_some() && self.formatting.is_some()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let snapshot = ConfigSnapshot::load_dir(&missing);
        assert!(!snapshot.is_usable());
        assert_eq!(
            snapshot.issues,
            vec![ConfigIssue::DirectoryMissing { path: missing }]
        );
        assert!(snapshot.issues[0].disables_emission());
    }

    #[test]
    fn missing_files_are_named() {
        let dir = tempfile::tempdir().unwrap();
        let snapshot = ConfigSnapshot::load_dir(dir.path());
        let files: Vec<_> = snapshot
            .issues
            .iter()
            .filter_map(|issue| match issue {
                ConfigIssue::MissingFile { file, .. } => Some(*file),
                _ => None,
            })
            .collect();
        assert_eq!(files, [ConfigFile::Settings, ConfigFile::Formatting]);
        assert!(snapshot
            .issues
            .iter()
            .any(|issue| matches!(issue, ConfigIssue::EntityDirectoryMissing { .. })));
    }

    #[test]
    fn malformed_entity_log_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{}").unwrap();
        fs::write(dir.path().join(FORMATTING_FILE), "{}").unwrap();
        let entities = dir.path().join(ENTITIES_DIR);
        fs::create_dir(&entities).unwrap();
        fs::write(entities.join("a.json"), r#"{"entityCode": "AAA"}"#).unwrap();
        fs::write(entities.join("b.json"), "{ not json").unwrap();
        fs::write(entities.join("notes.txt"), "ignored").unwrap();

        let snapshot = ConfigSnapshot::load_dir(dir.path());
        assert!(snapshot.is_usable());
        assert_eq!(snapshot.entity_logs.len(), 1);
        assert_eq!(snapshot.issues.len(), 1);
        let issue = &snapshot.issues[0];
        assert!(matches!(
            issue,
            ConfigIssue::Malformed { file: ConfigFile::EntityLog, .. }
        ));
        assert!(!issue.disables_emission());
        assert!(issue.to_string().contains("b.json"));
    }

    #[test]
    fn malformed_settings_disable_emission() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "[]").unwrap();
        fs::write(dir.path().join(FORMATTING_FILE), "{}").unwrap();
        let snapshot = ConfigSnapshot::load_dir(dir.path());
        assert!(snapshot.settings.is_none());
        assert!(!snapshot.is_usable());
        assert!(snapshot
            .issues
            .iter()
            .any(|issue| issue.disables_emission()));
    }

    #[test]
    fn malformed_formatting_disables_emission() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{}").unwrap();
        fs::write(dir.path().join(FORMATTING_FILE), "[]").unwrap();
        let snapshot = ConfigSnapshot::load_dir(dir.path());
        assert!(snapshot.settings.is_some());
        assert!(snapshot.formatting.is_none());
        assert!(!snapshot.is_usable());
        let issue = snapshot
            .issues
            .iter()
            .find(|issue| issue.disables_emission())
            .unwrap();
        assert!(matches!(
            issue,
            ConfigIssue::Malformed { file: ConfigFile::Formatting, reason, .. }
                if reason == "expected a JSON object, found an array"
        ));
    }

    #[test]
    fn array_entity_log_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), "{}").unwrap();
        fs::write(dir.path().join(FORMATTING_FILE), "{}").unwrap();
        fs::create_dir(dir.path().join(ENTITIES_DIR)).unwrap();
        fs::write(dir.path().join(ENTITIES_DIR).join("a.json"), "[]").unwrap();
        let snapshot = ConfigSnapshot::load_dir(dir.path());
        assert!(snapshot.is_usable());
        assert!(snapshot.entity_logs.is_empty());
        assert!(snapshot.issues.iter().any(|issue| matches!(
            issue,
            ConfigIssue::Malformed { file: ConfigFile::EntityLog, .. }
        )));
    }

    #[test]
    fn override_wins_over_candidates() {
        let chosen = tempfile::tempdir().unwrap();
        let candidate = tempfile::tempdir().unwrap();
        let snapshot =
            ConfigSnapshot::locate_from(Some(chosen.path().to_path_buf()), &[candidate.path()]);
        assert_eq!(snapshot.source.as_deref(), Some(chosen.path()));
    }

    #[test]
    fn first_existing_candidate_is_loaded() {
        let root = tempfile::tempdir().unwrap();
        let missing = root.path().join("missing");
        let present = root.path().join("present");
        fs::create_dir(&present).unwrap();
        let snapshot = ConfigSnapshot::locate_from(Some(PathBuf::new()), &[&missing, &present]);
        assert_eq!(snapshot.source.as_deref(), Some(present.as_path()));
    }

    #[test]
    fn no_candidate_reports_the_first() {
        let root = tempfile::tempdir().unwrap();
        let first = root.path().join("first");
        let second = root.path().join("second");
        let snapshot = ConfigSnapshot::locate_from(None, &[&first, &second]);
        assert!(snapshot.source.is_none());
        assert_eq!(
            snapshot.issues,
            vec![ConfigIssue::DirectoryMissing { path: first }]
        );
        assert!(!snapshot.is_usable());
    }
}
