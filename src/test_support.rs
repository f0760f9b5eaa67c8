use crate::generator::Job;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Scratch directory holding `hosts.csv`, `host.tmpl` and an output path.
pub(crate) struct Workspace {
    temp_dir: TempDir,
    input: PathBuf,
    template: PathBuf,
    output: PathBuf,
}

impl Workspace {
    pub(crate) fn new(csv: &str, template: &str) -> Self {
        Self::with_output(csv, template, "out")
    }

    pub(crate) fn with_output(csv: &str, template: &str, output: &str) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("hosts.csv");
        let template_path = temp_dir.path().join("host.tmpl");
        std::fs::write(&input, csv).unwrap();
        std::fs::write(&template_path, template).unwrap();

        let output = temp_dir.path().join(output);
        Self {
            temp_dir,
            input,
            template: template_path,
            output,
        }
    }

    pub(crate) fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub(crate) fn input_path(&self) -> PathBuf {
        self.input.clone()
    }

    pub(crate) fn template_path(&self) -> PathBuf {
        self.template.clone()
    }

    pub(crate) fn output_dir(&self) -> &Path {
        &self.output
    }

    pub(crate) fn job(&self) -> Job<'_> {
        Job {
            input: &self.input,
            template: &self.template,
            output_dir: &self.output,
        }
    }

    /// Sorted names of the entries in the output directory (empty if absent).
    pub(crate) fn output_files(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(&self.output) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
