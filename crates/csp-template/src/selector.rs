//! Template swap hooks around the build lifecycle.
//!
//! The working entry file holds one of two states, development or production
//! content. `on_build_start` moves it to production state, `on_build_end`
//! restores development state. `on_build_start` overwrites unconditionally,
//! so a build aborted before its restore hook cannot poison the next run.

use crate::error::Error;
use crate::mode::BuildMode;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;
use tracing::{debug, error, info};

pub const PRODUCTION_TEMPLATE: &str = "index.production.html";
pub const DEVELOPMENT_TEMPLATE: &str = "index.development.html";
pub const WORKING_ENTRY: &str = "index.html";

/// The two source templates and the working entry file they feed.
#[derive(Debug, Clone)]
pub struct TemplatePair {
    production: PathBuf,
    development: PathBuf,
    working: PathBuf,
}

impl TemplatePair {
    #[must_use]
    pub fn new(production: PathBuf, development: PathBuf, working: PathBuf) -> Self {
        Self {
            production,
            development,
            working,
        }
    }

    /// Conventional file names inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(
            dir.join(PRODUCTION_TEMPLATE),
            dir.join(DEVELOPMENT_TEMPLATE),
            dir.join(WORKING_ENTRY),
        )
    }

    #[must_use]
    pub fn working(&self) -> &Path {
        &self.working
    }

    /// Install the production template as the working entry. No-op outside
    /// production builds.
    ///
    /// # Errors
    /// Returns an error if the production template cannot be read or the
    /// working entry cannot be replaced. The build must abort in that case
    /// rather than continue with stale content.
    pub fn on_build_start(&self, mode: BuildMode) -> Result<(), Error> {
        if mode != BuildMode::Production {
            debug!(mode = %mode, "leaving {} untouched", self.working.display());
            return Ok(());
        }
        let html = read_template(&self.production)?;
        write_atomic(&self.working, &html)?;
        info!(
            "installed {} as {}",
            self.production.display(),
            self.working.display()
        );
        Ok(())
    }

    /// Restore the development template as the working entry. No-op outside
    /// production builds.
    ///
    /// # Errors
    /// Returns an error if the development template cannot be read or the
    /// working entry cannot be replaced.
    pub fn on_build_end(&self, mode: BuildMode) -> Result<(), Error> {
        if mode != BuildMode::Production {
            debug!(mode = %mode, "leaving {} untouched", self.working.display());
            return Ok(());
        }
        let html = read_template(&self.development)?;
        write_atomic(&self.working, &html)?;
        info!(
            "restored {} from {}",
            self.working.display(),
            self.development.display()
        );
        Ok(())
    }

    /// Perform the start-of-build swap and return a guard that restores the
    /// development template when dropped, including during unwinding. For
    /// in-process builds this replaces relying on a second lifecycle callback
    /// that might never fire.
    ///
    /// # Errors
    /// Same conditions as [`Self::on_build_start`].
    pub fn swap_for(&self, mode: BuildMode) -> Result<SwapGuard<'_>, Error> {
        self.on_build_start(mode)?;
        Ok(SwapGuard { pair: self, mode })
    }
}

/// Restores the development template on drop. Created by
/// [`TemplatePair::swap_for`].
#[derive(Debug)]
pub struct SwapGuard<'a> {
    pair: &'a TemplatePair,
    mode: BuildMode,
}

impl Drop for SwapGuard<'_> {
    fn drop(&mut self) {
        if let Err(err) = self.pair.on_build_end(self.mode) {
            error!(%err, "failed to restore development template");
        }
    }
}

fn read_template(path: &Path) -> Result<String, Error> {
    fs::read_to_string(path).map_err(|source| Error::TemplateRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Write through a sibling temp file and rename it over the target, so a
/// crash mid-write never leaves a torn entry file.
fn write_atomic(path: &Path, contents: &str) -> Result<(), Error> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let tmp = dir.join(format!(".csp-template.{}.tmp", process::id()));
    let write_err = |source| Error::EntryWrite {
        path: path.to_path_buf(),
        source,
    };
    fs::write(&tmp, contents).map_err(write_err)?;
    if let Err(source) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(write_err(source));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    struct Scratch {
        dir: PathBuf,
    }

    impl Scratch {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("csp-template-{}", Uuid::new_v4().simple()));
            fs::create_dir_all(&dir).unwrap();
            Self { dir }
        }

        fn pair(&self) -> TemplatePair {
            fs::write(self.dir.join(PRODUCTION_TEMPLATE), "<html>prod</html>").unwrap();
            fs::write(self.dir.join(DEVELOPMENT_TEMPLATE), "<html>dev</html>").unwrap();
            fs::write(self.dir.join(WORKING_ENTRY), "<html>dev</html>").unwrap();
            TemplatePair::in_dir(&self.dir)
        }

        fn working_content(&self) -> String {
            fs::read_to_string(self.dir.join(WORKING_ENTRY)).unwrap()
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.dir);
        }
    }

    #[test]
    fn production_start_installs_production_template() {
        let scratch = Scratch::new();
        let pair = scratch.pair();

        pair.on_build_start(BuildMode::Production).unwrap();
        assert_eq!(scratch.working_content(), "<html>prod</html>");
    }

    #[test]
    fn production_end_restores_development_template() {
        let scratch = Scratch::new();
        let pair = scratch.pair();

        pair.on_build_start(BuildMode::Production).unwrap();
        pair.on_build_end(BuildMode::Production).unwrap();
        assert_eq!(scratch.working_content(), "<html>dev</html>");
    }

    #[test]
    fn development_hooks_never_touch_the_entry() {
        let scratch = Scratch::new();
        let pair = scratch.pair();
        fs::write(scratch.dir.join(WORKING_ENTRY), "<html>custom</html>").unwrap();

        pair.on_build_start(BuildMode::Development).unwrap();
        pair.on_build_end(BuildMode::Development).unwrap();
        assert_eq!(scratch.working_content(), "<html>custom</html>");
    }

    #[test]
    fn missing_production_template_fails_the_start_hook() {
        let scratch = Scratch::new();
        let pair = scratch.pair();
        fs::remove_file(scratch.dir.join(PRODUCTION_TEMPLATE)).unwrap();

        let err = pair.on_build_start(BuildMode::Production).unwrap_err();
        assert!(matches!(err, Error::TemplateRead { .. }));
        // the entry must be left as it was
        assert_eq!(scratch.working_content(), "<html>dev</html>");
    }

    #[test]
    fn missing_development_template_fails_the_end_hook() {
        let scratch = Scratch::new();
        let pair = scratch.pair();
        fs::remove_file(scratch.dir.join(DEVELOPMENT_TEMPLATE)).unwrap();

        pair.on_build_start(BuildMode::Production).unwrap();
        let err = pair.on_build_end(BuildMode::Production).unwrap_err();
        assert!(matches!(err, Error::TemplateRead { .. }));
    }

    #[test]
    fn swap_guard_restores_on_drop() {
        let scratch = Scratch::new();
        let pair = scratch.pair();

        {
            let _guard = pair.swap_for(BuildMode::Production).unwrap();
            assert_eq!(scratch.working_content(), "<html>prod</html>");
        }
        assert_eq!(scratch.working_content(), "<html>dev</html>");
    }

    #[test]
    fn swap_guard_restores_during_unwinding() {
        let scratch = Scratch::new();
        let pair = scratch.pair();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = pair.swap_for(BuildMode::Production).unwrap();
            panic!("build blew up");
        }));
        assert!(result.is_err());
        assert_eq!(scratch.working_content(), "<html>dev</html>");
    }

    #[test]
    fn atomic_write_leaves_no_temp_files_behind() {
        let scratch = Scratch::new();
        let pair = scratch.pair();

        pair.on_build_start(BuildMode::Production).unwrap();
        let leftovers: Vec<_> = fs::read_dir(&scratch.dir)
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
