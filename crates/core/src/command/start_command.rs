use crate::{
    error::{Error, Result},
    project::{descriptor, Project},
};
use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;
use tracing::debug;

static PROJ_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[a-z]+proj$").expect("valid project suffix regex"));

/// Builds the path the launcher should start.
///
/// Published trees are launched from `${HOME}`; framework-dependent builds
/// from the publish directory under `${DEPS_DIR}/<idx>`.
pub struct StartCommand<'a> {
    project: &'a Project,
}

impl<'a> StartCommand<'a> {
    pub fn new(project: &'a Project) -> Self {
        Self { project }
    }

    /// The launch path, or `None` when there is no project or nothing
    /// runnable has been produced yet.
    pub fn start_command(&self) -> Result<Option<String>> {
        let Some(main_path) = self.project.main_path()? else {
            return Ok(None);
        };
        let base_name = self.base_name(&main_path)?;
        debug!("Start command base name for {:?}: {}", main_path, base_name);
        self.published_start_command(&base_name)
    }

    /// Executable name for `main_path`, honoring an `AssemblyName` override
    pub fn base_name(&self, main_path: &Path) -> Result<String> {
        let layout = self.project.layout();
        let file_name = main_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if layout.is_runtime_config_file(main_path) {
            return Ok(file_name
                .strip_suffix(layout.runtime_config_suffix.as_str())
                .unwrap_or(&file_name)
                .to_string());
        }

        match descriptor::assembly_name(main_path)? {
            Some(assembly_name) => {
                let base_name = PROJ_SUFFIX.replace(&assembly_name, "").into_owned();
                if !is_plain_file_name(&base_name) {
                    return Err(Error::MalformedDescriptor {
                        path: main_path.to_path_buf(),
                        message: format!("AssemblyName {assembly_name:?} must be a plain file name"),
                    });
                }
                Ok(base_name)
            }
            None => Ok(PROJ_SUFFIX.replace(&file_name, "").into_owned()),
        }
    }

    fn published_start_command(&self, base_name: &str) -> Result<Option<String>> {
        let layout = self.project.layout();
        let (published_path, runtime_path) = if self.project.is_published()? {
            (self.project.build_dir().to_path_buf(), layout.published_root())
        } else {
            (
                layout.publish_path(self.project.dep_dir()),
                layout.unpublished_root(self.project.deps_idx()),
            )
        };

        let executable = published_path.join(base_name);
        if executable.is_file() {
            make_executable(&executable)?;
            return Ok(Some(format!("{runtime_path}/{base_name}")));
        }

        let library = format!("{base_name}{}", layout.library_suffix);
        if published_path.join(&library).is_file() {
            return Ok(Some(format!("{runtime_path}/{library}")));
        }

        debug!("Nothing runnable for {} in {:?}", base_name, published_path);
        Ok(None)
    }
}

/// Exactly one normal path component, so joining it stays inside the
/// directory it is joined to
fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Restored archives can lose the execute bit
#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut permissions = std::fs::metadata(path)?.permissions();
    permissions.set_mode(permissions.mode() | 0o755);
    std::fs::set_permissions(path, permissions)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
