//! Integration tests for project, framework and start command resolution

use dotnet_launch_core::{
    Dependency, Error, FrameworkInstaller, Installer, LaunchEngine, Project, StartCommand,
    StaticCatalog, catalog, version,
};
use std::cell::Cell;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_files(root: &Path, names: &[&str]) {
    for name in names {
        let path = root.join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "").unwrap();
    }
}

#[test]
fn test_resolve_picks_highest_in_line() {
    let catalog = vec![
        "1.0.16".to_string(),
        "1.1.9".to_string(),
        "1.1.10".to_string(),
        "2.0.9".to_string(),
        "1.1.10-preview".to_string(),
    ];

    assert_eq!(version::find_matching_version("1.1.x", &catalog).unwrap(), "1.1.10");
    assert_eq!(version::find_matching_version("1.x", &catalog).unwrap(), "1.1.10");
    assert!(matches!(
        version::find_matching_version("1.2.x", &catalog),
        Err(Error::NoMatchingVersion { available: 5, .. })
    ));
}

#[test]
fn test_first_of_version_line() {
    let catalog = StaticCatalog::new().with_versions("dotnet", ["2.1.300", "2.1.4", "2.1.302"]);
    assert_eq!(
        catalog::first_of_version_line(&catalog, "dotnet", "2.1.x").unwrap(),
        "2.1.302"
    );
}

#[test]
fn test_project_files_never_include_reserved_dir() {
    let build_dir = TempDir::new().unwrap();
    write_files(
        build_dir.path(),
        &[
            "app/app.csproj",
            ".cloudfoundry/0/dotnet/sdk/a.csproj",
            "lib/.cloudfoundry/b.fsproj",
            ".cloudfoundry/c.vbproj",
        ],
    );
    let project = Project::new(build_dir.path(), build_dir.path().join(".cloudfoundry/0"), "0");

    let paths = project.proj_file_paths().unwrap();
    assert_eq!(paths, vec![build_dir.path().join("app/app.csproj")]);
    assert!(paths
        .iter()
        .all(|p| !p.components().any(|c| c.as_os_str() == ".cloudfoundry")));
}

#[test]
fn test_main_path_hint_and_ambiguity() {
    let build_dir = TempDir::new().unwrap();
    let deps_dir = TempDir::new().unwrap();
    write_files(
        build_dir.path(),
        &[
            "first.csproj",
            "dir/second.csproj",
            "a/b/first.vbproj",
            "b/c/first.fsproj",
        ],
    );
    let hint = build_dir.path().join(".deployment");
    fs::write(&hint, "[config]\nproject = ./a/b/first.vbproj").unwrap();
    let project = Project::new(build_dir.path(), deps_dir.path(), "0");

    assert_eq!(
        project.main_path().unwrap(),
        Some(build_dir.path().join("a/b/first.vbproj"))
    );

    fs::remove_file(&hint).unwrap();
    match project.main_path() {
        Err(Error::AmbiguousProject { candidates }) => assert_eq!(candidates.len(), 4),
        other => panic!("expected AmbiguousProject, got {other:?}"),
    }
}

#[test]
fn test_start_command_with_assembly_name() {
    let build_dir = TempDir::new().unwrap();
    let deps_dir = TempDir::new().unwrap();
    let dep_dir = deps_dir.path().join("9");
    fs::create_dir_all(build_dir.path().join("subdir")).unwrap();
    fs::write(
        build_dir.path().join("subdir/fred.csproj"),
        "<Project><PropertyGroup><AssemblyName>f.red</AssemblyName></PropertyGroup></Project>",
    )
    .unwrap();
    write_files(&dep_dir, &["dotnet_publish/f.red"]);
    let project = Project::new(build_dir.path(), &dep_dir, "9");

    assert_eq!(
        StartCommand::new(&project).start_command().unwrap(),
        Some("${DEPS_DIR}/9/dotnet_publish/f.red".to_string())
    );
}

/// Counts installs and creates the framework directory
struct CountingInstaller {
    installs: Cell<usize>,
}

impl Installer for CountingInstaller {
    fn install_dependency(&self, dependency: &Dependency, destination: &Path) -> anyhow::Result<()> {
        self.installs.set(self.installs.get() + 1);
        fs::create_dir_all(
            destination
                .join("shared/Microsoft.NETCore.App")
                .join(&dependency.version),
        )?;
        Ok(())
    }
}

#[test]
fn test_end_to_end_install_is_idempotent() {
    let build_dir = TempDir::new().unwrap();
    let deps_dir = TempDir::new().unwrap();
    fs::write(
        build_dir.path().join("web.runtimeconfig.json"),
        r#"{ "runtimeOptions": { "framework": { "name": "Microsoft.NETCore.App", "version": "2.1.2" } } }"#,
    )
    .unwrap();
    let catalog = StaticCatalog::new().with_versions("dotnet-framework", ["2.1.2", "2.1.9", "2.2.1"]);
    let installer = CountingInstaller {
        installs: Cell::new(0),
    };
    let engine = LaunchEngine::new(Project::new(build_dir.path(), deps_dir.path(), "0"));

    let first = engine.install_frameworks(&catalog, &installer).unwrap();
    let second = engine.install_frameworks(&catalog, &installer).unwrap();

    assert_eq!(first, vec![Dependency::new("dotnet-framework", "2.1.9")]);
    assert!(second.is_empty());
    assert_eq!(installer.installs.get(), 1);
    assert!(FrameworkInstaller::new(engine.project(), &installer)
        .is_installed("2.1.9")
        .unwrap());
}
