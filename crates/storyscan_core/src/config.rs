use anyhow::{Result, anyhow};
use log::{debug, trace};
use std::{
    env, fmt, fs,
    path::{Path, PathBuf},
};

use crate::constants::PROJECT_MANIFEST;

pub fn find_git_root() -> Result<PathBuf> {
    debug!("Searching for git root");
    let mut current_dir = env::current_dir()?;
    trace!("Starting search from: {:?}", current_dir);

    loop {
        let git_dir = current_dir.join(".git");
        trace!("Checking for .git at: {:?}", git_dir);
        if git_dir.exists() {
            debug!("Found git root at: {:?}", current_dir);
            return Ok(current_dir);
        }

        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                debug!("Could not find .git directory in any parent folder");
                return Err(anyhow!("Could not find .git directory in any parent folder"));
            }
        }
    }
}

/// Best-effort read of the project manifest at `root`. Missing file or
/// malformed JSON both yield `None`; manifest probing is never fatal.
pub fn read_manifest(root: &Path) -> Option<serde_json::Value> {
    let manifest_path = root.join(PROJECT_MANIFEST);
    trace!("Reading manifest at {:?}", manifest_path);
    let content = fs::read_to_string(&manifest_path).ok()?;
    match serde_json::from_str(&content) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!("Malformed manifest at {:?}: {}", manifest_path, e);
            None
        }
    }
}

/// A project is a monorepo when its manifest declares a non-empty workspace
/// member list, either the array form or the object form with `packages`.
pub fn is_monorepo(root: &Path) -> bool {
    let Some(manifest) = read_manifest(root) else {
        return false;
    };
    match manifest.get("workspaces") {
        Some(serde_json::Value::Array(members)) => !members.is_empty(),
        Some(serde_json::Value::Object(obj)) => obj
            .get("packages")
            .and_then(|p| p.as_array())
            .map(|members| !members.is_empty())
            .unwrap_or(false),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackageManager {
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Yarn => "yarn",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Bun => "bun",
        }
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifies the package manager by lockfile. Defaults to npm when no
/// lockfile is present.
pub fn detect_package_manager(root: &Path) -> PackageManager {
    let probes = [
        ("pnpm-lock.yaml", PackageManager::Pnpm),
        ("yarn.lock", PackageManager::Yarn),
        ("bun.lockb", PackageManager::Bun),
        ("package-lock.json", PackageManager::Npm),
    ];
    for (lockfile, manager) in probes {
        if root.join(lockfile).exists() {
            debug!("Detected {} via {}", manager, lockfile);
            return manager;
        }
    }
    PackageManager::Npm
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_is_monorepo_array_form() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), r#"{"workspaces": ["packages/*"]}"#).unwrap();
        assert!(is_monorepo(root));
    }

    #[test]
    fn test_is_monorepo_object_form() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), r#"{"workspaces": {"packages": ["apps/*"]}}"#)
            .unwrap();
        assert!(is_monorepo(root));
    }

    #[test]
    fn test_is_monorepo_empty_list() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), r#"{"workspaces": []}"#).unwrap();
        assert!(!is_monorepo(root));
    }

    #[test]
    fn test_is_monorepo_no_manifest() {
        let temp_dir = TempDir::new().unwrap();
        assert!(!is_monorepo(temp_dir.path()));
    }

    #[test]
    fn test_is_monorepo_malformed_manifest() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("package.json"), "{ not json").unwrap();
        assert!(!is_monorepo(root));
    }

    #[test]
    fn test_detect_package_manager_pnpm_wins() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        fs::write(root.join("pnpm-lock.yaml"), "").unwrap();
        fs::write(root.join("package-lock.json"), "{}").unwrap();
        assert_eq!(detect_package_manager(root), PackageManager::Pnpm);
    }

    #[test]
    fn test_detect_package_manager_default() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(detect_package_manager(temp_dir.path()), PackageManager::Npm);
    }
}
