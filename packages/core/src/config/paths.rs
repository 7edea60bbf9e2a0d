//! Filesystem paths for configuration and site data

use directories::ProjectDirs;
use std::path::PathBuf;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("", "", "sitestack")
}

/// Directory holding config.json and sites.json
/// (e.g. `~/.config/sitestack` on Linux)
pub fn get_config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.json"))
}

pub fn get_sites_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("sites.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_files_live_in_the_config_dir() {
        if let Some(dir) = get_config_dir() {
            assert_eq!(get_config_path().unwrap(), dir.join("config.json"));
            assert_eq!(get_sites_path().unwrap(), dir.join("sites.json"));
        }
    }
}
