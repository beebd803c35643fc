use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const GRIND_DIR: &str = ".grind";
pub const CONFIG_FILE: &str = ".grind/config.yaml";
pub const ROADMAP_FILE: &str = ".grind/roadmap.json";
pub const STATE_FILE: &str = ".grind/state.json";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn grind_dir(root: &Path) -> PathBuf {
    root.join(GRIND_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn roadmap_path(root: &Path) -> PathBuf {
    root.join(ROADMAP_FILE)
}

pub fn state_path(root: &Path) -> PathBuf {
    root.join(STATE_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.grind/config.yaml")
        );
        assert_eq!(
            roadmap_path(root),
            PathBuf::from("/tmp/proj/.grind/roadmap.json")
        );
        assert_eq!(state_path(root), PathBuf::from("/tmp/proj/.grind/state.json"));
    }
}
