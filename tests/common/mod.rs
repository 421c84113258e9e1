//! Common test utilities for vsrecipe integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A fabricated game directory for integration tests
#[allow(dead_code)]
pub struct TestAssets {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the fabricated game root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestAssets {
    /// Create an empty directory with no asset tree at all
    pub fn empty() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a game root with a populated `assets/survival` tree
    pub fn with_survival_tree() -> Self {
        let assets = Self::empty();
        assets.write_file(
            "assets/survival/itemtypes/metal/ingot.json",
            r#"{
	code: "ingot-{metal}",
	allowedVariants: ["copper", "iron", "tin"],
}
"#,
        );
        assets.write_file(
            "assets/survival/itemtypes/resource/stick.json",
            r#"{ code: "stick" }"#,
        );
        assets.write_file(
            "assets/survival/blocktypes/wood/plank.json5",
            r#"{
	code: "plank",
	groupBy: ["plank-*"],
}
"#,
        );
        assets.write_file(
            "assets/survival/blocktypes/wood/log.json",
            "game:log-oak game:log-pine",
        );
        assets
    }

    /// Write a file under the game root
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the game root
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists under the game root
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// The root path as a &str argument for --root
    pub fn root_arg(&self) -> &str {
        self.path.to_str().expect("non-utf8 temp path")
    }
}
