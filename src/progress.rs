//! Progress bar display for asset-tree scans

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for the definition-file scan
pub struct ScanProgress {
    pb: ProgressBar,
}

impl ScanProgress {
    /// Create a progress bar over the total definition-file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let pb = ProgressBar::new(total_files);
        pb.set_style(style);
        Self { pb }
    }

    /// Advance past one file, showing a truncated path
    pub fn tick(&self, file_path: &str) {
        self.pb.set_message(truncate_path(file_path, 50));
        self.pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(self) {
        self.pb.finish_and_clear();
    }
}

/// Keep the tail of a long path, cutting on a char boundary
fn truncate_path(path: &str, max_len: usize) -> String {
    if path.len() <= max_len {
        return path.to_string();
    }
    let mut start = path.len() - (max_len - 3);
    while !path.is_char_boundary(start) {
        start += 1;
    }
    format!("...{}", &path[start..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_path_unchanged() {
        assert_eq!(truncate_path("itemtypes/ingot.json", 50), "itemtypes/ingot.json");
    }

    #[test]
    fn test_long_path_keeps_tail() {
        let path = format!("{}/itemtypes/ingot.json", "x".repeat(60));
        let shown = truncate_path(&path, 50);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with("itemtypes/ingot.json"));
        assert!(shown.len() <= 50);
    }

    #[test]
    fn test_multibyte_path_cuts_on_char_boundary() {
        let path = format!("{}{}", "x".repeat(10), "日".repeat(20));
        let shown = truncate_path(&path, 50);
        assert!(shown.starts_with("..."));
        assert!(shown.ends_with('日'));
    }

    #[test]
    fn test_tick_handles_multibyte_paths() {
        let progress = ScanProgress::new(1);
        progress.tick(&format!("{}{}", "x".repeat(10), "日".repeat(20)));
        progress.finish();
    }
}
