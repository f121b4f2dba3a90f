//! Per-tileset progress display, batching when many files are queued

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static ROW_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} rows [{bar:30.green/white}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Tilesets: [{bar:40.green/white}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

/// Name, analyzed rows and total rows of one tileset
#[derive(Debug, Clone, Default)]
struct FileState {
    name: String,
    rows_done: usize,
    rows_total: usize,
}

/// Tracks row-by-row analysis across a batch of tilesets
///
/// Up to [`MAX_INDIVIDUAL_PROGRESS_BARS`] bars show the most recent files;
/// larger batches also get an overall file counter.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    file_bars: Vec<ProgressBar>,
    files: Vec<FileState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressManager {
    /// Create a manager with no bars
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            file_bars: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Create bars for a batch of `file_count` tilesets
    pub fn initialize(&mut self, file_count: usize) {
        if file_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(file_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in self.file_bars.len()..file_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(ROW_STYLE.clone());
            self.file_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Begin tracking file `index` with `rows` tile rows to analyze
    pub fn start_file(&mut self, index: usize, path: &Path, rows: usize) {
        let name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        if index >= self.files.len() {
            self.files.resize(index + 1, FileState::default());
        }
        if let Some(state) = self.files.get_mut(index) {
            *state = FileState {
                name,
                rows_done: 0,
                rows_total: rows,
            };
        }
        self.refresh();
    }

    /// Report how many rows of file `index` are analyzed
    pub fn update_row(&mut self, index: usize, rows_done: usize) {
        if let Some(state) = self.files.get_mut(index) {
            state.rows_done = rows_done.min(state.rows_total);
        }
        self.refresh();
    }

    /// Mark file `index` as done
    pub fn complete_file(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }
        if let Some(state) = self.files.get_mut(index) {
            state.name = format!("done {}", state.name);
            state.rows_done = state.rows_total;
        }
        self.refresh();
    }

    /// Remove all bars from the terminal
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All tilesets analyzed");
        }
        let _ = self.multi_progress.clear();
    }

    fn refresh(&self) {
        let started: Vec<&FileState> = self
            .files
            .iter()
            .filter(|state| !state.name.is_empty())
            .collect();
        let first_visible = started.len().saturating_sub(self.file_bars.len());
        let visible = started.get(first_visible..).unwrap_or(&[]);

        for (slot, bar) in self.file_bars.iter().enumerate() {
            match visible.get(slot) {
                Some(state) => {
                    bar.set_length(state.rows_total as u64);
                    bar.set_position(state.rows_done as u64);
                    let digits = state.rows_total.to_string().len();
                    bar.set_message(format!(
                        "{:>digits$}/{}",
                        state.rows_done, state.rows_total
                    ));
                    bar.set_prefix(state.name.clone());
                }
                None => {
                    bar.set_length(0);
                    bar.set_position(0);
                    bar.set_message(String::new());
                    bar.set_prefix(String::new());
                }
            }
        }
    }
}
