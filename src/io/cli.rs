//! Command-line interface for analyzing tilesets and rendering previews

use crate::analysis::layout::{TileLayout, TilesetImage, image_size};
use crate::analysis::template::{AnalyzerConfig, TemplateAnalysis, TemplateAnalyzer};
use crate::autotile::generator::{Tilemap, VariantPolicy};
use crate::autotile::mapping::TilePosition;
use crate::autotile::materials::MaterialId;
use crate::io::configuration::{
    DEFAULT_BASE_TILES, DEFAULT_DEPTH_LAYERS, DEFAULT_PREVIEW_HEIGHT, DEFAULT_PREVIEW_WIDTH,
    DEFAULT_SEED, DEFAULT_TILE_SIZE, MAPPING_SUFFIX, PREVIEW_STROKES, PREVIEW_SUFFIX,
};
use crate::io::error::{AutotileError, Result, io_error};
use crate::io::image::{load_tileset, save_png};
use crate::io::mapping::save_mapping;
use crate::io::preview::paint_random_map;
use crate::io::progress::ProgressManager;
use crate::io::render::compose_preview;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "autowang")]
#[command(
    author,
    version,
    about = "Infer dual-corner Wang mappings from tileset images"
)]
/// Command-line arguments for tileset analysis
pub struct Cli {
    /// Tileset PNG file or directory of tilesets to analyze
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Tile width in pixels (also the height unless --tile-height is given)
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: usize,

    /// Tile height in pixels
    #[arg(long)]
    pub tile_height: Option<usize>,

    /// Horizontal pixel offset of the first tile
    #[arg(long, default_value_t = 0)]
    pub offset_x: usize,

    /// Vertical pixel offset of the first tile
    #[arg(long, default_value_t = 0)]
    pub offset_y: usize,

    /// Number of leading tiles that seed the material palette
    #[arg(short, long, default_value_t = DEFAULT_BASE_TILES)]
    pub base_tiles: usize,

    /// Also paint a random map and render it with the analyzed tiles
    #[arg(short, long)]
    pub preview: bool,

    /// Preview map width in cells
    #[arg(short = 'w', long, default_value_t = DEFAULT_PREVIEW_WIDTH)]
    pub map_width: usize,

    /// Preview map height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_PREVIEW_HEIGHT)]
    pub map_height: usize,

    /// Random seed for preview painting and tile variants
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of depth layers in the preview
    #[arg(short, long, default_value_t = DEFAULT_DEPTH_LAYERS)]
    pub depth: usize,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process tilesets even if a mapping already exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Tile layout described by the size and offset arguments
    ///
    /// # Errors
    ///
    /// Returns an error if a tile dimension is zero
    pub fn layout(&self) -> Result<TileLayout> {
        TileLayout::new(
            [self.tile_size, self.tile_height.unwrap_or(self.tile_size)],
            [self.offset_x, self.offset_y],
        )
    }
}

/// Base tile positions: the first `count` tiles in reading order
pub fn base_tile_positions(count: usize, columns: usize) -> Vec<TilePosition> {
    if columns == 0 {
        return Vec::new();
    }
    (0..count)
        .map(|index| [index % columns, index / columns])
        .collect()
}

/// Orchestrates batch analysis of tileset files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if !is_png(&self.cli.target) {
                return Err(io_error("Target file must be a PNG image"));
            }
            if self.should_process_file(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Ok(vec![])
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if is_png(&path) && !is_preview(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(io_error("Target must be a PNG file or directory"))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if mapping_path(input_path).exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (mapping exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    // Allow print for user feedback when no preview can be painted
    #[allow(clippy::print_stderr)]
    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let tileset = load_tileset(input_path)?;
        let layout = self.cli.layout()?;
        let [columns, rows] = layout.grid_size(image_size(&tileset));

        if columns == 0 || rows == 0 {
            let [width, height] = image_size(&tileset);
            return Err(AutotileError::InvalidSourceData {
                reason: format!(
                    "{} is {width}x{height} pixels, too small for one {}x{} tile",
                    input_path.display(),
                    layout.tile_size()[0],
                    layout.tile_size()[1]
                ),
            });
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, rows);
        }

        let base_tiles = base_tile_positions(self.cli.base_tiles, columns);
        let mut analyzer =
            TemplateAnalyzer::new(&tileset, layout, &base_tiles, AnalyzerConfig::default())?;
        while analyzer.analyze_row() {
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_row(index, analyzer.rows_analyzed());
            }
        }
        let analysis = analyzer.finish();

        save_mapping(&analysis, &mapping_path(input_path))?;

        if self.cli.preview {
            let materials = analysis.paintable_materials();
            if materials.is_empty() {
                if !self.cli.quiet {
                    eprintln!(
                        "No paintable materials in {} (skipping preview)",
                        input_path.display()
                    );
                }
            } else {
                self.render_preview(&tileset, layout, &analysis, &materials, input_path)?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    fn render_preview(
        &self,
        tileset: &TilesetImage,
        layout: TileLayout,
        analysis: &TemplateAnalysis,
        materials: &[MaterialId],
        input_path: &Path,
    ) -> Result<()> {
        let mut tilemap = Tilemap::new([self.cli.map_width, self.cli.map_height], self.cli.depth)
            .with_variants(VariantPolicy::Seeded(self.cli.seed));
        paint_random_map(
            tilemap.markers_mut(),
            materials,
            self.cli.seed,
            PREVIEW_STROKES,
        );
        tilemap.generate(&analysis.mapping, analysis.columns());

        let image = compose_preview(
            tileset,
            &layout,
            analysis.columns(),
            tilemap.depth_layers(),
        );
        save_png(&image, &preview_path(input_path))
    }
}

fn is_png(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("png")
}

fn is_preview(path: &Path) -> bool {
    path.file_stem()
        .is_some_and(|stem| stem.to_string_lossy().ends_with(PREVIEW_SUFFIX))
}

fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
    let stem = input_path.file_stem().unwrap_or_default();
    let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());

    if let Some(parent) = input_path.parent() {
        parent.join(name)
    } else {
        PathBuf::from(name)
    }
}

/// Where the mapping dump for `input_path` is written
pub fn mapping_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, MAPPING_SUFFIX, "txt")
}

/// Where the preview image for `input_path` is written
pub fn preview_path(input_path: &Path) -> PathBuf {
    sibling_path(input_path, PREVIEW_SUFFIX, "png")
}
