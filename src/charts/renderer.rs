//! Static Chart Renderer
//! Draws the catalog charts as PNG files with plotters.
//!
//! Charts:
//! 1. Content type split (vertical bars)
//! 2. Titles added per year (line with markers)
//! 3. Top genres (horizontal bars, most frequent on top)
//! 4. Rating distribution (horizontal bars, most frequent on top)

use crate::charts::RenderError;
use crate::stats::{CatalogAggregates, Counts, YearCounts};
use plotters::prelude::*;
use std::path::{Path, PathBuf};
use tracing::info;

type DrawResult = Result<(), Box<dyn std::error::Error>>;

pub const TYPE_SPLIT_FILE: &str = "content_type_split.png";
pub const BY_YEAR_FILE: &str = "content_added_over_years.png";
pub const TOP_GENRES_FILE: &str = "top_genres.png";
pub const RATINGS_FILE: &str = "rating_distribution.png";

// Set2-like palette for the type split
const SET2: [RGBColor; 4] = [
    RGBColor(102, 194, 165),
    RGBColor(252, 141, 98),
    RGBColor(141, 160, 203),
    RGBColor(231, 138, 195),
];

const LINE_COLOR: RGBColor = RGBColor(52, 152, 219); // Blue

const GENRE_PALETTE: [RGBColor; 5] = [
    RGBColor(0, 188, 212),  // Cyan
    RGBColor(26, 188, 156), // Teal
    RGBColor(52, 152, 219), // Blue
    RGBColor(155, 89, 182), // Purple
    RGBColor(233, 30, 99),  // Pink
];

const RATING_PALETTE: [RGBColor; 5] = [
    RGBColor(252, 253, 191),
    RGBColor(254, 159, 109),
    RGBColor(222, 73, 104),
    RGBColor(140, 41, 129),
    RGBColor(59, 15, 112),
];

const CAPTION_FONT: (&str, u32) = ("sans-serif", 24);

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Render all static charts into `out_dir`, returning the written paths.
    pub fn render_all(
        aggregates: &CatalogAggregates,
        out_dir: &Path,
    ) -> Result<Vec<PathBuf>, RenderError> {
        std::fs::create_dir_all(out_dir).map_err(|source| RenderError::OutputDir {
            path: out_dir.to_path_buf(),
            source,
        })?;

        let mut written = Vec::with_capacity(4);

        let path = out_dir.join(TYPE_SPLIT_FILE);
        Self::draw_vertical_bars(
            &path,
            "Movies vs TV Shows",
            "Type",
            "Count",
            &aggregates.by_type,
            &SET2,
        )
        .map_err(|e| RenderError::drawing("content type split", e))?;
        written.push(path);

        let path = out_dir.join(BY_YEAR_FILE);
        Self::draw_year_line(&path, &aggregates.by_year)
            .map_err(|e| RenderError::drawing("content added over years", e))?;
        written.push(path);

        let path = out_dir.join(TOP_GENRES_FILE);
        let caption = format!("Top {} Genres", aggregates.top_genres.len());
        Self::draw_horizontal_bars(
            &path,
            &caption,
            "Count",
            "Genre",
            &aggregates.top_genres,
            &GENRE_PALETTE,
        )
        .map_err(|e| RenderError::drawing("top genres", e))?;
        written.push(path);

        let path = out_dir.join(RATINGS_FILE);
        Self::draw_horizontal_bars(
            &path,
            "Distribution of Ratings",
            "Count",
            "Rating",
            &aggregates.by_rating,
            &RATING_PALETTE,
        )
        .map_err(|e| RenderError::drawing("rating distribution", e))?;
        written.push(path);

        for path in &written {
            info!("Chart written to {}", path.display());
        }
        Ok(written)
    }

    /// Upper bound of a count axis, with headroom above the tallest bar.
    pub fn axis_max(counts: impl Iterator<Item = usize>) -> usize {
        let max = counts.max().unwrap_or(0);
        max + max / 10 + 1
    }

    /// X range covering every year, padded by one on each side.
    pub fn year_range(by_year: &YearCounts) -> std::ops::Range<i32> {
        match (by_year.keys().next(), by_year.keys().next_back()) {
            (Some(&first), Some(&last)) => (first - 1)..(last + 1),
            _ => 0..1,
        }
    }

    /// Label count to request on a segmented axis so every segment is named.
    ///
    /// Plotters strides the labels by `segments / hint + 1`; any hint above
    /// the segment count keeps that stride at one.
    pub fn segment_label_hint(segments: usize) -> usize {
        (segments + 1) * 2
    }

    fn segment_label(value: &SegmentValue<usize>, labels: &Counts) -> String {
        match value {
            SegmentValue::CenterOf(i) => labels
                .get(*i)
                .map(|(label, _)| label.clone())
                .unwrap_or_default(),
            _ => String::new(),
        }
    }

    fn draw_vertical_bars(
        path: &Path,
        caption: &str,
        x_desc: &str,
        y_desc: &str,
        counts: &Counts,
        palette: &[RGBColor],
    ) -> DrawResult {
        let root = BitMapBackend::new(path, (600, 400)).into_drawing_area();
        root.fill(&WHITE)?;

        let n = counts.len().max(1);
        let y_max = Self::axis_max(counts.iter().map(|(_, c)| *c));

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, CAPTION_FONT)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d((0..n).into_segmented(), 0usize..y_max)?;

        chart
            .configure_mesh()
            .disable_x_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .x_labels(Self::segment_label_hint(n))
            .x_label_formatter(&|v| Self::segment_label(v, counts))
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(i, (_, count))| {
            let color = palette[i % palette.len()];
            let mut bar = Rectangle::new(
                [(SegmentValue::Exact(i), 0), (SegmentValue::Exact(i + 1), *count)],
                color.filled(),
            );
            bar.set_margin(0, 0, 20, 20);
            bar
        }))?;

        root.present()?;
        Ok(())
    }

    fn draw_horizontal_bars(
        path: &Path,
        caption: &str,
        x_desc: &str,
        y_desc: &str,
        counts: &Counts,
        palette: &[RGBColor],
    ) -> DrawResult {
        let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        // Rank 0 is drawn in the top segment.
        let n = counts.len().max(1);
        let x_max = Self::axis_max(counts.iter().map(|(_, c)| *c));

        let mut chart = ChartBuilder::on(&root)
            .caption(caption, CAPTION_FONT)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(220)
            .build_cartesian_2d(0usize..x_max, (0..n).into_segmented())?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .x_desc(x_desc)
            .y_desc(y_desc)
            .y_labels(Self::segment_label_hint(n))
            .y_label_formatter(&|v| match v {
                SegmentValue::CenterOf(i) => n
                    .checked_sub(i + 1)
                    .and_then(|rank| counts.get(rank))
                    .map(|(label, _)| label.clone())
                    .unwrap_or_default(),
                _ => String::new(),
            })
            .draw()?;

        chart.draw_series(counts.iter().enumerate().map(|(rank, (_, count))| {
            let slot = n - 1 - rank;
            let color = palette[rank % palette.len()];
            let mut bar = Rectangle::new(
                [(0, SegmentValue::Exact(slot)), (*count, SegmentValue::Exact(slot + 1))],
                color.filled(),
            );
            bar.set_margin(4, 4, 0, 0);
            bar
        }))?;

        root.present()?;
        Ok(())
    }

    fn draw_year_line(path: &Path, by_year: &YearCounts) -> DrawResult {
        let root = BitMapBackend::new(path, (1000, 500)).into_drawing_area();
        root.fill(&WHITE)?;

        let y_max = Self::axis_max(by_year.values().copied());
        let points: Vec<(i32, usize)> = by_year.iter().map(|(&y, &c)| (y, c)).collect();

        let mut chart = ChartBuilder::on(&root)
            .caption("Content Added Over the Years", CAPTION_FONT)
            .margin(15)
            .x_label_area_size(40)
            .y_label_area_size(60)
            .build_cartesian_2d(Self::year_range(by_year), 0usize..y_max)?;

        chart
            .configure_mesh()
            .x_desc("Year Added")
            .y_desc("Number of Titles")
            .x_label_formatter(&|year| year.to_string())
            .draw()?;

        chart.draw_series(LineSeries::new(
            points.iter().copied(),
            LINE_COLOR.stroke_width(2),
        ))?;
        chart.draw_series(
            points
                .iter()
                .map(|&point| Circle::new(point, 4, LINE_COLOR.filled())),
        )?;

        root.present()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_leaves_headroom() {
        assert_eq!(StaticChartRenderer::axis_max([2usize, 10, 4].into_iter()), 12);
        assert_eq!(StaticChartRenderer::axis_max(std::iter::empty()), 1);
    }

    #[test]
    fn year_range_pads_both_ends() {
        let by_year = YearCounts::from([(2019, 2), (2021, 1)]);
        assert_eq!(StaticChartRenderer::year_range(&by_year), 2018..2022);
        assert_eq!(StaticChartRenderer::year_range(&YearCounts::new()), 0..1);
    }

    #[test]
    fn label_hint_names_every_segment() {
        for segments in 1..=40 {
            let hint = StaticChartRenderer::segment_label_hint(segments);
            assert_eq!(segments / hint + 1, 1, "stride for {segments} segments");
        }
    }

    #[test]
    fn empty_aggregations_still_render() {
        let dir = std::env::temp_dir().join(format!("catalog_eda_png_{}", std::process::id()));
        let written = match StaticChartRenderer::render_all(&CatalogAggregates::default(), &dir) {
            Ok(written) => written,
            // No usable system font on this host.
            Err(RenderError::Drawing { message, .. })
                if message.to_lowercase().contains("font") =>
            {
                let _ = std::fs::remove_dir_all(&dir);
                return;
            }
            Err(e) => panic!("rendering failed: {e}"),
        };

        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(
            names,
            vec![TYPE_SPLIT_FILE, BY_YEAR_FILE, TOP_GENRES_FILE, RATINGS_FILE]
        );
        for path in &written {
            assert!(std::fs::metadata(path).unwrap().len() > 0, "{}", path.display());
        }
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn segment_labels_follow_counts() {
        let counts: Counts = vec![("Movie".into(), 2), ("TV Show".into(), 1)];
        assert_eq!(
            StaticChartRenderer::segment_label(&SegmentValue::CenterOf(1), &counts),
            "TV Show"
        );
        assert_eq!(
            StaticChartRenderer::segment_label(&SegmentValue::Exact(0), &counts),
            ""
        );
    }
}
