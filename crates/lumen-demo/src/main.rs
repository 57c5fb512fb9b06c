// File: crates/lumen-demo/src/main.rs
// Summary: Demo loads a labelled CSV (first column labels, one column per series),
// steps the reveal animation frame by frame and writes each frame as a PNG,
// then simulates a tap and writes the selected state with its tooltip.
//
// Usage: lumen-demo [input.csv] [out_dir] [line|bar] [none|linear|ease|wave|fade]

use anyhow::{Context, Result};
use lumen_core::{
    AnimationConfig, AnimationDriver, AnimationKind, AnimationRequest, Argb, Chart, ChartKind, ChartStyle, Dataset,
    Insets, Series, SeriesStyle, Viewport,
};
use lumen_render_skia::SkiaRenderer;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Frames per second used to sample the animation clock.
const FPS: u32 = 30;

const SERIES_COLORS: [u32; 4] = [0xFF25_63EB, 0xFFE1_1D48, 0xFF10_B981, 0xFFF5_9E0B];

/// Records the request the chart hands off; the demo plays it back offline.
#[derive(Default)]
struct FrameDriver {
    request: Option<AnimationRequest>,
}

impl AnimationDriver for FrameDriver {
    fn start(&mut self, request: AnimationRequest) {
        self.request = Some(request);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lumen_demo=info,lumen_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| "crates/lumen-demo/data/weekly_visits.csv".to_string());
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/out/frames".to_string()));
    let kind = parse_chart_kind(args.next().as_deref().unwrap_or("line"))?;
    let animation = parse_animation(args.next().as_deref().unwrap_or("ease"))?;

    let path = Path::new(&input);
    if !path.exists() {
        anyhow::bail!("file not found: {}", path.display());
    }
    let dataset = load_dataset(path, kind).with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    tracing::info!(
        file = %path.display(),
        series = dataset.series.len(),
        points = dataset.reference_len(),
        "dataset loaded"
    );

    let (viewport, style) = match kind {
        ChartKind::Line => (
            Viewport::new(1080.0, 720.0, Insets::line_default()),
            ChartStyle { show_gradient: true, ..ChartStyle::default() },
        ),
        ChartKind::Bar => (Viewport::new(1080.0, 720.0, Insets::bar_default()), ChartStyle::bars()),
    };
    let mut chart = Chart::new(viewport)
        .with_style(style)
        .with_animation(AnimationConfig { kind: animation, duration: Duration::from_millis(1200) });
    chart.set_dataset(dataset);

    let renderer = SkiaRenderer::default();
    let mut driver = FrameDriver::default();
    let first = chart.draw(&mut driver);
    if first.is_empty() {
        anyhow::bail!("nothing to draw: need at least {} points", kind.min_reference_len());
    }

    let mut written = 0usize;
    match driver.request {
        Some(request) => {
            let frames = ((request.duration.as_secs_f64() * FPS as f64).ceil() as u32).max(1);
            for frame in 0..=frames {
                let elapsed = request.duration.mul_f64(frame as f64 / frames as f64);
                let geometry = chart.advance_animation(request.fraction_at(elapsed));
                let out = out_dir.join(format!("frame_{frame:03}.png"));
                renderer.render_to_png(&geometry, chart.viewport(), &out)?;
                written += 1;
            }
        }
        None => {
            renderer.render_to_png(&first, chart.viewport(), out_dir.join("frame_000.png"))?;
            written += 1;
        }
    }
    tracing::info!(frames = written, dir = %out_dir.display(), phase = ?chart.phase(), "animation frames written");

    // Tap the middle index and keep the tooltip up.
    let count = chart.dataset().map_or(0, Dataset::reference_len);
    let tap_x = chart
        .compute_geometry()
        .axes
        .as_ref()
        .and_then(|a| a.x_ticks.get(count / 2))
        .map(|t| t.x);
    if let Some(x) = tap_x {
        if let Some(pick) = chart.pointer_down(x) {
            tracing::info!(index = pick.index, label = %pick.label, value = pick.value, "point selected");
        }
        let out = out_dir.join("selected.png");
        renderer.render_to_png(&chart.compute_geometry(), chart.viewport(), &out)?;
        println!("Wrote {}", out.display());
    }
    println!("Wrote {written} frame(s) to {}", out_dir.display());
    Ok(())
}

fn parse_chart_kind(s: &str) -> Result<ChartKind> {
    match s.to_ascii_lowercase().as_str() {
        "line" => Ok(ChartKind::Line),
        "bar" | "bars" => Ok(ChartKind::Bar),
        other => anyhow::bail!("unknown chart kind '{other}' (expected line or bar)"),
    }
}

fn parse_animation(s: &str) -> Result<AnimationKind> {
    Ok(match s.to_ascii_lowercase().as_str() {
        "none" => AnimationKind::None,
        "linear" => AnimationKind::Linear,
        "ease" | "ease-in-out" => AnimationKind::EaseInOut,
        "wave" => AnimationKind::Wave,
        "fade" => AnimationKind::Fade,
        other => anyhow::bail!("unknown animation '{other}'"),
    })
}

/// Header row names the series; each record is `label,value,value,...`.
/// Empty or unparsable cells become missing values.
fn load_dataset(path: &Path, kind: ChartKind) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let titles: Vec<String> = rdr.headers()?.iter().skip(1).map(|h| h.trim().to_string()).collect();
    if titles.is_empty() {
        anyhow::bail!("expected a label column followed by at least one value column");
    }
    tracing::debug!(?titles, "csv headers");

    let mut labels = Vec::new();
    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); titles.len()];
    for rec in rdr.records() {
        let rec = rec?;
        labels.push(rec.get(0).unwrap_or_default().trim().to_string());
        for (i, col) in columns.iter_mut().enumerate() {
            let v = rec.get(i + 1).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(f64::NAN);
            col.push(v);
        }
    }

    let series = titles
        .into_iter()
        .zip(columns)
        .enumerate()
        .map(|(i, (title, values))| {
            let style = SeriesStyle {
                color: Argb(SERIES_COLORS[i % SERIES_COLORS.len()]),
                smooth: i == 0,
                show_points: true,
                ..SeriesStyle::default()
            };
            Series::titled(values, style, title)
        })
        .collect();
    Ok(Dataset::new(kind, series).with_x_labels(labels))
}
