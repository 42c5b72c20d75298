use mapcolor::{Board, EngineConfig, LevelDescriptor, RegionSpec, Vec2, Viewport};
use std::time::Instant;
use tracing::info;

// Grid of square cells, each listing its four orthogonal neighbors.
fn build_grid_level(cols: u32, rows: u32, cell: f64) -> LevelDescriptor {
    let mut regions = Vec::with_capacity((cols * rows) as usize);
    for j in 0..rows {
        for i in 0..cols {
            let id = j * cols + i;
            let (x, y) = (f64::from(i) * cell, f64::from(j) * cell);
            let mut neighbors = Vec::with_capacity(4);
            if i > 0 { neighbors.push(id - 1); }
            if i + 1 < cols { neighbors.push(id + 1); }
            if j > 0 { neighbors.push(id - cols); }
            if j + 1 < rows { neighbors.push(id + cols); }
            regions.push(RegionSpec {
                id,
                name: None,
                points: vec![[x, y], [x + cell, y], [x + cell, y + cell], [x, y + cell]],
                neighbors,
            });
        }
    }
    LevelDescriptor::new("grid", "Grid", regions)
}

fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() { return 0.0; }
    let idx = ((sorted.len() as f64 - 1.0) * p).round() as usize;
    sorted[idx.min(sorted.len() - 1)]
}

fn main() {
    tracing_subscriber::fmt().with_env_filter(
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    ).init();

    let args: Vec<String> = std::env::args().collect();
    let mut side = 60u32;
    let mut clicks = 10000usize;
    let mut assert_ms: Option<f64> = None;
    for a in &args[1..] {
        if let Some(val) = a.strip_prefix("--side=") { if let Ok(v) = val.parse() { side = v; } }
        else if let Some(val) = a.strip_prefix("--clicks=") { if let Ok(v) = val.parse() { clicks = v; } }
        else if let Some(val) = a.strip_prefix("--assert-ms=") { if let Ok(v) = val.parse() { assert_ms = Some(v); } }
    }

    let cell = 10.0;
    let level = build_grid_level(side, side, cell);
    let mut board = Board::new(&EngineConfig::default());
    let t_load = Instant::now();
    board.load_level(&level, Viewport::new(1280.0, 800.0));
    let load_ms = t_load.elapsed().as_secs_f64() * 1000.0;

    let span = f64::from(side) * cell;
    let mut times_ms: Vec<f64> = Vec::with_capacity(clicks);
    let start_all = Instant::now();
    let mut hits = 0usize;
    for k in 0..clicks {
        let wx = (k % 97) as f64 / 97.0 * span + 0.37;
        let wy = ((k / 97) % 89) as f64 / 89.0 * span + 0.61;
        let screen = board.view().world_to_screen(Vec2::new(wx, wy));
        let t0 = Instant::now();
        if board.resolve_click(screen).is_some() { hits += 1; }
        times_ms.push(t0.elapsed().as_secs_f64() * 1000.0);
    }
    let dur_all = start_all.elapsed().as_secs_f64() * 1000.0;
    times_ms.sort_by(|a, b| a.total_cmp(b));
    let med = percentile(&times_ms, 0.5);
    let p90 = percentile(&times_ms, 0.9);
    let p99 = percentile(&times_ms, 0.99);
    info!(regions = board.regions().len(), load_ms, "grid loaded");
    println!(
        "regions={} clicks={} hits={} total_ms={:.3} median_ms={:.4} p90_ms={:.4} p99_ms={:.4}",
        board.regions().len(), clicks, hits, dur_all, med, p90, p99
    );
    if let Some(th) = assert_ms {
        if med > th {
            eprintln!("FAIL: median {:.4} ms > threshold {:.3} ms", med, th);
            std::process::exit(1);
        }
    }
}
