use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use bevy::log::{Level, LogPlugin};
#[allow(clippy::wildcard_imports)]
use bevy::prelude::*;
use clap::Parser;
use tokio::time::{self, Duration, Instant, MissedTickBehavior};

use common::{
    components::Position,
    markers::{PlayerMarker, PortalMarker, SpawnAnchorMarker},
};
use game::{
    assets::default_pools,
    constants::{DEFAULT_TICK_RATE, PORTAL_MOVE_WINDOW, PORTAL_PROXIMITY_THRESHOLD},
    events::{PortalRelocated, RegenerateMaze},
    generate_maze,
    maze::GenParams,
    resources::{ActiveParams, GridConfig, MazeRng, PortalState, WorldLayout},
    systems::{portal::{PortalWatcher, portal_watch_system}, regen::regenerate_system},
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser)]
#[command(author, version, about = "Maze world generator and simulation host", long_about = None)]
struct Args {
    // Grid width in cells
    #[arg(long)]
    width: Option<i32>,

    // Grid depth in cells
    #[arg(long)]
    height: Option<i32>,

    // Cell size in meters
    #[arg(long)]
    cell_size: Option<f32>,

    // Fixed generation seed (omit for a fresh one per run)
    #[arg(long)]
    seed: Option<u64>,

    // Probability of an extra opening per cell, 0..=1
    #[arg(long)]
    loop_chance: Option<f64>,

    // Decoration density, 0..=1
    #[arg(long)]
    density: Option<f64>,

    // Generation parameters as JSON; explicit flags override file values
    #[arg(long)]
    config: Option<PathBuf>,

    // Write the generated layout to this path as JSON and keep running
    #[arg(long)]
    dump_layout: Option<PathBuf>,

    // Simulation ticks per second
    #[arg(long, default_value_t = DEFAULT_TICK_RATE)]
    tick_rate: u64,
}

fn load_params(args: &Args) -> Result<GenParams> {
    let mut params = match &args.config {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            serde_json::from_str(&text)
                .with_context(|| format!("failed to parse config file {}", path.display()))?
        }
        None => GenParams::default(),
    };

    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(cell_size) = args.cell_size {
        params.cell_size = cell_size;
    }
    if args.seed.is_some() {
        params.seed = args.seed;
    }
    if let Some(loop_chance) = args.loop_chance {
        params.loop_chance = loop_chance;
    }
    if let Some(density) = args.density {
        params.decoration_density = density;
    }

    Ok(params)
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    if args.tick_rate == 0 {
        bail!("tick rate must be at least 1");
    }
    let params = load_params(&args)?;

    let mut app = App::new();
    app.add_plugins(MinimalPlugins).add_plugins(LogPlugin {
        level: Level::INFO,
        ..default()
    });

    // The anchor doubles as the player spawn; generation fails without it.
    let anchor = Position::new(0.0, 0.0, 0.0);
    let pools = default_pools();
    let world = generate_maze(&params, &pools, Some(anchor))?;
    info!(
        "generated {}x{} maze (seed {}): {} floors, {} walls, {} decorations",
        params.width,
        params.height,
        world.seed,
        world.layout.floors.len(),
        world.layout.walls.len(),
        world.layout.decorations.len()
    );

    if let Some(path) = &args.dump_layout {
        let json = serde_json::to_string_pretty(&world.layout)?;
        std::fs::write(path, json).with_context(|| format!("failed to write layout to {}", path.display()))?;
        info!("layout written to {}", path.display());
    }

    let _ = app.world_mut().spawn((SpawnAnchorMarker, anchor));
    let _ = app.world_mut().spawn((PlayerMarker, anchor));
    let portal_entity = world
        .portal
        .as_ref()
        .map(|site| app.world_mut().spawn((PortalMarker, site.position)).id());

    app.insert_resource(GridConfig {
        grid: world.grid,
        frame: world.frame,
    })
    .insert_resource(WorldLayout { layout: world.layout })
    .insert_resource(world.offsets)
    .insert_resource(pools)
    .insert_resource(MazeRng(world.rng))
    .insert_resource(ActiveParams(params))
    .insert_resource(PortalState {
        entity: portal_entity,
        site: world.portal,
        watcher: PortalWatcher::new(PORTAL_MOVE_WINDOW, PORTAL_PROXIMITY_THRESHOLD),
    })
    .add_event::<RegenerateMaze>()
    .add_event::<PortalRelocated>()
    .add_systems(Update, (regenerate_system, portal_watch_system).chain());

    info!("starting simulation loop at {} Hz...", args.tick_rate);

    // Run the app manually at a fixed rate.
    let tick_duration = Duration::from_nanos(1_000_000_000 / args.tick_rate);
    let mut interval = time::interval(tick_duration);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut frame: u64 = 0;
    loop {
        interval.tick().await;

        let update_start = Instant::now();
        app.update();
        let update_elapsed = update_start.elapsed();

        if update_elapsed > tick_duration {
            warn!(
                "tick {} took {:.2}ms (exceeded {:.2}ms budget)",
                frame,
                update_elapsed.as_secs_f64() * 1000.0,
                tick_duration.as_secs_f64() * 1000.0
            );
        }

        frame += 1;
    }
}
