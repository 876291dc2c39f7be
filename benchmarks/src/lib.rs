//! Scene setup helpers shared by the accumulation benchmarks.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use snowdrift::surface::SurfaceShape;
use snowdrift::{HeightMapSurface, MaskContour, Rect, SnowConfig, SnowWorld, SurfaceDesc};

/// Viewport used by every benchmark scene.
pub const VIEWPORT: (f32, f32) = (1280.0, 720.0);

/// Five-row block letters spelling "SNOW", `#` is filled.
pub const BANNER: [&str; 5] = [
    "####  #   #  ###  #   #",
    "#     ##  # #   # #   #",
    "####  # # # #   # # # #",
    "   #  #  ## #   # ## ##",
    "####  #   #  ###  #   #",
];

pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// `n` buttons laid out in a grid across the viewport.
pub fn setup_button_row(n: usize) -> Vec<SurfaceDesc> {
    let per_row = 8;
    let (width, height) = (120.0, 36.0);
    (0..n)
        .map(|i| {
            let col = (i % per_row) as f32;
            let row = (i / per_row) as f32;
            let origin = Vec2::new(40.0 + col * 150.0, 200.0 + row * 70.0);
            SurfaceDesc::rect(
                format!("button-{}", i),
                Rect::from_origin_size(origin, Vec2::new(width, height)),
            )
        })
        .collect()
}

/// The banner as one contour surface with `cell_size` pixels per mask cell.
pub fn setup_banner(cell_size: f32) -> SurfaceDesc {
    let mask = MaskContour::from_rows(Vec2::new(100.0, 100.0), cell_size, &BANNER)
        .expect("banner rows are non-empty and equally wide");
    SurfaceDesc::with_contour("banner", mask.bounds(), mask)
}

/// A flat surface `width` columns wide.
pub fn setup_flat_surface(width: f32) -> HeightMapSurface {
    let config = SnowConfig::default();
    HeightMapSurface::new(
        "flat",
        Rect::new(0.0, 400.0, width, 440.0),
        &SurfaceShape::Rect { corner_radius: 0.0 },
        config.sample_step,
        config.comfortable_height,
        config.max_height,
        config.collision_tolerance,
    )
}

/// A world with `buttons` surfaces and the banner, already snowing.
pub fn setup_world(buttons: usize, warmup_frames: usize) -> SnowWorld<StdRng> {
    let config = SnowConfig::default().max_falling_particles(400);
    let mut world =
        SnowWorld::with_rng(config, seeded_rng(42)).expect("default config is valid");
    world.set_viewport_size(VIEWPORT.0, VIEWPORT.1);

    let mut surfaces = setup_button_row(buttons);
    surfaces.push(setup_banner(12.0));
    world.set_surfaces(surfaces);

    for _ in 0..warmup_frames {
        world.step(1.0 / 60.0);
    }
    world
}
