use criterion::{Criterion, black_box, criterion_group, criterion_main};
use glam::{DVec2, UVec2};

use gridcast::types::{GridInfo, OCCUPIED};
use gridcast::{OccupancyGrid, cast_ray};

fn bench_raycast(c: &mut Criterion) {
    let grid = build_grid(256, 256, 0.05);
    let empty_grid = build_empty_grid(256, 256, 0.05);
    let early_hit_grid = build_grid_with_occupied_column(256, 256, 0.05, 1);
    let late_hit_grid = build_grid_with_occupied_column(256, 256, 0.05, 254);
    let rays = build_rays();
    let rays_positive_x = build_rays_positive_x();

    c.bench_function("cast_ray_hits", |b| {
        b.iter(|| black_box(total_distance(&grid, &rays)));
    });

    c.bench_function("cast_ray_miss", |b| {
        b.iter(|| black_box(total_distance(&empty_grid, &rays)));
    });

    c.bench_function("cast_ray_hits_early", |b| {
        b.iter(|| black_box(total_distance(&early_hit_grid, &rays_positive_x)));
    });

    c.bench_function("cast_ray_hits_late", |b| {
        b.iter(|| black_box(total_distance(&late_hit_grid, &rays_positive_x)));
    });

    c.bench_function("cast_ray_unbounded_exit", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for (origin, dir, _) in &rays {
                total += cast_ray(&empty_grid, *origin, *dir, f64::INFINITY).unwrap_or(0.0);
            }
            black_box(total.is_infinite());
        });
    });
}

fn total_distance(grid: &OccupancyGrid, rays: &[(DVec2, DVec2, f64)]) -> f64 {
    let mut total = 0.0;
    for (origin, dir, max_distance) in rays {
        total += cast_ray(grid, *origin, *dir, *max_distance).unwrap_or(0.0);
    }
    total
}

fn build_grid(width: u32, height: u32, cell_size: f64) -> OccupancyGrid {
    let mut grid = build_empty_grid(width, height, cell_size);
    for y in (0..height).step_by(16) {
        for x in (0..width).step_by(16) {
            grid.set(UVec2::new(x, y), OCCUPIED).expect("cell in bounds");
        }
    }
    grid
}

fn build_empty_grid(width: u32, height: u32, cell_size: f64) -> OccupancyGrid {
    OccupancyGrid::empty(GridInfo::new(width, height, cell_size)).expect("grid should build")
}

fn build_grid_with_occupied_column(
    width: u32,
    height: u32,
    cell_size: f64,
    column: u32,
) -> OccupancyGrid {
    let mut grid = build_empty_grid(width, height, cell_size);
    let col = column.min(width.saturating_sub(1));
    for y in 0..height {
        grid.set(UVec2::new(col, y), OCCUPIED).expect("cell in bounds");
    }
    grid
}

fn build_rays() -> Vec<(DVec2, DVec2, f64)> {
    let mut rays = Vec::new();
    for i in 0..64 {
        let origin = DVec2::new(0.1, 0.1 + i as f64 * 0.02);
        let dir = DVec2::new(1.0, (i as f64 * 0.01) - 0.3).normalize();
        rays.push((origin, dir, 20.0));
    }
    rays.push((DVec2::new(2.0, 2.0), DVec2::new(-1.0, 0.2).normalize(), 15.0));
    rays.push((DVec2::new(6.0, 1.0), DVec2::new(0.2, 1.0).normalize(), 15.0));
    rays
}

fn build_rays_positive_x() -> Vec<(DVec2, DVec2, f64)> {
    let mut rays = Vec::new();
    for i in 0..64 {
        let origin = DVec2::new(0.1, 0.1 + i as f64 * 0.02);
        let dir = DVec2::new(1.0, 0.02).normalize();
        rays.push((origin, dir, 20.0));
    }
    rays
}

criterion_group!(benches, bench_raycast);
criterion_main!(benches);
