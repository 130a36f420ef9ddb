//! Headless frame driver for the interactive ray casting demo.
//!
//! [`Scene`] holds the state the demo keeps between frames: the ray origin,
//! the aim target and the grid being painted. Each call to [`Scene::update`]
//! applies one frame of abstract input in the demo's order (move, aim,
//! paint, clear, cast) and returns everything a renderer needs to draw the
//! frame. Nothing here touches a window or an input device.

use glam::{DVec2, IVec2};
use log::{debug, info};

use crate::grid::OccupancyGrid;
use crate::iterators::{DashedSegments, dashed_segments};
use crate::raycast::cast_ray;
use crate::types::{Direction2D, FREE, GridCastError, OCCUPIED, Point2D, direction_towards};

pub mod config;

pub use config::SceneConfig;

/// What the pointer does to the cell under the target this frame.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Brush {
    Paint,
    Erase,
}

/// Input for one frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Movement of the origin per axis. Each component is clamped to -1..=1.
    pub movement: IVec2,
    /// Point the ray is aimed at.
    pub target: Point2D,
    pub brush: Option<Brush>,
    /// Free every cell before casting.
    pub clear: bool,
}

impl FrameInput {
    /// Aim at `target` without moving, painting or clearing.
    pub fn aim(target: Point2D) -> Self {
        Self {
            target,
            ..Default::default()
        }
    }
}

/// Result of one frame.
#[derive(Debug, Clone)]
pub struct Frame {
    pub origin: Point2D,
    pub target: Point2D,
    /// Unit direction from origin to target; zero when they coincide.
    pub direction: Direction2D,
    /// Distance to the first wall, or the configured budget on a miss.
    pub distance: f64,
    /// `origin + direction * distance`.
    pub hit_point: Point2D,
    /// Dashed continuation of the aim line beyond the target.
    pub dashes: DashedSegments,
}

#[derive(Debug, Clone)]
pub struct Scene {
    config: SceneConfig,
    grid: OccupancyGrid,
    origin: Point2D,
    target: Point2D,
}

impl Scene {
    pub fn new(config: SceneConfig) -> Result<Self, GridCastError> {
        config.validate()?;
        let grid = OccupancyGrid::empty(config.grid_info())?;
        info!(
            "scene with {}x{} grid, origin {:?}",
            grid.cols(),
            grid.rows(),
            config.origin
        );

        Ok(Self {
            origin: config.origin,
            target: config.origin,
            config,
            grid,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn grid(&self) -> &OccupancyGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut OccupancyGrid {
        &mut self.grid
    }

    pub fn origin(&self) -> Point2D {
        self.origin
    }

    pub fn target(&self) -> Point2D {
        self.target
    }

    pub fn update(&mut self, input: &FrameInput) -> Result<Frame, GridCastError> {
        let movement = input.movement.clamp(IVec2::NEG_ONE, IVec2::ONE);
        self.origin += movement.as_dvec2() * self.config.origin_speed;
        self.target = input.target;

        match input.brush {
            Some(Brush::Paint) => {
                self.grid.set_world(self.target, OCCUPIED);
            }
            Some(Brush::Erase) => {
                self.grid.set_world(self.target, FREE);
            }
            None => {}
        }

        if input.clear {
            self.grid.clear();
        }

        self.cast()
    }

    /// Cast from the current origin towards the current target.
    pub fn cast(&self) -> Result<Frame, GridCastError> {
        let direction = direction_towards(self.origin, self.target);
        if direction == DVec2::ZERO {
            debug!(
                "target {:?} gives no direction from origin {:?}",
                self.target, self.origin
            );
            return Ok(Frame {
                origin: self.origin,
                target: self.target,
                direction,
                distance: 0.0,
                hit_point: self.origin,
                dashes: dashed_segments(self.target, self.target, self.config.dash_length),
            });
        }

        let distance = cast_ray(
            &self.grid,
            self.origin,
            direction,
            self.config.max_ray_distance,
        )?;

        let overlay = direction * (self.config.overlay_extent * self.config.max_ray_distance);
        let dashes = dashed_segments(
            self.target,
            self.target + overlay,
            self.config.dash_length,
        );

        Ok(Frame {
            origin: self.origin,
            target: self.target,
            direction,
            distance,
            hit_point: self.origin + direction * distance,
            dashes,
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::UVec2;

    use super::*;

    fn scene() -> Scene {
        Scene::new(SceneConfig::default()).expect("default scene")
    }

    #[test]
    fn paints_then_hits_wall() {
        let mut scene = scene();

        // Paint the cell at row 20, col 25.
        let paint = FrameInput {
            brush: Some(Brush::Paint),
            ..FrameInput::aim(DVec2::new(510.0, 410.0))
        };
        scene.update(&paint).unwrap();
        assert_eq!(scene.grid().get(UVec2::new(25, 20)), Some(true));

        let frame = scene.update(&FrameInput::aim(DVec2::new(700.0, 400.0))).unwrap();
        assert_eq!(frame.direction, DVec2::X);
        assert_relative_eq!(frame.distance, 100.0, epsilon = 1e-4);
        assert_relative_eq!(frame.hit_point.x, 500.0, epsilon = 1e-4);
        assert_relative_eq!(frame.hit_point.y, 400.0, epsilon = 1e-4);
    }

    #[test]
    fn open_grid_reports_budget() {
        let mut scene = scene();
        let frame = scene.update(&FrameInput::aim(DVec2::new(100.0, 700.0))).unwrap();
        assert_eq!(frame.distance, 1000.0);
    }

    #[test]
    fn movement_is_clamped_per_axis() {
        let mut scene = scene();
        let input = FrameInput {
            movement: IVec2::new(5, -3),
            ..FrameInput::aim(DVec2::ZERO)
        };
        let frame = scene.update(&input).unwrap();
        assert_eq!(frame.origin, DVec2::new(408.0, 392.0));
        assert_eq!(scene.origin(), DVec2::new(408.0, 392.0));
    }

    #[test]
    fn erase_and_clear() {
        let mut scene = scene();
        for target in [DVec2::new(10.0, 10.0), DVec2::new(30.0, 10.0)] {
            let paint = FrameInput {
                brush: Some(Brush::Paint),
                ..FrameInput::aim(target)
            };
            scene.update(&paint).unwrap();
        }
        assert_eq!(scene.grid().occupied_count(), 2);

        let erase = FrameInput {
            brush: Some(Brush::Erase),
            ..FrameInput::aim(DVec2::new(15.0, 5.0))
        };
        scene.update(&erase).unwrap();
        assert_eq!(scene.grid().occupied_count(), 1);

        let clear = FrameInput {
            clear: true,
            ..FrameInput::aim(DVec2::new(30.0, 10.0))
        };
        scene.update(&clear).unwrap();
        assert_eq!(scene.grid().occupied_count(), 0);
    }

    #[test]
    fn painting_outside_the_grid_is_ignored() {
        let mut scene = scene();
        let paint = FrameInput {
            brush: Some(Brush::Paint),
            ..FrameInput::aim(DVec2::new(-5.0, 2000.0))
        };
        scene.update(&paint).unwrap();
        assert_eq!(scene.grid().occupied_count(), 0);
    }

    #[test]
    fn target_on_origin_is_degenerate() {
        let mut scene = scene();
        let frame = scene.update(&FrameInput::aim(DVec2::new(400.0, 400.0))).unwrap();
        assert_eq!(frame.direction, DVec2::ZERO);
        assert_eq!(frame.distance, 0.0);
        assert_eq!(frame.hit_point, frame.origin);
        assert_eq!(frame.dashes.count(), 0);
    }

    #[test]
    fn dashes_continue_past_target() {
        let mut scene = scene();
        let target = DVec2::new(400.0, 300.0);
        let frame = scene.update(&FrameInput::aim(target)).unwrap();

        // 100 * 1000 units of overlay in dashes of 4.
        assert_eq!(frame.dashes.steps(), 12_500);
        assert_eq!(frame.dashes.len(), 6_250);

        let (from, to) = frame.dashes.clone().next().unwrap();
        assert_relative_eq!(from.y, 296.0, epsilon = 1e-9);
        assert_relative_eq!(to.y, 292.0, epsilon = 1e-9);
    }
}
