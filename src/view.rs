//! Renderer-side view of the simulation
//!
//! The simulation only knows discrete cells. This module keeps the
//! previous/target world position of every snake segment and blends them
//! with the clock's progress, then flattens everything into plain instance
//! records a renderer can upload as-is.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::sim::{Cell, Obstacle};

/// Height of a segment cube center
pub const SEGMENT_Y: f32 = 0.5;
/// Height of a food sphere center
pub const FOOD_Y: f32 = 0.7;
/// Height of an obstacle block center
pub const OBSTACLE_Y: f32 = 0.6;

/// Instance kinds
pub mod kinds {
    pub const SEGMENT: u32 = 0;
    pub const FOOD: u32 = 1;
    pub const OBSTACLE: u32 = 2;
}

/// One drawable thing
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Instance {
    pub position: [f32; 3],
    pub kind: u32,
}

impl Instance {
    pub fn new(position: Vec3, kind: u32) -> Self {
        Self {
            position: position.to_array(),
            kind,
        }
    }
}

/// World-space center of an obstacle's 2x2 footprint
pub fn obstacle_center(obstacle: &Obstacle) -> Vec3 {
    obstacle.base.to_world(OBSTACLE_Y) + Vec3::new(0.5, 0.0, 0.5)
}

/// Per-segment interpolation tracks
#[derive(Debug, Clone, Default)]
pub struct SegmentTracks {
    prev: Vec<Vec3>,
    target: Vec<Vec3>,
    current: Vec<Vec3>,
    /// (episode, step) of the last retarget
    synced: Option<(u32, u64)>,
}

impl SegmentTracks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Retarget when the simulation has moved on. Existing segments blend
    /// from where they are drawn now; new segments appear at their target.
    pub fn sync<'a>(
        &mut self,
        snake: impl IntoIterator<Item = &'a Cell>,
        episode: u32,
        steps: u64,
    ) {
        if self.synced == Some((episode, steps)) {
            return;
        }
        if self.synced.is_none_or(|(e, _)| e != episode) {
            self.clear();
        }
        self.synced = Some((episode, steps));

        let mut count = 0;
        for (i, cell) in snake.into_iter().enumerate() {
            let target = cell.to_world(SEGMENT_Y);
            if i < self.current.len() {
                self.prev[i] = self.current[i];
                self.target[i] = target;
            } else {
                self.prev.push(target);
                self.target.push(target);
                self.current.push(target);
            }
            count += 1;
        }
        self.prev.truncate(count);
        self.target.truncate(count);
        self.current.truncate(count);
    }

    /// Blend every segment by `progress` and return the drawn positions
    pub fn positions(&mut self, progress: f32) -> &[Vec3] {
        let t = progress.clamp(0.0, 1.0);
        let pairs = self.prev.iter().zip(&self.target);
        for (current, (prev, target)) in self.current.iter_mut().zip(pairs) {
            *current = prev.lerp(*target, t);
        }
        &self.current
    }

    /// Snap every segment onto its target (no more motion coming)
    pub fn settle(&mut self) {
        self.prev.copy_from_slice(&self.target);
        self.current.copy_from_slice(&self.target);
    }

    pub fn clear(&mut self) {
        self.prev.clear();
        self.target.clear();
        self.current.clear();
    }

    #[cfg(test)]
    fn len(&self) -> usize {
        self.current.len()
    }
}

/// Flatten segments, food and obstacles into instance records
pub fn build_instances(
    segments: &[Vec3],
    foods: &[Cell],
    obstacles: &[Obstacle],
) -> Vec<Instance> {
    let mut instances = Vec::with_capacity(segments.len() + foods.len() + obstacles.len());
    instances.extend(segments.iter().map(|&p| Instance::new(p, kinds::SEGMENT)));
    instances.extend(
        foods
            .iter()
            .map(|c| Instance::new(c.to_world(FOOD_Y), kinds::FOOD)),
    );
    instances.extend(
        obstacles
            .iter()
            .map(|o| Instance::new(obstacle_center(o), kinds::OBSTACLE)),
    );
    instances
}
