//! Runner vs obstacle overlap test
//!
//! Both entities are squares addressed by their top-left corner. The vertical
//! test only compares the runner's bottom edge with the obstacle's top edge:
//! the obstacle is always on the ground and the runner can only come at it
//! from above, so the other half of a full AABB test can never fail.

use super::state::{Actor, Obstacle};

/// Whether the runner touches the obstacle
#[inline]
pub fn overlaps(actor: &Actor, obstacle: &Obstacle) -> bool {
    actor.pos.x < obstacle.pos.x + obstacle.size
        && actor.pos.x + actor.size > obstacle.pos.x
        && actor.pos.y + actor.size > obstacle.pos.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn actor_at(x: f32, y: f32, size: f32) -> Actor {
        Actor {
            pos: Vec2::new(x, y),
            vy: 0.0,
            size,
            airborne: false,
            jump_velocity: -20.0,
        }
    }

    fn obstacle_at(x: f32, y: f32, size: f32) -> Obstacle {
        Obstacle {
            pos: Vec2::new(x, y),
            size,
        }
    }

    #[test]
    fn test_overlapping_boxes() {
        let actor = actor_at(10.0, 10.0, 10.0);
        assert!(overlaps(&actor, &obstacle_at(15.0, 15.0, 10.0)));
    }

    #[test]
    fn test_no_horizontal_overlap() {
        let actor = actor_at(10.0, 10.0, 10.0);
        assert!(!overlaps(&actor, &obstacle_at(25.0, 15.0, 10.0)));
        // Touching edges do not count
        assert!(!overlaps(&actor, &obstacle_at(20.0, 15.0, 10.0)));
        assert!(!overlaps(&actor, &obstacle_at(0.0, 15.0, 10.0)));
    }

    #[test]
    fn test_runner_above_obstacle_clears_it() {
        let obstacle = obstacle_at(100.0, 150.0, 30.0);
        assert!(!overlaps(&actor_at(100.0, 120.0, 30.0), &obstacle));
        assert!(overlaps(&actor_at(100.0, 120.5, 30.0), &obstacle));
    }

    #[test]
    fn test_only_bottom_edge_is_checked() {
        // A runner entirely below the obstacle's bottom still counts as a hit
        let obstacle = obstacle_at(100.0, 0.0, 10.0);
        assert!(overlaps(&actor_at(100.0, 50.0, 10.0), &obstacle));
    }
}
