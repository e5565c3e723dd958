//! Agent motion for one tick.
//!
//! Per live agent, against the rectangle it is confined to this tick:
//!
//! 1. soft push away from edges closer than [`EDGE_ZONE`];
//! 2. repulsion from nearby agents when it practises social distancing;
//! 3. small random acceleration;
//! 4. `v += a·dt`, capped at the speed limit, then `x += v·dt`;
//! 5. hard clamp [`CLAMP_MARGIN`] inside the edge, bouncing at half speed.
//!
//! Repulsion reads positions captured before anyone moved, so the result
//! does not depend on update order.

use ep_agent::AgentArena;
use ep_core::{Bounds, Point, SimRng, SimulationParameters};
use ep_spatial::SpatialIndex;
use ep_zones::WorldLayout;

/// Distance from an edge below which the boundary force applies.
pub const EDGE_ZONE: f64 = 0.15;
/// Hard clamp distance inside the edge.
pub const CLAMP_MARGIN: f64 = 0.05;
/// Half width of the per-axis random acceleration.
pub const JITTER: f64 = 0.002;
/// Speed cap under strong distancing (`social_distance_factor > 0.3`).
pub const DISTANCING_SPEED_LIMIT: f64 = 0.05;

const REPULSION_SOFTENING: f64 = 0.01;
const REPULSION_SCALE: f64 = 1.0 / 50.0;
const DIRECTION_EPSILON: f64 = 0.001;

/// Advance every live agent by one tick of length `dt` days.
///
/// `neighbours` must index pre-move positions when given; it is only read
/// when `social_distance_factor > 0`.
pub fn move_agents(
    arena: &mut AgentArena,
    layout: &WorldLayout,
    neighbours: Option<&SpatialIndex>,
    params: &SimulationParameters,
    dt: f64,
    rng: &mut SimRng,
) {
    let factor = params.social_distance_factor;
    let speed_limit = if factor > 0.3 {
        DISTANCING_SPEED_LIMIT
    } else {
        params.speed_limit
    };
    let repulsion = neighbours.filter(|_| factor > 0.0).map(|index| {
        let radius = params.infection_radius * f64::from(params.boxes_to_consider);
        (index, arena.positions(), radius, index.cells_for(radius))
    });

    for agent in arena.live_mut() {
        let bounds = layout.movement_bounds(agent);
        let p = agent.position;

        let mut accel = boundary_force(p, &bounds, params.boundary_force);

        if let Some((index, positions, radius, cells)) = &repulsion {
            if agent.obeys_social_distancing && !agent.is_quarantined {
                let self_id = agent.id;
                for other in index.neighbors_of(p, *cells) {
                    if other == self_id {
                        continue;
                    }
                    let q = positions[other.index()];
                    let d = p.distance(q);
                    if d >= *radius {
                        continue;
                    }
                    let force = factor / (d * d + REPULSION_SOFTENING) * REPULSION_SCALE;
                    accel.x += (p.x - q.x) / (d + DIRECTION_EPSILON) * force;
                    accel.y += (p.y - q.y) / (d + DIRECTION_EPSILON) * force;
                }
            }
        }

        accel.x += rng.jitter(JITTER);
        accel.y += rng.jitter(JITTER);

        let mut v = Point::new(agent.velocity.x + accel.x * dt, agent.velocity.y + accel.y * dt);
        let speed = v.norm();
        if speed > speed_limit {
            v.x *= speed_limit / speed;
            v.y *= speed_limit / speed;
        }

        let mut x = Point::new(p.x + v.x * dt, p.y + v.y * dt);
        reflect(&mut x.x, &mut v.x, bounds.min_x, bounds.max_x);
        reflect(&mut x.y, &mut v.y, bounds.min_y, bounds.max_y);

        agent.position = x;
        agent.velocity = v;
    }
}

/// Inward push from every edge closer than [`EDGE_ZONE`], scaling linearly
/// from `strength` at the edge to zero at the zone boundary.
pub fn boundary_force(p: Point, bounds: &Bounds, strength: f64) -> Point {
    Point::new(
        edge_push(p.x, bounds.min_x, bounds.max_x, strength),
        edge_push(p.y, bounds.min_y, bounds.max_y, strength),
    )
}

fn edge_push(x: f64, lo: f64, hi: f64, strength: f64) -> f64 {
    let mut f = 0.0;
    let to_lo = x - lo;
    if to_lo < EDGE_ZONE {
        f += strength * (1.0 - to_lo.max(0.0) / EDGE_ZONE);
    }
    let to_hi = hi - x;
    if to_hi < EDGE_ZONE {
        f -= strength * (1.0 - to_hi.max(0.0) / EDGE_ZONE);
    }
    f
}

fn reflect(x: &mut f64, v: &mut f64, lo: f64, hi: f64) {
    let (lo, hi) = (lo + CLAMP_MARGIN, hi - CLAMP_MARGIN);
    if lo > hi {
        *x = (lo + hi) * 0.5;
        *v = 0.0;
    } else if *x < lo {
        *x = lo;
        *v = v.abs() * 0.5;
    } else if *x > hi {
        *x = hi;
        *v = -v.abs() * 0.5;
    }
}
