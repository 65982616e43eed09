//! Deterministic preset arrangements.

use glam::DVec2;
use std::f64::consts::PI;

use super::BodySeed;

/// Three-body figure-eight choreography, centered on the origin.
///
/// Initial conditions from Nauenberg's collinear form of the Moore/Chenciner-
/// Montgomery orbit: outer bodies at +-x with velocity (vx, -vy), middle body
/// at the origin with (-2vx, 2vy). `scale` stretches lengths as scale^2 and
/// velocities linearly, which keeps the choreography exact under the
/// area-proportional mass model (mass scales as length^2 when G = 1).
pub fn figure_eight(scale: f64) -> Vec<BodySeed> {
    let vx = 0.347_112_813_567_241_7 * scale;
    let vy = 0.532_726_851_767_674 * scale;
    let offset = scale * scale;
    // Radius whose disc mass is offset^2; sqrt(pi)/pi is the radius of
    // unit mass.
    let radius = offset * PI.sqrt() / PI;

    vec![
        BodySeed {
            radius,
            position: DVec2::new(-offset, 0.0),
            velocity: DVec2::new(vx, -vy),
        },
        BodySeed {
            radius,
            position: DVec2::ZERO,
            velocity: DVec2::new(-2.0 * vx, 2.0 * vy),
        },
        BodySeed {
            radius,
            position: DVec2::new(offset, 0.0),
            velocity: DVec2::new(vx, -vy),
        },
    ]
}

/// `count` equal bodies on a regular polygon of circumradius 250, each with
/// a tangential velocity, forming a rotating ring around the origin.
pub fn ngon(count: usize) -> Vec<BodySeed> {
    if count < 2 {
        return Vec::new();
    }
    let ring_radius = 250.0;
    let body_radius = 50.0;
    let speed = count as f64 * 1.25;

    (0..count)
        .map(|k| {
            let angle = 2.0 * PI * k as f64 / count as f64;
            BodySeed {
                radius: body_radius,
                position: DVec2::new(angle.cos(), angle.sin()) * ring_radius,
                velocity: DVec2::new(-angle.sin(), angle.cos()) * speed,
            }
        })
        .collect()
}
