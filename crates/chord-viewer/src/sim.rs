//! Orbital scene advanced by the per-frame update step.
//!
//! Crafts accelerate under planetary gravity plus their own thrust and are
//! integrated with semi-implicit Euler at a fixed step; wall-clock frame
//! deltas are consumed through an accumulator so frame pacing does not
//! change the trajectory.

use std::time::Duration;

use glam::DVec2;

/// Gravitational constant (m^3 kg^-1 s^-2).
const G: f64 = 6.674_30e-11;

/// Fixed integration step, in seconds.
const TICK_TIME: f64 = 1.0 / 120.0;

/// A gravity source. Planets do not move.
pub struct Planet {
    mass: f64,
    position: DVec2,
}

impl Planet {
    pub fn new(mass: f64, position: DVec2) -> Self {
        Self { mass, position }
    }

    /// Gravitational acceleration this planet exerts at `pos`:
    /// magnitude `G * mass / r^2`, directed toward the planet.
    fn gravity_accel_on(&self, pos: DVec2) -> DVec2 {
        let offset = self.position - pos;
        let accel = G * self.mass / offset.length_squared();
        offset.normalize() * accel
    }
}

/// A thrust-capable body in free fall.
pub struct Craft {
    dry_mass: f64,
    fuel_mass: f64,
    /// Maximum thrust, in newtons.
    thrust: f64,
    position: DVec2,
    velocity: DVec2,
    /// Thrust direction, radians; 0 points along +Y.
    pub heading: f64,
    /// Thrust fraction in `[0, 1]`.
    pub throttle: f64,
}

impl Craft {
    pub fn new(dry_mass: f64, fuel_mass: f64, thrust: f64, position: DVec2, velocity: DVec2) -> Self {
        Self {
            dry_mass,
            fuel_mass,
            thrust,
            position,
            velocity,
            heading: 0.0,
            throttle: 0.0,
        }
    }

    pub fn position(&self) -> DVec2 {
        self.position
    }

    pub fn velocity(&self) -> DVec2 {
        self.velocity
    }

    fn mass(&self) -> f64 {
        self.dry_mass + self.fuel_mass
    }

    /// Acceleration from the engine at the current heading and throttle.
    fn thrust_accel(&self) -> DVec2 {
        let dir = DVec2::new(self.heading.sin(), self.heading.cos());
        dir * (self.thrust * self.throttle / self.mass())
    }
}

/// The scene: planets, crafts, and the leftover time carried between
/// update calls.
pub struct Simulation {
    planets: Vec<Planet>,
    crafts: Vec<Craft>,
    accumulator: f64,
}

impl Simulation {
    pub fn new(planets: Vec<Planet>, crafts: Vec<Craft>) -> Self {
        Self {
            planets,
            crafts,
            accumulator: 0.0,
        }
    }

    pub fn crafts(&self) -> &[Craft] {
        &self.crafts
    }

    /// Advances the scene by a wall-clock delta.
    ///
    /// Runs as many fixed `TICK_TIME` steps as the accumulated time covers;
    /// the remainder waits for the next call.
    pub fn advance(&mut self, dt: Duration) {
        self.accumulator += dt.as_secs_f64();
        while self.accumulator >= TICK_TIME {
            self.step(TICK_TIME);
            self.accumulator -= TICK_TIME;
        }
    }

    /// One semi-implicit Euler step: velocity first, then position with the
    /// updated velocity.
    fn step(&mut self, dt: f64) {
        for craft in &mut self.crafts {
            let mut accel = craft.thrust_accel();
            for planet in &self.planets {
                accel += planet.gravity_accel_on(craft.position);
            }
            craft.velocity += accel * dt;
            craft.position += craft.velocity * dt;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coasting_craft(position: DVec2, velocity: DVec2) -> Craft {
        Craft::new(1000.0, 0.0, 0.0, position, velocity)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() <= 1e-12 * b.abs().max(1.0)
    }

    // ── gravity ───────────────────────────────────────────────────────────

    #[test]
    fn gravity_points_at_the_planet() {
        let planet = Planet::new(1.0e12, DVec2::ZERO);
        let accel = planet.gravity_accel_on(DVec2::new(1000.0, 0.0));

        // G * m / r^2 toward the origin.
        assert!(close(accel.x, -G * 1.0e12 / 1.0e6));
        assert!(close(accel.y, 0.0));
    }

    #[test]
    fn gravity_from_every_planet_accumulates() {
        // Equal masses on both sides cancel exactly.
        let planets = vec![
            Planet::new(1.0e12, DVec2::new(-500.0, 0.0)),
            Planet::new(1.0e12, DVec2::new(500.0, 0.0)),
        ];
        let mut sim = Simulation::new(planets, vec![coasting_craft(DVec2::ZERO, DVec2::ZERO)]);

        sim.step(TICK_TIME);
        assert_eq!(sim.crafts()[0].velocity(), DVec2::ZERO);
        assert_eq!(sim.crafts()[0].position(), DVec2::ZERO);
    }

    // ── thrust ────────────────────────────────────────────────────────────

    #[test]
    fn thrust_follows_heading_and_throttle() {
        let mut craft = Craft::new(800.0, 200.0, 5000.0, DVec2::ZERO, DVec2::ZERO);
        craft.throttle = 0.5;

        // Heading 0 is +Y; F * throttle / (dry + fuel).
        let accel = craft.thrust_accel();
        assert!(close(accel.x, 0.0));
        assert!(close(accel.y, 2.5));

        craft.heading = std::f64::consts::FRAC_PI_2;
        let accel = craft.thrust_accel();
        assert!(close(accel.x, 2.5));
        assert!(close(accel.y, 0.0));
    }

    #[test]
    fn zero_throttle_coasts() {
        let mut sim = Simulation::new(
            vec![],
            vec![coasting_craft(DVec2::ZERO, DVec2::new(10.0, -4.0))],
        );

        sim.step(TICK_TIME);
        sim.step(TICK_TIME);

        let craft = &sim.crafts()[0];
        assert_eq!(craft.velocity(), DVec2::new(10.0, -4.0));
        assert!(close(craft.position().x, 10.0 * 2.0 * TICK_TIME));
        assert!(close(craft.position().y, -4.0 * 2.0 * TICK_TIME));
    }

    // ── integration ───────────────────────────────────────────────────────

    #[test]
    fn step_updates_velocity_before_position() {
        // Semi-implicit Euler: starting from rest, one step moves the craft
        // by a*dt^2 (the full post-step velocity), not 0 and not a*dt^2/2.
        let mut craft = Craft::new(1000.0, 0.0, 2000.0, DVec2::ZERO, DVec2::ZERO);
        craft.throttle = 1.0;
        let mut sim = Simulation::new(vec![], vec![craft]);

        sim.step(TICK_TIME);

        let a = 2000.0 / 1000.0;
        let craft = &sim.crafts()[0];
        assert!(close(craft.velocity().y, a * TICK_TIME));
        assert!(close(craft.position().y, a * TICK_TIME * TICK_TIME));
    }

    #[test]
    fn advance_runs_whole_ticks_and_banks_the_rest() {
        let mut sim = Simulation::new(
            vec![],
            vec![coasting_craft(DVec2::ZERO, DVec2::new(1.0, 0.0))],
        );

        // 2.5 ticks of wall time: two steps now, half a tick banked.
        sim.advance(Duration::from_secs_f64(2.5 * TICK_TIME));
        assert!(close(sim.crafts()[0].position().x, 2.0 * TICK_TIME));

        // The banked half tick completes on the next call.
        sim.advance(Duration::from_secs_f64(0.5 * TICK_TIME));
        assert!(close(sim.crafts()[0].position().x, 3.0 * TICK_TIME));
    }
}
