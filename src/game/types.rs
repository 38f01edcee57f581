//! Lane Dodge data structures.
//!
//! A vertical track split into three lanes: the player's car sits near the
//! bottom and hops between lanes while obstacle cars stream down from above
//! at an ever-increasing speed.

use rand::Rng;

/// Number of lanes across the track.
pub const LANE_COUNT: usize = 3;

/// The lane the player starts in (middle).
pub const PLAYER_HOME_LANE: usize = 1;

/// Car footprint in track units.
pub const VEHICLE_WIDTH: f64 = 50.0;
pub const VEHICLE_HEIGHT: f64 = 100.0;

/// The player's roof sits this far above the bottom edge of the track.
pub const PLAYER_BOTTOM_OFFSET: f64 = 120.0;

/// Obstacles spawn this far above the visible track so they slide into
/// view instead of popping.
pub const OBSTACLE_SPAWN_Y: f64 = -100.0;

/// Downward track units per tick at the start of an instance.
pub const INITIAL_SPEED: f64 = 2.0;

/// Speed gained on every obstacle spawn.
pub const SPEED_INCREMENT: f64 = 0.1;

/// Bounds (inclusive) for the per-tick spawn interval draw. Each tick draws
/// an `n` from this range and spawns iff `tick % n == 0`.
pub const SPAWN_INTERVAL_MIN: u32 = 100;
pub const SPAWN_INTERVAL_MAX: u32 = 150;

/// The tick counter wraps back to 0 at this bound. Only the number resets;
/// score, speed, and obstacles carry straight through a wrap.
pub const TICK_WRAP: u32 = 5000;

/// Which role a vehicle plays in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Player,
    Obstacle,
}

/// Coarse lifecycle state of a game instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    GameOver,
}

/// The fixed-size play area. Three equal-width lanes run top to bottom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    pub width: f64,
    pub height: f64,
}

impl Track {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Center x of lane `lane`, 0-indexed from the left.
    pub fn lane_center(&self, lane: usize) -> f64 {
        let lane_width = self.width / LANE_COUNT as f64;
        lane as f64 * lane_width + lane_width / 2.0
    }
}

/// A rectangular car on the track. `x`/`y` is the top-left corner in track
/// units (origin top-left, y grows downward). Width and height are fixed
/// for the car's lifetime and always positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Fill color (r, g, b). Cosmetic only; the simulation never reads it.
    pub color: (u8, u8, u8),
    pub kind: VehicleKind,
}

impl Vehicle {
    /// The player's car, parked in its home lane near the bottom edge.
    pub fn player(track: &Track, color: (u8, u8, u8)) -> Self {
        let mut player = Self {
            x: 0.0,
            y: track.height - PLAYER_BOTTOM_OFFSET,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
            color,
            kind: VehicleKind::Player,
        };
        player.set_lane(PLAYER_HOME_LANE as i32, track);
        player
    }

    /// A fresh obstacle car in `lane`, just above the visible track.
    pub fn obstacle(track: &Track, lane: usize, color: (u8, u8, u8)) -> Self {
        let mut obstacle = Self {
            x: 0.0,
            y: OBSTACLE_SPAWN_Y,
            width: VEHICLE_WIDTH,
            height: VEHICLE_HEIGHT,
            color,
            kind: VehicleKind::Obstacle,
        };
        obstacle.set_lane(lane as i32, track);
        obstacle
    }

    /// Clamp `lane` into range, then snap this car's x so its horizontal
    /// center sits on that lane's center. The clamp happens before any x
    /// math, so an out-of-range index is never applied, even transiently.
    /// Returns the lane actually taken.
    pub fn set_lane(&mut self, lane: i32, track: &Track) -> usize {
        let lane = lane.clamp(0, LANE_COUNT as i32 - 1) as usize;
        self.x = track.lane_center(lane) - self.width / 2.0;
        lane
    }

    /// Move this car down the track. Player cars never move this way; their
    /// y is fixed for the life of the instance.
    pub fn advance(&mut self, speed: f64) {
        if self.kind == VehicleKind::Player {
            return;
        }
        self.y += speed;
    }
}

/// Uniformly random RGB fill.
pub fn random_color<R: Rng>(rng: &mut R) -> (u8, u8, u8) {
    (rng.gen(), rng.gen(), rng.gen())
}

/// One game instance: the player, the live obstacles, and the per-instance
/// counters. Constructing a session performs the entire reset, so a session
/// can never be observed half-initialized.
#[derive(Debug, Clone)]
pub struct GameSession {
    pub track: Track,
    pub phase: Phase,
    /// Simulation step counter; wraps at [`TICK_WRAP`].
    pub tick: u32,
    /// Obstacles that fell off the bottom edge this instance.
    pub score: u32,
    /// Shared downward speed applied to every obstacle each tick.
    pub speed: f64,
    /// The player's current lane index.
    pub lane: usize,
    pub player: Vehicle,
    pub obstacles: Vec<Vehicle>,
}

impl GameSession {
    /// Start a fresh instance on `track`: tick 0, score 0, speed reset,
    /// no obstacles, player in its home lane.
    pub fn new<R: Rng>(track: Track, rng: &mut R) -> Self {
        let player = Vehicle::player(&track, random_color(rng));
        Self {
            track,
            phase: Phase::Running,
            tick: 0,
            score: 0,
            speed: INITIAL_SPEED,
            lane: PLAYER_HOME_LANE,
            player,
            obstacles: Vec::new(),
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Spawn an obstacle in a random lane and ramp the shared speed.
    pub fn spawn_obstacle<R: Rng>(&mut self, rng: &mut R) {
        let lane = rng.gen_range(0..LANE_COUNT);
        let obstacle = Vehicle::obstacle(&self.track, lane, random_color(rng));
        self.obstacles.push(obstacle);
        self.speed += SPEED_INCREMENT;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(800.0, 600.0)
    }

    #[test]
    fn test_lane_centers() {
        let track = track();
        assert!((track.lane_center(0) - 800.0 / 6.0).abs() < 1e-9);
        assert!((track.lane_center(1) - 400.0).abs() < 1e-9);
        assert!((track.lane_center(2) - (800.0 * 2.0 / 3.0 + 800.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_player_home_position() {
        let player = Vehicle::player(&track(), (0, 0, 0));
        // Middle lane, centered: 400 - 25
        assert!((player.x - 375.0).abs() < 1e-9);
        assert!((player.y - 480.0).abs() < 1e-9);
        assert!((player.width - 50.0).abs() < f64::EPSILON);
        assert!((player.height - 100.0).abs() < f64::EPSILON);
        assert_eq!(player.kind, VehicleKind::Player);
    }

    #[test]
    fn test_obstacle_spawns_above_track() {
        let obstacle = Vehicle::obstacle(&track(), 0, (1, 2, 3));
        assert!((obstacle.y - OBSTACLE_SPAWN_Y).abs() < f64::EPSILON);
        assert!((obstacle.x - (800.0 / 6.0 - 25.0)).abs() < 1e-9);
        assert_eq!(obstacle.kind, VehicleKind::Obstacle);
        assert_eq!(obstacle.color, (1, 2, 3));
    }

    #[test]
    fn test_set_lane_clamps_low_then_high() {
        let track = track();
        let mut player = Vehicle::player(&track, (0, 0, 0));

        let lane = player.set_lane(-5, &track);
        assert_eq!(lane, 0);
        assert!((player.x - (track.lane_center(0) - 25.0)).abs() < 1e-9);

        let lane = player.set_lane(9, &track);
        assert_eq!(lane, 2);
        assert!((player.x - (track.lane_center(2) - 25.0)).abs() < 1e-9);
    }

    #[test]
    fn test_set_lane_in_range() {
        let track = track();
        let mut player = Vehicle::player(&track, (0, 0, 0));

        for lane in 0..LANE_COUNT {
            let taken = player.set_lane(lane as i32, &track);
            assert_eq!(taken, lane);
            assert!((player.x - (track.lane_center(lane) - 25.0)).abs() < 1e-9);
        }
    }

    #[test]
    fn test_advance_moves_obstacles_only() {
        let track = track();
        let mut obstacle = Vehicle::obstacle(&track, 1, (0, 0, 0));
        let mut player = Vehicle::player(&track, (0, 0, 0));

        obstacle.advance(2.5);
        player.advance(2.5);

        assert!((obstacle.y - (OBSTACLE_SPAWN_Y + 2.5)).abs() < 1e-9);
        assert!((player.y - 480.0).abs() < 1e-9, "Player y must stay fixed");
    }

    #[test]
    fn test_new_session_defaults() {
        let mut rng = rand::thread_rng();
        let session = GameSession::new(track(), &mut rng);

        assert_eq!(session.phase, Phase::Running);
        assert_eq!(session.tick, 0);
        assert_eq!(session.score, 0);
        assert!((session.speed - INITIAL_SPEED).abs() < f64::EPSILON);
        assert_eq!(session.lane, PLAYER_HOME_LANE);
        assert!(session.obstacles.is_empty());
        assert!(!session.is_over());
    }

    #[test]
    fn test_spawn_obstacle_ramps_speed() {
        let mut rng = rand::thread_rng();
        let mut session = GameSession::new(track(), &mut rng);

        session.spawn_obstacle(&mut rng);

        assert_eq!(session.obstacles.len(), 1);
        let obstacle = &session.obstacles[0];
        assert!((obstacle.y - OBSTACLE_SPAWN_Y).abs() < f64::EPSILON);
        assert!((session.speed - (INITIAL_SPEED + SPEED_INCREMENT)).abs() < 1e-9);

        // The obstacle must sit centered in one of the three lanes
        let on_a_lane = (0..LANE_COUNT)
            .any(|lane| (obstacle.x - (session.track.lane_center(lane) - 25.0)).abs() < 1e-9);
        assert!(on_a_lane, "Obstacle x {} not centered on any lane", obstacle.x);
    }

    #[test]
    fn test_spawn_speed_ramp_is_per_spawn() {
        let mut rng = rand::thread_rng();
        let mut session = GameSession::new(track(), &mut rng);

        for _ in 0..10 {
            session.spawn_obstacle(&mut rng);
        }

        assert!((session.speed - (INITIAL_SPEED + 10.0 * SPEED_INCREMENT)).abs() < 1e-9);
        assert_eq!(session.obstacles.len(), 10);
    }

    #[test]
    fn test_lane_center_scales_with_track_width() {
        let narrow = Track::new(300.0, 600.0);
        assert!((narrow.lane_center(0) - 50.0).abs() < 1e-9);
        assert!((narrow.lane_center(1) - 150.0).abs() < 1e-9);
        assert!((narrow.lane_center(2) - 250.0).abs() < 1e-9);
    }
}
