//! Game state and core simulation types
//!
//! One [`GameState`] owns everything the tick loop mutates: scalar
//! bookkeeping (innings, outs, strikes, score), the ball/bat singletons,
//! the fielder and zone collections, the transient runner batch, the
//! deferred action queue, and the seeded RNG. There are no globals; every
//! operation takes the state it mutates.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::field::{self, FielderRole, RotatedRect};
use super::schedule::ActionQueue;
use crate::Tuning;
use crate::consts::*;

/// Message shown on the title screen
pub const TITLE_MESSAGE: &str = "SANDLOT SLUGGER";

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the first trigger
    PreGame,
    /// Active gameplay
    Playing,
    /// Between-inning reshuffle ritual
    InningBreak,
    /// Game ended; a trigger restarts
    GameOver,
}

/// Pre-pitch countdown display at the top of an inning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Countdown {
    Three,
    Two,
    One,
}

impl Countdown {
    pub fn as_str(&self) -> &'static str {
        match self {
            Countdown::Three => "3",
            Countdown::Two => "2",
            Countdown::One => "1",
        }
    }
}

/// Outcome category carried by a hit zone, and the result of resolving a
/// batted ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneKind {
    Single,
    Double,
    Triple,
    HomeRun,
    Out,
}

impl ZoneKind {
    /// Zone face label
    pub fn label(&self) -> &'static str {
        match self {
            ZoneKind::Single => "1BH",
            ZoneKind::Double => "2BH",
            ZoneKind::Triple => "3BH",
            ZoneKind::HomeRun => "HR",
            ZoneKind::Out => "OUT",
        }
    }

    /// Zone face color (consumed by the renderer)
    pub fn color(&self) -> &'static str {
        match self {
            ZoneKind::Single | ZoneKind::Double | ZoneKind::Triple => "#fff",
            ZoneKind::HomeRun => "#ffd700",
            ZoneKind::Out => "#ff4d4d",
        }
    }

    /// Bases gained by every runner for this hit; `None` for an out
    pub fn advance(&self) -> Option<u8> {
        match self {
            ZoneKind::Single => Some(1),
            ZoneKind::Double => Some(2),
            ZoneKind::Triple => Some(3),
            ZoneKind::HomeRun => Some(4),
            ZoneKind::Out => None,
        }
    }

    /// Banner message when this outcome commits
    pub fn message(&self) -> &'static str {
        match self {
            ZoneKind::Single => "SINGLE",
            ZoneKind::Double => "DOUBLE",
            ZoneKind::Triple => "TRIPLE",
            ZoneKind::HomeRun => "HOMERUN!",
            ZoneKind::Out => "OUT",
        }
    }
}

/// Master zone-type list: the multiset of outcomes distributed across the
/// 11 slots. Reshuffles permute this list, never change its contents.
pub const ZONE_TYPES: [ZoneKind; ZONE_COUNT] = [
    ZoneKind::Double,
    ZoneKind::Single,
    ZoneKind::Triple,
    ZoneKind::Out,
    ZoneKind::HomeRun,
    ZoneKind::HomeRun,
    ZoneKind::HomeRun,
    ZoneKind::Out,
    ZoneKind::Triple,
    ZoneKind::Single,
    ZoneKind::Double,
];

/// Discrete outcome events for the audio collaborator, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    TitleShown,
    PitchReleased,
    ContactMade,
    OutRecorded,
    BaseHit(ZoneKind),
    HomeRun,
    RunScored,
    GameOver,
}

/// The ball, reset to a canonical spawn at the start of every pitch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// In flight (pitched or struck)
    pub is_moving: bool,
    /// Has been struck by the bat
    pub hit: bool,
    /// Still eligible to trigger an outcome
    pub active: bool,
    /// Shrink factor signalling outcome commit (1 = live, 0 = gone)
    pub scale: f32,
    /// Outcome being committed via the shrink animation
    pub resolving: Option<ZoneKind>,
    /// Ticks since the last shrink step
    pub shrink_timer: u32,
}

impl Ball {
    /// Canonical pitch spawn: at the mound, at rest, unstruck, live
    pub fn spawn() -> Self {
        Self {
            pos: Vec2::new(BALL_SPAWN_X, BALL_SPAWN_Y),
            vel: Vec2::ZERO,
            radius: BALL_RADIUS,
            is_moving: false,
            hit: false,
            active: true,
            scale: 1.0,
            resolving: None,
            shrink_timer: 0,
        }
    }

    /// Combined per-axis speed, the settle metric
    #[inline]
    pub fn settle_speed(&self) -> f32 {
        self.vel.x.abs() + self.vel.y.abs()
    }
}

/// The bat, pivoting at the batter's hands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bat {
    pub pivot: Vec2,
    pub angle: f32,
    pub is_swinging: bool,
}

impl Default for Bat {
    fn default() -> Self {
        Self {
            pivot: Vec2::new(BAT_PIVOT_X, BAT_PIVOT_Y),
            angle: BAT_REST_ANGLE,
            is_swinging: false,
        }
    }
}

/// One defensive player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fielder {
    pub role: FielderRole,
    /// Player name assigned from the inning's roster
    pub label: String,
    pub home: Vec2,
    pub pos: Vec2,
    pub half_extents: Vec2,
    pub sway_range: f32,
    /// "Just recorded an out" highlight, counted down per tick
    pub blink_ticks: u32,
}

impl Fielder {
    /// Catch radius: half the fielder's width
    #[inline]
    pub fn catch_radius(&self) -> f32 {
        self.half_extents.x
    }

    pub fn is_blinking(&self) -> bool {
        self.blink_ticks > 0
    }
}

/// One hit-zone slot on the outfield arc
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitZone {
    pub rect: RotatedRect,
    pub kind: ZoneKind,
    /// Face shown to the renderer; diverges from `kind` only while the
    /// slot-machine flicker runs
    pub display_label: String,
    pub display_color: String,
}

impl HitZone {
    fn new(rect: RotatedRect, kind: ZoneKind) -> Self {
        Self {
            rect,
            kind,
            display_label: kind.label().to_string(),
            display_color: kind.color().to_string(),
        }
    }

    /// Commit a type to this slot and restore its face
    pub fn assign(&mut self, kind: ZoneKind) {
        self.kind = kind;
        self.display_label = kind.label().to_string();
        self.display_color = kind.color().to_string();
    }
}

/// A base runner, alive only while a hit resolves
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Runner {
    pub pos: Vec2,
    /// Last base reached; -1 = batter's box
    pub current_target: i8,
    /// Base this runner must reach; >= 3 means home (scores)
    pub final_target: i8,
}

/// A pitcher in the bullpen rotation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pitcher {
    pub name: String,
    /// Pitch speed (per tick) while this pitcher is on the mound
    pub speed: f32,
}

/// Bullpen rotation, one pitcher per inning
pub fn bullpen() -> Vec<Pitcher> {
    [("Mori", 3.5), ("Kaneda", 7.0), ("Ibuki", 10.5)]
        .into_iter()
        .map(|(name, speed)| Pitcher {
            name: name.to_string(),
            speed,
        })
        .collect()
}

/// Fielding rosters, one 7-name lineup per inning
pub fn rosters() -> Vec<Vec<String>> {
    [
        ["Asa", "Benji", "Cori", "Dusty", "Eiko", "Fletch", "Gus"],
        ["Hana", "Iggy", "Juno", "Kip", "Lars", "Mina", "Nori"],
        ["Oz", "Piper", "Quinn", "Rudy", "Sol", "Tess", "Uma"],
    ]
    .into_iter()
    .map(|lineup| lineup.into_iter().map(str::to_string).collect())
    .collect()
}

/// Between-inning reshuffle ritual progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShuffleRitual {
    /// Ticks since the last flicker step
    pub ticks: u32,
    /// Flicker steps performed so far
    pub flickers: u32,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; the only randomness source in the simulation
    pub rng: Pcg32,
    /// Current phase
    pub phase: GamePhase,
    /// Current inning, 1..=4 (4 = terminal)
    pub inning: u8,
    /// Outs this inning, always < 3 between ticks
    pub outs: u8,
    /// Strikes on the batter, always < 3 between ticks
    pub strikes: u8,
    /// Occupancy of first/second/third
    pub bases: [bool; 3],
    pub score: u32,
    /// Last user-visible event banner
    pub message: String,
    /// Pre-pitch countdown display, if any
    pub countdown: Option<Countdown>,
    /// Ticks since the last pitch resolved
    pub pitch_timer: u32,
    pub first_pitch_of_inning: bool,
    /// Pitch speed of the pitcher currently on the mound
    pub current_pitch_speed: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Freshness token for deferred actions; bumped by every pitch reset
    pub pitch_serial: u64,
    pub ball: Ball,
    pub bat: Bat,
    pub fielders: Vec<Fielder>,
    pub zones: Vec<HitZone>,
    /// Live runner batch; empty unless a hit is resolving
    pub runners: Vec<Runner>,
    /// Reshuffle ritual progress while in `InningBreak`
    pub shuffle: Option<ShuffleRitual>,
    /// Per-game pitcher rotation (shuffled once at game start)
    pub pitcher_queue: Vec<Pitcher>,
    /// Per-game roster rotation (shuffled once at game start)
    pub roster_queue: Vec<Vec<String>>,
    /// Deferred one-shot actions
    pub queue: ActionQueue,
    pub tuning: Tuning,
    /// Events produced this tick, drained by the caller
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a fresh game on the title screen with the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);

        let mut pitcher_queue = bullpen();
        let mut roster_queue = rosters();
        {
            use rand::seq::SliceRandom;
            pitcher_queue.shuffle(&mut rng);
            roster_queue.shuffle(&mut rng);
        }

        let fielders = field::fielder_posts()
            .into_iter()
            .map(|post| Fielder {
                role: post.role,
                label: String::new(),
                home: post.home,
                pos: post.home,
                half_extents: post.half_extents,
                sway_range: post.sway_range,
                blink_ticks: 0,
            })
            .collect();

        let zones = (0..ZONE_COUNT)
            .map(|i| HitZone::new(field::zone_slot(i), ZONE_TYPES[i]))
            .collect();

        Self {
            seed,
            rng,
            phase: GamePhase::PreGame,
            inning: 1,
            outs: 0,
            strikes: 0,
            bases: [false; 3],
            score: 0,
            message: TITLE_MESSAGE.to_string(),
            countdown: None,
            pitch_timer: 0,
            first_pitch_of_inning: true,
            current_pitch_speed: 3.5,
            time_ticks: 0,
            pitch_serial: 0,
            ball: Ball::spawn(),
            bat: Bat::default(),
            fielders,
            zones,
            runners: Vec::new(),
            shuffle: None,
            pitcher_queue,
            roster_queue,
            queue: ActionQueue::default(),
            tuning,
            events: Vec::new(),
        }
    }

    /// Reset the ball to the canonical spawn for a new pitch.
    ///
    /// Bumps the freshness token so any still-pending deferred action aimed
    /// at the old pitch is dropped instead of corrupting the new one.
    pub fn reset_pitch(&mut self) {
        self.ball = Ball::spawn();
        self.pitch_timer = 0;
        self.pitch_serial += 1;
    }

    /// The game-over flag; holds exactly when the inning counter is terminal
    #[inline]
    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Whether the between-inning reshuffle ritual is running
    #[inline]
    pub fn is_shuffling(&self) -> bool {
        self.shuffle.is_some()
    }

    /// Whether a runner batch is mid-advance
    #[inline]
    pub fn runners_advancing(&self) -> bool {
        !self.runners.is_empty()
    }

    /// Record an event for the audio collaborator
    #[inline]
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain the events produced this tick
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
