/// Messages crossing the engine boundary.
///
/// `InputEvent` flows in from the input collaborator; `GameEvent` flows out
/// to the render/audio collaborators, which may ignore anything they don't
/// care about.

use crate::entities::{Level, PowerUpKind};

/// Discrete player input.  Events that make no sense in the current phase
/// are ignored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputEvent {
    MoveLeft,
    MoveRight,
    Fire,
    ActivateShield,
    SelectEasy,
    SelectHard,
    Restart,
}

impl InputEvent {
    /// The level a selection input asks for, if it is one.
    pub fn level(&self) -> Option<Level> {
        match self {
            InputEvent::SelectEasy => Some(Level::Easy),
            InputEvent::SelectHard => Some(Level::Hard),
            _ => None,
        }
    }
}

/// Something noteworthy the engine did, queued in the order it happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    LevelChosen(Level),
    Shoot,
    PlayerHit,
    ObstacleDestroyed,
    PowerUpSpawned(PowerUpKind),
    PowerUpCollected(PowerUpKind),
    ShieldRaised,
    ShieldExpired,
    GameOver { score: u32 },
    Restarted,
}

/// Sound cues the audio collaborator knows how to play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Shoot,
    PlayerHit,
}

impl GameEvent {
    pub fn cue(&self) -> Option<Cue> {
        match self {
            GameEvent::Shoot => Some(Cue::Shoot),
            GameEvent::PlayerHit => Some(Cue::PlayerHit),
            _ => None,
        }
    }
}

/// Audio output.  Failures stay on the audio side.
pub trait CueSink {
    fn play(&mut self, cue: Cue) -> std::io::Result<()>;
}

/// Forward every cue-bearing event to `sink`.  A cue that fails to play is
/// logged and skipped.
pub fn play_cues<S: CueSink + ?Sized>(events: &[GameEvent], sink: &mut S) {
    for cue in events.iter().filter_map(GameEvent::cue) {
        if let Err(err) = sink.play(cue) {
            log::warn!("failed to play {:?} cue: {}", cue, err);
        }
    }
}
