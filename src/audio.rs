use std::io::{self, Write};

/// Sound cues emitted by the simulation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum SoundEvent {
    Eat,
    GoldenEat,
    Crash,
}

/// Fire-and-forget sound output.
///
/// The game core only raises [`SoundEvent`]s; whether and how they are
/// audible is up to the port. Implementations must never fail the game:
/// playback problems are swallowed.
pub trait AudioPort {
    fn play(&mut self, event: SoundEvent);
}

/// Plays cues as terminal bells, best effort.
#[derive(Debug, Default)]
pub struct BellAudio;

impl AudioPort for BellAudio {
    fn play(&mut self, event: SoundEvent) {
        let bells: &[u8] = match event {
            SoundEvent::Eat => b"\x07",
            // A golden fruit or a crash rings twice.
            SoundEvent::GoldenEat | SoundEvent::Crash => b"\x07\x07",
        };

        let mut stdout = io::stdout();
        let _ = stdout.write_all(bells);
        let _ = stdout.flush();
    }
}

/// Silent port used with `--no-sound`.
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioPort for NullAudio {
    fn play(&mut self, _event: SoundEvent) {}
}
