pub const TICK_MS: u64 = 50;
pub const HOLD_MS: u64 = 2000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Typing,
    Holding(u32),
    Deleting,
}

/// Types each phrase out one character per tick, holds it, erases it and
/// moves on to the next phrase, wrapping around forever.
#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<String>,
    current: usize,
    shown: usize,
    phase: Phase,
    hold_ticks: u32,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, tick_ms: u64, hold_ms: u64) -> Self {
        let hold_ticks = u32::try_from((hold_ms / tick_ms.max(1)).max(1)).unwrap_or(u32::MAX);
        Self {
            phrases,
            current: 0,
            shown: 0,
            phase: Phase::Typing,
            hold_ticks,
        }
    }

    pub fn text(&self) -> &str {
        let Some(phrase) = self.phrases.get(self.current) else {
            return "";
        };
        match phrase.char_indices().nth(self.shown) {
            Some((end, _)) => &phrase[..end],
            None => phrase,
        }
    }

    pub fn step(&mut self) {
        let Some(phrase) = self.phrases.get(self.current) else {
            return;
        };
        let len = phrase.chars().count();
        self.phase = match self.phase {
            Phase::Typing => {
                if self.shown < len {
                    self.shown += 1;
                }
                if self.shown >= len {
                    Phase::Holding(self.hold_ticks)
                } else {
                    Phase::Typing
                }
            }
            Phase::Holding(n) if n > 1 => Phase::Holding(n - 1),
            Phase::Holding(_) => Phase::Deleting,
            Phase::Deleting => {
                self.shown = self.shown.saturating_sub(1);
                if self.shown == 0 {
                    self.current = (self.current + 1) % self.phrases.len();
                    Phase::Typing
                } else {
                    Phase::Deleting
                }
            }
        };
    }
}
