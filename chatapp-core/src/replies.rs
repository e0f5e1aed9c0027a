use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

/// Stock answers used by the simulated contact.
pub const DEFAULT_REPLIES: [&str; 10] = [
    "Thanks for your message!",
    "I'll get back to you shortly.",
    "Interesting point!",
    "Let me check on that.",
    "Agreed!",
    "Can we discuss this tomorrow?",
    "That's a great question!",
    "Let me think about that...",
    "Could you clarify that?",
    "I'll need to check my schedule",
];

pub fn default_replies() -> Vec<String> {
    DEFAULT_REPLIES.iter().map(|s| s.to_string()).collect()
}

/// Source of the choice made for every simulated reply.
pub trait ReplyPicker: Send {
    /// Returns an index in `0..candidates`. Only called with `candidates > 0`.
    fn pick(&mut self, candidates: usize) -> usize;
}

/// Uniform choice backed by a seeded or entropy-seeded [`StdRng`].
pub struct RandomReplies {
    rng: StdRng,
}

impl RandomReplies {
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl ReplyPicker for RandomReplies {
    fn pick(&mut self, candidates: usize) -> usize {
        self.rng.gen_range(0..candidates)
    }
}

/// Always picks the same candidate (clamped to the last one).
#[derive(Debug, Clone, Copy)]
pub struct FixedReply(pub usize);

impl ReplyPicker for FixedReply {
    fn pick(&mut self, candidates: usize) -> usize {
        self.0.min(candidates.saturating_sub(1))
    }
}
