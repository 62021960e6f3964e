//! Canned replies used when the provider cannot be reached

use rand::seq::SliceRandom;
use rand::Rng;

/// Replies used when no API key is configured
pub const MISSING_CREDENTIAL_REPLIES: &[&str] = &[
    "真是个好天气呢！",
    "我在思考人生的意义...",
    "你好啊，很高兴见到你！",
    "今天过得怎么样？",
    "让我想想...",
];

/// Replies used when the provider request fails
pub const PROVIDER_FAILURE_REPLIES: &[&str] = &[
    "真是个好天气呢！",
    "我在思考人生...",
    "你好啊！",
    "让我想想...",
];

/// A fixed set of replies drawn from uniformly at random
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackPool {
    replies: &'static [&'static str],
}

impl FallbackPool {
    /// Pool for the missing-credential path
    pub const MISSING_CREDENTIAL: Self = Self {
        replies: MISSING_CREDENTIAL_REPLIES,
    };

    /// Pool for the provider-failure path
    pub const PROVIDER_FAILURE: Self = Self {
        replies: PROVIDER_FAILURE_REPLIES,
    };

    /// All replies in this pool
    pub fn replies(&self) -> &'static [&'static str] {
        self.replies
    }

    /// Whether `reply` belongs to this pool
    pub fn contains(&self, reply: &str) -> bool {
        self.replies.contains(&reply)
    }

    /// Draw a reply using the thread-local RNG
    pub fn pick(&self) -> String {
        self.pick_with(&mut rand::thread_rng())
    }

    /// Draw a reply using `rng`
    pub fn pick_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        // Both pools are non-empty constants.
        self.replies
            .choose(rng)
            .copied()
            .unwrap_or(self.replies[0])
            .to_string()
    }
}
