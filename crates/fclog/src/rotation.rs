//! Size-based rotation state

/// Threshold and suffix counter for one logger.
///
/// The suffix starts at 1 and only moves forward, once per completed
/// rotation, so rotated file names are never handed out twice.
#[derive(Debug, Clone)]
pub struct RotationState {
    /// Active file size that triggers a rotation
    max_size_bytes: u64,
    /// Suffix for the next rotated file
    next_suffix: u64,
}

impl RotationState {
    pub fn new(max_size_bytes: u64) -> Self {
        Self {
            max_size_bytes,
            next_suffix: 1,
        }
    }

    /// Whether an active file of `size` bytes must be rotated before the next write
    pub fn should_rotate(&self, size: u64) -> bool {
        size >= self.max_size_bytes
    }

    pub fn next_suffix(&self) -> u64 {
        self.next_suffix
    }

    /// Record a completed rotation
    pub fn advance(&mut self) {
        self.next_suffix += 1;
    }

    /// Number of rotations performed so far
    pub fn rotations(&self) -> u64 {
        self.next_suffix - 1
    }

    pub fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }
}
