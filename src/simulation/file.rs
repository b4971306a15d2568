//! Files held by entities, complete or still in transfer.

use log::trace;

/// A named file owned by one entity.
///
/// A file is either complete (its visible data equals its full content) or in
/// transfer, in which case `remaining_ticks > 0` and only a prefix of the
/// content has arrived so far.
#[derive(Debug, Clone, PartialEq)]
pub struct File {
    name: String,
    content: String,
    data: String,
    remaining_ticks: u32,
    total_ticks: u32,
    /// Bytes delivered per tick while in transfer.
    rate: u64,
}

impl File {
    /// A file that is fully present from the start (added locally).
    pub fn complete(name: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        File {
            name: name.into(),
            data: content.clone(),
            content,
            remaining_ticks: 0,
            total_ticks: 0,
            rate: 0,
        }
    }

    /// A file about to be received over a link of `bandwidth` bytes per tick.
    ///
    /// An empty file needs no ticks and is complete on arrival.
    pub fn incoming(name: impl Into<String>, content: impl Into<String>, bandwidth: u32) -> Self {
        let content = content.into();
        let ticks = required_ticks(content.len(), bandwidth);
        if ticks == 0 {
            return File::complete(name, content);
        }
        File {
            name: name.into(),
            content,
            data: String::new(),
            remaining_ticks: ticks,
            total_ticks: ticks,
            rate: u64::from(bandwidth),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Full content, as it will read once the transfer completes.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Data received so far; equal to [`File::content`] once complete.
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Size in bytes of the full content.
    pub fn size(&self) -> usize {
        self.content.len()
    }

    pub fn remaining_ticks(&self) -> u32 {
        self.remaining_ticks
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_ticks == 0
    }

    /// Advance the transfer by one tick.
    ///
    /// Returns `true` only on the tick the file becomes complete.
    pub fn advance(&mut self) -> bool {
        if self.is_complete() {
            return false;
        }
        self.remaining_ticks -= 1;
        if self.remaining_ticks == 0 {
            self.data = self.content.clone();
            trace!("File {} complete ({} bytes)", self.name, self.size());
            return true;
        }
        let elapsed = u64::from(self.total_ticks - self.remaining_ticks);
        let delivered = usize::try_from(self.rate.saturating_mul(elapsed)).unwrap_or(usize::MAX);
        self.data = prefix_within(&self.content, delivered).to_string();
        false
    }
}

/// Ticks needed to move `size` bytes over `bandwidth` bytes per tick.
pub fn required_ticks(size: usize, bandwidth: u32) -> u32 {
    if size == 0 {
        return 0;
    }
    let bandwidth = u64::from(bandwidth.max(1));
    let ticks = (size as u64).div_ceil(bandwidth);
    u32::try_from(ticks).unwrap_or(u32::MAX)
}

/// Longest prefix of `s` that fits in `max_bytes` without splitting a character.
fn prefix_within(s: &str, max_bytes: usize) -> &str {
    if max_bytes >= s.len() {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
