// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::time::{Duration, Instant};

use crate::memory::{bytes_to_mb, resident_set_bytes};
use crate::traits::ResourceProbe;

/// CPU time consumed so far by the calling thread.
///
/// Uses `CLOCK_THREAD_CPUTIME_ID` on Linux and macOS; returns zero elsewhere
/// or if the clock is unavailable.
#[cfg(any(target_os = "linux", target_os = "macos"))]
pub fn thread_cpu_time() -> Duration {
    let mut ts = libc::timespec {
        tv_sec: 0,
        tv_nsec: 0,
    };
    if unsafe { libc::clock_gettime(libc::CLOCK_THREAD_CPUTIME_ID, &mut ts) } != 0 {
        return Duration::ZERO;
    }

    Duration::new(ts.tv_sec.max(0) as u64, ts.tv_nsec.clamp(0, 999_999_999) as u32)
}

/// CPU time consumed so far by the calling thread.
#[cfg(not(any(target_os = "linux", target_os = "macos")))]
pub fn thread_cpu_time() -> Duration {
    Duration::ZERO
}

/// [`ResourceProbe`] over the calling thread's CPU clock and the process RSS.
///
/// Thread-scoped CPU time keeps parallel workers from counting each other's
/// work. The probe must be used from the thread that created it.
#[derive(Debug)]
pub struct ThreadProbe {
    last_wall: Instant,
    last_cpu: Duration,
}

impl ThreadProbe {
    /// Starts the first CPU window now.
    pub fn new() -> Self {
        Self {
            last_wall: Instant::now(),
            last_cpu: thread_cpu_time(),
        }
    }
}

impl Default for ThreadProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl ResourceProbe for ThreadProbe {
    fn reset_cpu_window(&mut self) {
        self.last_wall = Instant::now();
        self.last_cpu = thread_cpu_time();
    }

    fn cpu_percent(&mut self) -> f64 {
        let wall_now = Instant::now();
        let cpu_now = thread_cpu_time();

        let wall = wall_now.duration_since(self.last_wall);
        let used = cpu_now.saturating_sub(self.last_cpu);

        self.last_wall = wall_now;
        self.last_cpu = cpu_now;

        if wall.is_zero() {
            return 0.0;
        }

        used.as_secs_f64() / wall.as_secs_f64() * 100.0
    }

    fn rss_mb(&mut self) -> f64 {
        bytes_to_mb(resident_set_bytes())
    }
}
