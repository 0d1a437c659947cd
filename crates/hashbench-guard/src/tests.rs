// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tests for hashbench_guard

use crate::{LimitStatus, ResourceLimits, apply_limits};

#[test]
fn test_empty_limits_touch_nothing() {
    let limits = ResourceLimits::default();

    assert!(limits.is_empty());
    assert_eq!(apply_limits(&limits), LimitStatus::default());
}

#[cfg(target_os = "linux")]
mod linux {
    use serial_test::serial;

    use crate::{LimitError, ResourceLimits, apply_limits, pin_to_cpu};

    /// Runs an ignored test as a subprocess and returns its exit code.
    fn run_test_as_subprocess(test_name: &str) -> Option<i32> {
        let exe = std::env::current_exe().expect("Failed to get current exe");
        let status = std::process::Command::new(exe)
            .args([
                "--exact",
                test_name,
                "--ignored",
                "--test-threads=1",
                "--nocapture",
            ])
            .status()
            .expect("Failed to run subprocess");
        status.code()
    }

    fn current_affinity() -> Vec<usize> {
        let mut set: libc::cpu_set_t = unsafe { core::mem::zeroed() };
        let rc =
            unsafe { libc::sched_getaffinity(0, core::mem::size_of::<libc::cpu_set_t>(), &mut set) };
        assert_eq!(rc, 0, "sched_getaffinity failed");

        (0..8 * core::mem::size_of::<libc::cpu_set_t>())
            .filter(|&cpu| unsafe { libc::CPU_ISSET(cpu, &set) })
            .collect()
    }

    fn current_address_space_limit() -> libc::rlimit {
        let mut limit = libc::rlimit {
            rlim_cur: 0,
            rlim_max: 0,
        };
        let rc = unsafe { libc::getrlimit(libc::RLIMIT_AS, &mut limit) };
        assert_eq!(rc, 0, "getrlimit failed");
        limit
    }

    #[test]
    fn test_out_of_range_cpu_is_rejected_without_syscall() {
        let result = pin_to_cpu(usize::MAX);

        assert!(matches!(result, Err(LimitError::CpuOutOfRange { .. })));
    }

    #[test]
    fn test_failed_pinning_is_not_fatal() {
        let status = apply_limits(&ResourceLimits {
            cpu: Some(usize::MAX),
            memory_bytes: None,
        });

        assert!(!status.affinity_applied);
        assert!(!status.memory_cap_applied);
    }

    // Subprocess test: pin to the first CPU we are allowed to run on
    #[test]
    #[ignore]
    fn subprocess_test_pin_to_cpu() {
        let allowed = current_affinity();
        let target = allowed[0];

        let status = apply_limits(&ResourceLimits {
            cpu: Some(target),
            memory_bytes: None,
        });

        assert!(status.affinity_applied, "affinity should have been applied");
        assert_eq!(current_affinity(), vec![target]);

        std::process::exit(0);
    }

    #[test]
    #[serial(rlimit)]
    fn test_pin_to_cpu() {
        let exit_code = run_test_as_subprocess("tests::linux::subprocess_test_pin_to_cpu");
        assert_eq!(exit_code, Some(0), "Subprocess should exit with 0");
    }

    // Subprocess test: cap the address space well above what the test needs
    #[test]
    #[ignore]
    fn subprocess_test_cap_address_space() {
        let before = current_address_space_limit();
        let requested: u64 = 64 * 1024 * 1024 * 1024;

        let status = apply_limits(&ResourceLimits {
            cpu: None,
            memory_bytes: Some(requested),
        });

        assert!(status.memory_cap_applied, "memory cap should have been applied");

        let after = current_address_space_limit();
        assert_eq!(after.rlim_max, before.rlim_max, "hard limit must not move");
        assert_eq!(after.rlim_cur, (requested as libc::rlim_t).min(before.rlim_max));

        std::process::exit(0);
    }

    #[test]
    #[serial(rlimit)]
    fn test_cap_address_space() {
        let exit_code = run_test_as_subprocess("tests::linux::subprocess_test_cap_address_space");
        assert_eq!(exit_code, Some(0), "Subprocess should exit with 0");
    }
}

#[cfg(not(target_os = "linux"))]
mod non_linux {
    use crate::{ResourceLimits, apply_limits};

    #[test]
    fn test_limits_degrade_to_not_applied() {
        let status = apply_limits(&ResourceLimits {
            cpu: Some(0),
            memory_bytes: Some(1 << 30),
        });

        assert!(!status.affinity_applied, "affinity not available on non-Linux");
        assert!(!status.memory_cap_applied, "rlimit not available on non-Linux");
    }
}
