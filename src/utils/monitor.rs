#[cfg(feature = "monitor")]
use std::sync::atomic::{AtomicU64, Ordering};
#[cfg(feature = "monitor")]
use std::sync::{Arc, Mutex};
#[cfg(feature = "monitor")]
use std::time::{Duration, Instant};
#[cfg(feature = "monitor")]
use sysinfo::{Pid, RefreshKind, System};

#[cfg(feature = "monitor")]
#[derive(Debug, Clone)]
pub struct ResourceSnapshot {
    pub cpu_percent: f32,
    pub rss_mb: u64,
    pub rss_percent: f32,
    pub peak_rss_mb: u64,
    pub uptime: Duration,
}

/// Process resource tracker for long-running serving. Refreshes on demand,
/// keeps the peak RSS across the process lifetime.
#[cfg(feature = "monitor")]
pub struct ResourceMonitor {
    system: Mutex<System>,
    pid: Pid,
    started: Instant,
    peak_rss: AtomicU64,
    enabled: bool,
}

#[cfg(feature = "monitor")]
impl ResourceMonitor {
    pub fn new(enabled: bool) -> Self {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        let pid = sysinfo::get_current_pid().expect("Failed to get current PID");
        system.refresh_all();

        Self {
            system: Mutex::new(system),
            pid,
            started: Instant::now(),
            peak_rss: AtomicU64::new(0),
            enabled,
        }
    }

    pub fn snapshot(&self) -> Option<ResourceSnapshot> {
        if !self.enabled {
            return None;
        }

        let mut system = self.system.lock().ok()?;
        system.refresh_all();

        let process = system.process(self.pid)?;
        let rss_mb = process.memory() / 1024 / 1024;
        let total_mb = system.total_memory() / 1024 / 1024;
        let rss_percent = if total_mb > 0 {
            (rss_mb as f32 / total_mb as f32) * 100.0
        } else {
            0.0
        };

        let peak_rss_mb = self.peak_rss.fetch_max(rss_mb, Ordering::Relaxed).max(rss_mb);

        Some(ResourceSnapshot {
            cpu_percent: process.cpu_usage(),
            rss_mb,
            rss_percent,
            peak_rss_mb,
            uptime: self.started.elapsed(),
        })
    }

    pub fn log(&self, phase: &str) {
        if let Some(snapshot) = self.snapshot() {
            tracing::info!(
                "📊 {} - CPU: {:.1}%, RSS: {}MB ({:.1}%), Peak: {}MB, Uptime: {:?}",
                phase,
                snapshot.cpu_percent,
                snapshot.rss_mb,
                snapshot.rss_percent,
                snapshot.peak_rss_mb,
                snapshot.uptime
            );
        }
    }

    pub fn log_final(&self) {
        if let Some(snapshot) = self.snapshot() {
            tracing::info!(
                "📊 Final - Uptime: {:?}, Peak RSS: {}MB",
                snapshot.uptime,
                snapshot.peak_rss_mb
            );
        }
    }

    /// Log a snapshot every `period` until the process exits.
    pub async fn run_periodic(self: Arc<Self>, period: Duration) {
        let mut interval = tokio::time::interval(period);
        interval.tick().await; // 第一次 tick 立即返回
        loop {
            interval.tick().await;
            self.log("Serving");
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}

// 未啟用 monitor 功能時提供空實現
#[cfg(not(feature = "monitor"))]
pub struct ResourceMonitor;

#[cfg(not(feature = "monitor"))]
impl ResourceMonitor {
    pub fn new(_enabled: bool) -> Self {
        Self
    }

    pub fn log(&self, _phase: &str) {}

    pub fn log_final(&self) {}

    pub async fn run_periodic(self: std::sync::Arc<Self>, _period: std::time::Duration) {}

    pub fn is_enabled(&self) -> bool {
        false
    }
}
