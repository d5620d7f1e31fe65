use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Remaining time below this many seconds counts as expired.
pub const EPSILON: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimerEvent {
    Tick { generation: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Running,
    Paused,
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerState {
    pub remaining: f64,
    pub is_paused: bool,
    pub is_expired: bool,
}

/// Pure countdown arithmetic with no notion of wall time or scheduling.
#[derive(Debug, Clone)]
pub struct Countdown {
    max_time: f64,
    remaining: f64,
    phase: TimerPhase,
}

impl Countdown {
    pub fn new(max_time: f64) -> Self {
        Self {
            max_time,
            remaining: max_time,
            phase: TimerPhase::Running,
        }
    }

    pub fn max_time(&self) -> f64 {
        self.max_time
    }

    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    pub fn elapsed(&self) -> f64 {
        self.max_time - self.remaining
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn state(&self) -> TimerState {
        TimerState {
            remaining: self.remaining,
            is_paused: self.phase == TimerPhase::Paused,
            is_expired: self.phase == TimerPhase::Expired,
        }
    }

    /// Consumes `dt` of running time. Returns true if this call expired the countdown.
    pub fn advance(&mut self, dt: Duration) -> bool {
        if self.phase != TimerPhase::Running {
            return false;
        }
        let next = self.remaining - dt.as_secs_f64();
        if next < EPSILON {
            self.remaining = 0.0;
            self.phase = TimerPhase::Expired;
            true
        } else {
            self.remaining = next;
            false
        }
    }

    pub fn pause(&mut self) -> bool {
        if self.phase == TimerPhase::Running {
            self.phase = TimerPhase::Paused;
            true
        } else {
            false
        }
    }

    pub fn resume(&mut self) -> bool {
        if self.phase == TimerPhase::Paused {
            self.phase = TimerPhase::Running;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.remaining = self.max_time;
        self.phase = TimerPhase::Running;
    }
}

/// Something that can deliver `TimerEvent::Tick` for a generation until told to stop.
pub trait TickSource {
    fn start(&mut self, interval: Duration, generation: u64, cancel: Arc<AtomicBool>);
}

/// Production tick source: one thread per run, feeding the UI loop over a channel.
pub struct ThreadTicks {
    tx: mpsc::Sender<TimerEvent>,
}

impl ThreadTicks {
    pub fn channel() -> (Self, mpsc::Receiver<TimerEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }
}

impl TickSource for ThreadTicks {
    fn start(&mut self, interval: Duration, generation: u64, cancel: Arc<AtomicBool>) {
        let tx = self.tx.clone();
        thread::spawn(move || loop {
            thread::sleep(interval);
            if cancel.load(Ordering::SeqCst) {
                break;
            }
            if tx.send(TimerEvent::Tick { generation }).is_err() {
                break;
            }
        });
    }
}

/// Owned handle to the active tick source. Cancels on drop.
#[derive(Debug)]
pub struct TickHandle {
    generation: u64,
    cancel: Arc<AtomicBool>,
}

impl TickHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }
}

impl Drop for TickHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Countdown plus the single tick source that drives it.
pub struct Timer {
    countdown: Countdown,
    interval: Duration,
    source: Box<dyn TickSource>,
    ticks: Option<TickHandle>,
    generation: u64,
    last_tick: Instant,
}

impl Timer {
    pub fn new(max_time: f64, interval: Duration, source: Box<dyn TickSource>, now: Instant) -> Self {
        Self {
            countdown: Countdown::new(max_time),
            interval,
            source,
            ticks: None,
            generation: 0,
            last_tick: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn max_time(&self) -> f64 {
        self.countdown.max_time()
    }

    pub fn remaining(&self) -> f64 {
        self.countdown.remaining()
    }

    pub fn elapsed(&self) -> f64 {
        self.countdown.elapsed()
    }

    pub fn phase(&self) -> TimerPhase {
        self.countdown.phase()
    }

    pub fn state(&self) -> TimerState {
        self.countdown.state()
    }

    pub fn is_ticking(&self) -> bool {
        self.ticks.is_some()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start(&mut self, now: Instant) {
        self.stop_ticks();
        if self.countdown.phase() == TimerPhase::Expired {
            return;
        }
        self.countdown.resume();
        self.spawn_ticks(now);
    }

    pub fn pause(&mut self, now: Instant) {
        if self.countdown.phase() != TimerPhase::Running {
            return;
        }
        self.catch_up(now);
        self.stop_ticks();
        self.countdown.pause();
    }

    pub fn resume(&mut self, now: Instant) {
        if self.countdown.phase() != TimerPhase::Paused {
            return;
        }
        self.stop_ticks();
        self.countdown.resume();
        self.spawn_ticks(now);
    }

    pub fn toggle(&mut self, now: Instant) {
        match self.countdown.phase() {
            TimerPhase::Running => self.pause(now),
            TimerPhase::Paused => self.resume(now),
            TimerPhase::Expired => {}
        }
    }

    pub fn reset(&mut self, now: Instant) {
        self.stop_ticks();
        self.countdown.reset();
        self.spawn_ticks(now);
    }

    /// Applies a tick. Returns true when the tick changed the displayed time.
    pub fn on_tick(&mut self, generation: u64, now: Instant) -> bool {
        if self.ticks.as_ref().map(TickHandle::generation) != Some(generation) {
            return false;
        }
        self.catch_up(now);
        true
    }

    fn catch_up(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_tick);
        self.last_tick = now;
        if self.countdown.advance(dt) {
            self.stop_ticks();
        }
    }

    fn spawn_ticks(&mut self, now: Instant) {
        self.generation += 1;
        self.last_tick = now;
        let cancel = Arc::new(AtomicBool::new(false));
        self.source
            .start(self.interval, self.generation, Arc::clone(&cancel));
        self.ticks = Some(TickHandle {
            generation: self.generation,
            cancel,
        });
    }

    fn stop_ticks(&mut self) {
        if let Some(handle) = self.ticks.take() {
            handle.cancel();
        }
    }
}

pub fn format_remaining(secs: f64) -> String {
    format!("{:.1}", secs.max(0.0))
}

pub fn format_duration(total_secs: i64) -> String {
    if total_secs <= 0 {
        return "0h 0m 0s".to_string();
    }
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{}h {}m {}s", hours, minutes, seconds)
}
