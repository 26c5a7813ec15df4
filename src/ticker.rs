//! The ticker drives a [`SharedClock`] from a background thread, ticking it
//! once per interval. The thread lives exactly as long as the [`Ticker`]
//! handle: dropping the handle stops the thread and waits for it to finish.
//!
//! Every tick locks the shared clock and works on whatever state it finds
//! there, so actions taken between two ticks are always respected.

use {
    crate::{clock::SharedClock, Snapshot},
    crossbeam_channel::{unbounded, Receiver, RecvTimeoutError, Sender},
    std::{
        thread::{self, JoinHandle},
        time::{Duration, Instant},
    },
};

/// Ways in which the ticker can fail.
#[derive(Debug, snafu::Snafu)]
pub enum Error {
    /// The ticker's thread died.
    #[snafu(display("The ticker thread stopped"))]
    ThreadStopped,
    /// The ticker's thread could not be spawned.
    #[snafu(display("Failed to spawn the ticker thread: {}", source))]
    Spawn {
        /// The underlying error.
        source: std::io::Error,
    },
    /// A ticker with an interval of zero would never sleep.
    #[snafu(display("The tick interval must not be zero"))]
    ZeroInterval,
}

/// The Result type for the ticker.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type Observer = Box<dyn FnMut(&Snapshot) + Send>;

/// An owned handle to the thread ticking a [`SharedClock`]. The only
/// communication possible with the thread is changing its interval and
/// stopping it.
pub struct Ticker {
    sender: Sender<Request>,
    join_handle: Option<JoinHandle<()>>,
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shut_down().ok();
    }
}

impl Ticker {
    /// Starts ticking the clock once every `interval`. The first tick happens
    /// one interval from now.
    pub fn start(clock: SharedClock, interval: Duration) -> Result<Self> {
        Self::spawn(clock, interval, None)
    }

    /// Starts ticking the clock like [`start`](Ticker::start) and calls the
    /// observer with the clock's state after every tick. The observer runs on
    /// the ticker's thread without holding the clock's lock.
    pub fn with_observer<F>(clock: SharedClock, interval: Duration, observer: F) -> Result<Self>
    where
        F: FnMut(&Snapshot) + Send + 'static,
    {
        Self::spawn(clock, interval, Some(Box::new(observer)))
    }

    fn spawn(clock: SharedClock, interval: Duration, observer: Option<Observer>) -> Result<Self> {
        snafu::ensure!(interval != Duration::from_secs(0), ZeroInterval);

        let (sender, receiver) = unbounded();
        let join_handle = thread::Builder::new()
            .name("board-clock-ticker".into())
            .spawn(move || run(clock, interval, observer, receiver))
            .map_err(|source| Error::Spawn { source })?;

        log::debug!(target: "Ticker", "Started with an interval of {:?}", interval);

        Ok(Self {
            sender,
            join_handle: Some(join_handle),
        })
    }

    /// Changes the interval. The schedule restarts, so the next tick happens
    /// one new interval from the moment the request is handled.
    pub fn set_interval(&self, interval: Duration) -> Result<()> {
        snafu::ensure!(interval != Duration::from_secs(0), ZeroInterval);
        self.sender
            .send(Request::SetInterval(interval))
            .map_err(|_| Error::ThreadStopped)
    }

    /// Stops the ticker and waits for its thread to finish. Dropping the
    /// ticker does the same, but swallows the error.
    pub fn stop(mut self) -> Result<()> {
        self.shut_down()
    }

    fn shut_down(&mut self) -> Result<()> {
        let join_handle = match self.join_handle.take() {
            Some(join_handle) => join_handle,
            None => return Ok(()),
        };
        // The thread might already be gone, which joining reports below.
        self.sender.send(Request::End).ok();
        join_handle.join().map_err(|_| Error::ThreadStopped)?;
        log::debug!(target: "Ticker", "Stopped");
        Ok(())
    }
}

enum Request {
    SetInterval(Duration),
    End,
}

fn run(
    clock: SharedClock,
    mut interval: Duration,
    mut observer: Option<Observer>,
    receiver: Receiver<Request>,
) {
    let mut deadline = Instant::now() + interval;
    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        match receiver.recv_timeout(timeout) {
            Ok(Request::SetInterval(new_interval)) => {
                log::info!(target: "Ticker", "New tick interval: {:?}", new_interval);
                interval = new_interval;
                deadline = Instant::now() + interval;
                continue;
            }
            Ok(Request::End) | Err(RecvTimeoutError::Disconnected) => return,
            Err(RecvTimeoutError::Timeout) => {}
        }

        let (before, after) = {
            let mut clock = clock.write();
            let before = clock.snapshot();
            clock.tick();
            (before, clock.snapshot())
        };

        if before.timed_out_player().is_none() {
            if let Some(player) = after.timed_out_player() {
                log::info!(target: "Ticker", "{:?} ran out of time", player);
            }
        }

        if let Some(observer) = &mut observer {
            observer(&after);
        }

        deadline += interval;
        let now = Instant::now();
        if deadline < now {
            // Fell behind by more than an interval. Skip the missed ticks
            // instead of firing them in a burst.
            log::warn!(target: "Ticker", "Ticker fell behind, skipping missed ticks");
            deadline = now + interval;
        }
    }
}
