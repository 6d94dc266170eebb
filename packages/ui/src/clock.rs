//! Shared clock tick source.
//!
//! One ticker per process publishes the current wall-clock second on a
//! `watch` channel. Every relative-time label subscribes to the same
//! channel, so N labels cost one timer and always agree on "now". The
//! ticker stops by itself once the last subscriber is gone and the next
//! subscription starts a fresh one.

use std::pin::pin;
use std::rc::Rc;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use dioxus::core::spawn_forever;
use dioxus::prelude::*;
use futures_util::future::{self, Either};
use queue_core::Tick;
use tokio::sync::watch;

/// Cadence of the process-wide clock.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Publisher of the shared [`Tick`].
pub struct ClockSource {
    cadence: Duration,
    now: fn() -> Tick,
    sender: Mutex<Option<watch::Sender<Tick>>>,
}

/// A live subscription to a [`ClockSource`].
pub struct Subscription {
    /// Latest tick; dropping it unsubscribes.
    pub receiver: watch::Receiver<Tick>,
    /// Set when no ticker was running. The caller must drive it.
    pub ticker: Option<Ticker>,
}

/// The timer loop behind a [`ClockSource`].
pub struct Ticker {
    sender: watch::Sender<Tick>,
    cadence: Duration,
    now: fn() -> Tick,
}

impl ClockSource {
    pub const fn new(cadence: Duration) -> Self {
        Self::with_time_source(cadence, Tick::now)
    }

    /// A clock reading "now" from `now` instead of the system clock.
    pub const fn with_time_source(cadence: Duration, now: fn() -> Tick) -> Self {
        Self {
            cadence,
            now,
            sender: Mutex::new(None),
        }
    }

    /// The process-wide clock, ticking every [`TICK_INTERVAL`].
    pub fn global() -> &'static ClockSource {
        static GLOBAL: ClockSource = ClockSource::new(TICK_INTERVAL);
        &GLOBAL
    }

    /// Subscribe to ticks, creating the ticker if none is running.
    pub fn subscribe(&self) -> Subscription {
        let mut slot = self.sender.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(sender) = slot.as_ref().filter(|sender| !sender.is_closed()) {
            return Subscription {
                receiver: sender.subscribe(),
                ticker: None,
            };
        }

        let (sender, receiver) = watch::channel((self.now)());
        *slot = Some(sender.clone());
        tracing::debug!(cadence_ms = self.cadence.as_millis() as u64, "Starting clock ticker");

        Subscription {
            receiver,
            ticker: Some(Ticker {
                sender,
                cadence: self.cadence,
                now: self.now,
            }),
        }
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.sender
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map_or(0, |sender| sender.receiver_count())
    }

    /// Whether anyone is still listening to the current ticker.
    pub fn is_live(&self) -> bool {
        self.subscriber_count() > 0
    }
}

impl Ticker {
    /// Publish a new tick every cadence until every receiver is dropped.
    ///
    /// A tick is only published when the second moved forward, so
    /// subscribers never see time go backwards or wake for nothing.
    pub async fn run(self) {
        loop {
            let wait = pin!(sleep(self.cadence));
            let closed = pin!(self.sender.closed());
            if let Either::Right(_) = future::select(wait, closed).await {
                break;
            }

            let now = (self.now)();
            self.sender.send_if_modified(|current| {
                if now > *current {
                    *current = now;
                    true
                } else {
                    false
                }
            });
        }
        tracing::debug!("Clock ticker stopped, no subscribers left");
    }
}

/// Sleep on whichever timer the target provides.
pub(crate) async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(duration.as_millis() as u32).await;

    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Current tick of the process-wide clock.
///
/// The calling component re-renders whenever the second changes. The
/// subscription ends when the component unmounts.
pub fn use_clock_tick() -> Tick {
    use_clock_tick_with(ClockSource::global())
}

/// Current tick of `clock`, as seen by every other subscriber.
///
/// A newly mounted component starts from the value already on the channel,
/// never from the wall clock, so it agrees with labels mounted earlier.
pub fn use_clock_tick_with(clock: &'static ClockSource) -> Tick {
    let receiver = use_hook(move || {
        let Subscription { receiver, ticker } = clock.subscribe();

        if let Some(ticker) = ticker {
            let _ = spawn_forever(ticker.run());
        }

        Rc::new(receiver)
    });
    let mut tick = use_signal(|| *watch::Receiver::borrow(&receiver));

    use_hook(move || {
        let mut receiver = (*receiver).clone();
        spawn(async move {
            loop {
                let current = *receiver.borrow_and_update();
                if *tick.peek() < current {
                    tick.set(current);
                }
                if receiver.changed().await.is_err() {
                    break;
                }
            }
        });
    });

    tick()
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    thread_local! {
        static FAKE_NOW: Cell<i64> = const { Cell::new(0) };
    }

    fn fake_now() -> Tick {
        Tick(FAKE_NOW.with(Cell::get))
    }

    fn set_now(secs: i64) {
        FAKE_NOW.with(|now| now.set(secs));
    }

    fn clock() -> ClockSource {
        ClockSource::with_time_source(Duration::from_secs(1), fake_now)
    }

    #[tokio::test(start_paused = true)]
    async fn subscribers_share_one_ticker() {
        set_now(100);
        let clock = clock();

        let first = clock.subscribe();
        let second = clock.subscribe();
        assert!(second.ticker.is_none());
        assert_eq!(clock.subscriber_count(), 2);

        let ticker = tokio::spawn(first.ticker.expect("first subscription starts the ticker").run());
        let mut a = first.receiver;
        let mut b = second.receiver;
        assert_eq!(*a.borrow(), Tick(100));

        set_now(101);
        a.changed().await.expect("ticker alive");
        b.changed().await.expect("ticker alive");
        assert_eq!(*a.borrow(), Tick(101));
        assert_eq!(*b.borrow(), Tick(101));

        drop(a);
        drop(b);
        ticker.await.expect("ticker exits cleanly");
        assert!(!clock.is_live());
    }

    #[tokio::test(start_paused = true)]
    async fn publishes_only_forward_moves() {
        set_now(500);
        let clock = clock();
        let sub = clock.subscribe();
        let ticker = tokio::spawn(sub.ticker.expect("fresh ticker").run());
        let mut rx = sub.receiver;

        tokio::time::sleep(Duration::from_millis(3_500)).await;
        assert!(!rx.has_changed().expect("ticker alive"));

        set_now(499);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(!rx.has_changed().expect("ticker alive"));
        assert_eq!(*rx.borrow(), Tick(500));

        set_now(502);
        rx.changed().await.expect("ticker alive");
        assert_eq!(*rx.borrow_and_update(), Tick(502));

        drop(rx);
        ticker.await.expect("ticker exits cleanly");
    }

    #[tokio::test(start_paused = true)]
    async fn restarts_after_last_subscriber_leaves() {
        set_now(10);
        let clock = clock();

        let sub = clock.subscribe();
        let ticker = tokio::spawn(sub.ticker.expect("fresh ticker").run());
        assert!(clock.is_live());

        drop(sub.receiver);
        ticker.await.expect("ticker exits cleanly");
        assert_eq!(clock.subscriber_count(), 0);

        let again = clock.subscribe();
        assert!(again.ticker.is_some());
        assert_eq!(clock.subscriber_count(), 1);
    }

    static SHARED: ClockSource = ClockSource::with_time_source(Duration::from_secs(1), fake_now);

    #[component]
    fn TickText() -> Element {
        let tick = use_clock_tick_with(&SHARED);
        rsx! { "{tick}" }
    }

    #[test]
    fn late_mounts_agree_with_earlier_labels() {
        set_now(100);
        let mut first = VirtualDom::new(TickText);
        first.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&first), "100");

        // The wall clock moves on before the shared ticker fires.
        set_now(101);
        let mut second = VirtualDom::new(TickText);
        second.rebuild_in_place();

        assert_eq!(dioxus_ssr::render(&second), "100");
        assert_eq!(dioxus_ssr::render(&first), dioxus_ssr::render(&second));
        assert_eq!(SHARED.subscriber_count(), 4);
    }
}
