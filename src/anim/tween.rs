//! Reusable tween handles driving target values over time.
//!
//! A [`Tween`] is built once per action and reused across every state
//! change. Configuring the handle ([`set_play`](Animatable::set_play)) and
//! applying a run's end value and timing ([`set_params`](Animatable::set_params))
//! are separate calls; [`restart`](Animatable::restart) then samples the
//! target's current value and drives it toward the end value on a spawned
//! task. Restarting an in-flight handle cancels and supersedes the previous
//! run: last writer wins, for both parameters and writes.

use crate::anim::completion::{Completion, CompletionSource};
use crate::anim::lerp::Lerp;
use crate::anim::timing::{ConfigError, Timing};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::warn;

/// Playback shape of a handle: how many legs a run plays and whether legs
/// alternate direction.
///
/// `cycles: 1` is a single forward play. With `yoyo`, even-numbered legs run
/// forward and odd-numbered legs run backward, so `cycles: 2, yoyo: true`
/// plays out and back.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    pub cycles: u32,
    pub yoyo: bool,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            cycles: 1,
            yoyo: false,
        }
    }
}

impl PlayConfig {
    /// Validate that at least one cycle is configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cycles == 0 {
            return Err(ConfigError::ZeroCycles);
        }
        Ok(())
    }
}

/// Capability contract for animatable handles.
///
/// Implementable atop any scheduler or animation primitive; [`Tween`] is the
/// tokio-backed implementation. Handle configuration (`set_play`) and
/// end-value application (`set_params`) are deliberately separate calls.
pub trait Animatable<V>: Send {
    /// Configure playback shape. Takes effect on the next restart.
    fn set_play(&mut self, play: PlayConfig);

    /// Set the end value and timing for the next run. Timing is validated
    /// here so a bad configuration surfaces before anything moves.
    fn set_params(&mut self, end: V, timing: Timing) -> Result<(), ConfigError>;

    /// Cancel any in-flight run and start a new one toward the configured
    /// end value. Returns the new run's completion.
    fn restart(&mut self) -> Completion;

    /// Cancel any in-flight run and write the configured end value
    /// immediately. The returned completion is always already resolved.
    fn jump_to_end(&mut self) -> Completion;

    /// Cancel any in-flight run without writing anything.
    fn stop(&mut self);
}

const DEFAULT_FRAME: Duration = Duration::from_millis(16);

/// Tokio-backed tween over a `read`/`write` accessor pair.
///
/// Each restart samples the target's current value through `read` as the
/// run's start, then steps `write` through eased interpolation frames on a
/// spawned task, setting the exact end value on the final frame. Must be
/// used within a tokio runtime.
pub struct Tween<V: Lerp> {
    read: Arc<dyn Fn() -> Option<V> + Send + Sync>,
    write: Arc<dyn Fn(V) + Send + Sync>,
    play: PlayConfig,
    timing: Timing,
    end: Option<V>,
    frame: Duration,
    run: Option<JoinHandle<()>>,
}

impl<V: Lerp> Tween<V> {
    /// Create an idle tween around the target accessors. Nothing runs until
    /// parameters are applied and the tween is restarted.
    pub fn new(
        read: Arc<dyn Fn() -> Option<V> + Send + Sync>,
        write: Arc<dyn Fn(V) + Send + Sync>,
    ) -> Self {
        Self {
            read,
            write,
            play: PlayConfig::default(),
            timing: Timing::default(),
            end: None,
            frame: DEFAULT_FRAME,
            run: None,
        }
    }

    /// Override the interpolation frame interval (default 16ms).
    pub fn with_frame_interval(mut self, frame: Duration) -> Self {
        self.frame = frame;
        self
    }

    /// Whether a run is currently in flight.
    pub fn is_running(&self) -> bool {
        self.run.as_ref().is_some_and(|run| !run.is_finished())
    }
}

impl<V: Lerp> Animatable<V> for Tween<V> {
    fn set_play(&mut self, play: PlayConfig) {
        self.play = play;
    }

    fn set_params(&mut self, end: V, timing: Timing) -> Result<(), ConfigError> {
        timing.validate()?;
        self.end = Some(end);
        self.timing = timing;
        Ok(())
    }

    fn restart(&mut self) -> Completion {
        self.stop();

        let Some(end) = self.end.clone() else {
            warn!("tween restarted before any end value was applied");
            return Completion::ready();
        };
        let Some(from) = (self.read)() else {
            warn!("tween target is unreadable; skipping run");
            return Completion::ready();
        };

        let source = CompletionSource::new();
        let completion = source.subscribe();
        let write = Arc::clone(&self.write);
        let timing = self.timing;
        let play = self.play;
        let frame = self.frame;

        self.run = Some(tokio::spawn(async move {
            drive(from, end, timing, play, frame, write, source).await;
        }));

        completion
    }

    fn jump_to_end(&mut self) -> Completion {
        self.stop();
        match self.end.clone() {
            Some(end) => {
                (self.write)(end);
            }
            None => warn!("tween jumped before any end value was applied"),
        }
        Completion::ready()
    }

    fn stop(&mut self) {
        if let Some(run) = self.run.take() {
            // Aborting drops the run's completion source, releasing waiters.
            run.abort();
        }
    }
}

impl<V: Lerp> Drop for Tween<V> {
    fn drop(&mut self) {
        self.stop();
    }
}

async fn drive<V: Lerp>(
    from: V,
    end: V,
    timing: Timing,
    play: PlayConfig,
    frame: Duration,
    write: Arc<dyn Fn(V) + Send + Sync>,
    source: CompletionSource,
) {
    let delay = timing.delay_duration();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    let duration = timing.play_duration();
    for cycle in 0..play.cycles {
        let forward = !play.yoyo || cycle % 2 == 0;
        let (a, b) = if forward { (&from, &end) } else { (&end, &from) };

        if duration.is_zero() {
            write(b.clone());
            continue;
        }

        let started = tokio::time::Instant::now();
        loop {
            tokio::time::sleep(frame).await;
            let elapsed = started.elapsed();
            if elapsed >= duration {
                write(b.clone());
                break;
            }
            let t = elapsed.as_secs_f32() / duration.as_secs_f32();
            write(V::lerp(a, b, timing.ease.evaluate(t)));
        }
    }

    source.complete();
}
