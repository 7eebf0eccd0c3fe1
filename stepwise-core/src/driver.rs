//! Async transition driver
//!
//! Runs a carousel on its own tokio task so hosts that render from a
//! subscription (rather than polling) learn when the transition lock
//! releases. The task owns the carousel outright; the handle talks to it over
//! a command channel and reads state from a `watch` channel.
//!
//! The completion timer is tied to the handle's lifetime: dropping the handle
//! (or calling [`CarouselHandle::shutdown`]) cancels the task, so nothing
//! touches the carousel after its host view is torn down.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::{CancellationToken, DropGuard};
use tracing::{debug, trace};

use crate::carousel::{
    Carousel, CarouselConfig, CarouselSnapshot, IndexObserver, Navigation,
    SubscriptionId,
};
use crate::clock::TokioClock;
use crate::constants::driver::COMMAND_BUFFER;
use crate::error::{CarouselResult, DriverError};

enum Command {
    Next(oneshot::Sender<Navigation>),
    Previous(oneshot::Sender<Navigation>),
    GoTo(usize, oneshot::Sender<CarouselResult<Navigation>>),
    SetLen(usize, oneshot::Sender<()>),
    Subscribe(Box<dyn IndexObserver>, oneshot::Sender<SubscriptionId>),
}

/// Owner-side handle to a carousel running on a tokio task.
#[derive(Debug)]
pub struct CarouselHandle {
    commands: mpsc::Sender<Command>,
    snapshots: watch::Receiver<CarouselSnapshot>,
    task: JoinHandle<()>,
    _cancel: DropGuard,
}

/// Spawn `carousel` onto the current tokio runtime.
///
/// The carousel must use [`TokioClock`] so its deadlines agree with the
/// runtime's timer (including paused test time).
pub fn spawn_carousel(carousel: Carousel<TokioClock>) -> CarouselHandle {
    let (commands, rx) = mpsc::channel(COMMAND_BUFFER);
    let (tx, snapshots) = watch::channel(carousel.snapshot());
    let cancel = CancellationToken::new();
    let task = tokio::spawn(run(carousel, rx, tx, cancel.clone()));
    CarouselHandle {
        commands,
        snapshots,
        task,
        _cancel: cancel.drop_guard(),
    }
}

impl CarouselHandle {
    /// Build a [`TokioClock`] carousel and spawn it.
    pub fn spawn(
        len: usize,
        initial_index: usize,
        config: CarouselConfig,
    ) -> CarouselResult<Self> {
        let carousel =
            Carousel::with_clock(len, initial_index, config, TokioClock)?;
        Ok(spawn_carousel(carousel))
    }

    pub async fn next(&self) -> Result<Navigation, DriverError> {
        self.request(Command::Next).await
    }

    pub async fn previous(&self) -> Result<Navigation, DriverError> {
        self.request(Command::Previous).await
    }

    pub async fn go_to(
        &self,
        target: usize,
    ) -> Result<Navigation, DriverError> {
        let result = self.request(|tx| Command::GoTo(target, tx)).await?;
        Ok(result?)
    }

    pub async fn set_len(&self, len: usize) -> Result<(), DriverError> {
        self.request(|tx| Command::SetLen(len, tx)).await
    }

    /// Register an observer that runs on the driver task.
    pub async fn subscribe(
        &self,
        observer: impl IndexObserver + 'static,
    ) -> Result<SubscriptionId, DriverError> {
        let observer: Box<dyn IndexObserver> = Box::new(observer);
        self.request(|tx| Command::Subscribe(observer, tx)).await
    }

    /// Latest published state.
    pub fn snapshot(&self) -> CarouselSnapshot {
        *self.snapshots.borrow()
    }

    /// A receiver that wakes on every published state change.
    pub fn watch(&self) -> watch::Receiver<CarouselSnapshot> {
        self.snapshots.clone()
    }

    /// Cancel the task (including any pending completion timer) and wait for
    /// it to exit.
    pub async fn shutdown(self) {
        let CarouselHandle {
            commands,
            task,
            _cancel: guard,
            ..
        } = self;
        drop(commands);
        guard.disarm().cancel();
        let _ = task.await;
    }

    async fn request<T>(
        &self,
        build: impl FnOnce(oneshot::Sender<T>) -> Command,
    ) -> Result<T, DriverError> {
        let (tx, rx) = oneshot::channel();
        self.commands
            .send(build(tx))
            .await
            .map_err(|_| DriverError::Closed)?;
        rx.await.map_err(|_| DriverError::Closed)
    }
}

async fn run(
    mut carousel: Carousel<TokioClock>,
    mut commands: mpsc::Receiver<Command>,
    snapshots: watch::Sender<CarouselSnapshot>,
    cancel: CancellationToken,
) {
    loop {
        let deadline = carousel
            .pending_deadline()
            .map(tokio::time::Instant::from_std);

        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("carousel driver cancelled");
                break;
            }
            _ = sleep_until(deadline), if deadline.is_some() => {
                if let Some(done) = carousel.settle() {
                    trace!(to = done.to, "driver released transition lock");
                    snapshots.send_replace(carousel.snapshot());
                }
            }
            command = commands.recv() => {
                let Some(command) = command else {
                    debug!("carousel handle dropped");
                    break;
                };
                apply(&mut carousel, command, &snapshots);
            }
        }
    }
}

async fn sleep_until(deadline: Option<tokio::time::Instant>) {
    if let Some(deadline) = deadline {
        tokio::time::sleep_until(deadline).await;
    }
}

/// Apply one command; the snapshot is published before the caller is
/// answered so a reply never races ahead of observable state.
fn apply(
    carousel: &mut Carousel<TokioClock>,
    command: Command,
    snapshots: &watch::Sender<CarouselSnapshot>,
) {
    match command {
        Command::Next(reply) => {
            let nav = carousel.go_to_next();
            snapshots.send_replace(carousel.snapshot());
            let _ = reply.send(nav);
        }
        Command::Previous(reply) => {
            let nav = carousel.go_to_previous();
            snapshots.send_replace(carousel.snapshot());
            let _ = reply.send(nav);
        }
        Command::GoTo(target, reply) => {
            let nav = carousel.go_to_index(target);
            snapshots.send_replace(carousel.snapshot());
            let _ = reply.send(nav);
        }
        Command::SetLen(len, reply) => {
            carousel.set_len(len);
            snapshots.send_replace(carousel.snapshot());
            let _ = reply.send(());
        }
        Command::Subscribe(observer, reply) => {
            let id = carousel.subscribe_boxed(observer);
            let _ = reply.send(id);
        }
    }
}
