use crate::translate_key;
use core_events::{CHANNEL_SEND_FAILURES, Event};
use crossterm::event::{Event as CEvent, EventStream, KeyEvent as CKeyEvent};
use std::io;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use tokio::sync::{Notify, mpsc::Sender};
use tokio::task;
use tokio_stream::StreamExt;
use tracing::{info, trace, warn};

#[derive(Clone, Debug)]
pub struct AsyncInputShutdown {
    notify: Arc<Notify>,
}

impl AsyncInputShutdown {
    pub fn signal(&self) {
        self.notify.notify_one();
    }
}

#[derive(Clone, Debug)]
struct ShutdownListener {
    notify: Arc<Notify>,
}

impl ShutdownListener {
    fn new_pair() -> (AsyncInputShutdown, Self) {
        let notify = Arc::new(Notify::new());
        (
            AsyncInputShutdown {
                notify: notify.clone(),
            },
            ShutdownListener { notify },
        )
    }

    async fn wait(&self) {
        self.notify.notified().await;
    }
}

pub(crate) fn spawn_async_event_task(
    sender: Sender<Event>,
) -> (task::JoinHandle<()>, AsyncInputShutdown) {
    let (shutdown, listener) = ShutdownListener::new_pair();
    let handle = task::spawn(async move {
        let stream = EventStream::new();
        AsyncEventStreamTask::new(sender, stream, listener)
            .run()
            .await;
    });
    (handle, shutdown)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExitReason {
    ShutdownSignal,
    ChannelClosed,
    StreamEnded,
    StreamError,
}

impl ExitReason {
    fn as_str(&self) -> &'static str {
        match self {
            ExitReason::ShutdownSignal => "shutdown_signal",
            ExitReason::ChannelClosed => "channel_closed",
            ExitReason::StreamEnded => "stream_ended",
            ExitReason::StreamError => "stream_error",
        }
    }
}

struct AsyncEventStreamTask<S>
where
    S: tokio_stream::Stream<Item = io::Result<CEvent>> + Send + Unpin + 'static,
{
    sender: Sender<Event>,
    stream: S,
    shutdown: ShutdownListener,
}

impl<S> AsyncEventStreamTask<S>
where
    S: tokio_stream::Stream<Item = io::Result<CEvent>> + Send + Unpin + 'static,
{
    fn new(sender: Sender<Event>, stream: S, shutdown: ShutdownListener) -> Self {
        Self {
            sender,
            stream,
            shutdown,
        }
    }

    async fn run(mut self) -> ExitReason {
        info!(target: "input", "input_task_started");
        let reason = loop {
            let maybe_result = tokio::select! {
                biased;
                _ = self.shutdown.wait() => break ExitReason::ShutdownSignal,
                result = self.stream.next() => result,
            };
            let Some(result) = maybe_result else {
                break ExitReason::StreamEnded;
            };
            let forwarded = match result {
                Ok(CEvent::Key(key)) => self.handle_key_event(key).await,
                Ok(CEvent::Resize(w, h)) => {
                    trace!(target: "input", w, h, "resize");
                    self.send_event(Event::Resize(w, h)).await
                }
                Ok(_) => true,
                Err(err) => {
                    warn!(target: "input", error_kind = ?err.kind(), "input_stream_error");
                    break ExitReason::StreamError;
                }
            };
            if !forwarded {
                break ExitReason::ChannelClosed;
            }
        };
        info!(target: "input", reason = reason.as_str(), "input_task_stopped");
        reason
    }

    async fn handle_key_event(&mut self, key: CKeyEvent) -> bool {
        let Some(event) = translate_key(&key) else {
            return true;
        };
        trace!(target: "input", code = ?event.code, mods = ?event.mods, "key");
        self.send_event(Event::Key(event)).await
    }

    async fn send_event(&mut self, event: Event) -> bool {
        match self.sender.send(event).await {
            Ok(()) => true,
            Err(_) => {
                CHANNEL_SEND_FAILURES.fetch_add(1, Ordering::Relaxed);
                false
            }
        }
    }
}
