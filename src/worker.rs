use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crate::parse::ChordToken;
use crate::sequence::{self, Rendered};
use crate::synth_config::RenderConfig;

/// Handle to a background render: a cancel switch plus the channel the
/// finished (or partial) buffer arrives on. Synthesis owns the buffer
/// exclusively until it reports back, so no locking is needed; playback
/// stays with the caller.
pub struct RenderJob {
    cancel: Arc<AtomicBool>,
    result: Receiver<Rendered>,
    handle: JoinHandle<()>,
}

impl RenderJob {
    /// Raises the cooperative cancel flag. Takes effect at the next chord
    /// boundary; the block in progress is still finished.
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    /// Non-blocking poll for the result.
    pub fn try_recv(&self) -> Option<Rendered> {
        self.result.try_recv().ok()
    }

    /// Blocks until the worker delivers its buffer.
    pub fn join(self) -> Rendered {
        let rendered = self
            .result
            .recv()
            .expect("render worker dropped without a result");
        let _ = self.handle.join();
        rendered
    }
}

/// Runs the synthesis fold on its own thread so the caller stays
/// responsive while a long sequence renders. One message is sent per
/// job: the complete buffer, or the partial one on cancellation.
pub fn spawn(tokens: Vec<ChordToken>, config: RenderConfig) -> RenderJob {
    let cancel = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancel);
    let (tx, rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        let rendered = sequence::assemble(&tokens, &config, &flag);
        let _ = tx.send(rendered);
    });

    RenderJob {
        cancel,
        result: rx,
        handle,
    }
}
