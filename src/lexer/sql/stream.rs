//! Token hand-off from a worker thread.
use std::iter::FusedIterator;
use std::thread::{self, JoinHandle};

use crossbeam::channel::{bounded, select, Receiver, Sender};
use log::debug;

use super::{Lexer, Token};
use crate::error::Error;

/// Tokens produced on a worker thread.
///
/// The worker and the consumer meet on a zero-capacity channel, so the
/// worker never runs more than one token ahead. Dropping the stream, or
/// calling [`TokenStream::cancel`], stops the worker; the drop also waits
/// for it to exit.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Receiver<Token<'static>>,
    /// Dropped to cancel: the worker selects on its disconnection.
    cancel: Option<Sender<()>>,
    worker: Option<JoinHandle<()>>,
}

impl Lexer<'_> {
    /// Scan the remaining input on a dedicated thread.
    ///
    /// Yields the same tokens as [`Lexer::scan_all`], as they are produced.
    pub fn scan_all_tokens(self) -> Result<TokenStream, Error> {
        let input = self.scanner.rest().to_owned();
        let config = self.config;
        let (token_tx, token_rx) = bounded(0);
        let (cancel_tx, cancel_rx) = bounded::<()>(0);

        let worker = thread::Builder::new()
            .name("sqllexer-stream".to_owned())
            .spawn(move || {
                debug!(target: "scanner", "stream started ({} bytes)", input.len());
                for token in Lexer::with_dialect(&input, config) {
                    let token = token.into_owned();
                    select! {
                        send(token_tx, token) -> res => {
                            if res.is_err() {
                                debug!(target: "scanner", "stream receiver dropped");
                                return;
                            }
                        }
                        recv(cancel_rx) -> _ => {
                            debug!(target: "scanner", "stream cancelled");
                            return;
                        }
                    }
                }
                debug!(target: "scanner", "stream exhausted");
            })?;

        Ok(TokenStream {
            tokens: token_rx,
            cancel: Some(cancel_tx),
            worker: Some(worker),
        })
    }
}

impl TokenStream {
    /// Stop the worker; tokens not handed over yet are discarded.
    pub fn cancel(&mut self) {
        self.cancel.take();
    }

    /// Whether [`TokenStream::cancel`] was called
    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_none()
    }
}

impl Iterator for TokenStream {
    type Item = Token<'static>;

    fn next(&mut self) -> Option<Token<'static>> {
        if self.is_cancelled() {
            return None;
        }
        self.tokens.recv().ok()
    }
}

impl FusedIterator for TokenStream {}

impl Drop for TokenStream {
    fn drop(&mut self) {
        self.cancel();
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                debug!(target: "scanner", "stream worker panicked");
            }
        }
    }
}
