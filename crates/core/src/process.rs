// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Collection of child process stdout and stderr
//!
//! [`OutputCollector`] is the state machine: it is fed per-channel data and
//! closure notifications plus a single process-exited notification, in any
//! order, and resolves its [`OutputHandle`] exactly once, either with the
//! first error observed on either channel or with the collected `(stdout,
//! stderr)` contents. Line parser callbacks can be installed per channel;
//! a parsed channel's slot in the result is `None`.
//!
//! [`collect_output`] is the tokio driver: it spawns a command with piped
//! output and pumps both pipes through the collector.

use std::io;
use std::process::{ExitStatus, Stdio};

use thiserror::Error;
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::sync::{mpsc, oneshot};

use crate::stream::{LineBuffer, LineCallback};

/// Errors from collecting a process's output
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to spawn process: {0}")]
    Spawn(io::Error),
    #[error("failed to wait for process: {0}")]
    Wait(io::Error),
    #[error("error reading process output: {0}")]
    Stream(#[from] io::Error),
    #[error("process output collection aborted")]
    Aborted,
}

/// One of the two output channels of a child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Stdout,
    Stderr,
}

impl Channel {
    /// The file descriptor conventionally backing the channel.
    pub fn fd(self) -> u32 {
        match self {
            Channel::Stdout => 1,
            Channel::Stderr => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            Channel::Stdout => 0,
            Channel::Stderr => 1,
        }
    }
}

/// The collected `(stdout, stderr)` contents; a slot is `None` when a line
/// parser was installed for that channel.
pub type CollectedOutput = (Option<String>, Option<String>);

/// Single-resolution completion signal of an [`OutputCollector`].
pub struct OutputHandle {
    done: oneshot::Receiver<Result<CollectedOutput, OutputError>>,
}

impl OutputHandle {
    /// Wait for collection to complete.
    pub async fn wait(self) -> Result<CollectedOutput, OutputError> {
        self.done.await.unwrap_or(Err(OutputError::Aborted))
    }
}

/// Per-channel collection state
struct ChannelState {
    buffer: LineBuffer,
    open: bool,
    result: Option<String>,
}

impl ChannelState {
    fn new(parser: Option<LineCallback>) -> Self {
        let buffer = match parser {
            Some(parser) => LineBuffer::new().with_callback(parser),
            None => LineBuffer::new(),
        };
        Self {
            buffer,
            open: true,
            result: None,
        }
    }
}

/// Collects process stdout and stderr.
///
/// Receives zero or more data chunks per channel, exactly one close
/// notification per channel, and exactly one process-exited notification;
/// the order of close and exit notifications is not guaranteed. Once both
/// channels are closed and the process has exited, the completion signal
/// resolves exactly once and the collector is inert.
pub struct OutputCollector {
    channels: [ChannelState; 2],
    error: Option<OutputError>,
    exited: bool,
    done: Option<oneshot::Sender<Result<CollectedOutput, OutputError>>>,
}

impl OutputCollector {
    /// Create a collector retaining the full content of both channels.
    pub fn new() -> (Self, OutputHandle) {
        Self::with_parsers(None, None)
    }

    /// Create a collector with optional per-channel line parsers.
    pub fn with_parsers(
        out_parser: Option<LineCallback>,
        err_parser: Option<LineCallback>,
    ) -> (Self, OutputHandle) {
        let (tx, rx) = oneshot::channel();
        let collector = Self {
            channels: [ChannelState::new(out_parser), ChannelState::new(err_parser)],
            error: None,
            exited: false,
            done: Some(tx),
        };
        (collector, OutputHandle { done: rx })
    }

    /// Receive a chunk of data on a channel.
    pub fn data_received(&mut self, channel: Channel, data: &str) {
        let state = &mut self.channels[channel.index()];
        if !state.open {
            tracing::debug!(fd = channel.fd(), "data received on closed channel");
            return;
        }
        state.buffer.receive_data(data);
    }

    /// A channel was closed, possibly due to a read error.
    ///
    /// The channel's partial line is flushed unconditionally before the
    /// error (if any) is recorded, so completion does not depend on the
    /// ordering of notifications.
    pub fn channel_closed(&mut self, channel: Channel, error: Option<io::Error>) {
        let state = &mut self.channels[channel.index()];
        if !state.open {
            tracing::debug!(fd = channel.fd(), "duplicate channel close");
            return;
        }
        state.buffer.flush_partial();
        state.result = state.buffer.data();
        state.open = false;
        if let Some(error) = error {
            // First error wins
            if self.error.is_none() {
                self.error = Some(OutputError::Stream(error));
            }
        }
        self.check_completion();
    }

    /// The process has exited.
    pub fn process_exited(&mut self) {
        self.exited = true;
        self.check_completion();
    }

    fn check_completion(&mut self) {
        if !self.exited || self.channels.iter().any(|state| state.open) {
            return;
        }
        let Some(done) = self.done.take() else {
            return;
        };
        let result = match self.error.take() {
            Some(error) => Err(error),
            None => {
                let [stdout, stderr] = &mut self.channels;
                Ok((stdout.result.take(), stderr.result.take()))
            }
        };
        let _ = done.send(result);
    }
}

/// The output and exit status of a collected command
#[derive(Debug)]
pub struct CommandOutput {
    /// Full stdout, `None` when an out parser was installed
    pub stdout: Option<String>,
    /// Full stderr, `None` when an err parser was installed
    pub stderr: Option<String>,
    pub status: ExitStatus,
}

enum StreamEvent {
    Data(Channel, String),
    Closed(Channel, Option<io::Error>),
    Exited(io::Result<ExitStatus>),
}

/// Run a command, collecting its output through an [`OutputCollector`].
///
/// The command is spawned with piped stdout/stderr and null stdin. Both
/// pipes are pumped as raw chunks into the collector on a single consumer
/// task, so collector state is only ever mutated serially. Line parsers,
/// when given, are called with each complete line of the matching channel.
pub async fn collect_output(
    command: &mut Command,
    out_parser: Option<LineCallback>,
    err_parser: Option<LineCallback>,
) -> Result<CommandOutput, OutputError> {
    command
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    let mut child = command.spawn().map_err(OutputError::Spawn)?;
    let (mut collector, handle) = OutputCollector::with_parsers(out_parser, err_parser);

    let (tx, mut rx) = mpsc::channel(32);
    match child.stdout.take() {
        Some(stdout) => {
            tokio::spawn(pump(stdout, Channel::Stdout, tx.clone()));
        }
        None => collector.channel_closed(Channel::Stdout, None),
    }
    match child.stderr.take() {
        Some(stderr) => {
            tokio::spawn(pump(stderr, Channel::Stderr, tx.clone()));
        }
        None => collector.channel_closed(Channel::Stderr, None),
    }
    tokio::spawn(async move {
        let status = child.wait().await;
        let _ = tx.send(StreamEvent::Exited(status)).await;
    });

    let mut status = None;
    let mut wait_error = None;
    while let Some(event) = rx.recv().await {
        match event {
            StreamEvent::Data(channel, data) => collector.data_received(channel, &data),
            StreamEvent::Closed(channel, error) => collector.channel_closed(channel, error),
            StreamEvent::Exited(Ok(exit_status)) => {
                status = Some(exit_status);
                collector.process_exited();
            }
            StreamEvent::Exited(Err(error)) => {
                wait_error = Some(error);
                collector.process_exited();
            }
        }
    }

    let (stdout, stderr) = handle.wait().await?;
    if let Some(error) = wait_error {
        return Err(OutputError::Wait(error));
    }
    let status = status.ok_or(OutputError::Aborted)?;
    Ok(CommandOutput {
        stdout,
        stderr,
        status,
    })
}

/// Forward raw chunks from one pipe to the event channel.
async fn pump<R>(mut reader: R, channel: Channel, events: mpsc::Sender<StreamEvent>)
where
    R: tokio::io::AsyncRead + Unpin,
{
    let mut buf = [0u8; 4096];
    loop {
        match reader.read(&mut buf).await {
            Ok(0) => {
                let _ = events.send(StreamEvent::Closed(channel, None)).await;
                return;
            }
            Ok(n) => {
                let data = String::from_utf8_lossy(&buf[..n]).into_owned();
                let _ = events.send(StreamEvent::Data(channel, data)).await;
            }
            Err(error) => {
                let _ = events.send(StreamEvent::Closed(channel, Some(error))).await;
                return;
            }
        }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
