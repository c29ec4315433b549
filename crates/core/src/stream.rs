// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Line-buffered collection of streamed text
//!
//! A [`LineBuffer`] caches data until full lines of text are received. With
//! a callback installed it emits each complete line as it becomes available:
//!
//! ```
//! use satchel_core::stream::LineBuffer;
//!
//! let mut lines = Vec::new();
//! let mut buffer = LineBuffer::new().with_callback(move |line| lines.push(line.to_string()));
//! buffer.receive_data("line one\nline two");
//! buffer.receive_data(" continues here\n");
//! ```
//!
//! calls the callback twice, once with `line one` and once with
//! `line two continues here`. Without a callback the buffer accumulates
//! everything for bulk retrieval via [`LineBuffer::data`].

use std::mem;

/// Sink for complete lines of text
pub type LineCallback = Box<dyn FnMut(&str) + Send>;

/// Reassembles streamed chunks into complete lines or a bulk buffer.
pub struct LineBuffer {
    separator: String,
    callback: Option<LineCallback>,
    buffer: String,
    partial: String,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create a buffer in bulk mode, with the default `"\n"` separator.
    pub fn new() -> Self {
        Self {
            separator: "\n".to_string(),
            callback: None,
            buffer: String::new(),
            partial: String::new(),
        }
    }

    /// Set the line separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Install a callback invoked with each complete line.
    ///
    /// With a callback set, no bulk content is retained and
    /// [`data`](Self::data) returns `None`.
    pub fn with_callback<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        self.callback = Some(Box::new(callback));
        self
    }

    /// Receive a chunk of data.
    ///
    /// In bulk mode the chunk is appended verbatim. With a callback set, the
    /// buffered partial line is prepended, every complete non-empty line is
    /// emitted in order, and the trailing fragment after the last separator
    /// becomes the new partial. The result does not depend on how the stream
    /// was split into chunks.
    pub fn receive_data(&mut self, data: &str) {
        let Some(callback) = self.callback.as_mut() else {
            self.buffer.push_str(data);
            return;
        };

        let mut text = mem::take(&mut self.partial);
        text.push_str(data);

        let mut fragments = text.split(self.separator.as_str());
        let mut current = fragments.next().unwrap_or_default();
        for fragment in fragments {
            if !current.is_empty() {
                callback(current);
            }
            current = fragment;
        }
        self.partial = current.to_string();
    }

    /// Flush and process pending data from a partial line.
    ///
    /// A non-empty partial is passed to the callback exactly once and
    /// cleared; an empty partial does not invoke the callback. No-op in
    /// bulk mode.
    pub fn flush_partial(&mut self) {
        let Some(callback) = self.callback.as_mut() else {
            return;
        };
        if self.partial.is_empty() {
            return;
        }
        let partial = mem::take(&mut self.partial);
        callback(&partial);
    }

    /// Return the full content of the stream.
    ///
    /// `None` when a callback is set (bulk content is not retained).
    pub fn data(&self) -> Option<String> {
        if self.callback.is_some() {
            return None;
        }
        let mut data = self.buffer.clone();
        data.push_str(&self.partial);
        Some(data)
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
