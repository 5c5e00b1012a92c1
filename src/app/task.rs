// SPDX-License-Identifier: GPL-3.0-only

//! Deferred work returned by the update function
//!
//! A [`Task`] is a batch of futures. Each future resolves to exactly one
//! message, which the runtime feeds back through `AppModel::update`.

use futures::FutureExt;
use futures::future::{self, BoxFuture};
use std::future::Future;

#[must_use = "a task does nothing unless handed to the runtime"]
pub struct Task<M> {
    futures: Vec<BoxFuture<'static, M>>,
}

impl<M: Send + 'static> Task<M> {
    /// A task that produces no messages
    pub fn none() -> Self {
        Self {
            futures: Vec::new(),
        }
    }

    /// A task that immediately produces `message`
    pub fn done(message: M) -> Self {
        Self {
            futures: vec![future::ready(message).boxed()],
        }
    }

    /// Run `future` and map its output to a message
    pub fn perform<T, F>(future: F, map: impl FnOnce(T) -> M + Send + 'static) -> Self
    where
        F: Future<Output = T> + Send + 'static,
    {
        Self {
            futures: vec![future.map(map).boxed()],
        }
    }

    /// Combine several tasks into one
    pub fn batch(tasks: impl IntoIterator<Item = Self>) -> Self {
        Self {
            futures: tasks.into_iter().flat_map(|task| task.futures).collect(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.futures.is_empty()
    }

    /// Number of messages this task will produce
    pub fn len(&self) -> usize {
        self.futures.len()
    }

    pub fn into_futures(self) -> Vec<BoxFuture<'static, M>> {
        self.futures
    }
}

impl<M> std::fmt::Debug for Task<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Task({} pending)", self.futures.len())
    }
}
