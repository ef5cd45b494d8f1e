#![allow(dead_code)]

use monitor_client::{Backend, Error, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use tokio::sync::{oneshot, watch};

/// What the scripted backend answers with.
#[derive(Debug, Clone)]
pub enum Reply {
    Json(Value),
    Status(u16),
}

/// In-memory [`Backend`]: replies are queued per path and handed out in order.
///
/// A gated reply only resolves once the test sends through the returned
/// sender, which lets a test hold requests in flight.
pub struct ScriptedBackend {
    replies: Mutex<HashMap<String, VecDeque<oneshot::Receiver<Reply>>>>,
    requests: Mutex<Vec<String>>,
    seen: watch::Sender<usize>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        ScriptedBackend {
            replies: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            seen: watch::channel(0).0,
        }
    }

    pub fn reply(&self, path: &str, reply: Reply) -> &Self {
        let (tx, rx) = oneshot::channel();
        tx.send(reply).ok();
        self.push(path, rx);
        self
    }

    pub fn json(&self, path: &str, body: Value) -> &Self {
        self.reply(path, Reply::Json(body))
    }

    pub fn gate(&self, path: &str) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.push(path, rx);
        tx
    }

    /// Paths requested so far, in order.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Resolves once at least `n` requests have been made.
    pub async fn wait_for_requests(&self, n: usize) {
        let mut rx = self.seen.subscribe();
        rx.wait_for(|seen| *seen >= n).await.ok();
    }

    fn push(&self, path: &str, rx: oneshot::Receiver<Reply>) {
        self.replies
            .lock()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push_back(rx);
    }
}

impl Backend for ScriptedBackend {
    async fn get_json<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        {
            self.requests.lock().unwrap().push(path.to_string());
        }
        let pending = {
            let mut replies = self.replies.lock().unwrap();
            replies.get_mut(path).and_then(VecDeque::pop_front)
        };
        self.seen.send_modify(|seen| *seen += 1);

        let Some(pending) = pending else {
            return Err(Error::Status(404));
        };
        match pending.await {
            Ok(Reply::Json(body)) => Ok(serde_json::from_value(body)?),
            Ok(Reply::Status(code)) => Err(Error::Status(code)),
            Err(_) => Err(Error::Status(503)),
        }
    }
}
