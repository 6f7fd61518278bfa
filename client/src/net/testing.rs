//! Test doubles shared by the networking and action tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::api::{ApiError, ApiRequest, ApiResponse, Transport};

/// Transport that replays queued responses and records every request.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<ApiResponse, ApiError>>>>,
    sent: Arc<Mutex<Vec<ApiRequest>>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, status: u16, body: serde_json::Value) -> Self {
        self.push(Ok(ApiResponse { status, body: body.to_string() }))
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.push(Ok(ApiResponse { status, body: body.to_owned() }))
    }

    pub fn fail(self, error: ApiError) -> Self {
        self.push(Err(error))
    }

    pub fn sent(&self) -> Vec<ApiRequest> {
        self.sent.lock().unwrap().clone()
    }

    fn push(self, reply: Result<ApiResponse, ApiError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

impl Transport for ScriptedTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.sent.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted reply".to_owned())))
    }
}

pub fn user_json(id: &str, username: &str, role: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": format!("{username} name"),
        "username": username,
        "role": role,
        "email": format!("{username}@example.com"),
        "createdAt": "2021-06-01T10:00:00.000Z"
    })
}

pub fn auth_json(token: &str, id: &str, username: &str, role: &str) -> serde_json::Value {
    serde_json::json!({ "access_token": token, "user": user_json(id, username, role) })
}
