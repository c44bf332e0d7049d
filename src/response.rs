//! Confirmation response bodies. Data endpoints return bare JSON rows;
//! mutations confirm with `{"message": …}` and, for creates, the new id.

use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
    pub message: String,
}

/// Create confirmation carrying the generated id so callers can chain
/// further operations.
#[derive(Serialize)]
pub struct CreatedBody {
    pub message: String,
    pub id: i64,
}

pub fn message(message: impl Into<String>) -> MessageBody {
    MessageBody {
        message: message.into(),
    }
}

pub fn created(message: impl Into<String>, id: i64) -> CreatedBody {
    CreatedBody {
        message: message.into(),
        id,
    }
}
