//! Editor Session - 草稿编辑会话
//!
//! 会话独占一个 Draft，并负责提交状态机:
//! `Idle → Validating → Submitting → {Succeeded | Failed}`，失败后回到 `Idle`。

mod editor_session;
mod submission;

pub use editor_session::EditorSession;
pub use submission::{SessionConfig, SessionError, SubmissionState, SubmitOutcome, SubmitStart};
