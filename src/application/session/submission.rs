//! Submission - 提交状态与后台提交任务

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{PostPayload, PostRecord, PostStorePort};
use crate::domain::post::FieldError;

/// 会话错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Session closed")]
    Closed,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// 提交状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    /// 空闲，可提交
    Idle,
    /// 校验必填字段（同步，瞬时）
    Validating,
    /// 提交中，禁止再次提交
    Submitting,
    /// 已保存，会话结束
    Succeeded,
    /// 提交失败（瞬时，随即回到 Idle）
    Failed,
}

impl SubmissionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed => "failed",
        }
    }
}

/// 发起提交的结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStart {
    /// 已开始提交
    Started,
    /// 已有提交在进行，本次触发无效
    AlreadySubmitting,
}

/// 一次提交的最终结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// 保存成功，已跳转到列表
    Succeeded(PostRecord),
    /// 保存失败，草稿保持不变
    Failed { reason: String },
    /// 已有提交在进行，本次触发无效
    AlreadySubmitting,
}

/// 会话配置
#[derive(Debug, Clone, Default)]
pub struct SessionConfig {
    /// 本地提交超时，None 表示不限制
    pub commit_timeout: Option<Duration>,
}

pub(super) type CommitResult = Result<PostRecord, String>;

/// 进行中的提交
pub(super) struct InFlightCommit {
    pub cancel: CancellationToken,
    pub result: oneshot::Receiver<CommitResult>,
}

/// 在后台执行提交
///
/// 载荷在调用时已经固定，之后的编辑不会进入本次提交。
/// 取消令牌触发后丢弃存储调用的 future，不再回报结果。
pub(super) fn spawn_commit(
    store: Arc<dyn PostStorePort>,
    payload: PostPayload,
    timeout: Option<Duration>,
) -> InFlightCommit {
    let cancel = CancellationToken::new();
    let (tx, rx) = oneshot::channel();
    let token = cancel.clone();

    tokio::spawn(async move {
        let commit = async {
            match timeout {
                Some(limit) => {
                    match tokio::time::timeout(limit, store.commit_post(&payload)).await {
                        Ok(result) => result.map_err(|e| e.to_string()),
                        Err(_) => Err(format!("commit timed out after {}ms", limit.as_millis())),
                    }
                }
                None => store.commit_post(&payload).await.map_err(|e| e.to_string()),
            }
        };

        // 取消优先：提交 future 在令牌已取消时不会被轮询
        tokio::select! {
            biased;

            _ = token.cancelled() => {
                tracing::info!(post_id = ?payload.id, "Commit cancelled");
            }
            result = commit => {
                // 接收端已不存在时结果直接丢弃
                let _ = tx.send(result);
            }
        }
    });

    InFlightCommit { cancel, result: rx }
}
