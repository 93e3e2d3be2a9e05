//! Editor Session - 提交控制器
//!
//! 会话持有 Draft 的唯一所有权。各编辑区通过 `draft_mut` 修改各自的字段，
//! 提交时一次性读取快照组装载荷。

use std::sync::Arc;

use tokio::sync::oneshot::error::TryRecvError;

use super::submission::{spawn_commit, CommitResult, InFlightCommit};
use super::{SessionConfig, SessionError, SubmissionState, SubmitOutcome, SubmitStart};
use crate::application::ports::{NavigatorPort, PostPayload, PostRecord, PostStorePort};
use crate::domain::post::{Draft, FieldError};

/// 草稿编辑会话
///
/// 不变量:
/// - 同一时刻最多一个进行中的提交
/// - 提交失败时草稿保持提交前的状态
/// - 提交成功后会话关闭，不再接受修改
/// - 会话被丢弃时取消进行中的提交
pub struct EditorSession {
    draft: Draft,
    state: SubmissionState,
    field_errors: Vec<FieldError>,
    last_failure: Option<String>,
    in_flight: Option<InFlightCommit>,
    confirmed: Option<PostRecord>,
    store: Arc<dyn PostStorePort>,
    navigator: Arc<dyn NavigatorPort>,
    config: SessionConfig,
}

impl EditorSession {
    pub fn new(
        draft: Draft,
        store: Arc<dyn PostStorePort>,
        navigator: Arc<dyn NavigatorPort>,
        config: SessionConfig,
    ) -> Self {
        Self {
            draft,
            state: SubmissionState::Idle,
            field_errors: Vec::new(),
            last_failure: None,
            in_flight: None,
            confirmed: None,
            store,
            navigator,
            config,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// 获取可变草稿；提交中仍可编辑，但修改只进入下一次提交
    pub fn draft_mut(&mut self) -> Result<&mut Draft, SessionError> {
        self.ensure_open()?;
        Ok(&mut self.draft)
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// 会话级失败提示
    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn dismiss_failure(&mut self) {
        self.last_failure = None;
    }

    /// 保存成功后存储确认的实体
    pub fn confirmed(&self) -> Option<&PostRecord> {
        self.confirmed.as_ref()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_submitting() {
            "Saving..."
        } else if self.draft.is_new() {
            "Create Post"
        } else {
            "Update Post"
        }
    }

    /// 发起提交
    ///
    /// 校验失败时回到 Idle 并返回字段错误，不调用存储。
    /// 校验通过后立即固定载荷并在后台提交；不在 tokio 运行时内时返回
    /// `InvalidOperation`，状态保持不变。
    pub fn begin_submit(&mut self) -> Result<SubmitStart, SessionError> {
        self.ensure_open()?;

        if self.is_submitting() {
            tracing::debug!("Submit ignored: commit already in flight");
            return Ok(SubmitStart::AlreadySubmitting);
        }

        if tokio::runtime::Handle::try_current().is_err() {
            return Err(SessionError::InvalidOperation(
                "submit requires a tokio runtime".to_string(),
            ));
        }

        self.transition(SubmissionState::Validating);
        if let Err(errors) = self.draft.validate() {
            let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
            tracing::warn!(fields = ?fields, "Draft validation failed");
            self.field_errors = errors.clone();
            self.transition(SubmissionState::Idle);
            return Err(SessionError::Validation(errors));
        }

        self.field_errors.clear();
        self.last_failure = None;

        let payload = PostPayload::from(self.draft.snapshot());
        tracing::info!(
            post_id = ?payload.id,
            title = %payload.title,
            tags = payload.tags.len(),
            "Submitting draft"
        );

        self.in_flight = Some(spawn_commit(
            self.store.clone(),
            payload,
            self.config.commit_timeout,
        ));
        self.transition(SubmissionState::Submitting);

        Ok(SubmitStart::Started)
    }

    /// 等待进行中的提交完成并应用结果
    ///
    /// 提交失败不会返回 Err，而是 `SubmitOutcome::Failed`。
    pub async fn settle(&mut self) -> Result<SubmitOutcome, SessionError> {
        let in_flight = self
            .in_flight
            .as_mut()
            .ok_or_else(|| SessionError::InvalidOperation("no commit in flight".to_string()))?;

        let result = match (&mut in_flight.result).await {
            Ok(result) => result,
            Err(_) => Err("commit task ended without a result".to_string()),
        };
        self.in_flight = None;

        Ok(self.finish(result))
    }

    /// 非阻塞地检查提交是否完成
    pub fn try_settle(&mut self) -> Option<SubmitOutcome> {
        let in_flight = self.in_flight.as_mut()?;

        let result = match in_flight.result.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => Err("commit task ended without a result".to_string()),
        };
        self.in_flight = None;

        Some(self.finish(result))
    }

    /// 提交并等待结果
    pub async fn submit(&mut self) -> Result<SubmitOutcome, SessionError> {
        match self.begin_submit()? {
            SubmitStart::Started => self.settle().await,
            SubmitStart::AlreadySubmitting => Ok(SubmitOutcome::AlreadySubmitting),
        }
    }

    /// 放弃编辑并返回上一页，进行中的提交被取消
    pub fn discard(self) {
        if self.state != SubmissionState::Succeeded {
            tracing::info!(
                post_id = ?self.draft.id(),
                submitting = self.is_submitting(),
                "Editor session discarded"
            );
            self.navigator.navigate_back();
        }
    }

    fn finish(&mut self, result: CommitResult) -> SubmitOutcome {
        match result {
            Ok(record) => {
                tracing::info!(post_id = %record.id, "Draft committed");
                self.transition(SubmissionState::Succeeded);
                self.confirmed = Some(record.clone());
                self.navigator.navigate_to_listing();
                SubmitOutcome::Succeeded(record)
            }
            Err(reason) => {
                tracing::warn!(reason = %reason, "Draft commit failed");
                self.transition(SubmissionState::Failed);
                self.last_failure = Some(reason.clone());
                self.transition(SubmissionState::Idle);
                SubmitOutcome::Failed { reason }
            }
        }
    }

    fn transition(&mut self, next: SubmissionState) {
        tracing::debug!(from = self.state.as_str(), to = next.as_str(), "Submission state changed");
        self.state = next;
    }

    fn ensure_open(&self) -> Result<(), SessionError> {
        if self.state == SubmissionState::Succeeded {
            return Err(SessionError::Closed);
        }
        Ok(())
    }
}

impl Drop for EditorSession {
    fn drop(&mut self) {
        if let Some(in_flight) = self.in_flight.take() {
            in_flight.cancel.cancel();
        }
    }
}
