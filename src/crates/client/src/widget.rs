use crate::api::{ClientError, LikeApi};
use log::{debug, warn};
use parking_lot::Mutex;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LikeState {
    pub like_count: i64,
    pub has_liked: bool,
    pub loading: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Another toggle is still in flight; nothing was sent.
    Busy,
    /// The request went through and the state was re-fetched.
    Done(LikeState),
}

/// Like button state for one user and one post.
///
/// The widget never updates optimistically: every toggle waits for the
/// server and then re-reads both count and status.
pub struct LikeWidget<A: LikeApi> {
    api: A,
    user_id: String,
    post_id: String,
    state: Mutex<LikeState>,
}

// 无论请求成功与否，离开作用域时都清除 loading
struct LoadingGuard<'a> {
    state: &'a Mutex<LikeState>,
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.lock().loading = false;
    }
}

impl<A: LikeApi> LikeWidget<A> {
    pub fn new(api: A, user_id: impl Into<String>, post_id: impl Into<String>) -> Self {
        Self {
            api,
            user_id: user_id.into(),
            post_id: post_id.into(),
            state: Mutex::new(LikeState::default()),
        }
    }

    pub fn state(&self) -> LikeState {
        *self.state.lock()
    }

    /// Fetches count and liked-status concurrently and stores both.
    pub async fn load(&self) -> Result<LikeState, ClientError> {
        let (like_count, has_liked) = futures::try_join!(
            self.api.like_count(&self.post_id),
            self.api.has_liked(&self.user_id, &self.post_id),
        )?;

        let mut state = self.state.lock();
        state.like_count = like_count;
        state.has_liked = has_liked;
        Ok(*state)
    }

    pub async fn toggle(&self) -> Result<Toggle, ClientError> {
        let has_liked = {
            let mut state = self.state.lock();
            if state.loading {
                return Ok(Toggle::Busy);
            }
            state.loading = true;
            state.has_liked
        };
        let _guard = LoadingGuard { state: &self.state };

        debug!(
            "{} post {} as {}",
            if has_liked { "unliking" } else { "liking" },
            self.post_id,
            self.user_id
        );
        let sent = if has_liked {
            self.api.unlike(&self.user_id, &self.post_id).await
        } else {
            self.api.like(&self.user_id, &self.post_id).await
        };
        if let Err(e) = sent {
            warn!("toggle failed for post {}: {}", self.post_id, e);
            return Err(e);
        }

        let mut state = self.load().await?;
        // guard 尚未释放，返回给调用方的快照按请求结束后的状态给出
        state.loading = false;
        Ok(Toggle::Done(state))
    }
}
