//! Recording Navigator

use std::sync::Mutex;

use crate::application::ports::NavigatorPort;

/// 一次导航
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Listing(String),
    Back,
}

/// 记录导航请求的导航器（无真实界面时使用）
pub struct RecordingNavigator {
    listing_path: String,
    history: Mutex<Vec<Navigation>>,
}

impl RecordingNavigator {
    pub fn new(listing_path: impl Into<String>) -> Self {
        Self {
            listing_path: listing_path.into(),
            history: Mutex::new(Vec::new()),
        }
    }

    pub fn history(&self) -> Vec<Navigation> {
        self.lock().clone()
    }

    pub fn listing_visits(&self) -> usize {
        self.lock()
            .iter()
            .filter(|n| matches!(n, Navigation::Listing(_)))
            .count()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Navigation>> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NavigatorPort for RecordingNavigator {
    fn navigate_to_listing(&self) {
        tracing::info!(path = %self.listing_path, "Navigate to listing");
        self.lock().push(Navigation::Listing(self.listing_path.clone()));
    }

    fn navigate_back(&self) {
        tracing::info!("Navigate back");
        self.lock().push(Navigation::Back);
    }
}
