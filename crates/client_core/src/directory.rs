use std::sync::Arc;

use tracing::{error, info};

use crate::{
    view::{render_directory, ActivityListView, ActivitySelectView, ListContent, DIRECTORY_LOAD_FAILURE},
    ActivityService,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshStatus {
    Rendered { activities: usize },
    Failed,
}

/// Fetches the directory and rebuilds the list and selector regions from it.
pub struct DirectoryRenderer {
    service: Arc<dyn ActivityService>,
    list: Arc<dyn ActivityListView>,
    select: Arc<dyn ActivitySelectView>,
}

impl DirectoryRenderer {
    pub fn new(
        service: Arc<dyn ActivityService>,
        list: Arc<dyn ActivityListView>,
        select: Arc<dyn ActivitySelectView>,
    ) -> Self {
        Self {
            service,
            list,
            select,
        }
    }

    /// Replaces both regions wholesale on success. On failure only the list
    /// region changes; the selector keeps its previous options.
    pub async fn refresh(&self) -> RefreshStatus {
        match self.service.list_activities().await {
            Ok(directory) => {
                let (cards, options) = render_directory(&directory);
                let activities = cards.len();
                self.list.replace(ListContent::Cards(cards));
                self.select.replace_options(options);
                info!(activities, "directory: rendered snapshot");
                RefreshStatus::Rendered { activities }
            }
            Err(err) => {
                error!("directory: error fetching activities: {err}");
                self.list
                    .replace(ListContent::Failed(DIRECTORY_LOAD_FAILURE.to_string()));
                RefreshStatus::Failed
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/directory_tests.rs"]
mod tests;
