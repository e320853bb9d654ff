use crate::document::{MergeOutcome, PipelineEvent};
use crate::log_debug;

use super::App;

impl App {
    pub fn handle_pipeline_event(&mut self, event: PipelineEvent) {
        let id = event.id();
        match self.session.apply(event) {
            MergeOutcome::Applied => log_debug!("Decode for {} merged", id),
            MergeOutcome::Discarded(reason) => log_debug!("Decode for {} discarded: {:?}", id, reason),
        }
    }
}
