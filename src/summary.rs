use serde::Serialize;

use crate::filter::VisibleDataset;

/// The dashboard's headline numbers for one refresh.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SummaryCounts {
    pub docked: usize,
    pub dockless: usize,
    pub total: usize,
}

impl SummaryCounts {
    pub fn of(visible: &VisibleDataset) -> SummaryCounts {
        let docked = visible.docked.len();
        let dockless = visible.dockless.len();

        SummaryCounts {
            docked,
            dockless,
            total: docked + dockless,
        }
    }
}
