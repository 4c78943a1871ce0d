use serde::{Deserialize, Serialize};

use crate::core::{NodeId, Viewport};
use crate::error::{OrgChartError, OrgChartResult};
use crate::render::Renderer;

use super::OrgChart;

pub const ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Deterministic, serializable view of chart UI state for debugging and
/// regression fixtures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgChartSnapshot {
    pub viewport: Viewport,
    pub zoom: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub highlighted_id: Option<NodeId>,
    pub search_term: String,
    /// Collapsed ids in the order they were collapsed.
    pub collapsed: Vec<NodeId>,
    /// Rendered node ids in pre-order.
    pub rendered: Vec<NodeId>,
    pub tree_node_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrgChartSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: OrgChartSnapshot,
}

impl OrgChartSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> OrgChartResult<String> {
        let payload = OrgChartSnapshotJsonContractV1 {
            schema_version: ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            OrgChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> OrgChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<OrgChartSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: OrgChartSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                OrgChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != ORG_CHART_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(OrgChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> OrgChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> OrgChartSnapshot {
        let (offset_x, offset_y) = self.transform.offset();
        OrgChartSnapshot {
            viewport: self.viewport,
            zoom: self.transform.zoom(),
            offset_x,
            offset_y,
            highlighted_id: self.highlighted_id.clone(),
            search_term: self.search_term.clone(),
            collapsed: self.collapsed.collapsed_ids().cloned().collect(),
            rendered: self.visible_node_ids(),
            tree_node_count: self.tree.len(),
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> OrgChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
