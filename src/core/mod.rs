pub mod collapse;
pub mod sample;
pub mod transform;
pub mod tree;
pub mod types;

pub use collapse::CollapsedState;
pub use sample::{SAMPLE_CURRENT_USER_ID, sample_organization};
pub use transform::{ViewTransform, ZoomLimits};
pub use tree::{MAX_JSON_TREE_DEPTH, NodeId, OrgNode, OrgTree};
pub use types::{Bounds, Point, Viewport};
