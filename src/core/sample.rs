use super::{OrgNode, OrgTree};

/// Id of the node the sample chart treats as "my position".
pub const SAMPLE_CURRENT_USER_ID: &str = "eng-frontend-2";

/// Static reporting hierarchy used by demos, tests and benchmarks.
#[must_use]
pub fn sample_organization() -> OrgTree {
    let root = OrgNode::new("ceo", "Maria Oliveira", "Chief Executive Officer").with_children([
        OrgNode::new("cto", "Rafael Souza", "Chief Technology Officer").with_children([
            OrgNode::new("eng-frontend", "Lucia Mendes", "Frontend Lead").with_children([
                OrgNode::new("eng-frontend-1", "Pedro Alves", "Frontend Engineer"),
                OrgNode::new(SAMPLE_CURRENT_USER_ID, "Ana Costa", "Frontend Engineer"),
            ]),
            OrgNode::new("eng-backend", "Tiago Ramos", "Backend Lead").with_children([
                OrgNode::new("eng-backend-1", "Beatriz Lima", "Backend Engineer"),
                OrgNode::new("eng-backend-2", "Jonas Prado", "Platform Engineer"),
            ]),
        ]),
        OrgNode::new("cpo", "Helena Duarte", "Chief People Officer").with_children([
            OrgNode::new("people-learning", "Caio Nunes", "Learning Partner"),
            OrgNode::new("people-wellness", "Isabela Rocha", "Wellness Coordinator"),
        ]),
        OrgNode::new("cfo", "Marcos Teixeira", "Chief Financial Officer"),
    ]);

    match OrgTree::new(root) {
        Ok(tree) => tree,
        Err(err) => unreachable!("sample organization ids are unique: {err}"),
    }
}
