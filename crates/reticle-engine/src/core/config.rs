use crate::gizmo::GizmoConfig;

/// Context construction options.
#[derive(Debug, Clone)]
pub struct ContextConfig {
    pub gizmo: GizmoConfig,
    /// Vertices reserved per primitive sequence up front.
    pub vertex_capacity: usize,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            gizmo: GizmoConfig::default(),
            vertex_capacity: 1024,
        }
    }
}
