use stratum_core::ContainerId;

/// Usage errors reported by a virtualizing panel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PanelError {
    #[error("container {container} is not a child of this panel")]
    NotAChild { container: ContainerId },
}
