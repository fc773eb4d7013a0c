//! Workspace-level integration tests for matmul-rs live under `tests/`.
