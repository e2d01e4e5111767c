//! Workspace-level integration tests for OptoLab.
