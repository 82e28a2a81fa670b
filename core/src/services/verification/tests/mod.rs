//! Tests for verification collaborators
