//! Miscellaneous math functions for general use

/// Free functions for reducing angles to their canonical ranges.
pub mod angular;

/// Polynomial and trigonometric series evaluation
pub mod series;
