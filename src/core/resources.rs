//! Core domain: process-wide time scale service.

use bevy::prelude::*;

use crate::movement::TimeScaleControl;

/// Stack of time scale overrides. The innermost push wins; an empty stack means
/// normal speed.
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct TimeScaleStack {
    factors: Vec<f32>,
}

impl TimeScaleStack {
    pub fn depth(&self) -> usize {
        self.factors.len()
    }
}

impl TimeScaleControl for TimeScaleStack {
    fn push(&mut self, factor: f32) {
        self.factors.push(factor.max(0.0));
    }

    fn pop(&mut self) {
        if self.factors.pop().is_none() {
            warn!("Time scale pop without a matching push");
        }
    }

    fn current(&self) -> f32 {
        self.factors.last().copied().unwrap_or(1.0)
    }
}
