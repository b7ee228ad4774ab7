//! Landing-page image carousel.
//!
//! Rotation state lives here; the frontend only renders the current
//! image. The rotation timer is tied to the landing view's lifecycle
//! and must be stopped on teardown so a dismounted view never
//! advances.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::timer::ViewTimer;

/// Rotation period of the hero carousel.
pub const ROTATION_MILLIS: u64 = 5000;

/// Hero images, rotated in order with wrap-around.
pub const HERO_IMAGES: &[&str] = &[
    "hero-pregnant-woman.jpg",
    "wellness-woman.jpg",
    "nutrition-woman.jpg",
    "education-woman.jpg",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselState {
    pub images: Vec<String>,
    pub current_index: usize,
    pub rotating: bool,
}

pub struct Carousel {
    index: Arc<AtomicUsize>,
    timer: Option<ViewTimer>,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new()
    }
}

impl Carousel {
    pub fn new() -> Self {
        Self {
            index: Arc::new(AtomicUsize::new(0)),
            timer: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.index.load(Ordering::SeqCst)
    }

    /// Advance to the next image, wrapping around.
    pub fn advance(&self) {
        advance_index(&self.index);
    }

    /// Start the rotation timer. Restarting replaces the old timer.
    pub fn start_rotation(&mut self) {
        let index = self.index.clone();
        self.timer = Some(ViewTimer::repeating(
            Duration::from_millis(ROTATION_MILLIS),
            move || advance_index(&index),
        ));
    }

    /// Stop rotating (view teardown). The index keeps its position.
    pub fn stop_rotation(&mut self) {
        self.timer = None;
    }

    pub fn is_rotating(&self) -> bool {
        self.timer.is_some()
    }

    pub fn state(&self) -> CarouselState {
        CarouselState {
            images: HERO_IMAGES.iter().map(|s| s.to_string()).collect(),
            current_index: self.current_index(),
            rotating: self.is_rotating(),
        }
    }
}

fn advance_index(index: &AtomicUsize) {
    let next = (index.load(Ordering::SeqCst) + 1) % HERO_IMAGES.len();
    index.store(next, Ordering::SeqCst);
}
