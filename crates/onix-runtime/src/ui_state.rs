//! UI state shared by the overlay widgets

use serde::{Deserialize, Serialize};

/// Upper bound of the volume slider
pub const MAX_VOLUME: u8 = 100;

/// Audio and overlay flags driven by the UI. Independent of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UiState {
    /// Slider value in 0..=100
    volume: u8,
    is_muted: bool,
    is_ui_visible: bool,
    is_loading: bool,
}

impl Default for UiState {
    /// Sound starts muted at volume 30; the overlay is visible and the
    /// loading screen is up until the scene reports ready.
    fn default() -> Self {
        Self {
            volume: 30,
            is_muted: true,
            is_ui_visible: true,
            is_loading: true,
        }
    }
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn is_ui_visible(&self) -> bool {
        self.is_ui_visible
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    /// Set the volume, clamped into 0..=100. Zero mutes, anything else unmutes.
    pub fn set_volume(&mut self, volume: i32) {
        self.volume = volume.clamp(0, MAX_VOLUME as i32) as u8;
        self.is_muted = self.volume == 0;
    }

    pub fn toggle_mute(&mut self) {
        self.is_muted = !self.is_muted;
    }

    pub fn hide_ui(&mut self) {
        self.is_ui_visible = false;
    }

    pub fn show_ui(&mut self) {
        self.is_ui_visible = true;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.is_loading = loading;
    }

    /// Gain for the audio backend in [0, 1], zero while muted
    pub fn effective_gain(&self) -> f32 {
        if self.is_muted {
            0.0
        } else {
            self.volume as f32 / MAX_VOLUME as f32
        }
    }
}
