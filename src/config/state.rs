// src/config/state.rs
use super::options::RunOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Codes panel width in points
    pub codes_panel_w: f32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1100,
            window_h: 700,
            codes_panel_w: 160.0,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: RunOptions,
    pub gui: GuiState,
}
