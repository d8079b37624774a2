use serde::{Deserialize, Serialize};

use crate::interaction::{Easing, Transition};

/// Timing and placement of the hover tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipTiming {
    #[serde(default = "default_fade_in_seconds")]
    pub fade_in_seconds: f64,
    #[serde(default = "default_fade_out_seconds")]
    pub fade_out_seconds: f64,
    /// Opacity reached at the end of the fade-in.
    #[serde(default = "default_visible_opacity")]
    pub visible_opacity: f64,
    /// Panel offset from the pointer position.
    #[serde(default = "default_pointer_offset")]
    pub pointer_offset: (f64, f64),
    #[serde(default)]
    pub easing: Easing,
}

impl Default for TooltipTiming {
    fn default() -> Self {
        Self {
            fade_in_seconds: default_fade_in_seconds(),
            fade_out_seconds: default_fade_out_seconds(),
            visible_opacity: default_visible_opacity(),
            pointer_offset: default_pointer_offset(),
            easing: Easing::default(),
        }
    }
}

fn default_fade_in_seconds() -> f64 {
    0.2
}

fn default_fade_out_seconds() -> f64 {
    0.3
}

fn default_visible_opacity() -> f64 {
    0.9
}

fn default_pointer_offset() -> (f64, f64) {
    (15.0, -15.0)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct Fade {
    from: f64,
    to: f64,
    transition: Transition,
}

impl Fade {
    fn opacity(self) -> f64 {
        self.from + (self.to - self.from) * self.transition.progress()
    }
}

/// Public tooltip state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSnapshot {
    pub record_index: Option<usize>,
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
    pub fading: bool,
}

/// Single tooltip instance: which record it describes, where it sits and how
/// opaque it currently is.
///
/// Content stays attached during the fade-out and is released once the panel
/// is fully transparent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipState {
    timing: TooltipTiming,
    record_index: Option<usize>,
    position: (f64, f64),
    opacity: f64,
    fade: Option<Fade>,
}

impl TooltipState {
    #[must_use]
    pub fn new(timing: TooltipTiming) -> Self {
        Self {
            timing,
            record_index: None,
            position: (0.0, 0.0),
            opacity: 0.0,
            fade: None,
        }
    }

    #[must_use]
    pub fn timing(&self) -> TooltipTiming {
        self.timing
    }

    #[must_use]
    pub fn record_index(&self) -> Option<usize> {
        self.record_index
    }

    /// Panel anchor in surface pixels (pointer plus offset).
    #[must_use]
    pub fn position(&self) -> (f64, f64) {
        self.position
    }

    #[must_use]
    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.record_index.is_some() && self.opacity > 0.0
    }

    /// Whether the tooltip is shown or fading in for `record_index`.
    #[must_use]
    pub fn is_showing(&self, record_index: usize) -> bool {
        self.record_index == Some(record_index) && self.target_opacity() > 0.0
    }

    #[must_use]
    pub fn snapshot(&self) -> TooltipSnapshot {
        TooltipSnapshot {
            record_index: self.record_index,
            x: self.position.0,
            y: self.position.1,
            opacity: self.opacity,
            fading: self.fade.is_some(),
        }
    }

    /// Attaches the tooltip to a record and fades it in from the current opacity.
    pub fn show(&mut self, record_index: usize, pointer_x: f64, pointer_y: f64) {
        self.record_index = Some(record_index);
        self.position = (
            pointer_x + self.timing.pointer_offset.0,
            pointer_y + self.timing.pointer_offset.1,
        );
        self.start_fade(self.timing.visible_opacity, self.timing.fade_in_seconds);
    }

    /// Fades the tooltip out from the current opacity.
    pub fn hide(&mut self) {
        if self.record_index.is_none() {
            return;
        }
        self.start_fade(0.0, self.timing.fade_out_seconds);
    }

    /// Advances the active fade. Returns `true` when opacity or content changed.
    pub fn step(&mut self, delta_seconds: f64) -> bool {
        let Some(mut fade) = self.fade else {
            return false;
        };
        fade.transition.advance(delta_seconds);
        let previous = self.opacity;
        self.opacity = fade.opacity();
        if fade.transition.is_finished() {
            self.opacity = fade.to;
            self.fade = None;
            if self.opacity <= 0.0 {
                self.record_index = None;
            }
        } else {
            self.fade = Some(fade);
        }
        self.opacity != previous || self.fade.is_none()
    }

    fn target_opacity(&self) -> f64 {
        self.fade.map_or(self.opacity, |fade| fade.to)
    }

    fn start_fade(&mut self, to: f64, duration_seconds: f64) {
        let fade = Fade {
            from: self.opacity,
            to,
            transition: Transition::new(duration_seconds, self.timing.easing),
        };
        if fade.transition.is_finished() {
            self.opacity = to;
            self.fade = None;
            if to <= 0.0 {
                self.record_index = None;
            }
        } else {
            self.fade = Some(fade);
        }
    }
}
