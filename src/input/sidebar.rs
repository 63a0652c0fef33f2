//! The control strip on the left edge of the window: a vertical zoom-rate
//! slider above a fractal toggle button.

use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::BYTES_PER_PIXEL;
use crate::core::viewport::ZoomRateSlider;

const BACKGROUND: Colour = Colour::rgb(50, 50, 50);
const TRACK: Colour = Colour::rgb(200, 200, 200);
const MARKER: Colour = Colour::rgb(255, 0, 0);
const BUTTON: Colour = Colour::rgb(100, 100, 100);

/// Input for one call of `ExplorerSession::update`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub zoom_rate_input: Option<i32>,
    pub toggle_requested: bool,
}

/// Pointer state as reported by the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointerState {
    pub position: Option<(i32, i32)>,
    pub pressed: bool,
    was_pressed: bool,
}

impl PointerState {
    /// Records a cursor move. Moves captured by an overlay are ignored.
    pub fn move_to(&mut self, position: (i32, i32), captured: bool) {
        if !captured {
            self.position = Some(position);
        }
    }

    pub fn leave(&mut self) {
        self.position = None;
    }

    /// Records a primary button change. A press captured by an overlay never
    /// reaches the sidebar; a release always does, so no press is left stuck.
    pub fn set_pressed(&mut self, pressed: bool, captured: bool) {
        if pressed && captured {
            return;
        }
        self.pressed = pressed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sidebar {
    pub width: i32,
    pub slider: ZoomRateSlider,
    pub track_x: i32,
    pub track_width: i32,
    pub button: Rect,
}

impl Default for Sidebar {
    fn default() -> Self {
        Self {
            width: 100,
            slider: ZoomRateSlider::default(),
            track_x: 10,
            track_width: 10,
            button: Rect {
                x: 10,
                y: 300,
                width: 80,
                height: 40,
            },
        }
    }
}

impl Sidebar {
    #[must_use]
    pub fn with_slider(slider: ZoomRateSlider) -> Self {
        Self {
            slider,
            ..Self::default()
        }
    }

    /// Translates the pointer into session input. Holding the button down
    /// over the slider drags the rate; the toggle fires once per press.
    pub fn frame_input(&self, pointer: &mut PointerState) -> FrameInput {
        let just_pressed = pointer.pressed && !pointer.was_pressed;
        pointer.was_pressed = pointer.pressed;

        let mut input = FrameInput::default();
        let Some((x, y)) = pointer.position else {
            return input;
        };

        if !pointer.pressed || x < 0 || x >= self.width {
            return input;
        }

        if self.slider.contains(y) {
            input.zoom_rate_input = Some(y);
        } else if just_pressed && self.toggle_rows_contain(y) {
            input.toggle_requested = true;
        }

        input
    }

    /// The toggle reacts across the full sidebar width on the button's rows,
    /// bottom row included, so a 40px button spans rows `y..=y + 40`.
    fn toggle_rows_contain(&self, y: i32) -> bool {
        y >= self.button.y && y <= self.button.y + self.button.height
    }

    /// Paints the sidebar over an RGBA frame of `frame_width` pixels per row.
    pub fn draw(&self, frame: &mut [u8], frame_width: u32, zoom_rate: f64, max_zoom_rate: f64) {
        let marker_y = self.slider.marker_y(zoom_rate, max_zoom_rate);

        let rects = [
            (
                Rect {
                    x: 0,
                    y: 0,
                    width: self.width,
                    height: i32::MAX / 2,
                },
                BACKGROUND,
            ),
            (
                Rect {
                    x: self.track_x,
                    y: self.slider.y0,
                    width: self.track_width,
                    height: self.slider.y1 - self.slider.y0,
                },
                TRACK,
            ),
            (
                Rect {
                    x: self.track_x,
                    y: marker_y - 5,
                    width: self.track_width,
                    height: 10,
                },
                MARKER,
            ),
            (self.button, BUTTON),
        ];

        for (rect, colour) in rects {
            fill_rect(frame, frame_width, rect, colour);
        }
    }
}

fn fill_rect(frame: &mut [u8], frame_width: u32, rect: Rect, colour: Colour) {
    if frame_width == 0 {
        return;
    }

    let row_len = frame_width as usize;
    let frame_height = frame.len() / BYTES_PER_PIXEL / row_len;

    let x_start = rect.x.max(0) as usize;
    let x_end = (rect.x.saturating_add(rect.width).max(0) as usize).min(row_len);
    let y_start = rect.y.max(0) as usize;
    let y_end = (rect.y.saturating_add(rect.height).max(0) as usize).min(frame_height);

    for y in y_start..y_end {
        for x in x_start..x_end {
            let index = (y * row_len + x) * BYTES_PER_PIXEL;
            frame[index..index + BYTES_PER_PIXEL]
                .copy_from_slice(&[colour.r, colour.g, colour.b, colour.a]);
        }
    }
}
