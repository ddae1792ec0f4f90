//! Terminal size to pty window-size conversion
//!
//! Application terminal sizes are plain signed integers and can be zero,
//! negative or far too large. The pty window-size call takes four `u16`s, so
//! every field is clamped into that range instead of being truncated.

use anyhow::Context;
use portable_pty::{MasterPty, PtySize};
use serde::{Deserialize, Serialize};

use crate::constants::pty::MAX_WINSIZE_DIMENSION;

/// Terminal extents as reported by the application (unvalidated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TermSize {
    pub rows: i64,
    pub cols: i64,
    #[serde(rename = "xpixel", default)]
    pub x_pixel: i64,
    #[serde(rename = "ypixel", default)]
    pub y_pixel: i64,
}

impl TermSize {
    pub fn new(rows: i64, cols: i64) -> Self {
        Self {
            rows,
            cols,
            x_pixel: 0,
            y_pixel: 0,
        }
    }

    /// Builder: set pixel extents
    pub fn with_pixels(mut self, x_pixel: i64, y_pixel: i64) -> Self {
        self.x_pixel = x_pixel;
        self.y_pixel = y_pixel;
        self
    }

    /// True if converting to a [`Winsize`] changes any field
    pub fn was_clamped(&self) -> bool {
        [self.rows, self.cols, self.x_pixel, self.y_pixel]
            .iter()
            .any(|&v| !(0..=MAX_WINSIZE_DIMENSION).contains(&v))
    }
}

/// OS pty window size (`struct winsize` shape)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Winsize {
    pub rows: u16,
    pub cols: u16,
    /// Width in pixels
    pub x: u16,
    /// Height in pixels
    pub y: u16,
}

/// Clamp one dimension into `0..=u16::MAX`
///
/// Non-positive values mean "unspecified" and become 0.
pub fn to_winsize_dimension(v: i64) -> u16 {
    if v <= 0 {
        return 0;
    }
    u16::try_from(v).unwrap_or(u16::MAX)
}

/// Convert an application terminal size to a pty window size
///
/// Each field is clamped independently; no cross-field checks.
pub fn winsize_from_term_size(size: TermSize) -> Winsize {
    Winsize {
        rows: to_winsize_dimension(size.rows),
        cols: to_winsize_dimension(size.cols),
        x: to_winsize_dimension(size.x_pixel),
        y: to_winsize_dimension(size.y_pixel),
    }
}

impl From<TermSize> for Winsize {
    fn from(size: TermSize) -> Self {
        winsize_from_term_size(size)
    }
}

impl From<Winsize> for PtySize {
    fn from(ws: Winsize) -> Self {
        PtySize {
            rows: ws.rows,
            cols: ws.cols,
            pixel_width: ws.x,
            pixel_height: ws.y,
        }
    }
}

/// Resize a pty to an application terminal size
///
/// Returns the window size actually applied.
pub fn resize_pty(master: &dyn MasterPty, size: TermSize) -> anyhow::Result<Winsize> {
    let winsize = Winsize::from(size);
    if size.was_clamped() {
        tracing::warn!(?size, ?winsize, "terminal size out of range, clamped");
    }

    master
        .resize(winsize.into())
        .with_context(|| format!("failed to resize pty to {}x{}", winsize.rows, winsize.cols))?;

    tracing::debug!(
        rows = winsize.rows,
        cols = winsize.cols,
        x = winsize.x,
        y = winsize.y,
        "pty resized"
    );
    Ok(winsize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_positive_becomes_zero() {
        for v in [0, -1, -5, -65_535, i64::MIN] {
            assert_eq!(to_winsize_dimension(v), 0, "input {}", v);
        }
    }

    #[test]
    fn test_oversized_clamps_to_max() {
        for v in [65_536, 70_000, 1 << 32, i64::MAX] {
            assert_eq!(to_winsize_dimension(v), u16::MAX, "input {}", v);
        }
    }

    #[test]
    fn test_in_range_is_exact() {
        for v in [1, 24, 80, 1_000, 65_534, 65_535] {
            assert_eq!(i64::from(to_winsize_dimension(v)), v);
        }
    }

    #[test]
    fn test_winsize_from_term_size_clamps_each_field() {
        let size = TermSize {
            rows: -5,
            cols: 80,
            x_pixel: 70_000,
            y_pixel: 0,
        };
        assert_eq!(
            winsize_from_term_size(size),
            Winsize {
                rows: 0,
                cols: 80,
                x: 65_535,
                y: 0,
            }
        );
        assert!(size.was_clamped());
    }

    #[test]
    fn test_normal_size_passes_through() {
        let size = TermSize::new(24, 80).with_pixels(640, 384);
        let ws: Winsize = size.into();
        assert_eq!(ws.rows, 24);
        assert_eq!(ws.cols, 80);
        assert_eq!(ws.x, 640);
        assert_eq!(ws.y, 384);
        assert!(!size.was_clamped());
    }

    #[test]
    fn test_pty_size_conversion() {
        let pty: PtySize = Winsize {
            rows: 40,
            cols: 120,
            x: 960,
            y: 800,
        }
        .into();
        assert_eq!(pty.rows, 40);
        assert_eq!(pty.cols, 120);
        assert_eq!(pty.pixel_width, 960);
        assert_eq!(pty.pixel_height, 800);
    }

    #[test]
    fn test_term_size_serde_names() {
        let size: TermSize =
            serde_json::from_str(r#"{"rows": 30, "cols": 100, "xpixel": -1}"#).unwrap();
        assert_eq!(size, TermSize::new(30, 100).with_pixels(-1, 0));
    }

    #[test]
    fn test_resize_native_pty() {
        let pty_system = portable_pty::native_pty_system();
        // Sandboxes without /dev/ptmx can't open a pty; nothing to check there
        let Ok(pair) = pty_system.openpty(PtySize::default()) else {
            return;
        };

        let clamped = TermSize::new(25, 80).with_pixels(-10, 70_000);
        let applied = resize_pty(&*pair.master, clamped).unwrap();
        assert_eq!(
            applied,
            Winsize {
                rows: 25,
                cols: 80,
                x: 0,
                y: 65_535,
            }
        );

        let applied = resize_pty(&*pair.master, TermSize::new(30, 90)).unwrap();
        assert_eq!(applied.rows, 30);
        let current = pair.master.get_size().unwrap();
        assert_eq!(current.rows, 30);
        assert_eq!(current.cols, 90);
    }
}
