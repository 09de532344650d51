//! Coordinate conversion between layout rects and wry rects.

use skiff_common::Rect;

/// Convert a layout `Rect` (f64 logical coords) to a wry `Rect`.
pub fn rect_to_wry(rect: &Rect) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(rect.x, rect.y)),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(rect.width, rect.height)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_converts_to_logical_wry_rect() {
        let wry_rect = rect_to_wry(&Rect {
            x: 0.0,
            y: 96.0,
            width: 1024.0,
            height: 672.0,
        });

        match wry_rect.position {
            wry::dpi::Position::Logical(pos) => {
                assert!(pos.x.abs() < f64::EPSILON);
                assert!((pos.y - 96.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical position"),
        }
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!((size.width - 1024.0).abs() < f64::EPSILON);
                assert!((size.height - 672.0).abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }

    #[test]
    fn zero_rect_converts() {
        let wry_rect = rect_to_wry(&Rect::default());
        match wry_rect.size {
            wry::dpi::Size::Logical(size) => {
                assert!(size.width.abs() < f64::EPSILON);
                assert!(size.height.abs() < f64::EPSILON);
            }
            _ => panic!("Expected logical size"),
        }
    }
}
