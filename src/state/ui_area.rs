//! UI area positioning for mouse event handling
//!
//! The layout is fixed from the top of the screen, so a mouse row maps to
//! an area without consulting the last drawn frame.
//!
//! # Layout
//!
//! ```text
//! Row 0-2:   Header (3 rows with borders)
//! Row 3:     Form block top border
//! Row 4-6:   Input A
//! Row 7-9:   Input B
//! Row 10-12: Submit button
//! Row 13:    Form block bottom border
//! Row 14+:   Console
//! Bottom:    Status bar (1 row)
//! ```

/// Height of the header (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of one input or button row (top border + content + bottom border)
pub const FIELD_HEIGHT: u16 = 3;

/// Height of the form block: borders plus two inputs and the submit button
pub const FORM_HEIGHT: u16 = 2 + 3 * FIELD_HEIGHT;

/// Clickable regions of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Header,
    InputA,
    InputB,
    Submit,
    Console,
}

impl UiArea {
    /// Get the starting Y row for this UI area (absolute screen position)
    #[inline]
    pub const fn start_y(self) -> u16 {
        match self {
            UiArea::Header => 0,
            UiArea::InputA => HEADER_HEIGHT + 1, // +1 for form border
            UiArea::InputB => HEADER_HEIGHT + 1 + FIELD_HEIGHT,
            UiArea::Submit => HEADER_HEIGHT + 1 + 2 * FIELD_HEIGHT,
            UiArea::Console => HEADER_HEIGHT + FORM_HEIGHT,
        }
    }

    /// Area under an absolute mouse row. Form borders map to nothing.
    pub fn at_row(mouse_row: u16) -> Option<UiArea> {
        let field_rows = |area: UiArea| {
            mouse_row >= area.start_y() && mouse_row < area.start_y() + FIELD_HEIGHT
        };

        if mouse_row < HEADER_HEIGHT {
            Some(UiArea::Header)
        } else if field_rows(UiArea::InputA) {
            Some(UiArea::InputA)
        } else if field_rows(UiArea::InputB) {
            Some(UiArea::InputB)
        } else if field_rows(UiArea::Submit) {
            Some(UiArea::Submit)
        } else if mouse_row >= UiArea::Console.start_y() {
            Some(UiArea::Console)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_y_values() {
        assert_eq!(UiArea::Header.start_y(), 0);
        assert_eq!(UiArea::InputA.start_y(), 4);
        assert_eq!(UiArea::InputB.start_y(), 7);
        assert_eq!(UiArea::Submit.start_y(), 10);
        assert_eq!(UiArea::Console.start_y(), 14);
    }

    #[test]
    fn test_at_row() {
        assert_eq!(UiArea::at_row(0), Some(UiArea::Header));
        assert_eq!(UiArea::at_row(2), Some(UiArea::Header));
        assert_eq!(UiArea::at_row(3), None);
        assert_eq!(UiArea::at_row(4), Some(UiArea::InputA));
        assert_eq!(UiArea::at_row(6), Some(UiArea::InputA));
        assert_eq!(UiArea::at_row(7), Some(UiArea::InputB));
        assert_eq!(UiArea::at_row(10), Some(UiArea::Submit));
        assert_eq!(UiArea::at_row(12), Some(UiArea::Submit));
        assert_eq!(UiArea::at_row(13), None);
        assert_eq!(UiArea::at_row(14), Some(UiArea::Console));
        assert_eq!(UiArea::at_row(40), Some(UiArea::Console));
    }

    #[test]
    fn test_form_height() {
        assert_eq!(FORM_HEIGHT, 11);
    }
}
