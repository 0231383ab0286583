use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Smallest error banner: one content row plus borders.
const MIN_BANNER_HEIGHT: u16 = 3;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Splits an error banner tall enough for `message` off the top of the body.
///
/// The banner grows with the wrapped message but never takes more than
/// half of the body.
pub fn split_banner(body: Rect, message: &str) -> (Rect, Rect) {
    let content_rows = wrapped_line_count(message, body.width.saturating_sub(2));
    let wanted = u16::try_from(content_rows)
        .unwrap_or(u16::MAX)
        .saturating_add(2)
        .max(MIN_BANNER_HEIGHT);
    let banner_height = wanted.min((body.height / 2).max(MIN_BANNER_HEIGHT)).min(body.height);
    let banner = Rect {
        height: banner_height,
        ..body
    };
    let rest = Rect {
        y: body.y + banner_height,
        height: body.height - banner_height,
        ..body
    };
    (banner, rest)
}

/// Rows `text` occupies when word-wrapped at `width` columns.
///
/// Words longer than a row are broken across rows, as `Wrap` does.
pub fn wrapped_line_count(text: &str, width: u16) -> usize {
    let width = usize::from(width.max(1));
    let mut rows = 1;
    let mut column = 0;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        let needed = if column == 0 { len } else { column + 1 + len };
        if needed <= width {
            column = needed;
            continue;
        }
        if column > 0 {
            rows += 1;
        }
        rows += len.saturating_sub(1) / width;
        column = match len % width {
            0 => width,
            rest => rest,
        };
    }
    rows
}

/// Result regions: `(vehicle, plates, address)`.
///
/// The image row takes the upper part of the body, split evenly between
/// the vehicle and plate cards; the address section takes the rest.
pub fn result_regions(body: Rect) -> (Rect, Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(40), Constraint::Min(0)])
        .split(body);
    let images = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    (images[0], images[1], rows[1])
}

pub fn centered_rect_by_size(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
