use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::raster::Raster;

/// A widget that copies a rendered strip raster into the frame buffer.
///
/// The raster is drawn from the area's top-left corner and clipped to
/// whichever of the two is smaller.
pub struct RasterView<'a> {
    pub raster: &'a Raster,
}

impl<'a> Widget for RasterView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.raster.size();
        let area = area.intersection(buf.area);
        for dy in 0..height.min(area.height) {
            for dx in 0..width.min(area.width) {
                let Some(cell) = self.raster.cell(dx, dy) else {
                    continue;
                };
                let out = &mut buf[(area.x + dx, area.y + dy)];
                out.set_bg(cell.bg.to_ratatui_color());
                match cell.glyph {
                    Some((ch, color)) => {
                        out.set_char(ch).set_fg(color.to_ratatui_color());
                    }
                    None => {
                        out.set_char(' ');
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Hsla;
    use crate::gradient::Surface;
    use ratatui::style::Color;

    #[test]
    fn copies_fill_and_glyphs() {
        let mut raster = Raster::new(4, 3);
        raster.fill_rect(0.0, 0.0, 4.0, 3.0, Hsla::opaque(0.0, 100.0, 50.0));
        raster.stroke_rect(1.0, 0.0, 2.0, 3.0, Hsla::opaque(0.0, 0.0, 100.0));

        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 5));
        RasterView { raster: &raster }.render(Rect::new(2, 1, 6, 3), &mut buf);

        assert_eq!(buf[(2, 1)].bg, Color::Rgb(255, 0, 0));
        assert_eq!(buf[(2, 1)].symbol(), " ");
        assert_eq!(buf[(3, 1)].symbol(), "\u{250c}");
        assert_eq!(buf[(3, 1)].fg, Color::Rgb(255, 255, 255));
        // Outside the raster nothing is touched.
        assert_eq!(buf[(6, 1)].bg, Color::Reset);
        assert_eq!(buf[(2, 0)].bg, Color::Reset);
    }

    #[test]
    fn clips_to_area() {
        let raster = Raster::new(8, 3);
        let mut buf = Buffer::empty(Rect::new(0, 0, 4, 2));
        RasterView { raster: &raster }.render(Rect::new(0, 0, 4, 2), &mut buf);
        assert_eq!(buf[(3, 1)].bg, Color::Rgb(0, 0, 0));
    }
}
