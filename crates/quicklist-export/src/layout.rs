//! Page geometry in millimetres, origin at the top-left corner of a page.

/// Points per millimetre (72 pt per inch, 25.4 mm per inch).
pub const PT_PER_MM: f64 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageLayout {
    pub page_width: f64,
    pub page_height: f64,
    /// Applied on both the left and the right.
    pub margin_side: f64,
    pub margin_top: f64,
}

pub const A4: PageLayout = PageLayout {
    page_width: 210.0,
    page_height: 297.0,
    margin_side: 10.0,
    margin_top: 20.0,
};

/// Where one copy of the image lands on one page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub page: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PageLayout {
    pub fn content_width(&self) -> f64 {
        self.page_width - self.margin_side * 2.0
    }

    /// Height on the page of a `pixel_width` × `pixel_height` raster scaled
    /// to the content width.
    pub fn image_height(&self, pixel_width: u32, pixel_height: u32) -> f64 {
        if pixel_width == 0 {
            return 0.0;
        }
        f64::from(pixel_height) * self.content_width() / f64::from(pixel_width)
    }

    /// Sliding-window placements for an image `image_height` mm tall.
    ///
    /// Page 0 gets the image at the top margin. Every later page gets the same
    /// full image shifted up by what earlier pages consumed, so the page
    /// boundary shows the next slice. `height_left` drops by a full page
    /// height each time, which means the first page only shows
    /// `page_height - margin_top` of the image and the next slice starts at
    /// `page_height`.
    pub fn paginate(&self, image_height: f64) -> Vec<Placement> {
        let width = self.content_width();
        let mut placements = vec![Placement {
            page: 0,
            x: self.margin_side,
            y: self.margin_top,
            width,
            height: image_height,
        }];

        let mut height_left = image_height - self.page_height;
        while height_left > 0.0 {
            placements.push(Placement {
                page: placements.len(),
                x: self.margin_side,
                y: height_left - image_height,
                width,
                height: image_height,
            });
            height_left -= self.page_height;
        }

        placements
    }

    pub fn page_count(&self, image_height: f64) -> usize {
        self.paginate(image_height).len()
    }

    pub fn width_pt(&self) -> f64 {
        self.page_width * PT_PER_MM
    }

    pub fn height_pt(&self) -> f64 {
        self.page_height * PT_PER_MM
    }

    /// PDF user-space y (bottom-left origin) of the bottom edge of a box
    /// whose top is `top` mm from the top of the page.
    pub fn bottom_pt(&self, top: f64, height: f64) -> f64 {
        (self.page_height - top - height) * PT_PER_MM
    }
}
