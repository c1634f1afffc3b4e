//! Flat RGB raster frames.

/// An owned 8-bit RGB image: row-major, 3 bytes per pixel.
///
/// Sections and composites are plain flat buffers so this crate stays
/// free of image-codec dependencies; `taquin-obs` converts to and from
/// decoded images at the filesystem boundary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    height: u32,
    width: u32,
    data: Vec<u8>,
}

impl Frame {
    /// A zero-filled (black) frame.
    pub fn new(height: u32, width: u32) -> Self {
        Self {
            height,
            width,
            data: vec![0; height as usize * width as usize * 3],
        }
    }

    /// Wrap a raw RGB buffer. Returns `None` when `data.len()` is not
    /// `height * width * 3`.
    pub fn from_raw(height: u32, width: u32, data: Vec<u8>) -> Option<Self> {
        if data.len() == height as usize * width as usize * 3 {
            Some(Self {
                height,
                width,
                data,
            })
        } else {
            None
        }
    }

    /// Frame height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Frame width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raw RGB bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the frame, returning its raw RGB bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// The `[r, g, b]` pixel at `(row, col)`, or `None` out of bounds.
    pub fn pixel(&self, row: u32, col: u32) -> Option<[u8; 3]> {
        if row < self.height && col < self.width {
            let i = (row as usize * self.width as usize + col as usize) * 3;
            Some([self.data[i], self.data[i + 1], self.data[i + 2]])
        } else {
            None
        }
    }

    /// Copy `src` into this frame with its top-left corner at
    /// `(row, col)`. Source rows and columns falling outside the frame
    /// are clipped.
    pub fn blit(&mut self, src: &Frame, row: u32, col: u32) {
        if row >= self.height || col >= self.width {
            return;
        }
        let rows = src.height.min(self.height - row) as usize;
        let cols = src.width.min(self.width - col) as usize;
        let dst_stride = self.width as usize * 3;
        let src_stride = src.width as usize * 3;
        for r in 0..rows {
            let dst_start = (row as usize + r) * dst_stride + col as usize * 3;
            let src_start = r * src_stride;
            self.data[dst_start..dst_start + cols * 3]
                .copy_from_slice(&src.data[src_start..src_start + cols * 3]);
        }
    }
}
