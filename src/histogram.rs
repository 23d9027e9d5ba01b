use crate::image::ImageU8;

/// 256-bin histogram over 8-bit intensities.
pub struct IntensityHistogram {
    bins: [u64; 256],
    total: u64,
}

impl IntensityHistogram {
    pub fn from_view(image: &ImageU8<'_>) -> Self {
        let mut bins = [0u64; 256];
        for px in image.samples() {
            bins[usize::from(px)] += 1;
        }
        let total = bins.iter().sum();
        IntensityHistogram { bins, total }
    }

    pub fn bins(&self) -> &[u64; 256] {
        &self.bins
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count of the tallest bin, used to scale rendered bars.
    pub fn peak(&self) -> u64 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}
