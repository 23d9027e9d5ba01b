/// Generates a uniform grayscale page.
pub fn uniform_u8(width: usize, height: usize, shade: u8) -> Vec<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    vec![shade; width * height]
}

/// Generates a top-to-bottom linear gradient from black to white.
pub fn gradient_u8(width: usize, height: usize) -> Vec<u8> {
    assert!(width > 0 && height > 1, "gradient needs at least two rows");
    let mut img = vec![0u8; width * height];
    for y in 0..height {
        let shade = (y * 255 / (height - 1)) as u8;
        img[y * width..(y + 1) * width].fill(shade);
    }
    img
}
