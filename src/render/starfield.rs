use rand::prelude::*;

/// CPU-side equirectangular star map, RGBA8 row-major with row 0 at the
/// north pole.
pub struct StarfieldImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

// Faint deep-space tint under the stars
const BACKDROP: [u8; 3] = [2, 3, 7];

impl StarfieldImage {
    /// Scatter `star_count` stars uniformly over the sphere. The same seed
    /// always produces the same image.
    pub fn generate(width: u32, height: u32, star_count: usize, seed: u64) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        for px in pixels.chunks_exact_mut(4) {
            px[..3].copy_from_slice(&BACKDROP);
            px[3] = 255;
        }
        let mut img = Self {
            width,
            height,
            pixels,
        };

        let mut rng = StdRng::seed_from_u64(seed);
        for _ in 0..star_count {
            // Uniform on the sphere: cos(theta) uniform in [-1, 1]
            let y: f32 = rng.gen_range(-1.0..=1.0);
            let u: f32 = rng.gen_range(0.0..1.0);
            let v = y.clamp(-1.0, 1.0).acos() / std::f32::consts::PI;
            // Most stars are dim; a few are bright enough to bloom.
            let brightness = rng.gen::<f32>().powf(6.0);
            let tint: f32 = rng.gen_range(-0.15..=0.15);
            let color = [
                (brightness * (1.0 + tint)).clamp(0.0, 1.0),
                brightness.clamp(0.0, 1.0),
                (brightness * (1.0 - tint)).clamp(0.0, 1.0),
            ];
            let cx = (u * width as f32) as i64;
            let cy = (v * (height - 1) as f32).round() as i64;
            img.splat(cx, cy, color, brightness > 0.35);
        }
        img
    }

    fn splat(&mut self, cx: i64, cy: i64, color: [f32; 3], wide: bool) {
        let radius: i64 = if wide { 1 } else { 0 };
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let falloff = if dx == 0 && dy == 0 { 1.0 } else { 0.35 };
                self.add(cx + dx, cy + dy, color, falloff);
            }
        }
    }

    fn add(&mut self, x: i64, y: i64, color: [f32; 3], weight: f32) {
        if y < 0 || y >= self.height as i64 {
            return;
        }
        // Longitude wraps around the seam.
        let x = x.rem_euclid(self.width as i64);
        let i = ((y as u32 * self.width + x as u32) * 4) as usize;
        for c in 0..3 {
            let add = (color[c] * weight * 255.0) as u16;
            self.pixels[i + c] = (self.pixels[i + c] as u16 + add).min(255) as u8;
        }
    }

    #[inline]
    pub fn bytes_per_row(&self) -> u32 {
        self.width * 4
    }

    #[cfg_attr(not(test), allow(dead_code))]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }
}
