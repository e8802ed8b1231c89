//! Binary PPM (`P6`) output.
//!
//! Header is three text lines – `P6`, `width height`, `255` – followed by
//! `width * height` RGB triplets.  Alpha never reaches the file.

use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use super::{Rgba, unpack_color};

/// Encode `pixels` (row-major, `w * h`) as a P6 image into `out`.
pub fn write_ppm<W: Write>(out: &mut W, pixels: &[Rgba], w: usize, h: usize) -> io::Result<()> {
    assert_eq!(pixels.len(), w * h, "frame-buffer size does not match {w}x{h}");
    write!(out, "P6\n{w} {h}\n255\n")?;
    let mut row = Vec::with_capacity(w * 3);
    for line in pixels.chunks(w.max(1)) {
        row.clear();
        for &px in line {
            let (r, g, b, _) = unpack_color(px);
            row.extend_from_slice(&[r, g, b]);
        }
        out.write_all(&row)?;
    }
    Ok(())
}

/// Save a frame to `path`, creating parent directories as needed.
pub fn save_ppm<P: AsRef<Path>>(path: P, pixels: &[Rgba], w: usize, h: usize) -> io::Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let mut out = BufWriter::new(File::create(path)?);
    write_ppm(&mut out, pixels, w, h)?;
    out.flush()
}

/*──────────────────────────────── Tests ───────────────────────────────*/
