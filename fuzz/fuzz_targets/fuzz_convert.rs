#![no_main]
use libfuzzer_sys::fuzz_target;
use sdimage::*;

// Layout: [w, h, channels, tw, th, format, samples...]
fuzz_target!(|data: &[u8]| {
    let Some((&[w, h, c, tw, th, f], samples)) = data.split_first_chunk::<6>() else {
        return;
    };
    let channels = 3 + (c & 1);
    let Ok(raster) = DecodedRaster::new(samples, u32::from(w), u32::from(h), channels) else {
        return;
    };
    let format = PixelFormat::ALL[usize::from(f) % 4];
    let out = convert(&raster, u32::from(tw), u32::from(th), format).unwrap();

    let (ew, eh) = target_size(raster.width(), raster.height(), u32::from(tw), u32::from(th));
    assert_eq!((out.width, out.height), (ew, eh));
    assert_eq!(Some(out.data().len()), format.buffer_len(ew as usize, eh as usize));
    for (x, y, _) in out.pixels() {
        assert!(out.pixel(x, y).is_some());
    }
});
