#![no_main]
use libfuzzer_sys::fuzz_target;
use sdimage::{BuiltinDecoder, Decoder, PixelFormat, SourceFormat, convert};

fuzz_target!(|data: &[u8]| {
    // Decoding arbitrary bytes must never panic; whatever decodes must convert.
    for format in [SourceFormat::Jpeg, SourceFormat::Png] {
        let Ok(raster) = BuiltinDecoder.decode(format, data) else {
            continue;
        };
        if u64::from(raster.width()) * u64::from(raster.height()) > 1 << 20 {
            continue;
        }
        let _ = convert(&raster, 0, 0, PixelFormat::Binary);
    }
});
