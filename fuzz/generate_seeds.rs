#!/usr/bin/env -S cargo +nightly -Zscript
//! Generate seed corpus files for fuzzing.
//! Run: cargo +nightly -Zscript fuzz/generate_seeds.rs

fn main() {
    use std::fs;

    let dir = "fuzz/corpus/fuzz_convert";
    fs::create_dir_all(dir).unwrap();
    // [w, h, channels, tw, th, format, samples...]
    let mut quad = vec![2u8, 2, 0, 4, 4, 1];
    quad.extend_from_slice(&[255, 0, 0, 0, 255, 0, 0, 0, 255, 255, 255, 255]);
    fs::write(format!("{dir}/quad_gray_4x4.bin"), &quad).unwrap();

    let mut rgba = vec![3u8, 1, 1, 0, 0, 2];
    rgba.extend_from_slice(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    fs::write(format!("{dir}/rgba_native_565.bin"), &rgba).unwrap();

    let mut mono = vec![9u8, 1, 0, 0, 0, 0];
    mono.extend(std::iter::repeat_n(129u8, 27));
    fs::write(format!("{dir}/binary_9x1.bin"), &mono).unwrap();

    let dir = "fuzz/corpus/fuzz_decode";
    fs::create_dir_all(dir).unwrap();
    // Truncated/malformed seeds for edge coverage
    fs::write(format!("{dir}/empty.bin"), b"").unwrap();
    fs::write(format!("{dir}/jpeg_soi.bin"), b"\xff\xd8\xff\xe0").unwrap();
    fs::write(format!("{dir}/png_sig.bin"), b"\x89PNG\r\n\x1a\n").unwrap();
    fs::write(
        format!("{dir}/png_ihdr_only.bin"),
        b"\x89PNG\r\n\x1a\n\x00\x00\x00\x0dIHDR\x00\x00\x00\x01\x00\x00\x00\x01\x08\x02\x00\x00\x00",
    )
    .unwrap();

    println!("Generated seed corpora in fuzz/corpus/");
}
