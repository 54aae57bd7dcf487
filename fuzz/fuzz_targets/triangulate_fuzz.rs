#![no_main]
mod fuzz_shared;
use fuzz_shared::{check_result, fuzz_bounds, is_in_range, FuzzPoint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<FuzzPoint>| {
    if !is_in_range(&data) {
        return;
    }
    let result = delaunay_sketch::triangulate(&data, &fuzz_bounds());
    check_result(&data, result);
});
