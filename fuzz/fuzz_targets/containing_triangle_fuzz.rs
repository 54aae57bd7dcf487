#![no_main]
mod fuzz_shared;
use delaunay_sketch::{triangulate_with_parameters, LocateStrategy, TriangulationParameters};
use fuzz_shared::{check_result, fuzz_bounds, is_in_range, FuzzPoint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: Vec<FuzzPoint>| {
    if !is_in_range(&data) {
        return;
    }
    let parameters =
        TriangulationParameters::new().with_locate_strategy(LocateStrategy::ContainingTriangle);
    let result = triangulate_with_parameters(&data, &fuzz_bounds(), parameters);
    check_result(&data, result);
});
