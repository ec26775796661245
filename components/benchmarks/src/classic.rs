//! Classic program suite
//!
//! Small well-known programs that print text or copy their input.

use crate::runner::{Benchmark, BenchmarkSuite};

/// Input fed to the `cat` benchmark
fn cat_input() -> Vec<u8> {
    (0..64 * 1024).map(|i| b'a' + (i % 26) as u8).collect()
}

/// Create the classic benchmark suite
pub fn create_suite() -> BenchmarkSuite {
    let mut suite = BenchmarkSuite::new("Classic".to_string());

    suite.add(Benchmark::new(
        "hello_world",
        "Prints Hello World!",
        include_str!("../suites/classic/hello_world.b"),
    ));

    suite.add(Benchmark::new(
        "alphabet",
        "Prints A to Z from a counter",
        include_str!("../suites/classic/alphabet.b"),
    ));

    suite.add(Benchmark::new(
        "countdown",
        "Prints the digits 9 down to 0",
        include_str!("../suites/classic/countdown.b"),
    ));

    suite.add(
        Benchmark::new(
            "cat",
            "Copies 64 KiB of input to the output",
            include_str!("../suites/classic/cat.b"),
        )
        .with_input(cat_input()),
    );

    suite
}
