#![doc = r#"
romanwords — evaluate Roman-numeral arithmetic and spell the result in English.

Each input line holds two Roman numerals around one of `+ - * /`. The crate
sanitizes the line, decodes both numerals, applies the operator, and renders
the result as words:

```
assert_eq!(romanwords::process("XIV + IX"), "Twenty Three");
assert_eq!(romanwords::process("MCMXCIV / X"), "One Hundred Ninety Nine");
assert_eq!(romanwords::process("no good"), "Invalid input format");
```

Evaluation never fails. Lines that do not split into exactly three fields
produce `"Invalid input format"`; unknown numeral characters count as 0;
subtraction yields the absolute difference; division by zero, unknown
operators, and overflow evaluate to 0.

Individual stages
-----------------
```
use romanwords::{decode, evaluate, sanitize, to_words, Operator};

assert_eq!(sanitize("XIV + IX!\n"), "XIV + IX");
assert_eq!(decode("MCMXCIV"), 1994);
assert_eq!(evaluate(5, 9, Operator::Sub), 4);
assert_eq!(to_words(1_000_001), "One Million One");
```

Processing files
----------------
```rust,no_run
use std::path::Path;
use romanwords::{process_file_to_path, ProcessingParams};

fn main() -> romanwords::Result<()> {
    let report = process_file_to_path(
        Path::new("input.txt"),
        Path::new("output.txt"),
        &ProcessingParams::default(),
    )?;
    println!("processed={} invalid={}", report.processed, report.invalid);
    Ok(())
}
```

Batch helpers
-------------
```rust,no_run
use std::path::Path;
use romanwords::{process_directory_to_path, OutputFormat, ProcessingParams};

fn main() -> romanwords::Result<()> {
    let params = ProcessingParams {
        format: OutputFormat::Json,
        skip_blank: true,
    };
    let report = process_directory_to_path(Path::new("/data/in"), Path::new("/data/out"), &params, true)?;
    println!("processed={} skipped={} errors={}", report.processed, report.skipped, report.errors);
    Ok(())
}
```

Useful modules
--------------
- [`api`] — reader/file/directory drivers.
- [`core`] — the pure evaluation stages and the per-line pipeline.
- [`io`] — result and run-report writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::params::ProcessingParams;
pub use error::{Error, Result};
pub use types::{Operator, OutputFormat};

// Evaluation stages
pub use crate::core::processing::evaluate::evaluate;
pub use crate::core::processing::pipeline::{
    INVALID_INPUT_FORMAT, LineOutcome, ParsedLine, process, process_line, process_lines,
};
pub use crate::core::processing::roman::decode;
pub use crate::core::processing::sanitize::sanitize;
pub use crate::core::processing::words::to_words;

// Writers
pub use io::{RunReport, write_outcome, write_run_report};

// High-level API re-exports
pub use api::{
    BatchReport, iterate_input_files, output_path_for, process_directory_to_path,
    process_file_to_path, process_reader_to_writer,
};
