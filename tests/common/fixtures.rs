//! Static log bodies used across harnesses.
//!
//! Every body is the exact text of a log file, tabs and newlines included.

/// Baseline from the worked example: `a` takes 10 units, `b` takes 20.
pub const BASE_TWO: &str = "10.0\ta\n20.0\tb\n";

/// Runs twice as fast as [`BASE_TWO`] on both benchmarks.
pub const HALF_TWO: &str = "5.0\ta\n10.0\tb\n";

/// Like [`HALF_TWO`] but `a` failed and logged a zero time.
pub const ZERO_FIRST: &str = "0.0\ta\n10.0\tb\n";

/// A baseline whose `a` run logged a zero time.
pub const ZERO_BASE: &str = "0.0\ta\n20.0\tb\n";

/// Three-row baseline, for shape mismatches.
pub const BASE_THREE: &str = "1.0\ta\n2.0\tb\n3.0\tc\n";

/// A SPEC-like baseline with a header comment and a trailing blank line.
pub const BASE_SPEC: &str = "\
# time\tbench
312.4\tperlbench
401.9\tgcc
259.0\tmcf
188.7\tomnetpp

";

/// A run of [`BASE_SPEC`] with a mix of gains and losses.
pub const RUN_SPEC: &str = "\
# time\tbench
296.8\tperlbench
421.0\tgcc
233.1\tmcf
190.6\tomnetpp
";

/// Only comments.
pub const COMMENTS_ONLY: &str = "# time\tbench\n# nothing ran\n";

/// Workload-scaling baseline: `<workloads>\t<time>`.
pub const SCALING_BASE: &str = "0\t10.0\n2\t15.0\n4\t20.0\n";

/// Workload-scaling comparison.
pub const SCALING_CFS: &str = "0\t12.0\n2\t18.0\n4\t30.0\n";

/// Workload-scaling baseline whose reference (first) time is zero.
pub const SCALING_ZERO_BASE: &str = "0\t0.0\n2\t15.0\n";
