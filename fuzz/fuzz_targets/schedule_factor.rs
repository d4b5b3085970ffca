#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use recordar::config::{MemoryConfig, RegularizationTermConfig};

/// Fuzz target for schedule and memory arithmetic
///
/// The ramp factor and the per-class budget run once per task inside the
/// training loop. They must stay total over arbitrary class counts.

#[derive(Arbitrary, Debug)]
struct ScheduleFuzzInput {
    factor_tenths: u16,
    seen_classes: u16,
    task_size: u16,
    memory_size: u32,
    fixed_memory: bool,
    total_classes: u16,
}

fuzz_target!(|input: ScheduleFuzzInput| {
    let term = RegularizationTermConfig {
        scheduled_factor: f64::from(input.factor_tenths) / 10.0,
        collapse_channels: None,
    };

    // The ramp stays finite and non-negative for any class counts
    let factor = term.factor_at(input.seen_classes as usize, input.task_size as usize);
    assert!(factor.is_finite());
    assert!(factor >= 0.0);

    // The budget never exceeds the pool, fixed or growing
    let memory = MemoryConfig {
        memory_size: input.memory_size as usize,
        fixed_memory: input.fixed_memory,
    };
    let budget = memory.per_class_budget(
        input.seen_classes as usize,
        input.total_classes as usize,
    );
    assert!(budget <= memory.memory_size);
});
