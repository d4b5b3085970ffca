//! Example: Inspecting an Experiment Configuration
//!
//! Walks the loading pipeline end to end: generate a starter document,
//! load it back through every phase, and resolve the typed components a
//! training loop would consume.

use recordar::config::{
    build_classifier, build_eval, build_optimizer, build_scheduler, config_from_str,
    generate_yaml, Template,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Experiment Configuration Example ===\n");

    // Example 1: Generate a starter document
    println!("1. GENERATED PODNET DOCUMENT\n");
    let yaml = generate_yaml(Template::PodnetCnn, None);
    println!("{}", yaml);

    // Example 2: Load it back through the full pipeline
    println!("2. LOADED AND VALIDATED\n");
    let cfg = config_from_str(&yaml)?;
    println!(
        "Experiment: {} / {} on {}",
        cfg.model, cfg.convnet, cfg.dataset
    );
    println!(
        "Memory: {} exemplars ({})",
        cfg.memory_size,
        if cfg.fixed_memory { "fixed" } else { "growing" }
    );

    // Example 3: Resolve the typed components
    println!("\n3. RESOLVED COMPONENTS\n");
    println!("Optimizer:  {:?}", build_optimizer(&cfg)?);
    println!("Evaluation: {:?}", build_eval(&cfg)?);
    println!("Schedule:   {:?}", build_scheduler(&cfg)?);
    let head = build_classifier(&cfg)?;
    println!(
        "Classifier: {:?} with {} proxies, {:?} distance",
        head.kind, head.proxy_per_class, head.distance
    );

    // Example 4: The ramp a distillation term applies across tasks
    if let Some(spatial) = &cfg.pod_spatial {
        println!("\n4. POD SPATIAL RAMP (task size 10)\n");
        for seen in [10, 20, 50, 100] {
            println!(
                "  {:>3} classes seen: factor {:.3}",
                seen,
                spatial.factor_at(seen, 10)
            );
        }
    }

    // Example 5: A document with mistakes gets one aggregated report
    println!("\n5. AGGREGATED VALIDATION REPORT\n");
    let broken = r#"
dataset: cifar100
model: podnet
convnet: rebuffi
epochs: 0
lr: -0.1
optimizer: rmsprop
"#;
    match config_from_str(broken) {
        Ok(_) => println!("unexpectedly valid"),
        Err(e) => println!("{}", e),
    }

    println!("\n=== Example Complete ===");

    Ok(())
}
