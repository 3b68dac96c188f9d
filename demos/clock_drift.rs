use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use flakeid::{Clock, FlakeId, FlakeIdError};

/// Wall clock with an adjustable offset, standing in for an NTP step
struct SkewedClock {
    offset_ms: AtomicI64,
}

impl SkewedClock {
    fn step(&self, delta_ms: i64) {
        self.offset_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }
}

impl Clock for SkewedClock {
    fn current_millis(&self) -> u64 {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        (wall + self.offset_ms.load(Ordering::SeqCst)) as u64
    }
}

fn main() -> Result<(), FlakeIdError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let generator = FlakeId::builder()
        .node_bits(8)?
        .node(42)?
        .build_with_clock(SkewedClock {
            offset_ms: AtomicI64::new(0),
        });

    let before = generator.generate_id()?;
    println!("Before the step: {before}");

    // The clock jumps 250ms into the past
    generator.clock().step(-250);

    match generator.generate_id() {
        Ok(id) => println!("Unexpected success: {id}"),
        Err(drift) => {
            let now = generator.clock().current_millis();
            println!("generate_id refused: {drift}");
            println!("  {}ms to go", drift.remaining_millis(now));
        }
    }

    // The safe variant logs a warning and blocks until the clock catches up
    let after = generator.generate_id_safe();
    println!("After waiting: {after}");
    assert!(after > before);

    Ok(())
}
