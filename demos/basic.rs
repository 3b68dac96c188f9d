use flakeid::FlakeId;

fn main() {
    // Create a generator with node 1 and the default layout
    let generator = FlakeId::new(1).unwrap();

    // Generate some IDs
    let id1 = generator.generate_id_safe();
    let id2 = generator.generate_id_safe();
    let id3 = generator.generate_id_safe();

    println!("Generated IDs (guaranteed to be monotonic):");
    for id in [id1, id2, id3] {
        print_id(id, &generator);
    }

    // Or extract components individually
    let ts = generator.extract.timestamp(id3);
    let node = generator.extract.node(id3);
    let seq = generator.extract.sequence(id3);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  Node: {node}");
    println!("  Sequence: {seq}");

    println!("\nLayout:");
    println!("  Node bits: {}", generator.config.node_bits());
    println!("  Sequence bits: {}", generator.config.sequence_bits());
    println!("  Max node: {}", generator.config.max_node());
    println!("  Max sequence: {}", generator.config.max_sequence());
}

fn print_id(id: u64, generator: &FlakeId) {
    let (timestamp, node, sequence) = generator.extract.decompose(id);
    let created = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());
    println!("ID: {id}");
    println!("  Created: {created}");
    println!("  Timestamp: {timestamp}, Node: {node}, Sequence: {sequence}");
}
